//! A point mass steered by the simulation.

use bevy::ecs::component::Component;
use bevy::ecs::system::EntityCommand;
use bevy::ecs::world::EntityWorldMut;
use bevy::math::Vec3;
use math::{KinematicState, Limits, Phase};

/// Marker component for agent entities.
#[derive(Component)]
pub struct Marker;

/// Kinematic state of an entity.
///
/// Targets that are entities are located through this component as well,
/// so it is not exclusive to agents.
#[derive(Debug, Clone, Copy, PartialEq, Component, Default)]
pub struct Motion {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Motion {
    #[must_use]
    pub fn state(&self) -> KinematicState {
        KinematicState { position: self.position, velocity: self.velocity }
    }
}

impl From<KinematicState> for Motion {
    fn from(state: KinematicState) -> Self {
        Self { position: state.position, velocity: state.velocity }
    }
}

/// Motion limits of an agent.
#[derive(Debug, Clone, Copy, Component)]
#[require(LastPhase)]
pub struct AgentLimits(pub Limits);

/// The branch taken for the last substep of the agent,
/// or `None` if it has not steered yet.
#[derive(Debug, Clone, Copy, Component, Default)]
pub struct LastPhase(pub Option<Phase>);

pub struct SpawnCommand {
    pub motion: Motion,
    pub limits: Limits,
}

impl EntityCommand for SpawnCommand {
    fn apply(self, mut entity: EntityWorldMut) {
        entity.insert((self.motion, AgentLimits(self.limits), Marker));
    }
}
