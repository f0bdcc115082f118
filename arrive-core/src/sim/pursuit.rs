//! Steers agents towards their targets.

use std::marker::PhantomData;
use std::time::Duration;

use bevy::app::{self, App, Plugin};
use bevy::ecs::component::Component;
use bevy::ecs::entity::Entity;
use bevy::ecs::message::{Message, MessageWriter};
use bevy::ecs::query::{Has, With};
use bevy::ecs::schedule::IntoScheduleConfigs;
use bevy::ecs::system::{Commands, Query, Res};
use bevy::math::Vec3;
use bevy::time::{self, Time};
use bevy_mod_config::{AppExt, Config, ConfigFieldFor, Manager, ReadConfig};
use math::{KinematicState, Limits, Phase, Step};

use super::SystemSets;
use super::agent::{self, AgentLimits, LastPhase, Motion};
use crate::{QueryTryLog, try_log};


/// Upper bound of substeps per frame, regardless of [`Conf::max_substep`].
pub const MAX_SUBSTEPS: u32 = 16;

pub struct Plug<M>(PhantomData<M>);

impl<M> Default for Plug<M> {
    fn default() -> Self { Self(PhantomData) }
}

impl<M: Manager + Default> Plugin for Plug<M>
where
    Conf: ConfigFieldFor<M>,
{
    fn build(&self, app: &mut App) {
        app.init_config::<M, Conf>("arrive:pursuit");
        app.add_message::<ArrivalMessage>();
        app.add_systems(app::Update, resolve_target_system.in_set(SystemSets::Aim));
        app.add_systems(app::Update, pursue_system.in_set(SystemSets::Navigate));
        app.add_systems(app::Update, detect_arrival_system.in_set(SystemSets::Reconcile));
    }
}

#[derive(Config)]
pub struct Conf {
    /// Frames longer than this are split into equal substeps.
    ///
    /// Zero disables splitting.
    #[config(default = Duration::from_millis(20))]
    pub max_substep:      Duration,
    /// Agents closer to their target than this may be considered arrived.
    #[config(default = 0.01, min = 0.0, max = 10.0)]
    pub arrival_distance: f32,
    /// Agents slower than this may be considered arrived.
    #[config(default = 0.01, min = 0.0, max = 10.0)]
    pub arrival_speed:    f32,
}

/// Where an agent is steering to.
#[derive(Debug, Clone, Copy, Component)]
#[require(ResolvedTarget)]
pub enum Target {
    /// A fixed point.
    Position(Vec3),
    /// The current position of an entity with [`Motion`].
    Entity(Entity),
}

/// The target position for the current frame.
///
/// `None` if the agent has no target or the target entity cannot be located,
/// in which case the agent is not steered.
#[derive(Debug, Clone, Copy, Component, Default)]
pub struct ResolvedTarget(pub Option<Vec3>);

/// Marks an agent that has come to rest at its target.
///
/// Removed when the agent leaves the arrival threshold again.
#[derive(Component)]
pub struct Arrived;

/// Sent when an agent comes to rest at its target.
#[derive(Message)]
pub struct ArrivalMessage(pub Entity);

fn resolve_target_system(
    mut agent_query: Query<(Option<&Target>, &mut ResolvedTarget)>,
    motion_query: Query<&Motion>,
) {
    agent_query.iter_mut().for_each(|(target, mut resolved)| {
        resolved.0 = match target {
            None => None,
            Some(&Target::Position(position)) => Some(position),
            Some(&Target::Entity(entity)) => {
                motion_query.log_get(entity).map(|motion| motion.position)
            }
        };
    });
}

fn pursue_system(
    time: Res<Time<time::Virtual>>,
    conf: ReadConfig<Conf>,
    mut agent_query: Query<(Entity, &mut Motion, &AgentLimits, &ResolvedTarget, &mut LastPhase)>,
) {
    if time.is_paused() {
        return;
    }

    let conf = conf.read();
    let (substeps, dt) = split_substeps(time.delta(), conf.max_substep);

    agent_query.par_iter_mut().for_each(
        |(entity, mut motion, &AgentLimits(limits), &ResolvedTarget(target), mut last_phase)| {
            let Some(target) = target else { return };

            let step = try_log!(
                advance_substeps(motion.state(), target, limits, substeps, dt),
                expect "Cannot steer {:?} towards {}, holding state" (entity, target)
                or return
            );

            bevy::log::trace!("{entity:?} steered to {:?} ({})", step.state, step.phase);
            *motion = step.state.into();
            last_phase.0 = Some(step.phase);
        },
    );
}

/// Steers `state` through `substeps` consecutive steps of `dt` each.
///
/// The phase of the last substep is reported.
/// If any substep fails, the whole sequence fails and no partial progress is returned.
pub fn advance_substeps(
    state: KinematicState,
    target: Vec3,
    limits: Limits,
    substeps: u32,
    dt: f32,
) -> Result<Step, math::Error> {
    let mut step = Step { state, phase: Phase::Skipped };
    for _ in 0..substeps {
        step = math::advance(step.state, target, limits, dt)?;
    }
    Ok(step)
}

/// Splits a frame of length `delta` into substeps no longer than `max_substep`.
///
/// Returns the number of substeps and the length of each substep in seconds.
/// At most [`MAX_SUBSTEPS`] substeps are returned,
/// so very long frames yield substeps longer than `max_substep`.
#[must_use]
pub fn split_substeps(delta: Duration, max_substep: Duration) -> (u32, f32) {
    let count = if max_substep.is_zero() {
        1
    } else {
        let count = delta.as_nanos().div_ceil(max_substep.as_nanos());
        u32::try_from(count).unwrap_or(MAX_SUBSTEPS).clamp(1, MAX_SUBSTEPS)
    };

    #[expect(clippy::cast_precision_loss, reason = "count <= MAX_SUBSTEPS")]
    let dt = delta.as_secs_f32() / count as f32;
    (count, dt)
}

fn detect_arrival_system(
    conf: ReadConfig<Conf>,
    mut commands: Commands,
    mut arrival_writer: MessageWriter<ArrivalMessage>,
    agent_query: Query<(Entity, &Motion, &ResolvedTarget, Has<Arrived>), With<agent::Marker>>,
) {
    let conf = conf.read();

    for (entity, motion, &ResolvedTarget(target), was_arrived) in agent_query.iter() {
        let is_arrived = target.is_some_and(|target| {
            motion.position.distance(target) <= conf.arrival_distance
                && motion.velocity.length() <= conf.arrival_speed
        });

        if is_arrived && !was_arrived {
            bevy::log::debug!("{entity:?} arrived at {:?}", motion.position);
            commands.entity(entity).insert(Arrived);
            arrival_writer.write(ArrivalMessage(entity));
        } else if !is_arrived && was_arrived {
            commands.entity(entity).remove::<Arrived>();
        }
    }
}
