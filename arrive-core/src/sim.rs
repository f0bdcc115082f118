//! Steering simulation.

use std::marker::PhantomData;

use bevy::app::{self, App, Plugin};
use bevy::ecs::schedule::{IntoScheduleConfigs, SystemSet};
use bevy_mod_config::{ConfigFieldFor, Manager};
use itertools::Itertools;
use strum::IntoEnumIterator;

pub mod agent;
pub mod pursuit;

pub struct Plug<M>(PhantomData<M>);

impl<M> Default for Plug<M> {
    fn default() -> Self { Self(PhantomData) }
}

impl<M: Manager + Default> Plugin for Plug<M>
where
    pursuit::Conf: ConfigFieldFor<M>,
{
    fn build(&self, app: &mut App) {
        for set in SystemSets::iter() {
            app.configure_sets(app::Update, set.in_set(AllSystemSets));
        }

        for (before, after) in SystemSets::iter().tuple_windows() {
            app.configure_sets(app::Update, before.before(after));
        }

        app.add_plugins(pursuit::Plug::<M>::default());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet, strum::EnumIter)]
pub enum SystemSets {
    /// Resolve where each agent is heading this frame.
    Aim,
    /// Advance agent motion.
    Navigate,
    /// Derive status from the new motion for other modules to read.
    Reconcile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub struct AllSystemSets;
