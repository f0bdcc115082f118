//! Bevy integration for arrival steering.
//!
//! Agents are entities with [`sim::agent::Motion`] and [`sim::agent::AgentLimits`].
//! Adding a [`sim::pursuit::Target`] makes them steer towards it every frame.

pub mod sim;
pub mod try_log;
pub use try_log::{QueryExt as QueryTryLog, TryLog};
