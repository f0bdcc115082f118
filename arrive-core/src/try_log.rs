//! Logging fallbacks for lookups that are expected to succeed.
//!
//! A failed lookup is logged with [`bevy::log::error!`] and the caller skips its work,
//! so that one inconsistent entity does not bring down the whole simulation.

use std::any::type_name;
use std::fmt;

use bevy::ecs::entity::Entity;
use bevy::ecs::query::{QueryData, QueryFilter};
use bevy::ecs::system::Query;

/// Unwraps an `Option` or `Result`, or logs the failure and evaluates the fallback.
///
/// ```ignore
/// let motion = try_log!(query.get(entity), expect "{entity:?} must be an agent" or return);
/// let step = try_log!(advance(..), expect "steering {:?}" (entity) or continue);
/// ```
#[macro_export]
macro_rules! try_log {
    (
        $expr:expr,
        expect $must:literal $(
            (
                $($must_args:expr),* $(,)?
            )
        )?
        or $never:expr
    ) => {
        {
            if let Some(value) = $crate::TryLog::convert_or_log(
                $expr,
                format_args!($must, $($($must_args),*)?),
            ) {
                value
            } else {
                $never
            }
        }
    }
}

pub use try_log;

pub trait QueryExt<'s, D: QueryData> {
    /// Gets the read-only query item for `entity`, logging an error if it does not match.
    fn log_get(&self, entity: Entity) -> Option<<D::ReadOnly as QueryData>::Item<'_, 's>>;
}

impl<'s, D, F> QueryExt<'s, D> for Query<'_, 's, D, F>
where
    D: QueryData,
    F: QueryFilter,
{
    fn log_get(&self, entity: Entity) -> Option<<D::ReadOnly as QueryData>::Item<'_, 's>> {
        match self.get(entity) {
            Ok(value) => Some(value),
            Err(err) => {
                bevy::log::error!("Expected {entity:?} to match query {}: {err}", type_name::<D>());
                None
            }
        }
    }
}

/// An expression that can be used for `$expr` in [`try_log!`](crate::try_log!).
pub trait TryLog<T> {
    /// Returns the successful result as `Some`, or logs the error with `must`.
    fn convert_or_log(this: Self, must: impl fmt::Display) -> Option<T>;
}

impl<T> TryLog<T> for Option<T> {
    fn convert_or_log(this: Self, must: impl fmt::Display) -> Option<T> {
        if this.is_none() {
            bevy::log::error!("{must}");
        }
        this
    }
}

impl<T, E: fmt::Display> TryLog<T> for Result<T, E> {
    fn convert_or_log(this: Self, must: impl fmt::Display) -> Option<T> {
        this.map_err(|err| bevy::log::error!("{must}: {err}")).ok()
    }
}
