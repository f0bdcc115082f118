//! Steering math for a point mass that must arrive at a target
//! under a bounded acceleration magnitude.
//!
//! The entry point is [`advance`], which computes the next kinematic state for one tick.
//! The building blocks are exported individually for reuse and testing.

mod quadratic;
pub use quadratic::*;

mod alg3d;
pub use alg3d::*;

mod control;
pub use control::*;

mod kinematics;
pub use kinematics::*;

mod pursuit;
pub use pursuit::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The brake curve equation has no real solution.
    ///
    /// This cannot happen for finite inputs that failed the reachability test,
    /// so it indicates a numerical problem in the caller's state.
    #[error(
        "no acceleration returns to the brake curve (distance {distance}, closing speed \
         {closing_speed}, decel {decel}, dt {dt})"
    )]
    NoBrakeSolution { distance: f32, closing_speed: f32, decel: f32, dt: f32 },
}
