//! Vector decomposition along a line of sight.

use bevy_math::{Dir3, Vec3};


/// A vector split into a component along a unit direction and the remainder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalSplit {
    /// Signed magnitude along the direction.
    pub parallel:   f32,
    /// The component perpendicular to the direction.
    pub orthogonal: Vec3,
}

impl DirectionalSplit {
    /// Reconstructs the original vector.
    #[must_use]
    pub fn recombine(self, direction: Dir3) -> Vec3 { direction * self.parallel + self.orthogonal }
}

/// Splits `vector` into components parallel and orthogonal to `direction`.
#[must_use]
pub fn decompose(vector: Vec3, direction: Dir3) -> DirectionalSplit {
    let parallel = vector.dot(*direction);
    DirectionalSplit { parallel, orthogonal: vector - direction * parallel }
}
