use num_traits::{Float, Zero};

#[cfg(test)]
mod tests;

/// Computes `b^2 - 4ac`.
#[must_use]
pub fn discriminant<T: Float>(a: T, b: T, c: T) -> T { b * b - four::<T>() * a * c }

/// Solves `a * x^2 + b * x + c = 0` for real `x`.
///
/// Returns `[x1, x2]` where `x1 = (-b + sqrt(discrim)) / 2a` and `x2 = (-b - sqrt(discrim)) / 2a`,
/// so `x1 >= x2` when `a` is positive.
/// A repeated root is still returned twice.
///
/// Returns `None` if the discriminant is negative or `a` is zero.
/// The linear case is not handled; callers with a possibly zero `a` must check it themselves.
#[must_use]
pub fn solve_quadratic<T: Float>(a: T, b: T, c: T) -> Option<[T; 2]> {
    if a.is_zero() {
        return None;
    }

    let discrim = discriminant(a, b, c);
    if discrim < T::zero() {
        return None;
    }

    Some(roots_from_discriminant(a, b, c, discrim))
}

/// Like [`solve_quadratic`], but a discriminant that is negative by less than
/// `rel_tolerance * max(b^2, |4ac|)` is treated as zero.
///
/// Use this when the equation is known to be tangent at the boundary case
/// and rounding must not flip the result to "no roots".
#[must_use]
pub fn solve_quadratic_tolerant<T: Float>(a: T, b: T, c: T, rel_tolerance: T) -> Option<[T; 2]> {
    if a.is_zero() {
        return None;
    }

    let mut discrim = discriminant(a, b, c);
    if discrim < T::zero() {
        let scale = (b * b).max((four::<T>() * a * c).abs());
        if -discrim > scale * rel_tolerance {
            return None;
        }
        discrim = T::zero();
    }

    Some(roots_from_discriminant(a, b, c, discrim))
}

fn roots_from_discriminant<T: Float>(a: T, b: T, c: T, discrim: T) -> [T; 2] {
    let two = T::one() + T::one();

    if discrim.is_zero() {
        let root = -b / (two * a);
        return [root, root];
    }

    // q = -(b + sign(b) sqrt(discrim)) / 2 never subtracts two close values,
    // and is nonzero since discrim > 0.
    let q = -(b + b.signum() * discrim.sqrt()) / two;

    let (r1, r2) = (q / a, c / q);
    let (low, high) = if r1 < r2 { (r1, r2) } else { (r2, r1) };

    // (-b + sqrt(discrim)) / 2a is the larger root iff a > 0.
    if a > T::zero() { [high, low] } else { [low, high] }
}

fn four<T: Float>() -> T {
    let two = T::one() + T::one();
    two * two
}
