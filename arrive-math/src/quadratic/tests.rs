use super::{solve_quadratic, solve_quadratic_tolerant};

fn assert_roots(actual: Option<[f64; 2]>, expect: Option<[f64; 2]>) {
    assert_eq!(actual.is_none(), expect.is_none(), "expected {expect:?}, got {actual:?}");

    if let (Some([actual_1, actual_2]), Some([expect_1, expect_2])) = (actual, expect) {
        assert!((actual_1 - expect_1).abs() < 1e-9, "expected x1 = {expect_1:?}, got {actual_1:?}");
        assert!((actual_2 - expect_2).abs() < 1e-9, "expected x2 = {expect_2:?}, got {actual_2:?}");
    }
}

#[test]
fn symmetric_roots() { assert_roots(solve_quadratic(1.0, 0.0, -4.0), Some([2.0, -2.0])); }

#[test]
fn negative_discriminant() { assert_roots(solve_quadratic(1.0, 2.0, 5.0), None); }

#[test]
fn zero_leading_coefficient() { assert_roots(solve_quadratic(0.0, 2.0, 5.0), None); }

#[test]
fn repeated_root_counts_twice() {
    assert_roots(solve_quadratic(1.0, -6.0, 9.0), Some([3.0, 3.0]));
}

#[test]
fn all_zero_roots() { assert_roots(solve_quadratic(2.0, 0.0, 0.0), Some([0.0, 0.0])); }

#[test]
fn positive_leading_orders_descending() {
    // (x - 1)(x - 5) = x^2 - 6x + 5
    assert_roots(solve_quadratic(1.0, -6.0, 5.0), Some([5.0, 1.0]));
    // 2(x + 1)(x + 5) = 2x^2 + 12x + 10
    assert_roots(solve_quadratic(2.0, 12.0, 10.0), Some([-1.0, -5.0]));
}

#[test]
fn negative_leading_follows_formula_labels() {
    // -(x - 1)(x - 5) = -x^2 + 6x - 5
    // x1 = (-6 + 4) / -2 = 1, x2 = (-6 - 4) / -2 = 5
    assert_roots(solve_quadratic(-1.0, 6.0, -5.0), Some([1.0, 5.0]));
}

#[test]
fn no_cancellation_for_small_root() {
    // roots 1e8 and 1e-8; the naive formula loses the small root entirely in f64.
    let [large, small] = solve_quadratic::<f64>(1.0, -(1e8 + 1e-8), 1.0).unwrap();
    assert!((large - 1e8).abs() < 1e-3, "got {large}");
    assert!((small - 1e-8).abs() < 1e-15, "got {small}");
}

#[test]
fn single_precision() {
    let roots = solve_quadratic(1.0f32, 0.0, -4.0).unwrap();
    assert!((roots[0] - 2.0).abs() < 1e-6);
    assert!((roots[1] + 2.0).abs() < 1e-6);
}

#[test]
fn tolerant_snaps_rounding_error() {
    // discriminant = 36 - 36.0000001 * 4 / 4, negative by about 4e-7.
    assert_roots(solve_quadratic(1.0, -6.0, 9.000_000_1), None);
    assert_roots(solve_quadratic_tolerant(1.0, -6.0, 9.000_000_1, 1e-6), Some([3.0, 3.0]));
}

#[test]
fn tolerant_rejects_real_negative_discriminant() {
    assert_roots(solve_quadratic_tolerant(1.0, 2.0, 5.0, 1e-6), None);
}
