use trajopt_expr::Expr;
use trajopt_geometry::{Scalar, Translation2};

/// `|x|`, built from `hypot(x, 0)` so it stays expressible in terms of
/// the symbolic functions the external solver already has to support
/// (spec §6's `sin`, `cos`, `hypot`, `sign`), rather than adding a
/// bespoke absolute-value node to [`Expr`].
pub fn smooth_abs(x: &Expr) -> Expr {
    x.hypot(&Expr::constant(0.0))
}

pub fn smooth_min(a: &Expr, b: &Expr) -> Expr {
    let sum = a.clone() + b.clone();
    let diff = a.clone() - b.clone();
    (sum - smooth_abs(&diff)) / Expr::constant(2.0)
}

pub fn smooth_max(a: &Expr, b: &Expr) -> Expr {
    let sum = a.clone() + b.clone();
    let diff = a.clone() - b.clone();
    (sum + smooth_abs(&diff)) / Expr::constant(2.0)
}

/// `clamp(t, 0, 1)` built from [`smooth_min`]/[`smooth_max`], autodiff
/// safe the way spec §4.2's `PointPointMin`/`LinePointConstraint`
/// require (the autodiff engine may supply genuine subgradients at the
/// non-smooth points, per spec §9's design note).
pub fn smooth_clamp01(t: &Expr) -> Expr {
    smooth_min(&smooth_max(t, &Expr::constant(0.0)), &Expr::constant(1.0))
}

/// The squared distance from `point` to the segment `[line_start,
/// line_end]`, using the standard clamped-projection parameterization
/// (spec §4.2, `LinePointConstraint`): `t = clamp(v.l / |l|^2, 0, 1)`.
pub fn line_point_squared_distance(
    line_start: &Translation2<Expr>,
    line_end: &Translation2<Expr>,
    point: &Translation2<Expr>,
) -> Expr {
    let l = line_end.clone() - line_start.clone();
    let v = point.clone() - line_start.clone();
    let len_sq = l.squared_norm();
    let t_unclamped = v.dot(&l) / len_sq;
    let t = smooth_clamp01(&t_unclamped);
    let projection = line_start.clone() + l.scale(t);
    (point.clone() - projection).squared_norm()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use trajopt_expr::Expr;

    use super::*;

    fn eval(e: Expr) -> f64 {
        e.eval(&[])
    }

    #[test]
    fn smooth_min_matches_plain_min() {
        assert_relative_eq!(
            eval(smooth_min(&Expr::constant(2.0), &Expr::constant(5.0))),
            2.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            eval(smooth_min(&Expr::constant(5.0), &Expr::constant(2.0))),
            2.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn smooth_clamp01_clamps() {
        assert_relative_eq!(eval(smooth_clamp01(&Expr::constant(-0.5))), 0.0, epsilon = 1e-9);
        assert_relative_eq!(eval(smooth_clamp01(&Expr::constant(1.5))), 1.0, epsilon = 1e-9);
        assert_relative_eq!(eval(smooth_clamp01(&Expr::constant(0.3))), 0.3, epsilon = 1e-9);
    }

    #[test]
    fn line_point_distance_projects_onto_segment_interior() {
        let start = Translation2::new(Expr::constant(0.0), Expr::constant(0.0));
        let end = Translation2::new(Expr::constant(2.0), Expr::constant(0.0));
        let point = Translation2::new(Expr::constant(1.0), Expr::constant(3.0));
        assert_relative_eq!(
            eval(line_point_squared_distance(&start, &end, &point)),
            9.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn line_point_distance_clamps_past_endpoint() {
        let start = Translation2::new(Expr::constant(0.0), Expr::constant(0.0));
        let end = Translation2::new(Expr::constant(2.0), Expr::constant(0.0));
        let point = Translation2::new(Expr::constant(5.0), Expr::constant(0.0));
        assert_relative_eq!(
            eval(line_point_squared_distance(&start, &end, &point)),
            9.0,
            epsilon = 1e-9
        );
    }
}
