use trajopt_expr::{Expr, Problem};
use trajopt_geometry::Scalar;

/// Safety cap on any single sample's time step (spec §4.3).
const MAX_TIME_STEP_SECONDS: f64 = 3.0;

/// Bounds every `dt[i]` to `[0, 3]` seconds and links every `dt[i]`
/// inside a segment with equality constraints, since they represent one
/// shared per-segment step size (spec §3, §4.3).
pub fn apply_time_step_bounds(problem: &mut dyn Problem, dt: &[Expr], control_interval_counts: &[usize]) {
    for step in dt {
        problem.subject_to(step.clone().ge(Expr::constant(0.0)));
        problem.subject_to(step.clone().le(Expr::constant(MAX_TIME_STEP_SECONDS)));
    }

    let mut offset = 0;
    for &count in control_interval_counts {
        for i in offset..offset + count {
            problem.subject_to(dt[i].clone().equal_to(dt[offset].clone()));
        }
        offset += count;
    }
}

/// Swerve-only chord bound: the arc length a wheel can trace in one
/// step must not exceed the spacing between modules, or a single step
/// could let a module leapfrog another's position (spec §4.3).
pub fn apply_swerve_chord_bound(
    problem: &mut dyn Problem,
    dt: &[Expr],
    control_interval_counts: &[usize],
    wheel_radius: f64,
    wheel_max_angular_velocity: f64,
    min_module_width: f64,
) {
    let mut offset = 0;
    for &count in control_interval_counts {
        let step = dt[offset].clone();
        let chord = step * Expr::constant(wheel_radius * wheel_max_angular_velocity);
        problem.subject_to(chord.le(Expr::constant(min_module_width)));
        offset += count;
    }
}

#[cfg(test)]
mod tests {
    use trajopt_expr::testing::RecordingProblem;

    use super::*;

    #[test]
    fn bounds_and_within_segment_equalities_are_emitted() {
        let mut problem = RecordingProblem::new();
        let dt: Vec<Expr> = (0..5).map(|_| problem.decision_variable()).collect();
        apply_time_step_bounds(&mut problem, &dt, &[3, 2]);
        // 2 bound constraints per sample (5 * 2) + equalities for samples 1,2 (segment 0) and 4 (segment 1)
        assert_eq!(problem.constraints.len(), 10 + 3);
    }

    #[test]
    fn swerve_chord_bound_emits_one_constraint_per_segment() {
        let mut problem = RecordingProblem::new();
        let dt: Vec<Expr> = (0..5).map(|_| problem.decision_variable()).collect();
        apply_swerve_chord_bound(&mut problem, &dt, &[3, 2], 0.05, 30.0, 0.6);
        assert_eq!(problem.constraints.len(), 2);
    }
}
