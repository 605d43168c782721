use trajopt_constraints::KinematicState;
use trajopt_expr::Problem;
use trajopt_path::{get_index, Waypoint};

/// Applies every waypoint's own constraints at its own sample, and every
/// waypoint's segment constraints across the whole segment leading to it
/// (spec §4.3: waypoint constraints apply only at the sample coinciding
/// with that waypoint; segment constraints apply over `I(k) <= i <
/// I(k+1)`, i.e. every sample of the segment except the one coinciding
/// with the next waypoint).
pub fn apply_user_constraints(
    problem: &mut dyn Problem,
    waypoints: &[Waypoint],
    control_interval_counts: &[usize],
    states: &[KinematicState<'_>],
) {
    for (w, waypoint) in waypoints.iter().enumerate() {
        let index = get_index(control_interval_counts, w, 0);
        for constraint in &waypoint.waypoint_constraints {
            constraint.apply(problem, &states[index]);
        }
    }

    for (w, waypoint) in waypoints.iter().enumerate().skip(1) {
        let start = get_index(control_interval_counts, w - 1, 0);
        let end = get_index(control_interval_counts, w, 0);
        for constraint in &waypoint.segment_constraints {
            for state in &states[start..end] {
                constraint.apply(problem, state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use trajopt_constraints::{Constraint, TranslationEqualityConstraint};
    use trajopt_expr::testing::RecordingProblem;
    use trajopt_expr::Expr;
    use trajopt_geometry::{Pose2, Rotation2, Scalar, Translation2};

    use super::*;

    fn dummy_state<'a>(
        pose: &'a Pose2<Expr>,
        zero_translation: &'a Translation2<Expr>,
        zero: &'a Expr,
    ) -> KinematicState<'a> {
        KinematicState {
            pose,
            linear_velocity: zero_translation,
            angular_velocity: zero,
            linear_acceleration: zero_translation,
            angular_acceleration: zero,
        }
    }

    #[test]
    fn waypoint_constraint_applies_only_at_its_own_sample() {
        let mut problem = RecordingProblem::new();
        let zero = Expr::constant(0.0);
        let zero_translation = Translation2::new(zero.clone(), zero.clone());
        let poses: Vec<Pose2<Expr>> = (0..3)
            .map(|_| Pose2::new(Translation2::new(problem.decision_variable(), problem.decision_variable()), Rotation2::new_unchecked(Expr::constant(1.0), Expr::constant(0.0))))
            .collect();
        let states: Vec<KinematicState<'_>> = poses.iter().map(|p| dummy_state(p, &zero_translation, &zero)).collect();

        let mut waypoints = vec![Waypoint::origin(), Waypoint::origin(), Waypoint::origin()];
        waypoints[2]
            .waypoint_constraints
            .push(Constraint::TranslationEquality(TranslationEqualityConstraint { x: 1.0, y: 2.0 }));

        apply_user_constraints(&mut problem, &waypoints, &[1, 1], &states);

        // A translation-equality constraint emits two residual equalities.
        assert_eq!(problem.constraints.len(), 2);
    }

    #[test]
    fn segment_constraint_applies_to_every_sample_in_its_segment() {
        let mut problem = RecordingProblem::new();
        let zero = Expr::constant(0.0);
        let zero_translation = Translation2::new(zero.clone(), zero.clone());
        let poses: Vec<Pose2<Expr>> = (0..5)
            .map(|_| Pose2::new(Translation2::new(problem.decision_variable(), problem.decision_variable()), Rotation2::new_unchecked(Expr::constant(1.0), Expr::constant(0.0))))
            .collect();
        let states: Vec<KinematicState<'_>> = poses.iter().map(|p| dummy_state(p, &zero_translation, &zero)).collect();

        let mut waypoints = vec![Waypoint::origin(), Waypoint::origin(), Waypoint::origin()];
        waypoints[1]
            .segment_constraints
            .push(Constraint::TranslationEquality(TranslationEqualityConstraint { x: 0.0, y: 0.0 }));

        // counts [2, 2]: segment leading to waypoint 1 spans samples 0..2 (2 samples)
        apply_user_constraints(&mut problem, &waypoints, &[2, 2], &states);

        assert_eq!(problem.constraints.len(), 2 * 2);
    }
}
