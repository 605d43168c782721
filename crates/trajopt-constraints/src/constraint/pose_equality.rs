use trajopt_expr::{Expr, Problem};
use trajopt_geometry::{Rotation2, Scalar};

use super::Apply;
use crate::kinematic_state::KinematicState;

/// `pose == target_pose` (spec §4.2).
#[derive(Debug, Clone, Copy)]
pub struct PoseEqualityConstraint {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl PoseEqualityConstraint {
    pub const fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }
}

impl Apply for PoseEqualityConstraint {
    fn apply(&self, problem: &mut dyn Problem, state: &KinematicState<'_>) {
        problem.subject_to(state.pose.translation.x.clone().equal_to(Expr::constant(self.x)));
        problem.subject_to(state.pose.translation.y.clone().equal_to(Expr::constant(self.y)));

        let target_rotation = Rotation2::<Expr>::new_unchecked(
            Expr::constant(self.heading.cos()),
            Expr::constant(self.heading.sin()),
        );
        let residual = state.pose.rotation.angle_equality_residual(&target_rotation);
        problem.subject_to(residual.equal_to(Expr::constant(0.0)));
    }
}
