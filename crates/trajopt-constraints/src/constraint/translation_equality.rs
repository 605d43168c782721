use trajopt_expr::{Expr, Problem};
use trajopt_geometry::Scalar;

use super::Apply;
use crate::kinematic_state::KinematicState;

/// `pose.translation == target_translation`; heading is left free
/// (spec §4.2).
#[derive(Debug, Clone, Copy)]
pub struct TranslationEqualityConstraint {
    pub x: f64,
    pub y: f64,
}

impl TranslationEqualityConstraint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Apply for TranslationEqualityConstraint {
    fn apply(&self, problem: &mut dyn Problem, state: &KinematicState<'_>) {
        problem.subject_to(state.pose.translation.x.clone().equal_to(Expr::constant(self.x)));
        problem.subject_to(state.pose.translation.y.clone().equal_to(Expr::constant(self.y)));
    }
}
