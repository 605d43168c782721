use trajopt_expr::{Expr, Problem};
use trajopt_geometry::{Scalar, Translation2};

use super::Apply;
use crate::kinematic_state::KinematicState;

/// The velocity vector is parallel to the unit vector `(cos heading, sin
/// heading)`: `(v . u)^2 == |v|^2` (spec §4.2).
#[derive(Debug, Clone, Copy)]
pub struct LinearVelocityDirectionConstraint {
    pub heading: f64,
}

impl LinearVelocityDirectionConstraint {
    pub const fn new(heading: f64) -> Self {
        Self { heading }
    }
}

impl Apply for LinearVelocityDirectionConstraint {
    fn apply(&self, problem: &mut dyn Problem, state: &KinematicState<'_>) {
        let unit = Translation2::new(Expr::constant(self.heading.cos()), Expr::constant(self.heading.sin()));
        let dot = state.linear_velocity.dot(&unit);
        let lhs = dot.clone() * dot;
        let rhs = state.linear_velocity.squared_norm();
        problem.subject_to(lhs.equal_to(rhs));
    }
}
