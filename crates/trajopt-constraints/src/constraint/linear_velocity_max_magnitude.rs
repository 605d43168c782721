use trajopt_expr::{Expr, Problem};
use trajopt_geometry::Scalar;

use super::Apply;
use crate::error::{require_nonnegative_magnitude, Result};
use crate::kinematic_state::KinematicState;

/// `|v| <= v_max`, or `v == 0` when `v_max` is zero (spec §4.2).
#[derive(Debug, Clone, Copy)]
pub struct LinearVelocityMaxMagnitudeConstraint {
    pub v_max: f64,
}

impl LinearVelocityMaxMagnitudeConstraint {
    pub fn new(v_max: f64) -> Result<Self> {
        require_nonnegative_magnitude(v_max)?;
        Ok(Self { v_max })
    }
}

impl Apply for LinearVelocityMaxMagnitudeConstraint {
    fn apply(&self, problem: &mut dyn Problem, state: &KinematicState<'_>) {
        if self.v_max == 0.0 {
            problem.subject_to(state.linear_velocity.x.clone().equal_to(Expr::constant(0.0)));
            problem.subject_to(state.linear_velocity.y.clone().equal_to(Expr::constant(0.0)));
        } else {
            let squared_norm = state.linear_velocity.squared_norm();
            problem.subject_to(squared_norm.le(Expr::constant(self.v_max * self.v_max)));
        }
    }
}
