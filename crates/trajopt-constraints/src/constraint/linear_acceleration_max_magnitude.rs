use trajopt_expr::{Expr, Problem};
use trajopt_geometry::Scalar;

use super::Apply;
use crate::error::{require_nonnegative_magnitude, Result};
use crate::kinematic_state::KinematicState;

/// `|a| <= a_max`, or `a == 0` when `a_max` is zero (spec §4.2).
#[derive(Debug, Clone, Copy)]
pub struct LinearAccelerationMaxMagnitudeConstraint {
    pub a_max: f64,
}

impl LinearAccelerationMaxMagnitudeConstraint {
    pub fn new(a_max: f64) -> Result<Self> {
        require_nonnegative_magnitude(a_max)?;
        Ok(Self { a_max })
    }
}

impl Apply for LinearAccelerationMaxMagnitudeConstraint {
    fn apply(&self, problem: &mut dyn Problem, state: &KinematicState<'_>) {
        if self.a_max == 0.0 {
            problem.subject_to(state.linear_acceleration.x.clone().equal_to(Expr::constant(0.0)));
            problem.subject_to(state.linear_acceleration.y.clone().equal_to(Expr::constant(0.0)));
        } else {
            let squared_norm = state.linear_acceleration.squared_norm();
            problem.subject_to(squared_norm.le(Expr::constant(self.a_max * self.a_max)));
        }
    }
}
