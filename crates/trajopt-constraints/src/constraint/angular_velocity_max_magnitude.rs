use trajopt_expr::{Expr, Problem};
use trajopt_geometry::Scalar;

use super::Apply;
use crate::error::{require_nonnegative_magnitude, Result};
use crate::kinematic_state::KinematicState;

/// `-omega_max <= omega <= omega_max`, or `omega == 0` when `omega_max`
/// is zero (spec §4.2).
#[derive(Debug, Clone, Copy)]
pub struct AngularVelocityMaxMagnitudeConstraint {
    pub omega_max: f64,
}

impl AngularVelocityMaxMagnitudeConstraint {
    pub fn new(omega_max: f64) -> Result<Self> {
        require_nonnegative_magnitude(omega_max)?;
        Ok(Self { omega_max })
    }
}

impl Apply for AngularVelocityMaxMagnitudeConstraint {
    fn apply(&self, problem: &mut dyn Problem, state: &KinematicState<'_>) {
        if self.omega_max == 0.0 {
            problem.subject_to(state.angular_velocity.clone().equal_to(Expr::constant(0.0)));
        } else {
            problem.subject_to(state.angular_velocity.clone().le(Expr::constant(self.omega_max)));
            problem.subject_to(state.angular_velocity.clone().ge(Expr::constant(-self.omega_max)));
        }
    }
}
