use trajopt_expr::{Expr, Problem};
use trajopt_geometry::{Scalar, Translation2};

use super::Apply;
use crate::error::{require_nonnegative_magnitude, Result};
use crate::kinematic_state::KinematicState;

/// Symmetric to [`super::PointPointMinConstraint`]: `distance <= d_max`
/// (spec §4.2).
#[derive(Debug, Clone, Copy)]
pub struct PointPointMaxConstraint {
    pub robot_point: (f64, f64),
    pub field_point: (f64, f64),
    pub d_max: f64,
}

impl PointPointMaxConstraint {
    pub fn new(robot_point: (f64, f64), field_point: (f64, f64), d_max: f64) -> Result<Self> {
        require_nonnegative_magnitude(d_max)?;
        Ok(Self {
            robot_point,
            field_point,
            d_max,
        })
    }
}

impl Apply for PointPointMaxConstraint {
    fn apply(&self, problem: &mut dyn Problem, state: &KinematicState<'_>) {
        let robot_point = Translation2::new(Expr::constant(self.robot_point.0), Expr::constant(self.robot_point.1));
        let field_point = Translation2::new(Expr::constant(self.field_point.0), Expr::constant(self.field_point.1));
        let world_point = state.pose.transform(&robot_point);
        let squared_distance = (world_point - field_point).squared_norm();
        problem.subject_to(squared_distance.le(Expr::constant(self.d_max * self.d_max)));
    }
}
