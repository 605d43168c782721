use trajopt_expr::{Expr, Problem};
use trajopt_geometry::{Scalar, Translation2};

use super::Apply;
use crate::error::{require_nonnegative_magnitude, Result};
use crate::kinematic_state::KinematicState;

/// The distance from the body-frame point `robot_point` (transformed by
/// the current pose) to the fixed `field_point` is `>= d_min` (spec
/// §4.2). Implemented in squared form, which is equivalent since both
/// sides are nonnegative and avoids a non-smooth square root at zero
/// distance.
#[derive(Debug, Clone, Copy)]
pub struct PointPointMinConstraint {
    pub robot_point: (f64, f64),
    pub field_point: (f64, f64),
    pub d_min: f64,
}

impl PointPointMinConstraint {
    pub fn new(robot_point: (f64, f64), field_point: (f64, f64), d_min: f64) -> Result<Self> {
        require_nonnegative_magnitude(d_min)?;
        Ok(Self {
            robot_point,
            field_point,
            d_min,
        })
    }
}

impl Apply for PointPointMinConstraint {
    fn apply(&self, problem: &mut dyn Problem, state: &KinematicState<'_>) {
        let robot_point = Translation2::new(Expr::constant(self.robot_point.0), Expr::constant(self.robot_point.1));
        let field_point = Translation2::new(Expr::constant(self.field_point.0), Expr::constant(self.field_point.1));
        let world_point = state.pose.transform(&robot_point);
        let squared_distance = (world_point - field_point).squared_norm();
        problem.subject_to(squared_distance.ge(Expr::constant(self.d_min * self.d_min)));
    }
}
