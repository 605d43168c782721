use trajopt_expr::{Expr, Problem};
use trajopt_geometry::{Scalar, Translation2};

use super::Apply;
use crate::error::{require_nonnegative_magnitude, ConstraintError, Result};
use crate::kinematic_state::KinematicState;
use crate::smooth::line_point_squared_distance;

/// Symmetric role to [`super::LinePointConstraint`]: the robot's point
/// must stay `>= d_min` from the fixed world-frame line segment
/// `[field_line_start, field_line_end]` (spec §4.2).
#[derive(Debug, Clone, Copy)]
pub struct PointLineConstraint {
    pub robot_point: (f64, f64),
    pub field_line_start: (f64, f64),
    pub field_line_end: (f64, f64),
    pub d_min: f64,
}

impl PointLineConstraint {
    pub fn new(robot_point: (f64, f64), field_line_start: (f64, f64), field_line_end: (f64, f64), d_min: f64) -> Result<Self> {
        require_nonnegative_magnitude(d_min)?;
        if field_line_start == field_line_end {
            return Err(ConstraintError::DegenerateLine);
        }
        Ok(Self {
            robot_point,
            field_line_start,
            field_line_end,
            d_min,
        })
    }
}

impl Apply for PointLineConstraint {
    fn apply(&self, problem: &mut dyn Problem, state: &KinematicState<'_>) {
        let robot_point = Translation2::new(Expr::constant(self.robot_point.0), Expr::constant(self.robot_point.1));
        let line_start = Translation2::new(Expr::constant(self.field_line_start.0), Expr::constant(self.field_line_start.1));
        let line_end = Translation2::new(Expr::constant(self.field_line_end.0), Expr::constant(self.field_line_end.1));

        let world_point = state.pose.transform(&robot_point);

        let squared_distance = line_point_squared_distance(&line_start, &line_end, &world_point);
        problem.subject_to(squared_distance.ge(Expr::constant(self.d_min * self.d_min)));
    }
}
