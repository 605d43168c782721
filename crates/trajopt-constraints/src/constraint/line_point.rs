use trajopt_expr::{Expr, Problem};
use trajopt_geometry::{Scalar, Translation2};

use super::Apply;
use crate::error::{require_nonnegative_magnitude, ConstraintError, Result};
use crate::kinematic_state::KinematicState;
use crate::smooth::line_point_squared_distance;

/// The squared distance from `field_point` to the world-frame robot
/// line segment `[robot_line_start, robot_line_end]` is `>= d_min^2`
/// (spec §4.2).
#[derive(Debug, Clone, Copy)]
pub struct LinePointConstraint {
    pub robot_line_start: (f64, f64),
    pub robot_line_end: (f64, f64),
    pub field_point: (f64, f64),
    pub d_min: f64,
}

impl LinePointConstraint {
    pub fn new(robot_line_start: (f64, f64), robot_line_end: (f64, f64), field_point: (f64, f64), d_min: f64) -> Result<Self> {
        require_nonnegative_magnitude(d_min)?;
        if robot_line_start == robot_line_end {
            return Err(ConstraintError::DegenerateLine);
        }
        Ok(Self {
            robot_line_start,
            robot_line_end,
            field_point,
            d_min,
        })
    }
}

impl Apply for LinePointConstraint {
    fn apply(&self, problem: &mut dyn Problem, state: &KinematicState<'_>) {
        let line_start = Translation2::new(Expr::constant(self.robot_line_start.0), Expr::constant(self.robot_line_start.1));
        let line_end = Translation2::new(Expr::constant(self.robot_line_end.0), Expr::constant(self.robot_line_end.1));
        let field_point = Translation2::new(Expr::constant(self.field_point.0), Expr::constant(self.field_point.1));

        let world_start = state.pose.transform(&line_start);
        let world_end = state.pose.transform(&line_end);

        let squared_distance = line_point_squared_distance(&world_start, &world_end, &field_point);
        problem.subject_to(squared_distance.ge(Expr::constant(self.d_min * self.d_min)));
    }
}
