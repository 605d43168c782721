use trajopt_expr::{Expr, Problem};
use trajopt_geometry::{Scalar, Translation2};

use super::Apply;
use crate::error::{ConstraintError, Result};
use crate::kinematic_state::KinematicState;

/// Which side of the line the robot point must stay on (spec §4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
    On,
}

/// A half-plane constraint: the sign of the 2D cross product of the
/// line direction and the vector from the line start to the
/// world-frame robot point determines which side of
/// `[field_line_start, field_line_end]` the point must lie on (spec
/// §4.2). `Above` and `Below` are relaxed from the spec's strict
/// inequalities to closed ones (`>= 0` / `<= 0`), since the external
/// NLP solver operates over closed feasible sets.
#[derive(Debug, Clone, Copy)]
pub struct PointLineRegionConstraint {
    pub robot_point: (f64, f64),
    pub field_line_start: (f64, f64),
    pub field_line_end: (f64, f64),
    pub side: Side,
}

impl PointLineRegionConstraint {
    pub fn new(robot_point: (f64, f64), field_line_start: (f64, f64), field_line_end: (f64, f64), side: Side) -> Result<Self> {
        if field_line_start == field_line_end {
            return Err(ConstraintError::DegenerateLine);
        }
        Ok(Self {
            robot_point,
            field_line_start,
            field_line_end,
            side,
        })
    }
}

impl Apply for PointLineRegionConstraint {
    fn apply(&self, problem: &mut dyn Problem, state: &KinematicState<'_>) {
        let robot_point = Translation2::new(Expr::constant(self.robot_point.0), Expr::constant(self.robot_point.1));
        let line_start = Translation2::new(Expr::constant(self.field_line_start.0), Expr::constant(self.field_line_start.1));
        let line_end = Translation2::new(Expr::constant(self.field_line_end.0), Expr::constant(self.field_line_end.1));

        let world_point = state.pose.transform(&robot_point);
        let direction = line_end - line_start.clone();
        let cross = direction.cross(&(world_point - line_start));

        match self.side {
            Side::Above => problem.subject_to(cross.ge(Expr::constant(0.0))),
            Side::Below => problem.subject_to(cross.le(Expr::constant(0.0))),
            Side::On => problem.subject_to(cross.equal_to(Expr::constant(0.0))),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ConstraintError;

    #[test]
    fn degenerate_line_is_rejected() {
        assert_eq!(
            PointLineRegionConstraint::new((0.0, 0.0), (1.0, 1.0), (1.0, 1.0), Side::Above).unwrap_err(),
            ConstraintError::DegenerateLine
        );
    }

    #[test]
    fn well_formed_region_is_accepted() {
        let region = PointLineRegionConstraint::new((0.0, 0.0), (0.0, 0.0), (1.0, 0.0), Side::Above).unwrap();
        assert_eq!(region.side, Side::Above);
    }
}
