use trajopt_expr::Problem;
use trajopt_geometry::Translation2;

use super::point_line_region::{PointLineRegionConstraint, Side};
use super::Apply;
use crate::error::{require_nonnegative_tolerance, ConstraintError, Result};
use crate::kinematic_state::KinematicState;

/// Keeps the robot point within `tolerance` of the centerline
/// `[center_line_start, center_line_end]` (spec §4.2). Compiles down to
/// one [`PointLineRegionConstraint`] when `tolerance` is zero (the
/// robot point must sit exactly on the centerline), or two
/// offset-parallel boundary constraints otherwise.
#[derive(Debug, Clone, Copy)]
pub struct LaneConstraint {
    pub robot_point: (f64, f64),
    pub center_line_start: (f64, f64),
    pub center_line_end: (f64, f64),
    pub tolerance: f64,
}

impl LaneConstraint {
    pub fn new(robot_point: (f64, f64), center_line_start: (f64, f64), center_line_end: (f64, f64), tolerance: f64) -> Result<Self> {
        require_nonnegative_tolerance(tolerance)?;
        if center_line_start == center_line_end {
            return Err(ConstraintError::DegenerateLine);
        }
        Ok(Self {
            robot_point,
            center_line_start,
            center_line_end,
            tolerance,
        })
    }

    /// Expands this lane into the one or two half-plane constraints that
    /// actually get applied to the problem.
    pub fn to_region_constraints(&self) -> Vec<PointLineRegionConstraint> {
        let start = Translation2::new(self.center_line_start.0, self.center_line_start.1);
        let end = Translation2::new(self.center_line_end.0, self.center_line_end.1);
        let direction = end.clone() - start.clone();
        let length = direction.norm();
        let normal = Translation2::new(-direction.y / length, direction.x / length);

        if self.tolerance == 0.0 {
            return vec![PointLineRegionConstraint::new(self.robot_point, self.center_line_start, self.center_line_end, Side::On)
                .expect("centerline is non-degenerate by construction")];
        }

        let offset = normal.scale(self.tolerance);
        let left_start_pt = start.clone() + offset.clone();
        let left_end_pt = end.clone() + offset.clone();
        let right_start_pt = start - offset.clone();
        let right_end_pt = end - offset;
        let left_start = (left_start_pt.x, left_start_pt.y);
        let left_end = (left_end_pt.x, left_end_pt.y);
        let right_start = (right_start_pt.x, right_start_pt.y);
        let right_end = (right_end_pt.x, right_end_pt.y);

        vec![
            PointLineRegionConstraint::new(self.robot_point, left_start, left_end, Side::Below)
                .expect("offset centerline endpoints remain distinct"),
            PointLineRegionConstraint::new(self.robot_point, right_start, right_end, Side::Above)
                .expect("offset centerline endpoints remain distinct"),
        ]
    }
}

impl Apply for LaneConstraint {
    fn apply(&self, problem: &mut dyn Problem, state: &KinematicState<'_>) {
        for region in self.to_region_constraints() {
            region.apply(problem, state);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn zero_tolerance_lane_compiles_to_a_single_on_constraint() {
        let lane = LaneConstraint::new((0.0, 0.0), (0.0, 0.0), (10.0, 0.0), 0.0).unwrap();
        let regions = lane.to_region_constraints();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].side, Side::On);
    }

    #[test]
    fn nonzero_tolerance_lane_compiles_to_two_offset_boundaries() {
        let lane = LaneConstraint::new((0.0, 0.0), (0.0, 0.0), (10.0, 0.0), 0.5).unwrap();
        let regions = lane.to_region_constraints();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].side, Side::Below);
        assert_eq!(regions[1].side, Side::Above);
        assert_eq!(regions[0].field_line_start.1, 0.5);
        assert_eq!(regions[1].field_line_start.1, -0.5);
    }

    #[test]
    fn degenerate_centerline_is_rejected() {
        assert_eq!(
            LaneConstraint::new((0.0, 0.0), (1.0, 1.0), (1.0, 1.0), 0.1).unwrap_err(),
            ConstraintError::DegenerateLine
        );
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        assert_eq!(
            LaneConstraint::new((0.0, 0.0), (0.0, 0.0), (1.0, 0.0), -0.1).unwrap_err(),
            ConstraintError::NegativeTolerance(-0.1)
        );
    }
}
