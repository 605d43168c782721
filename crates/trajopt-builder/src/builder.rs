use trajopt_constraints::{Constraint, LaneConstraint, PointLineRegionConstraint, PointPointMaxConstraint, PointPointMinConstraint, PoseEqualityConstraint, Side, TranslationEqualityConstraint};
use trajopt_geometry::Pose2;
use trajopt_path::{Bumper, Drivetrain, Path, Waypoint};

use crate::error::{PathBuilderError, Result};

/// The default number of control intervals a newly inserted waypoint's
/// preceding segment gets, before the caller overrides it with
/// `set_control_interval_counts` (spec §4.5, `new_wpts`).
const DEFAULT_CONTROL_INTERVAL_COUNT: usize = 40;

/// A stateful, fluent mutation API that accumulates waypoints,
/// constraints, initial-guess points, and bumper polygons into a
/// [`Path`] (spec §4.5).
#[derive(Debug)]
pub struct PathBuilder {
    path: Path,
    bumpers: Vec<Bumper>,
}

impl PathBuilder {
    pub fn new(drivetrain: Drivetrain) -> Self {
        Self {
            path: Path::new(drivetrain),
            bumpers: Vec::new(),
        }
    }

    pub fn set_drivetrain(&mut self, drivetrain: Drivetrain) -> &mut Self {
        self.path.drivetrain = drivetrain;
        self
    }

    /// Pushes a rectangular bumper with the default 0.01 m safety
    /// distance (spec §4.5).
    pub fn set_bumpers(&mut self, front: f64, left: f64, right: f64, back: f64) -> &mut Self {
        self.bumpers.push(Bumper::rectangular(front, left, right, back));
        self
    }

    pub fn set_control_interval_counts(&mut self, counts: Vec<usize>) -> &mut Self {
        self.path.control_interval_counts = counts;
        self
    }

    pub fn add_callback(&mut self, callback: impl FnMut(&trajopt_expr::IterationInfo) + 'static) -> &mut Self {
        self.path.add_callback(callback);
        self
    }

    /// Extends the waypoint list so that `final_index` is a valid
    /// index, defaulting new waypoints to an origin pose guess and a
    /// preceding segment of 40 control intervals (spec §4.5).
    fn new_wpts(&mut self, final_index: usize) {
        while self.path.waypoint_count() <= final_index {
            if self.path.waypoint_count() > 0 {
                self.path.control_interval_counts.push(DEFAULT_CONTROL_INTERVAL_COUNT);
            }
            self.path.push_waypoint(Waypoint::origin());
        }
    }

    fn waypoint_mut(&mut self, index: usize) -> &mut Waypoint {
        self.new_wpts(index);
        self.path.waypoint_mut(index).expect("new_wpts just ensured this index exists")
    }

    pub fn pose_wpt(&mut self, index: usize, x: f64, y: f64, heading: f64) -> &mut Self {
        let waypoint = self.waypoint_mut(index);
        waypoint.waypoint_constraints.push(PoseEqualityConstraint::new(x, y, heading).into());
        waypoint.set_guess_pose(Pose2::from_x_y_heading(x, y, heading));
        self
    }

    pub fn translation_wpt(&mut self, index: usize, x: f64, y: f64, heading_guess: f64) -> &mut Self {
        let waypoint = self.waypoint_mut(index);
        waypoint.waypoint_constraints.push(TranslationEqualityConstraint { x, y }.into());
        waypoint.set_guess_pose(Pose2::from_x_y_heading(x, y, heading_guess));
        self
    }

    /// Replaces the last (own) guess point of waypoint `index`.
    pub fn wpt_initial_guess_point(&mut self, index: usize, pose: Pose2<f64>) -> &mut Self {
        self.waypoint_mut(index).set_guess_pose(pose);
        self
    }

    /// Prepends interior guess points to segment `index → index + 1`.
    pub fn sgmt_initial_guess_points(&mut self, index: usize, poses: Vec<Pose2<f64>>) -> &mut Self {
        self.waypoint_mut(index + 1).set_segment_guess_points(poses);
        self
    }

    pub fn wpt_constraint(&mut self, index: usize, constraint: impl Into<Constraint>) -> &mut Self {
        self.waypoint_mut(index).waypoint_constraints.push(constraint.into());
        self
    }

    /// Appends `constraint` to `from`'s waypoint constraints, then to
    /// both the waypoint and segment constraints of every waypoint in
    /// `(from, to]` (spec §4.5).
    pub fn sgmt_constraint(&mut self, from: usize, to: usize, constraint: impl Into<Constraint>) -> Result<&mut Self> {
        if from >= to {
            return Err(PathBuilderError::InvertedSegmentIndices { from, to });
        }
        let constraint = constraint.into();
        self.waypoint_mut(from).waypoint_constraints.push(constraint.clone());
        for index in (from + 1)..=to {
            let waypoint = self.waypoint_mut(index);
            waypoint.waypoint_constraints.push(constraint.clone());
            waypoint.segment_constraints.push(constraint.clone());
        }
        Ok(self)
    }

    fn bumper_corners(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.bumper_corners_with_safety().map(|(corner, _)| corner)
    }

    fn bumper_corners_with_safety(&self) -> impl Iterator<Item = ((f64, f64), f64)> + '_ {
        self.bumpers
            .iter()
            .flat_map(|bumper| bumper.corners.iter().map(move |corner| ((corner.x, corner.y), bumper.safety_distance)))
    }

    pub fn wpt_keep_in_circle(&mut self, index: usize, x: f64, y: f64, radius: f64) -> Result<&mut Self> {
        for (corner, safety_distance) in self.bumper_corners_with_safety().collect::<Vec<_>>() {
            let bound = (radius - safety_distance).max(0.0);
            self.wpt_constraint(index, PointPointMaxConstraint::new(corner, (x, y), bound)?);
        }
        Ok(self)
    }

    pub fn wpt_keep_out_circle(&mut self, index: usize, x: f64, y: f64, radius: f64) -> Result<&mut Self> {
        for (corner, safety_distance) in self.bumper_corners_with_safety().collect::<Vec<_>>() {
            self.wpt_constraint(index, PointPointMinConstraint::new(corner, (x, y), radius + safety_distance)?);
        }
        Ok(self)
    }

    pub fn wpt_keep_in_polygon(&mut self, index: usize, polygon: &[(f64, f64)]) -> Result<&mut Self> {
        let n = polygon.len();
        let edges: Vec<_> = (0..n).map(|i| (polygon[i], polygon[(i + 1) % n])).collect();
        for corner in self.bumper_corners().collect::<Vec<_>>() {
            for &(start, end) in &edges {
                self.wpt_constraint(index, PointLineRegionConstraint::new(corner, start, end, Side::Above)?);
            }
        }
        Ok(self)
    }

    pub fn wpt_keep_in_lane(&mut self, index: usize, center_start: (f64, f64), center_end: (f64, f64), tolerance: f64) -> Result<&mut Self> {
        for (corner, safety_distance) in self.bumper_corners_with_safety().collect::<Vec<_>>() {
            let bound = (tolerance - safety_distance).max(0.0);
            self.wpt_constraint(index, LaneConstraint::new(corner, center_start, center_end, bound)?);
        }
        Ok(self)
    }

    pub fn sgmt_keep_in_circle(&mut self, from: usize, to: usize, x: f64, y: f64, radius: f64) -> Result<&mut Self> {
        for (corner, safety_distance) in self.bumper_corners_with_safety().collect::<Vec<_>>() {
            let bound = (radius - safety_distance).max(0.0);
            self.sgmt_constraint(from, to, PointPointMaxConstraint::new(corner, (x, y), bound)?)?;
        }
        Ok(self)
    }

    pub fn sgmt_keep_out_circle(&mut self, from: usize, to: usize, x: f64, y: f64, radius: f64) -> Result<&mut Self> {
        for (corner, safety_distance) in self.bumper_corners_with_safety().collect::<Vec<_>>() {
            self.sgmt_constraint(from, to, PointPointMinConstraint::new(corner, (x, y), radius + safety_distance)?)?;
        }
        Ok(self)
    }

    pub fn sgmt_keep_in_polygon(&mut self, from: usize, to: usize, polygon: &[(f64, f64)]) -> Result<&mut Self> {
        let n = polygon.len();
        let edges: Vec<_> = (0..n).map(|i| (polygon[i], polygon[(i + 1) % n])).collect();
        for corner in self.bumper_corners().collect::<Vec<_>>() {
            for &(start, end) in &edges {
                self.sgmt_constraint(from, to, PointLineRegionConstraint::new(corner, start, end, Side::Above)?)?;
            }
        }
        Ok(self)
    }

    pub fn sgmt_keep_in_lane(&mut self, from: usize, to: usize, center_start: (f64, f64), center_end: (f64, f64), tolerance: f64) -> Result<&mut Self> {
        for (corner, safety_distance) in self.bumper_corners_with_safety().collect::<Vec<_>>() {
            let bound = (tolerance - safety_distance).max(0.0);
            self.sgmt_constraint(from, to, LaneConstraint::new(corner, center_start, center_end, bound)?)?;
        }
        Ok(self)
    }

    pub fn build(self) -> Path {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use trajopt_path::DifferentialDrivetrain;

    use super::*;

    fn drivetrain() -> Drivetrain {
        Drivetrain::Differential(DifferentialDrivetrain {
            mass: 45.0,
            moment_of_inertia: 6.0,
            wheel_radius: 0.04,
            wheel_max_angular_velocity: 70.0,
            wheel_max_torque: 2.0,
            wheel_cof: 1.5,
            trackwidth: 0.6,
        })
    }

    #[test]
    fn pose_wpt_creates_missing_waypoints_with_default_interval_counts() {
        let mut builder = PathBuilder::new(drivetrain());
        builder.pose_wpt(1, 1.0, 0.0, 0.0);
        let path = builder.build();
        assert_eq!(path.waypoint_count(), 2);
        assert_eq!(path.control_interval_counts, vec![40]);
        assert_eq!(path.waypoint(1).unwrap().waypoint_constraints.len(), 1);
    }

    #[test]
    fn sgmt_constraint_rejects_inverted_indices() {
        let mut builder = PathBuilder::new(drivetrain());
        builder.pose_wpt(0, 0.0, 0.0, 0.0);
        builder.pose_wpt(1, 1.0, 0.0, 0.0);
        let err = builder.sgmt_constraint(2, 1, PoseEqualityConstraint::new(0.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, PathBuilderError::InvertedSegmentIndices { from: 2, to: 1 }));
    }

    #[test]
    fn sgmt_constraint_applies_to_every_waypoint_in_the_range() {
        let mut builder = PathBuilder::new(drivetrain());
        builder.pose_wpt(0, 0.0, 0.0, 0.0);
        builder.pose_wpt(1, 1.0, 0.0, 0.0);
        builder.pose_wpt(2, 2.0, 0.0, 0.0);
        builder
            .sgmt_constraint(0, 2, trajopt_constraints::LinearVelocityMaxMagnitudeConstraint::new(2.0).unwrap())
            .unwrap();
        let path = builder.build();
        assert_eq!(path.waypoint(0).unwrap().waypoint_constraints.len(), 2);
        assert_eq!(path.waypoint(1).unwrap().waypoint_constraints.len(), 2);
        assert_eq!(path.waypoint(1).unwrap().segment_constraints.len(), 1);
        assert_eq!(path.waypoint(2).unwrap().waypoint_constraints.len(), 2);
        assert_eq!(path.waypoint(2).unwrap().segment_constraints.len(), 1);
    }

    #[test]
    fn wpt_keep_in_circle_emits_one_constraint_per_bumper_corner() {
        let mut builder = PathBuilder::new(drivetrain());
        builder.pose_wpt(0, 0.0, 0.0, 0.0);
        builder.set_bumpers(0.35, 0.35, 0.35, 0.35);
        builder.wpt_keep_in_circle(0, 0.0, 0.0, 5.0).unwrap();
        let path = builder.build();
        assert_eq!(path.waypoint(0).unwrap().waypoint_constraints.len(), 5);
    }
}
