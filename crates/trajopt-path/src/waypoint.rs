use trajopt_constraints::Constraint;
use trajopt_geometry::Pose2;

/// One user-specified point along the path. Waypoints do not store
/// their pose directly; it is expressed as a pose-equality or
/// translation-equality constraint in `waypoint_constraints`, plus an
/// initial-guess pose held separately by the builder (spec §3).
///
/// `initial_guess_points` is private: every constructor and mutator
/// keeps it non-empty, so `guess_pose` never needs to fail on
/// otherwise-valid input.
#[derive(Debug, Clone)]
pub struct Waypoint {
    /// Constraints applied only at the sample coinciding with this
    /// waypoint.
    pub waypoint_constraints: Vec<Constraint>,
    /// Constraints applied at every sample of the segment leading *to*
    /// this waypoint (between the previous waypoint and this one).
    pub segment_constraints: Vec<Constraint>,
    /// Ordered initial-guess poses for the segment leading to this
    /// waypoint; the last entry is this waypoint's own guess pose.
    initial_guess_points: Vec<Pose2<f64>>,
}

impl Waypoint {
    /// A waypoint at the origin with no constraints and a single guess
    /// point at the origin, matching `new_wpts`'s default (spec §4.5).
    pub fn origin() -> Self {
        Self {
            waypoint_constraints: Vec::new(),
            segment_constraints: Vec::new(),
            initial_guess_points: vec![Pose2::from_x_y_heading(0.0, 0.0, 0.0)],
        }
    }

    /// Every guess pose for the segment leading to this waypoint,
    /// ending with this waypoint's own guess pose. Never empty.
    pub fn guess_points(&self) -> &[Pose2<f64>] {
        &self.initial_guess_points
    }

    /// This waypoint's own guess pose: the last entry of
    /// `guess_points`.
    pub fn guess_pose(&self) -> Pose2<f64> {
        *self.initial_guess_points.last().expect("initial_guess_points is never empty")
    }

    /// Replaces this waypoint's own guess pose, keeping any interior
    /// segment guess points untouched.
    pub fn set_guess_pose(&mut self, pose: Pose2<f64>) {
        *self.initial_guess_points.last_mut().expect("initial_guess_points is never empty") = pose;
    }

    /// Replaces the interior guess points for the segment leading to
    /// this waypoint, keeping this waypoint's own guess pose.
    pub fn set_segment_guess_points(&mut self, poses: Vec<Pose2<f64>>) {
        let own_pose = self.guess_pose();
        self.initial_guess_points = poses;
        self.initial_guess_points.push(own_pose);
    }
}
