use delegate::delegate;

use crate::drivetrain::Drivetrain;
use crate::waypoint::Waypoint;

/// The number of discrete steps in each segment, `control_interval_counts[k]`
/// being the step count of the segment from waypoint `k` to `k + 1`
/// (spec §3).
pub type ControlIntervalCounts = Vec<usize>;

/// An ordered sequence of waypoints, a drivetrain, and the progress
/// callbacks registered on it (spec §3). Plain data assembled by a
/// `PathBuilder` and consumed by the generator.
pub struct Path {
    waypoints: Vec<Waypoint>,
    pub drivetrain: Drivetrain,
    pub control_interval_counts: ControlIntervalCounts,
    callbacks: Vec<Box<dyn FnMut(&trajopt_expr::IterationInfo)>>,
}

impl std::fmt::Debug for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Path")
            .field("waypoints", &self.waypoints)
            .field("drivetrain", &self.drivetrain)
            .field("control_interval_counts", &self.control_interval_counts)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

impl Path {
    pub fn new(drivetrain: Drivetrain) -> Self {
        Self {
            waypoints: Vec::new(),
            drivetrain,
            control_interval_counts: Vec::new(),
            callbacks: Vec::new(),
        }
    }

    delegate! {
        to self.waypoints {
            #[call(len)]
            pub fn waypoint_count(&self) -> usize;

            #[call(is_empty)]
            pub fn has_no_waypoints(&self) -> bool;

            #[call(get)]
            pub fn waypoint(&self, index: usize) -> Option<&Waypoint>;

            #[call(get_mut)]
            pub fn waypoint_mut(&mut self, index: usize) -> Option<&mut Waypoint>;

            #[call(push)]
            pub fn push_waypoint(&mut self, waypoint: Waypoint);
        }
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// The total sample count `S = Σ control_interval_counts + 1` (spec §4.3).
    pub fn total_sample_count(&self) -> usize {
        self.control_interval_counts.iter().sum::<usize>() + 1
    }

    pub fn add_callback(&mut self, callback: impl FnMut(&trajopt_expr::IterationInfo) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Invokes every registered callback, in registration order (spec §5).
    pub fn notify(&mut self, progress: &trajopt_expr::IterationInfo) {
        for callback in &mut self.callbacks {
            callback(progress);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::drivetrain::DifferentialDrivetrain;

    fn dummy_drivetrain() -> Drivetrain {
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
    fn pushing_waypoints_grows_the_path() {
        let mut path = Path::new(dummy_drivetrain());
        assert!(path.has_no_waypoints());
        path.push_waypoint(Waypoint::origin());
        path.push_waypoint(Waypoint::origin());
        assert_eq!(path.waypoint_count(), 2);
        assert!(path.waypoint(0).is_some());
        assert!(path.waypoint(5).is_none());
    }

    #[test]
    fn total_sample_count_sums_control_intervals_plus_one() {
        let mut path = Path::new(dummy_drivetrain());
        path.control_interval_counts = vec![40, 40];
        assert_eq!(path.total_sample_count(), 81);
    }

    #[test]
    fn callbacks_fire_in_registration_order() {
        let mut path = Path::new(dummy_drivetrain());
        let order = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let order_a = order.clone();
        let order_b = order.clone();
        path.add_callback(move |_| order_a.borrow_mut().push(1));
        path.add_callback(move |_| order_b.borrow_mut().push(2));
        path.notify(&trajopt_expr::IterationInfo {
            iteration: 0,
            variable_values: Vec::new(),
            handle: 0,
        });
        assert_eq!(*order.borrow(), vec![1, 2]);
    }
}
