use serde::{Deserialize, Serialize};

use crate::solution::{DifferentialSolution, SwerveSolution};

/// One timestamped sample of a swerve trajectory, derived from a
/// [`SwerveSolution`] (spec §11, grounded on
/// `choreo/trajectory/SwerveSample.h`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwerveSample {
    pub timestamp: f64,
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub angular_velocity: f64,
}

impl SwerveSample {
    pub fn velocity(&self) -> (f64, f64) {
        (self.velocity_x, self.velocity_y)
    }

    /// Linear interpolation toward `other` at parameter `t ∈ [0, 1]`,
    /// used by callers sampling between two trajectory points rather
    /// than re-running the generator.
    pub fn interpolate(&self, other: &Self, t: f64) -> Self {
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        Self {
            timestamp: lerp(self.timestamp, other.timestamp),
            x: lerp(self.x, other.x),
            y: lerp(self.y, other.y),
            heading: lerp(self.heading, other.heading),
            velocity_x: lerp(self.velocity_x, other.velocity_x),
            velocity_y: lerp(self.velocity_y, other.velocity_y),
            angular_velocity: lerp(self.angular_velocity, other.angular_velocity),
        }
    }
}

/// One timestamped sample of a differential trajectory (spec §11,
/// grounded on `choreo/trajectory/DifferentialSample.h`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifferentialSample {
    pub timestamp: f64,
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub velocity_left: f64,
    pub velocity_right: f64,
}

impl DifferentialSample {
    pub fn velocity(&self) -> (f64, f64) {
        (self.velocity_left, self.velocity_right)
    }

    pub fn interpolate(&self, other: &Self, t: f64) -> Self {
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        Self {
            timestamp: lerp(self.timestamp, other.timestamp),
            x: lerp(self.x, other.x),
            y: lerp(self.y, other.y),
            heading: lerp(self.heading, other.heading),
            velocity_left: lerp(self.velocity_left, other.velocity_left),
            velocity_right: lerp(self.velocity_right, other.velocity_right),
        }
    }
}

/// A convenience projection of a raw [`SwerveSolution`] or
/// [`DifferentialSolution`] into timestamped samples, deriving the
/// running timestamp by prefix-summing `dt` once (spec §6, §11).
/// Mirroring runtime field-side flipping is explicitly out of scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Trajectory {
    Swerve(Vec<SwerveSample>),
    Differential(Vec<DifferentialSample>),
}

impl Trajectory {
    pub fn from_swerve(solution: &SwerveSolution) -> Self {
        let mut timestamp = 0.0;
        let samples = (0..solution.sample_count())
            .map(|i| {
                let sample = SwerveSample {
                    timestamp,
                    x: solution.x[i],
                    y: solution.y[i],
                    heading: solution.theta_sin[i].atan2(solution.theta_cos[i]),
                    velocity_x: solution.velocity_x[i],
                    velocity_y: solution.velocity_y[i],
                    angular_velocity: solution.angular_velocity[i],
                };
                timestamp += solution.dt[i];
                sample
            })
            .collect();
        Self::Swerve(samples)
    }

    pub fn from_differential(solution: &DifferentialSolution) -> Self {
        let mut timestamp = 0.0;
        let samples = (0..solution.sample_count())
            .map(|i| {
                let sample = DifferentialSample {
                    timestamp,
                    x: solution.x[i],
                    y: solution.y[i],
                    heading: solution.heading[i],
                    velocity_left: solution.velocity_left[i],
                    velocity_right: solution.velocity_right[i],
                };
                timestamp += solution.dt[i];
                sample
            })
            .collect();
        Self::Differential(samples)
    }

    pub fn total_time(&self) -> f64 {
        match self {
            Self::Swerve(samples) => samples.last().map_or(0.0, |s| s.timestamp),
            Self::Differential(samples) => samples.last().map_or(0.0, |s| s.timestamp),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn solution() -> SwerveSolution {
        SwerveSolution {
            dt: vec![0.1, 0.2, 0.0],
            x: vec![0.0, 1.0, 2.0],
            y: vec![0.0, 0.0, 0.0],
            theta_cos: vec![1.0, 0.0, -1.0],
            theta_sin: vec![0.0, 1.0, 0.0],
            velocity_x: vec![0.0, 0.0, 0.0],
            velocity_y: vec![0.0, 0.0, 0.0],
            angular_velocity: vec![0.0, 0.0, 0.0],
            acceleration_x: vec![0.0, 0.0, 0.0],
            acceleration_y: vec![0.0, 0.0, 0.0],
            angular_acceleration: vec![0.0, 0.0, 0.0],
            module_forces_x: vec![],
            module_forces_y: vec![],
        }
    }

    #[test]
    fn timestamps_are_prefix_summed_dt() {
        let trajectory = Trajectory::from_swerve(&solution());
        let Trajectory::Swerve(samples) = &trajectory else {
            unreachable!()
        };
        assert_relative_eq!(samples[0].timestamp, 0.0);
        assert_relative_eq!(samples[1].timestamp, 0.1);
        assert_relative_eq!(samples[2].timestamp, 0.3);
        assert_relative_eq!(trajectory.total_time(), 0.3);
    }

    #[test]
    fn heading_is_derived_from_cos_sin() {
        let trajectory = Trajectory::from_swerve(&solution());
        let Trajectory::Swerve(samples) = &trajectory else {
            unreachable!()
        };
        assert_relative_eq!(samples[1].heading, std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
    }
}
