use serde::{Deserialize, Serialize};
use trajopt_geometry::Translation2;

/// Physical parameters of a generalized N-module swerve drivetrain
/// (spec §3). Exactly four modules are modelled by the path builder,
/// but nothing here assumes that count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwerveDrivetrain {
    pub mass: f64,
    pub moment_of_inertia: f64,
    pub wheel_radius: f64,
    pub wheel_max_angular_velocity: f64,
    pub wheel_max_torque: f64,
    pub wheel_cof: f64,
    pub modules: Vec<Translation2<f64>>,
}

impl SwerveDrivetrain {
    /// The per-module force bound: the lesser of the motor's torque
    /// limit and the friction limit shared evenly across modules
    /// (spec §4.3).
    pub fn max_module_force(&self) -> f64 {
        const GRAVITY: f64 = 9.8;
        let motor_limit = self.wheel_max_torque / self.wheel_radius;
        let friction_limit = self.wheel_cof * (self.mass * GRAVITY) / self.modules.len() as f64;
        motor_limit.min(friction_limit)
    }
}

/// Physical parameters of a two-sided differential drivetrain (spec §3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferentialDrivetrain {
    pub mass: f64,
    pub moment_of_inertia: f64,
    pub wheel_radius: f64,
    pub wheel_max_angular_velocity: f64,
    pub wheel_max_torque: f64,
    pub wheel_cof: f64,
    pub trackwidth: f64,
}

impl DifferentialDrivetrain {
    pub fn max_driverail_force(&self) -> f64 {
        const GRAVITY: f64 = 9.8;
        let motor_limit = self.wheel_max_torque / self.wheel_radius;
        let friction_limit = self.wheel_cof * (self.mass * GRAVITY) / 2.0;
        motor_limit.min(friction_limit)
    }
}

/// The two drivetrain families this generator supports (spec §1's
/// non-goal explicitly excludes mecanum and any other drivetrain).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Drivetrain {
    Swerve(SwerveDrivetrain),
    Differential(DifferentialDrivetrain),
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn swerve_force_bound_picks_the_tighter_of_motor_and_friction_limits() {
        let drivetrain = SwerveDrivetrain {
            mass: 45.0,
            moment_of_inertia: 6.0,
            wheel_radius: 0.04,
            wheel_max_angular_velocity: 70.0,
            wheel_max_torque: 2.0,
            wheel_cof: 1.5,
            modules: vec![
                Translation2::new(0.6, 0.6),
                Translation2::new(0.6, -0.6),
                Translation2::new(-0.6, 0.6),
                Translation2::new(-0.6, -0.6),
            ],
        };
        let motor_limit: f64 = 2.0 / 0.04;
        let friction_limit = 1.5 * (45.0 * 9.8) / 4.0;
        assert_relative_eq!(drivetrain.max_module_force(), motor_limit.min(friction_limit));
    }
}
