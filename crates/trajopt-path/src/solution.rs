use serde::{Deserialize, Serialize};

/// The raw sample vectors a swerve generation run produces (spec §3).
/// Every vector has length `S = Σ control_interval_counts + 1`, except
/// `module_forces_x`/`module_forces_y`, which hold one inner vector per
/// module, each of length `S`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwerveSolution {
    pub dt: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub theta_cos: Vec<f64>,
    pub theta_sin: Vec<f64>,
    pub velocity_x: Vec<f64>,
    pub velocity_y: Vec<f64>,
    pub angular_velocity: Vec<f64>,
    pub acceleration_x: Vec<f64>,
    pub acceleration_y: Vec<f64>,
    pub angular_acceleration: Vec<f64>,
    pub module_forces_x: Vec<Vec<f64>>,
    pub module_forces_y: Vec<Vec<f64>>,
}

impl SwerveSolution {
    pub fn sample_count(&self) -> usize {
        self.x.len()
    }

    /// Net body-frame force at sample `i`, summed across modules
    /// (original: `SwerveSample::chassisForceX/Y`).
    pub fn chassis_force(&self, sample: usize) -> (f64, f64) {
        let fx = self.module_forces_x.iter().map(|module| module[sample]).sum();
        let fy = self.module_forces_y.iter().map(|module| module[sample]).sum();
        (fx, fy)
    }

    /// Net torque about the robot center at sample `i`, given the
    /// modules' robot-frame positions (original: `SwerveSample::chassisTorque`).
    pub fn chassis_torque(&self, sample: usize, modules: &[trajopt_geometry::Translation2<f64>]) -> f64 {
        modules
            .iter()
            .zip(self.module_forces_x[..].iter())
            .zip(self.module_forces_y[..].iter())
            .map(|((module, fx), fy)| module.x * fy[sample] - module.y * fx[sample])
            .sum()
    }
}

/// The raw sample vectors a differential generation run produces
/// (spec §3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferentialSolution {
    pub dt: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub heading: Vec<f64>,
    pub velocity_left: Vec<f64>,
    pub velocity_right: Vec<f64>,
    pub acceleration_left: Vec<f64>,
    pub acceleration_right: Vec<f64>,
    pub force_left: Vec<f64>,
    pub force_right: Vec<f64>,
}

impl DifferentialSolution {
    pub fn sample_count(&self) -> usize {
        self.x.len()
    }
}

/// The generator's result for either drivetrain family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Solution {
    Swerve(SwerveSolution),
    Differential(DifferentialSolution),
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use trajopt_geometry::Translation2;

    use super::*;

    #[test]
    fn chassis_force_sums_across_modules() {
        let solution = SwerveSolution {
            dt: vec![0.1, 0.1],
            x: vec![0.0, 0.1],
            y: vec![0.0, 0.0],
            theta_cos: vec![1.0, 1.0],
            theta_sin: vec![0.0, 0.0],
            velocity_x: vec![0.0, 1.0],
            velocity_y: vec![0.0, 0.0],
            angular_velocity: vec![0.0, 0.0],
            acceleration_x: vec![0.0, 0.0],
            acceleration_y: vec![0.0, 0.0],
            angular_acceleration: vec![0.0, 0.0],
            module_forces_x: vec![vec![1.0, 1.0], vec![2.0, 2.0]],
            module_forces_y: vec![vec![0.5, 0.5], vec![-0.5, -0.5]],
        };
        let (fx, fy) = solution.chassis_force(0);
        assert_relative_eq!(fx, 3.0);
        assert_relative_eq!(fy, 0.0);
    }

    #[test]
    fn chassis_torque_uses_module_positions() {
        let solution = SwerveSolution {
            dt: vec![0.1],
            x: vec![0.0],
            y: vec![0.0],
            theta_cos: vec![1.0],
            theta_sin: vec![0.0],
            velocity_x: vec![0.0],
            velocity_y: vec![0.0],
            angular_velocity: vec![0.0],
            acceleration_x: vec![0.0],
            acceleration_y: vec![0.0],
            angular_acceleration: vec![0.0],
            module_forces_x: vec![vec![0.0]],
            module_forces_y: vec![vec![1.0]],
        };
        let modules = vec![Translation2::new(1.0, 0.0)];
        assert_relative_eq!(solution.chassis_torque(0, &modules), 1.0);
    }
}
