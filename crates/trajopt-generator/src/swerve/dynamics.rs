use trajopt_expr::{Expr, Problem};
use trajopt_geometry::{Rotation2, Scalar, Translation2};
use trajopt_path::SwerveDrivetrain;

use super::variables::SwerveVariables;

/// Net-force/torque balance, per-module wheel-speed bound, and
/// per-module force bound, all applied at every sample (spec §4.3).
pub fn apply_swerve_dynamics(problem: &mut dyn Problem, vars: &SwerveVariables, drivetrain: &SwerveDrivetrain) {
    let mass = Expr::constant(drivetrain.mass);
    let moment_of_inertia = Expr::constant(drivetrain.moment_of_inertia);
    let module_speed_bound = Expr::constant((drivetrain.wheel_radius * drivetrain.wheel_max_angular_velocity).powi(2));
    let force_bound = Expr::constant(drivetrain.max_module_force().powi(2));

    for i in 0..vars.sample_count() {
        let rotation = Rotation2::new_unchecked(vars.theta_cos[i].clone(), vars.theta_sin[i].clone());
        let chassis_velocity = Translation2::new(vars.velocity_x[i].clone(), vars.velocity_y[i].clone());
        let body_velocity = chassis_velocity.rotate_by(&rotation.inverse());
        let omega = vars.angular_velocity[i].clone();

        let mut net_force = Translation2::new(Expr::constant(0.0), Expr::constant(0.0));
        let mut net_torque = Expr::constant(0.0);

        for (m, module) in drivetrain.modules.iter().enumerate() {
            let module_position = Translation2::new(Expr::constant(module.x), Expr::constant(module.y)).rotate_by(&rotation);
            let force = Translation2::new(vars.module_force_x[m][i].clone(), vars.module_force_y[m][i].clone());

            let module_velocity = Translation2::new(
                body_velocity.x.clone() + omega.clone() * Expr::constant(-module.y),
                body_velocity.y.clone() + omega.clone() * Expr::constant(module.x),
            );
            problem.subject_to(module_velocity.squared_norm().le(module_speed_bound.clone()));
            problem.subject_to(force.squared_norm().le(force_bound.clone()));

            net_torque = net_torque + module_position.cross(&force);
            net_force = net_force + force;
        }

        problem.subject_to(net_force.x.equal_to(mass.clone() * vars.acceleration_x[i].clone()));
        problem.subject_to(net_force.y.equal_to(mass.clone() * vars.acceleration_y[i].clone()));
        problem.subject_to(net_torque.equal_to(moment_of_inertia.clone() * vars.angular_acceleration[i].clone()));
    }
}

#[cfg(test)]
mod tests {
    use trajopt_expr::testing::RecordingProblem;

    use super::*;

    fn drivetrain() -> SwerveDrivetrain {
        SwerveDrivetrain {
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
        }
    }

    #[test]
    fn two_constraints_per_module_plus_three_balance_equations_per_sample() {
        let mut problem = RecordingProblem::new();
        let vars = SwerveVariables::new(&mut problem, 2, 4);
        apply_swerve_dynamics(&mut problem, &vars, &drivetrain());
        assert_eq!(problem.constraints.len(), 2 * (4 * 2 + 3));
    }
}
