use trajopt_expr::{Expr, Problem};
use trajopt_geometry::{Rotation2, Scalar};

use super::variables::SwerveVariables;

/// Explicit-Euler integration between every pair of adjacent samples,
/// plus the unit-circle identity every sample's `(theta_cos, theta_sin)`
/// pair must satisfy since both are free decision variables (spec
/// §4.3): position and velocity integrate the way a constant-acceleration
/// step would, heading integrates a constant angular velocity over the
/// step.
pub fn apply_swerve_kinematics(problem: &mut dyn Problem, vars: &SwerveVariables) {
    let half = Expr::constant(0.5);

    for i in 0..vars.sample_count() {
        let rotation = Rotation2::new_unchecked(vars.theta_cos[i].clone(), vars.theta_sin[i].clone());
        problem.subject_to(rotation.unit_circle_residual().equal_to(Expr::constant(0.0)));
    }

    for i in 0..vars.sample_count() - 1 {
        let dt = vars.dt[i].clone();
        let dt_squared = dt.clone() * dt.clone();

        let x_next = vars.x[i].clone() + vars.velocity_x[i].clone() * dt.clone() + half.clone() * vars.acceleration_x[i].clone() * dt_squared.clone();
        problem.subject_to(vars.x[i + 1].clone().equal_to(x_next));

        let y_next = vars.y[i].clone() + vars.velocity_y[i].clone() * dt.clone() + half.clone() * vars.acceleration_y[i].clone() * dt_squared;
        problem.subject_to(vars.y[i + 1].clone().equal_to(y_next));

        let vx_next = vars.velocity_x[i].clone() + vars.acceleration_x[i].clone() * dt.clone();
        problem.subject_to(vars.velocity_x[i + 1].clone().equal_to(vx_next));

        let vy_next = vars.velocity_y[i].clone() + vars.acceleration_y[i].clone() * dt.clone();
        problem.subject_to(vars.velocity_y[i + 1].clone().equal_to(vy_next));

        let omega_next = vars.angular_velocity[i].clone() + vars.angular_acceleration[i].clone() * dt.clone();
        problem.subject_to(vars.angular_velocity[i + 1].clone().equal_to(omega_next));

        let heading_step = vars.angular_velocity[i].clone() * dt;
        let step_rotation = Rotation2::new_unchecked(heading_step.cos(), heading_step.sin());
        let rotation_i = Rotation2::new_unchecked(vars.theta_cos[i].clone(), vars.theta_sin[i].clone());
        let expected_rotation = rotation_i.compose(&step_rotation);
        let rotation_next = Rotation2::new_unchecked(vars.theta_cos[i + 1].clone(), vars.theta_sin[i + 1].clone());
        let residual = rotation_next.angle_equality_residual(&expected_rotation);
        problem.subject_to(residual.equal_to(Expr::constant(0.0)));
    }
}

#[cfg(test)]
mod tests {
    use trajopt_expr::testing::RecordingProblem;

    use super::*;

    #[test]
    fn unit_circle_and_transition_constraints_are_emitted_per_sample() {
        let mut problem = RecordingProblem::new();
        let vars = SwerveVariables::new(&mut problem, 4, 4);
        apply_swerve_kinematics(&mut problem, &vars);
        // 4 unit-circle constraints + 5 transition equalities * 3 steps
        assert_eq!(problem.constraints.len(), 4 + 5 * 3);
    }
}
