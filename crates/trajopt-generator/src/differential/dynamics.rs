use trajopt_expr::{Expr, Problem};
use trajopt_geometry::Scalar;
use trajopt_path::DifferentialDrivetrain;

use super::variables::DifferentialVariables;

/// The continuous-time 5-state dynamics `f(x, u)` for a differential
/// drivetrain (spec §4.3): state is `(x, y, theta, vl, vr)`, input is
/// `(Fl, Fr)`. The coupling between the two drive rails comes from the
/// `B` matrix built from `1/m` and `r_b^2/J`, where `r_b` is half the
/// trackwidth.
fn continuous_dynamics(state: &[Expr; 5], input: &[Expr; 2], trackwidth: f64, mass: f64, moment_of_inertia: f64) -> [Expr; 5] {
    let theta = state[2].clone();
    let vl = state[3].clone();
    let vr = state[4].clone();
    let fl = input[0].clone();
    let fr = input[1].clone();

    let forward_speed = (vl.clone() + vr.clone()) * Expr::constant(0.5);
    let dx = forward_speed.clone() * theta.cos();
    let dy = forward_speed * theta.sin();
    let dtheta = (vr - vl) / Expr::constant(trackwidth);

    let half_trackwidth_squared = (trackwidth / 2.0).powi(2);
    let a = 1.0 / mass + half_trackwidth_squared / moment_of_inertia;
    let b = 1.0 / mass - half_trackwidth_squared / moment_of_inertia;
    let dvl = Expr::constant(a) * fl.clone() + Expr::constant(b) * fr.clone();
    let dvr = Expr::constant(b) * fl + Expr::constant(a) * fr;

    [dx, dy, dtheta, dvl, dvr]
}

/// One Hermite-Simpson collocation constraint per state component
/// between consecutive samples (spec §4.3): the cubic-spline defect
/// between `x_k` and `x_{k+1}` must match the dynamics evaluated at
/// the segment's midpoint.
fn apply_collocation(
    problem: &mut dyn Problem,
    state_k: [Expr; 5],
    state_k1: [Expr; 5],
    input_k: [Expr; 2],
    input_k1: [Expr; 2],
    dt: Expr,
    trackwidth: f64,
    mass: f64,
    moment_of_inertia: f64,
) {
    let f_k = continuous_dynamics(&state_k, &input_k, trackwidth, mass, moment_of_inertia);
    let f_k1 = continuous_dynamics(&state_k1, &input_k1, trackwidth, mass, moment_of_inertia);

    let half = Expr::constant(0.5);
    let eighth_dt = dt.clone() / Expr::constant(8.0);
    let quarter = Expr::constant(0.25);
    let neg_three_over_two_dt = Expr::constant(-1.5) / dt;

    let mut state_c = Vec::with_capacity(5);
    for k in 0..5 {
        state_c.push(half.clone() * (state_k[k].clone() + state_k1[k].clone()) + eighth_dt.clone() * (f_k[k].clone() - f_k1[k].clone()));
    }
    let state_c: [Expr; 5] = state_c.try_into().unwrap_or_else(|_| unreachable!());

    let input_c = [
        half.clone() * (input_k[0].clone() + input_k1[0].clone()),
        half.clone() * (input_k[1].clone() + input_k1[1].clone()),
    ];

    let f_c = continuous_dynamics(&state_c, &input_c, trackwidth, mass, moment_of_inertia);

    for k in 0..5 {
        let lhs = neg_three_over_two_dt.clone() * (state_k[k].clone() - state_k1[k].clone()) - quarter.clone() * (f_k[k].clone() + f_k1[k].clone());
        problem.subject_to(lhs.equal_to(f_c[k].clone()));
    }
}

/// Applies Hermite-Simpson collocation across every sample transition,
/// plus the per-side wheel speed and drive-rail force bounds (spec
/// §4.3).
pub fn apply_differential_dynamics(problem: &mut dyn Problem, vars: &DifferentialVariables, drivetrain: &DifferentialDrivetrain) {
    let trackwidth = drivetrain.trackwidth;
    let mass = drivetrain.mass;
    let moment_of_inertia = drivetrain.moment_of_inertia;

    let speed_bound = Expr::constant((drivetrain.wheel_radius * drivetrain.wheel_max_angular_velocity).powi(2));
    let force_bound = Expr::constant(drivetrain.max_driverail_force().powi(2));

    for i in 0..vars.sample_count() {
        problem.subject_to((vars.velocity_left[i].clone() * vars.velocity_left[i].clone()).le(speed_bound.clone()));
        problem.subject_to((vars.velocity_right[i].clone() * vars.velocity_right[i].clone()).le(speed_bound.clone()));
        problem.subject_to((vars.force_left[i].clone() * vars.force_left[i].clone()).le(force_bound.clone()));
        problem.subject_to((vars.force_right[i].clone() * vars.force_right[i].clone()).le(force_bound.clone()));
    }

    for i in 0..vars.sample_count() - 1 {
        let state_k = [vars.x[i].clone(), vars.y[i].clone(), vars.heading[i].clone(), vars.velocity_left[i].clone(), vars.velocity_right[i].clone()];
        let state_k1 = [
            vars.x[i + 1].clone(),
            vars.y[i + 1].clone(),
            vars.heading[i + 1].clone(),
            vars.velocity_left[i + 1].clone(),
            vars.velocity_right[i + 1].clone(),
        ];
        let input_k = [vars.force_left[i].clone(), vars.force_right[i].clone()];
        let input_k1 = [vars.force_left[i + 1].clone(), vars.force_right[i + 1].clone()];
        apply_collocation(problem, state_k, state_k1, input_k, input_k1, vars.dt[i].clone(), trackwidth, mass, moment_of_inertia);
    }
}

#[cfg(test)]
mod tests {
    use trajopt_expr::testing::RecordingProblem;

    use super::*;

    fn drivetrain() -> DifferentialDrivetrain {
        DifferentialDrivetrain {
            mass: 45.0,
            moment_of_inertia: 6.0,
            wheel_radius: 0.04,
            wheel_max_angular_velocity: 70.0,
            wheel_max_torque: 2.0,
            wheel_cof: 1.5,
            trackwidth: 0.6,
        }
    }

    #[test]
    fn four_bounds_per_sample_plus_five_collocation_equalities_per_transition() {
        let mut problem = RecordingProblem::new();
        let vars = DifferentialVariables::new(&mut problem, 3);
        apply_differential_dynamics(&mut problem, &vars, &drivetrain());
        assert_eq!(problem.constraints.len(), 4 * 3 + 5 * 2);
    }
}
