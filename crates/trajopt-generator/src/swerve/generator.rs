use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use trajopt_expr::{CancellationToken, Expr, FrameLimiter, IterationInfo, Problem, SolveOptions};
use trajopt_geometry::{Pose2, Scalar};
use trajopt_guess::{calculate_trapezoidal_time, chained_translation_spline_guess, finite_difference, uniform_dt_guess};
use trajopt_path::{Drivetrain, Path, Solution, SwerveDrivetrain, SwerveSolution};

use super::dynamics::apply_swerve_dynamics;
use super::kinematics::apply_swerve_kinematics;
use super::variables::SwerveVariables;
use crate::error::{GeneratorError, Result};
use crate::outcome::GenerateOutcome;
use crate::state::GeneratorState;
use crate::time_step::{apply_swerve_chord_bound, apply_time_step_bounds};
use crate::user_constraints::apply_user_constraints;
use crate::validate::validate_path;

/// A rough, fixed cruise speed/acceleration used only to seed the
/// per-segment `dt` guess (spec §4.4); the solver refines `dt` freely.
const GUESS_LINEAR_VELOCITY: f64 = 4.0;
const GUESS_LINEAR_ACCELERATION: f64 = 8.0;

/// Builds, solves, and extracts a time-optimal trajectory for a swerve
/// [`Path`] (spec §4.3). Single-use: `generate` consumes it.
pub struct SwerveTrajectoryGenerator {
    path: Path,
    drivetrain: SwerveDrivetrain,
    state: GeneratorState,
    cancellation: CancellationToken,
}

impl SwerveTrajectoryGenerator {
    pub fn new(path: Path) -> Result<Self> {
        validate_path(&path)?;
        let drivetrain = match &path.drivetrain {
            Drivetrain::Swerve(drivetrain) => drivetrain.clone(),
            Drivetrain::Differential(_) => return Err(GeneratorError::WrongDrivetrain),
        };
        Ok(Self {
            path,
            drivetrain,
            state: GeneratorState::Configured,
            cancellation: CancellationToken::child(),
        })
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    pub fn generate(mut self, problem: &mut dyn Problem) -> GenerateOutcome {
        self.state = GeneratorState::Generating;
        tracing::debug!(waypoints = self.path.waypoint_count(), "starting swerve generation");

        let control_interval_counts = self.path.control_interval_counts.clone();
        let sample_count = self.path.total_sample_count();
        let module_count = self.drivetrain.modules.len();

        let vars = SwerveVariables::new(problem, sample_count, module_count);

        apply_swerve_kinematics(problem, &vars);
        apply_swerve_dynamics(problem, &vars, &self.drivetrain);
        apply_time_step_bounds(problem, &vars.dt, &control_interval_counts);
        apply_swerve_chord_bound(
            problem,
            &vars.dt,
            &control_interval_counts,
            self.drivetrain.wheel_radius,
            self.drivetrain.wheel_max_angular_velocity,
            min_module_spacing(&self.drivetrain),
        );

        let poses = vars.poses();
        let velocities = vars.linear_velocities();
        let accelerations = vars.linear_accelerations();
        let states = vars.kinematic_states(&poses, &velocities, &accelerations);
        apply_user_constraints(problem, self.path.waypoints(), &control_interval_counts, &states);

        seed_initial_guess(problem, &vars, self.path.waypoints(), &control_interval_counts);

        let objective = vars.dt.iter().cloned().fold(Expr::constant(0.0), |acc, dt| acc + dt);
        problem.minimize(objective);

        let latest_values = Rc::new(RefCell::new(None));
        let latest_values_in_callback = Rc::clone(&latest_values);
        let mut limiter = FrameLimiter::default();
        let cancellation = self.cancellation.clone();
        let mut path = self.path;
        problem.set_iteration_callback(Box::new(move |info: &IterationInfo| {
            *latest_values_in_callback.borrow_mut() = Some(info.variable_values.clone());
            if limiter.should_run(Instant::now()) {
                path.notify(info);
            }
            cancellation.is_cancelled()
        }));

        let exit = problem.solve(SolveOptions::default());
        if exit.is_success() {
            let values = latest_values.borrow();
            let values = values.as_deref().unwrap_or(&[]);
            tracing::debug!(?exit, "swerve generation succeeded");
            GenerateOutcome::Success(Solution::Swerve(extract_solution(&vars, values)))
        } else {
            tracing::warn!(?exit, "swerve generation failed");
            GenerateOutcome::Failure(exit)
        }
    }
}

fn min_module_spacing(drivetrain: &SwerveDrivetrain) -> f64 {
    let modules = &drivetrain.modules;
    let mut min_distance = f64::INFINITY;
    for i in 0..modules.len() {
        for j in i + 1..modules.len() {
            min_distance = min_distance.min(modules[i].distance(&modules[j]));
        }
    }
    min_distance
}

fn seed_initial_guess(
    problem: &mut dyn Problem,
    vars: &SwerveVariables,
    waypoints: &[trajopt_path::Waypoint],
    control_interval_counts: &[usize],
) {
    let poses: Vec<Pose2<f64>> = chained_translation_spline_guess(waypoints, control_interval_counts);
    let dt = estimate_dt(&poses, control_interval_counts, waypoints.len());

    let xs: Vec<f64> = poses.iter().map(|pose| pose.translation.x).collect();
    let ys: Vec<f64> = poses.iter().map(|pose| pose.translation.y).collect();
    let headings: Vec<f64> = poses.iter().map(|pose| pose.heading()).collect();
    let velocity_x = finite_difference(&xs, &dt);
    let velocity_y = finite_difference(&ys, &dt);
    let angular_velocity = finite_difference(&headings, &dt);
    let acceleration_x = finite_difference(&velocity_x, &dt);
    let acceleration_y = finite_difference(&velocity_y, &dt);
    let angular_acceleration = finite_difference(&angular_velocity, &dt);

    for i in 0..vars.sample_count() {
        seed(problem, &vars.x[i], xs[i]);
        seed(problem, &vars.y[i], ys[i]);
        seed(problem, &vars.theta_cos[i], headings[i].cos());
        seed(problem, &vars.theta_sin[i], headings[i].sin());
        seed(problem, &vars.velocity_x[i], velocity_x[i]);
        seed(problem, &vars.velocity_y[i], velocity_y[i]);
        seed(problem, &vars.angular_velocity[i], angular_velocity[i]);
        seed(problem, &vars.acceleration_x[i], acceleration_x[i]);
        seed(problem, &vars.acceleration_y[i], acceleration_y[i]);
        seed(problem, &vars.angular_acceleration[i], angular_acceleration[i]);
        seed(problem, &vars.dt[i], dt[i]);
    }
}

fn seed(problem: &mut dyn Problem, expr: &Expr, value: f64) {
    if let Some(id) = expr.var_id() {
        problem.set_initial_value(id, value);
    }
}

/// Per-segment trapezoidal `dt` guess, spread evenly across the
/// segment's samples (spec §4.4), falling back to a uniform guess for
/// degenerate (zero-interval) segments.
fn estimate_dt(poses: &[Pose2<f64>], control_interval_counts: &[usize], waypoint_count: usize) -> Vec<f64> {
    let mut dt = uniform_dt_guess(waypoint_count, poses.len());
    let mut offset = 0;
    for &count in control_interval_counts {
        if count > 0 {
            let segment = &poses[offset..=offset + count];
            let distance: f64 = segment
                .windows(2)
                .map(|pair| pair[0].translation.distance(&pair[1].translation))
                .sum();
            let segment_time = calculate_trapezoidal_time(distance, GUESS_LINEAR_VELOCITY, GUESS_LINEAR_ACCELERATION);
            let per_sample = segment_time / count as f64;
            dt[offset..offset + count].fill(per_sample);
        }
        offset += count;
    }
    dt
}

fn extract_solution(vars: &SwerveVariables, values: &[f64]) -> SwerveSolution {
    let eval_all = |exprs: &[Expr]| exprs.iter().map(|e| e.eval(values)).collect::<Vec<_>>();
    SwerveSolution {
        dt: eval_all(&vars.dt),
        x: eval_all(&vars.x),
        y: eval_all(&vars.y),
        theta_cos: eval_all(&vars.theta_cos),
        theta_sin: eval_all(&vars.theta_sin),
        velocity_x: eval_all(&vars.velocity_x),
        velocity_y: eval_all(&vars.velocity_y),
        angular_velocity: eval_all(&vars.angular_velocity),
        acceleration_x: eval_all(&vars.acceleration_x),
        acceleration_y: eval_all(&vars.acceleration_y),
        angular_acceleration: eval_all(&vars.angular_acceleration),
        module_forces_x: vars.module_force_x.iter().map(|module| eval_all(module)).collect(),
        module_forces_y: vars.module_force_y.iter().map(|module| eval_all(module)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use trajopt_expr::testing::RecordingProblem;
    use trajopt_geometry::Translation2;
    use trajopt_path::Waypoint;

    use super::*;

    fn drivetrain() -> Drivetrain {
        Drivetrain::Swerve(SwerveDrivetrain {
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
        })
    }

    #[test]
    fn generate_reports_the_solvers_exit_status_on_failure() {
        let mut path = Path::new(drivetrain());
        let mut start = Waypoint::origin();
        start.waypoint_constraints.push(trajopt_constraints::Constraint::PoseEquality(
            trajopt_constraints::PoseEqualityConstraint::new(0.0, 0.0, 0.0),
        ));
        path.push_waypoint(start);
        let mut end = Waypoint::origin();
        end.set_guess_pose(Pose2::from_x_y_heading(2.0, 0.0, 0.0));
        end.waypoint_constraints.push(trajopt_constraints::Constraint::TranslationEquality(
            trajopt_constraints::TranslationEqualityConstraint::new(2.0, 0.0),
        ));
        path.push_waypoint(end);
        path.control_interval_counts = vec![4];

        let generator = SwerveTrajectoryGenerator::new(path).unwrap();
        assert_eq!(generator.state(), GeneratorState::Configured);

        let mut problem = RecordingProblem::new();
        let outcome = generator.generate(&mut problem);
        // RecordingProblem::solve always reports success, but the point of
        // this test is that variables, constraints, and a seeded initial
        // guess were all produced without panicking.
        assert!(matches!(outcome, GenerateOutcome::Success(Solution::Swerve(_))));
        assert!(!problem.initial_values.is_empty());
    }
}
