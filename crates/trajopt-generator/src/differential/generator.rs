use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use trajopt_expr::{CancellationToken, Expr, FrameLimiter, IterationInfo, Problem, SolveOptions};
use trajopt_geometry::{Pose2, Scalar};
use trajopt_guess::{broken_translation_spline_guess, calculate_trapezoidal_time, finite_difference, uniform_dt_guess};
use trajopt_path::{DifferentialDrivetrain, DifferentialSolution, Drivetrain, Path, Solution};

use super::dynamics::apply_differential_dynamics;
use super::variables::DifferentialVariables;
use crate::error::{GeneratorError, Result};
use crate::outcome::GenerateOutcome;
use crate::state::GeneratorState;
use crate::time_step::apply_time_step_bounds;
use crate::user_constraints::apply_user_constraints;
use crate::validate::validate_path;

const GUESS_LINEAR_VELOCITY: f64 = 4.0;
const GUESS_LINEAR_ACCELERATION: f64 = 8.0;

/// Builds, solves, and extracts a time-optimal trajectory for a
/// differential [`Path`] (spec §4.3). Single-use: `generate` consumes
/// it.
#[derive(Debug)]
pub struct DifferentialTrajectoryGenerator {
    path: Path,
    drivetrain: DifferentialDrivetrain,
    state: GeneratorState,
    cancellation: CancellationToken,
}

impl DifferentialTrajectoryGenerator {
    pub fn new(path: Path) -> Result<Self> {
        validate_path(&path)?;
        let drivetrain = match &path.drivetrain {
            Drivetrain::Differential(drivetrain) => drivetrain.clone(),
            Drivetrain::Swerve(_) => return Err(GeneratorError::WrongDrivetrain),
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
        tracing::debug!(waypoints = self.path.waypoint_count(), "starting differential generation");

        let control_interval_counts = self.path.control_interval_counts.clone();
        let sample_count = self.path.total_sample_count();
        let trackwidth = self.drivetrain.trackwidth;

        let vars = DifferentialVariables::new(problem, sample_count);

        apply_differential_dynamics(problem, &vars, &self.drivetrain);
        apply_time_step_bounds(problem, &vars.dt, &control_interval_counts);

        let poses = vars.poses();
        let velocities = vars.linear_velocities();
        let angular_velocities = vars.angular_velocities(trackwidth);
        let accelerations = vars.linear_accelerations(trackwidth);
        let angular_accelerations = vars.angular_accelerations(trackwidth);
        let states = vars.kinematic_states(&poses, &velocities, &angular_velocities, &accelerations, &angular_accelerations);
        apply_user_constraints(problem, self.path.waypoints(), &control_interval_counts, &states);

        seed_initial_guess(problem, &vars, self.path.waypoints(), &control_interval_counts, trackwidth);

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
            tracing::debug!(?exit, "differential generation succeeded");
            GenerateOutcome::Success(Solution::Differential(extract_solution(&vars, values)))
        } else {
            tracing::warn!(?exit, "differential generation failed");
            GenerateOutcome::Failure(exit)
        }
    }
}

fn seed_initial_guess(
    problem: &mut dyn Problem,
    vars: &DifferentialVariables,
    waypoints: &[trajopt_path::Waypoint],
    control_interval_counts: &[usize],
    trackwidth: f64,
) {
    let poses: Vec<Pose2<f64>> = broken_translation_spline_guess(waypoints, control_interval_counts);
    let dt = estimate_dt(&poses, control_interval_counts, waypoints.len());

    let xs: Vec<f64> = poses.iter().map(|pose| pose.translation.x).collect();
    let ys: Vec<f64> = poses.iter().map(|pose| pose.translation.y).collect();
    let headings: Vec<f64> = poses.iter().map(|pose| pose.heading()).collect();

    let mut arc_length = vec![0.0; poses.len()];
    for i in 1..poses.len() {
        arc_length[i] = arc_length[i - 1] + poses[i - 1].translation.distance(&poses[i].translation);
    }
    let forward_speed = finite_difference(&arc_length, &dt);
    let angular_velocity = finite_difference(&headings, &dt);
    let forward_acceleration = finite_difference(&forward_speed, &dt);
    let angular_acceleration = finite_difference(&angular_velocity, &dt);

    let half_trackwidth = trackwidth / 2.0;
    let velocity_left: Vec<f64> = forward_speed.iter().zip(&angular_velocity).map(|(v, w)| v - w * half_trackwidth).collect();
    let velocity_right: Vec<f64> = forward_speed.iter().zip(&angular_velocity).map(|(v, w)| v + w * half_trackwidth).collect();
    let acceleration_left: Vec<f64> = forward_acceleration.iter().zip(&angular_acceleration).map(|(a, w)| a - w * half_trackwidth).collect();
    let acceleration_right: Vec<f64> = forward_acceleration.iter().zip(&angular_acceleration).map(|(a, w)| a + w * half_trackwidth).collect();

    for i in 0..vars.sample_count() {
        seed(problem, &vars.x[i], xs[i]);
        seed(problem, &vars.y[i], ys[i]);
        seed(problem, &vars.heading[i], headings[i]);
        seed(problem, &vars.velocity_left[i], velocity_left[i]);
        seed(problem, &vars.velocity_right[i], velocity_right[i]);
        seed(problem, &vars.acceleration_left[i], acceleration_left[i]);
        seed(problem, &vars.acceleration_right[i], acceleration_right[i]);
        seed(problem, &vars.dt[i], dt[i]);
    }
}

fn seed(problem: &mut dyn Problem, expr: &Expr, value: f64) {
    if let Some(id) = expr.var_id() {
        problem.set_initial_value(id, value);
    }
}

fn estimate_dt(poses: &[Pose2<f64>], control_interval_counts: &[usize], waypoint_count: usize) -> Vec<f64> {
    let mut dt = uniform_dt_guess(waypoint_count, poses.len());
    let mut offset = 0;
    for &count in control_interval_counts {
        if count > 0 {
            let segment = &poses[offset..=offset + count];
            let distance: f64 = segment.windows(2).map(|pair| pair[0].translation.distance(&pair[1].translation)).sum();
            let segment_time = calculate_trapezoidal_time(distance, GUESS_LINEAR_VELOCITY, GUESS_LINEAR_ACCELERATION);
            let per_sample = segment_time / count as f64;
            dt[offset..offset + count].fill(per_sample);
        }
        offset += count;
    }
    dt
}

fn extract_solution(vars: &DifferentialVariables, values: &[f64]) -> DifferentialSolution {
    let eval_all = |exprs: &[Expr]| exprs.iter().map(|e| e.eval(values)).collect::<Vec<_>>();
    DifferentialSolution {
        dt: eval_all(&vars.dt),
        x: eval_all(&vars.x),
        y: eval_all(&vars.y),
        heading: eval_all(&vars.heading),
        velocity_left: eval_all(&vars.velocity_left),
        velocity_right: eval_all(&vars.velocity_right),
        acceleration_left: eval_all(&vars.acceleration_left),
        acceleration_right: eval_all(&vars.acceleration_right),
        force_left: eval_all(&vars.force_left),
        force_right: eval_all(&vars.force_right),
    }
}

#[cfg(test)]
mod tests {
    use trajopt_expr::testing::RecordingProblem;

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
    fn generate_builds_variables_constraints_and_a_seeded_guess() {
        let mut path = Path::new(drivetrain());
        let mut start = trajopt_path::Waypoint::origin();
        start.waypoint_constraints.push(trajopt_constraints::Constraint::PoseEquality(
            trajopt_constraints::PoseEqualityConstraint::new(0.0, 0.0, 0.0),
        ));
        path.push_waypoint(start);
        let mut end = trajopt_path::Waypoint::origin();
        end.set_guess_pose(Pose2::from_x_y_heading(2.0, 0.0, 0.0));
        end.waypoint_constraints.push(trajopt_constraints::Constraint::TranslationEquality(
            trajopt_constraints::TranslationEqualityConstraint::new(2.0, 0.0),
        ));
        path.push_waypoint(end);
        path.control_interval_counts = vec![4];

        let generator = DifferentialTrajectoryGenerator::new(path).unwrap();
        assert_eq!(generator.state(), GeneratorState::Configured);

        let mut problem = RecordingProblem::new();
        let outcome = generator.generate(&mut problem);
        assert!(matches!(outcome, GenerateOutcome::Success(Solution::Differential(_))));
        assert!(!problem.initial_values.is_empty());
    }

    #[test]
    fn new_rejects_a_swerve_path() {
        let swerve = Drivetrain::Swerve(trajopt_path::SwerveDrivetrain {
            mass: 45.0,
            moment_of_inertia: 6.0,
            wheel_radius: 0.04,
            wheel_max_angular_velocity: 70.0,
            wheel_max_torque: 2.0,
            wheel_cof: 1.5,
            modules: vec![],
        });
        let mut path = Path::new(swerve);
        path.push_waypoint(trajopt_path::Waypoint::origin());
        path.push_waypoint(trajopt_path::Waypoint::origin());
        path.control_interval_counts = vec![4];
        assert_eq!(DifferentialTrajectoryGenerator::new(path).unwrap_err(), GeneratorError::WrongDrivetrain);
    }
}
