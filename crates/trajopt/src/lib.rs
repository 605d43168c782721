//! Time-optimal trajectory generation for swerve and differential
//! drivetrains: build a [`Path`] with [`PathBuilder`], hand it to a
//! [`SwerveTrajectoryGenerator`] or [`DifferentialTrajectoryGenerator`],
//! drive the returned NLP through a [`Problem`] implementation, and read
//! back a [`Solution`] (spec §1).
//!
//! This crate is a thin re-export of the seven crates that do the
//! actual work: geometry, the symbolic scalar, the constraint family,
//! the path model, the initial-guess engine, the fluent builder, and
//! the generator itself.

pub use trajopt_builder::{PathBuilder, PathBuilderError};
pub use trajopt_constraints::{
    AngularVelocityMaxMagnitudeConstraint, Constraint, ConstraintError, KinematicState, LaneConstraint,
    LinearAccelerationMaxMagnitudeConstraint, LinearVelocityDirectionConstraint, LinearVelocityMaxMagnitudeConstraint,
    LinePointConstraint, PointAtConstraint, PointLineConstraint, PointLineRegionConstraint, PointPointMaxConstraint,
    PointPointMinConstraint, PoseEqualityConstraint, Side, TranslationEqualityConstraint,
};
pub use trajopt_expr::{
    CancellationToken, Expr, ExitStatus, FrameLimiter, IterationInfo, Problem, SolveOptions, VarId, DEFAULT_TOLERANCE,
};
pub use trajopt_generator::{DifferentialTrajectoryGenerator, GenerateOutcome, GeneratorError, GeneratorState, SwerveTrajectoryGenerator};
pub use trajopt_geometry::{angle_linspace, angle_modulus, linspace, Pose2, Rotation2, Scalar, Translation2};
pub use trajopt_guess::{
    broken_translation_spline_guess, calculate_trapezoidal_time, chained_translation_spline_guess, divide_evenly,
    finite_difference, linear_guess, uniform_dt_guess,
};
pub use trajopt_path::{
    get_index, Bumper, ControlIntervalCounts, DifferentialDrivetrain, DifferentialSample, DifferentialSolution, Drivetrain,
    Path, Solution, SwerveDrivetrain, SwerveSample, SwerveSolution, Trajectory, Waypoint,
};
