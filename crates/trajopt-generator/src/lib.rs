//! Turns a validated [`trajopt_path::Path`] into a swerve or
//! differential NLP, drives it through a [`trajopt_expr::Problem`], and
//! extracts a [`trajopt_path::Solution`] (spec §4.3). The actual NLP
//! solve happens behind the `Problem` trait; this crate only builds the
//! decision variables and constraints and reads the result back.

mod differential;
mod error;
mod outcome;
mod state;
mod swerve;
mod time_step;
mod user_constraints;
mod validate;

pub use differential::DifferentialTrajectoryGenerator;
pub use error::{GeneratorError, Result};
pub use outcome::GenerateOutcome;
pub use state::GeneratorState;
pub use swerve::SwerveTrajectoryGenerator;
