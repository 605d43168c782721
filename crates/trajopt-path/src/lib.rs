//! The in-memory path representation: waypoints and their constraints,
//! drivetrain parameters, bumper polygons, and the generator's raw and
//! timestamped output types (spec §3).

mod bumper;
mod drivetrain;
mod index;
mod path;
mod sample;
mod solution;
mod waypoint;

pub use bumper::Bumper;
pub use drivetrain::{DifferentialDrivetrain, Drivetrain, SwerveDrivetrain};
pub use index::get_index;
pub use path::{ControlIntervalCounts, Path};
pub use sample::{DifferentialSample, SwerveSample, Trajectory};
pub use solution::{DifferentialSolution, Solution, SwerveSolution};
pub use waypoint::Waypoint;
