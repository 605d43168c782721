//! Produces a feasible-looking discrete trajectory — linear or cubic
//! spline — used to warm-start the NLP, plus the small numeric
//! utilities (trapezoidal time, finite differencing) the generator
//! reuses to seed velocity/acceleration/`dt` variables (spec §4.4).

mod finite_difference;
mod linear;
mod seed;
mod spline;
mod trapezoidal;

pub use finite_difference::finite_difference;
pub use linear::{divide_evenly, linear_guess};
pub use seed::uniform_dt_guess;
pub use spline::{broken_translation_spline_guess, chained_translation_spline_guess};
pub use trapezoidal::calculate_trapezoidal_time;
pub use trajopt_path::get_index;
