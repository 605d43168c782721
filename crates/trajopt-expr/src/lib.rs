//! The symbolic scalar (`Expr`) used to build NLP expressions, and the
//! `Problem` trait contract the generator drives (spec §6). No NLP
//! solver lives here — this crate is the seam between the core and
//! whatever interior-point/autodiff solver a caller plugs in.

mod cancellation;
mod expr;
mod frame_limiter;
mod problem;
pub mod testing;

pub use cancellation::{is_cancellation_requested, request_cancellation, reset_cancellation, CancellationToken};
pub use expr::{Expr, VarId};
pub use frame_limiter::FrameLimiter;
pub use problem::{Constraint, ExitStatus, IterationInfo, Problem, SolveOptions, DEFAULT_TOLERANCE};
