use crate::expr::Expr;

/// Tolerance the spec defaults to for NLP convergence (~0.1mm of
/// position, see spec §6).
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// A single equality or inequality handed to [`Problem::subject_to`].
///
/// Vector-valued constraints (e.g. both components of a translation
/// equality) are expressed as one `Constraint` per component; callers
/// loop over components rather than this type carrying a vector
/// variant, keeping evaluation and solver-side bookkeeping uniform.
#[derive(Debug, Clone)]
pub enum Constraint {
    Equal(Expr, Expr),
    LessOrEqual(Expr, Expr),
    GreaterOrEqual(Expr, Expr),
}

impl Constraint {
    /// The residual that is zero/non-positive/non-negative exactly when
    /// the constraint holds, i.e. `lhs - rhs`.
    pub fn residual(&self) -> Expr {
        match self {
            Self::Equal(lhs, rhs) | Self::LessOrEqual(lhs, rhs) | Self::GreaterOrEqual(lhs, rhs) => {
                lhs.clone() - rhs.clone()
            }
        }
    }

    pub fn holds(&self, values: &[f64], tolerance: f64) -> bool {
        let residual = self.residual().eval(values);
        match self {
            Self::Equal(..) => residual.abs() <= tolerance,
            Self::LessOrEqual(..) => residual <= tolerance,
            Self::GreaterOrEqual(..) => residual >= -tolerance,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SolveOptions {
    pub tolerance: f64,
    pub diagnostics: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            diagnostics: false,
        }
    }
}

/// The outcome of [`Problem::solve`].
///
/// Negative solver exit codes and [`ExitStatus::CallbackRequestedStop`]
/// are failures (spec §7); a non-negative code is a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The solver converged. Wraps the solver's own non-negative exit
    /// code for diagnostics.
    Success(i32),
    /// The solver reported a negative exit code (primal infeasibility,
    /// iteration limit, ...). The code is returned unchanged.
    SolverFailure(i32),
    /// The iteration callback requested the solver stop (spec §5, §7).
    CallbackRequestedStop,
}

impl ExitStatus {
    pub fn from_raw_code(code: i32) -> Self {
        if code < 0 {
            Self::SolverFailure(code)
        } else {
            Self::Success(code)
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// What the solver passes to the registered iteration callback on each
/// rendered frame (spec §5): the current values of every decision
/// variable, plus the caller's opaque handle.
#[derive(Debug, Clone)]
pub struct IterationInfo {
    pub iteration: u64,
    pub variable_values: Vec<f64>,
    pub handle: i64,
}

/// The facility the core assumes an external NLP solver provides
/// (spec §6). The trajectory generator is written entirely against
/// this trait; no concrete solver ships in this crate.
pub trait Problem {
    /// Allocate a fresh decision variable and return an expression
    /// referencing it.
    fn decision_variable(&mut self) -> Expr;

    /// Seed a decision variable's initial value before `solve` runs,
    /// warm-starting the solver from the initial-guess engine (original:
    /// `sleipnir::Variable::SetValue`, called per-sample in
    /// `SwerveTrajectoryGenerator.cpp`/`DifferentialTrajectoryGenerator.cpp`).
    /// A no-op is a valid implementation; it only affects solver
    /// performance, never correctness.
    fn set_initial_value(&mut self, var: crate::expr::VarId, value: f64);

    fn minimize(&mut self, objective: Expr);

    fn subject_to(&mut self, constraint: Constraint);

    /// Register the iteration callback. The solver calls it
    /// synchronously from within `solve`; returning `true` requests
    /// early termination.
    fn set_iteration_callback(&mut self, callback: Box<dyn FnMut(&IterationInfo) -> bool>);

    fn solve(&mut self, options: SolveOptions) -> ExitStatus;
}
