//! A minimal [`Problem`] implementation that records every decision
//! variable and constraint it is handed instead of solving anything.
//! Lets the constraint library and the generator exercise their own
//! logic — "does this emit the right variables and constraints?" —
//! without an actual NLP solver, which is out of scope for this crate
//! (spec §1, §6, §13).

use crate::expr::{Expr, VarId};
use crate::problem::{Constraint, ExitStatus, IterationInfo, Problem, SolveOptions};

#[derive(Debug, Default)]
pub struct RecordingProblem {
    pub variable_count: usize,
    pub initial_values: std::collections::HashMap<usize, f64>,
    pub objective: Option<Expr>,
    pub constraints: Vec<Constraint>,
    pub solve_calls: usize,
}

impl RecordingProblem {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Problem for RecordingProblem {
    fn decision_variable(&mut self) -> Expr {
        let id = VarId(self.variable_count);
        self.variable_count += 1;
        Expr::var(id)
    }

    fn set_initial_value(&mut self, var: VarId, value: f64) {
        self.initial_values.insert(var.0, value);
    }

    fn minimize(&mut self, objective: Expr) {
        self.objective = Some(objective);
    }

    fn subject_to(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    fn set_iteration_callback(&mut self, _callback: Box<dyn FnMut(&IterationInfo) -> bool>) {}

    /// Always reports success without touching any variable; callers
    /// that need real values should `eval` expressions against values
    /// they assign themselves.
    fn solve(&mut self, _options: SolveOptions) -> ExitStatus {
        self.solve_calls += 1;
        ExitStatus::Success(0)
    }
}
