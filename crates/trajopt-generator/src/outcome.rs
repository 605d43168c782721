use trajopt_expr::ExitStatus;
use trajopt_path::Solution;

/// What a generator's `generate` call produces: either a solution or
/// the solver's unchanged exit status (spec §4.3: "the solver exit
/// status is returned unchanged on failure").
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    Success(Solution),
    Failure(ExitStatus),
}
