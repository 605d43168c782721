/// Fatal precondition violations raised while constructing a constraint
/// (spec §7: "usage errors at build time"). These abort path
/// construction — the builder propagates them rather than silently
/// clamping the offending value.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConstraintError {
    #[error("magnitude must be nonnegative, got {0}")]
    NegativeMagnitude(f64),
    #[error("tolerance must be nonnegative, got {0}")]
    NegativeTolerance(f64),
    #[error("line endpoints must not coincide")]
    DegenerateLine,
}

pub type Result<T> = std::result::Result<T, ConstraintError>;

pub(crate) fn require_nonnegative_magnitude(value: f64) -> Result<()> {
    if value < 0.0 {
        Err(ConstraintError::NegativeMagnitude(value))
    } else {
        Ok(())
    }
}

pub(crate) fn require_nonnegative_tolerance(value: f64) -> Result<()> {
    if value < 0.0 {
        Err(ConstraintError::NegativeTolerance(value))
    } else {
        Ok(())
    }
}
