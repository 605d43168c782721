/// Fatal precondition violations raised while populating a path
/// through the builder's fluent API (spec §7: "usage errors at build
/// time").
#[derive(Debug, thiserror::Error)]
pub enum PathBuilderError {
    #[error("segment indices must satisfy from < to, got from={from}, to={to}")]
    InvertedSegmentIndices { from: usize, to: usize },
    #[error(transparent)]
    Constraint(#[from] trajopt_constraints::ConstraintError),
}

pub type Result<T> = std::result::Result<T, PathBuilderError>;
