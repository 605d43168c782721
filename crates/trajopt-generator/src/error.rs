/// Fatal structural problems with a [`trajopt_path::Path`] that make it
/// impossible to formulate an NLP at all (spec §7: malformed input is a
/// build-time usage error, distinct from the solver reporting
/// infeasibility at runtime).
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GeneratorError {
    #[error("a path needs at least two waypoints to form a segment, got {0}")]
    TooFewWaypoints(usize),
    #[error("control_interval_counts must have one entry per segment: expected {expected}, got {actual}")]
    ControlIntervalCountMismatch { expected: usize, actual: usize },
    #[error("segment {segment} has zero control intervals and more than one guess point; zero-interval segments must be degenerate")]
    ZeroIntervalSegmentNotDegenerate { segment: usize },
    #[error("path's drivetrain does not match this generator's drivetrain family")]
    WrongDrivetrain,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
