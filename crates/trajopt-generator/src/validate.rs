use trajopt_path::Path;

use crate::error::{GeneratorError, Result};

/// Rejects a path that cannot be turned into a well-formed NLP (spec
/// §4.3, §7).
pub fn validate_path(path: &Path) -> Result<()> {
    let waypoint_count = path.waypoint_count();
    if waypoint_count < 2 {
        return Err(GeneratorError::TooFewWaypoints(waypoint_count));
    }

    let expected = waypoint_count - 1;
    let actual = path.control_interval_counts.len();
    if actual != expected {
        return Err(GeneratorError::ControlIntervalCountMismatch { expected, actual });
    }

    for (segment, &count) in path.control_interval_counts.iter().enumerate() {
        if count == 0 && path.waypoints()[segment + 1].guess_points().len() > 1 {
            return Err(GeneratorError::ZeroIntervalSegmentNotDegenerate { segment });
        }
    }

    Ok(())
}
