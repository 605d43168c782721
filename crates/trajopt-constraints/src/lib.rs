//! The closed family of waypoint and segment constraints a path can
//! carry, and the small geometric helpers (smooth min/max/abs, clamped
//! line-point distance) their residuals are built from (spec §4.2).

mod constraint;
mod error;
mod kinematic_state;
mod smooth;

pub use constraint::{
    AngularVelocityMaxMagnitudeConstraint, Constraint, LaneConstraint, LinearAccelerationMaxMagnitudeConstraint,
    LinearVelocityDirectionConstraint, LinearVelocityMaxMagnitudeConstraint, LinePointConstraint, PointAtConstraint,
    PointLineConstraint, PointLineRegionConstraint, PointPointMaxConstraint, PointPointMinConstraint, PoseEqualityConstraint,
    Side, TranslationEqualityConstraint,
};
pub use error::{ConstraintError, Result};
pub use kinematic_state::KinematicState;
pub use smooth::{line_point_squared_distance, smooth_abs, smooth_clamp01, smooth_max, smooth_min};
