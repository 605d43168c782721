mod lane;
mod line_point;
mod linear_acceleration_max_magnitude;
mod linear_velocity_direction;
mod linear_velocity_max_magnitude;
mod angular_velocity_max_magnitude;
mod point_at;
mod point_line;
mod point_line_region;
mod point_point_max;
mod point_point_min;
mod pose_equality;
mod translation_equality;

pub use lane::LaneConstraint;
pub use line_point::LinePointConstraint;
pub use linear_acceleration_max_magnitude::LinearAccelerationMaxMagnitudeConstraint;
pub use linear_velocity_direction::LinearVelocityDirectionConstraint;
pub use linear_velocity_max_magnitude::LinearVelocityMaxMagnitudeConstraint;
pub use angular_velocity_max_magnitude::AngularVelocityMaxMagnitudeConstraint;
pub use point_at::PointAtConstraint;
pub use point_line::PointLineConstraint;
pub use point_line_region::{PointLineRegionConstraint, Side};
pub use point_point_max::PointPointMaxConstraint;
pub use point_point_min::PointPointMinConstraint;
pub use pose_equality::PoseEqualityConstraint;
pub use translation_equality::TranslationEqualityConstraint;

use trajopt_expr::Problem;

use crate::kinematic_state::KinematicState;

/// A value object that knows how to emit its own NLP equalities and
/// inequalities. Implemented by every concrete constraint type; kept
/// crate-private because the only thing callers should build is a
/// [`Constraint`] (spec §9: "a tagged variant with a single `apply`
/// virtual-like dispatch, not dynamic inheritance").
pub(crate) trait Apply {
    fn apply(&self, problem: &mut dyn Problem, state: &KinematicState<'_>);
}

/// The closed family of constraints a waypoint or segment can carry
/// (spec §4.2). Stored by value inside [`crate::Waypoint`]'s constraint
/// lists, so heterogeneous constraints can live in one `Vec` without
/// trait objects.
#[derive(Debug, Clone)]
pub enum Constraint {
    PoseEquality(PoseEqualityConstraint),
    TranslationEquality(TranslationEqualityConstraint),
    LinearVelocityMaxMagnitude(LinearVelocityMaxMagnitudeConstraint),
    AngularVelocityMaxMagnitude(AngularVelocityMaxMagnitudeConstraint),
    LinearAccelerationMaxMagnitude(LinearAccelerationMaxMagnitudeConstraint),
    LinearVelocityDirection(LinearVelocityDirectionConstraint),
    PointAt(PointAtConstraint),
    PointPointMin(PointPointMinConstraint),
    PointPointMax(PointPointMaxConstraint),
    LinePoint(LinePointConstraint),
    PointLine(PointLineConstraint),
    PointLineRegion(PointLineRegionConstraint),
    Lane(LaneConstraint),
}

impl Constraint {
    pub fn apply(&self, problem: &mut dyn Problem, state: &KinematicState<'_>) {
        match self {
            Self::PoseEquality(c) => c.apply(problem, state),
            Self::TranslationEquality(c) => c.apply(problem, state),
            Self::LinearVelocityMaxMagnitude(c) => c.apply(problem, state),
            Self::AngularVelocityMaxMagnitude(c) => c.apply(problem, state),
            Self::LinearAccelerationMaxMagnitude(c) => c.apply(problem, state),
            Self::LinearVelocityDirection(c) => c.apply(problem, state),
            Self::PointAt(c) => c.apply(problem, state),
            Self::PointPointMin(c) => c.apply(problem, state),
            Self::PointPointMax(c) => c.apply(problem, state),
            Self::LinePoint(c) => c.apply(problem, state),
            Self::PointLine(c) => c.apply(problem, state),
            Self::PointLineRegion(c) => c.apply(problem, state),
            Self::Lane(c) => c.apply(problem, state),
        }
    }
}

macro_rules! from_constraint_kind {
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for Constraint {
            fn from(value: $ty) -> Self {
                Self::$variant(value)
            }
        }
    };
}

from_constraint_kind!(PoseEquality, PoseEqualityConstraint);
from_constraint_kind!(TranslationEquality, TranslationEqualityConstraint);
from_constraint_kind!(LinearVelocityMaxMagnitude, LinearVelocityMaxMagnitudeConstraint);
from_constraint_kind!(AngularVelocityMaxMagnitude, AngularVelocityMaxMagnitudeConstraint);
from_constraint_kind!(LinearAccelerationMaxMagnitude, LinearAccelerationMaxMagnitudeConstraint);
from_constraint_kind!(LinearVelocityDirection, LinearVelocityDirectionConstraint);
from_constraint_kind!(PointAt, PointAtConstraint);
from_constraint_kind!(PointPointMin, PointPointMinConstraint);
from_constraint_kind!(PointPointMax, PointPointMaxConstraint);
from_constraint_kind!(LinePoint, LinePointConstraint);
from_constraint_kind!(PointLine, PointLineConstraint);
from_constraint_kind!(PointLineRegion, PointLineRegionConstraint);
from_constraint_kind!(Lane, LaneConstraint);
