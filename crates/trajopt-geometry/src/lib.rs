//! 2D translation/rotation/pose algebra, generic over a [`Scalar`]
//! capability shared by plain numbers and NLP decision-variable
//! expressions.

mod pose2;
mod rotation2;
mod scalar;
mod translation2;

pub use pose2::Pose2;
pub use rotation2::{angle_linspace, angle_modulus, linspace, Rotation2};
pub use scalar::Scalar;
pub use translation2::Translation2;
