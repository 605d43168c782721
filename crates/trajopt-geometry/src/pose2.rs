use serde::{Deserialize, Serialize};

use crate::rotation2::Rotation2;
use crate::scalar::Scalar;
use crate::translation2::Translation2;

/// A position and heading, generic over the scalar family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose2<T> {
    pub translation: Translation2<T>,
    pub rotation: Rotation2<T>,
}

impl<T> Pose2<T> {
    pub const fn new(translation: Translation2<T>, rotation: Rotation2<T>) -> Self {
        Self {
            translation,
            rotation,
        }
    }
}

impl<T: Scalar> Pose2<T> {
    /// Transform `point`, given in this pose's frame, into the frame this
    /// pose is expressed in: rotate then translate.
    pub fn transform(&self, point: &Translation2<T>) -> Translation2<T> {
        point.rotate_by(&self.rotation) + self.translation.clone()
    }

    pub fn translation_equality_residual(&self, target: &Translation2<T>) -> (T, T) {
        (
            self.translation.x.clone() - target.x.clone(),
            self.translation.y.clone() - target.y.clone(),
        )
    }
}

impl Pose2<f64> {
    pub fn from_x_y_heading(x: f64, y: f64, heading: f64) -> Self {
        Self::new(Translation2::new(x, y), Rotation2::from_angle(heading))
    }

    pub fn heading(&self) -> f64 {
        self.rotation.radians()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn transform_is_rotate_then_translate() {
        let pose = Pose2::from_x_y_heading(1.0, 2.0, std::f64::consts::FRAC_PI_2);
        let point = Translation2::new(1.0, 0.0);
        let transformed = pose.transform(&point);
        assert_relative_eq!(transformed.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(transformed.y, 3.0, epsilon = 1e-9);
    }
}
