use serde::{Deserialize, Serialize};

use crate::rotation2::Rotation2;
use crate::scalar::Scalar;

/// Below this magnitude a translation's direction is considered undefined.
///
/// Only meaningful for the concrete `f64` instantiation; a symbolic
/// translation has no numeric magnitude to compare against until the
/// solver assigns values to its unknowns.
const ZERO_NORM_EPSILON: f64 = 1e-6;

/// A 2D displacement, generic over the scalar family it is built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Translation2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Translation2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Translation2<T> {
    pub fn zero() -> Self {
        Self::new(T::constant(0.0), T::constant(0.0))
    }

    pub fn rotate_by(&self, rotation: &Rotation2<T>) -> Self {
        Self::new(
            self.x.clone() * rotation.cos.clone() - self.y.clone() * rotation.sin.clone(),
            self.x.clone() * rotation.sin.clone() + self.y.clone() * rotation.cos.clone(),
        )
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x.clone() * other.x.clone() + self.y.clone() * other.y.clone()
    }

    /// The scalar (z-component) of the 2D cross product `self x other`.
    pub fn cross(&self, other: &Self) -> T {
        self.x.clone() * other.y.clone() - self.y.clone() * other.x.clone()
    }

    pub fn squared_norm(&self) -> T {
        self.dot(self)
    }

    pub fn norm(&self) -> T {
        self.squared_norm().sqrt()
    }

    pub fn distance(&self, other: &Self) -> T {
        (self.clone() - other.clone()).norm()
    }

    pub fn scale(&self, factor: T) -> Self {
        Self::new(self.x.clone() * factor.clone(), self.y.clone() * factor)
    }
}

impl Translation2<f64> {
    /// The direction of this translation, falling back to the identity
    /// rotation when the translation is too short to have a well-defined
    /// angle.
    pub fn angle(&self) -> Rotation2<f64> {
        if f64::hypot(self.x, self.y) < ZERO_NORM_EPSILON {
            Rotation2::identity()
        } else {
            let norm = self.norm();
            Rotation2::new_unchecked(self.x / norm, self.y / norm)
        }
    }
}

impl<T: Scalar> std::ops::Add for Translation2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> std::ops::Sub for Translation2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> std::ops::Neg for Translation2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn rotate_then_unrotate_is_identity() {
        let t = Translation2::new(3.0_f64, -2.0);
        let rot = Rotation2::from_angle(0.7);
        let round_tripped = t.rotate_by(&rot).rotate_by(&rot.inverse());
        assert_relative_eq!(round_tripped.x, t.x, epsilon = 1e-9);
        assert_relative_eq!(round_tripped.y, t.y, epsilon = 1e-9);
    }

    #[test]
    fn cross_product_is_scalar() {
        let a = Translation2::new(1.0_f64, 0.0);
        let b = Translation2::new(0.0_f64, 1.0);
        assert_relative_eq!(a.cross(&b), 1.0);
        assert_relative_eq!(b.cross(&a), -1.0);
    }

    #[test]
    fn zero_translation_angle_falls_back_to_identity() {
        let t = Translation2::new(0.0_f64, 0.0);
        let angle = t.angle();
        assert_relative_eq!(angle.cos, 1.0);
        assert_relative_eq!(angle.sin, 0.0);
    }

    #[test]
    fn distance_matches_norm_of_difference() {
        let a = Translation2::new(0.0_f64, 0.0);
        let b = Translation2::new(3.0_f64, 4.0);
        assert_relative_eq!(a.distance(&b), 5.0);
    }
}
