use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;

/// A 2D rotation, stored as `(cos, sin)` rather than a bare angle.
///
/// Concrete (`f64`) rotations are always normalized to the unit circle.
/// Symbolic rotations are *not* auto-normalized — the unit-circle
/// identity `cos^2 + sin^2 == 1` must be imposed as an explicit NLP
/// equality wherever a symbolic rotation's components are decision
/// variables (see [`Rotation2::unit_circle_residual`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation2<T> {
    pub cos: T,
    pub sin: T,
}

impl<T> Rotation2<T> {
    /// Construct from already-normalized components without checking.
    pub const fn new_unchecked(cos: T, sin: T) -> Self {
        Self { cos, sin }
    }
}

impl<T: Scalar> Rotation2<T> {
    pub fn identity() -> Self {
        Self::new_unchecked(T::constant(1.0), T::constant(0.0))
    }

    /// `self^-1`, i.e. the conjugate rotation.
    pub fn inverse(&self) -> Self {
        Self::new_unchecked(self.cos.clone(), -self.sin.clone())
    }

    /// Compose two rotations via complex multiplication.
    pub fn compose(&self, other: &Self) -> Self {
        Self::new_unchecked(
            self.cos.clone() * other.cos.clone() - self.sin.clone() * other.sin.clone(),
            self.sin.clone() * other.cos.clone() + self.cos.clone() * other.sin.clone(),
        )
    }

    /// The residual that is zero exactly when `self` and `other` represent
    /// the same angle: `lhs.cos * rhs.sin - lhs.sin * rhs.cos == 0`.
    ///
    /// Safe to use between any mix of concrete and symbolic rotations,
    /// provided both operands share a scalar family.
    pub fn angle_equality_residual(&self, other: &Self) -> T {
        self.cos.clone() * other.sin.clone() - self.sin.clone() * other.cos.clone()
    }

    /// `cos^2 + sin^2 - 1`, zero exactly when the components lie on the
    /// unit circle. Must be imposed as an NLP equality for every symbolic
    /// rotation whose components are decision variables.
    pub fn unit_circle_residual(&self) -> T {
        self.cos.squared() + self.sin.squared() - T::constant(1.0)
    }
}

impl Rotation2<f64> {
    pub fn from_angle(radians: f64) -> Self {
        Self::new_unchecked(radians.cos(), radians.sin())
    }

    /// Construct from raw components, normalizing onto the unit circle.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is the origin, which has no well-defined angle.
    pub fn new(cos: f64, sin: f64) -> Self {
        let norm = f64::hypot(cos, sin);
        assert!(norm > 0.0, "cannot normalize a zero-length rotation");
        Self::new_unchecked(cos / norm, sin / norm)
    }

    pub fn radians(&self) -> f64 {
        self.sin.atan2(self.cos)
    }
}

impl<T: Scalar> std::ops::Mul for Rotation2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

/// Wrap an angle difference into the minor arc `(-pi, pi]`.
pub fn angle_modulus(radians: f64) -> f64 {
    use std::f64::consts::PI;
    let two_pi = 2.0 * PI;
    let mut wrapped = radians % two_pi;
    if wrapped <= -PI {
        wrapped += two_pi;
    } else if wrapped > PI {
        wrapped -= two_pi;
    }
    wrapped
}

/// `N` evenly spaced values strictly between `start` (exclusive) and
/// `end` (inclusive): `start + (end - start) * i / n` for `i in 1..=n`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    (1..=n)
        .map(|i| start + (end - start) * (i as f64) / (n as f64))
        .collect()
}

/// Like [`linspace`], but the delta `end - start` is first wrapped to the
/// minor arc via [`angle_modulus`], so a guess from +175 deg to -175 deg
/// traverses 10 deg rather than 350 deg.
pub fn angle_linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let delta = angle_modulus(end - start);
    linspace(start, start + delta, n)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn from_angle_round_trips_radians() {
        for angle in [-3.0, -1.0, 0.0, 0.5, 1.5, 3.0] {
            let rot = Rotation2::from_angle(angle);
            assert_relative_eq!(rot.radians(), angle, epsilon = 1e-9);
        }
    }

    #[test]
    fn compose_with_inverse_is_identity() {
        let rot = Rotation2::from_angle(1.234);
        let identity = rot.compose(&rot.inverse());
        assert_relative_eq!(identity.cos, 1.0, epsilon = 1e-9);
        assert_relative_eq!(identity.sin, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn angle_linspace_last_sample_hits_wrapped_target() {
        let start = 175.0_f64.to_radians();
        let end = (-175.0_f64).to_radians();
        let samples = angle_linspace(start, end, 18);
        assert_eq!(samples.len(), 18);
        let expected_last = start + 10.0_f64.to_radians();
        assert_relative_eq!(*samples.last().unwrap(), expected_last, epsilon = 1e-9);
    }

    #[test]
    fn linspace_excludes_start_includes_end() {
        let samples = linspace(0.0, 1.0, 4);
        assert_eq!(samples, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn angle_equality_residual_is_zero_for_equal_angles() {
        let a = Rotation2::from_angle(0.3);
        let b = Rotation2::from_angle(0.3);
        assert_relative_eq!(a.angle_equality_residual(&b), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn unit_circle_residual_is_zero_on_circle() {
        let rot = Rotation2::from_angle(2.1);
        assert_relative_eq!(rot.unit_circle_residual(), 0.0, epsilon = 1e-12);
    }
}
