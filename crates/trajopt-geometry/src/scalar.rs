use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// The capability every geometry primitive is generic over.
///
/// `f64` is the concrete instantiation used for plain numeric data.
/// A symbolic instantiation (an NLP decision-variable expression, see
/// `trajopt_expr::Expr`) implements the same capability so that the
/// geometry primitives, and everything built on top of them, compile
/// unchanged for both a concrete pose and a pose expressed in terms of
/// unknowns handed to the external solver.
pub trait Scalar:
    Sized
    + Clone
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Lift a plain number into this scalar family.
    fn constant(value: f64) -> Self;

    fn sin(&self) -> Self;
    fn cos(&self) -> Self;
    fn sqrt(&self) -> Self;
    fn hypot(&self, other: &Self) -> Self;

    /// `self * self`, broken out because squaring is common enough in
    /// magnitude constraints to deserve not re-deriving it everywhere.
    fn squared(&self) -> Self {
        self.clone() * self.clone()
    }
}

impl Scalar for f64 {
    fn constant(value: f64) -> Self {
        value
    }

    fn sin(&self) -> Self {
        f64::sin(*self)
    }

    fn cos(&self) -> Self {
        f64::cos(*self)
    }

    fn sqrt(&self) -> Self {
        f64::sqrt(*self)
    }

    fn hypot(&self, other: &Self) -> Self {
        f64::hypot(*self, *other)
    }
}
