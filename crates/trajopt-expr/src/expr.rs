use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

use trajopt_geometry::Scalar;

/// The identifier a [`Problem`](crate::Problem) hands back from
/// `decision_variable()`. Opaque to callers; only the solver
/// implementation interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(pub usize);

/// A symbolic scalar expression over NLP decision variables.
///
/// This is the "expression variable" scalar family the geometry
/// primitives (`Translation2<Expr>`, `Rotation2<Expr>`, `Pose2<Expr>`)
/// are instantiated with when building constraints. It is *not* an
/// autodiff engine: differentiation and numerical solving are the
/// external solver's job (see [`Problem`](crate::Problem), spec §6).
/// This tree exists purely so constraint and cost expressions can be
/// assembled in ordinary Rust arithmetic and then handed, structurally,
/// to whatever `Problem` implementation does the real work.
#[derive(Debug, Clone)]
pub enum Expr {
    Constant(f64),
    Var(VarId),
    Neg(Rc<Expr>),
    Add(Rc<Expr>, Rc<Expr>),
    Sub(Rc<Expr>, Rc<Expr>),
    Mul(Rc<Expr>, Rc<Expr>),
    Div(Rc<Expr>, Rc<Expr>),
    Sin(Rc<Expr>),
    Cos(Rc<Expr>),
    Sqrt(Rc<Expr>),
    Hypot(Rc<Expr>, Rc<Expr>),
}

impl Expr {
    pub fn var(id: VarId) -> Self {
        Self::Var(id)
    }

    /// The [`VarId`] this expression names, if it is a bare variable
    /// reference rather than a compound expression.
    pub fn var_id(&self) -> Option<VarId> {
        match self {
            Self::Var(id) => Some(*id),
            _ => None,
        }
    }

    /// Evaluate the expression given a complete assignment of variable
    /// values, indexed by [`VarId`]. Used by test doubles of `Problem`
    /// and by the generator to reconstruct a partial solution from the
    /// solver's raw iteration values.
    pub fn eval(&self, values: &[f64]) -> f64 {
        match self {
            Self::Constant(c) => *c,
            Self::Var(id) => values[id.0],
            Self::Neg(a) => -a.eval(values),
            Self::Add(a, b) => a.eval(values) + b.eval(values),
            Self::Sub(a, b) => a.eval(values) - b.eval(values),
            Self::Mul(a, b) => a.eval(values) * b.eval(values),
            Self::Div(a, b) => a.eval(values) / b.eval(values),
            Self::Sin(a) => a.eval(values).sin(),
            Self::Cos(a) => a.eval(values).cos(),
            Self::Sqrt(a) => a.eval(values).sqrt(),
            Self::Hypot(a, b) => a.eval(values).hypot(b.eval(values)),
        }
    }

    pub fn equal_to(self, other: Self) -> crate::problem::Constraint {
        crate::problem::Constraint::Equal(self, other)
    }

    pub fn le(self, other: Self) -> crate::problem::Constraint {
        crate::problem::Constraint::LessOrEqual(self, other)
    }

    pub fn ge(self, other: Self) -> crate::problem::Constraint {
        crate::problem::Constraint::GreaterOrEqual(self, other)
    }
}

impl Scalar for Expr {
    fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    fn sin(&self) -> Self {
        Self::Sin(Rc::new(self.clone()))
    }

    fn cos(&self) -> Self {
        Self::Cos(Rc::new(self.clone()))
    }

    fn sqrt(&self) -> Self {
        Self::Sqrt(Rc::new(self.clone()))
    }

    fn hypot(&self, other: &Self) -> Self {
        Self::Hypot(Rc::new(self.clone()), Rc::new(other.clone()))
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::Add(Rc::new(self), Rc::new(rhs))
    }
}

impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::Sub(Rc::new(self), Rc::new(rhs))
    }
}

impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::Mul(Rc::new(self), Rc::new(rhs))
    }
}

impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::Div(Rc::new(self), Rc::new(rhs))
    }
}

impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self {
        Self::Neg(Rc::new(self))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn eval_arithmetic_tree() {
        let x = Expr::var(VarId(0));
        let y = Expr::var(VarId(1));
        let expr = x.clone() * x + y.sin();
        assert_relative_eq!(expr.eval(&[2.0, 0.0]), 4.0, epsilon = 1e-12);
    }
}
