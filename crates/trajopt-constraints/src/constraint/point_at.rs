use trajopt_expr::{Expr, Problem};
use trajopt_geometry::{Scalar, Translation2};

use super::Apply;
use crate::error::{require_nonnegative_tolerance, Result};
use crate::kinematic_state::KinematicState;

/// The robot heading points at (or, if `flip`, away from) `field_point`
/// to within `heading_tolerance` radians (spec §4.2).
#[derive(Debug, Clone, Copy)]
pub struct PointAtConstraint {
    pub field_point: (f64, f64),
    pub heading_tolerance: f64,
    pub flip: bool,
}

impl PointAtConstraint {
    pub fn new(field_point: (f64, f64), heading_tolerance: f64, flip: bool) -> Result<Self> {
        require_nonnegative_tolerance(heading_tolerance)?;
        Ok(Self {
            field_point,
            heading_tolerance,
            flip,
        })
    }
}

impl Apply for PointAtConstraint {
    fn apply(&self, problem: &mut dyn Problem, state: &KinematicState<'_>) {
        let field_point = Translation2::new(Expr::constant(self.field_point.0), Expr::constant(self.field_point.1));
        let d = field_point - state.pose.translation.clone();
        let dot = state.pose.rotation.cos.clone() * d.x.clone() + state.pose.rotation.sin.clone() * d.y.clone();
        let cos_tolerance = Expr::constant(self.heading_tolerance.cos());
        let bound = cos_tolerance * d.norm();
        if self.flip {
            problem.subject_to(dot.le(-bound));
        } else {
            problem.subject_to(dot.ge(bound));
        }
    }
}
