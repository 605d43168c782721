use trajopt_expr::Expr;
use trajopt_geometry::{Pose2, Translation2};

/// The per-sample quantities a constraint's `apply` is given (spec
/// §4.2): the robot's pose and its first and second time derivatives,
/// all as symbolic expressions over the generator's decision
/// variables.
#[derive(Debug, Clone, Copy)]
pub struct KinematicState<'a> {
    pub pose: &'a Pose2<Expr>,
    pub linear_velocity: &'a Translation2<Expr>,
    pub angular_velocity: &'a Expr,
    pub linear_acceleration: &'a Translation2<Expr>,
    pub angular_acceleration: &'a Expr,
}
