use trajopt_constraints::KinematicState;
use trajopt_expr::{Expr, Problem};
use trajopt_geometry::{Pose2, Rotation2, Scalar, Translation2};

/// Every decision variable a differential generation run allocates, one
/// entry per sample (spec §4.3). Heading is a bare scalar `theta`, not
/// a `(cos, sin)` pair — differential has no rotation-composition step
/// to keep on the unit circle the way swerve does.
pub struct DifferentialVariables {
    pub x: Vec<Expr>,
    pub y: Vec<Expr>,
    pub heading: Vec<Expr>,
    pub velocity_left: Vec<Expr>,
    pub velocity_right: Vec<Expr>,
    pub acceleration_left: Vec<Expr>,
    pub acceleration_right: Vec<Expr>,
    pub force_left: Vec<Expr>,
    pub force_right: Vec<Expr>,
    pub dt: Vec<Expr>,
}

impl DifferentialVariables {
    pub fn new(problem: &mut dyn Problem, sample_count: usize) -> Self {
        let vars = |problem: &mut dyn Problem, n: usize| (0..n).map(|_| problem.decision_variable()).collect::<Vec<_>>();
        Self {
            x: vars(problem, sample_count),
            y: vars(problem, sample_count),
            heading: vars(problem, sample_count),
            velocity_left: vars(problem, sample_count),
            velocity_right: vars(problem, sample_count),
            acceleration_left: vars(problem, sample_count),
            acceleration_right: vars(problem, sample_count),
            force_left: vars(problem, sample_count),
            force_right: vars(problem, sample_count),
            dt: vars(problem, sample_count),
        }
    }

    pub fn sample_count(&self) -> usize {
        self.x.len()
    }

    pub fn poses(&self) -> Vec<Pose2<Expr>> {
        (0..self.sample_count())
            .map(|i| {
                Pose2::new(
                    Translation2::new(self.x[i].clone(), self.y[i].clone()),
                    Rotation2::new_unchecked(self.heading[i].cos(), self.heading[i].sin()),
                )
            })
            .collect()
    }

    fn forward_speed(&self, i: usize) -> Expr {
        (self.velocity_left[i].clone() + self.velocity_right[i].clone()) * Expr::constant(0.5)
    }

    fn forward_acceleration(&self, i: usize) -> Expr {
        (self.acceleration_left[i].clone() + self.acceleration_right[i].clone()) * Expr::constant(0.5)
    }

    fn angular_velocity(&self, i: usize, trackwidth: f64) -> Expr {
        (self.velocity_right[i].clone() - self.velocity_left[i].clone()) / Expr::constant(trackwidth)
    }

    fn angular_acceleration(&self, i: usize, trackwidth: f64) -> Expr {
        (self.acceleration_right[i].clone() - self.acceleration_left[i].clone()) / Expr::constant(trackwidth)
    }

    /// Chassis linear velocity in the world frame, derived from the
    /// per-side wheel speeds (spec §4.3's continuous-dynamics `dx/dt`,
    /// `dy/dt` equations), needed to apply generic [`KinematicState`]
    /// user constraints to a differential path.
    pub fn linear_velocities(&self) -> Vec<Translation2<Expr>> {
        (0..self.sample_count())
            .map(|i| {
                let speed = self.forward_speed(i);
                Translation2::new(speed.clone() * self.heading[i].cos(), speed * self.heading[i].sin())
            })
            .collect()
    }

    pub fn angular_velocities(&self, trackwidth: f64) -> Vec<Expr> {
        (0..self.sample_count()).map(|i| self.angular_velocity(i, trackwidth)).collect()
    }

    /// Chassis linear acceleration in the world frame: the time
    /// derivative of `linear_velocities`, including the centripetal
    /// term from a turning forward speed.
    pub fn linear_accelerations(&self, trackwidth: f64) -> Vec<Translation2<Expr>> {
        (0..self.sample_count())
            .map(|i| {
                let speed = self.forward_speed(i);
                let forward_accel = self.forward_acceleration(i);
                let omega = self.angular_velocity(i, trackwidth);
                let cos = self.heading[i].cos();
                let sin = self.heading[i].sin();
                let x = forward_accel.clone() * cos.clone() - speed.clone() * omega.clone() * sin.clone();
                let y = forward_accel * sin + speed * omega * cos;
                Translation2::new(x, y)
            })
            .collect()
    }

    pub fn angular_accelerations(&self, trackwidth: f64) -> Vec<Expr> {
        (0..self.sample_count()).map(|i| self.angular_acceleration(i, trackwidth)).collect()
    }

    pub fn kinematic_states<'a>(
        &'a self,
        poses: &'a [Pose2<Expr>],
        linear_velocities: &'a [Translation2<Expr>],
        angular_velocities: &'a [Expr],
        linear_accelerations: &'a [Translation2<Expr>],
        angular_accelerations: &'a [Expr],
    ) -> Vec<KinematicState<'a>> {
        (0..self.sample_count())
            .map(|i| KinematicState {
                pose: &poses[i],
                linear_velocity: &linear_velocities[i],
                angular_velocity: &angular_velocities[i],
                linear_acceleration: &linear_accelerations[i],
                angular_acceleration: &angular_accelerations[i],
            })
            .collect()
    }
}
