use trajopt_constraints::KinematicState;
use trajopt_expr::{Expr, Problem};
use trajopt_geometry::{Pose2, Rotation2, Translation2};

/// Every decision variable a swerve generation run allocates, one
/// entry per sample except the per-module force vectors, which hold
/// one inner vector per module (spec §4.3).
pub struct SwerveVariables {
    pub x: Vec<Expr>,
    pub y: Vec<Expr>,
    pub theta_cos: Vec<Expr>,
    pub theta_sin: Vec<Expr>,
    pub velocity_x: Vec<Expr>,
    pub velocity_y: Vec<Expr>,
    pub angular_velocity: Vec<Expr>,
    pub acceleration_x: Vec<Expr>,
    pub acceleration_y: Vec<Expr>,
    pub angular_acceleration: Vec<Expr>,
    pub dt: Vec<Expr>,
    pub module_force_x: Vec<Vec<Expr>>,
    pub module_force_y: Vec<Vec<Expr>>,
}

impl SwerveVariables {
    pub fn new(problem: &mut dyn Problem, sample_count: usize, module_count: usize) -> Self {
        let vars = |problem: &mut dyn Problem, n: usize| (0..n).map(|_| problem.decision_variable()).collect::<Vec<_>>();
        Self {
            x: vars(problem, sample_count),
            y: vars(problem, sample_count),
            theta_cos: vars(problem, sample_count),
            theta_sin: vars(problem, sample_count),
            velocity_x: vars(problem, sample_count),
            velocity_y: vars(problem, sample_count),
            angular_velocity: vars(problem, sample_count),
            acceleration_x: vars(problem, sample_count),
            acceleration_y: vars(problem, sample_count),
            angular_acceleration: vars(problem, sample_count),
            dt: vars(problem, sample_count),
            module_force_x: (0..module_count).map(|_| vars(problem, sample_count)).collect(),
            module_force_y: (0..module_count).map(|_| vars(problem, sample_count)).collect(),
        }
    }

    pub fn sample_count(&self) -> usize {
        self.x.len()
    }

    pub fn module_count(&self) -> usize {
        self.module_force_x.len()
    }

    pub fn poses(&self) -> Vec<Pose2<Expr>> {
        (0..self.sample_count())
            .map(|i| {
                Pose2::new(
                    Translation2::new(self.x[i].clone(), self.y[i].clone()),
                    Rotation2::new_unchecked(self.theta_cos[i].clone(), self.theta_sin[i].clone()),
                )
            })
            .collect()
    }

    pub fn linear_velocities(&self) -> Vec<Translation2<Expr>> {
        (0..self.sample_count())
            .map(|i| Translation2::new(self.velocity_x[i].clone(), self.velocity_y[i].clone()))
            .collect()
    }

    pub fn linear_accelerations(&self) -> Vec<Translation2<Expr>> {
        (0..self.sample_count())
            .map(|i| Translation2::new(self.acceleration_x[i].clone(), self.acceleration_y[i].clone()))
            .collect()
    }

    /// Builds the per-sample [`KinematicState`]s user constraints are
    /// applied against, borrowing from the three owned slices the
    /// caller keeps alive (spec §4.2).
    pub fn kinematic_states<'a>(
        &'a self,
        poses: &'a [Pose2<Expr>],
        velocities: &'a [Translation2<Expr>],
        accelerations: &'a [Translation2<Expr>],
    ) -> Vec<KinematicState<'a>> {
        (0..self.sample_count())
            .map(|i| KinematicState {
                pose: &poses[i],
                linear_velocity: &velocities[i],
                angular_velocity: &self.angular_velocity[i],
                linear_acceleration: &accelerations[i],
                angular_acceleration: &self.angular_acceleration[i],
            })
            .collect()
    }
}
