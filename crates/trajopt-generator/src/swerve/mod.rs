mod dynamics;
mod generator;
mod kinematics;
mod variables;

pub use generator::SwerveTrajectoryGenerator;
