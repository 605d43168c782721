mod dynamics;
mod generator;
mod variables;

pub use generator::DifferentialTrajectoryGenerator;
