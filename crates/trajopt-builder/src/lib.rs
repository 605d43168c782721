//! The fluent mutation API used to populate a [`trajopt_path::Path`]
//! with waypoints, constraints, initial-guess points, and
//! keep-in/keep-out regions lowered from bumper polygons (spec §4.5).

mod builder;
mod error;

pub use builder::PathBuilder;
pub use error::{PathBuilderError, Result};
