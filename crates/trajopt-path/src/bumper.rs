use serde::{Deserialize, Serialize};
use trajopt_geometry::Translation2;

/// A polygon in the robot body frame, plus the safety distance the
/// builder should keep between the polygon and any obstacle when
/// lowering keep-in/keep-out requests to primitive constraints (spec
/// §3, §4.2: "translates high-level keep-in / keep-out requests
/// against bumper corners/edges").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bumper {
    pub corners: Vec<Translation2<f64>>,
    pub safety_distance: f64,
}

impl Bumper {
    /// The default safety distance the builder's `set_bumpers` applies
    /// to a rectangular bumper built from front/left/right/back offsets
    /// (spec §4.5).
    pub const DEFAULT_SAFETY_DISTANCE: f64 = 0.01;

    /// A rectangular bumper with corners at the four combinations of
    /// the given front/back (x) and left/right (y) offsets from the
    /// robot origin.
    pub fn rectangular(front: f64, left: f64, right: f64, back: f64) -> Self {
        Self {
            corners: vec![
                Translation2::new(front, left),
                Translation2::new(front, -right),
                Translation2::new(-back, -right),
                Translation2::new(-back, left),
            ],
            safety_distance: Self::DEFAULT_SAFETY_DISTANCE,
        }
    }

    /// The corners paired with the next corner, wrapping around, i.e.
    /// the polygon's edges.
    pub fn edges(&self) -> impl Iterator<Item = (&Translation2<f64>, &Translation2<f64>)> {
        let n = self.corners.len();
        (0..n).map(move |i| (&self.corners[i], &self.corners[(i + 1) % n]))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rectangular_bumper_has_four_corners_in_order() {
        let bumper = Bumper::rectangular(0.35, 0.35, 0.35, 0.35);
        assert_eq!(bumper.corners.len(), 4);
        assert_eq!(bumper.corners[0], Translation2::new(0.35, 0.35));
        assert_eq!(bumper.corners[2], Translation2::new(-0.35, -0.35));
    }

    #[test]
    fn edges_wrap_around_to_the_first_corner() {
        let bumper = Bumper::rectangular(0.35, 0.35, 0.35, 0.35);
        let edges: Vec<_> = bumper.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].1, &bumper.corners[0]);
    }
}
