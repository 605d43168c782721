use trajopt_geometry::{angle_modulus, Pose2};
use trajopt_path::Waypoint;

use crate::linear::divide_evenly;

/// Catmull-Rom tangent estimate at each point of `points`: the average
/// of the deltas to the previous and next point, or a one-sided
/// difference at the ends. A single entry point parameterized by
/// whether the caller passes the whole path's points (tangents chain
/// globally, as swerve needs) or just one segment's points (tangents
/// reset at every waypoint, as differential needs) — spec §9's
/// "spline module boundary" design note.
fn catmull_rom_tangents(points: &[f64]) -> Vec<f64> {
    let n = points.len();
    (0..n)
        .map(|i| match i {
            0 => points[1] - points[0],
            i if i == n - 1 => points[i] - points[i - 1],
            i => (points[i + 1] - points[i - 1]) / 2.0,
        })
        .collect()
}

/// Same as [`catmull_rom_tangents`] but for an angular sequence: deltas
/// are taken through [`angle_modulus`] so a heading chain never takes
/// the long way around (spec §4.4).
fn catmull_rom_angular_tangents(angles: &[f64]) -> Vec<f64> {
    let n = angles.len();
    (0..n)
        .map(|i| match i {
            0 => angle_modulus(angles[1] - angles[0]),
            i if i == n - 1 => angle_modulus(angles[i] - angles[i - 1]),
            i => (angle_modulus(angles[i + 1] - angles[i]) + angle_modulus(angles[i] - angles[i - 1])) / 2.0,
        })
        .collect()
}

fn hermite_basis(t: f64) -> (f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    (
        2.0 * t3 - 3.0 * t2 + 1.0,
        t3 - 2.0 * t2 + t,
        -2.0 * t3 + 3.0 * t2,
        t3 - t2,
    )
}

/// Samples the cubic Hermite curve through `values` with the given
/// per-point tangents, producing `edge_counts[k]` samples strictly
/// after `values[k]` and up to and including `values[k + 1]`, for every
/// edge — mirroring [`crate::linear::linear_guess`]'s division, just
/// with a cubic instead of linear interpolant.
fn sample_chain(values: &[f64], tangents: &[f64], edge_counts: &[usize]) -> Vec<f64> {
    let mut samples = Vec::new();
    for (edge, &count) in edge_counts.iter().enumerate() {
        let (p0, p1) = (values[edge], values[edge + 1]);
        let (m0, m1) = (tangents[edge], tangents[edge + 1]);
        for step in 1..=count {
            let t = step as f64 / count as f64;
            let (h00, h10, h01, h11) = hermite_basis(t);
            samples.push(h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1);
        }
    }
    samples
}

fn segment_guess_poses(waypoints: &[Waypoint], segment: usize) -> Vec<Pose2<f64>> {
    let mut poses = vec![waypoints[segment].guess_pose()];
    poses.extend(waypoints[segment + 1].guess_points().iter().copied());
    poses
}

/// Builds the cubic-Hermite translation spline for the whole path in
/// one continuous chain: tangents at interior points depend on their
/// neighbors across segment boundaries (spec §4.4: "a single spline
/// string fits translation through all interior points"). Used for
/// swerve.
pub fn chained_translation_spline_guess(waypoints: &[Waypoint], control_interval_counts: &[usize]) -> Vec<Pose2<f64>> {
    let mut all_points = vec![waypoints[0].guess_pose()];
    let mut edge_counts = Vec::new();
    for (segment, &segment_steps) in control_interval_counts.iter().enumerate() {
        let guess_poses = segment_guess_poses(waypoints, segment);
        edge_counts.extend(divide_evenly(segment_steps, guess_poses.len() - 1));
        all_points.extend(guess_poses.into_iter().skip(1));
    }

    let xs: Vec<f64> = all_points.iter().map(|p| p.translation.x).collect();
    let ys: Vec<f64> = all_points.iter().map(|p| p.translation.y).collect();
    let x_tangents = catmull_rom_tangents(&xs);
    let y_tangents = catmull_rom_tangents(&ys);

    let sampled_xs = sample_chain(&xs, &x_tangents, &edge_counts);
    let sampled_ys = sample_chain(&ys, &y_tangents, &edge_counts);

    let heading_samples = chained_heading_spline_guess(waypoints, control_interval_counts);

    std::iter::once(all_points[0])
        .chain(
            sampled_xs
                .into_iter()
                .zip(sampled_ys)
                .zip(heading_samples.into_iter().skip(1))
                .map(|((x, y), heading)| Pose2::from_x_y_heading(x, y, heading)),
        )
        .collect()
}

/// Builds one independent cubic-Hermite translation spline per segment:
/// tangents reset at every waypoint, so there is no continuity
/// guarantee across them (spec §4.4: "for differential, each adjacent
/// pair is splined independently"). Used for differential.
pub fn broken_translation_spline_guess(waypoints: &[Waypoint], control_interval_counts: &[usize]) -> Vec<Pose2<f64>> {
    let mut samples = vec![waypoints[0].guess_pose()];

    for (segment, &segment_steps) in control_interval_counts.iter().enumerate() {
        let guess_poses = segment_guess_poses(waypoints, segment);
        let edge_counts = divide_evenly(segment_steps, guess_poses.len() - 1);

        let xs: Vec<f64> = guess_poses.iter().map(|p| p.translation.x).collect();
        let ys: Vec<f64> = guess_poses.iter().map(|p| p.translation.y).collect();
        let headings: Vec<f64> = guess_poses.iter().map(Pose2::heading).collect();

        let sampled_xs = sample_chain(&xs, &catmull_rom_tangents(&xs), &edge_counts);
        let sampled_ys = sample_chain(&ys, &catmull_rom_tangents(&ys), &edge_counts);
        let sampled_headings = sample_chain(&headings, &catmull_rom_angular_tangents(&headings), &edge_counts);

        samples.extend(
            sampled_xs
                .into_iter()
                .zip(sampled_ys)
                .zip(sampled_headings)
                .map(|((x, y), heading)| Pose2::from_x_y_heading(x, y, heading)),
        );
    }

    samples
}

/// The heading-only counterpart of [`chained_translation_spline_guess`]:
/// fit as a 1D cubic between each pair of *waypoint* headings (spec
/// §4.4), ignoring interior segment guess points' headings.
fn chained_heading_spline_guess(waypoints: &[Waypoint], control_interval_counts: &[usize]) -> Vec<f64> {
    let waypoint_headings: Vec<f64> = waypoints.iter().map(|w| w.guess_pose().heading()).collect();
    let tangents = catmull_rom_angular_tangents(&waypoint_headings);

    let mut samples = vec![waypoint_headings[0]];
    for (segment, &segment_steps) in control_interval_counts.iter().enumerate() {
        let edge_values = &waypoint_headings[segment..=segment + 1];
        let edge_tangents = &tangents[segment..=segment + 1];
        samples.extend(sample_chain(edge_values, edge_tangents, &[segment_steps]));
    }
    samples
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catmull_rom_tangent_is_centered_difference_for_interior_points() {
        let tangents = catmull_rom_tangents(&[0.0, 1.0, 4.0]);
        assert_relative_eq!(tangents[1], 2.0);
    }

    #[test]
    fn chained_spline_guess_passes_through_every_waypoint() {
        let mut waypoints = vec![Waypoint::origin(), Waypoint::origin(), Waypoint::origin()];
        waypoints[0].set_guess_pose(Pose2::from_x_y_heading(0.0, 0.0, 0.0));
        waypoints[1].set_guess_pose(Pose2::from_x_y_heading(1.0, 1.0, 0.0));
        waypoints[2].set_guess_pose(Pose2::from_x_y_heading(2.0, 0.0, 0.0));
        let counts = [10, 10];

        let samples = chained_translation_spline_guess(&waypoints, &counts);
        assert_eq!(samples.len(), 21);
        assert_relative_eq!(samples[10].translation.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(samples[10].translation.y, 1.0, epsilon = 1e-9);
        assert_relative_eq!(samples[20].translation.x, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn broken_spline_guess_also_passes_through_every_waypoint() {
        let mut waypoints = vec![Waypoint::origin(), Waypoint::origin()];
        waypoints[0].set_guess_pose(Pose2::from_x_y_heading(0.0, 0.0, 0.0));
        waypoints[1].set_guess_pose(Pose2::from_x_y_heading(1.0, 0.0, 0.0));
        let counts = [8];

        let samples = broken_translation_spline_guess(&waypoints, &counts);
        assert_eq!(samples.len(), 9);
        assert_relative_eq!(samples.last().unwrap().translation.x, 1.0, epsilon = 1e-9);
    }
}
