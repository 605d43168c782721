use trajopt_geometry::{angle_linspace, linspace, Pose2};
use trajopt_path::Waypoint;

/// Splits `total` as evenly as possible across `parts` buckets, handing
/// the remainder to the earliest buckets (spec §4.4: "the number of
/// steps... is evenly divided among the interior guess points").
pub fn divide_evenly(total: usize, parts: usize) -> Vec<usize> {
    if parts == 0 {
        return Vec::new();
    }
    let base = total / parts;
    let remainder = total % parts;
    (0..parts).map(|i| base + usize::from(i < remainder)).collect()
}

/// All guess poses that define segment `k`'s shape, in order: waypoint
/// `k`'s own pose, then waypoint `k+1`'s interior guess points, then
/// waypoint `k+1`'s own pose (spec §3, §4.5's `sgmt_initial_guess_points`).
fn segment_guess_poses(waypoints: &[Waypoint], segment: usize) -> Vec<Pose2<f64>> {
    let mut poses = vec![waypoints[segment].guess_pose()];
    poses.extend(waypoints[segment + 1].guess_points().iter().copied());
    poses
}

/// Produces the linear initial guess for the whole path: `S = Σ
/// control_interval_counts + 1` poses, starting with waypoint 0's own
/// pose (spec §4.4). Translation is interpolated with `linspace`;
/// heading with `angle_linspace` so that wrapped deltas take the minor
/// arc.
pub fn linear_guess(waypoints: &[Waypoint], control_interval_counts: &[usize]) -> Vec<Pose2<f64>> {
    let mut samples = vec![waypoints[0].guess_pose()];

    for (segment, &segment_steps) in control_interval_counts.iter().enumerate() {
        let guess_poses = segment_guess_poses(waypoints, segment);
        let edge_counts = divide_evenly(segment_steps, guess_poses.len() - 1);

        for (pair, &count) in guess_poses.windows(2).zip(edge_counts.iter()) {
            let (start, end) = (pair[0], pair[1]);
            let xs = linspace(start.translation.x, end.translation.x, count);
            let ys = linspace(start.translation.y, end.translation.y, count);
            let headings = angle_linspace(start.heading(), end.heading(), count);
            samples.extend(
                xs.into_iter()
                    .zip(ys)
                    .zip(headings)
                    .map(|((x, y), heading)| Pose2::from_x_y_heading(x, y, heading)),
            );
        }
    }

    samples
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn divide_evenly_hands_remainder_to_earliest_buckets() {
        assert_eq!(divide_evenly(10, 3), vec![4, 3, 3]);
        assert_eq!(divide_evenly(9, 3), vec![3, 3, 3]);
        assert_eq!(divide_evenly(5, 0), Vec::<usize>::new());
    }

    #[test]
    fn linear_guess_produces_total_sample_count_poses() {
        let mut waypoints = vec![Waypoint::origin(), Waypoint::origin(), Waypoint::origin()];
        waypoints[0].set_guess_pose(Pose2::from_x_y_heading(0.0, 0.0, 0.0));
        waypoints[1].set_guess_pose(Pose2::from_x_y_heading(1.0, 0.0, 0.0));
        waypoints[2].set_guess_pose(Pose2::from_x_y_heading(2.0, 0.0, 0.0));
        let counts = [4, 4];

        let samples = linear_guess(&waypoints, &counts);
        assert_eq!(samples.len(), counts.iter().sum::<usize>() + 1);
        assert_relative_eq!(samples[0].translation.x, 0.0);
        assert_relative_eq!(samples.last().unwrap().translation.x, 2.0);
    }

    #[test]
    fn interior_guess_points_split_the_segment_step_count() {
        let mut waypoints = vec![Waypoint::origin(), Waypoint::origin()];
        waypoints[0].set_guess_pose(Pose2::from_x_y_heading(0.0, 0.0, 0.0));
        waypoints[1].set_guess_pose(Pose2::from_x_y_heading(2.0, 0.0, 0.0));
        waypoints[1].set_segment_guess_points(vec![Pose2::from_x_y_heading(1.0, 0.0, 0.0)]);
        let counts = [10];

        let samples = linear_guess(&waypoints, &counts);
        assert_eq!(samples.len(), 11);
        assert_relative_eq!(samples[5].translation.x, 1.0);
    }
}
