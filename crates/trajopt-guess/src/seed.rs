/// A rough per-sample `dt` seed, `(waypoint_count * 5) / total_samples`
/// seconds, used to seed every sample's time step before the
/// generator's per-segment trapezoidal bootstrap refines individual
/// segments (spec §4.4).
pub fn uniform_dt_guess(waypoint_count: usize, total_samples: usize) -> Vec<f64> {
    let dt = (waypoint_count as f64 * 5.0) / total_samples as f64;
    vec![dt; total_samples]
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn uniform_dt_guess_fills_every_sample_with_the_same_value() {
        let dt = uniform_dt_guess(3, 81);
        assert_eq!(dt.len(), 81);
        assert_relative_eq!(dt[0], 15.0 / 81.0);
        assert_relative_eq!(dt[80], dt[0]);
    }
}
