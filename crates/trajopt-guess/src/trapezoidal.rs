/// Estimates the time to travel `dist` starting and ending at rest,
/// subject to a velocity cap `v_max` and acceleration cap `a_max`,
/// using a trapezoidal speed profile when the distance is long enough
/// to reach cruise speed, or a triangular profile otherwise (spec
/// §4.4). Used only to seed the NLP's `dt` variables.
pub fn calculate_trapezoidal_time(dist: f64, v_max: f64, a_max: f64) -> f64 {
    let cruise_distance = v_max * v_max / a_max;
    if dist > cruise_distance {
        dist / v_max + v_max / a_max
    } else {
        2.0 * (dist * a_max).sqrt() / a_max
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn continuous_at_trapezoid_triangle_boundary() {
        let v_max = 2.0;
        let a_max = 4.0;
        let boundary = v_max * v_max / a_max;
        let just_below = calculate_trapezoidal_time(boundary - 1e-6, v_max, a_max);
        let just_above = calculate_trapezoidal_time(boundary + 1e-6, v_max, a_max);
        assert_relative_eq!(just_below, just_above, epsilon = 1e-4);
    }

    #[test]
    fn triangle_profile_for_short_distances() {
        let time = calculate_trapezoidal_time(1.0, 100.0, 4.0);
        assert_relative_eq!(time, 2.0 * (1.0_f64 * 4.0).sqrt() / 4.0, epsilon = 1e-9);
    }

    #[test]
    fn trapezoid_profile_for_long_distances() {
        let time = calculate_trapezoidal_time(100.0, 2.0, 4.0);
        assert_relative_eq!(time, 100.0 / 2.0 + 2.0 / 4.0, epsilon = 1e-9);
    }
}
