/// Finite-differences a seeded sample sequence into a rate-of-change
/// sequence of the same length: `rate[i] = (values[i+1] - values[i]) /
/// dt[i]` for every interior step, with the final sample carrying the
/// last computed rate forward (spec §4.4: "both guesses also set the
/// initial values of velocity, acceleration... by finite-differencing
/// the sample positions and dividing by the seeded dt").
pub fn finite_difference(values: &[f64], dt: &[f64]) -> Vec<f64> {
    let sample_count = values.len();
    if sample_count < 2 {
        return vec![0.0; sample_count];
    }

    let mut rates = Vec::with_capacity(sample_count);
    for i in 0..sample_count - 1 {
        let step = if dt[i] > 0.0 { dt[i] } else { 1.0 };
        rates.push((values[i + 1] - values[i]) / step);
    }
    rates.push(*rates.last().expect("checked sample_count >= 2 above"));
    rates
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn forward_differences_interior_samples() {
        let values = [0.0, 1.0, 3.0, 3.0];
        let dt = [1.0, 1.0, 1.0, 1.0];
        assert_eq!(finite_difference(&values, &dt), vec![1.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_dt_is_treated_as_a_unit_step_to_avoid_division_by_zero() {
        let values = [0.0, 2.0];
        let dt = [0.0, 0.0];
        assert_eq!(finite_difference(&values, &dt), vec![2.0, 2.0]);
    }

    #[test]
    fn single_sample_has_no_rate() {
        assert_eq!(finite_difference(&[1.0], &[1.0]), vec![0.0]);
    }
}
