//! Weighted aggregation over a variable set of applicable criteria

/// One scoring criterion: its nominal weight and, when applicable, a
/// sub-score in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Criterion {
    pub weight: u32,
    pub score: Option<f64>,
}

impl Criterion {
    pub fn new(weight: u32, score: Option<f64>) -> Self {
        Self { weight, score }
    }
}

/// Sum of weights of the criteria that carry a score. Summed as `u64` so
/// any number of `u32` weights fits.
pub fn applicable_weight(criteria: &[Criterion]) -> u64 {
    criteria
        .iter()
        .filter(|c| c.score.is_some())
        .map(|c| u64::from(c.weight))
        .sum()
}

/// Weighted percentage over the applicable criteria only.
///
/// Criteria without a score contribute neither weight nor score, so sparse
/// inputs are rated on the dimensions they do provide. Returns 0 when nothing
/// is applicable.
pub fn renormalized_percentage(criteria: &[Criterion]) -> u8 {
    let total = applicable_weight(criteria);
    if total == 0 {
        return 0;
    }

    let weighted_sum: f64 = criteria
        .iter()
        .filter_map(|c| c.score.map(|s| s.clamp(0.0, 1.0) * f64::from(c.weight)))
        .sum();

    (weighted_sum / total as f64 * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_applicable() {
        let criteria = [
            Criterion::new(30, Some(1.0)),
            Criterion::new(20, Some(0.0)),
            Criterion::new(25, Some(1.0)),
            Criterion::new(25, Some(0.5)),
        ];
        // (30 + 0 + 25 + 12.5) / 100
        assert_eq!(applicable_weight(&criteria), 100);
        assert_eq!(renormalized_percentage(&criteria), 68);
    }

    #[test]
    fn test_missing_criteria_are_excluded() {
        let criteria = [
            Criterion::new(30, Some(1.0)),
            Criterion::new(20, Some(1.0)),
            Criterion::new(25, Some(1.0)),
            Criterion::new(25, None),
        ];
        assert_eq!(applicable_weight(&criteria), 75);
        assert_eq!(renormalized_percentage(&criteria), 100);
    }

    #[test]
    fn test_nothing_applicable_is_zero() {
        let criteria = [Criterion::new(30, None), Criterion::new(20, None)];
        assert_eq!(renormalized_percentage(&criteria), 0);
        assert_eq!(renormalized_percentage(&[]), 0);
    }

    #[test]
    fn test_zero_weight_criteria_do_not_divide_by_zero() {
        let criteria = [Criterion::new(0, Some(1.0))];
        assert_eq!(renormalized_percentage(&criteria), 0);
    }

    #[test]
    fn test_rounds_to_nearest() {
        // 0.8 * 30 / 50 = 48%
        let criteria = [Criterion::new(30, Some(0.8)), Criterion::new(20, Some(0.0))];
        assert_eq!(renormalized_percentage(&criteria), 48);

        // 1/3 of the skills weight alone, 33.33 -> 33
        let criteria = [Criterion::new(25, Some(1.0 / 3.0))];
        assert_eq!(renormalized_percentage(&criteria), 33);
    }

    #[test]
    fn test_max_weights_sum_without_overflow() {
        let criteria = [
            Criterion::new(u32::MAX, Some(1.0)),
            Criterion::new(u32::MAX, Some(0.0)),
            Criterion::new(u32::MAX, None),
        ];
        assert_eq!(applicable_weight(&criteria), 2 * u64::from(u32::MAX));
        assert_eq!(renormalized_percentage(&criteria), 50);
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let criteria = [Criterion::new(10, Some(3.0)), Criterion::new(10, Some(-1.0))];
        assert_eq!(renormalized_percentage(&criteria), 50);
    }
}
