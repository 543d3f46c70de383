//! Tie-averaged ranking.

/// Rank `values` ascending, 1-based, with ties sharing the mean of the
/// ranks they jointly occupy.
///
/// `[10.0, 20.0, 10.0]` ranks as `[1.5, 3.0, 1.5]`. Equality is exact;
/// callers that need tolerance must quantize first. Values are compared
/// with [`f64::total_cmp`], so the order is total even for NaN, but
/// relationship models reject non-finite inputs before ranking.
///
/// # Examples
///
/// ```
/// use carta_core::average_ranks;
///
/// assert_eq!(average_ranks(&[3.0, 1.0, 2.0]), vec![3.0, 1.0, 2.0]);
/// assert_eq!(average_ranks(&[5.0, 5.0, 1.0]), vec![2.5, 2.5, 1.0]);
/// ```
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // Positions start..end hold ranks start+1 ..= end.
        let shared = (start + 1 + end) as f64 / 2.0;
        for &i in &order[start..end] {
            ranks[i] = shared;
        }
        start = end;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    #[test]
    fn empty_input() {
        assert!(average_ranks(&[]).is_empty());
    }

    #[test]
    fn single_value_ranks_first() {
        assert_eq!(average_ranks(&[42.0]), vec![1.0]);
    }

    #[test]
    fn three_way_tie_shares_middle_rank() {
        assert_eq!(
            average_ranks(&[7.0, 7.0, 7.0, 0.0]),
            vec![3.0, 3.0, 3.0, 1.0]
        );
    }

    #[test]
    fn tied_pair_takes_a_half_rank() {
        let ranks = average_ranks(&[0.3, 0.1 + 0.2, 0.7, -0.2]);
        // 0.1 + 0.2 is not 0.3 in binary, so only exact equality ties.
        assert!(approx_eq!(f64, ranks[0], 2.0, ulps = 2));
        assert!(approx_eq!(f64, ranks[1], 3.0, ulps = 2));
        let tied = average_ranks(&[0.25, 0.25, 0.75, -0.25]);
        assert!(approx_eq!(f64, tied[0], 2.5, ulps = 2));
        assert!(approx_eq!(f64, tied[1], 2.5, ulps = 2));
        let total: f64 = tied.iter().sum();
        assert!(approx_eq!(f64, total, 10.0, epsilon = 1e-12));
    }

    #[test]
    fn negative_and_zero_values() {
        assert_eq!(average_ranks(&[0.0, -1.0, 2.0]), vec![2.0, 1.0, 3.0]);
    }

    proptest! {
        #[test]
        fn distinct_values_form_a_permutation(
            values in proptest::collection::hash_set(-10_000i32..10_000, 0..40)
        ) {
            let values: Vec<f64> = values.into_iter().map(f64::from).collect();
            let mut ranks = average_ranks(&values);
            ranks.sort_by(f64::total_cmp);
            let expected: Vec<f64> = (1..=values.len()).map(|r| r as f64).collect();
            prop_assert_eq!(ranks, expected);
        }

        #[test]
        fn rank_total_is_invariant_under_ties(
            values in proptest::collection::vec(0i32..5, 0..40)
        ) {
            let values: Vec<f64> = values.into_iter().map(f64::from).collect();
            let n = values.len() as f64;
            let total: f64 = average_ranks(&values).iter().sum();
            prop_assert!(approx_eq!(f64, total, n * (n + 1.0) / 2.0, epsilon = 1e-9));
        }
    }
}
