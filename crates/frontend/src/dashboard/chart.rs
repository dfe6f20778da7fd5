//! Scaling for the monthly dispatch bar chart.

/// Bar heights in pixels for the given daily counts, linearly scaled so
/// the busiest day reaches `max_height`. All-zero input yields all-zero
/// bars instead of dividing by zero.
pub fn bar_heights(counts: &[i64], max_height: f64) -> Vec<f64> {
    let peak = counts.iter().copied().max().unwrap_or(0);
    if peak <= 0 {
        return vec![0.0; counts.len()];
    }
    counts
        .iter()
        .map(|&count| (count.max(0) as f64 / peak as f64) * max_height)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_to_the_peak() {
        let heights = bar_heights(&[0, 5, 10], 100.0);
        assert_eq!(heights, vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn all_zero_days_render_flat() {
        assert_eq!(bar_heights(&[0, 0, 0], 100.0), vec![0.0, 0.0, 0.0]);
        assert!(bar_heights(&[], 100.0).is_empty());
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        let heights = bar_heights(&[-3, 10], 80.0);
        assert_eq!(heights, vec![0.0, 80.0]);
    }
}
