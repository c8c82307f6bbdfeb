// =============================================================================
// Pivot Lows — strict local minima over a symmetric window
// =============================================================================
//
// A bar at index `i` is a pivot low when its low is strictly less than every
// low in the `left_bars` positions before it AND the `right_bars` positions
// after it.  Ties never count: two equal lows in the same window suppress
// each other, which keeps the signal unambiguous.
//
// The scan only considers indices with a full window on both sides, i.e.
// `i` in `[left_bars, len - right_bars)`.  An empty result is a legitimate
// outcome (e.g. a monotonic series), not an error.

use serde::Serialize;

/// A confirmed pivot low: position in the low-price column and the low price
/// at that position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PivotPoint {
    pub index: usize,
    pub value: f64,
}

/// Scan `lows` for pivot lows and return them in ascending index order.
///
/// A window size of zero on either side means that side imposes no
/// constraint.  A non-finite low never qualifies as a pivot.
pub fn find_pivot_lows(lows: &[f64], left_bars: usize, right_bars: usize) -> Vec<PivotPoint> {
    if lows.len() < right_bars {
        return Vec::new();
    }

    let mut pivots = Vec::new();
    for i in left_bars..lows.len() - right_bars {
        let candidate = lows[i];
        if !candidate.is_finite() {
            continue;
        }
        let left_ok = lows[i - left_bars..i].iter().all(|&v| candidate < v);
        let right_ok = lows[i + 1..=i + right_bars].iter().all(|&v| candidate < v);
        if left_ok && right_ok {
            pivots.push(PivotPoint {
                index: i,
                value: candidate,
            });
        }
    }
    pivots
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_empty_input() {
        assert!(find_pivot_lows(&[], 15, 15).is_empty());
    }

    #[test]
    fn pivot_window_larger_than_series() {
        let lows = vec![3.0, 2.0, 3.0];
        assert!(find_pivot_lows(&lows, 15, 15).is_empty());
    }

    #[test]
    fn pivot_simple_valley() {
        let lows = vec![5.0, 4.0, 3.0, 4.0, 5.0];
        let pivots = find_pivot_lows(&lows, 2, 2);
        assert_eq!(pivots.len(), 1);
        assert_eq!(pivots[0], PivotPoint { index: 2, value: 3.0 });
    }

    #[test]
    fn pivot_reference_scenario() {
        // Valleys at indices 4 (value 6), 13 (value 5), and 24 (value 4).
        let lows = vec![
            10.0, 9.0, 8.0, 7.0, 6.0, 7.0, 8.0, 9.0, 10.0, 9.0, 8.0, 7.0, 6.0,
            5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 5.0,
            6.0,
        ];
        let pivots = find_pivot_lows(&lows, 2, 2);
        let indices: Vec<usize> = pivots.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![4, 13, 24]);
        assert_eq!(pivots[0].value, 6.0);
        assert_eq!(pivots[1].value, 5.0);
        assert_eq!(pivots[2].value, 4.0);
    }

    #[test]
    fn pivot_ties_do_not_count() {
        // The flat bottom means neither index 2 nor 3 is strictly lower.
        let lows = vec![5.0, 4.0, 3.0, 3.0, 4.0, 5.0];
        assert!(find_pivot_lows(&lows, 2, 2).is_empty());
    }

    #[test]
    fn pivot_monotonic_series_has_none() {
        let descending: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
        assert!(find_pivot_lows(&descending, 3, 3).is_empty());
        let ascending: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        assert!(find_pivot_lows(&ascending, 3, 3).is_empty());
    }

    #[test]
    fn pivot_zero_windows_accept_everything() {
        // With no window on either side every in-range index qualifies.
        let lows = vec![3.0, 1.0, 2.0];
        let pivots = find_pivot_lows(&lows, 0, 0);
        assert_eq!(pivots.len(), 3);
    }

    #[test]
    fn pivot_results_are_ascending() {
        let lows = vec![
            9.0, 3.0, 9.0, 9.0, 2.0, 9.0, 9.0, 1.0, 9.0, 9.0, 0.5, 9.0,
        ];
        let pivots = find_pivot_lows(&lows, 1, 1);
        let indices: Vec<usize> = pivots.iter().map(|p| p.index).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
        assert_eq!(indices, vec![1, 4, 7, 10]);
    }

    /// Brute-force re-scan: every reported pivot must be a strict local
    /// minimum over its full window, and no unreported index may be one.
    #[test]
    fn pivot_strict_minimum_property() {
        let lows: Vec<f64> = (0..120)
            .map(|i| {
                let i = i as f64;
                50.0 + (i * 0.7).sin() * 10.0 + (i * 0.13).cos() * 4.0
            })
            .collect();
        let (left, right) = (5, 5);
        let pivots = find_pivot_lows(&lows, left, right);
        let flagged: Vec<usize> = pivots.iter().map(|p| p.index).collect();

        for i in left..lows.len() - right {
            let is_strict_min = (i - left..i + right + 1)
                .filter(|&j| j != i)
                .all(|j| lows[i] < lows[j]);
            assert_eq!(
                flagged.contains(&i),
                is_strict_min,
                "mismatch at index {i}"
            );
        }
    }

    #[test]
    fn pivot_nan_never_qualifies() {
        let lows = vec![5.0, 4.0, f64::NAN, 4.0, 5.0];
        assert!(find_pivot_lows(&lows, 2, 2).is_empty());
    }
}
