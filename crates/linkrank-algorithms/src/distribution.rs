//! Helpers for comparing and checking probability distributions

use super::common::RankMap;

/// Default convergence tolerance between two successive rank mappings
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// True when both mappings cover the same pages and no value differs by more
/// than `tolerance`.
pub fn approx_equal(a: &RankMap, b: &RankMap, tolerance: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().all(|(page, &va)| match b.get(page) {
        Some(&vb) => (va - vb).abs() <= tolerance,
        None => false,
    })
}

/// Index-aligned counterpart of [`approx_equal`] for dense score vectors.
pub fn within_tolerance(a: &[f64], b: &[f64], tolerance: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() <= tolerance)
}

/// Sum of all values of a mapping
pub fn total(ranks: &RankMap) -> f64 {
    ranks.values().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, f64)]) -> RankMap {
        entries.iter().map(|&(p, v)| (p.to_string(), v)).collect()
    }

    #[test]
    fn test_approx_equal_within_tolerance() {
        let a = map(&[("a", 0.5), ("b", 0.5)]);
        let b = map(&[("a", 0.5009), ("b", 0.4991)]);
        assert!(approx_equal(&a, &b, DEFAULT_TOLERANCE));
        assert!(!approx_equal(&a, &b, 0.0001));
    }

    #[test]
    fn test_approx_equal_requires_same_pages() {
        let a = map(&[("a", 0.5), ("b", 0.5)]);
        let b = map(&[("a", 0.5), ("c", 0.5)]);
        let c = map(&[("a", 1.0)]);
        assert!(!approx_equal(&a, &b, 1.0));
        assert!(!approx_equal(&a, &c, 1.0));
    }

    #[test]
    fn test_within_tolerance_slices() {
        assert!(within_tolerance(&[0.1, 0.2], &[0.1005, 0.2], 0.001));
        assert!(!within_tolerance(&[0.1, 0.2], &[0.1], 1.0));
        assert!((total(&map(&[("a", 0.25), ("b", 0.75)])) - 1.0).abs() < 1e-12);
    }
}
