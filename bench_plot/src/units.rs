use crate::defaults::KIB_PER_MIB;

/// Convert a throughput logged in KiB/s into MiB/s.
pub fn kib_to_mib(kib_per_sec: f64) -> f64 {
    kib_per_sec / KIB_PER_MIB
}

/// Element-wise sum of two throughput series.
///
/// Both series come from the same run and therefore have equal length.
pub fn total_throughput(cache: &[f64], core: &[f64]) -> Vec<f64> {
    cache.iter().zip(core).map(|(c, k)| c + k).collect()
}

/// Smallest and largest finite value of a series, if any.
pub fn finite_bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Axis range covering `bounds`, widened so that it never collapses.
///
/// Empty series get `0..1`; a single distinct value `v` gets a window of
/// 5% of `|v|` (at least 1) on each side. The result is always finite: when
/// padding would overflow the unpadded bounds are used, and when those span
/// more than `f64::MAX` or collapse the range falls back to `0..1`.
pub fn padded_range(bounds: Option<(f64, f64)>) -> (f64, f64) {
    let Some((lo, hi)) = bounds else {
        return (0.0, 1.0);
    };

    let pad = if lo == hi {
        (lo.abs() * 0.05).max(1.0)
    } else {
        (hi - lo) * 0.05
    };
    let padded = (lo - pad, hi + pad);

    if is_usable_range(padded) {
        padded
    } else if is_usable_range((lo, hi)) {
        (lo, hi)
    } else {
        (0.0, 1.0)
    }
}

/// Whether `lo..hi` is a non-empty finite range with a finite span.
pub fn is_usable_range((lo, hi): (f64, f64)) -> bool {
    lo.is_finite() && hi.is_finite() && (hi - lo).is_finite() && lo < hi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kib_to_mib() {
        assert_eq!(kib_to_mib(2048.0), 2.0);
        assert_eq!(kib_to_mib(1024.0), 1.0);
        assert_eq!(kib_to_mib(512.0), 0.5);
        assert_eq!(kib_to_mib(0.0), 0.0);
    }

    #[test]
    fn test_total_throughput() {
        assert_eq!(total_throughput(&[1.0, 2.5], &[0.5, 0.5]), vec![1.5, 3.0]);
        assert!(total_throughput(&[], &[]).is_empty());
    }

    #[test]
    fn test_finite_bounds() {
        assert_eq!(finite_bounds(Vec::new()), None);
        assert_eq!(finite_bounds(vec![3.0, -1.0, 2.0]), Some((-1.0, 3.0)));
        assert_eq!(finite_bounds(vec![f64::NAN, 4.0, f64::INFINITY]), Some((4.0, 4.0)));
    }

    #[test]
    fn test_padded_range_empty() {
        assert_eq!(padded_range(None), (0.0, 1.0));
    }

    #[test]
    fn test_padded_range_single_value() {
        assert_eq!(padded_range(Some((0.0, 0.0))), (-1.0, 1.0));
        assert_eq!(padded_range(Some((100.0, 100.0))), (95.0, 105.0));
    }

    #[test]
    fn test_padded_range_spread() {
        let (lo, hi) = padded_range(Some((0.0, 10.0)));
        assert!((lo + 0.5).abs() < 1e-9);
        assert!((hi - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_is_usable_range() {
        assert!(is_usable_range((0.0, 1.0)));
        assert!(!is_usable_range((1.0, 0.0)));
        assert!(!is_usable_range((1.0, 1.0)));
        assert!(!is_usable_range((f64::NAN, 1.0)));
        assert!(!is_usable_range((0.0, f64::INFINITY)));
        assert!(!is_usable_range((-f64::MAX, f64::MAX)));
    }

    #[test]
    fn test_padded_range_span_overflow() {
        // The span itself overflows, so neither padded nor raw bounds are usable
        assert_eq!(padded_range(Some((-1e308, 1e308))), (0.0, 1.0));
        assert_eq!(padded_range(Some((-f64::MAX, f64::MAX))), (0.0, 1.0));

        // Padding overflows but the raw span is finite
        assert_eq!(padded_range(Some((0.0, f64::MAX))), (0.0, f64::MAX));
    }

    #[test]
    fn test_padded_range_single_huge_value() {
        assert_eq!(padded_range(Some((f64::MAX, f64::MAX))), (0.0, 1.0));
        assert_eq!(padded_range(Some((-f64::MAX, -f64::MAX))), (0.0, 1.0));

        let (lo, hi) = padded_range(Some((1e300, 1e300)));
        assert!(lo.is_finite() && hi.is_finite() && lo < hi);
    }
}
