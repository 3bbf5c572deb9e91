//! Heatmap scaling.
//!
//! Maps a count into one of a small fixed set of intensity buckets,
//! normalized by the maximum observed count, so the most frequent items
//! land in the hottest bucket and the least frequent in the coldest.

use crate::error::Error;

/// Number of intensity levels the console UI renders.
pub const BUCKETS: usize = 4;

/// Scale `count` into a bucket index in `[0, bucket_count - 1]`.
///
/// `round((count / max_count) * bucket_count) - 1`, clamped at both ends.
/// Out-of-range counts (0, or above the maximum) clamp rather than fail.
/// Fails with [`Error::NoData`] when `max_count` is 0 — scaling against
/// an empty database is a call-ordering bug, not a value to invent.
pub fn bucket(count: u64, max_count: u64, bucket_count: usize) -> crate::Result<usize> {
    if max_count == 0 || bucket_count == 0 {
        return Err(Error::NoData);
    }

    let raw = ((count as f64 / max_count as f64) * bucket_count as f64).round() as i64 - 1;
    Ok(raw.clamp(0, bucket_count as i64 - 1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hottest_and_coldest() {
        assert_eq!(bucket(2, 2, 4).unwrap(), 3);
        assert_eq!(bucket(1, 2, 4).unwrap(), 1);
    }

    #[test]
    fn test_even_distribution() {
        assert_eq!(bucket(1, 4, 4).unwrap(), 0);
        assert_eq!(bucket(2, 4, 4).unwrap(), 1);
        assert_eq!(bucket(3, 4, 4).unwrap(), 2);
        assert_eq!(bucket(4, 4, 4).unwrap(), 3);
    }

    #[test]
    fn test_clamps_instead_of_failing() {
        // A zero count and a count past the maximum should not occur,
        // but both must clamp, not panic or error.
        assert_eq!(bucket(0, 2, 4).unwrap(), 0);
        assert_eq!(bucket(10, 2, 4).unwrap(), 3);
    }

    #[test]
    fn test_single_item_database() {
        // max == 1: everything is hottest.
        assert_eq!(bucket(1, 1, 4).unwrap(), 3);
    }

    #[test]
    fn test_no_data() {
        assert!(matches!(bucket(1, 0, 4), Err(Error::NoData)));
        assert!(matches!(bucket(1, 2, 0), Err(Error::NoData)));
    }
}
