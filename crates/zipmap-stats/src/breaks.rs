//! Percentile class breaks for choropleth classification
//!
//! Splits a set of observations into `class_count` classes bounded by
//! percentile values of the sorted data. For n classes there are n + 1
//! breaks; the first break is the dataset minimum and the last is the
//! maximum, so every observation lands in a class.
//!
//! Breaks use nearest-rank-floor selection rather than interpolation:
//! each break is an actual observed value. Skewed distributions can
//! therefore produce repeated breaks, which is valid - the affected
//! classes are simply empty.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from class break computation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BreaksError {
    /// The input cannot be classified (empty data or degenerate class count)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for break computation
pub type BreaksResult<T> = Result<T, BreaksError>;

/// Percentile class boundaries over a set of observations
///
/// Immutable once computed; rebuild it when the observation set changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassBreaks {
    /// Break values, non-decreasing, `class_count + 1` entries
    breaks: Vec<f64>,
    /// Number of classes
    class_count: usize,
}

impl ClassBreaks {
    /// Compute percentile breaks from data
    ///
    /// For i in 0..=class_count, the i-th break is the sorted value at
    /// index `floor(i / class_count * (n - 1))`.
    ///
    /// Non-finite observations are ignored. Fails with
    /// [`BreaksError::InvalidInput`] when no finite values remain or
    /// `class_count` is zero.
    pub fn compute(values: &[f64], class_count: usize) -> BreaksResult<Self> {
        if class_count < 1 {
            return Err(BreaksError::InvalidInput(
                "class count must be at least 1".to_string(),
            ));
        }

        let mut sorted: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
        if sorted.is_empty() {
            return Err(BreaksError::InvalidInput(
                "cannot classify an empty value set".to_string(),
            ));
        }
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let last = sorted.len() - 1;
        let breaks = (0..=class_count)
            .map(|i| {
                let p = i as f64 / class_count as f64;
                sorted[(p * last as f64).floor() as usize]
            })
            .collect();

        Ok(Self {
            breaks,
            class_count,
        })
    }

    /// Assign an observation to a class index in `[0, class_count]`
    ///
    /// Scans from the highest class downward and returns the highest
    /// class whose lower break is <= value. Values below the first break
    /// fall back to class 0 (cannot happen when the value comes from the
    /// classified dataset, since the first break is its minimum).
    pub fn class_of(&self, value: f64) -> usize {
        for i in (1..=self.class_count).rev() {
            if value >= self.breaks[i] {
                return i;
            }
        }
        0
    }

    /// The break values (`class_count + 1` entries, non-decreasing)
    pub fn breaks(&self) -> &[f64] {
        &self.breaks
    }

    /// The number of classes
    pub fn class_count(&self) -> usize {
        self.class_count
    }

    /// The value range covered by a class, for legend construction
    ///
    /// Returns `(breaks[class], breaks[class + 1])`, or `None` when
    /// `class >= class_count`.
    pub fn class_range(&self, class: usize) -> Option<(f64, f64)> {
        if class >= self.class_count {
            return None;
        }
        Some((self.breaks[class], self.breaks[class + 1]))
    }

    /// The minimum of the classified data (first break)
    pub fn min(&self) -> f64 {
        self.breaks[0]
    }

    /// The maximum of the classified data (last break)
    pub fn max(&self) -> f64 {
        self.breaks[self.class_count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaks_length_and_order() {
        let values = vec![42.0, 7.0, 19.0, 3.0, 88.0, 51.0, 60.0, 12.0];
        let breaks = ClassBreaks::compute(&values, 6).unwrap();

        assert_eq!(breaks.breaks().len(), 7);
        for pair in breaks.breaks().windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(breaks.min(), 3.0);
        assert_eq!(breaks.max(), 88.0);
    }

    #[test]
    fn test_breaks_match_sorted_input_when_sizes_align() {
        // With 7 values and 6 classes every percentile position lands on
        // a distinct observation, so the breaks are the sorted input.
        let values = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0];
        let breaks = ClassBreaks::compute(&values, 6).unwrap();

        assert_eq!(
            breaks.breaks(),
            &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0]
        );
    }

    #[test]
    fn test_breaks_unsorted_input() {
        let values = vec![70.0, 10.0, 50.0, 30.0, 60.0, 20.0, 40.0];
        let breaks = ClassBreaks::compute(&values, 6).unwrap();

        assert_eq!(
            breaks.breaks(),
            &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0]
        );
    }

    #[test]
    fn test_breaks_skewed_data_repeats() {
        // Heavy tie mass: repeated breaks are a valid outcome, not an error.
        let values = vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 100.0];
        let breaks = ClassBreaks::compute(&values, 3).unwrap();

        assert_eq!(breaks.breaks().len(), 4);
        assert_eq!(breaks.breaks()[0], 1.0);
        assert_eq!(breaks.breaks()[1], 1.0);
        assert_eq!(breaks.max(), 100.0);
    }

    #[test]
    fn test_breaks_empty_input_fails() {
        for n in 1..=8 {
            let err = ClassBreaks::compute(&[], n).unwrap_err();
            assert!(matches!(err, BreaksError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_breaks_zero_classes_fails() {
        let err = ClassBreaks::compute(&[1.0, 2.0], 0).unwrap_err();
        assert!(matches!(err, BreaksError::InvalidInput(_)));
    }

    #[test]
    fn test_breaks_ignores_non_finite() {
        let values = vec![f64::NAN, 10.0, f64::INFINITY, 20.0, 30.0];
        let breaks = ClassBreaks::compute(&values, 2).unwrap();
        assert_eq!(breaks.breaks(), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_breaks_all_nan_fails() {
        let err = ClassBreaks::compute(&[f64::NAN, f64::NAN], 3).unwrap_err();
        assert!(matches!(err, BreaksError::InvalidInput(_)));
    }

    #[test]
    fn test_class_of_boundaries() {
        let values = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0];
        let breaks = ClassBreaks::compute(&values, 6).unwrap();

        assert_eq!(breaks.class_of(10.0), 0);
        assert_eq!(breaks.class_of(15.0), 0);
        assert_eq!(breaks.class_of(20.0), 1);
        assert_eq!(breaks.class_of(25.0), 1);
        assert_eq!(breaks.class_of(70.0), 6);
        // Below the minimum falls back to the lowest class.
        assert_eq!(breaks.class_of(5.0), 0);
        // Above the maximum stays in the highest class.
        assert_eq!(breaks.class_of(1000.0), 6);
    }

    #[test]
    fn test_class_of_monotonic() {
        let values = vec![3.0, 12.0, 19.0, 42.0, 51.0, 60.0, 88.0, 7.0];
        let breaks = ClassBreaks::compute(&values, 5).unwrap();

        let mut last = 0;
        for v in (0..200).map(|i| i as f64 / 2.0) {
            let class = breaks.class_of(v);
            assert!(class >= last);
            assert!(class <= breaks.class_count());
            last = class;
        }
    }

    #[test]
    fn test_class_range() {
        let values = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0];
        let breaks = ClassBreaks::compute(&values, 6).unwrap();

        assert_eq!(breaks.class_range(0), Some((10.0, 20.0)));
        assert_eq!(breaks.class_range(5), Some((60.0, 70.0)));
        assert_eq!(breaks.class_range(6), None);
    }

    #[test]
    fn test_single_value_dataset() {
        let breaks = ClassBreaks::compute(&[5.0], 4).unwrap();
        assert_eq!(breaks.breaks(), &[5.0, 5.0, 5.0, 5.0, 5.0]);
        assert_eq!(breaks.class_of(5.0), 4);
        assert_eq!(breaks.class_of(4.0), 0);
    }
}
