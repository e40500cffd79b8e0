// Copyright 2025 the ChartAxes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observed data extents for one chart dimension.

/// The observed range of a dimension: numeric/date min and max, plus the
/// ordered distinct labels for discrete axes.
///
/// Derived once per render from the dataset and read-only afterwards. For raw
/// numeric or date columns there are no labels; `point_count` still carries
/// the number of observed points so density heuristics keep working.
#[derive(Clone, Debug, PartialEq)]
pub struct Extent {
    /// Smallest observed numeric/date value, `+inf` when nothing was observed.
    pub min: f64,
    /// Largest observed numeric/date value, `-inf` when nothing was observed.
    pub max: f64,
    /// Ordered distinct labels (bin labels or categorical values).
    pub values: Vec<String>,
    /// Number of observed data points backing the axis.
    pub point_count: usize,
}

impl Extent {
    /// An extent with no observed values.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            values: Vec::new(),
            point_count: 0,
        }
    }

    /// An extent over labeled values (bins or categories).
    #[must_use]
    pub fn labeled(min: f64, max: f64, values: Vec<String>) -> Self {
        let point_count = values.len();
        Self {
            min,
            max,
            values,
            point_count,
        }
    }

    /// An extent over a raw (unlabeled) numeric or date column.
    #[must_use]
    pub fn raw(min: f64, max: f64, point_count: usize) -> Self {
        Self {
            min,
            max,
            values: Vec::new(),
            point_count,
        }
    }

    /// Widens the extent to include `value`. Non-finite values are ignored.
    pub fn observe(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Returns true when both bounds are finite.
    #[must_use]
    pub fn has_finite_range(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_ignores_non_finite_values() {
        let mut e = Extent::empty();
        e.observe(f64::NAN);
        e.observe(f64::INFINITY);
        assert!(!e.has_finite_range());
        e.observe(3.0);
        e.observe(-1.0);
        assert_eq!((e.min, e.max), (-1.0, 3.0));
    }

    #[test]
    fn labeled_extent_counts_its_values() {
        let e = Extent::labeled(0.0, 1.0, vec!["a".into(), "b".into()]);
        assert_eq!(e.point_count, 2);
    }
}
