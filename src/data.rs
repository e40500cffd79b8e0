// Copyright 2025 the ChartAxes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aggregated chart data as seen by the axis builder.
//!
//! The axis builder never touches raw records for aggregated axes. It reads
//! per-axis bin labels and per-measure tensors through the [`ChartData`]
//! trait, so any aggregation backend can drive it. [`PivotData`] is the
//! plain in-memory implementation used by the tests and simple callers.

use std::collections::HashMap;

use crate::extent::Extent;
use crate::spec::DimensionDef;

/// One bin (or distinct value) on an aggregated dimension axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    /// The display label of the bin.
    pub label: String,
    /// Epoch milliseconds for date bins; zero when not a date.
    pub ts_value: f64,
    /// The numeric sort key of the bin.
    pub sort_value: f64,
    /// Lower bound for numerical bins.
    pub min: Option<f64>,
    /// Upper bound for numerical bins.
    pub max: Option<f64>,
}

impl AxisLabel {
    /// A plain label with no numeric interpretation.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ts_value: 0.0,
            sort_value: 0.0,
            min: None,
            max: None,
        }
    }

    /// Sets the numeric sort key.
    #[must_use]
    pub fn with_sort_value(mut self, sort_value: f64) -> Self {
        self.sort_value = sort_value;
        self
    }

    /// Sets the epoch-milliseconds timestamp of a date bin.
    #[must_use]
    pub fn with_ts_value(mut self, ts_value: f64) -> Self {
        self.ts_value = ts_value;
        self
    }

    /// Sets the numeric bounds of a binned bin.
    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// The aggregated values of one measure, flattened across all dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasureTensor {
    /// One aggregated value per bin combination.
    pub tensor: Vec<f64>,
    /// Per-bin counts of non-null source values, when the backend tracks
    /// them. Used to tell empty bins apart from bins aggregating to zero.
    pub non_null_counts: Option<Vec<u64>>,
}

impl MeasureTensor {
    /// A tensor without non-null bookkeeping.
    #[must_use]
    pub fn new(tensor: Vec<f64>) -> Self {
        Self {
            tensor,
            non_null_counts: None,
        }
    }

    /// Attaches per-bin non-null counts.
    #[must_use]
    pub fn with_non_null_counts(mut self, counts: Vec<u64>) -> Self {
        self.non_null_counts = Some(counts);
        self
    }
}

/// Read access to aggregated chart data.
pub trait ChartData {
    /// The bins of the named axis, in display order.
    fn axis_labels(&self, axis_name: &str) -> Option<&[AxisLabel]>;

    /// The `[min, max]` of the measure at `idx` over non-empty bins, or
    /// `None` when no such measure exists. A measure whose bins are all
    /// empty reports the inverted infinite interval.
    fn measure_extent(&self, idx: usize) -> Option<(f64, f64)>;
}

/// In-memory pivot response: labeled axes plus measure tensors.
#[derive(Clone, Debug, Default)]
pub struct PivotData {
    axes: HashMap<String, Vec<AxisLabel>>,
    aggregations: Vec<MeasureTensor>,
    counts: Vec<u64>,
}

impl PivotData {
    /// An empty pivot response.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named axis with its bins.
    #[must_use]
    pub fn with_axis(mut self, name: impl Into<String>, labels: Vec<AxisLabel>) -> Self {
        self.axes.insert(name.into(), labels);
        self
    }

    /// Adds a measure tensor. Measures are indexed in insertion order.
    #[must_use]
    pub fn with_measure(mut self, measure: MeasureTensor) -> Self {
        self.aggregations.push(measure);
        self
    }

    /// Sets the per-bin record counts.
    #[must_use]
    pub fn with_counts(mut self, counts: Vec<u64>) -> Self {
        self.counts = counts;
        self
    }
}

impl ChartData for PivotData {
    fn axis_labels(&self, axis_name: &str) -> Option<&[AxisLabel]> {
        self.axes.get(axis_name).map(Vec::as_slice)
    }

    fn measure_extent(&self, idx: usize) -> Option<(f64, f64)> {
        let measure = self.aggregations.get(idx)?;
        let bin_is_empty = |i: usize| match &measure.non_null_counts {
            Some(counts) => counts.get(i).is_none_or(|&c| c == 0),
            None => self.counts.get(i).is_none_or(|&c| c == 0),
        };
        let mut extent = Extent::empty();
        for (i, &value) in measure.tensor.iter().enumerate() {
            if !bin_is_empty(i) {
                extent.observe(value);
            }
        }
        Some((extent.min, extent.max))
    }
}

/// Collects the labels and numeric extent of an aggregated dimension axis.
///
/// Timeline bins contribute their timestamps (a zero timestamp marks the
/// no-value bin and is skipped), numerical bins their bounds or sort keys.
/// Other kinds leave the numeric extent empty.
#[must_use]
pub fn axis_extent(data: &dyn ChartData, axis_name: &str, dimension: &DimensionDef) -> Extent {
    let labels = data.axis_labels(axis_name).unwrap_or_default();
    let mut extent = Extent::empty();
    for label in labels {
        extent.values.push(label.label.clone());
        if dimension.is_timeline() {
            if label.ts_value != 0.0 {
                extent.observe(label.ts_value);
            }
        } else if dimension.is_true_numerical() {
            match (dimension.is_unbinned_numerical(), label.min, label.max) {
                (false, Some(min), Some(max)) => {
                    extent.observe(min);
                    extent.observe(max);
                }
                _ => extent.observe(label.sort_value),
            }
        }
    }
    extent.point_count = extent.values.len();
    extent
}

/// Raw per-record values backing an unaggregated axis.
#[derive(Clone, Debug, PartialEq)]
pub enum RawColumn {
    /// Distinct sorted labels of a text-like or discrete-date column.
    Labels(Vec<String>),
    /// Numeric or date values with their precomputed bounds.
    Values {
        /// The per-record values, in record order.
        values: Vec<f64>,
        /// The column minimum.
        min: f64,
        /// The column maximum.
        max: f64,
    },
}

impl RawColumn {
    /// The extent of the column.
    #[must_use]
    pub fn extent(&self) -> Extent {
        match self {
            Self::Labels(labels) => {
                Extent::labeled(f64::INFINITY, f64::NEG_INFINITY, labels.clone())
            }
            Self::Values { values, min, max } => Extent::raw(*min, *max, values.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::DimensionKind;

    fn binned_labels() -> Vec<AxisLabel> {
        vec![
            AxisLabel::new("0-50").with_sort_value(25.0).with_bounds(0.0, 50.0),
            AxisLabel::new("50-100").with_sort_value(75.0).with_bounds(50.0, 100.0),
        ]
    }

    #[test]
    fn binned_numerical_extent_spans_the_bin_bounds() {
        let data = PivotData::new().with_axis("x", binned_labels());
        let dim = DimensionDef::new("x", DimensionKind::Numerical { binned: true });
        let extent = axis_extent(&data, "x", &dim);
        assert_eq!((extent.min, extent.max), (0.0, 100.0));
        assert_eq!(extent.values, vec!["0-50", "50-100"]);
        assert_eq!(extent.point_count, 2);
    }

    #[test]
    fn unbinned_numerical_extent_uses_sort_values() {
        let labels = vec![
            AxisLabel::new("3").with_sort_value(3.0),
            AxisLabel::new("41").with_sort_value(41.0),
        ];
        let data = PivotData::new().with_axis("x", labels);
        let dim = DimensionDef::new("x", DimensionKind::Numerical { binned: false });
        let extent = axis_extent(&data, "x", &dim);
        assert_eq!((extent.min, extent.max), (3.0, 41.0));
    }

    #[test]
    fn timeline_extent_skips_the_zero_timestamp_bin() {
        let labels = vec![
            AxisLabel::new("No value"),
            AxisLabel::new("2024-01-01").with_ts_value(1_704_067_200_000.0),
            AxisLabel::new("2024-06-01").with_ts_value(1_717_200_000_000.0),
        ];
        let data = PivotData::new().with_axis("x", labels);
        let dim = DimensionDef::new("x", DimensionKind::Timeline);
        let extent = axis_extent(&data, "x", &dim);
        assert_eq!(extent.min, 1_704_067_200_000.0);
        assert_eq!(extent.max, 1_717_200_000_000.0);
        assert_eq!(extent.point_count, 3);
    }

    #[test]
    fn alphanum_extent_has_labels_but_no_numeric_range() {
        let labels = vec![AxisLabel::new("a"), AxisLabel::new("b")];
        let data = PivotData::new().with_axis("x", labels);
        let dim = DimensionDef::new("x", DimensionKind::Alphanum);
        let extent = axis_extent(&data, "x", &dim);
        assert!(!extent.has_finite_range());
        assert_eq!(extent.values.len(), 2);
    }

    #[test]
    fn measure_extent_ignores_empty_bins() {
        let data = PivotData::new()
            .with_measure(MeasureTensor::new(vec![5.0, 0.0, 12.0]))
            .with_counts(vec![3, 0, 4]);
        assert_eq!(data.measure_extent(0), Some((5.0, 12.0)));
    }

    #[test]
    fn non_null_counts_take_precedence_over_record_counts() {
        let data = PivotData::new()
            .with_measure(
                MeasureTensor::new(vec![5.0, -2.0, 12.0]).with_non_null_counts(vec![1, 0, 1]),
            )
            .with_counts(vec![3, 3, 3]);
        assert_eq!(data.measure_extent(0), Some((5.0, 12.0)));
    }

    #[test]
    fn missing_measure_reports_none_and_empty_measure_inverts() {
        let data = PivotData::new()
            .with_measure(MeasureTensor::new(vec![5.0]))
            .with_counts(vec![0]);
        assert_eq!(data.measure_extent(1), None);
        let (min, max) = data.measure_extent(0).unwrap();
        assert!(min.is_infinite() && max.is_infinite());
    }

    #[test]
    fn raw_column_extents() {
        let labels = RawColumn::Labels(vec!["a".to_owned(), "b".to_owned()]);
        assert!(!labels.extent().has_finite_range());
        assert_eq!(labels.extent().point_count, 2);

        let values = RawColumn::Values {
            values: vec![1.0, 2.0, 3.0],
            min: 1.0,
            max: 3.0,
        };
        let extent = values.extent();
        assert_eq!((extent.min, extent.max), (1.0, 3.0));
        assert_eq!(extent.point_count, 3);
    }
}
