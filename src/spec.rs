// Copyright 2025 the ChartAxes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative axis specifications.
//!
//! An [`AxisSpec`] describes one axis of a chart: what kind of column drives
//! it, how discrete positions are laid out, and the optional overrides the
//! chart definition may carry (explicit interval, precomputed domain,
//! percent formatting). Specs are created by the caller per render and are
//! immutable during a single render pass.

use core::str::FromStr;

use crate::data::RawColumn;
use crate::error::AxisError;

/// The role of an axis, matching the serialized chart-definition values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisType {
    /// An aggregated dimension axis (positions come from axis bins/labels).
    Dimension,
    /// An unaggregated dimension axis (positions come from raw records).
    Unaggregated,
    /// A measure axis (positions come from aggregated numeric values).
    Measure,
}

impl AxisType {
    /// Returns the serialized chart-definition name for this type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dimension => "DIMENSION",
            Self::Unaggregated => "UNAGGREGATED",
            Self::Measure => "MEASURE",
        }
    }
}

impl FromStr for AxisType {
    type Err = AxisError;

    /// Decodes an axis type from a serialized chart definition.
    ///
    /// Anything outside the three recognized values is a caller contract
    /// violation and fails with [`AxisError::UnknownAxisType`].
    fn from_str(s: &str) -> Result<Self, AxisError> {
        match s {
            "DIMENSION" => Ok(Self::Dimension),
            "UNAGGREGATED" => Ok(Self::Unaggregated),
            "MEASURE" => Ok(Self::Measure),
            other => Err(AxisError::UnknownAxisType(other.to_owned())),
        }
    }
}

/// How discrete positions are laid out along a dimension axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisMode {
    /// Evenly spaced point positions (lines, scatter-like layouts).
    Points,
    /// Banded ranges with density-dependent padding (column layouts).
    #[default]
    Columns,
}

/// The semantic kind of a dimension column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionKind {
    /// A numeric column; `binned` tells whether values were bucketed upstream.
    Numerical {
        /// Whether the column was discretized into labeled bins.
        binned: bool,
    },
    /// A date column displayed on a continuous timeline.
    Timeline,
    /// A date column bucketed into ordinal bins.
    OrdinalDate,
    /// A text-like column, or a numeric column treated as text.
    Alphanum,
}

/// Column metadata for a dimension axis.
#[derive(Clone, Debug, PartialEq)]
pub struct DimensionDef {
    /// The source column name.
    pub column: String,
    /// The semantic kind of the column.
    pub kind: DimensionKind,
    /// For binned numerical columns: whether each bin gets its own tick.
    pub one_tick_per_bin: bool,
}

impl DimensionDef {
    /// Creates a dimension definition.
    #[must_use]
    pub fn new(column: impl Into<String>, kind: DimensionKind) -> Self {
        Self {
            column: column.into(),
            kind,
            one_tick_per_bin: false,
        }
    }

    /// Sets whether each bin gets its own tick.
    #[must_use]
    pub fn with_one_tick_per_bin(mut self, one_tick_per_bin: bool) -> Self {
        self.one_tick_per_bin = one_tick_per_bin;
        self
    }

    /// True for date columns displayed on a continuous timeline.
    #[must_use]
    pub fn is_timeline(&self) -> bool {
        self.kind == DimensionKind::Timeline
    }

    /// True for numeric columns that were not bucketed into bins.
    #[must_use]
    pub fn is_unbinned_numerical(&self) -> bool {
        self.kind == DimensionKind::Numerical { binned: false }
    }

    /// True for numeric columns bucketed into labeled bins.
    #[must_use]
    pub fn is_binned_numerical(&self) -> bool {
        self.kind == DimensionKind::Numerical { binned: true }
    }

    /// True for columns carrying real numeric values (not treated as text).
    #[must_use]
    pub fn is_true_numerical(&self) -> bool {
        matches!(self.kind, DimensionKind::Numerical { .. })
    }

    /// True for date columns, timeline or ordinal.
    #[must_use]
    pub fn is_date(&self) -> bool {
        matches!(self.kind, DimensionKind::Timeline | DimensionKind::OrdinalDate)
    }
}

/// An aggregated measure: source column plus aggregation function.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasureDef {
    /// The source column; `None` for record counts.
    pub column: Option<String>,
    /// The aggregation function name (`COUNT`, `SUM`, `AVG`, ...).
    pub function: String,
}

impl MeasureDef {
    /// Creates a measure over a column.
    #[must_use]
    pub fn new(column: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            function: function.into(),
        }
    }

    /// Creates the record-count measure.
    #[must_use]
    pub fn count() -> Self {
        Self {
            column: None,
            function: "COUNT".to_owned(),
        }
    }

    /// The display label for this measure, e.g. `"price (AVG)"` or
    /// `"Count of records"`.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.column {
            Some(column) => format!("{column} ({})", self.function),
            None if self.function == "COUNT" => "Count of records".to_owned(),
            None => self.function.clone(),
        }
    }
}

/// Declarative description of one axis.
///
/// Built with the `with_*` accessors; immutable once handed to the axis
/// builder. Every spec carries a concrete [`AxisType`]; the constructors
/// set it, so an untyped spec is unrepresentable.
#[derive(Clone, Debug)]
pub struct AxisSpec {
    /// The role of the axis.
    pub axis_type: AxisType,
    /// The axis name inside the aggregated dataset (e.g. `"x"`).
    pub name: String,
    /// Column metadata for dimension axes.
    pub dimension: Option<DimensionDef>,
    /// Discrete layout mode for dimension axes.
    pub mode: AxisMode,
    /// Outer padding override for `Points` mode, in steps.
    pub padding: Option<f64>,
    /// Explicit min/max override applied to the computed extent.
    pub initial_interval: Option<(f64, f64)>,
    /// Precomputed `[min, max]` domain for measure axes.
    pub domain: Option<(f64, f64)>,
    /// Index of the measure inside the aggregated dataset.
    pub measure_idx: Option<usize>,
    /// Measure metadata, used for axis label text.
    pub measure: Option<MeasureDef>,
    /// Whether this axis always formats as a percentage.
    pub is_percent_scale: bool,
    /// Raw per-record values for unaggregated axes.
    pub data: Option<RawColumn>,
}

impl AxisSpec {
    fn new(axis_type: AxisType) -> Self {
        Self {
            axis_type,
            name: String::new(),
            dimension: None,
            mode: AxisMode::default(),
            padding: None,
            initial_interval: None,
            domain: None,
            measure_idx: None,
            measure: None,
            is_percent_scale: false,
            data: None,
        }
    }

    /// An aggregated dimension axis over the named dataset axis.
    #[must_use]
    pub fn dimension(name: impl Into<String>, dimension: DimensionDef) -> Self {
        let mut spec = Self::new(AxisType::Dimension);
        spec.name = name.into();
        spec.dimension = Some(dimension);
        spec
    }

    /// An unaggregated dimension axis over raw per-record values.
    #[must_use]
    pub fn unaggregated(dimension: DimensionDef, data: RawColumn) -> Self {
        let mut spec = Self::new(AxisType::Unaggregated);
        spec.dimension = Some(dimension);
        spec.data = Some(data);
        spec
    }

    /// A measure axis over the given measure index.
    #[must_use]
    pub fn for_measure(measure_idx: usize) -> Self {
        let mut spec = Self::new(AxisType::Measure);
        spec.measure_idx = Some(measure_idx);
        spec
    }

    /// Sets the discrete layout mode.
    #[must_use]
    pub fn with_mode(mut self, mode: AxisMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the `Points`-mode outer padding, in steps.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Overrides the computed extent with an explicit interval.
    #[must_use]
    pub fn with_initial_interval(mut self, min: f64, max: f64) -> Self {
        self.initial_interval = Some((min, max));
        self
    }

    /// Sets a precomputed measure domain.
    #[must_use]
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.domain = Some((min, max));
        self
    }

    /// Attaches measure metadata (used for axis label text).
    #[must_use]
    pub fn with_measure(mut self, measure: MeasureDef) -> Self {
        self.measure = Some(measure);
        self
    }

    /// Marks the axis as percent-formatted.
    #[must_use]
    pub fn with_percent_scale(mut self, is_percent_scale: bool) -> Self {
        self.is_percent_scale = is_percent_scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_type_round_trips_through_strings() {
        for t in [AxisType::Dimension, AxisType::Unaggregated, AxisType::Measure] {
            assert_eq!(t.as_str().parse::<AxisType>().unwrap(), t);
        }
    }

    #[test]
    fn unknown_axis_type_is_a_contract_violation() {
        let err = "COLOR".parse::<AxisType>().unwrap_err();
        assert_eq!(err, AxisError::UnknownAxisType("COLOR".to_owned()));
    }

    #[test]
    fn dimension_predicates_follow_the_kind() {
        let unbinned = DimensionDef::new("x", DimensionKind::Numerical { binned: false });
        assert!(unbinned.is_unbinned_numerical());
        assert!(unbinned.is_true_numerical());
        assert!(!unbinned.is_binned_numerical());
        assert!(!unbinned.is_date());

        let timeline = DimensionDef::new("ts", DimensionKind::Timeline);
        assert!(timeline.is_timeline());
        assert!(timeline.is_date());

        let ordinal_date = DimensionDef::new("ts", DimensionKind::OrdinalDate);
        assert!(!ordinal_date.is_timeline());
        assert!(ordinal_date.is_date());
    }

    #[test]
    fn measure_labels_name_the_aggregation() {
        assert_eq!(MeasureDef::new("price", "AVG").label(), "price (AVG)");
        assert_eq!(MeasureDef::count().label(), "Count of records");
    }
}
