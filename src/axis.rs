// Copyright 2025 the ChartAxes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building ready-to-render axes from specs and aggregated data.
//!
//! [`create_axis`] is the entry point: it dispatches on the spec's
//! [`AxisType`] and returns a fully configured [`Axis`] carrying its scales,
//! tick values and label formatter. Dimension axes keep a continuous and a
//! discrete scale side by side, because chart types pick positions from
//! either depending on their layout mode.

use crate::data::{ChartData, axis_extent};
use crate::error::AxisError;
use crate::format::{NumberFormat, PercentFormat, display_label, format_tick_with_step};
use crate::scale::{ScaleBand, ScaleContinuous, ScaleDiscrete, ScalePoint};
use crate::spec::{AxisMode, AxisSpec, AxisType, DimensionDef, DimensionKind, MeasureDef};
use crate::time::format_date_ms;

/// Which of an axis's two scales drives its ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    /// Ticks come from the continuous scale.
    Linear,
    /// One tick per discrete position.
    Ordinal,
}

/// Options applying to measure axes only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeasureAxisOptions {
    /// Format tick labels as percentages.
    pub percent_scale: bool,
    /// Use a base-10 log scale.
    pub log_scale: bool,
    /// Force zero into the domain.
    pub include_zero: bool,
}

impl MeasureAxisOptions {
    /// The default options: linear scale, plain labels, free domain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats tick labels as percentages.
    #[must_use]
    pub fn with_percent_scale(mut self, percent_scale: bool) -> Self {
        self.percent_scale = percent_scale;
        self
    }

    /// Uses a base-10 log scale.
    #[must_use]
    pub fn with_log_scale(mut self, log_scale: bool) -> Self {
        self.log_scale = log_scale;
        self
    }

    /// Forces zero into the domain.
    #[must_use]
    pub fn with_include_zero(mut self, include_zero: bool) -> Self {
        self.include_zero = include_zero;
        self
    }
}

/// How an axis turns tick values into labels.
#[derive(Clone, Debug, PartialEq)]
pub enum TickFormatter {
    /// Numbers at the resolution of the tick step.
    Plain,
    /// Epoch milliseconds shown as `YYYY-MM-DD` dates.
    Date,
    /// Ordinal ticks looked up in a label list by index.
    IndexLabels(Vec<String>),
    /// Resolution-aware numeric labels.
    Numeric(NumberFormat),
    /// Resolution-aware percentage labels.
    Percent(PercentFormat),
}

impl TickFormatter {
    /// Formats the tick at `index` with value `value`, given the step
    /// between continuous ticks.
    #[must_use]
    pub fn format(&self, value: f64, index: usize, step: f64) -> String {
        match self {
            Self::Plain => format_tick_with_step(value, step),
            Self::Date => format_date_ms(value),
            Self::IndexLabels(labels) => labels
                .get(index)
                .map(|l| display_label(l).to_owned())
                .unwrap_or_default(),
            Self::Numeric(format) => format.format(value),
            Self::Percent(format) => format.format(value),
        }
    }
}

/// A ready-to-render axis: scales, tick values and label formatting.
#[derive(Clone, Debug)]
pub struct Axis {
    /// The role this axis was built for.
    pub axis_type: AxisType,
    /// Which scale drives the ticks.
    pub scale_kind: ScaleKind,
    /// The continuous scale. Present on every axis; dimension axes use it
    /// for raw-value positioning even when their ticks are ordinal.
    pub continuous: ScaleContinuous,
    /// The discrete scale, instantiated by [`Axis::set_scale_range`].
    pub discrete: Option<ScaleDiscrete>,
    /// Number of discrete positions.
    pub discrete_count: usize,
    /// Discrete layout mode.
    pub mode: AxisMode,
    /// `Points`-mode outer padding override, in steps.
    pub point_padding: Option<f64>,
    /// Hand-picked tick values overriding scale-generated ones.
    pub tick_values: Option<Vec<f64>>,
    /// The tick label formatter.
    pub formatter: TickFormatter,
    /// Tick label rotation in radians, set by margin adjustment.
    pub label_angle: f64,
    /// Target tick count for continuous scales.
    pub tick_count: usize,
    /// Dimension metadata, for dimension axes.
    pub dimension: Option<DimensionDef>,
    /// Measure metadata, for measure axes.
    pub measure: Option<MeasureDef>,
}

impl Axis {
    /// Sets the target tick count for continuous scales.
    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Fits both scales to a pixel range.
    ///
    /// The discrete scale is rebuilt for the range: evenly spaced points in
    /// `Points` mode, density-padded bands in `Columns` mode.
    pub fn set_scale_range(&mut self, range: (f64, f64)) {
        self.continuous.set_range(range);
        if self.discrete_count == 0 {
            self.discrete = None;
            return;
        }
        self.discrete = Some(match self.mode {
            AxisMode::Points => {
                let padding = self.point_padding.unwrap_or(0.5);
                ScaleDiscrete::Point(ScalePoint::new(range, self.discrete_count, padding))
            }
            AxisMode::Columns => {
                let padding = column_padding(self.discrete_count);
                ScaleDiscrete::Band(ScaleBand::new(
                    range,
                    self.discrete_count,
                    padding,
                    padding / 2.0,
                ))
            }
        });
    }

    /// The tick values and the step between them. Ordinal axes tick every
    /// position; hand-picked values win over scale-generated ones.
    #[must_use]
    pub fn ticks(&self) -> (Vec<f64>, f64) {
        if let Some(values) = &self.tick_values {
            return (values.clone(), 0.0);
        }
        match self.scale_kind {
            ScaleKind::Ordinal => ((0..self.discrete_count).map(|i| i as f64).collect(), 0.0),
            ScaleKind::Linear => self.continuous.ticks(self.tick_count),
        }
    }

    /// The formatted tick labels, in tick order.
    #[must_use]
    pub fn tick_labels(&self) -> Vec<String> {
        let (ticks, step) = self.ticks();
        ticks
            .iter()
            .enumerate()
            .map(|(i, &value)| self.formatter.format(value, i, step))
            .collect()
    }

    /// The pixel position of a continuous value.
    #[must_use]
    pub fn position(&self, x: f64) -> f64 {
        self.continuous.map(x)
    }

    /// The pixel position of discrete index `i`, when a range has been set.
    #[must_use]
    pub fn ordinal_position(&self, i: usize) -> Option<f64> {
        self.discrete.as_ref().map(|s| s.position(i))
    }

    /// Records the rotation applied to tick labels.
    pub fn set_label_angle(&mut self, angle: f64) {
        self.label_angle = angle;
    }

    /// Repairs a zero-width continuous domain: a single tick at the value,
    /// with the domain widened by one on each side so mapping stays usable.
    fn fix_up(&mut self) {
        if self.scale_kind != ScaleKind::Linear {
            return;
        }
        let (d0, d1) = self.continuous.domain();
        if d0 == d1 {
            self.tick_values = Some(vec![d0]);
            self.continuous.set_domain((d0 - 1.0, d0 + 1.0));
        }
    }
}

/// Inner band padding as a fraction of the step, by column count. Dense
/// axes get slim gaps, sparse ones wide gaps.
#[must_use]
pub fn column_padding(num_columns: usize) -> f64 {
    if num_columns > 20 {
        0.1
    } else {
        0.45 - num_columns as f64 / 20.0 * 0.35
    }
}

/// A tick budget for a continuous axis fitted into `height` pixels, never
/// fewer than two.
#[must_use]
pub fn tick_count_for_height(height: f64) -> usize {
    ((height / 30.0).floor() as usize).max(2)
}

/// Builds the axis described by `spec`, reading extents from `data`.
///
/// Returns `Ok(None)` when there is nothing to build: no spec, or a measure
/// axis whose measure is absent or has no values.
pub fn create_axis(
    data: &dyn ChartData,
    spec: Option<&AxisSpec>,
    options: MeasureAxisOptions,
) -> Result<Option<Axis>, AxisError> {
    let Some(spec) = spec else {
        return Ok(None);
    };
    match spec.axis_type {
        AxisType::Dimension | AxisType::Unaggregated => {
            Ok(Some(create_dimension_axis(data, spec)))
        }
        AxisType::Measure => create_measure_axis(data, spec, options),
    }
}

/// Builds a dimension axis (aggregated or unaggregated).
#[must_use]
pub fn create_dimension_axis(data: &dyn ChartData, spec: &AxisSpec) -> Axis {
    let unaggregated = spec.axis_type == AxisType::Unaggregated;
    let dimension = spec
        .dimension
        .clone()
        .unwrap_or_else(|| DimensionDef::new("", DimensionKind::Alphanum));

    let mut extent = match (unaggregated, &spec.data) {
        (true, Some(column)) => column.extent(),
        _ => axis_extent(data, &spec.name, &dimension),
    };
    if let Some((min, max)) = spec.initial_interval {
        extent.min = min;
        extent.max = max;
    }

    let mut domain = (extent.min, extent.max);

    // Raw-value positioning draws marks directly on the continuous scale, so
    // leave some headroom on both sides for the marks' own width.
    if (dimension.is_unbinned_numerical() || unaggregated) && extent.has_finite_range() {
        let interval = extent.max - extent.min;
        let pct = if extent.point_count > 10 { 5.0 } else { 10.0 };
        domain = (
            extent.min - interval * pct / 100.0,
            extent.max + interval * pct / 100.0,
        );
    }

    let (scale_kind, formatter) = if dimension.is_timeline() || (unaggregated && dimension.is_date())
    {
        (ScaleKind::Linear, TickFormatter::Date)
    } else if dimension.is_unbinned_numerical() {
        (ScaleKind::Linear, TickFormatter::Plain)
    } else if dimension.is_binned_numerical() || (unaggregated && dimension.is_true_numerical()) {
        if dimension.one_tick_per_bin {
            (
                ScaleKind::Ordinal,
                TickFormatter::IndexLabels(extent.values.clone()),
            )
        } else {
            (ScaleKind::Linear, TickFormatter::Plain)
        }
    } else {
        (
            ScaleKind::Ordinal,
            TickFormatter::IndexLabels(extent.values.clone()),
        )
    };

    let mut axis = Axis {
        axis_type: spec.axis_type,
        scale_kind,
        continuous: ScaleContinuous::linear(domain, (0.0, 1.0)),
        discrete: None,
        discrete_count: extent.values.len(),
        mode: spec.mode,
        point_padding: spec.padding,
        tick_values: None,
        formatter,
        label_angle: 0.0,
        tick_count: 10,
        dimension: Some(dimension),
        measure: None,
    };
    axis.fix_up();
    axis
}

/// Builds a measure axis, or `Ok(None)` when the measure is absent or has
/// no values in any non-empty bin.
pub fn create_measure_axis(
    data: &dyn ChartData,
    spec: &AxisSpec,
    options: MeasureAxisOptions,
) -> Result<Option<Axis>, AxisError> {
    let domain = match spec.domain {
        Some(domain) => Some(domain),
        None => match spec.measure_idx {
            Some(idx) => data.measure_extent(idx),
            None => None,
        },
    };
    let Some((mut d0, mut d1)) = domain else {
        return Ok(None);
    };
    if d0 == f64::INFINITY {
        // No values, no axis.
        return Ok(None);
    }

    if options.include_zero {
        let zero_in_domain = (d0 > 0.0) != (d1 > 0.0);
        if !zero_in_domain {
            d0 = d0.min(0.0);
            d1 = d1.max(0.0);
        }
    }

    if options.log_scale {
        if d0 < 0.0 {
            return Err(AxisError::NegativeValueOnLogScale);
        }
        if d0 == 0.0 {
            d0 = 1.0;
        }
    }

    let tick_count = 10;
    let (lo, hi) = (d0.min(d1), d0.max(d1));
    let formatter = if options.percent_scale || spec.is_percent_scale {
        TickFormatter::Percent(PercentFormat::for_domain(lo, hi, tick_count))
    } else {
        TickFormatter::Numeric(NumberFormat::for_domain(lo, hi, tick_count))
    };

    let continuous = if options.log_scale {
        ScaleContinuous::log((d0, d1), (0.0, 1.0))
    } else {
        ScaleContinuous::linear((d0, d1), (0.0, 1.0))
    };

    let tick_values = options.log_scale.then(|| {
        // Hand-picked ticks at every power of ten from one. Sub-unit
        // domains get none rather than a tick outside the domain.
        let max_exp = d1.log10().floor() as i32;
        (0..=max_exp).map(|e| 10f64.powi(e)).collect()
    });

    let mut axis = Axis {
        axis_type: AxisType::Measure,
        scale_kind: ScaleKind::Linear,
        continuous,
        discrete: None,
        discrete_count: 0,
        mode: spec.mode,
        point_padding: None,
        tick_values,
        formatter,
        label_angle: 0.0,
        tick_count,
        dimension: None,
        measure: spec.measure.clone(),
    };
    axis.fix_up();
    Ok(Some(axis))
}

/// The text to display alongside an axis: an explicit non-empty label wins,
/// then the measure's label, then the dimension's column name.
#[must_use]
pub fn axis_label_text(explicit: Option<&str>, axis: &Axis) -> Option<String> {
    if let Some(text) = explicit {
        if !text.is_empty() {
            return Some(text.to_owned());
        }
    }
    if let Some(measure) = &axis.measure {
        return Some(measure.label());
    }
    axis.dimension.as_ref().map(|d| d.column.clone())
}
