// Copyright 2025 the ChartAxes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart axis building blocks.
//!
//! This crate turns a declarative [`AxisSpec`] plus aggregated chart data
//! into a ready-to-render [`Axis`]: domain and scales, tick values, label
//! formatting and margin sizing. It renders nothing itself; the hosting
//! chart library draws the axis from the data this crate computes.
//!
//! The pieces:
//!
//! - [`spec`]: declarative axis specifications ([`AxisSpec`], [`AxisType`],
//!   [`DimensionDef`], [`MeasureDef`]).
//! - [`data`]: the [`ChartData`] view over aggregated data, plus the
//!   in-memory [`PivotData`] implementation.
//! - [`axis`]: the axis builder, [`create_axis`] and friends.
//! - [`scale`]: continuous and discrete scales, and the cross-axis
//!   re-fitting helpers (shared zeros, equalized units).
//! - [`format`]: resolution-aware tick label formatting.
//! - [`layout`]: margin sizing and label rotation, driven by an injected
//!   [`TextMeasurer`].
//!
//! # Example
//!
//! ```
//! use chart_axes::{
//!     AxisLabel, AxisSpec, DimensionDef, DimensionKind, MeasureAxisOptions, PivotData,
//!     create_axis,
//! };
//!
//! let data = PivotData::new().with_axis(
//!     "x",
//!     vec![AxisLabel::new("FR"), AxisLabel::new("DE"), AxisLabel::new("UK")],
//! );
//! let spec = AxisSpec::dimension("x", DimensionDef::new("country", DimensionKind::Alphanum));
//! let mut axis = create_axis(&data, Some(&spec), MeasureAxisOptions::new())
//!     .unwrap()
//!     .unwrap();
//! axis.set_scale_range((0.0, 600.0));
//! assert_eq!(axis.tick_labels(), vec!["FR", "DE", "UK"]);
//! ```

pub mod axis;
pub mod data;
pub mod error;
pub mod extent;
pub mod format;
pub mod layout;
pub mod measure;
pub mod scale;
pub mod spec;
pub mod time;

pub use axis::{
    Axis, MeasureAxisOptions, ScaleKind, TickFormatter, axis_label_text, column_padding,
    create_axis, create_dimension_axis, create_measure_axis, tick_count_for_height,
};
pub use data::{AxisLabel, ChartData, MeasureTensor, PivotData, RawColumn, axis_extent};
pub use error::AxisError;
pub use extent::Extent;
pub use format::{
    NO_VALUE_SENTINEL, NumberFormat, PercentFormat, display_label, format_tick_with_step,
};
pub use layout::{
    LabelFit, Margins, adjust_bottom_margin, adjust_horizontal_margins,
    compute_angle_and_bottom_margin,
};
pub use measure::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
pub use scale::{
    ScaleBand, ScaleContinuous, ScaleDiscrete, ScaleLinear, ScaleLog, ScalePoint,
    adjust_scale_domain, equalize_scales, synchronize_scale_zeros,
};
pub use spec::{AxisMode, AxisSpec, AxisType, DimensionDef, DimensionKind, MeasureDef};
pub use time::format_date_ms;
