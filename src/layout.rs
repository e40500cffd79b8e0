// Copyright 2025 the ChartAxes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Margin sizing around the plot area.
//!
//! These helpers measure the axis tick labels and grow the chart margins so
//! the labels actually fit, rotating the x-axis labels when they are wider
//! than the band each of them gets. Margin values flow functionally: every
//! helper takes margins in and returns the updated copy.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

use kurbo::Size;

use crate::axis::{Axis, ScaleKind};
use crate::measure::{TextMeasurer, TextStyle};
use crate::spec::AxisType;

/// Space reserved around the plot area, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    /// Space above the plot area.
    pub top: f64,
    /// Space below the plot area.
    pub bottom: f64,
    /// Space left of the plot area.
    pub left: f64,
    /// Space right of the plot area.
    pub right: f64,
}

impl Margins {
    /// Creates a margin set.
    #[must_use]
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

/// How a set of labels fits under an axis of a given width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelFit {
    /// Label rotation in radians; zero when everything fits flat.
    pub angle: f64,
    /// Whether at least one label is wider than the available width.
    pub long_titles: bool,
    /// Vertical space the labels need below the axis line.
    pub required_height: f64,
    /// Projected width of the first label once rotated, when there is one.
    pub rotated_first_text_width: Option<f64>,
}

/// Measures how a label set fits under an element of `available_width` and
/// picks the rotation angle needed to avoid overlap.
pub fn compute_angle_and_bottom_margin(
    measurer: &dyn TextMeasurer,
    style: &TextStyle,
    labels: &[String],
    available_width: f64,
) -> LabelFit {
    let metrics: Vec<_> = labels.iter().map(|l| measurer.measure(l, style)).collect();
    let max_label_width = metrics.iter().map(|m| m.width).fold(0.0, f64::max);
    let label_height = metrics.first().map_or(0.0, |m| m.height);
    let long_titles = metrics.iter().any(|m| m.width > available_width);

    let angle = if long_titles {
        (label_height * 2.0 / available_width).atan()
    } else {
        0.0
    };

    let rotated_first_text_width = metrics
        .first()
        .map(|m| m.width * angle.cos() + label_height * angle.sin());

    LabelFit {
        angle,
        long_titles,
        required_height: 30.0 + angle.sin() * (max_label_width + label_height * 1.5),
        rotated_first_text_width,
    }
}

/// Grows the bottom margin to fit the x-axis tick labels, rotating them
/// when they are wider than the band each label gets.
///
/// The chosen angle is recorded on the axis. Angles steeper than 60 degrees
/// snap to vertical, and the bottom margin never takes more than a quarter
/// of the chart height.
pub fn adjust_bottom_margin(
    margins: Margins,
    measurer: &dyn TextMeasurer,
    style: &TextStyle,
    chart: Size,
    x_axis: &mut Axis,
    force_rotation: Option<f64>,
) -> Margins {
    let labels = x_axis.tick_labels();
    if labels.is_empty() {
        return margins;
    }

    let spread_band =
        (chart.width - margins.left - margins.right) / (labels.len() as f64 + 1.0);
    let used_band = if x_axis.axis_type == AxisType::Measure || x_axis.scale_kind == ScaleKind::Linear
    {
        spread_band
    } else {
        match x_axis.discrete.as_ref().map(|s| s.band_width()) {
            Some(band) if band > 0.0 => band,
            _ => spread_band,
        }
    };

    let metrics: Vec<_> = labels.iter().map(|l| measurer.measure(l, style)).collect();
    let max_label_width = metrics.iter().map(|m| m.width).fold(0.0, f64::max);
    let label_height = metrics.first().map_or(0.0, |m| m.height);
    let has_long_labels = metrics.iter().any(|m| m.width > used_band);

    let mut angle = force_rotation.unwrap_or(if has_long_labels {
        (label_height * 2.0 / used_band).atan()
    } else {
        0.0
    });
    if angle > FRAC_PI_3 {
        angle = FRAC_PI_2;
    }
    x_axis.set_label_angle(angle);

    // The x axis never takes more than a quarter of the chart height.
    let bottom = (margins.bottom + angle.sin() * max_label_width + angle.cos() * label_height)
        .min(chart.height / 4.0);
    Margins { bottom, ..margins }
}

/// Sizes the left and right margins for the y axes' tick labels.
///
/// An absent axis gets a slim default margin; a present one gets its widest
/// label plus breathing room. An axis title adds fixed space on the left.
pub fn adjust_horizontal_margins(
    margins: Margins,
    measurer: &dyn TextMeasurer,
    style: &TextStyle,
    show_y_axis_label: bool,
    y_axis: Option<&Axis>,
    y2_axis: Option<&Axis>,
) -> Margins {
    let side = |axis: Option<&Axis>| match axis {
        None => 10.0,
        Some(axis) => {
            let max_label_width = axis
                .tick_labels()
                .iter()
                .map(|l| measurer.measure(l, style).width)
                .fold(0.0, f64::max);
            max_label_width + 25.0
        }
    };
    let mut left = side(y_axis);
    let right = side(y2_axis);
    if show_y_axis_label {
        left += 20.0;
    }
    Margins {
        left,
        right,
        ..margins
    }
}
