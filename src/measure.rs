// Copyright 2025 the ChartAxes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for axis layout.
//!
//! Margin sizing is driven by rendered tick-label bounds. The hosting
//! renderer owns real text metrics, so the layout helpers in this crate
//! accept a measurer instead of touching any rendering surface. Callers plug
//! in a backend-specific measurer (canvas, SVG, a shaping engine); tests and
//! headless layout can use [`HeuristicTextMeasurer`].

/// A minimal text measurement interface used by the margin-sizing helpers.
pub trait TextMeasurer {
    /// Measures a single line of text.
    ///
    /// `text` is treated as one line; callers should split on `\n` if they
    /// want multi-line layout.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Text styling inputs relevant to measurement.
///
/// Deliberately minimal: just enough to size tick labels consistently.
/// Richer typography belongs to the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart's coordinate system (typically pixels).
    pub font_size: f64,
}

impl TextStyle {
    /// Creates a style with the given font size.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self { font_size }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Measured bounds for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// Horizontal extent of the rendered text.
    pub width: f64,
    /// Vertical extent of the rendered text.
    pub height: f64,
}

/// A tiny heuristic measurer suitable for tests and headless layout.
///
/// It assumes an average glyph width of ~0.6em and a line height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        TextMetrics {
            width: 0.6 * style.font_size * text.chars().count() as f64,
            height: style.font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_width_grows_with_text_length() {
        let m = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0);
        let short = m.measure("ab", &style);
        let long = m.measure("abcdef", &style);
        assert!(long.width > short.width);
        assert_eq!(short.height, long.height);
    }
}
