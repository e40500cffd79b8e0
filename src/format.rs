// Copyright 2025 the ChartAxes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.
//!
//! [`NumberFormat`] is resolution-aware: it derives the number of useful
//! decimals from the axis domain and tick count, so neighbouring ticks never
//! collapse to the same label and labels never carry noise digits. Large
//! values are shortened with SI prefixes (`12k`, `3.4M`).

/// The raw label emitted upstream for records with no value on the axis.
pub const NO_VALUE_SENTINEL: &str = "___dku_no_value___";

/// Maps the no-value sentinel to a readable label, passing everything else
/// through untouched.
#[must_use]
pub fn display_label(raw: &str) -> &str {
    if raw == NO_VALUE_SENTINEL {
        "No value"
    } else {
        raw
    }
}

/// Formats a tick value using the decimal resolution implied by the tick
/// step. A nice step of `0.25` yields two decimals, a step of `10` none.
/// A zero step falls back to the shortest exact representation.
#[must_use]
pub fn format_tick_with_step(value: f64, step: f64) -> String {
    if step <= 0.0 || !step.is_finite() {
        return value.to_string();
    }
    // Enough decimals to represent the step exactly: 0.25 takes two, not
    // the one its magnitude alone would suggest.
    let mut decimals = (-step.log10().floor()).max(0.0) as usize;
    while decimals < 12 {
        let scaled = step * 10f64.powi(decimals as i32);
        if (scaled - scaled.round()).abs() < 1e-9 {
            break;
        }
        decimals += 1;
    }
    format!("{value:.decimals$}")
}

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "\u{3bc}", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// A number formatter tuned to an axis domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    /// Decimals needed to tell `num_values` evenly spaced values apart.
    /// Negative means whole trailing digits are insignificant.
    min_decimals: i32,
}

impl NumberFormat {
    /// Builds a formatter for an axis spanning `[min, max]` with about
    /// `num_values` ticks.
    #[must_use]
    pub fn for_domain(min: f64, max: f64, num_values: usize) -> Self {
        // Assuming evenly spaced ticks, this is the coarsest precision that
        // still distinguishes neighbours.
        let min_precision = if num_values == 0 {
            0.0
        } else {
            (max - min) / num_values as f64
        };
        let min_decimals = if min_precision > 0.0 && min_precision.is_finite() {
            (-min_precision.log10()).ceil() as i32
        } else {
            0
        };
        Self { min_decimals }
    }

    /// Formats a value for display as a tick label.
    #[must_use]
    pub fn format(&self, x: f64) -> String {
        if !x.is_finite() {
            return "NA".to_owned();
        }
        let abs = x.abs();
        if abs == 0.0 {
            return "0".to_owned();
        }
        if abs < 1e-5 {
            let digits = (self.min_decimals.max(0) - (-abs.log10()).floor() as i32 - 1).max(0);
            return format!("{x:.prec$e}", prec = digits as usize);
        }
        if self.min_decimals > 0 {
            let full = format!("{x:.prec$}", prec = self.min_decimals as usize);
            let stripped = full.trim_end_matches('0').trim_end_matches('.');
            if stripped.parse::<f64>() == Ok(x) {
                return stripped.to_owned();
            }
            return full;
        }
        if abs >= 10000.0 {
            return self.format_si(x);
        }
        format!("{x:.0}")
    }

    /// Shortens a large value with an SI prefix, keeping only the digits
    /// that are significant at this formatter's resolution.
    fn format_si(&self, x: f64) -> String {
        // Blank out the digits below the resolution, then count how many
        // digits the prefixed form of the blanked value needs. Reformatting
        // the original value to that many significant digits keeps the label
        // as short but as precise as possible (123456 at a 1000 resolution
        // gives "123k" rather than "120k").
        // Multiply back by the positive power so the trimmed value is exact.
        let trimmed = (x * 10f64.powi(self.min_decimals)).round() * 10f64.powi(-self.min_decimals);
        let prefix_exp = si_exponent(trimmed);
        let mantissa = trimmed / 10f64.powi(prefix_exp);
        let digits = mantissa
            .abs()
            .to_string()
            .chars()
            .filter(char::is_ascii_digit)
            .count()
            .max(1);
        format_si_sig(x, digits as i32)
    }
}

/// The prefix exponent (a multiple of three) for a value.
fn si_exponent(x: f64) -> i32 {
    if x == 0.0 || !x.is_finite() {
        return 0;
    }
    let e = (x.abs().log10() / 3.0).floor() as i32 * 3;
    e.clamp(-24, 24)
}

/// Formats `x` to `sig` significant digits with an SI prefix symbol.
fn format_si_sig(x: f64, sig: i32) -> String {
    let sig = sig.max(1);
    let exp = x.abs().log10().floor() as i32;
    let rounded = (x * 10f64.powi(sig - 1 - exp)).round() * 10f64.powi(exp + 1 - sig);
    let prefix_exp = si_exponent(rounded);
    let mantissa = rounded / 10f64.powi(prefix_exp);
    let exp = rounded.abs().log10().floor() as i32;
    let decimals = (sig - 1 - (exp - prefix_exp)).max(0) as usize;
    let symbol = SI_PREFIXES[(8 + prefix_exp / 3) as usize];
    format!("{mantissa:.decimals$}{symbol}")
}

/// A percentage formatter: values in `[0, 1]` display as `0%..100%`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PercentFormat {
    base: NumberFormat,
}

impl PercentFormat {
    /// Builds a percent formatter for an axis whose raw domain is
    /// `[min, max]` in fractional units.
    #[must_use]
    pub fn for_domain(min: f64, max: f64, num_values: usize) -> Self {
        Self {
            base: NumberFormat::for_domain(min * 100.0, max * 100.0, num_values),
        }
    }

    /// Formats a fractional value as a percentage.
    #[must_use]
    pub fn format(&self, x: f64) -> String {
        format!("{}%", self.base.format(x * 100.0))
    }
}
