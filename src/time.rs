// Copyright 2025 the ChartAxes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date tick labels for timeline axes.

use chrono::DateTime;

/// Formats an epoch-milliseconds tick value as a `YYYY-MM-DD` UTC date.
///
/// Values that are not finite or fall outside the representable date range
/// fall back to the plain numeric representation.
#[must_use]
pub fn format_date_ms(epoch_ms: f64) -> String {
    if epoch_ms.is_finite() {
        if let Some(date) = DateTime::from_timestamp_millis(epoch_ms as i64) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    epoch_ms.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_milliseconds_as_utc_dates() {
        assert_eq!(format_date_ms(0.0), "1970-01-01");
        assert_eq!(format_date_ms(1_000_000_000_000.0), "2001-09-09");
        assert_eq!(format_date_ms(-86_400_000.0), "1969-12-31");
    }

    #[test]
    fn non_finite_values_fall_back_to_numbers() {
        assert_eq!(format_date_ms(f64::NAN), "NaN");
    }
}
