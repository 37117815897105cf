use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Formats a millisecond timestamp; `short` selects the axis-label variant.
pub type DateLabelFormatterFn = Arc<dyn Fn(f64, bool) -> String + Send + Sync + 'static>;
/// Formats a series value; `short` selects the axis-label variant.
pub type NumberLabelFormatterFn = Arc<dyn Fn(f64, bool) -> String + Send + Sync + 'static>;

/// Text formatters used for axis labels and tooltip content.
///
/// Short variants feed the axes, long variants feed the tooltip and the
/// minimum-value label.
#[derive(Clone)]
pub struct LabelFormatters {
    pub date: DateLabelFormatterFn,
    pub number: NumberLabelFormatterFn,
}

impl Default for LabelFormatters {
    fn default() -> Self {
        Self {
            date: Arc::new(format_date_label),
            number: Arc::new(format_number_label),
        }
    }
}

impl fmt::Debug for LabelFormatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelFormatters").finish_non_exhaustive()
    }
}

impl LabelFormatters {
    #[must_use]
    pub fn with_date(mut self, formatter: DateLabelFormatterFn) -> Self {
        self.date = formatter;
        self
    }

    #[must_use]
    pub fn with_number(mut self, formatter: NumberLabelFormatterFn) -> Self {
        self.number = formatter;
        self
    }

    #[must_use]
    pub fn date(&self, millis: f64, short: bool) -> String {
        (self.date)(millis, short)
    }

    #[must_use]
    pub fn number(&self, value: f64, short: bool) -> String {
        (self.number)(value, short)
    }
}

/// `"Jan 5"` when short, `"Mon, Jan 5"` otherwise, in UTC.
#[must_use]
pub fn format_date_label(millis: f64, short: bool) -> String {
    let Some(dt) = millis
        .is_finite()
        .then(|| DateTime::<Utc>::from_timestamp_millis(millis as i64))
        .flatten()
    else {
        return format_number_label(millis, false);
    };
    if short {
        dt.format("%b %-d").to_string()
    } else {
        dt.format("%a, %b %-d").to_string()
    }
}

/// Compact `K`/`M`/`B` suffixes when short; otherwise whole numbers above 1
/// get a space after every thousands group.
#[must_use]
pub fn format_number_label(value: f64, short: bool) -> String {
    let abs = value.abs();
    if short {
        if abs > 1_000_000_000.0 {
            return format!("{:.2}B", value / 1_000_000_000.0);
        }
        if abs > 1_000_000.0 {
            return format!("{:.2}M", value / 1_000_000.0);
        }
        if abs > 1_000.0 {
            return format!("{:.1}K", value / 1_000.0);
        }
    }

    if abs > 1.0 && abs.is_finite() {
        let digits = format!("{abs:.0}");
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3 + 2);
        if value < 0.0 {
            grouped.push('-');
        }
        for (i, digit) in digits.chars().enumerate() {
            grouped.push(digit);
            if (len - 1 - i) % 3 == 0 {
                grouped.push(' ');
            }
        }
        return grouped;
    }

    value.to_string()
}
