//! Utility functions and helpers

use serde::{Deserialize, Serialize};

/// Sign class of a percentage change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceClass {
    Positive,
    Negative,
    Neutral,
}

impl PriceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceClass::Positive => "positive",
            PriceClass::Negative => "negative",
            PriceClass::Neutral => "neutral",
        }
    }
}

/// Classify a change against zero
pub fn price_class(change: f64) -> PriceClass {
    if change > 0.0 {
        PriceClass::Positive
    } else if change < 0.0 {
        PriceClass::Negative
    } else {
        PriceClass::Neutral
    }
}

/// Format a monetary or volume amount.
///
/// Missing and non-finite values render as `0`. Magnitudes of a million and up
/// are compacted to `M`/`B`; everything else gets comma thousands separators
/// and two decimals. Units are picked after rounding, so `999_999.995` reads
/// `1.00M`. Values that would round to `0.00` keep a third decimal.
pub fn format_number(value: Option<f64>) -> String {
    let value = match value {
        Some(v) if v.is_finite() => v,
        _ => return "0".to_string(),
    };

    let abs = value.abs();
    if abs == 0.0 {
        return "0".to_string();
    }
    if abs < 0.001 {
        return if value > 0.0 { "< 0.001".to_string() } else { "> -0.001".to_string() };
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if round_cents(abs) == 0.0 {
        return format!("{}{:.3}", sign, abs);
    }
    if round_cents(abs / 1e6) >= 1000.0 {
        return format!("{}{}B", sign, group_thousands(abs / 1e9));
    }
    if round_cents(abs) >= 1e6 {
        return format!("{}{}M", sign, group_thousands(abs / 1e6));
    }
    format!("{}{}", sign, group_thousands(abs))
}

/// The value `{:.2}` will actually print
fn round_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Format a dollar amount
pub fn format_usd(value: Option<f64>) -> String {
    format!("${}", format_number(value))
}

/// Format a percentage change with an explicit sign, without the `%`
pub fn format_price_change(change: f64) -> String {
    if !change.is_finite() || change == 0.0 {
        return "0".to_string();
    }
    if change > 0.0 && change < 0.001 {
        return "< 0.001".to_string();
    }
    if change < 0.0 && change > -0.001 {
        return "> -0.001".to_string();
    }
    let prefix = if change > 0.0 { "+" } else { "" };
    format!("{}{}", prefix, format_number(Some(change)))
}

/// Two-decimal rendering of a non-negative value with comma grouping
fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}.{}", grouped, frac_part)
}
