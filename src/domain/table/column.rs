//! Column definitions and sort keys

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Horizontal alignment hint for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A value extracted from a record for ordering.
///
/// `Missing` sorts below every present value, so it comes first in ascending
/// order and last in descending order. NaN numbers are treated as missing.
/// `Integer` keeps on-chain amounts exact where `f64` would round them.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Missing,
    Integer(u128),
    Number(f64),
    Text(String),
}

impl SortKey {
    pub fn number(value: Option<f64>) -> Self {
        match value {
            Some(v) if !v.is_nan() => SortKey::Number(v),
            _ => SortKey::Missing,
        }
    }

    pub fn integer(value: Option<u128>) -> Self {
        value.map_or(SortKey::Missing, SortKey::Integer)
    }

    pub fn text(value: Option<&str>) -> Self {
        match value {
            Some(v) => SortKey::Text(v.to_string()),
            None => SortKey::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, SortKey::Missing)
    }

    /// Numeric columns read numeric text (indexers ship decimals as strings)
    fn coerce_numeric(self) -> Self {
        match self {
            SortKey::Text(s) => {
                let s = s.trim();
                match s.parse::<u128>() {
                    Ok(v) => SortKey::Integer(v),
                    Err(_) => SortKey::number(s.parse::<f64>().ok()),
                }
            }
            other => other,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Missing => 0,
            SortKey::Integer(_) | SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
        }
    }

    /// Total order: missing < numbers < text. Text compares case-insensitively.
    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Integer(a), SortKey::Integer(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Integer(a), SortKey::Number(b)) => (*a as f64).total_cmp(b),
            (SortKey::Number(a), SortKey::Integer(b)) => a.total_cmp(&(*b as f64)),
            (SortKey::Text(a), SortKey::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

type KeyFn<R> = Box<dyn Fn(&R) -> SortKey>;

/// One sortable, displayable attribute of a record type
pub struct ColumnDefinition<R> {
    pub id: String,
    pub label: String,
    pub align: Alignment,
    pub numeric: bool,
    sort_key: KeyFn<R>,
}

impl<R> ColumnDefinition<R> {
    pub fn new<F>(id: impl Into<String>, label: impl Into<String>, numeric: bool, sort_key: F) -> Self
    where
        F: Fn(&R) -> SortKey + 'static,
    {
        Self {
            id: id.into(),
            label: label.into(),
            align: Alignment::Left,
            numeric,
            sort_key: Box::new(sort_key),
        }
    }

    /// Column ordered by an optional number
    pub fn numeric<F>(id: impl Into<String>, label: impl Into<String>, key: F) -> Self
    where
        F: Fn(&R) -> Option<f64> + 'static,
    {
        Self::new(id, label, true, move |record| SortKey::number(key(record)))
    }

    /// Column ordered by an exact unsigned integer (token ids, raw liquidity)
    pub fn integer<F>(id: impl Into<String>, label: impl Into<String>, key: F) -> Self
    where
        F: Fn(&R) -> Option<u128> + 'static,
    {
        Self::new(id, label, true, move |record| SortKey::integer(key(record)))
    }

    /// Column ordered by optional text
    pub fn text<F>(id: impl Into<String>, label: impl Into<String>, key: F) -> Self
    where
        F: Fn(&R) -> Option<String> + 'static,
    {
        Self::new(id, label, false, move |record| match key(record) {
            Some(text) => SortKey::Text(text),
            None => SortKey::Missing,
        })
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Extract this column's key from a record
    pub fn key_of(&self, record: &R) -> SortKey {
        let key = (self.sort_key)(record);
        if self.numeric {
            key.coerce_numeric()
        } else {
            key
        }
    }
}

impl<R> fmt::Debug for ColumnDefinition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDefinition")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("align", &self.align)
            .field("numeric", &self.numeric)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        value: Option<f64>,
        label: &'static str,
    }

    #[test]
    fn test_missing_sorts_lowest() {
        assert_eq!(SortKey::Missing.compare(&SortKey::Number(-1e12)), Ordering::Less);
        assert_eq!(SortKey::Missing.compare(&SortKey::Text(String::new())), Ordering::Less);
        assert_eq!(SortKey::Missing.compare(&SortKey::Missing), Ordering::Equal);
    }

    #[test]
    fn test_nan_is_missing() {
        assert!(SortKey::number(Some(f64::NAN)).is_missing());
        assert!(SortKey::number(None).is_missing());
    }

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(SortKey::Number(9.0).compare(&SortKey::Number(10.0)), Ordering::Less);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        assert_eq!(
            SortKey::Text("apple".into()).compare(&SortKey::Text("Banana".into())),
            Ordering::Less
        );
        assert_eq!(
            SortKey::Text("WETH".into()).compare(&SortKey::Text("weth".into())),
            Ordering::Equal
        );
    }

    #[test]
    fn test_numeric_column_parses_text_keys() {
        let column: ColumnDefinition<Row> =
            ColumnDefinition::new("v", "V", true, |r: &Row| SortKey::Text(r.label.to_string()));
        let parsed = column.key_of(&Row { value: None, label: " 12.5 " });
        assert_eq!(parsed, SortKey::Number(12.5));
        let whole = column.key_of(&Row { value: None, label: "340282366920938463463374607431768211455" });
        assert_eq!(whole, SortKey::Integer(u128::MAX));
        let garbage = column.key_of(&Row { value: None, label: "n/a" });
        assert!(garbage.is_missing());
    }

    #[test]
    fn test_numeric_builder() {
        let column = ColumnDefinition::numeric("v", "Value", |r: &Row| r.value).align(Alignment::Right);
        assert!(column.numeric);
        assert_eq!(column.align, Alignment::Right);
        assert_eq!(column.key_of(&Row { value: Some(3.0), label: "" }), SortKey::Number(3.0));
        assert!(column.key_of(&Row { value: None, label: "" }).is_missing());
    }

    #[test]
    fn test_integer_keys_compare_exactly() {
        let big = 1_000_000_000_000_000_000_000u128;
        // Both round to the same f64
        assert_eq!(big as f64, (big + 1000) as f64);
        assert_eq!(SortKey::Integer(big).compare(&SortKey::Integer(big + 1000)), Ordering::Less);
        assert_eq!(SortKey::Integer(2).compare(&SortKey::Number(2.5)), Ordering::Less);
        assert_eq!(SortKey::Number(3.0).compare(&SortKey::Integer(2)), Ordering::Greater);
        assert_eq!(SortKey::Missing.compare(&SortKey::Integer(0)), Ordering::Less);
        assert!(SortKey::integer(None).is_missing());
    }

    #[test]
    fn test_integer_builder() {
        let column = ColumnDefinition::integer("id", "Id", |r: &Row| r.value.map(|v| v as u128));
        assert!(column.numeric);
        assert_eq!(column.key_of(&Row { value: Some(7.0), label: "" }), SortKey::Integer(7));
    }
}
