//! Typed cell values
//!
//! Every CSV cell is loaded as a [`CellValue`]. The variant is decided per
//! column by [`ColumnKind::infer`], so a column of ids like `1, 2, 3` becomes
//! integers while a column mixing `1` and `q-2` stays text throughout.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single loaded cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Absent value (empty cell or a missing-value sentinel such as `NA`)
    #[default]
    Missing,
    Text(String),
    Integer(i64),
    Float(f64),
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Borrow the value if it is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Coerce the value to its textual representation.
    ///
    /// Missing values become the empty string rather than a placeholder
    /// token. Floats always keep a fractional part (`1.0`, not `1`).
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Missing => String::new(),
            CellValue::Text(text) => text.clone(),
            CellValue::Integer(value) => value.to_string(),
            CellValue::Float(value) => format!("{:?}", value),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Missing => serializer.serialize_none(),
            CellValue::Text(text) => serializer.serialize_str(text),
            CellValue::Integer(value) => serializer.serialize_i64(*value),
            CellValue::Float(value) => serializer.serialize_f64(*value),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CellRepr {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<CellRepr>::deserialize(deserializer)? {
            None => CellValue::Missing,
            Some(CellRepr::Integer(value)) => CellValue::Integer(value),
            Some(CellRepr::Float(value)) => CellValue::Float(value),
            Some(CellRepr::Text(text)) => CellValue::Text(text),
        })
    }
}

/// Storage kind shared by every cell of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    /// Infer the kind of a column from its present (non-missing) cells.
    ///
    /// A column with no present cells is `Text`.
    pub fn infer<'a, I>(present: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut kind = None;
        for raw in present {
            let cell_kind = if raw.parse::<i64>().is_ok() {
                ColumnKind::Integer
            } else if parse_finite(raw).is_some() {
                ColumnKind::Float
            } else {
                return ColumnKind::Text;
            };
            kind = match (kind, cell_kind) {
                (None, k) => Some(k),
                (Some(ColumnKind::Integer), ColumnKind::Integer) => Some(ColumnKind::Integer),
                _ => Some(ColumnKind::Float),
            };
        }
        kind.unwrap_or(ColumnKind::Text)
    }

    /// Convert a present raw cell according to this kind.
    pub fn parse(self, raw: &str) -> CellValue {
        match self {
            ColumnKind::Integer => raw
                .parse::<i64>()
                .map(CellValue::Integer)
                .unwrap_or_else(|_| CellValue::from(raw)),
            ColumnKind::Float => parse_finite(raw)
                .map(CellValue::Float)
                .unwrap_or_else(|| CellValue::from(raw)),
            ColumnKind::Text => CellValue::from(raw),
        }
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_integer_column() {
        assert_eq!(ColumnKind::infer(["1", "2", "-30"]), ColumnKind::Integer);
    }

    #[test]
    fn test_infer_mixed_numbers_widen_to_float() {
        assert_eq!(ColumnKind::infer(["1", "2.5"]), ColumnKind::Float);
    }

    #[test]
    fn test_infer_any_text_makes_text() {
        assert_eq!(ColumnKind::infer(["1", "q-2", "3"]), ColumnKind::Text);
        assert_eq!(ColumnKind::infer(["1", "inf"]), ColumnKind::Text);
    }

    #[test]
    fn test_infer_empty_column_is_text() {
        assert_eq!(ColumnKind::infer(std::iter::empty()), ColumnKind::Text);
    }

    #[test]
    fn test_parse_follows_column_kind() {
        assert_eq!(ColumnKind::Integer.parse("7"), CellValue::Integer(7));
        assert_eq!(ColumnKind::Float.parse("7"), CellValue::Float(7.0));
        assert_eq!(ColumnKind::Text.parse("7"), CellValue::Text("7".to_string()));
    }

    #[test]
    fn test_to_text() {
        assert_eq!(CellValue::Missing.to_text(), "");
        assert_eq!(CellValue::Integer(42).to_text(), "42");
        assert_eq!(CellValue::Float(1.0).to_text(), "1.0");
        assert_eq!(CellValue::Float(2.5).to_text(), "2.5");
        assert_eq!(CellValue::from("abc").to_text(), "abc");
    }

    #[test]
    fn test_json_representation() {
        let cells = vec![
            CellValue::Missing,
            CellValue::from("a"),
            CellValue::Integer(3),
            CellValue::Float(1.5),
        ];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"[null,"a",3,1.5]"#);

        let back: Vec<CellValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cells);
    }
}
