// src/table/value.rs
//
// Cell values and the `Record` trait rows implement so columns can read
// fields by name.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// Stable identity of a row across data refreshes.
pub type RowKey = u64;

/// A row type the table can display.
///
/// `field` is the by-name accessor used by `ColumnAccessor::Field`; unknown
/// names return `Value::Empty`.
pub trait Record {
    fn key(&self) -> RowKey;
    fn field(&self, name: &str) -> Value;
}

/// A primitive, sortable value read off a row.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl Value {
    pub fn text<S: Into<String>>(s: S) -> Self { Value::Text(s.into()) }

    /// Optional text: `None` becomes `Empty`.
    pub fn opt_text(s: Option<&str>) -> Self {
        s.map(Value::text).unwrap_or(Value::Empty)
    }

    pub fn opt_date(d: Option<NaiveDate>) -> Self {
        d.map(Value::Date).unwrap_or(Value::Empty)
    }

    pub fn is_empty(&self) -> bool { matches!(self, Value::Empty) }

    // Kinds that can't be compared directly order by rank; Empty sorts last.
    fn rank(&self) -> u8 {
        match self {
            Value::Bool(_) => 0,
            Value::Int(_) | Value::Float(_) => 1,
            Value::Date(_) => 2,
            Value::Text(_) => 3,
            Value::Empty => 4,
        }
    }

    /// Natural ordering: numeric for numbers, chronological for dates,
    /// accent/case-folded for text (exact order breaks ties).
    pub fn compare(&self, other: &Value) -> Ordering {
        use Value::*;
        match (self, other) {
            (Bool(a), Bool(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (Date(a), Date(b)) => a.cmp(b),
            (Text(a), Text(b)) => compare_text(a, b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => write!(f, "—"),
            Value::Bool(true) => write!(f, "yes"),
            Value::Bool(false) => write!(f, "no"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:.2}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Text(s.to_string()) }
}
impl From<String> for Value {
    fn from(s: String) -> Self { Value::Text(s) }
}
impl From<i64> for Value {
    fn from(n: i64) -> Self { Value::Int(n) }
}
impl From<u32> for Value {
    fn from(n: u32) -> Self { Value::Int(n as i64) }
}
impl From<f64> for Value {
    fn from(x: f64) -> Self { Value::Float(x) }
}
impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Bool(b) }
}
impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self { Value::Date(d) }
}

/// Colour hint for badges. Front-ends map it to their palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

/// What a column renders for a row.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Value(Value),
    Badge { text: String, tone: Tone },
    /// Decorative content with no meaningful order.
    Icon(&'static str),
}

impl Cell {
    pub fn badge<S: Into<String>>(text: S, tone: Tone) -> Self {
        Cell::Badge { text: text.into(), tone }
    }

    /// Value used when a derived column is sorted.
    pub fn sort_value(&self) -> Value {
        match self {
            Cell::Value(v) => v.clone(),
            Cell::Badge { text, .. } => Value::Text(text.clone()),
            Cell::Icon(_) => Value::Empty,
        }
    }

    pub fn text(&self) -> String {
        match self {
            Cell::Value(v) => v.to_string(),
            Cell::Badge { text, .. } => text.clone(),
            Cell::Icon(s) => s!(*s),
        }
    }
}

impl From<Value> for Cell {
    fn from(v: Value) -> Self { Cell::Value(v) }
}

/* ---------------- Text ordering ---------------- */

fn compare_text(a: &str, b: &str) -> Ordering {
    let fa = fold(a);
    let fb = fold(b);
    fa.cmp(&fb).then_with(|| a.cmp(b))
}

/// Lower-case and strip Latin diacritics ("Écran" sorts next to "ecran").
pub fn fold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars().flat_map(char::to_lowercase) {
        out.push(match ch {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
            'ç' => 'c',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ñ' => 'n',
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            'ý' | 'ÿ' => 'y',
            c => c,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_across_int_and_float() {
        assert_eq!(Value::Int(2).compare(&Value::Float(2.5)), Ordering::Less);
        assert_eq!(Value::Float(10.0).compare(&Value::Int(9)), Ordering::Greater);
    }

    #[test]
    fn text_ignores_case_and_accents() {
        assert_eq!(Value::text("écran").compare(&Value::text("Ecrou")), Ordering::Less);
        assert_eq!(Value::text("b").compare(&Value::text("A")), Ordering::Greater);
    }

    #[test]
    fn empty_sorts_after_everything() {
        assert_eq!(Value::Empty.compare(&Value::text("z")), Ordering::Greater);
        assert_eq!(Value::Int(0).compare(&Value::Empty), Ordering::Less);
    }
}
