use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A typed property or parameter value.
///
/// Variants follow the xCal value elements. Date and time forms are kept in
/// their lexical representation: two values are the same only if their text
/// is the same, so no time-zone normalization happens here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(String),
    DateTime(String),
    Duration(String),
    Period(String),
    Recur(String),
    UtcOffset(String),
    Uri(String),
    CalAddress(String),
    Binary(String),
    /// Multi-valued properties such as `categories` or `rdate`.
    List(Vec<Value>),
}

impl Value {
    /// Shorthand for a text value.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// The xCal element name of this value kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
            Value::Date(_) => "date",
            Value::DateTime(_) => "date-time",
            Value::Duration(_) => "duration",
            Value::Period(_) => "period",
            Value::Recur(_) => "recur",
            Value::UtcOffset(_) => "utc-offset",
            Value::Uri(_) => "uri",
            Value::CalAddress(_) => "cal-address",
            Value::Binary(_) => "binary",
            Value::List(_) => "list",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Text(_) => 0,
            Value::Integer(_) => 1,
            Value::Float(_) => 2,
            Value::Boolean(_) => 3,
            Value::Date(_) => 4,
            Value::DateTime(_) => 5,
            Value::Duration(_) => 6,
            Value::Period(_) => 7,
            Value::Recur(_) => 8,
            Value::UtcOffset(_) => 9,
            Value::Uri(_) => 10,
            Value::CalAddress(_) => 11,
            Value::Binary(_) => 12,
            Value::List(_) => 13,
        }
    }

    fn lexical(&self) -> Option<&str> {
        match self {
            Value::Text(s)
            | Value::Date(s)
            | Value::DateTime(s)
            | Value::Duration(s)
            | Value::Period(s)
            | Value::Recur(s)
            | Value::UtcOffset(s)
            | Value::Uri(s)
            | Value::CalAddress(s)
            | Value::Binary(s) => Some(s),
            _ => None,
        }
    }

    /// Total comparison where possible.
    ///
    /// Values of different kinds order by kind. Returns `None` when the two
    /// values cannot be ordered, which only happens for a NaN float (directly
    /// or inside a list).
    pub fn try_compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
            (Value::List(a), Value::List(b)) => {
                if a.len() != b.len() {
                    return Some(a.len().cmp(&b.len()));
                }
                for (x, y) in a.iter().zip(b) {
                    match x.try_compare(y)? {
                        Ordering::Equal => continue,
                        ord => return Some(ord),
                    }
                }
                Some(Ordering::Equal)
            }
            _ => match (self.lexical(), other.lexical()) {
                (Some(a), Some(b)) if self.rank() == other.rank() => Some(a.cmp(b)),
                _ => Some(self.rank().cmp(&other.rank())),
            },
        }
    }

    /// Returns `true` if this value, or any list member, is a NaN float.
    pub fn is_incomparable(&self) -> bool {
        match self {
            Value::Float(f) => f.is_nan(),
            Value::List(items) => items.iter().any(Value::is_incomparable),
            _ => false,
        }
    }

    /// Feed this value into a hasher consistently with [`Value::try_compare`]:
    /// values that compare equal hash equal.
    pub fn hash_into<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Value::Integer(i) => i.hash(state),
            // -0.0 and 0.0 compare equal.
            Value::Float(f) => {
                let f = if *f == 0.0 { 0.0 } else { *f };
                f.to_bits().hash(state);
            }
            Value::Boolean(b) => b.hash(state),
            Value::List(items) => {
                items.len().hash(state);
                for item in items {
                    item.hash_into(state);
                }
            }
            other => other.lexical().hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            other => f.write_str(other.lexical().unwrap_or_default()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}
