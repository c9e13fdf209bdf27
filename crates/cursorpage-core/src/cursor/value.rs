use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

///
/// CursorValue
///
/// Value of one item on the ordering field.
/// Signed and unsigned integers compare by numeric value, so `Int(5)` and
/// `Uint(5)` are the same cursor. Numbers always sort before text.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub enum CursorValue {
    Int(i64),
    Uint(u64),
    Text(String),
}

impl CursorValue {
    // Both integer kinds widen losslessly into i128.
    fn numeric(&self) -> Option<i128> {
        match self {
            Self::Int(value) => Some(i128::from(*value)),
            Self::Uint(value) => Some(i128::from(*value)),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Text(_) => "text",
        }
    }

    /// Signed view of an integer cursor, if it fits in `i64`.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        self.numeric().and_then(|value| i64::try_from(value).ok())
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl Ord for CursorValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(left), Some(right)) => left.cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.as_text().cmp(&other.as_text()),
        }
    }
}

impl PartialEq for CursorValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CursorValue {}

impl Hash for CursorValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.numeric() {
            Some(value) => {
                0_u8.hash(state);
                value.hash(state);
            }
            None => {
                1_u8.hash(state);
                self.as_text().hash(state);
            }
        }
    }
}

impl PartialOrd for CursorValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CursorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Uint(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for CursorValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for CursorValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for CursorValue {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<u32> for CursorValue {
    fn from(value: u32) -> Self {
        Self::Uint(u64::from(value))
    }
}

impl From<String> for CursorValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for CursorValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
