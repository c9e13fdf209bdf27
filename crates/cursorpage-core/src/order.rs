//! Module: order
//! Responsibility: single-field ordering contracts and display-order comparison.
//! Does not own: store traversal or cursor token encoding.
//! Boundary: the only place where the `-field` identifier convention is parsed.

use crate::cursor::CursorValue;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error as ThisError;

/// Prefix marking a descending ordering identifier (`-id`).
pub const DESCENDING_PREFIX: char = '-';

///
/// OrderDirection
///
/// Display direction of the single active ordering field.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Map a raw field-value ordering into display order.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

///
/// OrderingSpec
///
/// One ordering field plus its display direction.
/// The field is assumed unique per item; tie behavior is undefined.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct OrderingSpec {
    field: String,
    direction: OrderDirection,
}

impl OrderingSpec {
    #[must_use]
    pub fn new(field: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, OrderDirection::Asc)
    }

    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, OrderDirection::Desc)
    }

    /// Parse a direction-prefixed field identifier (`id` or `-id`).
    pub fn parse(identifier: &str) -> Result<Self, OrderingParseError> {
        let identifier = identifier.trim();
        let (field, direction) = match identifier.strip_prefix(DESCENDING_PREFIX) {
            Some(field) => (field, OrderDirection::Desc),
            None => (identifier, OrderDirection::Asc),
        };

        if field.is_empty() {
            return Err(OrderingParseError::EmptyField);
        }
        if !field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(OrderingParseError::InvalidField {
                identifier: identifier.to_string(),
            });
        }

        Ok(Self::new(field, direction))
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn direction(&self) -> OrderDirection {
        self.direction
    }

    #[must_use]
    pub const fn is_descending(&self) -> bool {
        matches!(self.direction, OrderDirection::Desc)
    }

    /// Same field, opposite display direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.field.clone(), self.direction.reverse())
    }

    /// Compare two field values in display order.
    #[must_use]
    pub fn compare(&self, left: &CursorValue, right: &CursorValue) -> Ordering {
        self.direction.apply(left.cmp(right))
    }

    /// True when `value` is displayed strictly before `boundary`.
    #[must_use]
    pub fn precedes(&self, value: &CursorValue, boundary: &CursorValue) -> bool {
        self.compare(value, boundary) == Ordering::Less
    }

    /// True when `value` is displayed strictly after `boundary`.
    #[must_use]
    pub fn follows(&self, value: &CursorValue, boundary: &CursorValue) -> bool {
        self.compare(value, boundary) == Ordering::Greater
    }
}

impl fmt::Display for OrderingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            OrderDirection::Asc => write!(f, "{}", self.field),
            OrderDirection::Desc => write!(f, "{DESCENDING_PREFIX}{}", self.field),
        }
    }
}

impl FromStr for OrderingSpec {
    type Err = OrderingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

///
/// OrderingParseError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum OrderingParseError {
    #[error("ordering field identifier is empty")]
    EmptyField,

    #[error("ordering field identifier '{identifier}' is not a valid field name")]
    InvalidField { identifier: String },
}

///
/// TESTS
///
