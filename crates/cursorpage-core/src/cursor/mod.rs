//! Module: cursor
//! Responsibility: cursor values, before/after anchors, and the opaque token codec.
//! Does not own: range traversal or page assembly.

mod token;
mod value;


pub use token::{CursorTokenError, decode_cursor_token, encode_cursor_token};
pub use value::CursorValue;

use serde::{Deserialize, Serialize};

///
/// CursorDirection
///
/// Side of the cursor a page request reads, relative to display order.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorDirection {
    Before,
    After,
}

impl CursorDirection {
    /// Query-parameter name carrying this direction.
    #[must_use]
    pub const fn param_name(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

///
/// PageCursor
///
/// One direction-tagged cursor value. Only meaningful next to an `OrderingSpec`.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PageCursor {
    pub direction: CursorDirection,
    pub value: CursorValue,
}

impl PageCursor {
    #[must_use]
    pub fn before(value: impl Into<CursorValue>) -> Self {
        Self {
            direction: CursorDirection::Before,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn after(value: impl Into<CursorValue>) -> Self {
        Self {
            direction: CursorDirection::After,
            value: value.into(),
        }
    }
}
