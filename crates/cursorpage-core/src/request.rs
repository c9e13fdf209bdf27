//! Module: request
//! Responsibility: one immutable page request (ordering, size, cursor, strictness).
//! Does not own: parameter parsing or page-size clamping; callers bound the size.

use crate::{
    cursor::{CursorDirection, CursorValue, PageCursor},
    order::OrderingSpec,
};
use serde::{Deserialize, Serialize};

///
/// PageMode
///
/// Which window a request reads: the head of the collection, or one side of a cursor.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMode {
    First,
    Before,
    After,
}

impl PageMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

///
/// PageRequest
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageRequest {
    order: OrderingSpec,
    page_size: u32,
    cursor: Option<PageCursor>,
    strict: bool,
}

impl PageRequest {
    #[must_use]
    pub const fn new(order: OrderingSpec, page_size: u32, cursor: Option<PageCursor>) -> Self {
        Self {
            order,
            page_size,
            cursor,
            strict: false,
        }
    }

    /// Request the first page in display order.
    #[must_use]
    pub const fn first(order: OrderingSpec, page_size: u32) -> Self {
        Self::new(order, page_size, None)
    }

    /// Request the page displayed immediately before `cursor`.
    #[must_use]
    pub fn before(order: OrderingSpec, cursor: impl Into<CursorValue>, page_size: u32) -> Self {
        Self::new(order, page_size, Some(PageCursor::before(cursor)))
    }

    /// Request the page displayed immediately after `cursor`.
    #[must_use]
    pub fn after(order: OrderingSpec, cursor: impl Into<CursorValue>, page_size: u32) -> Self {
        Self::new(order, page_size, Some(PageCursor::after(cursor)))
    }

    /// Surface an empty before/after window as `NotFound` instead of an empty page.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub const fn order(&self) -> &OrderingSpec {
        &self.order
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub const fn cursor(&self) -> Option<&PageCursor> {
        self.cursor.as_ref()
    }

    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    #[must_use]
    pub const fn mode(&self) -> PageMode {
        match &self.cursor {
            None => PageMode::First,
            Some(PageCursor {
                direction: CursorDirection::Before,
                ..
            }) => PageMode::Before,
            Some(PageCursor {
                direction: CursorDirection::After,
                ..
            }) => PageMode::After,
        }
    }
}

///
/// TESTS
///
