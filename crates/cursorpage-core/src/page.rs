//! Module: page
//! Responsibility: page payload returned by the paginator.
//! Does not own: item formatting or link rendering.

use crate::cursor::CursorValue;
use serde::{Deserialize, Serialize};

///
/// Page
///
/// Items in display order plus neighbour flags. Items are never re-reversed,
/// whichever side of a cursor was queried.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Page<T> {
    items: Vec<T>,
    has_previous: bool,
    has_next: bool,
    first_cursor: Option<CursorValue>,
    last_cursor: Option<CursorValue>,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn new(
        items: Vec<T>,
        has_previous: bool,
        has_next: bool,
        first_cursor: Option<CursorValue>,
        last_cursor: Option<CursorValue>,
    ) -> Self {
        Self {
            items,
            has_previous,
            has_next,
            first_cursor,
            last_cursor,
        }
    }

    /// Build an empty page with explicit neighbour flags.
    #[must_use]
    pub const fn empty(has_previous: bool, has_next: bool) -> Self {
        Self::new(Vec::new(), has_previous, has_next, None, None)
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items exist nearer the start of the display order than this page.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.has_previous
    }

    /// Items exist nearer the end of the display order than this page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    #[must_use]
    pub const fn first_cursor(&self) -> Option<&CursorValue> {
        self.first_cursor.as_ref()
    }

    #[must_use]
    pub const fn last_cursor(&self) -> Option<&CursorValue> {
        self.last_cursor.as_ref()
    }

    /// Cursor for an `after` request that continues past this page.
    #[must_use]
    pub const fn next_cursor(&self) -> Option<&CursorValue> {
        if self.has_next {
            self.last_cursor.as_ref()
        } else {
            None
        }
    }

    /// Cursor for a `before` request that walks back from this page.
    #[must_use]
    pub const fn previous_cursor(&self) -> Option<&CursorValue> {
        if self.has_previous {
            self.first_cursor.as_ref()
        } else {
            None
        }
    }

    /// Transform items while keeping flags and cursors.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            has_previous: self.has_previous,
            has_next: self.has_next,
            first_cursor: self.first_cursor,
            last_cursor: self.last_cursor,
        }
    }
}

///
/// PageOutcome
///
/// Result of one pagination call. `NotFound` only appears for an empty
/// before/after window under a strict request.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PageOutcome<T> {
    Page(Page<T>),
    NotFound,
}

impl<T> PageOutcome<T> {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    #[must_use]
    pub const fn page(&self) -> Option<&Page<T>> {
        match self {
            Self::Page(page) => Some(page),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub fn into_page(self) -> Option<Page<T>> {
        match self {
            Self::Page(page) => Some(page),
            Self::NotFound => None,
        }
    }
}

impl<T> From<Page<T>> for PageOutcome<T> {
    fn from(page: Page<T>) -> Self {
        Self::Page(page)
    }
}

///
/// TESTS
///
