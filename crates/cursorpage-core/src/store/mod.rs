//! Module: store
//! Responsibility: the ordered-store boundary consumed by the paginator.
//! Does not own: persistence, indexing, or query planning of real backends.
//! Boundary: every range result crosses this trait already in display order.

mod memory;


pub use memory::MemoryStore;

use crate::{cursor::CursorValue, order::OrderingSpec};

///
/// OrderedItem
///
/// Item that can report its value for a named ordering field.
///

pub trait OrderedItem {
    fn order_value(&self, field: &str) -> Option<CursorValue>;
}

///
/// OrderedStore
///
/// Read-only range and existence queries over one strictly ordered field.
///
/// Contract for every range method:
/// - results are returned in display order for `order`
/// - when more than `limit` items qualify, the ones closest to the cursor
///   (or to the collection start, for `first`) are kept
///

pub trait OrderedStore {
    type Item;
    type Error: std::error::Error + 'static;

    /// Up to `limit` items from the start of the display order.
    fn first(&self, order: &OrderingSpec, limit: usize) -> Result<Vec<Self::Item>, Self::Error>;

    /// Up to `limit` items displayed strictly before `cursor`, nearest first kept.
    fn range_before(
        &self,
        order: &OrderingSpec,
        cursor: &CursorValue,
        limit: usize,
    ) -> Result<Vec<Self::Item>, Self::Error>;

    /// Up to `limit` items displayed strictly after `cursor`, nearest first kept.
    fn range_after(
        &self,
        order: &OrderingSpec,
        cursor: &CursorValue,
        limit: usize,
    ) -> Result<Vec<Self::Item>, Self::Error>;

    /// Does any item display strictly before `boundary`?
    fn exists_before(
        &self,
        order: &OrderingSpec,
        boundary: &Self::Item,
    ) -> Result<bool, Self::Error>;

    /// Does any item display strictly after `boundary`?
    fn exists_after(&self, order: &OrderingSpec, boundary: &Self::Item)
    -> Result<bool, Self::Error>;

    /// Cursor value of one returned item on the ordering field.
    fn cursor_value(&self, order: &OrderingSpec, item: &Self::Item) -> Option<CursorValue>;
}
