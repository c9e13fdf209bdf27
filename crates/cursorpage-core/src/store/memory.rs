use crate::{
    cursor::CursorValue,
    order::OrderingSpec,
    store::{OrderedItem, OrderedStore},
};
use std::convert::Infallible;

///
/// MemoryStore
///
/// Vector-backed reference store. Every query sorts a snapshot into display
/// order, so it suits tests and small embedded collections rather than large
/// tables. Items missing the ordering field are invisible to that ordering.
///

#[derive(Clone, Debug)]
pub struct MemoryStore<T> {
    items: Vec<T>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryStore<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }
}

impl<T: OrderedItem> MemoryStore<T> {
    /// Remove the item whose `field` equals `value`, returning it.
    pub fn remove(&mut self, field: &str, value: &CursorValue) -> Option<T> {
        let position = self
            .items
            .iter()
            .position(|item| item.order_value(field).as_ref() == Some(value))?;

        Some(self.items.remove(position))
    }

    // Snapshot of (value, item) pairs sorted into display order.
    fn display_ordered(&self, order: &OrderingSpec) -> Vec<(CursorValue, &T)> {
        let mut rows: Vec<_> = self
            .items
            .iter()
            .filter_map(|item| item.order_value(order.field()).map(|value| (value, item)))
            .collect();
        rows.sort_by(|(left, _), (right, _)| order.compare(left, right));

        rows
    }
}

impl<T: OrderedItem> FromIterator<T> for MemoryStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: OrderedItem + Clone> OrderedStore for MemoryStore<T> {
    type Item = T;
    type Error = Infallible;

    fn first(&self, order: &OrderingSpec, limit: usize) -> Result<Vec<T>, Infallible> {
        Ok(self
            .display_ordered(order)
            .into_iter()
            .take(limit)
            .map(|(_, item)| item.clone())
            .collect())
    }

    fn range_before(
        &self,
        order: &OrderingSpec,
        cursor: &CursorValue,
        limit: usize,
    ) -> Result<Vec<T>, Infallible> {
        let before: Vec<_> = self
            .display_ordered(order)
            .into_iter()
            .filter(|(value, _)| order.precedes(value, cursor))
            .collect();

        // Nearest to the cursor sit at the tail of the display-ordered run.
        let skip = before.len().saturating_sub(limit);

        Ok(before
            .into_iter()
            .skip(skip)
            .map(|(_, item)| item.clone())
            .collect())
    }

    fn range_after(
        &self,
        order: &OrderingSpec,
        cursor: &CursorValue,
        limit: usize,
    ) -> Result<Vec<T>, Infallible> {
        Ok(self
            .display_ordered(order)
            .into_iter()
            .filter(|(value, _)| order.follows(value, cursor))
            .take(limit)
            .map(|(_, item)| item.clone())
            .collect())
    }

    fn exists_before(&self, order: &OrderingSpec, boundary: &T) -> Result<bool, Infallible> {
        let Some(boundary) = boundary.order_value(order.field()) else {
            return Ok(false);
        };

        Ok(self.items.iter().any(|item| {
            item.order_value(order.field())
                .is_some_and(|value| order.precedes(&value, &boundary))
        }))
    }

    fn exists_after(&self, order: &OrderingSpec, boundary: &T) -> Result<bool, Infallible> {
        let Some(boundary) = boundary.order_value(order.field()) else {
            return Ok(false);
        };

        Ok(self.items.iter().any(|item| {
            item.order_value(order.field())
                .is_some_and(|value| order.follows(&value, &boundary))
        }))
    }

    fn cursor_value(&self, order: &OrderingSpec, item: &T) -> Option<CursorValue> {
        item.order_value(order.field())
    }
}
