//! Shared fixtures for in-crate tests.

use crate::{
    cursor::CursorValue,
    obs::{MetricsEvent, MetricsSink},
    order::OrderingSpec,
    store::{MemoryStore, OrderedItem, OrderedStore},
};
use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
};

///
/// Notification
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Notification {
    pub(crate) id: i64,
    pub(crate) verb: String,
}

impl OrderedItem for Notification {
    fn order_value(&self, field: &str) -> Option<CursorValue> {
        match field {
            "id" => Some(CursorValue::Int(self.id)),
            "verb" => Some(CursorValue::Text(self.verb.clone())),
            _ => None,
        }
    }
}

pub(crate) fn notification(id: i64) -> Notification {
    Notification {
        id,
        verb: format!("test_{id}"),
    }
}

/// Store with notifications `0..count`, inserted out of order.
pub(crate) fn notifications(count: i64) -> MemoryStore<Notification> {
    (0..count).rev().map(notification).collect()
}

pub(crate) fn ids(items: &[Notification]) -> Vec<i64> {
    items.iter().map(|item| item.id).collect()
}

///
/// RecordingSink
///

#[derive(Default)]
pub(crate) struct RecordingSink {
    events: RefCell<Vec<MetricsEvent>>,
}

impl RecordingSink {
    pub(crate) fn events(&self) -> Vec<MetricsEvent> {
        self.events.borrow().clone()
    }
}

impl MetricsSink for RecordingSink {
    fn record(&self, event: MetricsEvent) {
        self.events.borrow_mut().push(event);
    }
}

///
/// CountingStore
///
/// Wraps a memory store and counts every read that reaches it.
///

pub(crate) struct CountingStore {
    inner: MemoryStore<Notification>,
    reads: Cell<usize>,
}

impl CountingStore {
    pub(crate) const fn new(inner: MemoryStore<Notification>) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
        }
    }

    pub(crate) const fn reads(&self) -> usize {
        self.reads.get()
    }

    fn bump(&self) {
        self.reads.set(self.reads.get() + 1);
    }
}

impl OrderedStore for CountingStore {
    type Item = Notification;
    type Error = Infallible;

    fn first(&self, order: &OrderingSpec, limit: usize) -> Result<Vec<Notification>, Infallible> {
        self.bump();
        self.inner.first(order, limit)
    }

    fn range_before(
        &self,
        order: &OrderingSpec,
        cursor: &CursorValue,
        limit: usize,
    ) -> Result<Vec<Notification>, Infallible> {
        self.bump();
        self.inner.range_before(order, cursor, limit)
    }

    fn range_after(
        &self,
        order: &OrderingSpec,
        cursor: &CursorValue,
        limit: usize,
    ) -> Result<Vec<Notification>, Infallible> {
        self.bump();
        self.inner.range_after(order, cursor, limit)
    }

    fn exists_before(
        &self,
        order: &OrderingSpec,
        boundary: &Notification,
    ) -> Result<bool, Infallible> {
        self.bump();
        self.inner.exists_before(order, boundary)
    }

    fn exists_after(
        &self,
        order: &OrderingSpec,
        boundary: &Notification,
    ) -> Result<bool, Infallible> {
        self.bump();
        self.inner.exists_after(order, boundary)
    }

    fn cursor_value(&self, order: &OrderingSpec, item: &Notification) -> Option<CursorValue> {
        self.inner.cursor_value(order, item)
    }
}
