#![allow(dead_code)]

use cursorpage::prelude::*;
use cursorpage::store::MemoryStore;
use serde::Serialize;

///
/// Notification
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Notification {
    pub id: i64,
    pub verb: String,
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

pub fn notification(id: i64) -> Notification {
    Notification {
        id,
        verb: format!("test_{id}"),
    }
}

/// Notifications 0..15, inserted newest first.
pub fn feed() -> MemoryStore<Notification> {
    store_of((0..15).rev())
}

pub fn store_of(ids: impl IntoIterator<Item = i64>) -> MemoryStore<Notification> {
    ids.into_iter().map(notification).collect()
}

pub fn ids(page: &Page<Notification>) -> Vec<i64> {
    page.items().iter().map(|item| item.id).collect()
}

pub fn expect_page<T>(outcome: PageOutcome<T>) -> Page<T> {
    outcome
        .into_page()
        .expect("request should resolve to a page, not NotFound")
}
