//! Core runtime for cursorpage: ordering specs, cursor values, the ordered-store
//! boundary, and the keyset paginator that turns a strictly ordered collection
//! into stable before/after pages.
#![warn(unreachable_pub)]

pub mod cursor;
pub mod error;
pub mod obs;
pub mod order;
pub mod page;
pub mod paginator;
pub mod request;
pub mod store;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Domain vocabulary only; sinks and codecs stay one module down.
///

pub mod prelude {
    pub use crate::{
        cursor::{CursorDirection, CursorValue, PageCursor},
        order::{OrderDirection, OrderingSpec},
        page::{Page, PageOutcome},
        paginator::{Paginator, paginate},
        request::{PageMode, PageRequest},
        store::{OrderedItem, OrderedStore},
    };
}
