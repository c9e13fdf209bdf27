//! cursorpage: keyset (cursor) pagination for large, frequently mutated,
//! strictly ordered collections such as notification feeds and thread lists.
//!
//! Pages are bounded by a cursor value instead of a numeric offset, so inserts
//! and deletes elsewhere in the collection never shift what a page shows.

pub mod query;

// re-exports
pub use cursorpage_config as config;
pub use cursorpage_core::{cursor, error, obs, order, page, paginator, request, store};

///
/// Prelude
///

pub mod prelude {
    pub use crate::query::{ParamsError, QueryError, paginate_params, parse_page_request};
    pub use cursorpage_config::{CollectionPolicy, CursorFormat, PaginationConfig};
    pub use cursorpage_core::prelude::*;
}
