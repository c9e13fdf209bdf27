//! Module: query
//! Responsibility: turn caller request parameters into a bounded `PageRequest`.
//! Does not own: HTTP plumbing; callers hand in already-decoded key/value pairs.
//! Boundary: page-size clamping lives here, never in the paginator.

use cursorpage_config::{CollectionPolicy, CursorFormat};
use cursorpage_core::{
    cursor::{CursorDirection, CursorTokenError, CursorValue, PageCursor, decode_cursor_token},
    error::PaginateError,
    page::PageOutcome,
    paginator::paginate,
    request::PageRequest,
    store::OrderedStore,
};
use thiserror::Error as ThisError;

pub const LIMIT_PARAM: &str = "limit";

///
/// QueryError
///
/// Rejected pagination parameters. Every variant belongs to the "no such page"
/// class; callers answer it the same way as `PageOutcome::NotFound`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error("'before' and 'after' cannot be combined")]
    ConflictingCursors,

    #[error("invalid value for '{name}': {value:?}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("invalid cursor token for '{name}': {source}")]
    InvalidToken {
        name: &'static str,
        #[source]
        source: CursorTokenError,
    },
}

///
/// ParamsError
///

#[derive(Debug, ThisError)]
pub enum ParamsError<E> {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Paginate(PaginateError<E>),
}

impl<E> ParamsError<E> {
    /// True for parameter rejections that callers surface as "no such page".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Query(_))
    }
}

/// Build a `PageRequest` from `before` / `after` / `limit` parameters.
///
/// Unrelated keys are ignored. A missing `limit` means the policy maximum,
/// and an oversized one is clamped to it.
pub fn parse_page_request<I, K, V>(
    params: I,
    policy: &CollectionPolicy,
) -> Result<PageRequest, QueryError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut before = None;
    let mut after = None;
    let mut limit = None;

    for (key, value) in params {
        let value = value.as_ref();
        match key.as_ref() {
            "before" => before = Some(parse_cursor(CursorDirection::Before, value, policy)?),
            "after" => after = Some(parse_cursor(CursorDirection::After, value, policy)?),
            LIMIT_PARAM => limit = Some(parse_limit(value)?),
            _ => {}
        }
    }

    let cursor = match (before, after) {
        (Some(_), Some(_)) => return Err(QueryError::ConflictingCursors),
        (Some(cursor), None) | (None, Some(cursor)) => Some(cursor),
        (None, None) => None,
    };
    let page_size = limit.map_or(policy.max_page_size, |limit: u32| {
        limit.min(policy.max_page_size)
    });

    Ok(PageRequest::new(policy.order.clone(), page_size, cursor).strict(policy.strict))
}

/// Parse parameters, then paginate `store` under `policy`.
pub fn paginate_params<S, I, K, V>(
    store: &S,
    params: I,
    policy: &CollectionPolicy,
) -> Result<PageOutcome<S::Item>, ParamsError<S::Error>>
where
    S: OrderedStore,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let request = parse_page_request(params, policy)?;

    paginate(store, &request).map_err(ParamsError::Paginate)
}

fn parse_cursor(
    direction: CursorDirection,
    raw: &str,
    policy: &CollectionPolicy,
) -> Result<PageCursor, QueryError> {
    let name = direction.param_name();
    let value = match policy.cursor_format {
        CursorFormat::Plain => raw
            .trim()
            .parse::<u64>()
            .ok()
            .and_then(|id| i64::try_from(id).ok())
            .map(CursorValue::Int)
            .ok_or_else(|| QueryError::InvalidParameter {
                name,
                value: raw.to_string(),
            })?,
        CursorFormat::Token => {
            decode_cursor_token(raw).map_err(|source| QueryError::InvalidToken { name, source })?
        }
    };

    Ok(PageCursor { direction, value })
}

fn parse_limit(raw: &str) -> Result<u32, QueryError> {
    match raw.trim().parse::<u32>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(QueryError::InvalidParameter {
            name: LIMIT_PARAM,
            value: raw.to_string(),
        }),
    }
}

///
/// TESTS
///
