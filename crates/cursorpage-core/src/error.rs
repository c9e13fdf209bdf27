use thiserror::Error as ThisError;

///
/// PaginateError
///
/// Failures owned by one pagination call. An empty strict window is not an
/// error; it is `PageOutcome::NotFound`.
///

#[derive(Debug, ThisError)]
pub enum PaginateError<E> {
    /// Page size was zero; rejected before any store read.
    #[error("page size must be greater than zero, got {page_size}")]
    InvalidPageSize { page_size: u32 },

    /// Ordered store read failed; the store error passes through untouched.
    #[error(transparent)]
    Store(E),
}

impl<E> PaginateError<E> {
    #[must_use]
    pub const fn is_invalid_page_size(&self) -> bool {
        matches!(self, Self::InvalidPageSize { .. })
    }

    /// Borrow the underlying store error, if this failure came from the store.
    #[must_use]
    pub const fn store_error(&self) -> Option<&E> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidPageSize { .. } => None,
        }
    }
}
