//! Module: paginator
//! Responsibility: keyset page assembly over an `OrderedStore`.
//! Does not own: store traversal, parameter parsing, or page-size clamping.
//! Boundary: at most two store reads per call; the store is never written.


use crate::{
    cursor::{CursorDirection, CursorValue},
    error::PaginateError,
    obs::{GLOBAL_METRICS_SINK, MetricsEvent, MetricsSink, Span, StoreOp},
    order::OrderingSpec,
    page::{Page, PageOutcome},
    request::PageRequest,
    store::OrderedStore,
};

/// Paginate `store` with the default metrics sink.
pub fn paginate<S: OrderedStore>(
    store: &S,
    request: &PageRequest,
) -> Result<PageOutcome<S::Item>, PaginateError<S::Error>> {
    Paginator::new(store).paginate(request)
}

///
/// Paginator
///
/// Stateless page builder bound to one store handle.
///
/// Each side of the window is resolved with exactly one read:
/// - the far side (away from the cursor) by fetching one probe item past the
///   page size and dropping it
/// - the near side (towards the cursor) by an existence check beyond the
///   nearest returned item
///

pub struct Paginator<'a, S> {
    store: &'a S,
    sink: &'a dyn MetricsSink,
}

impl<'a, S: OrderedStore> Paginator<'a, S> {
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            sink: &GLOBAL_METRICS_SINK,
        }
    }

    /// Route telemetry to `sink` instead of the global metrics sink.
    #[must_use]
    pub fn with_sink(mut self, sink: &'a dyn MetricsSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn paginate(
        &self,
        request: &PageRequest,
    ) -> Result<PageOutcome<S::Item>, PaginateError<S::Error>> {
        let mode = request.mode();
        let page_size = request.page_size();
        if page_size == 0 {
            self.sink.record(MetricsEvent::Rejected { mode, page_size });

            return Err(PaginateError::InvalidPageSize { page_size });
        }

        let limit = usize::try_from(page_size).unwrap_or(usize::MAX);
        let order = request.order();
        let mut span = Span::new(self.sink, mode);

        let outcome = match request.cursor() {
            None => PageOutcome::Page(self.first_page(&span, order, limit)?),
            Some(cursor) => {
                let window = match cursor.direction {
                    CursorDirection::Before => {
                        self.before_window(&span, order, &cursor.value, limit)?
                    }
                    CursorDirection::After => {
                        self.after_window(&span, order, &cursor.value, limit)?
                    }
                };

                match window {
                    Window::Items(page) => PageOutcome::Page(page),
                    Window::Empty { .. } if request.is_strict() => PageOutcome::NotFound,
                    Window::Empty { direction } => {
                        PageOutcome::Page(self.empty_page(&span, order, direction)?)
                    }
                }
            }
        };

        match &outcome {
            PageOutcome::Page(page) => {
                span.set_page(page.len(), page.has_previous(), page.has_next());
            }
            PageOutcome::NotFound => span.set_not_found(),
        }

        Ok(outcome)
    }

    // Head of the display order; one read with a probe item for `has_next`.
    fn first_page(
        &self,
        span: &Span<'_>,
        order: &OrderingSpec,
        limit: usize,
    ) -> Result<Page<S::Item>, PaginateError<S::Error>> {
        let mut items = self
            .store
            .first(order, probe_limit(limit))
            .map_err(PaginateError::Store)?;
        span.store_read(StoreOp::First, items.len());

        let has_next = items.len() > limit;
        items.truncate(limit);

        Ok(self.page(order, items, false, has_next))
    }

    // Items displayed before the cursor. The probe item sits at the head
    // (farthest from the cursor) and decides `has_previous`.
    fn before_window(
        &self,
        span: &Span<'_>,
        order: &OrderingSpec,
        cursor: &CursorValue,
        limit: usize,
    ) -> Result<Window<S::Item>, PaginateError<S::Error>> {
        let mut items = self
            .store
            .range_before(order, cursor, probe_limit(limit))
            .map_err(PaginateError::Store)?;
        span.store_read(StoreOp::RangeBefore, items.len());

        let has_previous = items.len() > limit;
        if has_previous {
            let excess = items.len() - limit;
            items.drain(..excess);
        }

        let Some(nearest) = items.last() else {
            return Ok(Window::Empty {
                direction: CursorDirection::Before,
            });
        };
        let has_next = self
            .store
            .exists_after(order, nearest)
            .map_err(PaginateError::Store)?;
        span.store_read(StoreOp::ExistsAfter, usize::from(has_next));

        Ok(Window::Items(self.page(order, items, has_previous, has_next)))
    }

    // Items displayed after the cursor. The probe item sits at the tail
    // (farthest from the cursor) and decides `has_next`.
    fn after_window(
        &self,
        span: &Span<'_>,
        order: &OrderingSpec,
        cursor: &CursorValue,
        limit: usize,
    ) -> Result<Window<S::Item>, PaginateError<S::Error>> {
        let mut items = self
            .store
            .range_after(order, cursor, probe_limit(limit))
            .map_err(PaginateError::Store)?;
        span.store_read(StoreOp::RangeAfter, items.len());

        let has_next = items.len() > limit;
        items.truncate(limit);

        let Some(nearest) = items.first() else {
            return Ok(Window::Empty {
                direction: CursorDirection::After,
            });
        };
        let has_previous = self
            .store
            .exists_before(order, nearest)
            .map_err(PaginateError::Store)?;
        span.store_read(StoreOp::ExistsBefore, usize::from(has_previous));

        Ok(Window::Items(self.page(order, items, has_previous, has_next)))
    }

    // Lenient empty window. Nothing lies on the queried side of the cursor,
    // so anything left in the collection lies on the other side.
    fn empty_page(
        &self,
        span: &Span<'_>,
        order: &OrderingSpec,
        direction: CursorDirection,
    ) -> Result<Page<S::Item>, PaginateError<S::Error>> {
        let any = self.store.first(order, 1).map_err(PaginateError::Store)?;
        span.store_read(StoreOp::First, any.len());
        let occupied = !any.is_empty();

        Ok(match direction {
            CursorDirection::Before => Page::empty(false, occupied),
            CursorDirection::After => Page::empty(occupied, false),
        })
    }

    fn page(
        &self,
        order: &OrderingSpec,
        items: Vec<S::Item>,
        has_previous: bool,
        has_next: bool,
    ) -> Page<S::Item> {
        let first_cursor = items
            .first()
            .and_then(|item| self.store.cursor_value(order, item));
        let last_cursor = items
            .last()
            .and_then(|item| self.store.cursor_value(order, item));

        Page::new(items, has_previous, has_next, first_cursor, last_cursor)
    }
}

///
/// Window
///
/// One cursor-bounded read before the strict/lenient decision is applied.
///

enum Window<T> {
    Items(Page<T>),
    Empty { direction: CursorDirection },
}

// One extra item beyond the page decides whether the far side continues.
const fn probe_limit(limit: usize) -> usize {
    limit.saturating_add(1)
}
