use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::options::{ScrollEvent, ScrollOptions, Sentinel, Viewport};
use crate::page::{Page, PageSource};

/// Point-in-time copy of an [`InfiniteScroll`]'s state.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSnapshot<T> {
    pub items:    Vec<T>,
    pub loading:  bool,
    pub has_more: bool,
    pub error:    Option<String>,
    /// Zero-based index of the next page to request.
    pub page:     u32,
}

struct State<T> {
    items:      Vec<T>,
    loading:    bool,
    has_more:   bool,
    error:      Option<String>,
    page:       u32,
    // bumped by reset so results of older fetches are dropped
    generation: u64,
}

impl<T> State<T> {
    fn new(generation: u64) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            has_more: true,
            error: None,
            page: 0,
            generation,
        }
    }
}

/// Accumulates the pages of a [`PageSource`] into a single list.
///
/// State sits behind a mutex that is never held across the fetch, so
/// concurrent callers see `loading` and at most one fetch is in flight.
pub struct InfiniteScroll<T, S> {
    source:  S,
    options: ScrollOptions,
    state:   Mutex<State<T>>,
}

impl<T, S> InfiniteScroll<T, S>
where
    S: PageSource<T>,
{
    pub fn new(source: S, options: ScrollOptions) -> Self {
        Self {
            source,
            options,
            state: Mutex::new(State::new(0)),
        }
    }

    pub fn options(&self) -> &ScrollOptions { &self.options }

    pub fn source(&self) -> &S { &self.source }

    /// Fetch the next page unless a fetch is running or the source is exhausted.
    ///
    /// Page 0 replaces the list, later pages are appended. A failure is
    /// kept as [`error`](Self::error) and leaves the cursor where it was,
    /// so calling this again retries the same page.
    ///
    /// Returns `true` if a fetch was issued.
    pub async fn load_more(&self) -> bool {
        let (page, generation) = {
            let mut state = self.state();
            if state.loading || !state.has_more {
                return false;
            }
            state.loading = true;
            state.error = None;
            (state.page, state.generation)
        };

        let limit = self.options.limit;
        debug!(page, limit, "loading page");

        let mut guard = LoadingGuard {
            state: &self.state,
            generation,
            armed: true,
        };
        let result = self.source.fetch_page(page, limit).await;
        guard.armed = false;

        let mut state = self.state();
        if state.generation != generation {
            debug!(page, "discarding page fetched before reset");
            return true;
        }
        state.loading = false;

        match result {
            Ok(Page { data, has_more }) => {
                debug!(page, received = data.len(), has_more, "page loaded");
                if page == 0 {
                    state.items = data;
                } else {
                    state.items.extend(data);
                }
                state.page = page.saturating_add(1);
                state.has_more = has_more;
            }
            Err(err) => {
                warn!(page, error = %err, "page load failed");
                state.error = Some(err.to_string());
            }
        }
        true
    }

    /// Sentinel observer callback: load the next page when the sentinel is
    /// visible and nothing prevents it.
    ///
    /// A captured error suspends automatic loading until [`reset`](Self::reset)
    /// or an explicit [`load_more`](Self::load_more).
    pub async fn on_visibility(&self, sentinel: Sentinel, viewport: Viewport) -> bool {
        if !self.options.intersects(sentinel, viewport) {
            return false;
        }
        {
            let state = self.state();
            if state.loading || !state.has_more || state.error.is_some() {
                return false;
            }
        }
        self.load_more().await
    }

    /// Feed geometry events to [`on_visibility`](Self::on_visibility) until the
    /// sender side closes.
    pub async fn observe(&self, mut events: mpsc::Receiver<ScrollEvent>) {
        while let Some(event) = events.recv().await {
            self.on_visibility(event.sentinel, event.viewport).await;
        }
    }

    /// Return to the empty first-page state.
    pub fn reset(&self) {
        let mut state = self.state();
        let generation = state.generation.wrapping_add(1);
        *state = State::new(generation);
    }

    pub fn is_loading(&self) -> bool { self.state().loading }

    pub fn has_more(&self) -> bool { self.state().has_more }

    pub fn error(&self) -> Option<String> { self.state().error.clone() }

    pub fn page(&self) -> u32 { self.state().page }

    pub fn len(&self) -> usize { self.state().items.len() }

    pub fn is_empty(&self) -> bool { self.state().items.is_empty() }

    /// Borrow the accumulated items for the duration of `f`.
    pub fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R { f(&self.state().items) }

    pub fn items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.state().items.clone()
    }

    pub fn snapshot(&self) -> ScrollSnapshot<T>
    where
        T: Clone,
    {
        let state = self.state();
        ScrollSnapshot {
            items:    state.items.clone(),
            loading:  state.loading,
            has_more: state.has_more,
            error:    state.error.clone(),
            page:     state.page,
        }
    }

    fn state(&self) -> MutexGuard<'_, State<T>> { self.state.lock().unwrap_or_else(PoisonError::into_inner) }
}

/// Clears `loading` if a fetch future is dropped before it resolves.
struct LoadingGuard<'a, T> {
    state:      &'a Mutex<State<T>>,
    generation: u64,
    armed:      bool,
}

impl<T> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.generation == self.generation {
            state.loading = false;
        }
    }
}
