//! Incremental page loading driven by sentinel visibility.
//!
//! An [`InfiniteScroll`] accumulates the pages of a [`PageSource`] into one
//! list. Pages are requested either directly with
//! [`load_more`](InfiniteScroll::load_more) or whenever a sentinel placed at
//! the end of the rendered list comes within
//! [`root_margin`](ScrollOptions::root_margin) of the viewport.
//!
//! # Example
//!
//! ```
//! use hearth_scroll::{InfiniteScroll, Page, ScrollOptions, from_fn};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let source = from_fn(|page: u32, limit: u32| async move {
//!     let start = page * limit;
//!     let data: Vec<u32> = (start..start + limit).collect();
//!     Ok::<_, std::convert::Infallible>(Page { data, has_more: page < 2 })
//! });
//! let scroll = InfiniteScroll::new(source, ScrollOptions::default().limit(4));
//!
//! while scroll.has_more() {
//!     scroll.load_more().await;
//! }
//! assert_eq!(scroll.items().len(), 12);
//! # });
//! ```

pub use self::options::{ScrollEvent, ScrollOptions, Sentinel, Viewport};
pub use self::page::{FnSource, Page, PageSource, from_fn};
pub use self::scroll::{InfiniteScroll, ScrollSnapshot};

mod options;
mod page;
mod scroll;
