use serde::{Deserialize, Serialize};

/// Page size and sentinel trigger geometry.
///
/// # Examples
///
/// ```
/// use hearth_scroll::{ScrollOptions, Sentinel, Viewport};
///
/// let options = ScrollOptions::default().root_margin(200.0);
/// let viewport = Viewport { top: 0.0, height: 800.0 };
///
/// // 150px below the fold, inside the 200px margin
/// assert!(options.intersects(Sentinel { top: 950.0, height: 10.0 }, viewport));
/// assert!(!options.intersects(Sentinel { top: 1_200.0, height: 10.0 }, viewport));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollOptions {
    /// Items requested per page.
    ///
    /// Default: 12
    pub limit: u32,

    /// Pixels by which the viewport is grown on both edges before testing
    /// the sentinel, so loading starts ahead of the user reaching the end.
    ///
    /// Default: 100.0
    pub root_margin: f64,

    /// Fraction of the sentinel that must be inside the grown viewport.
    ///
    /// Default: 0.1
    pub threshold: f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            limit:       12,
            root_margin: 100.0,
            threshold:   0.1,
        }
    }
}

impl ScrollOptions {
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn root_margin(mut self, root_margin: f64) -> Self {
        self.root_margin = root_margin;
        self
    }

    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns `true` if the sentinel counts as visible within `viewport`.
    pub fn intersects(&self, sentinel: Sentinel, viewport: Viewport) -> bool {
        let root_start = viewport.top - self.root_margin;
        let root_end = viewport.top + viewport.height + self.root_margin;

        if sentinel.height <= 0.0 {
            return (root_start..=root_end).contains(&sentinel.top);
        }

        let overlap = (sentinel.bottom().min(root_end) - sentinel.top.max(root_start)).max(0.0);
        overlap > 0.0 && overlap / sentinel.height >= self.threshold
    }
}

/// The scrolling root, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub top:    f64,
    pub height: f64,
}

/// The marker element after the last rendered item, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sentinel {
    pub top:    f64,
    pub height: f64,
}

impl Sentinel {
    pub fn bottom(&self) -> f64 { self.top + self.height }
}

/// One geometry observation, as delivered to [`InfiniteScroll::observe`](crate::InfiniteScroll::observe).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollEvent {
    pub sentinel: Sentinel,
    pub viewport: Viewport,
}
