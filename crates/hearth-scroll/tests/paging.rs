use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use hearth_scroll::{InfiniteScroll, Page, PageSource, ScrollEvent, ScrollOptions, Sentinel, Viewport};
use tokio::sync::{Semaphore, mpsc};

/// Listings source that blocks each fetch until a permit is released.
struct GatedListings {
    gate:  Arc<Semaphore>,
    calls: AtomicU32,
    pages: u32,
}

impl GatedListings {
    fn new(pages: u32) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let source = Self {
            gate: Arc::clone(&gate),
            calls: AtomicU32::new(0),
            pages,
        };
        (source, gate)
    }

    fn calls(&self) -> u32 { self.calls.load(Ordering::SeqCst) }
}

impl PageSource<String> for GatedListings {
    type Error = String;

    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Page<String>, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let permit = self.gate.acquire().await.map_err(|e| e.to_string())?;
        permit.forget();
        Ok(Page {
            data:     (0..limit).map(|i| format!("listing-{page}-{i}")).collect(),
            has_more: page + 1 < self.pages,
        })
    }
}

async fn wait_for_calls(scroll: &InfiniteScroll<String, GatedListings>, calls: u32) {
    while scroll.source().calls() < calls {
        tokio::task::yield_now().await;
    }
}

fn visible() -> ScrollEvent {
    ScrollEvent {
        sentinel: Sentinel {
            top:    780.0,
            height: 10.0,
        },
        viewport: Viewport {
            top:    0.0,
            height: 800.0,
        },
    }
}

#[tokio::test]
async fn load_more_while_loading_does_not_fetch() {
    let (source, gate) = GatedListings::new(3);
    let scroll = Arc::new(InfiniteScroll::new(source, ScrollOptions::default().limit(2)));

    let first = tokio::spawn({
        let scroll = Arc::clone(&scroll);
        async move { scroll.load_more().await }
    });
    wait_for_calls(&scroll, 1).await;

    assert!(scroll.is_loading());
    assert!(!scroll.load_more().await);
    let event = visible();
    assert!(!scroll.on_visibility(event.sentinel, event.viewport).await);
    assert_eq!(scroll.source().calls(), 1);

    gate.add_permits(1);
    assert!(first.await.unwrap());
    assert_eq!(scroll.items(), vec!["listing-0-0", "listing-0-1"]);
    assert!(!scroll.is_loading());
}

#[tokio::test]
async fn reset_discards_a_fetch_in_flight() {
    let (source, gate) = GatedListings::new(3);
    let scroll = Arc::new(InfiniteScroll::new(source, ScrollOptions::default().limit(1)));

    gate.add_permits(2);
    scroll.load_more().await;
    scroll.load_more().await;
    assert_eq!(scroll.len(), 2);

    let stale = tokio::spawn({
        let scroll = Arc::clone(&scroll);
        async move { scroll.load_more().await }
    });
    wait_for_calls(&scroll, 3).await;

    scroll.reset();
    assert!(scroll.is_empty());
    assert!(!scroll.is_loading());

    gate.add_permits(1);
    stale.await.unwrap();
    assert!(scroll.is_empty());
    assert_eq!(scroll.page(), 0);

    gate.add_permits(1);
    scroll.load_more().await;
    assert_eq!(scroll.items(), vec!["listing-0-0"]);
}

#[tokio::test]
async fn observer_loads_until_exhausted() {
    let (source, gate) = GatedListings::new(3);
    gate.add_permits(10);
    let scroll = InfiniteScroll::new(source, ScrollOptions::default().limit(4));
    let (events, rx) = mpsc::channel(8);

    for _ in 0..5 {
        events.send(visible()).await.unwrap();
    }
    drop(events);
    scroll.observe(rx).await;

    assert_eq!(scroll.len(), 12);
    assert!(!scroll.has_more());
    assert_eq!(scroll.source().calls(), 3);
}

#[tokio::test]
async fn observer_ignores_hidden_sentinel() {
    let (source, gate) = GatedListings::new(3);
    gate.add_permits(10);
    let scroll = InfiniteScroll::new(source, ScrollOptions::default());
    let (events, rx) = mpsc::channel(2);

    events
        .send(ScrollEvent {
            sentinel: Sentinel {
                top:    5_000.0,
                height: 10.0,
            },
            viewport: Viewport {
                top:    0.0,
                height: 800.0,
            },
        })
        .await
        .unwrap();
    drop(events);
    scroll.observe(rx).await;

    assert_eq!(scroll.source().calls(), 0);
}
