//! Cross-view notification bridge for order statistics.
//!
//! One instance is created at app start and handed to consumers through
//! Leptos context. The snapshot lives in three places kept in sync by
//! `publish`: the reactive signal (same document), `localStorage` (survives
//! reload) and a window `CustomEvent` (other independently mounted views).
//! Last write wins; there is no delivery guarantee beyond the stored copy.

use contracts::shared::order_stats::OrderStats;
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent, CustomEventInit};

const STATS_STORAGE_KEY: &str = "scrapdz_order_stats";
const STATS_EVENT_NAME: &str = "scrapdz:order-stats";

#[derive(Clone, Copy)]
pub struct OrderStatsBridge {
    snapshot: RwSignal<OrderStats>,
}

impl OrderStatsBridge {
    /// Read the last persisted snapshot first (so consumers never start
    /// blank), then attach the live listener.
    pub fn new() -> Self {
        let bridge = Self {
            snapshot: RwSignal::new(load_snapshot()),
        };
        bridge.attach_listener();
        bridge
    }

    /// Last-known counts as a read-only signal; updates on every publish,
    /// including publishes from other views in the same document.
    pub fn snapshot(&self) -> ReadSignal<OrderStats> {
        self.snapshot.read_only()
    }

    /// Persist the snapshot, update local subscribers and broadcast to the
    /// rest of the document. Fire-and-forget.
    pub fn publish(&self, stats: OrderStats) {
        save_snapshot(&stats);
        self.snapshot.set(stats.clone());
        dispatch_event(&stats);
    }

    fn attach_listener(&self) {
        let snapshot = self.snapshot;
        let Some(window) = window() else {
            return;
        };
        let handler = Closure::wrap(Box::new(move |event: CustomEvent| {
            // An undecodable payload degrades to the zeroed default rather
            // than leaving a stale value on screen.
            let stats = serde_wasm_bindgen::from_value::<OrderStats>(event.detail())
                .unwrap_or_default();
            snapshot.set(stats);
        }) as Box<dyn FnMut(CustomEvent)>);
        let _ = window
            .add_event_listener_with_callback(STATS_EVENT_NAME, handler.as_ref().unchecked_ref());
        handler.forget();
    }
}

impl Default for OrderStatsBridge {
    fn default() -> Self {
        Self::new()
    }
}

fn storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Missing or malformed snapshots fall back to the zeroed default.
fn load_snapshot() -> OrderStats {
    storage()
        .and_then(|s| s.get_item(STATS_STORAGE_KEY).ok().flatten())
        .map(|raw| OrderStats::from_json(&raw))
        .unwrap_or_default()
}

fn save_snapshot(stats: &OrderStats) {
    if let Some(s) = storage() {
        let _ = s.set_item(STATS_STORAGE_KEY, &stats.to_json());
    }
}

fn dispatch_event(stats: &OrderStats) {
    let Some(window) = window() else {
        return;
    };
    let Ok(detail) = serde_wasm_bindgen::to_value(stats) else {
        return;
    };
    let init = CustomEventInit::new();
    init.set_detail(&detail);
    if let Ok(event) = CustomEvent::new_with_event_init_dict(STATS_EVENT_NAME, &init) {
        let _ = window.dispatch_event(&event);
    }
}
