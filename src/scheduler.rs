//! Per-window debounce of resort passes.
//!
//! Every triggering event (re)arms a timer keyed by window id; only the
//! last arm inside the quiet period fires. Cancellation covers pending
//! timers only; a pass already in flight runs to completion, and that
//! overlap is accepted behavior.

use std::cell::RefCell;
use std::collections::HashMap;

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::resort::resort_window;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = setTimeout)]
    fn set_timeout(handler: &Closure<dyn FnMut()>, delay_ms: i32) -> i32;

    #[wasm_bindgen(js_name = clearTimeout)]
    fn clear_timeout(token: i32);
}

struct PendingSort {
    token: i32,
    // Keeps the JS callback alive until it fires or is cancelled.
    _callback: Closure<dyn FnMut()>,
}

/// Keyed registry of pending timers: created empty at startup, one entry
/// per window while a sort is pending, torn down by [`cancel_all`].
pub struct SortScheduler {
    timers: RefCell<HashMap<i32, PendingSort>>,
}

impl SortScheduler {
    fn new() -> Self {
        Self {
            timers: RefCell::new(HashMap::new()),
        }
    }

    fn schedule(&self, window_id: i32, delay_ms: i32) {
        let mut timers = self.timers.borrow_mut();
        if let Some(pending) = timers.remove(&window_id) {
            clear_timeout(pending.token);
        }

        let callback = Closure::wrap(Box::new(move || {
            SCHEDULER.with(|s| {
                s.timers.borrow_mut().remove(&window_id);
            });
            spawn_local(async move {
                if let Err(err) = resort_window(window_id).await {
                    debug!("resort of window {window_id} aborted: {err}");
                }
            });
        }) as Box<dyn FnMut()>);

        let token = set_timeout(&callback, delay_ms);
        timers.insert(
            window_id,
            PendingSort {
                token,
                _callback: callback,
            },
        );
    }

    fn cancel_all(&self) {
        let drained: Vec<PendingSort> = self
            .timers
            .borrow_mut()
            .drain()
            .map(|(_, pending)| pending)
            .collect();
        for pending in &drained {
            clear_timeout(pending.token);
        }
        if !drained.is_empty() {
            debug!("dropped {} pending sorts", drained.len());
        }
    }

    fn pending(&self) -> usize {
        self.timers.borrow().len()
    }
}

// The WASM runtime is single-threaded; the registry lives for the lifetime
// of the extension worker.
thread_local! {
    static SCHEDULER: SortScheduler = SortScheduler::new();
}

/// Rearm the debounce timer for `window_id`, cancelling any pending one.
pub fn schedule_sort(window_id: i32, delay_ms: i32) {
    SCHEDULER.with(|s| s.schedule(window_id, delay_ms));
}

/// Tear down every pending timer; part of extension shutdown.
pub fn cancel_all() {
    SCHEDULER.with(|s| s.cancel_all());
}

/// Number of windows with a sort pending.
pub fn pending_sorts() -> usize {
    SCHEDULER.with(|s| s.pending())
}
