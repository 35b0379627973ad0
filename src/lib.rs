//! Tab Shepherd - keeps each window's tabs grouped by domain.
//!
//! The background worker (`background.js`) forwards host events into the
//! exported hooks below; all decisions are made in Rust and executed
//! through the bridge in `host.js`. Pinned and essential tabs are never
//! touched.

mod canonical;
mod domain;
mod host;
mod operations;
mod resort;
mod scheduler;
mod tab_data;

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::scheduler::schedule_sort;

// Debounce delays per trigger, tuned so event bursts (session restore,
// redirect chains) collapse into a single pass.
const CREATED_DELAY_MS: i32 = 300;
const UPDATED_DELAY_MS: i32 = 200;
const ACTIVATED_DELAY_MS: i32 = 400;
const FOCUS_DELAY_MS: i32 = 400;
const STARTUP_DELAY_MS: i32 = 200;

const SORT_COMMAND: &str = "sort-tabs";

// Set up panic hook and logging for the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the grouping key for JavaScript access
#[wasm_bindgen]
pub fn sort_key(url: &str) -> String {
    domain::sort_key_domain(url)
}

#[wasm_bindgen]
pub fn on_tab_created(window_id: i32) {
    schedule_sort(window_id, CREATED_DELAY_MS);
}

/// Only URL changes and completed loads are worth a pass; favicon and
/// title churn is ignored.
#[wasm_bindgen]
pub fn on_tab_updated(window_id: i32, url_changed: bool, load_complete: bool) {
    if url_changed || load_complete {
        schedule_sort(window_id, UPDATED_DELAY_MS);
    }
}

#[wasm_bindgen]
pub fn on_tab_activated(window_id: i32) {
    schedule_sort(window_id, ACTIVATED_DELAY_MS);
}

/// The host reports focus loss as a negative window id.
#[wasm_bindgen]
pub fn on_window_focused(window_id: i32) {
    if window_id >= 0 {
        schedule_sort(window_id, FOCUS_DELAY_MS);
    }
}

/// Keyboard command dispatch; the sort command runs immediately against
/// the focused window.
#[wasm_bindgen]
pub fn on_command(command: &str) {
    if command == SORT_COMMAND {
        sort_current_window();
    }
}

/// Toolbar button click: immediate pass on the clicked window.
#[wasm_bindgen]
pub fn on_action_clicked(window_id: i32) {
    spawn_local(async move {
        if let Err(err) = resort::resort_window(window_id).await {
            debug!("resort of window {window_id} aborted: {err}");
        }
    });
}

/// Initial pass shortly after the extension loads.
#[wasm_bindgen]
pub fn startup() {
    spawn_local(async {
        match host::current_window_id().await {
            Ok(window_id) => schedule_sort(window_id, STARTUP_DELAY_MS),
            Err(err) => debug!("startup sort skipped: {err}"),
        }
    });
}

/// Drop all pending debounce timers; called when the worker suspends.
#[wasm_bindgen]
pub fn shutdown() {
    scheduler::cancel_all();
}

fn sort_current_window() {
    spawn_local(async {
        let window_id = match host::current_window_id().await {
            Ok(id) => id,
            Err(err) => {
                debug!("resort skipped: {err}");
                return;
            }
        };
        if let Err(err) = resort::resort_window(window_id).await {
            debug!("resort of window {window_id} aborted: {err}");
        }
    });
}
