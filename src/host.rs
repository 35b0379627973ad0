//! Typed wrappers over the JS host bridge.
//!
//! `host.js` is the only place that talks to the `browser.*`/`chrome.*`
//! APIs; everything crosses this seam as plain data.

use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::tab_data::TabInfo;

#[wasm_bindgen(module = "/host.js")]
extern "C" {
    #[wasm_bindgen(catch, js_name = queryWindowTabs)]
    async fn query_window_tabs(window_id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = currentWindowId)]
    async fn query_current_window_id() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = moveTab)]
    async fn move_tab_raw(tab_id: i32, index: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = removeTab)]
    async fn remove_tab_raw(tab_id: i32) -> Result<(), JsValue>;
}

/// Failure kinds for host tab operations. `Move` and `Close` are consumed
/// per tab and counted by the caller; `Query` and `Decode` abort the
/// running pass.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("tab query failed: {0}")]
    Query(String),
    #[error("host payload decode failed: {0}")]
    Decode(String),
    #[error("tab move failed: {0}")]
    Move(String),
    #[error("tab close failed: {0}")]
    Close(String),
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// All tabs of one window. Callers rely on position order, so it is
/// enforced here rather than assumed of the bridge.
pub async fn window_tabs(window_id: i32) -> Result<Vec<TabInfo>, HostError> {
    let raw = query_window_tabs(window_id)
        .await
        .map_err(|e| HostError::Query(describe(e)))?;
    let mut tabs: Vec<TabInfo> =
        serde_wasm_bindgen::from_value(raw).map_err(|e| HostError::Decode(e.to_string()))?;
    tabs.sort_by_key(|t| t.index);
    Ok(tabs)
}

/// Id of the focused normal window.
pub async fn current_window_id() -> Result<i32, HostError> {
    let raw = query_current_window_id()
        .await
        .map_err(|e| HostError::Query(describe(e)))?;
    serde_wasm_bindgen::from_value(raw).map_err(|e| HostError::Decode(e.to_string()))
}

pub async fn move_tab(tab_id: i32, index: i32) -> Result<(), HostError> {
    move_tab_raw(tab_id, index)
        .await
        .map_err(|e| HostError::Move(describe(e)))
}

pub async fn close_tab(tab_id: i32) -> Result<(), HostError> {
    remove_tab_raw(tab_id)
        .await
        .map_err(|e| HostError::Close(describe(e)))
}
