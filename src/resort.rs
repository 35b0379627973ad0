//! The resort pass: dedupe, re-query, sort, reindex one window.

use log::{debug, warn};

use crate::host::{self, HostError};
use crate::operations::{movable_tabs, plan_dedupe, plan_moves, slot_range, sort_by_domain};
use crate::tab_data::TabInfo;

/// What one pass did, with best-effort failures counted rather than raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub movable: usize,
    pub duplicates_closed: usize,
    pub moved: usize,
    pub close_failures: usize,
    pub move_failures: usize,
}

/// Deduplicate and reorder the movable tabs of `window_id`.
///
/// Pinned and essential tabs are never touched; movable tabs end up inside
/// the index range they started in, grouped by registrable domain. The pass
/// is idempotent: a settled window produces zero move calls. Individual
/// move/close failures are logged and counted; only enumeration failures
/// abort, and the next triggering event retries.
pub async fn resort_window(window_id: i32) -> Result<PassSummary, HostError> {
    let mut summary = PassSummary::default();

    let movable = movable_tabs(host::window_tabs(window_id).await?);
    summary.movable = movable.len();
    if movable.len() <= 1 {
        return Ok(summary);
    }

    // The only slots this pass is allowed to write.
    let (min_index, max_index) = slot_range(&movable);

    for tab_id in plan_dedupe(&movable) {
        match host::close_tab(tab_id).await {
            Ok(()) => summary.duplicates_closed += 1,
            Err(err) => {
                warn!("closing duplicate tab {tab_id}: {err}");
                summary.close_failures += 1;
            }
        }
    }

    // Closing tabs mutated the live list (and the user may have too), so
    // take a fresh snapshot restricted to the recorded slot range.
    let fresh: Vec<TabInfo> = host::window_tabs(window_id)
        .await?
        .into_iter()
        .filter(|t| !t.is_protected() && t.index >= min_index && t.index <= max_index)
        .collect();
    if fresh.len() <= 1 {
        debug!("window {window_id}: {summary:?}");
        return Ok(summary);
    }

    // Moves run in sorted order so every target index is valid when its
    // move executes.
    for mv in plan_moves(&sort_by_domain(fresh), min_index) {
        match host::move_tab(mv.tab_id, mv.index).await {
            Ok(()) => summary.moved += 1,
            Err(err) => {
                warn!("moving tab {} to index {}: {err}", mv.tab_id, mv.index);
                summary.move_failures += 1;
            }
        }
    }

    debug!("window {window_id}: {summary:?}");
    Ok(summary)
}
