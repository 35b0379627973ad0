//! Pure planning for a resort pass: which tabs move where, which close.
//!
//! Nothing here touches the host; the resort pass feeds these plans to the
//! bridge and re-queries between the destructive steps.

use std::collections::HashSet;

use crate::canonical::canonical_url;
use crate::domain::sort_key_domain;
use crate::tab_data::TabInfo;

/// One tab relocation: `tab_id` goes to position `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabMove {
    pub tab_id: i32,
    pub index: i32,
}

/// Keep only the tabs this system is allowed to reorder.
pub fn movable_tabs(tabs: Vec<TabInfo>) -> Vec<TabInfo> {
    tabs.into_iter().filter(|t| !t.is_protected()).collect()
}

/// The index range the resorter may touch, spanning the movable tabs'
/// current positions. Callers must pass a non-empty slice.
pub fn slot_range(tabs: &[TabInfo]) -> (i32, i32) {
    let min = tabs.iter().map(|t| t.index).min().unwrap_or(0);
    let max = tabs.iter().map(|t| t.index).max().unwrap_or(0);
    (min, max)
}

/// Ids of duplicate tabs to close. The first tab presenting a canonical URL
/// is kept; every later one is a duplicate. Tabs with no URL at all are
/// never dedupe candidates.
pub fn plan_dedupe(tabs: &[TabInfo]) -> Vec<i32> {
    let mut seen = HashSet::new();
    let mut close = Vec::new();
    for tab in tabs {
        let key = canonical_url(tab.effective_url());
        if key.is_empty() {
            continue;
        }
        if !seen.insert(key) {
            close.push(tab.id);
        }
    }
    close
}

fn title_key(tab: &TabInfo) -> String {
    tab.title.as_deref().unwrap_or("").trim().to_lowercase()
}

/// Stable sort by (domain key, title key), case-insensitive ascending.
/// Stability keeps equal-keyed tabs in their current relative order.
pub fn sort_by_domain(mut tabs: Vec<TabInfo>) -> Vec<TabInfo> {
    tabs.sort_by_cached_key(|t| (sort_key_domain(t.effective_url()), title_key(t)));
    tabs
}

/// Assign consecutive target positions starting at `start`, in the given
/// order. Tabs already sitting at their target yield no move, so a pass
/// over an already-sorted window is free of side effects.
pub fn plan_moves(sorted: &[TabInfo], start: i32) -> Vec<TabMove> {
    sorted
        .iter()
        .zip(start..)
        .filter(|(tab, target)| tab.index != *target)
        .map(|(tab, target)| TabMove {
            tab_id: tab.id,
            index: target,
        })
        .collect()
}
