//! Tab snapshots as reported by the host bridge.

use serde::Deserialize;
use serde_json::Value;

/// One browser tab. Only the attributes the sorter consumes are decoded;
/// anything else the host attaches is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TabInfo {
    pub id: i32,
    #[serde(rename = "windowId")]
    pub window_id: i32,
    pub index: i32,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub url: Option<String>,
    /// Navigation target while the tab is still loading.
    #[serde(default, rename = "pendingUrl")]
    pub pending_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    // The "essential" marking has shipped under several property names and
    // is not a stable public contract; every known spelling is decoded.
    #[serde(default, rename = "isEssential")]
    pub essential: bool,
    #[serde(default, rename = "isZenEssential")]
    pub is_zen_essential: bool,
    #[serde(default, rename = "zenEssential")]
    pub zen_essential: bool,
    #[serde(default, rename = "extData")]
    pub ext_data: Option<Value>,
}

impl TabInfo {
    /// The URL to key on, falling back to the pending navigation target
    /// while a page is loading.
    pub fn effective_url(&self) -> &str {
        self.url
            .as_deref()
            .or(self.pending_url.as_deref())
            .unwrap_or("")
    }

    /// Best-effort probe for the host's "essential" designation across the
    /// known flag spellings and the nested `extData` metadata.
    pub fn is_essential(&self) -> bool {
        if self.essential || self.is_zen_essential || self.zen_essential {
            return true;
        }
        match &self.ext_data {
            Some(data) => {
                data.get("isEssential").and_then(Value::as_bool) == Some(true)
                    || data.get("category").and_then(Value::as_str) == Some("essential")
            }
            None => false,
        }
    }

    /// Protected tabs are never closed as duplicates or reordered.
    pub fn is_protected(&self) -> bool {
        self.pinned || self.is_essential()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> TabInfo {
        serde_json::from_value(value).expect("tab payload should decode")
    }

    #[test]
    fn test_decode_minimal_payload() {
        let tab = decode(json!({
            "id": 4,
            "windowId": 1,
            "index": 2,
            "url": "https://example.com/",
            "title": "Example"
        }));

        assert_eq!(tab.id, 4);
        assert_eq!(tab.window_id, 1);
        assert_eq!(tab.index, 2);
        assert!(!tab.pinned);
        assert!(!tab.is_protected());
    }

    #[test]
    fn test_effective_url_prefers_committed_url() {
        let loading = decode(json!({
            "id": 1,
            "windowId": 1,
            "index": 0,
            "pendingUrl": "https://example.com/next"
        }));
        let committed = decode(json!({
            "id": 2,
            "windowId": 1,
            "index": 1,
            "url": "https://example.com/here",
            "pendingUrl": "https://example.com/next"
        }));
        let blank = decode(json!({ "id": 3, "windowId": 1, "index": 2 }));

        assert_eq!(loading.effective_url(), "https://example.com/next");
        assert_eq!(committed.effective_url(), "https://example.com/here");
        assert_eq!(blank.effective_url(), "");
    }

    #[test]
    fn test_essential_flag_spellings() {
        for field in ["isEssential", "isZenEssential", "zenEssential"] {
            let tab = decode(json!({
                "id": 1,
                "windowId": 1,
                "index": 0,
                field: true
            }));
            assert!(tab.is_essential(), "flag {field} should mark essential");
            assert!(tab.is_protected());
        }
    }

    #[test]
    fn test_essential_ext_data_markers() {
        let flagged = decode(json!({
            "id": 1,
            "windowId": 1,
            "index": 0,
            "extData": { "isEssential": true }
        }));
        let categorized = decode(json!({
            "id": 2,
            "windowId": 1,
            "index": 1,
            "extData": { "category": "essential" }
        }));
        let unrelated = decode(json!({
            "id": 3,
            "windowId": 1,
            "index": 2,
            "extData": { "category": "workspace", "isEssential": false }
        }));

        assert!(flagged.is_essential());
        assert!(categorized.is_essential());
        assert!(!unrelated.is_essential());
    }

    #[test]
    fn test_pinned_is_protected_but_not_essential() {
        let tab = decode(json!({
            "id": 1,
            "windowId": 1,
            "index": 0,
            "pinned": true
        }));

        assert!(tab.is_protected());
        assert!(!tab.is_essential());
    }
}
