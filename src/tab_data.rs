/// Data structures for open tabs
use serde::{Deserialize, Serialize};

/// Information about an open browser tab at query time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TabSnapshot {
    pub id: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fav_icon_url: Option<String>,
    /// Milliseconds since the epoch
    #[serde(default)]
    pub last_accessed: Option<f64>,
}

impl TabSnapshot {
    pub fn new(id: i32, title: String, fav_icon_url: Option<String>, last_accessed: Option<f64>) -> TabSnapshot {
        TabSnapshot {
            id,
            title,
            fav_icon_url,
            last_accessed,
        }
    }
}

/// Parse a tab identifier read back from a rendered row.
/// Anything that is not an integer yields `None`.
pub fn parse_tab_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}
