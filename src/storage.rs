/// Persistent storage of the daily history in chrome.storage.local

use crate::error::{self, ExtensionError};
use crate::history::DailyHistory;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Storage key holding the date → count map
pub const DATES_KEY: &str = "dates";

#[wasm_bindgen(module = "/storage.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;
}

/// Read the stored history; an absent value is an empty history
pub async fn load_history() -> error::Result<DailyHistory> {
    let stored = getStorage(DATES_KEY)
        .await
        .map_err(|e| ExtensionError::bridge("storage.local.get", e))?;

    history_from_js(stored)
}

pub async fn save_history(history: &DailyHistory) -> error::Result<()> {
    let value = history_to_js(history)?;

    setStorage(DATES_KEY, value)
        .await
        .map_err(|e| ExtensionError::bridge("storage.local.set", e))
}

pub fn history_from_js(value: JsValue) -> error::Result<DailyHistory> {
    if value.is_null() || value.is_undefined() {
        Ok(DailyHistory::new())
    } else {
        Ok(serde_wasm_bindgen::from_value(value)?)
    }
}

/// Convert to a plain JS object so storage keeps it as `{date: count}`
pub fn history_to_js(history: &DailyHistory) -> error::Result<JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(history.serialize(&serializer)?)
}
