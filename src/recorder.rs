/// Background counter: keeps the badge and the daily history up to date

use crate::error::ExtensionError;
use crate::history::{record_count, today_key};
use crate::storage::{load_history, save_history};
use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Badge background colour
pub const BADGE_COLOR: &str = "green";

// Import JS bridge functions
#[wasm_bindgen(module = "/background.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryTabCount() -> Result<JsValue, JsValue>;

    fn setBadge(text: &str, color: &str);

    fn onTabsChanged(listener: &js_sys::Function);
}

/// Record the current tab count once, then again on every tab created/removed event
pub fn start() {
    let listener = Closure::wrap(Box::new(|| spawn_local(record())) as Box<dyn Fn()>);
    onTabsChanged(listener.as_ref().unchecked_ref());
    // Lives as long as the background context
    listener.forget();

    spawn_local(record());
}

async fn record() {
    if let Err(e) = update_count().await {
        error!("Failed to record tab count: {}", e);
    }
}

/// Show the live tab count on the badge and store it under today's date
pub async fn update_count() -> crate::error::Result<u32> {
    let count = tab_count().await?;
    setBadge(&count.to_string(), BADGE_COLOR);

    let today = today_key();
    let history = record_count(load_history().await?, &today, count);
    save_history(&history).await?;

    info!("Recorded {} tabs for {}", count, today);
    Ok(count)
}

async fn tab_count() -> crate::error::Result<u32> {
    let count_js = queryTabCount()
        .await
        .map_err(|e| ExtensionError::bridge("tabs.query", e))?;

    Ok(serde_wasm_bindgen::from_value(count_js)?)
}
