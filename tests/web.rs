//! Browser tests, run with `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use tab_counter::history::{record_count, today_key, DailyHistory};
use tab_counter::storage::{history_from_js, history_to_js};
use tab_counter::tab_data::TabSnapshot;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn today_key_is_zero_padded() {
    let key = today_key();
    let parts: Vec<&str> = key.split('-').collect();

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].len(), 4);
    assert_eq!(parts[1].len(), 2);
    assert_eq!(parts[2].len(), 2);
    assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
}

#[wasm_bindgen_test]
fn history_is_stored_as_plain_object() {
    let history = record_count(
        record_count(DailyHistory::new(), "2024-03-05", 9),
        "2024-03-01",
        3,
    );

    let value = history_to_js(&history).unwrap();
    let json = js_sys::JSON::stringify(&value).unwrap();

    assert_eq!(String::from(json), r#"{"2024-03-05":9,"2024-03-01":3}"#);
}

#[wasm_bindgen_test]
fn missing_history_is_empty() {
    assert!(history_from_js(JsValue::UNDEFINED).unwrap().is_empty());
    assert!(history_from_js(JsValue::NULL).unwrap().is_empty());
}

#[wasm_bindgen_test]
fn stored_history_keeps_key_order() {
    let stored = js_sys::JSON::parse(r#"{"2024-03-05":9,"2024-03-01":3}"#).unwrap();
    let history = history_from_js(stored).unwrap();

    let dates: Vec<&str> = history.iter().map(|d| d.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-03-05", "2024-03-01"]);
}

#[wasm_bindgen_test]
fn tab_snapshot_from_query_result() {
    let raw = js_sys::JSON::parse(
        r#"{"id": 8, "title": "Rust", "favIconUrl": "https://www.rust-lang.org/favicon.ico", "lastAccessed": 1698508200000}"#,
    )
    .unwrap();

    let tab: TabSnapshot = serde_wasm_bindgen::from_value(raw).unwrap();

    assert_eq!(tab.id, 8);
    assert_eq!(tab.last_accessed, Some(1698508200000.0));
}
