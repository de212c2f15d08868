/// Reusable UI components

use crate::elapsed::{format_elapsed, seconds_since};
use crate::tab_data::{parse_tab_id, TabSnapshot};
use crate::trend::{TrendChart, TrendLayout};
use log::debug;
use wasm_bindgen::JsValue;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabRowProps {
    pub tab: TabSnapshot,
    /// Render time in milliseconds since the epoch
    pub now_ms: f64,
    pub on_activate: Callback<i32>,
}

#[function_component(TabRow)]
pub fn tab_row(props: &TabRowProps) -> Html {
    let row = use_node_ref();
    let tab = &props.tab;

    let onclick = {
        let row = row.clone();
        let on_activate = props.on_activate.clone();
        Callback::from(move |_: MouseEvent| {
            let raw = row
                .cast::<Element>()
                .and_then(|el| el.get_attribute("data-tab-id"));

            activate_row(raw.as_deref(), &on_activate);
        })
    };

    let (elapsed, accessed_title) = match tab.last_accessed {
        Some(ms) => {
            let date = js_sys::Date::new(&JsValue::from_f64(ms));
            (
                format_elapsed(seconds_since(props.now_ms, ms)),
                format!("Last accessed on {}", String::from(date.to_string())),
            )
        }
        None => (String::new(), String::new()),
    };

    html! {
        <div ref={row} class="panel-list-item" data-tab-id={tab.id.to_string()} {onclick}>
            <div class="text" title={tab.title.clone()}>
                if let Some(icon) = tab.fav_icon_url.clone() {
                    <img src={icon} />
                }
                {&tab.title}
            </div>
            <div class="text-shortcut" title={accessed_title}>
                {elapsed}
            </div>
        </div>
    }
}

/// Emit the tab id stored on a clicked row. Missing or non-numeric ids do nothing.
fn activate_row(raw: Option<&str>, on_activate: &Callback<i32>) -> Option<i32> {
    match raw.and_then(parse_tab_id) {
        Some(id) => {
            on_activate.emit(id);
            Some(id)
        }
        None => {
            debug!("Ignoring click on row with tab id {:?}", raw);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DayRowProps {
    pub date: String,
    pub count: u32,
}

#[function_component(DayRow)]
pub fn day_row(props: &DayRowProps) -> Html {
    html! {
        <div class="panel-list-item">
            <div class="text">{&props.date}</div>
            <div class="text-shortcut">{props.count}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TrendGraphProps {
    pub chart: TrendChart,
    #[prop_or_default]
    pub layout: TrendLayout,
}

/// Point markers with hover labels, joined by a single polyline
#[function_component(TrendGraph)]
pub fn trend_graph(props: &TrendGraphProps) -> Html {
    let layout = props.layout;

    html! {
        <svg
            class="trend"
            width={layout.width.to_string()}
            height={layout.height.to_string()}
            viewBox={format!("0 0 {} {}", layout.width, layout.height)}
        >
            <polyline id="trend-line" fill="none" stroke="#0074d9" points={props.chart.polyline()} />
            <g id="trend-points">
                {for props.chart.points.iter().map(|point| html! {
                    <circle
                        r="2"
                        cx={point.x.to_string()}
                        cy={point.y.to_string()}
                        fill="#0074d9"
                        stroke="#000"
                    >
                        <title>{&point.label}</title>
                    </circle>
                })}
            </g>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_callback() -> (Callback<i32>, Rc<RefCell<Vec<i32>>>) {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = emitted.clone();
        (Callback::from(move |id: i32| sink.borrow_mut().push(id)), emitted)
    }

    #[test]
    fn test_numeric_row_id_activates_tab() {
        let (callback, emitted) = recording_callback();

        assert_eq!(activate_row(Some("17"), &callback), Some(17));
        assert_eq!(*emitted.borrow(), vec![17]);
    }

    #[test]
    fn test_non_numeric_row_id_does_nothing() {
        let (callback, emitted) = recording_callback();

        assert_eq!(activate_row(Some("NaN"), &callback), None);
        assert_eq!(activate_row(Some(""), &callback), None);
        assert_eq!(activate_row(None, &callback), None);
        assert!(emitted.borrow().is_empty());
    }
}
