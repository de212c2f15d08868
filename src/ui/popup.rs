/// Popup UI: live tab list and daily tab-count history

use crate::error::ExtensionError;
use crate::history::DailyHistory;
use crate::storage::load_history;
use crate::tab_data::TabSnapshot;
use crate::trend::{build_trend, TrendLayout};
use crate::ui::components::{DayRow, TabRow, TrendGraph};
use crate::view::{LoadStatus, View, ViewState};
use log::{debug, error};
use patternfly_yew::prelude::*;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getAllTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn activateTab(tab_id: i32) -> Result<(), JsValue>;
}

pub enum ViewAction {
    Show(&'static str),
    Status(View, LoadStatus),
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ViewAction::Show(name) => {
                next.activate(name);
            }
            ViewAction::Status(view, status) => next.set_status(view, status),
        }
        Rc::new(next)
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let view_state = use_reducer(ViewState::new);
    let tabs = use_state(Vec::<TabSnapshot>::new);
    let history = use_state(DailyHistory::new);

    // Show a view, fetching its data the first time only
    let open_view = {
        let view_state = view_state.clone();
        let tabs = tabs.clone();
        let history = history.clone();

        Callback::from(move |view: View| {
            view_state.dispatch(ViewAction::Show(view.name()));
            if !view_state.needs_fetch(view) {
                return;
            }

            let view_state = view_state.clone();
            let tabs = tabs.clone();
            let history = history.clone();

            view_state.dispatch(ViewAction::Status(view, LoadStatus::Loading));

            spawn_local(async move {
                let result = match view {
                    View::Tabs => get_all_tabs().await.map(|t| tabs.set(t)),
                    View::Days => load_history().await.map(|h| history.set(h)),
                };

                let status = match result {
                    Ok(()) => {
                        debug!("Loaded {} view", view.name());
                        LoadStatus::Loaded
                    }
                    Err(e) => {
                        error!("Failed to load {} view: {}", view.name(), e);
                        LoadStatus::Failed(e.to_string())
                    }
                };
                view_state.dispatch(ViewAction::Status(view, status));
            });
        })
    };

    // The popup opens on the tab list
    {
        let open_view = open_view.clone();
        use_effect_with((), move |_| {
            open_view.emit(View::Tabs);
            || ()
        });
    }

    let on_activate = Callback::from(|tab_id: i32| {
        spawn_local(async move {
            if let Err(e) = activateTab(tab_id).await {
                error!("Failed to activate tab {}: {:?}", tab_id, e);
            }
        });
    });

    let button_class = |view: View| {
        classes!(
            "panel-section-tabs-button",
            view_state.is_selected(view).then_some("selected")
        )
    };
    let content_class = |view: View| {
        classes!(
            "panel-section-list",
            view_state.is_hidden(view).then_some("hidden")
        )
    };

    let now_ms = js_sys::Date::now();
    let layout = TrendLayout::default();
    let chart = build_trend(&history, &layout);

    html! {
        <div class="panel">
            <div class="panel-section panel-section-tabs">
                <button
                    id={View::Tabs.button_id()}
                    class={button_class(View::Tabs)}
                    onclick={open_view.reform(|_: MouseEvent| View::Tabs)}
                >
                    {"Tabs "}
                    <span id="total-count">{tabs.len()}</span>
                </button>
                <div class="panel-section-tabs-separator"></div>
                <button
                    id={View::Days.button_id()}
                    class={button_class(View::Days)}
                    onclick={open_view.reform(|_: MouseEvent| View::Days)}
                >
                    {"History"}
                </button>
            </div>

            <div id={View::Tabs.content_id()} class={content_class(View::Tabs)}>
                {load_feedback(&view_state, View::Tabs)}
                {for tabs.iter().map(|tab| html! {
                    <TabRow
                        key={tab.id.to_string()}
                        tab={tab.clone()}
                        {now_ms}
                        on_activate={on_activate.clone()}
                    />
                })}
            </div>

            <div id={View::Days.content_id()} class={content_class(View::Days)}>
                {load_feedback(&view_state, View::Days)}
                <TrendGraph {chart} {layout} />
                {for history.iter().map(|day| html! {
                    <DayRow key={day.date.clone()} date={day.date.clone()} count={day.count} />
                })}
            </div>
        </div>
    }
}

// Helper functions

/// Spinner while a view's data is on its way, or the error that stopped it
fn load_feedback(state: &ViewState, view: View) -> Html {
    match state.status(view) {
        LoadStatus::Loading => html! { <Spinner /> },
        LoadStatus::Failed(message) => html! {
            <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                {message.clone()}
            </Alert>
        },
        LoadStatus::NotLoaded | LoadStatus::Loaded => html! {},
    }
}

async fn get_all_tabs() -> crate::error::Result<Vec<TabSnapshot>> {
    let tabs_js = getAllTabs()
        .await
        .map_err(|e| ExtensionError::bridge("tabs.query", e))?;

    Ok(serde_wasm_bindgen::from_value(tabs_js)?)
}
