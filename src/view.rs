/// Popup view switching: which view is shown and which have been loaded

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Tabs,
    Days,
}

impl View {
    pub const ALL: [View; 2] = [View::Tabs, View::Days];

    pub fn from_name(name: &str) -> Option<View> {
        match name {
            "tabs" => Some(View::Tabs),
            "days" => Some(View::Days),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Tabs => "tabs",
            View::Days => "days",
        }
    }

    pub fn button_id(&self) -> String {
        format!("tab-{}-button", self.name())
    }

    pub fn content_id(&self) -> String {
        format!("tab-{}-content", self.name())
    }
}

/// Fetch progress of one view's data
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed(String),
}

/// Active view plus the fetch status of each view's data
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    active: View,
    tabs: LoadStatus,
    days: LoadStatus,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            active: View::Tabs,
            tabs: LoadStatus::NotLoaded,
            days: LoadStatus::NotLoaded,
        }
    }

    pub fn active(&self) -> View {
        self.active
    }

    /// Switch to the named view. Unknown names leave the state untouched.
    pub fn activate(&mut self, name: &str) -> bool {
        match View::from_name(name) {
            Some(view) => {
                self.active = view;
                true
            }
            None => false,
        }
    }

    pub fn status(&self, view: View) -> &LoadStatus {
        match view {
            View::Tabs => &self.tabs,
            View::Days => &self.days,
        }
    }

    pub fn set_status(&mut self, view: View, status: LoadStatus) {
        match view {
            View::Tabs => self.tabs = status,
            View::Days => self.days = status,
        }
    }

    pub fn is_loaded(&self, view: View) -> bool {
        *self.status(view) == LoadStatus::Loaded
    }

    pub fn is_loading(&self, view: View) -> bool {
        *self.status(view) == LoadStatus::Loading
    }

    pub fn failure(&self, view: View) -> Option<&str> {
        match self.status(view) {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Data must be fetched unless it is loaded or already on its way
    pub fn needs_fetch(&self, view: View) -> bool {
        matches!(self.status(view), LoadStatus::NotLoaded | LoadStatus::Failed(_))
    }

    pub fn mark_loaded(&mut self, view: View) {
        self.set_status(view, LoadStatus::Loaded);
    }

    pub fn is_selected(&self, view: View) -> bool {
        self.active == view
    }

    pub fn is_hidden(&self, view: View) -> bool {
        self.active != view
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_tabs_view() {
        let state = ViewState::new();
        assert_eq!(state.active(), View::Tabs);
        assert!(!state.is_loaded(View::Tabs));
        assert!(!state.is_loaded(View::Days));
    }

    #[test]
    fn test_activate_is_exclusive() {
        let mut state = ViewState::new();
        assert!(state.activate("days"));

        let selected = View::ALL.iter().filter(|v| state.is_selected(**v)).count();
        let visible = View::ALL.iter().filter(|v| !state.is_hidden(**v)).count();
        assert_eq!(selected, 1);
        assert_eq!(visible, 1);
        assert!(state.is_selected(View::Days));
        assert!(state.is_hidden(View::Tabs));
    }

    #[test]
    fn test_unknown_view_is_ignored() {
        let mut state = ViewState::new();
        state.activate("days");

        assert!(!state.activate("settings"));
        assert_eq!(state.active(), View::Days);
    }

    #[test]
    fn test_loaded_flags_are_independent() {
        let mut state = ViewState::new();
        state.mark_loaded(View::Days);

        assert!(state.is_loaded(View::Days));
        assert!(!state.is_loaded(View::Tabs));
    }

    #[test]
    fn test_status_is_tracked_per_view() {
        let mut state = ViewState::new();
        state.set_status(View::Tabs, LoadStatus::Loading);
        state.set_status(View::Days, LoadStatus::Loading);

        state.mark_loaded(View::Tabs);

        assert!(!state.is_loading(View::Tabs));
        assert!(state.is_loading(View::Days));
    }

    #[test]
    fn test_failure_stays_with_its_view() {
        let mut state = ViewState::new();
        state.set_status(View::Days, LoadStatus::Failed("storage.local.get: denied".to_string()));
        state.mark_loaded(View::Tabs);

        assert_eq!(state.failure(View::Days), Some("storage.local.get: denied"));
        assert_eq!(state.failure(View::Tabs), None);
    }

    #[test]
    fn test_needs_fetch() {
        let mut state = ViewState::new();
        assert!(state.needs_fetch(View::Tabs));

        state.set_status(View::Tabs, LoadStatus::Loading);
        assert!(!state.needs_fetch(View::Tabs));

        state.set_status(View::Tabs, LoadStatus::Failed("offline".to_string()));
        assert!(state.needs_fetch(View::Tabs));

        state.mark_loaded(View::Tabs);
        assert!(!state.needs_fetch(View::Tabs));
    }

    #[test]
    fn test_element_ids() {
        assert_eq!(View::Tabs.button_id(), "tab-tabs-button");
        assert_eq!(View::Days.content_id(), "tab-days-content");
    }
}
