use leptos::prelude::*;

/// Application-wide UI state: the active dashboard page and sidebar
/// visibility. Entity stores are NOT here; each dashboard owns its own.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new("a101_payment_voucher".to_string()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn activate(&self, key: &str) {
        leptos::logging::log!("activate page: '{}'", key);
        self.active.set(key.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
