use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct DoseListState {
    // Filters
    pub search: String,
    pub period: String,
    pub status: String,

    // Sorting
    pub sort_field: String,
    pub sort_ascending: bool,

    // Pagination
    pub page: usize,
    pub page_size: usize,
}

impl Default for DoseListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            period: String::new(),
            status: String::new(),
            sort_field: "period".to_string(),
            sort_ascending: false,
            page: 0,
            page_size: 10,
        }
    }
}

pub fn create_state() -> RwSignal<DoseListState> {
    RwSignal::new(DoseListState::default())
}
