use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct JournalListState {
    // Filters
    pub search: String,
    pub account: String,
    pub status: String,
    pub date_from: String,
    pub date_to: String,

    // Sorting
    pub sort_field: String,
    pub sort_ascending: bool,

    // Pagination
    pub page: usize,
    pub page_size: usize,
}

impl Default for JournalListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            account: String::new(),
            status: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            sort_field: "code".to_string(),
            sort_ascending: false,
            page: 0,
            page_size: 10,
        }
    }
}

pub fn create_state() -> RwSignal<JournalListState> {
    RwSignal::new(JournalListState::default())
}
