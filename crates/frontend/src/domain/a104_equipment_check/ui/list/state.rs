use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct EquipmentListState {
    // Filters
    pub search: String,
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

impl Default for EquipmentListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            sort_field: "checked_on".to_string(),
            sort_ascending: false,
            page: 0,
            page_size: 10,
        }
    }
}

pub fn create_state() -> RwSignal<EquipmentListState> {
    RwSignal::new(EquipmentListState::default())
}
