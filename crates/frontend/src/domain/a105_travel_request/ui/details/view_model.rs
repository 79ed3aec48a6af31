use crate::shared::commit_task::{CommitGuard, SAVE_DELAY_MS};
use chrono::Datelike;
use contracts::domain::a105_travel_request::{
    TravelDraft, TravelRequest, TravelRequestId, CODE_PREFIX,
};
use contracts::domain::common::{AggregateId, CodeSeries};
use contracts::shared::crud::editor::{CommitError, EditorMode, EditorSession};
use contracts::shared::crud::store::EntityStore;
use contracts::shared::crud::validate::{FieldErrors, Validate};
use leptos::prelude::*;

/// ViewModel for the travel request editor modal.
#[derive(Clone)]
pub struct TravelDetailsViewModel {
    mode: EditorMode<TravelRequestId>,
    pub code_preview: String,
    pub form: RwSignal<TravelDraft>,
    pub errors: RwSignal<FieldErrors>,
    pub guard: CommitGuard,
}

impl TravelDetailsViewModel {
    pub fn new(store: RwSignal<EntityStore<TravelRequest>>, id: Option<TravelRequestId>) -> Self {
        let st = store.get_untracked();
        let today = chrono::Utc::now().date_naive();
        let mut errors = FieldErrors::new();

        let (mode, draft, code_preview) = match id {
            Some(id) => match st.get(&id) {
                Some(request) => (
                    EditorMode::Edit(id),
                    TravelDraft::from_record(request),
                    request.base.code.clone(),
                ),
                None => {
                    leptos::logging::warn!("travel request {} missing from store", id.as_string());
                    errors.push("store", "Dokumen tidak ditemukan, mungkin sudah dihapus");
                    (EditorMode::Edit(id), TravelDraft::template(today), String::new())
                }
            },
            None => (
                EditorMode::Create,
                TravelDraft::template(today),
                CodeSeries::seeded(
                    CODE_PREFIX,
                    today.year(),
                    st.iter().map(|r| r.base.code.as_str()),
                )
                .peek(),
            ),
        };

        Self {
            mode,
            code_preview,
            form: RwSignal::new(draft),
            errors: RwSignal::new(errors),
            guard: CommitGuard::new(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, EditorMode::Edit(_))
    }

    pub fn save_command(
        &self,
        store: RwSignal<EntityStore<TravelRequest>>,
        on_saved: Callback<()>,
    ) {
        let draft = self.form.get_untracked();

        if let Err(field_errors) = draft.validate() {
            self.errors.set(field_errors);
            return;
        }
        self.errors.set(FieldErrors::new());

        let mode = self.mode.clone();
        let errors = self.errors;
        self.guard.run(SAVE_DELAY_MS, move || {
            let mut st = store.get_untracked();
            let result = match &mode {
                EditorMode::Create => {
                    let today = chrono::Utc::now().date_naive();
                    let code = CodeSeries::seeded(
                        CODE_PREFIX,
                        today.year(),
                        st.iter().map(|r| r.base.code.as_str()),
                    )
                    .next_code();
                    let id = TravelRequestId::new_v4();
                    let session = EditorSession::create(draft.clone());
                    session.commit(&mut st, |d, existing| d.build(id, code.clone(), existing))
                }
                EditorMode::Edit(id) => {
                    let session = EditorSession::edit(*id, draft.clone());
                    let id = *id;
                    session.commit(&mut st, move |d, existing| {
                        d.build(id, String::new(), existing)
                    })
                }
            };
            match result {
                Ok(()) => {
                    store.set(st);
                    on_saved.run(());
                }
                Err(CommitError::Invalid(field_errors)) => errors.set(field_errors),
                Err(CommitError::Store(e)) => {
                    let mut field_errors = FieldErrors::new();
                    field_errors.push("store", e.to_string());
                    errors.set(field_errors);
                }
            }
        });
    }
}
