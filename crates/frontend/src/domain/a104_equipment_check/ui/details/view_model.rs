use crate::shared::commit_task::{CommitGuard, SAVE_DELAY_MS};
use contracts::domain::a104_equipment_check::{EquipmentCheck, EquipmentDraft};
use contracts::shared::crud::editor::{CommitError, EditorMode, EditorSession};
use contracts::shared::crud::store::{next_numeric_id, EntityStore};
use contracts::shared::crud::validate::{FieldErrors, Validate};
use leptos::prelude::*;

/// ViewModel for the equipment QC editor modal.
#[derive(Clone)]
pub struct EquipmentDetailsViewModel {
    mode: EditorMode<i64>,
    pub form: RwSignal<EquipmentDraft>,
    pub errors: RwSignal<FieldErrors>,
    pub guard: CommitGuard,
}

impl EquipmentDetailsViewModel {
    pub fn new(store: RwSignal<EntityStore<EquipmentCheck>>, id: Option<i64>) -> Self {
        let st = store.get_untracked();
        let today = chrono::Utc::now().date_naive();
        let mut errors = FieldErrors::new();

        let (mode, draft) = match id {
            Some(id) => match st.get(&id) {
                Some(record) => (EditorMode::Edit(id), EquipmentDraft::from_record(record)),
                None => {
                    errors.push("store", "Data tidak ditemukan, mungkin sudah dihapus");
                    (EditorMode::Edit(id), EquipmentDraft::template(today))
                }
            },
            None => (EditorMode::Create, EquipmentDraft::template(today)),
        };

        Self {
            mode,
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
        store: RwSignal<EntityStore<EquipmentCheck>>,
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
                    let id = next_numeric_id(st.iter().map(|c| c.id));
                    let session = EditorSession::create(draft.clone());
                    session.commit(&mut st, |d, existing| d.build(id, existing))
                }
                EditorMode::Edit(id) => {
                    let session = EditorSession::edit(*id, draft.clone());
                    let id = *id;
                    session.commit(&mut st, move |d, existing| d.build(id, existing))
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
