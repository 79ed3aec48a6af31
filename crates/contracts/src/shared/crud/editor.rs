use super::store::{EntityStore, StoreError, StoreRecord};
use super::validate::{FieldErrors, Validate};
use thiserror::Error;

/// Whether the editor was opened for a new record or an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode<Id> {
    Create,
    Edit(Id),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommitError {
    #[error("validasi gagal")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A detached editing session over a draft copy of one record.
///
/// The draft is invisible to the entity store until [`EditorSession::commit`]
/// succeeds; dropping the session (cancel/close) discards it with no side
/// effects.
#[derive(Debug, Clone)]
pub struct EditorSession<Id, D> {
    mode: EditorMode<Id>,
    pub draft: D,
}

impl<Id: PartialEq + Clone + std::fmt::Debug, D: Validate + Clone> EditorSession<Id, D> {
    /// Open in create mode with the domain's empty/default template.
    pub fn create(template: D) -> Self {
        Self {
            mode: EditorMode::Create,
            draft: template,
        }
    }

    /// Open in edit mode with a deep copy of the target record's fields.
    pub fn edit(id: Id, draft: D) -> Self {
        Self {
            mode: EditorMode::Edit(id),
            draft,
        }
    }

    pub fn mode(&self) -> &EditorMode<Id> {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, EditorMode::Edit(_))
    }

    /// Validate the draft and commit it through exactly one store
    /// operation. `build` turns the validated draft into a full record,
    /// receiving the current stored record in edit mode so immutable
    /// fields (identity, code, approval trail, created_at) carry over.
    ///
    /// On any failure the store is left untouched.
    pub fn commit<R, F>(&self, store: &mut EntityStore<R>, build: F) -> Result<(), CommitError>
    where
        R: StoreRecord<Id = Id>,
        F: FnOnce(&D, Option<&R>) -> R,
    {
        if let Err(errors) = self.draft.validate() {
            return Err(CommitError::Invalid(errors));
        }
        match &self.mode {
            EditorMode::Create => {
                let record = build(&self.draft, None);
                store.create(record)?;
            }
            EditorMode::Edit(id) => {
                let existing = store
                    .get(id)
                    .cloned()
                    .ok_or_else(|| StoreError::NotFound(format!("{:?}", id)))?;
                let record = build(&self.draft, Some(&existing));
                store.update(record)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::validate::require_text;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: i64,
        text: String,
    }

    impl StoreRecord for Note {
        type Id = i64;

        fn record_id(&self) -> i64 {
            self.id
        }

        fn display_label(&self) -> String {
            self.text.clone()
        }
    }

    #[derive(Debug, Clone, Default)]
    struct NoteDraft {
        text: String,
    }

    impl Validate for NoteDraft {
        fn validate(&self) -> Result<(), FieldErrors> {
            let mut errors = FieldErrors::new();
            require_text(&mut errors, "text", &self.text, "Teks");
            errors.into_result()
        }
    }

    fn build_note(draft: &NoteDraft, existing: Option<&Note>) -> Note {
        Note {
            id: existing.map(|n| n.id).unwrap_or(99),
            text: draft.text.clone(),
        }
    }

    #[test]
    fn test_create_commit_prepends_record() {
        let mut store = EntityStore::seeded(vec![Note {
            id: 1,
            text: "lama".into(),
        }]);
        let mut session = EditorSession::<i64, _>::create(NoteDraft::default());
        session.draft.text = "baru".into();
        session.commit(&mut store, build_note).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].text, "baru");
    }

    #[test]
    fn test_draft_mutation_never_touches_store() {
        let original = Note {
            id: 1,
            text: "asli".into(),
        };
        let mut store = EntityStore::seeded(vec![original.clone()]);

        let mut session = EditorSession::edit(
            1,
            NoteDraft {
                text: original.text.clone(),
            },
        );
        session.draft.text = "diubah di modal".into();

        // The open editor holds a detached copy only.
        assert_eq!(store.get(&1), Some(&original));

        // Cancelling is just dropping the session.
        drop(session);
        assert_eq!(store.get(&1), Some(&original));
    }

    #[test]
    fn test_invalid_draft_commits_nothing() {
        let mut store: EntityStore<Note> = EntityStore::new();
        let session = EditorSession::<i64, _>::create(NoteDraft::default());
        let err = session.commit(&mut store, build_note).unwrap_err();
        match err {
            CommitError::Invalid(errors) => {
                assert_eq!(errors.get("text"), Some("Teks wajib diisi"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_edit_commit_replaces_record() {
        let mut store = EntityStore::seeded(vec![
            Note {
                id: 2,
                text: "dua".into(),
            },
            Note {
                id: 1,
                text: "satu".into(),
            },
        ]);
        let mut session = EditorSession::edit(1, NoteDraft { text: "satu".into() });
        session.draft.text = "satu (revisi)".into();
        session.commit(&mut store, build_note).unwrap();

        let texts: Vec<&str> = store.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["dua", "satu (revisi)"]);
    }

    #[test]
    fn test_edit_commit_on_stale_identity_is_not_found() {
        let mut store = EntityStore::seeded(vec![Note {
            id: 1,
            text: "satu".into(),
        }]);
        store.delete(&1).unwrap();

        let session = EditorSession::edit(1, NoteDraft { text: "basi".into() });
        let err = session.commit(&mut store, build_note).unwrap_err();
        assert!(matches!(err, CommitError::Store(StoreError::NotFound(_))));
        assert!(store.is_empty());
    }
}
