pub mod aggregate;

pub use aggregate::{
    journal_status, sample_entries, EntrySide, JournalDraft, JournalEntry, JournalEntryId,
    JournalLine, JournalLineDraft, JournalStatus, ACCOUNTS, CODE_PREFIX,
};
