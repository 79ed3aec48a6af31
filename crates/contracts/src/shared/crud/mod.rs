//! Record lifecycle & filtered CRUD table core.
//!
//! Every dashboard in the application is an instantiation of the same
//! pattern: an in-memory [`store::EntityStore`] owned by one component,
//! a conjunction of per-field [`filter`] predicates, a clamped
//! [`page`] window over the filtered sequence, a [`lifecycle`] gate over
//! row actions, and an [`editor`] session that commits a detached draft
//! back to the store atomically.

pub mod editor;
pub mod filter;
pub mod lifecycle;
pub mod page;
pub mod store;
pub mod validate;

pub use editor::{CommitError, EditorMode, EditorSession};
pub use lifecycle::{Approval, ApprovalStatus, Decision, LifecycleError};
pub use page::{paginate, PageRequest, PageSlice};
pub use store::{EntityStore, StoreError, StoreRecord};
pub use validate::{FieldErrors, Validate};
