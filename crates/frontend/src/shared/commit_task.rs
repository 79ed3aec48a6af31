//! Cancellable simulated save latency.
//!
//! Saving shows a short artificial delay so the pending state is visible.
//! The delay is guarded by a generation ticket: closing the editor bumps
//! the generation, so an in-flight commit can never mutate the store
//! after its modal was dismissed.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

/// Artificial save latency, in milliseconds.
pub const SAVE_DELAY_MS: u32 = 400;

#[derive(Clone)]
pub struct CommitGuard {
    // Plain Arc, not a signal: the spawned future must be able to read it
    // after the owning component was disposed.
    generation: Arc<AtomicU64>,
    pub pending: RwSignal<bool>,
}

impl CommitGuard {
    pub fn new() -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            pending: RwSignal::new(false),
        }
    }

    /// Invalidate any in-flight commit. Safe to call from `on_cleanup`.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Run `commit` after the simulated delay unless cancelled meanwhile.
    pub fn run(&self, delay_ms: u32, commit: impl FnOnce() + 'static) {
        let generation = Arc::clone(&self.generation);
        let ticket = generation.fetch_add(1, Ordering::SeqCst) + 1;

        let pending = self.pending;
        pending.set(true);

        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if generation.load(Ordering::SeqCst) == ticket {
                commit();
                // Generation still matches, so the owning modal is alive
                // and its signals are safe to touch.
                pending.set(false);
            }
        });
    }
}

impl Default for CommitGuard {
    fn default() -> Self {
        Self::new()
    }
}
