//! App-wide notification slot.

use std::sync::Arc;

use pazarin_core::snackbar::{Severity, SnackbarState};
use tokio::sync::watch;

/// Shared handle to the single snackbar. Clones point at the same slot, and
/// every new message replaces the one before it.
#[derive(Debug, Clone)]
pub struct Snackbar {
    tx: Arc<watch::Sender<SnackbarState>>,
}

impl Default for Snackbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Snackbar {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SnackbarState::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let state = SnackbarState::showing(message, severity);
        tracing::debug!(message = %state.message, severity = ?state.severity, "Snackbar");
        self.tx.send_replace(state);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, Severity::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, Severity::Info);
    }

    pub fn hide(&self) {
        self.tx.send_modify(|state| *state = state.hidden());
    }

    pub fn current(&self) -> SnackbarState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SnackbarState> {
        self.tx.subscribe()
    }
}
