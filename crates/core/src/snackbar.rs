//! Single-slot notification state.

use serde::{Deserialize, Serialize};

/// How long a renderer keeps a notification on screen.
pub const AUTO_HIDE_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

/// The one notification slot. Each new message overwrites the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnackbarState {
    pub show: bool,
    pub message: String,
    #[serde(rename = "type")]
    pub severity: Severity,
}

impl SnackbarState {
    pub fn showing(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            show: true,
            message: message.into(),
            severity,
        }
    }

    /// Hide the notification, keeping its text so a closing animation can
    /// still render it.
    pub fn hidden(&self) -> Self {
        Self {
            show: false,
            ..self.clone()
        }
    }
}
