use std::sync::Arc;

use pazarin_core::theme::ThemeMode;
use tokio::sync::watch;

/// Light/dark switch shared by every page.
#[derive(Debug, Clone)]
pub struct ThemeService {
    tx: Arc<watch::Sender<ThemeMode>>,
}

impl Default for ThemeService {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

impl ThemeService {
    pub fn new(mode: ThemeMode) -> Self {
        let (tx, _rx) = watch::channel(mode);
        Self { tx: Arc::new(tx) }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.tx.borrow()
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    pub fn label(&self) -> &'static str {
        self.mode().label()
    }

    pub fn set(&self, mode: ThemeMode) {
        self.tx.send_replace(mode);
    }

    /// Flip the mode and return the new one.
    pub fn toggle(&self) -> ThemeMode {
        let mut next = ThemeMode::default();
        self.tx.send_modify(|mode| {
            *mode = mode.toggled();
            next = *mode;
        });
        next
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.tx.subscribe()
    }
}
