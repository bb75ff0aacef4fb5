//! Injected platform capabilities.
//!
//! The editor and its surrounding page never reach for ambient host state
//! (browser storage, the system clipboard) directly; they go through this
//! trait so every flow is testable without a real host. Keyboard input flows
//! the other way — the host pushes keys into [`crate::editor::EditorCore::on_key_down`] —
//! so no handler registration lives here.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::collections::HashMap;

/// Host capabilities the composer depends on.
pub trait Platform {
    /// Read a previously persisted value for `key`.
    fn get_persisted(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`, replacing any previous value.
    fn set_persisted(&mut self, key: &str, value: &str);

    /// Place `text` on the host clipboard.
    fn copy_to_clipboard(&mut self, text: &str);
}

/// In-memory platform for tests and non-browser hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlatform {
    store: HashMap<String, String>,
    clipboard: Option<String>,
}

impl MemoryPlatform {
    /// Create an empty platform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text copied to the clipboard, if any.
    #[must_use]
    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }
}

impl Platform for MemoryPlatform {
    fn get_persisted(&self, key: &str) -> Option<String> {
        self.store.get(key).cloned()
    }

    fn set_persisted(&mut self, key: &str, value: &str) {
        self.store.insert(key.to_owned(), value.to_owned());
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        self.clipboard = Some(text.to_owned());
    }
}
