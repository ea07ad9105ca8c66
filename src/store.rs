// SPDX-License-Identifier: MPL-2.0
//! The toast stack: ordered active entries plus the current configuration.
//!
//! All operations are synchronous and total. Entries are appended at the
//! tail in call order, so a burst of `add_toast` calls is reflected in full
//! by the next read.

use crate::config::{merge, ConfigPatch, ToastConfig};
use crate::toast::{IdGenerator, RandomIds, ToastData, ToastEntry, ToastId};

/// Messages for stack state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Remove a toast by id, or the newest one when `None`.
    Remove(Option<ToastId>),
    /// Merge a configuration patch over the current config.
    Configure(ConfigPatch),
    /// Remove every toast.
    Clear,
}

/// Holds the ordered toast entries and the merged configuration.
#[derive(Debug)]
pub struct ToastStore {
    /// Active toasts, oldest first.
    entries: Vec<ToastEntry>,
    config: ToastConfig,
    ids: Box<dyn IdGenerator>,
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ToastStore {
    /// Creates an empty stack whose config is the defaults merged with
    /// `initial`.
    #[must_use]
    pub fn new(initial: Option<&ConfigPatch>) -> Self {
        Self::with_id_generator(initial, RandomIds)
    }

    /// Creates an empty stack that draws ids from `ids`.
    #[must_use]
    pub fn with_id_generator(
        initial: Option<&ConfigPatch>,
        ids: impl IdGenerator + 'static,
    ) -> Self {
        let config = match initial {
            Some(patch) => merge(&ToastConfig::default(), patch),
            None => ToastConfig::default(),
        };
        Self {
            entries: Vec::new(),
            config,
            ids: Box::new(ids),
        }
    }

    /// Appends a toast and returns its new id.
    pub fn add_toast(&mut self, data: ToastData) -> ToastId {
        let id = self.ids.next_id();
        tracing::debug!(%id, "adding toast");
        self.entries.push(ToastEntry::new(id.clone(), data));
        id
    }

    /// Removes a toast.
    ///
    /// With an id, removes that entry if present. Without one, removes the
    /// newest entry; a single remaining entry clears the stack. Returns the
    /// removed entry, or `None` when nothing matched.
    pub fn remove_toast(&mut self, id: Option<&ToastId>) -> Option<ToastEntry> {
        match id {
            Some(id) => {
                let pos = self.entries.iter().position(|entry| entry.id() == id)?;
                tracing::debug!(%id, "removing toast");
                Some(self.entries.remove(pos))
            }
            None if self.entries.len() <= 1 => {
                let removed = self.entries.pop();
                if removed.is_some() {
                    tracing::debug!("clearing last toast");
                }
                removed
            }
            None => {
                let removed = self.entries.pop();
                if let Some(entry) = &removed {
                    tracing::debug!(id = %entry.id(), "removing newest toast");
                }
                removed
            }
        }
    }

    /// Replaces the config with `patch` merged over it.
    pub fn set_toast_config(&mut self, patch: &ConfigPatch) {
        tracing::trace!(?patch, "merging toast config");
        self.config = merge(&self.config, patch);
    }

    /// Re-applies the caller's initial config over the current one.
    ///
    /// Patches applied since creation survive: the merge starts from the
    /// current config, not from the defaults.
    pub fn apply_initial_config(&mut self, initial: &ConfigPatch) {
        self.set_toast_config(initial);
    }

    /// Removes every toast.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Handles a stack message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Remove(id) => {
                self.remove_toast(id.as_ref());
            }
            Message::Configure(patch) => self.set_toast_config(patch),
            Message::Clear => self.clear(),
        }
    }

    /// Returns the active toasts, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&ToastEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ToastId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
