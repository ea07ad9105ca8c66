// SPDX-License-Identifier: MPL-2.0
//! Scoped ownership of a toast stack and the handles that reach it.
//!
//! A [`ToastProvider`] owns the stack and its runtime. Code that should be
//! able to raise toasts gets a [`ToastHandle`], a weak reference that stops
//! working as soon as the provider is dropped.

use crate::config::{ConfigPatch, ToastConfig};
use crate::error::{Error, Result};
use crate::layout::ScreenMetrics;
use crate::runtime::{PlacedToast, ToastRuntime};
use crate::store::ToastStore;
use crate::toast::{ToastData, ToastEntry, ToastId};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Instant;

/// Owns one toast stack for the lifetime of a UI scope.
#[derive(Debug)]
pub struct ToastProvider {
    store: Rc<RefCell<ToastStore>>,
    runtime: ToastRuntime,
}

impl ToastProvider {
    /// Creates a provider whose config is the defaults merged with
    /// `initial`.
    #[must_use]
    pub fn new(initial: Option<ConfigPatch>) -> Self {
        Self::with_start(initial, Instant::now())
    }

    /// Like [`ToastProvider::new`] with an explicit clock origin.
    #[must_use]
    pub fn with_start(initial: Option<ConfigPatch>, start: Instant) -> Self {
        Self::with_runtime(initial, ToastRuntime::new(start))
    }

    /// Creates a provider around a preconfigured runtime, e.g. one with a
    /// platform haptics sink.
    #[must_use]
    pub fn with_runtime(initial: Option<ConfigPatch>, runtime: ToastRuntime) -> Self {
        Self::from_store(ToastStore::new(initial.as_ref()), runtime)
    }

    /// Creates a provider around an existing store.
    #[must_use]
    pub fn from_store(store: ToastStore, runtime: ToastRuntime) -> Self {
        tracing::debug!("toast provider created");
        Self {
            store: Rc::new(RefCell::new(store)),
            runtime,
        }
    }

    /// Returns a handle to this provider's stack.
    #[must_use]
    pub fn handle(&self) -> ToastHandle {
        ToastHandle {
            store: Rc::downgrade(&self.store),
        }
    }

    /// Merges a changed initial config over the current one.
    pub fn apply_initial_config(&mut self, initial: &ConfigPatch) {
        self.store.borrow_mut().apply_initial_config(initial);
    }

    /// Advances timers and animations to `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut store = self.store.borrow_mut();
        self.runtime.tick(&mut store, now)
    }

    /// Mounts toasts added since the last tick without moving the clock.
    pub fn sync(&mut self) -> bool {
        let store = self.store.borrow();
        self.runtime.sync(&store)
    }

    /// Handles a press on a toast. The press callback runs with the stack
    /// unborrowed, so it may use a [`ToastHandle`].
    pub fn press(&mut self, id: &ToastId) -> bool {
        let snapshot = {
            let store = self.store.borrow();
            store
                .get(id)
                .cloned()
                .map(|entry| (entry, store.config().clone()))
        };
        match snapshot {
            Some((entry, config)) => self.runtime.press_entry(&entry, &config),
            None => false,
        }
    }

    /// Records a renderer measurement for a toast.
    pub fn measured(&mut self, id: &ToastId, height: f32) -> bool {
        self.runtime.on_measured(id, height)
    }

    #[must_use]
    pub fn layout(&self, metrics: &ScreenMetrics) -> Vec<PlacedToast> {
        self.runtime.layout(&self.store.borrow(), metrics)
    }

    /// Snapshot of the active toasts, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<ToastEntry> {
        self.store.borrow().entries().to_vec()
    }

    #[must_use]
    pub fn config(&self) -> ToastConfig {
        self.store.borrow().config().clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }

    /// Whether ticks are still needed to make progress: something is
    /// animating, a timer is pending, or a toast is waiting to be mounted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.runtime.is_active() || self.runtime.mounted_count() != self.store.borrow().len()
    }

    #[must_use]
    pub fn runtime(&self) -> &ToastRuntime {
        &self.runtime
    }
}

impl Default for ToastProvider {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Drop for ToastProvider {
    fn drop(&mut self) {
        self.runtime.teardown();
    }
}

/// Capability to manipulate a provider's stack.
///
/// Every operation fails with [`Error::OutsideProvider`] once the provider
/// is gone.
#[derive(Debug, Clone, Default)]
pub struct ToastHandle {
    store: Weak<RefCell<ToastStore>>,
}

impl ToastHandle {
    /// A handle attached to no provider.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.store.strong_count() > 0
    }

    pub fn add_toast(&self, data: ToastData) -> Result<ToastId> {
        Ok(self.store()?.borrow_mut().add_toast(data))
    }

    /// Removes a toast by id, or the newest one when `id` is `None`.
    pub fn remove_toast(&self, id: Option<&ToastId>) -> Result<Option<ToastEntry>> {
        Ok(self.store()?.borrow_mut().remove_toast(id))
    }

    pub fn set_toast_config(&self, patch: &ConfigPatch) -> Result<()> {
        self.store()?.borrow_mut().set_toast_config(patch);
        Ok(())
    }

    pub fn entries(&self) -> Result<Vec<ToastEntry>> {
        Ok(self.store()?.borrow().entries().to_vec())
    }

    pub fn config(&self) -> Result<ToastConfig> {
        Ok(self.store()?.borrow().config().clone())
    }

    fn store(&self) -> Result<Rc<RefCell<ToastStore>>> {
        self.store.upgrade().ok_or(Error::OutsideProvider)
    }
}

/// Looks up the toast capability of the enclosing provider.
///
/// # Errors
///
/// Returns [`Error::OutsideProvider`] when `provider` is `None`.
pub fn use_toast(provider: Option<&ToastProvider>) -> Result<ToastHandle> {
    provider.map(ToastProvider::handle).ok_or(Error::OutsideProvider)
}
