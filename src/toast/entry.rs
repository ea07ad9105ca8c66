// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! [`ToastData`] is what callers hand to `add_toast`; the store turns it into
//! a [`ToastEntry`] by attaching a fresh [`ToastId`]. Presentation overrides
//! are carried through untouched for the renderer.

use super::id::ToastId;
use crate::config::PaddingPatch;
use crate::haptics::HapticPattern;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Toast kind determines the default background color and haptic pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Callback invoked when the user presses a toast, before it dismisses.
#[derive(Clone)]
pub struct PressCallback(Rc<dyn Fn()>);

impl PressCallback {
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self(Rc::new(callback))
    }

    pub fn call(&self) {
        (self.0)();
    }
}

impl fmt::Debug for PressCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PressCallback")
    }
}

/// Per-toast visual overrides. The store never reads these.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStyle {
    pub background_color: Option<String>,
    pub border_radius: Option<f32>,
    pub padding: Option<PaddingPatch>,
    pub title_font_size: Option<f32>,
    pub message_font_size: Option<f32>,
    /// Free-form renderer-specific properties.
    pub custom: BTreeMap<String, String>,
}

/// Per-toast screen reader overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastAccessibility {
    pub label: Option<String>,
    pub hint: Option<String>,
}

/// A toast before it has been added to a stack.
#[derive(Debug, Clone, Default)]
pub struct ToastData {
    kind: ToastKind,
    title: Option<String>,
    message: String,
    /// Auto-dismiss override in milliseconds; `Some(0)` is persistent.
    duration: Option<u64>,
    style: ToastStyle,
    accessibility: ToastAccessibility,
    haptic: Option<HapticPattern>,
    on_press: Option<PressCallback>,
}

impl ToastData {
    /// Creates a toast of the given kind.
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overrides the global auto-dismiss delay for this toast.
    #[must_use]
    pub fn with_duration(mut self, millis: u64) -> Self {
        self.duration = Some(millis);
        self
    }

    /// Keeps the toast on screen until it is pressed or removed.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.with_duration(0)
    }

    #[must_use]
    pub fn with_style(mut self, style: ToastStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.style.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_accessibility(mut self, accessibility: ToastAccessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Overrides the haptic pattern played when this toast is pressed.
    #[must_use]
    pub fn with_haptic(mut self, pattern: HapticPattern) -> Self {
        self.haptic = Some(pattern);
        self
    }

    #[must_use]
    pub fn on_press(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_press = Some(PressCallback::new(callback));
        self
    }
}

/// A toast owned by a stack.
#[derive(Debug, Clone)]
pub struct ToastEntry {
    id: ToastId,
    data: ToastData,
}

impl ToastEntry {
    pub(crate) fn new(id: ToastId, data: ToastData) -> Self {
        Self { id, data }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.data.kind
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.data.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.data.message
    }

    /// Per-entry auto-dismiss override in milliseconds.
    #[must_use]
    pub fn duration(&self) -> Option<u64> {
        self.data.duration
    }

    /// Resolves the auto-dismiss delay against the global default.
    ///
    /// Returns `None` when the toast is persistent.
    #[must_use]
    pub fn effective_duration(&self, default_millis: u64) -> Option<Duration> {
        match self.data.duration.unwrap_or(default_millis) {
            0 => None,
            millis => Some(Duration::from_millis(millis)),
        }
    }

    #[must_use]
    pub fn style(&self) -> &ToastStyle {
        &self.data.style
    }

    #[must_use]
    pub fn accessibility(&self) -> &ToastAccessibility {
        &self.data.accessibility
    }

    /// Text announced by screen readers: explicit label, then title, then
    /// message.
    #[must_use]
    pub fn accessibility_label(&self) -> &str {
        self.data
            .accessibility
            .label
            .as_deref()
            .or(self.data.title.as_deref())
            .unwrap_or(&self.data.message)
    }

    #[must_use]
    pub fn haptic(&self) -> Option<HapticPattern> {
        self.data.haptic
    }

    #[must_use]
    pub fn on_press(&self) -> Option<&PressCallback> {
        self.data.on_press.as_ref()
    }
}
