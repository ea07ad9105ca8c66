// SPDX-License-Identifier: MPL-2.0
//! On-screen keyboard tracking.

/// Keyboard visibility events reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyboardEvent {
    /// Keyboard shown with the given height in pixels.
    Shown(f32),
    Hidden,
}

/// Tracks the visible keyboard height so bottom-placed toasts can clear it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct KeyboardTracker {
    height: f32,
}

impl KeyboardTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, height: f32) {
        self.height = if height.is_finite() { height.max(0.0) } else { 0.0 };
    }

    pub fn hide(&mut self) {
        self.height = 0.0;
    }

    pub fn handle_event(&mut self, event: KeyboardEvent) {
        match event {
            KeyboardEvent::Shown(height) => self.show(height),
            KeyboardEvent::Hidden => self.hide(),
        }
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.height > 0.0
    }
}
