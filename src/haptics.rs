// SPDX-License-Identifier: MPL-2.0
//! Haptic feedback patterns for toast interactions.
//!
//! The library never talks to a vibration motor itself. It resolves which
//! pattern a press should produce and hands it to a [`HapticFeedback`] sink
//! supplied by the host platform.

use crate::toast::ToastKind;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Named vibration patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HapticPattern {
    /// Light tap (UI feedback).
    Light,
    /// Medium pulse (notification arrival).
    Medium,
    /// Triple pulse for successful actions.
    Success,
    /// Strong double pulse for errors and warnings.
    Error,
}

impl HapticPattern {
    /// Alternating vibrate/pause durations in milliseconds.
    #[must_use]
    pub fn timings_ms(self) -> &'static [u32] {
        match self {
            HapticPattern::Light => &[5],
            HapticPattern::Medium => &[20],
            HapticPattern::Success => &[10, 20, 10],
            HapticPattern::Error => &[30, 20, 30],
        }
    }
}

/// Global haptic preference stored in the accessibility settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HapticSetting {
    #[default]
    Off,
    /// Pick a pattern from the toast kind.
    Auto,
    Light,
    Medium,
    Success,
    Error,
}

impl HapticSetting {
    /// Resolves the pattern to play for a toast of the given kind.
    #[must_use]
    pub fn pattern_for(self, kind: ToastKind) -> Option<HapticPattern> {
        match self {
            HapticSetting::Off => None,
            HapticSetting::Auto => Some(match kind {
                ToastKind::Success => HapticPattern::Success,
                ToastKind::Error | ToastKind::Warning => HapticPattern::Error,
                ToastKind::Info => HapticPattern::Light,
            }),
            HapticSetting::Light => Some(HapticPattern::Light),
            HapticSetting::Medium => Some(HapticPattern::Medium),
            HapticSetting::Success => Some(HapticPattern::Success),
            HapticSetting::Error => Some(HapticPattern::Error),
        }
    }
}

/// Platform sink for haptic signals. Implementations must not fail loudly:
/// devices without a motor simply ignore the call.
pub trait HapticFeedback {
    fn trigger(&mut self, pattern: HapticPattern);

    fn cancel(&mut self) {}
}

/// Sink that drops every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn trigger(&mut self, pattern: HapticPattern) {
        tracing::trace!(?pattern, "haptic feedback not available");
    }
}

/// Sink that records every pattern, for hosts that forward signals later
/// and for tests. Clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct RecordingHaptics {
    triggered: Rc<RefCell<Vec<HapticPattern>>>,
}

impl RecordingHaptics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn triggered(&self) -> Vec<HapticPattern> {
        self.triggered.borrow().clone()
    }
}

impl HapticFeedback for RecordingHaptics {
    fn trigger(&mut self, pattern: HapticPattern) {
        self.triggered.borrow_mut().push(pattern);
    }

    fn cancel(&mut self) {
        self.triggered.borrow_mut().clear();
    }
}
