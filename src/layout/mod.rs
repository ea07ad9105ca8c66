// SPDX-License-Identifier: MPL-2.0
//! Vertical stacking of toasts.
//!
//! Each toast sits at `base + sum(height + spacing)` of the toasts before it
//! in list order. Heights come from renderer measurements when available and
//! from [`ESTIMATED_HEIGHT`] until then. Offsets are distances from the edge
//! the stack is anchored to: the top edge for [`Placement::Top`], the bottom
//! edge for [`Placement::Bottom`].

pub mod keyboard;
pub mod positioning;

pub use keyboard::{KeyboardEvent, KeyboardTracker};
pub use positioning::{toast_alignment, HorizontalSlot};

use crate::config::Placement;
use crate::toast::ToastId;
use std::collections::HashMap;

/// Height assumed for a toast that has not been measured yet.
pub const ESTIMATED_HEIGHT: f32 = 68.0;

/// Insets of the area unobstructed by system UI.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

/// Screen geometry the stack is laid out against.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenMetrics {
    pub width: f32,
    pub height: f32,
    pub insets: SafeAreaInsets,
    pub keyboard_height: f32,
}

impl ScreenMetrics {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_insets(mut self, insets: SafeAreaInsets) -> Self {
        self.insets = insets;
        self
    }

    #[must_use]
    pub fn with_keyboard(mut self, keyboard: &KeyboardTracker) -> Self {
        self.keyboard_height = keyboard.height();
        self
    }
}

/// Distance of the first toast from its anchor edge.
///
/// The keyboard only pushes bottom-anchored stacks.
#[must_use]
pub fn base_offset(
    placement: Placement,
    insets: &SafeAreaInsets,
    offset: f32,
    keyboard_height: f32,
) -> f32 {
    match placement {
        Placement::Top => insets.top + offset,
        Placement::Bottom => insets.bottom + offset + keyboard_height,
    }
}

/// Last measured height per toast.
#[derive(Debug, Clone, Default)]
pub struct HeightMap {
    heights: HashMap<ToastId, f32>,
}

impl HeightMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a measurement. Returns `true` when the stored value changed.
    /// Non-finite or negative heights are ignored.
    pub fn record(&mut self, id: &ToastId, height: f32) -> bool {
        if !height.is_finite() || height < 0.0 {
            tracing::warn!(%id, height, "ignoring invalid toast height");
            return false;
        }
        match self.heights.get_mut(id) {
            Some(current) if *current == height => false,
            Some(current) => {
                *current = height;
                true
            }
            None => {
                self.heights.insert(id.clone(), height);
                true
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<f32> {
        self.heights.get(id).copied()
    }

    /// Measured height, or [`ESTIMATED_HEIGHT`] if unmeasured.
    #[must_use]
    pub fn height_of(&self, id: &ToastId) -> f32 {
        self.get(id).unwrap_or(ESTIMATED_HEIGHT)
    }

    /// Drops measurements for ids not in `live`.
    pub fn retain_ids<'a>(&mut self, live: impl IntoIterator<Item = &'a ToastId>) {
        let live: std::collections::HashSet<&ToastId> = live.into_iter().collect();
        self.heights.retain(|id, _| live.contains(id));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

/// Vertical slot assigned to one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct StackSlot {
    pub id: ToastId,
    /// Distance from the anchor edge.
    pub offset: f32,
    /// Height used for the computation (measured or estimated).
    pub height: f32,
}

/// Assigns stacked offsets in list order.
#[must_use]
pub fn accumulate<'a>(
    ids: impl IntoIterator<Item = &'a ToastId>,
    base: f32,
    spacing: f32,
    heights: &HeightMap,
) -> Vec<StackSlot> {
    let mut running = base;
    ids.into_iter()
        .map(|id| {
            let height = heights.height_of(id);
            let slot = StackSlot {
                id: id.clone(),
                offset: running,
                height,
            };
            running += height + spacing;
            slot
        })
        .collect()
}

/// Orders items for rendering: list order at the top, reversed at the
/// bottom so the newest toast is drawn first from the anchor edge.
#[must_use]
pub fn display_order<T>(items: &[T], placement: Placement) -> Vec<&T> {
    match placement {
        Placement::Top => items.iter().collect(),
        Placement::Bottom => items.iter().rev().collect(),
    }
}
