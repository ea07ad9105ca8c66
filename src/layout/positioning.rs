// SPDX-License-Identifier: MPL-2.0
//! Horizontal placement of toast cards.

use crate::config::HorizontalPosition;

/// Narrowest card width for centered toasts.
pub const MIN_RESPONSIVE_WIDTH: f32 = 200.0;

/// Widest card width for edge-aligned toasts.
pub const EDGE_MAX_WIDTH: f32 = 420.0;

/// Gap between an edge-aligned card and the screen edge.
pub const EDGE_MARGIN: f32 = 16.0;

/// Horizontal extent of a toast card, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalSlot {
    /// Left edge.
    pub x: f32,
    pub width: f32,
}

/// Computes where a card sits horizontally.
///
/// Centered cards take the screen width minus `margin_horizontal` on both
/// sides, but never less than [`MIN_RESPONSIVE_WIDTH`]. Edge-aligned cards
/// are capped at [`EDGE_MAX_WIDTH`] and kept [`EDGE_MARGIN`] away from
/// their edge.
#[must_use]
pub fn toast_alignment(
    horizontal: HorizontalPosition,
    margin_horizontal: f32,
    screen_width: f32,
) -> HorizontalSlot {
    match horizontal {
        HorizontalPosition::Center => {
            let width = (screen_width - margin_horizontal * 2.0).max(MIN_RESPONSIVE_WIDTH);
            HorizontalSlot {
                x: (screen_width - width) / 2.0,
                width,
            }
        }
        HorizontalPosition::Left => HorizontalSlot {
            x: EDGE_MARGIN,
            width: edge_width(screen_width),
        },
        HorizontalPosition::Right => {
            let width = edge_width(screen_width);
            HorizontalSlot {
                x: screen_width - EDGE_MARGIN - width,
                width,
            }
        }
    }
}

fn edge_width(screen_width: f32) -> f32 {
    (screen_width - EDGE_MARGIN * 2.0).clamp(0.0, EDGE_MAX_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn center_uses_responsive_width() {
        let slot = toast_alignment(HorizontalPosition::Center, 16.0, 375.0);
        assert_abs_diff_eq!(slot.width, 343.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(slot.x, 16.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn center_never_narrower_than_minimum() {
        let slot = toast_alignment(HorizontalPosition::Center, 16.0, 150.0);
        assert_abs_diff_eq!(slot.width, MIN_RESPONSIVE_WIDTH, epsilon = F32_EPSILON);
        assert!(slot.x < 0.0);
    }

    #[test]
    fn left_is_capped_and_inset() {
        let slot = toast_alignment(HorizontalPosition::Left, 16.0, 1280.0);
        assert_abs_diff_eq!(slot.width, EDGE_MAX_WIDTH, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(slot.x, EDGE_MARGIN, epsilon = F32_EPSILON);
    }

    #[test]
    fn right_hugs_the_right_edge() {
        let slot = toast_alignment(HorizontalPosition::Right, 16.0, 1280.0);
        assert_abs_diff_eq!(slot.x + slot.width, 1280.0 - EDGE_MARGIN, epsilon = F32_EPSILON);
    }

    #[test]
    fn edge_cards_shrink_on_narrow_screens() {
        let slot = toast_alignment(HorizontalPosition::Left, 16.0, 300.0);
        assert_abs_diff_eq!(slot.width, 268.0, epsilon = F32_EPSILON);
    }
}
