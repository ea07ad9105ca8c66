// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all toast configuration constants.
//!
//! This module serves as the single source of truth for the values a
//! provider starts from before any caller-supplied configuration is merged.
//!
//! # Categories
//!
//! - **Colors**: Background color per toast kind
//! - **Timing**: Auto-dismiss and animation durations
//! - **Layout**: Spacing, edge offset and margins
//! - **Typography**: Title and message font sizes
//! - **Shadow**: Card shadow parameters
//! - **Accessibility**: Line limits and font scaling

// ==========================================================================
// Color Defaults
// ==========================================================================

/// Default background color for error toasts.
pub const DEFAULT_ERROR_COLOR: &str = "#d92027";

/// Default background color for success toasts.
pub const DEFAULT_SUCCESS_COLOR: &str = "#35d0ba";

/// Default background color for warning toasts.
pub const DEFAULT_WARNING_COLOR: &str = "#ff9100";

/// Default background color for info toasts.
pub const DEFAULT_INFO_COLOR: &str = "#7890f0";

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default auto-dismiss delay in milliseconds. Zero means persistent.
pub const DEFAULT_TIME_TO_DISMISS_MS: u64 = 3000;

/// Default entrance transition duration in milliseconds.
pub const DEFAULT_APPEAR_DURATION_MS: u64 = 220;

/// Default exit transition duration in milliseconds.
pub const DEFAULT_DISAPPEAR_DURATION_MS: u64 = 180;

/// Distance (px) a toast slides in from its placement edge.
pub const DEFAULT_INITIAL_TRANSLATION: f32 = 24.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Vertical gap between stacked toasts (px).
pub const DEFAULT_SPACING: f32 = 12.0;

/// Distance between the stack and its screen edge (px).
pub const DEFAULT_OFFSET: f32 = 20.0;

/// Horizontal margin applied to each toast card (px).
pub const DEFAULT_MARGIN_HORIZONTAL: f32 = 16.0;

/// Vertical padding inside a toast card (px).
pub const DEFAULT_PADDING_VERTICAL: f32 = 16.0;

/// Horizontal padding inside a toast card (px).
pub const DEFAULT_PADDING_HORIZONTAL: f32 = 16.0;

// ==========================================================================
// Typography Defaults
// ==========================================================================

/// Title font size (px).
pub const DEFAULT_TITLE_FONT_SIZE: f32 = 16.0;

/// Message font size (px).
pub const DEFAULT_MESSAGE_FONT_SIZE: f32 = 14.0;

// ==========================================================================
// Shadow Defaults
// ==========================================================================

pub const DEFAULT_SHADOW_COLOR: &str = "#000";
pub const DEFAULT_SHADOW_OPACITY: f32 = 0.2;
pub const DEFAULT_SHADOW_RADIUS: f32 = 16.0;
pub const DEFAULT_SHADOW_OFFSET_X: f32 = 0.0;
pub const DEFAULT_SHADOW_OFFSET_Y: f32 = 12.0;

// ==========================================================================
// Accessibility Defaults
// ==========================================================================

/// Maximum number of title lines before truncation.
pub const DEFAULT_TITLE_MAX_LINES: u32 = 1;

/// Maximum number of message lines before truncation.
pub const DEFAULT_MESSAGE_MAX_LINES: u32 = 2;
