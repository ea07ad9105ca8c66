// SPDX-License-Identifier: MPL-2.0
//! Global toast configuration, its defaults, and loading/saving it to a
//! `toast.toml` file.
//!
//! # Configuration Groups
//!
//! A [`ToastConfig`] is always fully populated. Besides top-level scalars it
//! carries the following groups, each merged field-by-field by
//! [`merge`]:
//! - `bg-color` - Background color per toast kind
//! - `position` - Vertical placement and horizontal alignment
//! - `animation` - Entrance/exit timings and easing
//! - `font` - Font families and sizes
//! - `padding` - Card padding
//! - `shadow` - Card shadow
//! - `accessibility` - Line limits, font scaling and haptic feedback
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! A config file only needs the keys it wants to change: its content is read
//! as a [`ConfigPatch`] and merged over the built-in defaults.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Placement};
//!
//! let (mut config, _warning) = config::load();
//! config.set_vertical(Placement::Top);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
mod patch;

pub use defaults::*;
pub use patch::{
    merge, AccessibilityPatch, AnimationPatch, BgColorPatch, ConfigPatch, FontPatch,
    PaddingPatch, PositionPatch, ShadowPatch,
};

use crate::error::{Error, Result};
use crate::haptics::HapticSetting;
use crate::lifecycle::Easing;
use crate::toast::ToastKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toast.toml";
const APP_NAME: &str = "IcedToast";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOAST_CONFIG_DIR";

// =============================================================================
// Enums (shared between groups)
// =============================================================================

/// Vertical anchor of the stack.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    Top,
    #[default]
    Bottom,
}

/// Horizontal alignment of each toast within the stack.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum HorizontalPosition {
    Left,
    #[default]
    Center,
    Right,
}

// =============================================================================
// Groups
// =============================================================================

/// Background color per toast kind, as color strings (`#rrggbb` or names).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct BgColors {
    pub error: String,
    pub success: String,
    pub warning: String,
    pub info: String,
}

impl BgColors {
    /// Returns the configured color for a toast kind.
    #[must_use]
    pub fn for_kind(&self, kind: ToastKind) -> &str {
        match kind {
            ToastKind::Error => &self.error,
            ToastKind::Success => &self.success,
            ToastKind::Warning => &self.warning,
            ToastKind::Info => &self.info,
        }
    }
}

impl Default for BgColors {
    fn default() -> Self {
        Self {
            error: DEFAULT_ERROR_COLOR.to_string(),
            success: DEFAULT_SUCCESS_COLOR.to_string(),
            warning: DEFAULT_WARNING_COLOR.to_string(),
            info: DEFAULT_INFO_COLOR.to_string(),
        }
    }
}

/// Grouped placement. Authoritative over the flat `placement` and
/// `horizontal-position` aliases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Position {
    pub vertical: Placement,
    pub horizontal: HorizontalPosition,
}

/// Entrance and exit transition settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct AnimationSettings {
    /// Slide distance in pixels.
    pub initial_translation: f32,
    /// Entrance duration in milliseconds.
    pub appear_duration: u64,
    /// Exit duration in milliseconds.
    pub disappear_duration: u64,
    pub easing: Easing,
}

impl AnimationSettings {
    #[must_use]
    pub fn appear(&self) -> Duration {
        Duration::from_millis(self.appear_duration)
    }

    #[must_use]
    pub fn disappear(&self) -> Duration {
        Duration::from_millis(self.disappear_duration)
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            initial_translation: DEFAULT_INITIAL_TRANSLATION,
            appear_duration: DEFAULT_APPEAR_DURATION_MS,
            disappear_duration: DEFAULT_DISAPPEAR_DURATION_MS,
            easing: Easing::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct FontSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_regular: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_bold: Option<String>,
    pub title_size: f32,
    pub message_size: f32,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            family_regular: None,
            family_bold: None,
            title_size: DEFAULT_TITLE_FONT_SIZE,
            message_size: DEFAULT_MESSAGE_FONT_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct PaddingSettings {
    pub vertical: f32,
    pub horizontal: f32,
}

impl Default for PaddingSettings {
    fn default() -> Self {
        Self {
            vertical: DEFAULT_PADDING_VERTICAL,
            horizontal: DEFAULT_PADDING_HORIZONTAL,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ShadowSettings {
    pub color: String,
    pub opacity: f32,
    pub radius: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_SHADOW_COLOR.to_string(),
            opacity: DEFAULT_SHADOW_OPACITY,
            radius: DEFAULT_SHADOW_RADIUS,
            offset_x: DEFAULT_SHADOW_OFFSET_X,
            offset_y: DEFAULT_SHADOW_OFFSET_Y,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct AccessibilitySettings {
    pub allow_font_scaling: bool,
    pub title_max_lines: u32,
    pub message_max_lines: u32,
    pub haptic_feedback: HapticSetting,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            allow_font_scaling: true,
            title_max_lines: DEFAULT_TITLE_MAX_LINES,
            message_max_lines: DEFAULT_MESSAGE_MAX_LINES,
            haptic_feedback: HapticSetting::default(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Global toast settings shared by every entry of a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ToastConfig {
    /// Auto-dismiss delay in milliseconds; `0` keeps toasts until removed.
    pub time_to_dismiss: u64,

    /// Vertical gap between stacked toasts.
    pub spacing: f32,

    /// Legacy alias of `position.vertical`.
    pub placement: Placement,

    /// Legacy alias of `position.horizontal`.
    pub horizontal_position: HorizontalPosition,

    /// Distance between the stack and its screen edge.
    pub offset: f32,

    pub margin_horizontal: f32,

    #[serde(default)]
    pub bg_color: BgColors,

    #[serde(default)]
    pub position: Position,

    #[serde(default)]
    pub animation: AnimationSettings,

    #[serde(default)]
    pub font: FontSettings,

    #[serde(default)]
    pub padding: PaddingSettings,

    #[serde(default)]
    pub shadow: ShadowSettings,

    #[serde(default)]
    pub accessibility: AccessibilitySettings,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            bg_color: BgColors::default(),
            time_to_dismiss: DEFAULT_TIME_TO_DISMISS_MS,
            spacing: DEFAULT_SPACING,
            placement: Placement::Bottom,
            horizontal_position: HorizontalPosition::Center,
            position: Position::default(),
            offset: DEFAULT_OFFSET,
            margin_horizontal: DEFAULT_MARGIN_HORIZONTAL,
            animation: AnimationSettings::default(),
            font: FontSettings::default(),
            padding: PaddingSettings::default(),
            shadow: ShadowSettings::default(),
            accessibility: AccessibilitySettings::default(),
        }
    }
}

impl ToastConfig {
    /// Resolved vertical placement.
    #[must_use]
    pub fn vertical(&self) -> Placement {
        self.position.vertical
    }

    /// Resolved horizontal alignment.
    #[must_use]
    pub fn horizontal(&self) -> HorizontalPosition {
        self.position.horizontal
    }

    /// Sets the vertical placement and keeps the `placement` alias in step.
    pub fn set_vertical(&mut self, vertical: Placement) {
        self.position.vertical = vertical;
        self.placement = vertical;
    }

    /// Sets the horizontal alignment and keeps the `horizontal-position`
    /// alias in step.
    pub fn set_horizontal(&mut self, horizontal: HorizontalPosition) {
        self.position.horizontal = horizontal;
        self.horizontal_position = horizontal;
    }

    /// Returns a new config with `patch` merged over this one.
    #[must_use]
    pub fn merged(&self, patch: &ConfigPatch) -> Self {
        merge(self, patch)
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory: explicit override, then the environment
/// variable, then the platform default.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if base_dir.is_some() {
        return base_dir;
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (ToastConfig, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (ToastConfig, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default toast config");
                    return (ToastConfig::default(), Some(err.to_string()));
                }
            }
        }
    }
    (ToastConfig::default(), None)
}

/// Reads a patch from a TOML file without merging it.
pub fn load_patch_from_path(path: &Path) -> Result<ConfigPatch> {
    let content = fs::read_to_string(path)?;
    let patch: ConfigPatch = toml::from_str(&content)?;
    Ok(patch)
}

/// Loads configuration from a specific path, merged over the defaults.
pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let patch = load_patch_from_path(path)?;
    Ok(merge(&ToastConfig::default(), &patch))
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &ToastConfig) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &ToastConfig, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
