// SPDX-License-Identifier: MPL-2.0
//! Partial configuration and the structured merge that applies it.
//!
//! The config shape is closed, so the merge walks a fixed list of known
//! groups instead of recursing over arbitrary keys. Both inputs are only
//! borrowed; the result is always a fresh [`ToastConfig`].

use super::{
    AccessibilitySettings, AnimationSettings, BgColors, FontSettings, HorizontalPosition,
    PaddingSettings, Placement, Position, ShadowSettings, ToastConfig,
};
use crate::haptics::HapticSetting;
use crate::lifecycle::Easing;
use serde::{Deserialize, Serialize};

/// Patch for [`BgColors`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BgColorPatch {
    pub error: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub info: Option<String>,
}

/// Patch for [`Position`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PositionPatch {
    pub vertical: Option<Placement>,
    pub horizontal: Option<HorizontalPosition>,
}

/// Patch for [`AnimationSettings`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AnimationPatch {
    pub initial_translation: Option<f32>,
    pub appear_duration: Option<u64>,
    pub disappear_duration: Option<u64>,
    pub easing: Option<Easing>,
}

/// Patch for [`FontSettings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FontPatch {
    pub family_regular: Option<String>,
    pub family_bold: Option<String>,
    pub title_size: Option<f32>,
    pub message_size: Option<f32>,
}

/// Patch for [`PaddingSettings`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PaddingPatch {
    pub vertical: Option<f32>,
    pub horizontal: Option<f32>,
}

/// Patch for [`ShadowSettings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ShadowPatch {
    pub color: Option<String>,
    pub opacity: Option<f32>,
    pub radius: Option<f32>,
    pub offset_x: Option<f32>,
    pub offset_y: Option<f32>,
}

/// Patch for [`AccessibilitySettings`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AccessibilityPatch {
    pub allow_font_scaling: Option<bool>,
    pub title_max_lines: Option<u32>,
    pub message_max_lines: Option<u32>,
    pub haptic_feedback: Option<HapticSetting>,
}

/// A partial [`ToastConfig`]: every field is optional and absent fields
/// leave the base value untouched.
///
/// ```
/// use iced_toast::config::{ConfigPatch, ToastConfig};
///
/// let base = ToastConfig::default();
/// let patch = ConfigPatch::default().time_to_dismiss(5000).spacing(20.0);
/// let merged = base.merged(&patch);
///
/// assert_eq!(merged.time_to_dismiss, 5000);
/// assert_eq!(merged.spacing, 20.0);
/// assert_eq!(base.time_to_dismiss, 3000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConfigPatch {
    pub time_to_dismiss: Option<u64>,
    pub spacing: Option<f32>,
    pub placement: Option<Placement>,
    pub horizontal_position: Option<HorizontalPosition>,
    pub offset: Option<f32>,
    pub margin_horizontal: Option<f32>,
    pub bg_color: Option<BgColorPatch>,
    pub position: Option<PositionPatch>,
    pub animation: Option<AnimationPatch>,
    pub font: Option<FontPatch>,
    pub padding: Option<PaddingPatch>,
    pub shadow: Option<ShadowPatch>,
    pub accessibility: Option<AccessibilityPatch>,
}

impl ConfigPatch {
    #[must_use]
    pub fn time_to_dismiss(mut self, millis: u64) -> Self {
        self.time_to_dismiss = Some(millis);
        self
    }

    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    #[must_use]
    pub fn horizontal_position(mut self, horizontal: HorizontalPosition) -> Self {
        self.horizontal_position = Some(horizontal);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn bg_color(mut self, bg_color: BgColorPatch) -> Self {
        self.bg_color = Some(bg_color);
        self
    }

    #[must_use]
    pub fn position(mut self, position: PositionPatch) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn animation(mut self, animation: AnimationPatch) -> Self {
        self.animation = Some(animation);
        self
    }

    #[must_use]
    pub fn accessibility(mut self, accessibility: AccessibilityPatch) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    /// Returns true if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Combines two patches; fields set in `later` win.
    ///
    /// Merging `self` then `later` over a base yields the same config as
    /// merging `self.then(later)` once.
    #[must_use]
    pub fn then(&self, later: &ConfigPatch) -> ConfigPatch {
        ConfigPatch {
            time_to_dismiss: later.time_to_dismiss.or(self.time_to_dismiss),
            spacing: later.spacing.or(self.spacing),
            placement: later.placement.or(self.placement),
            horizontal_position: later.horizontal_position.or(self.horizontal_position),
            offset: later.offset.or(self.offset),
            margin_horizontal: later.margin_horizontal.or(self.margin_horizontal),
            bg_color: combine(&self.bg_color, &later.bg_color, |a, b| BgColorPatch {
                error: b.error.clone().or_else(|| a.error.clone()),
                success: b.success.clone().or_else(|| a.success.clone()),
                warning: b.warning.clone().or_else(|| a.warning.clone()),
                info: b.info.clone().or_else(|| a.info.clone()),
            }),
            position: self.then_position(later),
            animation: combine(&self.animation, &later.animation, |a, b| AnimationPatch {
                initial_translation: b.initial_translation.or(a.initial_translation),
                appear_duration: b.appear_duration.or(a.appear_duration),
                disappear_duration: b.disappear_duration.or(a.disappear_duration),
                easing: b.easing.or(a.easing),
            }),
            font: combine(&self.font, &later.font, |a, b| FontPatch {
                family_regular: b.family_regular.clone().or_else(|| a.family_regular.clone()),
                family_bold: b.family_bold.clone().or_else(|| a.family_bold.clone()),
                title_size: b.title_size.or(a.title_size),
                message_size: b.message_size.or(a.message_size),
            }),
            padding: combine(&self.padding, &later.padding, |a, b| PaddingPatch {
                vertical: b.vertical.or(a.vertical),
                horizontal: b.horizontal.or(a.horizontal),
            }),
            shadow: combine(&self.shadow, &later.shadow, |a, b| ShadowPatch {
                color: b.color.clone().or_else(|| a.color.clone()),
                opacity: b.opacity.or(a.opacity),
                radius: b.radius.or(a.radius),
                offset_x: b.offset_x.or(a.offset_x),
                offset_y: b.offset_y.or(a.offset_y),
            }),
            accessibility: combine(&self.accessibility, &later.accessibility, |a, b| {
                AccessibilityPatch {
                    allow_font_scaling: b.allow_font_scaling.or(a.allow_font_scaling),
                    title_max_lines: b.title_max_lines.or(a.title_max_lines),
                    message_max_lines: b.message_max_lines.or(a.message_max_lines),
                    haptic_feedback: b.haptic_feedback.or(a.haptic_feedback),
                }
            }),
        }
    }
}

impl ConfigPatch {
    /// A flat alias in `later` overrides a grouped axis in `self`, the same
    /// way it would when the two patches are merged one after the other.
    fn then_position(&self, later: &ConfigPatch) -> Option<PositionPatch> {
        let earlier = self.position.unwrap_or_default();
        let newer = later.position.unwrap_or_default();
        let combined = PositionPatch {
            vertical: newer
                .vertical
                .or(later.placement)
                .or(earlier.vertical),
            horizontal: newer
                .horizontal
                .or(later.horizontal_position)
                .or(earlier.horizontal),
        };
        (combined != PositionPatch::default()).then_some(combined)
    }
}

fn combine<T: Clone>(earlier: &Option<T>, later: &Option<T>, f: impl Fn(&T, &T) -> T) -> Option<T> {
    match (earlier, later) {
        (Some(a), Some(b)) => Some(f(a, b)),
        (Some(a), None) => Some(a.clone()),
        (None, Some(b)) => Some(b.clone()),
        (None, None) => None,
    }
}

/// Merges `patch` over `base` into a new config.
///
/// Scalars are replaced when set; each known group is merged field by field.
/// The grouped `position` resolves each axis from the patch's position, then
/// the patch's flat alias, then the base position. The flat aliases are kept
/// in step with the resolved position afterwards.
#[must_use]
pub fn merge(base: &ToastConfig, patch: &ConfigPatch) -> ToastConfig {
    let position_patch = patch.position.unwrap_or_default();
    let position = Position {
        vertical: position_patch
            .vertical
            .or(patch.placement)
            .unwrap_or(base.position.vertical),
        horizontal: position_patch
            .horizontal
            .or(patch.horizontal_position)
            .unwrap_or(base.position.horizontal),
    };

    ToastConfig {
        time_to_dismiss: patch.time_to_dismiss.unwrap_or(base.time_to_dismiss),
        spacing: patch.spacing.unwrap_or(base.spacing),
        placement: position.vertical,
        horizontal_position: position.horizontal,
        offset: patch.offset.unwrap_or(base.offset),
        margin_horizontal: patch.margin_horizontal.unwrap_or(base.margin_horizontal),
        bg_color: merge_bg_color(&base.bg_color, patch.bg_color.as_ref()),
        position,
        animation: merge_animation(&base.animation, patch.animation.as_ref()),
        font: merge_font(&base.font, patch.font.as_ref()),
        padding: merge_padding(&base.padding, patch.padding.as_ref()),
        shadow: merge_shadow(&base.shadow, patch.shadow.as_ref()),
        accessibility: merge_accessibility(&base.accessibility, patch.accessibility.as_ref()),
    }
}

fn merge_bg_color(base: &BgColors, patch: Option<&BgColorPatch>) -> BgColors {
    let Some(patch) = patch else {
        return base.clone();
    };
    BgColors {
        error: patch.error.clone().unwrap_or_else(|| base.error.clone()),
        success: patch.success.clone().unwrap_or_else(|| base.success.clone()),
        warning: patch.warning.clone().unwrap_or_else(|| base.warning.clone()),
        info: patch.info.clone().unwrap_or_else(|| base.info.clone()),
    }
}

fn merge_animation(base: &AnimationSettings, patch: Option<&AnimationPatch>) -> AnimationSettings {
    let Some(patch) = patch else {
        return *base;
    };
    AnimationSettings {
        initial_translation: patch.initial_translation.unwrap_or(base.initial_translation),
        appear_duration: patch.appear_duration.unwrap_or(base.appear_duration),
        disappear_duration: patch.disappear_duration.unwrap_or(base.disappear_duration),
        easing: patch.easing.unwrap_or(base.easing),
    }
}

fn merge_font(base: &FontSettings, patch: Option<&FontPatch>) -> FontSettings {
    let Some(patch) = patch else {
        return base.clone();
    };
    FontSettings {
        family_regular: patch
            .family_regular
            .clone()
            .or_else(|| base.family_regular.clone()),
        family_bold: patch.family_bold.clone().or_else(|| base.family_bold.clone()),
        title_size: patch.title_size.unwrap_or(base.title_size),
        message_size: patch.message_size.unwrap_or(base.message_size),
    }
}

fn merge_padding(base: &PaddingSettings, patch: Option<&PaddingPatch>) -> PaddingSettings {
    let Some(patch) = patch else {
        return *base;
    };
    PaddingSettings {
        vertical: patch.vertical.unwrap_or(base.vertical),
        horizontal: patch.horizontal.unwrap_or(base.horizontal),
    }
}

fn merge_shadow(base: &ShadowSettings, patch: Option<&ShadowPatch>) -> ShadowSettings {
    let Some(patch) = patch else {
        return base.clone();
    };
    ShadowSettings {
        color: patch.color.clone().unwrap_or_else(|| base.color.clone()),
        opacity: patch.opacity.unwrap_or(base.opacity),
        radius: patch.radius.unwrap_or(base.radius),
        offset_x: patch.offset_x.unwrap_or(base.offset_x),
        offset_y: patch.offset_y.unwrap_or(base.offset_y),
    }
}

fn merge_accessibility(
    base: &AccessibilitySettings,
    patch: Option<&AccessibilityPatch>,
) -> AccessibilitySettings {
    let Some(patch) = patch else {
        return *base;
    };
    AccessibilitySettings {
        allow_font_scaling: patch.allow_font_scaling.unwrap_or(base.allow_font_scaling),
        title_max_lines: patch.title_max_lines.unwrap_or(base.title_max_lines),
        message_max_lines: patch.message_max_lines.unwrap_or(base.message_max_lines),
        haptic_feedback: patch.haptic_feedback.unwrap_or(base.haptic_feedback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptics::HapticSetting;

    #[test]
    fn scalar_patch_wins_and_others_are_preserved() {
        let base = ToastConfig::default();
        let result = merge(&base, &ConfigPatch::default().time_to_dismiss(5000));

        assert_eq!(result.time_to_dismiss, 5000);
        assert_eq!(result.spacing, base.spacing);
    }

    #[test]
    fn merge_does_not_mutate_inputs() {
        let base = ToastConfig::default();
        let base_before = base.clone();
        let patch = ConfigPatch::default().time_to_dismiss(5000);
        let patch_before = patch.clone();

        let _ = merge(&base, &patch);

        assert_eq!(base, base_before);
        assert_eq!(patch, patch_before);
    }

    #[test]
    fn sequential_patches_equal_combined_patch() {
        let base = ToastConfig::default();
        let first = ConfigPatch::default().time_to_dismiss(5000);
        let second = ConfigPatch::default().spacing(20.0);
        let combined = ConfigPatch::default().time_to_dismiss(5000).spacing(20.0);

        let sequential = merge(&merge(&base, &first), &second);
        assert_eq!(sequential, merge(&base, &combined));
        assert_eq!(sequential, merge(&base, &first.then(&second)));
    }

    #[test]
    fn later_flat_alias_overrides_earlier_grouped_position() {
        let base = ToastConfig::default();
        let first = ConfigPatch::default().position(PositionPatch {
            vertical: Some(Placement::Top),
            horizontal: Some(HorizontalPosition::Left),
        });
        let second = ConfigPatch::default().placement(Placement::Bottom);

        let sequential = merge(&merge(&base, &first), &second);
        let combined = merge(&base, &first.then(&second));
        assert_eq!(sequential, combined);
        assert_eq!(combined.vertical(), Placement::Bottom);
        assert_eq!(combined.horizontal(), HorizontalPosition::Left);
    }

    #[test]
    fn bg_color_patch_leaves_untouched_kinds() {
        let base = ToastConfig::default();
        let patch = ConfigPatch::default().bg_color(BgColorPatch {
            success: Some("olive".to_string()),
            ..BgColorPatch::default()
        });

        let result = merge(&base, &patch);
        assert_eq!(result.bg_color.success, "olive");
        assert_eq!(result.bg_color.info, "#7890f0");
        assert_eq!(result.bg_color.error, base.bg_color.error);
    }

    #[test]
    fn font_patch_preserves_unpatched_fields() {
        let base = ToastConfig::default();
        let patch = ConfigPatch {
            font: Some(FontPatch {
                family_bold: Some("Helvetica-Bold".to_string()),
                message_size: Some(15.0),
                ..FontPatch::default()
            }),
            ..ConfigPatch::default()
        };

        let result = merge(&base, &patch);
        assert_eq!(result.font.family_bold.as_deref(), Some("Helvetica-Bold"));
        assert_eq!(result.font.family_regular, None);
        assert_eq!(result.font.message_size, 15.0);
        assert_eq!(result.font.title_size, base.font.title_size);
    }

    #[test]
    fn padding_shadow_and_accessibility_merge_per_field() {
        let base = ToastConfig::default();
        let patch = ConfigPatch {
            padding: Some(PaddingPatch {
                vertical: Some(20.0),
                horizontal: None,
            }),
            shadow: Some(ShadowPatch {
                opacity: Some(0.5),
                radius: Some(8.0),
                ..ShadowPatch::default()
            }),
            accessibility: Some(AccessibilityPatch {
                haptic_feedback: Some(HapticSetting::Light),
                ..AccessibilityPatch::default()
            }),
            ..ConfigPatch::default()
        };

        let result = merge(&base, &patch);
        assert_eq!(result.padding.vertical, 20.0);
        assert_eq!(result.padding.horizontal, 16.0);
        assert_eq!(result.shadow.opacity, 0.5);
        assert_eq!(result.shadow.radius, 8.0);
        assert_eq!(result.shadow.color, "#000");
        assert_eq!(result.accessibility.haptic_feedback, HapticSetting::Light);
        assert_eq!(result.accessibility.message_max_lines, 2);
    }

    #[test]
    fn flat_placement_alias_drives_position() {
        let base = ToastConfig::default();
        let result = merge(&base, &ConfigPatch::default().placement(Placement::Top));

        assert_eq!(result.position.vertical, Placement::Top);
        assert_eq!(result.placement, Placement::Top);
        assert_eq!(result.position.horizontal, HorizontalPosition::Center);
    }

    #[test]
    fn grouped_position_wins_over_flat_alias() {
        let base = ToastConfig::default();
        let patch = ConfigPatch::default()
            .placement(Placement::Bottom)
            .horizontal_position(HorizontalPosition::Left)
            .position(PositionPatch {
                vertical: Some(Placement::Top),
                horizontal: None,
            });

        let result = merge(&base, &patch);
        assert_eq!(result.position.vertical, Placement::Top);
        assert_eq!(result.position.horizontal, HorizontalPosition::Left);
        assert_eq!(result.placement, Placement::Top);
    }

    #[test]
    fn unrelated_patch_keeps_previous_position() {
        let base = ToastConfig::default();
        let top = merge(
            &base,
            &ConfigPatch::default().position(PositionPatch {
                vertical: Some(Placement::Top),
                horizontal: Some(HorizontalPosition::Right),
            }),
        );

        let result = merge(&top, &ConfigPatch::default().spacing(4.0));
        assert_eq!(result.vertical(), Placement::Top);
        assert_eq!(result.horizontal(), HorizontalPosition::Right);
    }

    #[test]
    fn empty_patch_is_identity() {
        let base = ToastConfig::default();
        let patch = ConfigPatch::default();
        assert!(patch.is_empty());
        assert_eq!(merge(&base, &patch), base);
    }

    #[test]
    fn patch_deserializes_from_partial_toml_and_ignores_unknown_keys() {
        let patch: ConfigPatch = toml::from_str(
            "time-to-dismiss = 0\nunknown-key = 1\n\n[animation]\neasing = \"linear\"\n",
        )
        .expect("patch should parse");

        assert_eq!(patch.time_to_dismiss, Some(0));
        assert_eq!(
            patch.animation.and_then(|a| a.easing),
            Some(Easing::Linear)
        );
        assert!(patch.bg_color.is_none());
    }
}
