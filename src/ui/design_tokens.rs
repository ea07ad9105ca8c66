// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants used by the toast renderer when the configuration does not
say otherwise.

## Organization

- **Palette**: Fallback colors per toast kind
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Radius**: Border radii

## Examples

```
use iced_toast::ui::design_tokens::{opacity, palette};
use iced::Color;

let faded = Color {
    a: opacity::SECONDARY_TEXT,
    ..palette::WHITE
};
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Kind fallbacks, matching the default `bg-color` table
    pub const ERROR: Color = Color::from_rgb(0.851, 0.125, 0.153); // #d92027
    pub const SUCCESS: Color = Color::from_rgb(0.208, 0.816, 0.729); // #35d0ba
    pub const WARNING: Color = Color::from_rgb(1.0, 0.569, 0.0); // #ff9100
    pub const INFO: Color = Color::from_rgb(0.471, 0.565, 0.941); // #7890f0
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SECONDARY_TEXT: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(radius::LG > radius::MD);
    assert!(opacity::OPAQUE > opacity::SECONDARY_TEXT);
    assert!(opacity::SECONDARY_TEXT > opacity::TRANSPARENT);
};
