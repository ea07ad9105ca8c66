// SPDX-License-Identifier: MPL-2.0
//! iced rendering of a toast stack.
//!
//! Each toast is drawn as a colored card inside a full-screen [`Stack`],
//! pushed away from its anchor edge by the offset the runtime computed and
//! faded by its current animation frame.

use super::design_tokens::{opacity, palette, radius, spacing};
use crate::config::{Placement, ToastConfig};
use crate::layout::{display_order, ScreenMetrics};
use crate::provider::ToastProvider;
use crate::runtime::PlacedToast;
use crate::toast::{ToastEntry, ToastId, ToastKind, ToastStyle};
use iced::alignment::{Horizontal, Vertical};
use iced::font::{self, Font};
use iced::widget::{container, mouse_area, sensor, text, Column, Container, Stack, Text};
use iced::{
    Background, Border, Color, Element, Length, Padding, Shadow, Size, Subscription, Theme,
    Vector,
};
use std::time::{Duration, Instant};

/// Interval between animation ticks while toasts are moving.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

const TITLE_FONT: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Messages produced by the toast overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation/timer tick.
    Tick(Instant),
    /// A toast card was pressed.
    Pressed(ToastId),
    /// The host measured a rendered card.
    Measured(ToastId, f32),
}

/// Applies an overlay message. Returns `true` when a redraw is needed.
pub fn update(provider: &mut ToastProvider, message: Message) -> bool {
    match message {
        Message::Tick(now) => provider.tick(now),
        Message::Pressed(id) => provider.press(&id),
        Message::Measured(id, height) => provider.measured(&id, height),
    }
}

/// Ticks at [`TICK_INTERVAL`] while anything is pending.
pub fn subscription(provider: &ToastProvider) -> Subscription<Message> {
    if provider.is_active() {
        iced::time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// What a custom render hook gets to see about one toast.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'r> {
    pub entry: &'r ToastEntry,
    /// Position in list order.
    pub index: usize,
    pub placed: &'r PlacedToast,
    pub config: &'r ToastConfig,
}

/// Renders the overlay with the default cards.
pub fn view<'a>(provider: &ToastProvider, metrics: &ScreenMetrics) -> Element<'a, Message> {
    view_with(provider, metrics, |_, default| default)
}

/// Renders the overlay, letting `render` replace or wrap each default card.
///
/// Positioning, press handling and height measurement are applied around
/// whatever `render` returns.
pub fn view_with<'a, F>(
    provider: &ToastProvider,
    metrics: &ScreenMetrics,
    render: F,
) -> Element<'a, Message>
where
    F: Fn(RenderContext<'_>, Element<'a, Message>) -> Element<'a, Message>,
{
    let config = provider.config();
    let entries = provider.entries();
    let placed = provider.layout(metrics);

    if placed.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let placement = config.vertical();
    let anchor = match placement {
        Placement::Top => Vertical::Top,
        Placement::Bottom => Vertical::Bottom,
    };

    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);
    for slot in display_order(&placed, placement) {
        let Some(entry) = entries.get(slot.index).filter(|e| e.id() == &slot.id) else {
            continue;
        };
        let default_card = card(entry, slot, &config);
        let content = render(
            RenderContext {
                entry,
                index: slot.index,
                placed: slot,
                config: &config,
            },
            default_card,
        );

        let measured = sensor(content)
            .key(slot.id.clone())
            .on_show(measure(&slot.id))
            .on_resize(measure(&slot.id));

        stack = stack.push(
            Container::new(mouse_area(measured).on_press(Message::Pressed(slot.id.clone())))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(anchor_padding(placement, slot))
                .align_x(Horizontal::Left)
                .align_y(anchor),
        );
    }
    stack.into()
}

/// Reports the rendered size of a card as its stack height.
fn measure(id: &ToastId) -> impl Fn(Size) -> Message + 'static {
    let id = id.clone();
    move |size| Message::Measured(id.clone(), size.height)
}

/// Builds the default card for one toast.
fn card<'a>(
    entry: &ToastEntry,
    placed: &PlacedToast,
    config: &ToastConfig,
) -> Element<'a, Message> {
    let alpha = placed.frame.opacity.clamp(0.0, 1.0);
    let style = entry.style();
    let title_size = style.title_font_size.unwrap_or(config.font.title_size);
    let message_size = style.message_font_size.unwrap_or(config.font.message_size);

    let mut body = Column::new().spacing(spacing::XXS);
    if let Some(title) = entry.title() {
        body = body.push(
            Text::new(title.to_string())
                .size(title_size)
                .font(TITLE_FONT)
                .color(Color { a: alpha, ..palette::WHITE }),
        );
    }
    body = body.push(
        Text::new(entry.message().to_string())
            .size(message_size)
            .color(Color {
                a: alpha * opacity::SECONDARY_TEXT,
                ..palette::WHITE
            }),
    );

    let background = background_color(entry, config);
    let corner = style.border_radius.unwrap_or(radius::LG);
    let shadow = card_shadow(config, alpha);

    Container::new(body)
        .width(Length::Fixed(placed.horizontal.width.max(0.0)))
        .padding(card_padding(config, style))
        .style(move |_theme: &Theme| card_style(background, alpha, corner, shadow))
        .into()
}

/// Parses `#rgb`, `#rrggbb`, `#rrggbbaa` and a few CSS color names.
#[must_use]
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return value.parse::<Color>().ok();
    }
    let named = match value.to_ascii_lowercase().as_str() {
        "black" => palette::BLACK,
        "white" => palette::WHITE,
        "transparent" => Color::TRANSPARENT,
        "red" => Color::from_rgb8(255, 0, 0),
        "green" => Color::from_rgb8(0, 128, 0),
        "blue" => Color::from_rgb8(0, 0, 255),
        "orange" => Color::from_rgb8(255, 165, 0),
        "olive" => Color::from_rgb8(128, 128, 0),
        "crimson" => Color::from_rgb8(220, 20, 60),
        "gray" | "grey" => Color::from_rgb8(128, 128, 128),
        _ => return None,
    };
    Some(named)
}

/// Built-in color for a toast kind.
#[must_use]
pub fn kind_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Error => palette::ERROR,
        ToastKind::Success => palette::SUCCESS,
        ToastKind::Warning => palette::WARNING,
        ToastKind::Info => palette::INFO,
    }
}

/// Card background: the entry override, then the configured kind color,
/// then the built-in kind color.
fn background_color(entry: &ToastEntry, config: &ToastConfig) -> Color {
    entry
        .style()
        .background_color
        .as_deref()
        .and_then(parse_color)
        .or_else(|| parse_color(config.bg_color.for_kind(entry.kind())))
        .unwrap_or_else(|| kind_color(entry.kind()))
}

fn card_padding(config: &ToastConfig, style: &ToastStyle) -> Padding {
    let vertical = style
        .padding
        .and_then(|p| p.vertical)
        .unwrap_or(config.padding.vertical);
    let horizontal = style
        .padding
        .and_then(|p| p.horizontal)
        .unwrap_or(config.padding.horizontal);
    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

fn card_shadow(config: &ToastConfig, alpha: f32) -> Shadow {
    let base = parse_color(&config.shadow.color).unwrap_or(palette::BLACK);
    Shadow {
        color: Color {
            a: config.shadow.opacity * alpha,
            ..base
        },
        offset: Vector {
            x: config.shadow.offset_x,
            y: config.shadow.offset_y,
        },
        blur_radius: config.shadow.radius,
    }
}

fn card_style(background: Color, alpha: f32, corner: f32, shadow: Shadow) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: background.a * alpha,
            ..background
        })),
        border: Border {
            radius: corner.into(),
            ..Border::default()
        },
        shadow,
        text_color: Some(Color {
            a: alpha,
            ..palette::WHITE
        }),
        ..Default::default()
    }
}

/// Distance from the anchor edge plus the animated displacement.
///
/// Positive `translate_y` moves a card down, which pushes top-anchored cards
/// away from the edge and bottom-anchored cards towards it.
fn anchor_padding(placement: Placement, placed: &PlacedToast) -> Padding {
    let shift = placed.frame.translate_y;
    let (top, bottom) = match placement {
        Placement::Top => ((placed.offset + shift).max(0.0), 0.0),
        Placement::Bottom => (0.0, (placed.offset - shift).max(0.0)),
    };
    Padding {
        top,
        right: 0.0,
        bottom,
        left: placed.horizontal.x.max(0.0),
    }
}
