// SPDX-License-Identifier: MPL-2.0
//! iced overlay for a toast stack.
//!
//! Follows the Elm-style "state down, messages up" pattern: the host keeps a
//! [`ToastProvider`](crate::provider::ToastProvider) in its state, renders
//! [`view`] on top of its own content inside a `Stack`, routes
//! [`Message`]s to [`update`], and merges [`subscription`] into its own.
//!
//! - [`design_tokens`] - Fallback colors and spacing
//! - [`toast`] - Card rendering, render hook and tick subscription

pub mod design_tokens;
pub mod toast;

pub use toast::{
    kind_color, parse_color, subscription, update, view, view_with, Message, RenderContext,
    TICK_INTERVAL,
};
