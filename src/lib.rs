// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` manages a stack of transient toast notifications.
//!
//! The core is framework-agnostic: a [`store::ToastStore`] holds the ordered
//! toasts and their merged [`config::ToastConfig`], a [`runtime::ToastRuntime`]
//! drives each toast's entrance, auto-dismiss and exit in time, and
//! [`layout`] stacks them away from the screen edge. The [`ui`] module renders
//! the result with iced.
//!
//! ```
//! use iced_toast::provider::{use_toast, ToastProvider};
//! use iced_toast::toast::ToastData;
//!
//! let provider = ToastProvider::new(None);
//! let toast = use_toast(Some(&provider)).expect("inside a provider");
//! toast
//!     .add_toast(ToastData::success("Saved").with_title("Done"))
//!     .expect("provider is alive");
//! assert_eq!(provider.entries().len(), 1);
//! ```

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod config;
pub mod error;
pub mod haptics;
pub mod layout;
pub mod lifecycle;
pub mod provider;
pub mod runtime;
pub mod store;
pub mod toast;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
pub use provider::{use_toast, ToastHandle, ToastProvider};
pub use toast::{ToastData, ToastId, ToastKind};
