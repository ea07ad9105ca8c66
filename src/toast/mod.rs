// SPDX-License-Identifier: MPL-2.0
//! Toast entries and their identifiers.
//!
//! # Components
//!
//! - [`entry`] - `ToastData` (caller input), `ToastEntry` (stored toast), `ToastKind`
//! - [`id`] - `ToastId` generation
//!
//! # Usage
//!
//! ```
//! use iced_toast::toast::ToastData;
//!
//! let data = ToastData::success("Image saved")
//!     .with_title("Done")
//!     .with_duration(5000);
//! ```

mod entry;
mod id;

pub use entry::{PressCallback, ToastAccessibility, ToastData, ToastEntry, ToastKind, ToastStyle};
pub use id::{IdGenerator, RandomIds, SequentialIds, ToastId, FALLBACK_PREFIX};
