// SPDX-License-Identifier: MPL-2.0
//! Error types for the toast library.
//!
//! The stack operations themselves are total: unknown ids are no-ops and
//! missing optional fields fall back to defaults. Errors only surface for
//! capability misuse and for configuration file persistence.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A toast handle was used without a live provider backing it.
    #[error("use_toast must be used within a ToastProvider")]
    OutsideProvider,

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
