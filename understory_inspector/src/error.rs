// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inspector error types.

use alloc::string::String;

use thiserror::Error;

/// Errors raised synchronously by inspector operations.
///
/// Every failure aborts the operation before it mutates session state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The inspector option cannot be resolved to an element.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The inspector selector matched no element.
    #[error("inspector element not found: {0}")]
    ElementNotFound(String),

    /// An option key, option value, hook name, or handler was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `start` was called on a running session.
    #[error("inspector is already running")]
    AlreadyRunning,
}
