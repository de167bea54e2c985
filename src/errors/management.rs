// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Transport and protocol errors inside a management client.
///
/// These never cross the `ManagementClient` boundary: clients fold them into a
/// failed `ManagementResult` so callers see one uniform envelope.
#[derive(Error, Debug)]
pub enum ManagementError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The management endpoint answered with an error status.
    #[error("management call returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("failed to decode management response: {0}")]
    Decode(#[from] serde_json::Error),
}
