// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while loading inventories and turning host variables into
//! typed configuration.

use thiserror::Error;

/// Errors that can occur while reading an inventory or classifying a host.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The inventory file could not be read.
    #[error("failed to read inventory '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The inventory is not valid YAML or does not follow the inventory layout.
    #[error("failed to parse inventory: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Host variables could not be mapped onto a typed configuration.
    #[error("invalid variables for host '{host}': {source}")]
    InvalidHostVars {
        host: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A host variable holds a value of the wrong shape (e.g. a list where a string is expected).
    #[error("host '{host}': variable '{key}' must be a {expected}")]
    InvalidVariable {
        host: String,
        key: String,
        expected: &'static str,
    },

    /// The `executor` variable names a backend that does not exist.
    #[error("host '{host}': unknown executor '{executor}' (expected 'local' or 'ssh')")]
    UnknownExecutor { host: String, executor: String },

    /// An extra variable passed on the command line is not of the form `key=value`.
    #[error("invalid extra variable '{0}' (expected key=value)")]
    InvalidExtraVar(String),
}
