// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod component;
mod config;
mod executor;
mod management;

pub use component::{BrokerError, ComponentError, DestinationError};
pub use config::ConfigError;
pub use executor::ExecutorError;
pub use management::ManagementError;

use thiserror::Error;

/// Errors that abort building an [`Instance`](crate::Instance).
#[derive(Error, Debug)]
pub enum InstanceError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Component(#[from] ComponentError),
}
