// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Broker management clients.
//!
//! The [`ManagementClient`](crate::traits::ManagementClient) trait is the
//! seam; [`JolokiaClient`] implements it for Artemis.

mod jolokia;
mod result;

pub use jolokia::{HttpTransport, JolokiaClient, ReqwestTransport};
pub use result::{AddressRecord, ManagementResult, QueueRecord};
