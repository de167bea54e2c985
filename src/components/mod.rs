// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Components under test.
//!
//! A [`Component`] is a broker, a router or a client bound to the node it
//! runs on. Discovery builds them through one [`ComponentFactory`] per kind,
//! keyed by that kind's closed set of implementations:
//!
//! | Kind   | Implementations                | Factory output  |
//! |--------|--------------------------------|-----------------|
//! | broker | `artemis`, `qpid`              | one [`Broker`]  |
//! | router | `dispatch`                     | one [`Router`]  |
//! | client | `python`, `java`, `nodejs`     | `Vec<Client>`   |

pub mod broker;
pub mod client;
pub mod router;

mod component;
mod factory;
mod implementation;
mod protocols;

pub use broker::{Broker, BrokerFactory};
pub use client::{Client, ClientFactory, ClientOptions, ClientRole};
pub use component::{Component, ComponentKind};
pub use factory::{ComponentContext, ComponentFactories, ComponentFactory, Constructor};
pub use implementation::{
    BrokerImplementation, ClientImplementation, ImplementationKey, RouterImplementation,
};
pub use protocols::Protocol;
pub use router::{Router, RouterFactory};
