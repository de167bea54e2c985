// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::components::factory::{ComponentContext, ComponentFactory};
use crate::components::router::Router;
use crate::components::RouterImplementation;
use crate::config::RouterConfig;
use crate::errors::ComponentError;

pub type RouterFactory = ComponentFactory<RouterImplementation, RouterConfig, Router>;

impl ComponentFactory<RouterImplementation, RouterConfig, Router> {
    pub fn with_defaults() -> Self {
        Self::new().with_constructor(RouterImplementation::Dispatch, router)
    }
}

fn router(
    implementation: RouterImplementation,
    ctx: ComponentContext<RouterConfig>,
) -> Result<Router, ComponentError> {
    Ok(Router::new(
        implementation,
        ctx.node,
        ctx.executor,
        ctx.service,
        ctx.config,
    ))
}
