// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Plugin contract and sequential dispatch.

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::{EventName, EventParams, Events, PluginContext};
use crate::{error::Result, module::Module};

/// Code generation plugin.
///
/// [`Plugin::register`] declares which phases of which events the plugin
/// handles; the dispatcher only calls `before` / `after` for those.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Plugin name for diagnostics.
    fn name(&self) -> &str;

    /// Registration table.
    fn register(&self) -> Events;

    /// Mutate event parameters ahead of the host's default serialization.
    fn before(&self, _context: &mut PluginContext<'_>, params: EventParams) -> Result<EventParams> {
        Ok(params)
    }

    /// Extend the finalized module set of `event`.
    async fn after(
        &self,
        _context: &PluginContext<'_>,
        _event: EventName,
        modules: Vec<Module>
    ) -> Result<Vec<Module>> {
        Ok(modules)
    }
}

/// Ordered set of plugins, run one after another.
#[derive(Default)]
pub struct HookRegistry {
    plugins: Vec<Box<dyn Plugin>>
}

impl HookRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plugin; plugins run in insertion order.
    #[must_use]
    pub fn with_plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugin is registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Thread `params` through every plugin registered for its before phase.
    ///
    /// # Errors
    ///
    /// The first plugin error aborts the chain.
    #[instrument(skip_all, fields(event = %params.event()))]
    pub fn run_before(&self, context: &mut PluginContext<'_>, mut params: EventParams) -> Result<EventParams> {
        let event = params.event();
        for plugin in &self.plugins {
            if !registered(plugin.as_ref(), event, |phases| phases.before) {
                continue;
            }
            debug!(plugin = plugin.name(), "before hook");
            params = plugin.before(context, params)?;
        }
        Ok(params)
    }

    /// Thread `modules` through every plugin registered for the after phase
    /// of `event`. Empty sentinel modules are dropped from the result.
    ///
    /// # Errors
    ///
    /// The first plugin error aborts the chain.
    #[instrument(skip(self, context, modules))]
    pub async fn run_after(
        &self,
        context: &PluginContext<'_>,
        event: EventName,
        mut modules: Vec<Module>
    ) -> Result<Vec<Module>> {
        for plugin in &self.plugins {
            if !registered(plugin.as_ref(), event, |phases| phases.after) {
                continue;
            }
            debug!(plugin = plugin.name(), "after hook");
            modules = plugin.after(context, event, modules).await?;
        }
        modules.retain(|module| !module.is_empty());
        Ok(modules)
    }
}

fn registered(plugin: &dyn Plugin, event: EventName, phase: impl Fn(&super::Phases) -> bool) -> bool {
    plugin.register().get(&event).is_some_and(phase)
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.plugins.iter().map(|plugin| plugin.name()).collect();
        f.debug_struct("HookRegistry").field("plugins", &names).finish()
    }
}
