// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Capabilities the host lends to plugins.

use std::path::Path;

use async_trait::async_trait;

use crate::{error::Result, model::ModelView, module::Module};

/// Host utility copying a static module set into the output tree.
#[async_trait]
pub trait StaticModuleSource: Send + Sync {
    /// Read every file under `source` and return it as a module rooted at
    /// `base_directory`.
    async fn import_static_modules(&self, source: &Path, base_directory: &str) -> Result<Vec<Module>>;
}

/// Output directories of the generated server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDirectories {
    /// Server root (`package.json` lives here).
    pub base_directory: String,
    /// Source root.
    pub src_directory:  String,
    /// Auth module directory.
    pub auth_directory: String
}

impl ServerDirectories {
    /// Directories with the auth module at `{src}/auth`.
    pub fn new(base_directory: impl Into<String>, src_directory: impl Into<String>) -> Self {
        let src_directory = src_directory.into();
        Self {
            base_directory: base_directory.into(),
            auth_directory: format!("{src_directory}/auth"),
            src_directory
        }
    }
}

/// Authentication scheme of the generated server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthProvider {
    /// Bearer tokens.
    Jwt,
    /// HTTP basic auth.
    Http
}

/// Settings of the resource being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceInfo {
    /// Authentication scheme.
    pub auth_provider: AuthProvider
}

/// Per-run context handed to every hook.
pub struct PluginContext<'a> {
    /// Entities and roles.
    pub model:                 &'a dyn ModelView,
    /// Static module import utility.
    pub statics:               &'a dyn StaticModuleSource,
    /// Output directories.
    pub directories:           ServerDirectories,
    /// Resource settings, absent for partial runs.
    pub resource:              Option<ResourceInfo>,
    /// Set by a before hook to suppress the host's default output.
    pub skip_default_behavior: bool
}

impl<'a> PluginContext<'a> {
    /// Context with no resource info and default behavior enabled.
    pub fn new(
        model: &'a dyn ModelView,
        statics: &'a dyn StaticModuleSource,
        directories: ServerDirectories
    ) -> Self {
        Self {
            model,
            statics,
            directories,
            resource: None,
            skip_default_behavior: false
        }
    }

    /// Attach resource settings.
    #[must_use]
    pub fn with_resource(mut self, resource: ResourceInfo) -> Self {
        self.resource = Some(resource);
        self
    }
}

impl std::fmt::Debug for PluginContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginContext")
            .field("entities", &self.model.entities().len())
            .field("directories", &self.directories)
            .field("resource", &self.resource)
            .field("skip_default_behavior", &self.skip_default_behavior)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_directory_is_under_src() {
        let dirs = ServerDirectories::new("server", "server/src");
        assert_eq!(dirs.auth_directory, "server/src/auth");
        assert_eq!(dirs.base_directory, "server");
    }
}
