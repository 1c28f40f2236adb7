// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core of auth-codegen.
//!
//! Injects role and attribute based access control into generated NestJS
//! server templates. The host generator parses its base templates into a
//! [`ast::Program`], hands each one to the registered hooks, and serializes
//! whatever comes back. This crate owns the transformation in between.
//!
//! # Overview
//!
//! | Stage | Module | Purpose |
//! |-------|--------|---------|
//! | Interpolate | [`template`] | resolve `${KEY}` slots from the template mapping |
//! | Locate | [`locate`] | find the generated class and its methods |
//! | Map | [`action`] | list (method, action, subject) pairs per target |
//! | Annotate | [`annotate`] | attach `UseRoles` and ACL interceptor decorators |
//! | Inject | [`inject`] | imports, constructor dependencies, `super(...)` args |
//! | Credentials | [`credential`] | password hashing wiring for services |
//! | Dispatch | [`hooks`] | lifecycle events, [`hooks::AuthPlugin`] |
//!
//! Supporting modules: [`model`] (read-only host model), [`settings`]
//! (installation settings), [`grants`] (role grants file), [`module`]
//! (output modules and import paths), [`error`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use auth_codegen_core::prelude::*;
//!
//! let plugin = AuthPlugin::from_settings(host_settings)?;
//! let registry = HookRegistry::new().with_plugin(plugin);
//!
//! let mut context = PluginContext::new(&model, &statics, ServerDirectories::new("server", "server/src"));
//! let params = registry.run_before(&mut context, EventParams::ControllerBase(params))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod annotate;
pub mod ast;
pub mod credential;
pub mod error;
pub mod grants;
pub mod hooks;
pub mod inject;
pub mod locate;
pub mod model;
pub mod module;
pub mod prelude;
pub mod settings;
pub mod template;

/// Re-export async_trait for [`hooks::StaticModuleSource`] and
/// [`hooks::Plugin`] implementations.
pub use async_trait::async_trait;
pub use error::{AugmentError, Result};
