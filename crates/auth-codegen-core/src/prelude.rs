// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use auth_codegen_core::prelude::*;
//! ```

pub use crate::{
    AugmentError, Result,
    action::{AccessAction, GenerationTarget, MethodActionPair, map_methods},
    annotate::PermissionAnnotator,
    ast::Program,
    async_trait,
    hooks::{
        AuthPlugin, AuthProvider, EventName, EventParams, HookRegistry, Plugin, PluginContext,
        ResourceInfo, ServerDirectories, StaticModuleSource
    },
    model::{DataType, DescribeEntity, Entity, Field, Model, ModelView},
    module::Module,
    settings::{AuthSettings, Possession},
    template::{TemplateMapping, interpolate}
};
