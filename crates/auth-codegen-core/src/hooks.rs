// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Host lifecycle hooks.
//!
//! The host drives generation through named events. A [`Plugin`] registers
//! for the phases it handles:
//!
//! - **before**: receives the event parameters (template tree, mapping,
//!   entity) with exclusive access, mutates them and hands them back ahead of
//!   the host's default serialization
//! - **after**: receives the event's finalized modules and returns the set
//!   extended with its own
//!
//! [`AuthPlugin`] is the access-control plugin; [`HookRegistry`] runs any
//! number of plugins in order.
//!
//! # Module Structure
//!
//! ```text
//! hooks.rs
//! hooks/
//! ├── events.rs   — EventName, Phases, Events
//! ├── params.rs   — EventParams and per-event parameter structs
//! ├── context.rs  — PluginContext and host capabilities
//! ├── plugin.rs   — Plugin trait, HookRegistry
//! └── auth.rs     — AuthPlugin
//! ```
//!
//! # Pipeline
//!
//! Every template handler follows the same path:
//!
//! ```text
//! Received ─► Interpolated ─► Located ─► Mapped ─► Annotated ─► ImportsInjected ─► Returned
//!                               │
//!                               └─ absent ──────────────────────────────────────► Returned
//! ```

mod auth;
mod context;
mod events;
mod params;
mod plugin;

pub use auth::AuthPlugin;
pub use context::{AuthProvider, PluginContext, ResourceInfo, ServerDirectories, StaticModuleSource};
pub use events::{EventName, Events, Phases};
pub use params::{
    ClassTemplateParams, DotEnvParams, EventParams, ModuleBaseParams, PackageJsonParams,
    RelationParams, ServiceParams
};
pub use plugin::{HookRegistry, Plugin};
