// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for template augmentation.
//!
//! Only contract breaches are errors. A template that lacks the class or
//! method a step is looking for is not an error; those steps return `None`
//! or `false` and the pipeline moves on.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = AugmentError> = std::result::Result<T, E>;

/// Failure raised while augmenting a template or assembling modules.
#[derive(Debug, Error)]
pub enum AugmentError {
    /// No constructor in the class that was asked to receive a dependency.
    #[error("class `{class}` has no constructor to inject `{dependency}` into")]
    MissingConstructor {
        /// Class the dependency was meant for.
        class:      String,
        /// Name of the parameter that could not be added.
        dependency: String
    },

    /// No `super(...)` call in any constructor of the template.
    #[error("no superclass constructor call found to pass `{identifier}` to")]
    MissingSuperCall {
        /// Identifier that could not be threaded through.
        identifier: String
    },

    /// A relation field reached the mapper without its target entity.
    #[error("relation field `{field}` of entity `{entity}` has no related entity")]
    MissingRelatedEntity {
        /// Owning entity name.
        entity: String,
        /// Relation field name.
        field:  String
    },

    /// A template mapping entry exists but has the wrong node shape.
    #[error("template mapping `{key}` must be {expected}")]
    MappingShape {
        /// Mapping key.
        key:      String,
        /// Human readable description of the accepted shape.
        expected: &'static str
    },

    /// Plugin installation settings could not be decoded.
    #[error("invalid auth plugin settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// The grants file could not be serialized.
    #[error("grants serialization failed: {0}")]
    GrantsSerialization(#[source] serde_json::Error),

    /// Static module import failed on the host side.
    #[error("static modules import from `{source_path}` failed: {message}")]
    StaticImport {
        /// Directory that was being imported.
        source_path: String,
        /// Host supplied description.
        message:     String
    }
}
