// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Entity derive macro.
//!
//! Entity-level attributes (`#[entity(name = "User", plural = "Users")]`)
//! go through darling's `FromDeriveInput`. Field-level markers (`#[id]`,
//! `#[password]`, `#[belongs_to(Order)]`, `#[has_many(Order)]`) are parsed
//! by hand since they don't fit darling's key-value model.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── entity.rs  - Entity-level parsing (EntityAttrs, EntityDef)
//! └── field.rs   - Field-level parsing (FieldDef, FieldKind)
//! ```
//!
//! # Data Structures
//!
//! ```text
//! EntityDef
//! ├── ident: Ident            (struct name, e.g., "User")
//! ├── name: String            (entity name, defaults to ident)
//! ├── plural: Option<String>  (plural display name)
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident: Ident    (field name)
//!         └── kind: FieldKind (Id, Password, BelongsTo, HasMany, Inferred)
//! ```

mod entity;
mod field;

pub use entity::EntityDef;
pub use field::{FieldDef, FieldKind, InferredKind};

#[cfg(test)]
mod tests;
