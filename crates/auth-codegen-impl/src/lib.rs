// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Proc-macro implementation for `auth-codegen`.
//!
//! Depend on `auth-codegen` instead; it re-exports [`macro@Entity`] next to
//! the `DescribeEntity` trait the macro implements.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod entity;

use proc_macro::TokenStream;

/// Derive a static entity description for the auth hooks.
///
/// Implements `auth_codegen_core::model::DescribeEntity` so the struct can
/// be registered in a `Model` with `Model::with_described::<T>()`.
///
/// # Entity Attributes
///
/// | Attribute | Required | Default | Description |
/// |-----------|----------|---------|-------------|
/// | `name` | No | struct name | Entity name used in generated paths and grants |
/// | `plural` | No | `{name}s` | Plural display name |
///
/// # Field Attributes
///
/// | Attribute | Data kind |
/// |-----------|-----------|
/// | `#[id]` | `Id` |
/// | `#[password]` | `Password`; triggers credential hashing in services |
/// | `#[belongs_to(Entity)]` | to-one `Lookup` on `Entity` |
/// | `#[has_many(Entity)]` | to-many `Lookup` on `Entity` |
///
/// Unmarked fields take their kind from the type: `String` is
/// `SingleLineText`, `bool` is `Boolean`, integers are `WholeNumber`,
/// floats are `DecimalNumber`, `DateTime` types are `DateTime`, `Value` is
/// `Json`. `Option<T>` is looked through. Anything else is `Other`.
///
/// Field names are converted to camelCase, the naming the generated
/// TypeScript uses.
///
/// # Example
///
/// ```rust,ignore
/// use auth_codegen::{Entity, model::Model};
///
/// #[derive(Entity)]
/// #[entity(name = "User", plural = "Users")]
/// pub struct User {
///     #[id]
///     pub id: String,
///     pub email: String,
///     #[password]
///     pub password: String,
///     #[has_many(Order)]
///     pub orders: Vec<Order>,
/// }
///
/// let model = Model::new().with_described::<User>();
/// ```
#[proc_macro_derive(Entity, attributes(entity, id, password, belongs_to, has_many))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive(input)
}
