// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity-level attribute parsing with darling.
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `name` | No | struct name | Entity name |
//! | `plural` | No | `None` | Plural display name |

use darling::FromDeriveInput;
use syn::{DeriveInput, Ident};

use super::FieldDef;

/// Entity-level attributes parsed from `#[entity(...)]`.
///
/// The attribute itself is optional; a bare `#[derive(Entity)]` describes
/// an entity named after the struct.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_named))]
pub struct EntityAttrs {
    /// Struct identifier (e.g., `User`).
    pub ident: Ident,

    /// Entity name override.
    #[darling(default)]
    pub name: Option<String>,

    /// Plural display name.
    #[darling(default)]
    pub plural: Option<String>
}

/// Complete parsed entity definition.
#[derive(Debug)]
pub struct EntityDef {
    /// Struct identifier.
    pub ident:  Ident,
    /// Entity name.
    pub name:   String,
    /// Plural display name.
    pub plural: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>
}

impl EntityDef {
    /// Parse entity definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to an enum, union, tuple struct or unit struct
    /// - Empty `name` or `plural`
    /// - Invalid or conflicting field markers
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;

        let mut errors = darling::Error::accumulator();

        let name = attrs.name.unwrap_or_else(|| attrs.ident.to_string());
        if name.trim().is_empty() {
            errors.push(darling::Error::custom("entity name must not be empty").with_span(&input.ident));
        }
        if attrs.plural.as_deref().is_some_and(|plural| plural.trim().is_empty()) {
            errors.push(darling::Error::custom("entity plural must not be empty").with_span(&input.ident));
        }

        let fields = match &input.data {
            syn::Data::Struct(data) => data
                .fields
                .iter()
                .filter_map(|field| errors.handle(FieldDef::from_field(field)))
                .collect(),
            _ => Vec::new()
        };

        errors.finish_with(Self {
            ident: attrs.ident,
            name,
            plural: attrs.plural,
            fields
        })
    }
}
