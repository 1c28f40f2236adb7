// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `DescribeEntity` implementation generation.
//!
//! For
//!
//! ```rust,ignore
//! #[derive(Entity)]
//! #[entity(plural = "People")]
//! pub struct Person {
//!     #[id]
//!     pub id: String,
//!     #[belongs_to(Team)]
//!     pub team: Team,
//! }
//! ```
//!
//! the macro emits
//!
//! ```rust,ignore
//! impl ::auth_codegen_core::model::DescribeEntity for Person {
//!     fn describe() -> ::auth_codegen_core::model::Entity {
//!         ::auth_codegen_core::model::Entity::new("Person")
//!             .with_plural("People")
//!             .with_field(Field::new("id", DataType::Id))
//!             .with_field(Field::lookup("team", Some("Team"), false))
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{EntityDef, FieldDef, FieldKind, InferredKind};

/// Generate the `DescribeEntity` impl.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let ident = &entity.ident;
    let name = &entity.name;
    let plural = entity
        .plural
        .as_ref()
        .map(|plural| quote! { .with_plural(#plural) });
    let fields = entity.fields.iter().map(field_expr);

    quote! {
        impl ::auth_codegen_core::model::DescribeEntity for #ident {
            fn describe() -> ::auth_codegen_core::model::Entity {
                ::auth_codegen_core::model::Entity::new(#name)
                    #plural
                    #(.with_field(#fields))*
            }
        }
    }
}

fn field_expr(field: &FieldDef) -> TokenStream {
    let name = field.name();

    match &field.kind {
        FieldKind::BelongsTo(related) => lookup(&name, &related.to_string(), false),
        FieldKind::HasMany(related) => lookup(&name, &related.to_string(), true),
        kind => {
            let data_type = data_type(kind);
            quote! {
                ::auth_codegen_core::model::Field::new(
                    #name,
                    ::auth_codegen_core::model::DataType::#data_type
                )
            }
        }
    }
}

fn lookup(name: &str, related: &str, allow_multiple: bool) -> TokenStream {
    quote! {
        ::auth_codegen_core::model::Field::lookup(#name, ::core::option::Option::Some(#related), #allow_multiple)
    }
}

fn data_type(kind: &FieldKind) -> TokenStream {
    match kind {
        FieldKind::Id => quote! { Id },
        FieldKind::Password => quote! { Password },
        FieldKind::Inferred(InferredKind::Text) => quote! { SingleLineText },
        FieldKind::Inferred(InferredKind::Boolean) => quote! { Boolean },
        FieldKind::Inferred(InferredKind::WholeNumber) => quote! { WholeNumber },
        FieldKind::Inferred(InferredKind::DecimalNumber) => quote! { DecimalNumber },
        FieldKind::Inferred(InferredKind::DateTime) => quote! { DateTime },
        FieldKind::Inferred(InferredKind::Json) => quote! { Json },
        FieldKind::Inferred(InferredKind::Other) | FieldKind::BelongsTo(_) | FieldKind::HasMany(_) => {
            quote! { Other }
        }
    }
}
