// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for entity and field parsing.
//!
//! | Category | Coverage |
//! |----------|----------|
//! | Defaults | bare derive, name from ident |
//! | Markers | id, password, belongs_to, has_many |
//! | Inference | type-driven kinds, `Option` look-through |
//! | Errors | conflicting markers, malformed relations, non-structs |

use syn::DeriveInput;

use super::{EntityDef, FieldKind, InferredKind};

fn parse(input: DeriveInput) -> EntityDef {
    EntityDef::from_derive_input(&input).unwrap()
}

fn kinds(entity: &EntityDef) -> Vec<(String, FieldKind)> {
    entity
        .fields
        .iter()
        .map(|field| (field.name(), field.kind.clone()))
        .collect()
}

#[test]
fn bare_derive_uses_struct_name() {
    let entity = parse(syn::parse_quote! {
        pub struct User {
            #[id]
            pub id: String,
        }
    });
    assert_eq!(entity.ident, "User");
    assert_eq!(entity.name, "User");
    assert_eq!(entity.plural, None);
}

#[test]
fn entity_attributes() {
    let entity = parse(syn::parse_quote! {
        #[entity(name = "Person", plural = "People")]
        pub struct PersonRow {
            pub name: String,
        }
    });
    assert_eq!(entity.name, "Person");
    assert_eq!(entity.plural.as_deref(), Some("People"));
}

#[test]
fn field_markers() {
    let entity = parse(syn::parse_quote! {
        pub struct User {
            #[id]
            pub id: uuid::Uuid,
            #[password]
            pub password: String,
            #[belongs_to(Team)]
            pub team: Team,
            #[has_many(Order)]
            pub orders: Vec<Order>,
        }
    });
    let kinds = kinds(&entity);
    assert_eq!(kinds[0], ("id".to_string(), FieldKind::Id));
    assert_eq!(kinds[1], ("password".to_string(), FieldKind::Password));
    assert!(matches!(&kinds[2].1, FieldKind::BelongsTo(related) if related == "Team"));
    assert!(matches!(&kinds[3].1, FieldKind::HasMany(related) if related == "Order"));
}

#[test]
fn unrelated_attributes_are_ignored() {
    let entity = parse(syn::parse_quote! {
        pub struct User {
            /// Login e-mail.
            #[allow(dead_code)]
            pub email: String,
        }
    });
    assert_eq!(entity.fields[0].kind, FieldKind::Inferred(InferredKind::Text));
}

#[test]
fn option_is_looked_through() {
    let entity = parse(syn::parse_quote! {
        pub struct User {
            pub nickname: Option<String>,
            pub age: Option<i64>,
            pub label: &'static str,
            pub tags: Vec<String>,
        }
    });
    let kinds: Vec<_> = entity.fields.iter().map(|field| field.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            FieldKind::Inferred(InferredKind::Text),
            FieldKind::Inferred(InferredKind::WholeNumber),
            FieldKind::Inferred(InferredKind::Text),
            FieldKind::Inferred(InferredKind::Other),
        ]
    );
}

#[test]
fn raw_identifiers_are_unraw_and_camel_cased() {
    let entity = parse(syn::parse_quote! {
        pub struct Event {
            pub r#type: String,
            pub starts_at: String,
        }
    });
    assert_eq!(entity.fields[0].name(), "type");
    assert_eq!(entity.fields[1].name(), "startsAt");
}

#[test]
fn conflicting_markers_fail() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct User {
            #[id]
            #[password]
            pub secret: String,
        }
    };
    let err = EntityDef::from_derive_input(&input).unwrap_err();
    assert!(err.to_string().contains("conflicting field markers"));
}

#[test]
fn relation_without_entity_fails() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Order {
            #[belongs_to]
            pub customer: String,
        }
    };
    let err = EntityDef::from_derive_input(&input).unwrap_err();
    assert!(err.to_string().contains("belongs_to"));
}

#[test]
fn empty_name_fails() {
    let input: DeriveInput = syn::parse_quote! {
        #[entity(name = "")]
        pub struct User {
            pub email: String,
        }
    };
    assert!(EntityDef::from_derive_input(&input).is_err());
}

#[test]
fn errors_are_accumulated() {
    let input: DeriveInput = syn::parse_quote! {
        #[entity(plural = " ")]
        pub struct Order {
            #[has_many]
            pub items: Vec<Item>,
        }
    };
    let err = EntityDef::from_derive_input(&input).unwrap_err();
    assert_eq!(err.len(), 2);
}

#[test]
fn enum_fails() {
    let input: DeriveInput = syn::parse_quote! {
        pub enum Status {
            Active,
        }
    };
    assert!(EntityDef::from_derive_input(&input).is_err());
}

#[test]
fn tuple_struct_fails() {
    let input: DeriveInput = syn::parse_quote! {
        pub struct Id(String);
    };
    assert!(EntityDef::from_derive_input(&input).is_err());
}
