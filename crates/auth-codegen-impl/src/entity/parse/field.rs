// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! A field carries at most one marker. Unmarked fields get their kind from
//! the last path segment of the type:
//!
//! | Type | Kind |
//! |------|------|
//! | `String`, `str` | `SingleLineText` |
//! | `bool` | `Boolean` |
//! | `i8`..`i128`, `u8`..`u128`, `isize`, `usize` | `WholeNumber` |
//! | `f32`, `f64` | `DecimalNumber` |
//! | `DateTime`, `NaiveDateTime`, `OffsetDateTime`, `SystemTime` | `DateTime` |
//! | `Value` | `Json` |
//! | anything else | `Other` |
//!
//! `Option<T>` and references are looked through.

use convert_case::{Case, Casing};
use syn::{Attribute, Field, GenericArgument, Ident, PathArguments, Type, ext::IdentExt};

/// Data kind inferred from a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferredKind {
    /// `String`, `str`.
    Text,
    /// `bool`.
    Boolean,
    /// Integer types.
    WholeNumber,
    /// Float types.
    DecimalNumber,
    /// Date and time types.
    DateTime,
    /// `serde_json::Value`.
    Json,
    /// Everything else.
    Other
}

impl InferredKind {
    /// Infer the kind of a field type.
    #[must_use]
    pub fn from_type(ty: &Type) -> Self {
        match ty {
            Type::Reference(reference) => Self::from_type(&reference.elem),
            Type::Paren(paren) => Self::from_type(&paren.elem),
            Type::Group(group) => Self::from_type(&group.elem),
            Type::Path(type_path) => {
                let Some(segment) = type_path.path.segments.last() else {
                    return Self::Other;
                };
                if segment.ident == "Option"
                    && let PathArguments::AngleBracketed(args) = &segment.arguments
                    && let Some(GenericArgument::Type(inner)) = args.args.first()
                {
                    return Self::from_type(inner);
                }
                Self::from_ident(&segment.ident.to_string())
            }
            _ => Self::Other
        }
    }

    fn from_ident(ident: &str) -> Self {
        match ident {
            "String" | "str" => Self::Text,
            "bool" => Self::Boolean,
            "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
            | "u128" | "usize" => Self::WholeNumber,
            "f32" | "f64" => Self::DecimalNumber,
            "DateTime" | "NaiveDateTime" | "OffsetDateTime" | "SystemTime" => Self::DateTime,
            "Value" => Self::Json,
            _ => Self::Other
        }
    }
}

/// Field kind after marker parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// `#[id]`.
    Id,
    /// `#[password]`.
    Password,
    /// `#[belongs_to(Entity)]`.
    BelongsTo(Ident),
    /// `#[has_many(Entity)]`.
    HasMany(Ident),
    /// No marker.
    Inferred(InferredKind)
}

/// Field definition with its parsed marker.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,
    /// Resolved kind.
    pub kind:  FieldKind
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// - Unnamed field
    /// - More than one marker on the field
    /// - `belongs_to`/`has_many` without a single entity identifier
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Entity fields must be named").with_span(field)
        })?;

        let mut marker: Option<(&Attribute, FieldKind)> = None;
        for attr in &field.attrs {
            let kind = if attr.path().is_ident("id") {
                FieldKind::Id
            } else if attr.path().is_ident("password") {
                FieldKind::Password
            } else if attr.path().is_ident("belongs_to") {
                FieldKind::BelongsTo(parse_related(attr)?)
            } else if attr.path().is_ident("has_many") {
                FieldKind::HasMany(parse_related(attr)?)
            } else {
                continue;
            };

            if let Some((first, _)) = marker {
                return Err(darling::Error::custom(format!(
                    "conflicting field markers: #[{}] and #[{}]",
                    marker_name(first),
                    marker_name(attr)
                ))
                .with_span(attr));
            }
            marker = Some((attr, kind));
        }

        let kind = marker.map_or_else(
            || FieldKind::Inferred(InferredKind::from_type(&field.ty)),
            |(_, kind)| kind
        );

        Ok(Self {
            ident,
            kind
        })
    }

    /// Field name as it appears in generated code (camelCase, raw prefix
    /// stripped).
    #[must_use]
    pub fn name(&self) -> String {
        self.ident.unraw().to_string().to_case(Case::Camel)
    }
}

/// Parse `#[belongs_to(Entity)]` / `#[has_many(Entity)]`.
fn parse_related(attr: &Attribute) -> darling::Result<Ident> {
    attr.parse_args::<Ident>().map_err(|err| {
        darling::Error::custom(format!(
            "#[{}] expects a single entity name, e.g. #[{}(User)]: {err}",
            marker_name(attr),
            marker_name(attr)
        ))
        .with_span(attr)
    })
}

fn marker_name(attr: &Attribute) -> String {
    attr.path()
        .get_ident()
        .map(ToString::to_string)
        .unwrap_or_default()
}
