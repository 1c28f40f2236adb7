// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Method to access-action mapping.
//!
//! Every generation target exposes a fixed set of methods. This module
//! enumerates them as [`MethodActionPair`]s, in template declaration order,
//! ready for the permission annotator.
//!
//! | Target | Pairs | Subject |
//! |--------|-------|---------|
//! | Controller | findMany, findOne, create, update, delete + one per to-many field | entity, related entity |
//! | Resolver | `users`, `user`, `createUser`, `updateUser`, `deleteUser` + one per to-many field | entity, related entity |
//! | To-many relation | find-many accessor (Search) | related entity |
//! | To-one relation | find-one accessor (View) | related entity |
//!
//! Method names come from the template mapping when the host registered
//! them and fall back to the conventional names otherwise.

use std::fmt;

use convert_case::{Case, Casing};

use crate::{
    error::{AugmentError, Result},
    model::{Entity, Field},
    template::TemplateMapping
};

/// Operation a generated method performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AccessAction {
    /// Insert one record.
    Create,
    /// Read one record by key.
    Read,
    /// Modify one record.
    Update,
    /// Remove one record.
    Delete,
    /// Read one record through a relation.
    View,
    /// List records.
    Search
}

impl AccessAction {
    /// Verb checked by the access-control library.
    ///
    /// View and Search are reads.
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read | Self::View | Self::Search => "read",
            Self::Update => "update",
            Self::Delete => "delete"
        }
    }

    /// Whether the response carries records that need attribute filtering.
    pub const fn filters_response(self) -> bool {
        matches!(self, Self::Read | Self::View | Self::Search)
    }

    /// Whether the request carries a payload that needs attribute validation.
    pub const fn validates_request(self) -> bool {
        matches!(self, Self::Create | Self::Update)
    }
}

impl fmt::Display for AccessAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Create => "Create",
            Self::Read => "Read",
            Self::Update => "Update",
            Self::Delete => "Delete",
            Self::View => "View",
            Self::Search => "Search"
        };
        f.write_str(name)
    }
}

/// One method to annotate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodActionPair {
    /// Method key in the located class.
    pub method_id: String,
    /// Required action.
    pub action:    AccessAction,
    /// Entity the permission is checked against.
    pub subject:   String
}

impl MethodActionPair {
    /// Build a pair.
    pub fn new(method_id: impl Into<String>, action: AccessAction, subject: impl Into<String>) -> Self {
        Self {
            method_id: method_id.into(),
            action,
            subject: subject.into()
        }
    }
}

/// API flavor of a relation accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    /// REST controller.
    Rest,
    /// GraphQL resolver.
    GraphQl
}

/// Generation target whose methods are being mapped.
#[derive(Debug, Clone, Copy)]
pub enum GenerationTarget<'a> {
    /// Entity controller base class.
    Controller,
    /// Entity resolver base class.
    Resolver,
    /// To-many relation accessor mixin.
    ToManyRelation {
        /// Relation field.
        field: &'a Field,
        /// Controller or resolver mixin.
        api:   Api
    },
    /// To-one relation accessor mixin.
    ToOneRelation {
        /// Relation field.
        field: &'a Field
    }
}

/// Mapping keys of the controller base template.
pub mod controller_keys {
    /// List method.
    pub const FIND_MANY: &str = "FIND_MANY_ENTITY_FUNCTION";
    /// Read-by-key method.
    pub const FIND_ONE: &str = "FIND_ONE_ENTITY_FUNCTION";
    /// Insert method.
    pub const CREATE: &str = "CREATE_ENTITY_FUNCTION";
    /// Update method.
    pub const UPDATE: &str = "UPDATE_ENTITY_FUNCTION";
    /// Delete method.
    pub const DELETE: &str = "DELETE_ENTITY_FUNCTION";
}

/// Mapping keys of the resolver base template.
pub mod resolver_keys {
    /// List query.
    pub const ENTITIES: &str = "ENTITIES_QUERY";
    /// Read-by-key query.
    pub const ENTITY: &str = "ENTITY_QUERY";
    /// Insert mutation.
    pub const CREATE: &str = "CREATE_MUTATION";
    /// Update mutation.
    pub const UPDATE: &str = "UPDATE_MUTATION";
    /// Delete mutation.
    pub const DELETE: &str = "DELETE_MUTATION";
}

/// Mapping key of the to-many accessor in relation templates.
pub const FIND_MANY_KEY: &str = "FIND_MANY";

/// Mapping key of the to-one accessor in relation templates.
pub const FIND_ONE_KEY: &str = "FIND_ONE";

/// Enumerate the method/action pairs of `target`.
///
/// # Errors
///
/// - [`AugmentError::MissingRelatedEntity`] for a relation field whose
///   target entity was never resolved
/// - [`AugmentError::MappingShape`] for a method-name mapping entry that is
///   not an identifier
pub fn map_methods(
    target: GenerationTarget<'_>,
    mapping: &TemplateMapping,
    entity: &Entity
) -> Result<Vec<MethodActionPair>> {
    match target {
        GenerationTarget::Controller => controller_pairs(mapping, entity),
        GenerationTarget::Resolver => resolver_pairs(mapping, entity),
        GenerationTarget::ToManyRelation {
            field,
            api
        } => {
            let default = match api {
                Api::Rest => find_many_method(field),
                Api::GraphQl => field.name.clone()
            };
            let method_id = named(mapping, FIND_MANY_KEY, default)?;
            let subject = related_entity(entity, field)?;
            Ok(vec![MethodActionPair::new(method_id, AccessAction::Search, subject)])
        }
        GenerationTarget::ToOneRelation {
            field
        } => {
            let method_id = named(mapping, FIND_ONE_KEY, field.name.clone())?;
            let subject = related_entity(entity, field)?;
            Ok(vec![MethodActionPair::new(method_id, AccessAction::View, subject)])
        }
    }
}

fn controller_pairs(mapping: &TemplateMapping, entity: &Entity) -> Result<Vec<MethodActionPair>> {
    let name = entity.name.as_str();
    let mut pairs = vec![
        MethodActionPair::new(
            named(mapping, controller_keys::FIND_MANY, "findMany".into())?,
            AccessAction::Search,
            name
        ),
        MethodActionPair::new(
            named(mapping, controller_keys::FIND_ONE, "findOne".into())?,
            AccessAction::Read,
            name
        ),
        MethodActionPair::new(
            named(mapping, controller_keys::CREATE, "create".into())?,
            AccessAction::Create,
            name
        ),
        MethodActionPair::new(
            named(mapping, controller_keys::UPDATE, "update".into())?,
            AccessAction::Update,
            name
        ),
        MethodActionPair::new(
            named(mapping, controller_keys::DELETE, "delete".into())?,
            AccessAction::Delete,
            name
        ),
    ];
    for field in entity.to_many_fields() {
        pairs.push(MethodActionPair::new(
            find_many_method(field),
            AccessAction::Search,
            related_entity(entity, field)?
        ));
    }
    Ok(pairs)
}

fn resolver_pairs(mapping: &TemplateMapping, entity: &Entity) -> Result<Vec<MethodActionPair>> {
    let name = entity.name.as_str();
    let single = name.to_case(Case::Camel);
    let plural = entity.plural().to_case(Case::Camel);
    let pascal = name.to_case(Case::Pascal);
    let mut pairs = vec![
        MethodActionPair::new(
            named(mapping, resolver_keys::ENTITIES, plural)?,
            AccessAction::Search,
            name
        ),
        MethodActionPair::new(
            named(mapping, resolver_keys::ENTITY, single)?,
            AccessAction::Read,
            name
        ),
        MethodActionPair::new(
            named(mapping, resolver_keys::CREATE, format!("create{pascal}"))?,
            AccessAction::Create,
            name
        ),
        MethodActionPair::new(
            named(mapping, resolver_keys::UPDATE, format!("update{pascal}"))?,
            AccessAction::Update,
            name
        ),
        MethodActionPair::new(
            named(mapping, resolver_keys::DELETE, format!("delete{pascal}"))?,
            AccessAction::Delete,
            name
        ),
    ];
    for field in entity.to_many_fields() {
        pairs.push(MethodActionPair::new(
            field.name.clone(),
            AccessAction::Search,
            related_entity(entity, field)?
        ));
    }
    Ok(pairs)
}

fn named(mapping: &TemplateMapping, key: &str, default: String) -> Result<String> {
    Ok(mapping
        .identifier(key)?
        .map_or(default, str::to_string))
}

fn find_many_method(field: &Field) -> String {
    format!("findMany{}", field.name.to_case(Case::Pascal))
}

fn related_entity<'f>(entity: &Entity, field: &'f Field) -> Result<&'f str> {
    field
        .related_entity()
        .ok_or_else(|| AugmentError::MissingRelatedEntity {
            entity: entity.name.clone(),
            field:  field.name.clone()
        })
}
