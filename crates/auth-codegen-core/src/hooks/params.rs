// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Event parameters handed to "before" hooks.
//!
//! Each template-carrying event owns its tree and mapping; the handler gets
//! exclusive access for the duration of the call and returns them.

use super::EventName;
use crate::{
    ast::Program,
    model::{Entity, Field},
    settings::EnvVariable,
    template::TemplateMapping
};

/// `CreateServerDotEnv` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotEnvParams {
    /// Variables written to `.env`.
    pub env_variables: Vec<EnvVariable>
}

/// `CreateServerPackageJson` parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageJsonParams {
    /// Property patches merged into `package.json`.
    pub update_properties: Vec<serde_json::Value>
}

/// `CreateEntityModuleBase` parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleBaseParams {
    /// Entity name.
    pub entity_name:      String,
    /// Module template.
    pub template:         Program,
    /// Template mapping; carries `IMPORTS_ARRAY` and `EXPORT_ARRAY`.
    pub template_mapping: TemplateMapping
}

/// Parameters of a base-class template (controller, resolver, service base).
#[derive(Debug, Clone, PartialEq)]
pub struct ClassTemplateParams {
    /// Owning entity.
    pub entity:           Entity,
    /// Symbolic id of the generated class.
    pub class_id:         String,
    /// Class template.
    pub template:         Program,
    /// Template mapping.
    pub template_mapping: TemplateMapping
}

/// `CreateEntityService` parameters.
///
/// Carries only the entity name; the entity is looked up in the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceParams {
    /// Entity name as used in file paths.
    pub entity_name:      String,
    /// Symbolic id of the service class.
    pub class_id:         String,
    /// Service template.
    pub template:         Program,
    /// Template mapping.
    pub template_mapping: TemplateMapping
}

/// Parameters of a relation-methods template.
///
/// The template's class is always the relation mixin.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationParams {
    /// Owning entity.
    pub entity:           Entity,
    /// Relation field.
    pub field:            Field,
    /// Mixin template.
    pub template:         Program,
    /// Template mapping; carries `FIND_MANY` or `FIND_ONE`.
    pub template_mapping: TemplateMapping
}

/// Parameters of any "before" event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventParams {
    /// `CreateServerDotEnv`
    ServerDotEnv(DotEnvParams),
    /// `CreateServerPackageJson`
    ServerPackageJson(PackageJsonParams),
    /// `CreateEntityModuleBase`
    EntityModuleBase(ModuleBaseParams),
    /// `CreateEntityControllerBase`
    ControllerBase(ClassTemplateParams),
    /// `CreateEntityControllerToManyRelationMethods`
    ControllerToManyRelation(RelationParams),
    /// `CreateEntityResolverBase`
    ResolverBase(ClassTemplateParams),
    /// `CreateEntityResolverToOneRelationMethods`
    ResolverToOneRelation(RelationParams),
    /// `CreateEntityResolverToManyRelationMethods`
    ResolverToManyRelation(RelationParams),
    /// `CreateEntityService`
    Service(ServiceParams),
    /// `CreateEntityServiceBase`
    ServiceBase(ClassTemplateParams)
}

impl EventParams {
    /// Event these parameters belong to.
    pub const fn event(&self) -> EventName {
        match self {
            Self::ServerDotEnv(_) => EventName::CreateServerDotEnv,
            Self::ServerPackageJson(_) => EventName::CreateServerPackageJson,
            Self::EntityModuleBase(_) => EventName::CreateEntityModuleBase,
            Self::ControllerBase(_) => EventName::CreateEntityControllerBase,
            Self::ControllerToManyRelation(_) => {
                EventName::CreateEntityControllerToManyRelationMethods
            }
            Self::ResolverBase(_) => EventName::CreateEntityResolverBase,
            Self::ResolverToOneRelation(_) => EventName::CreateEntityResolverToOneRelationMethods,
            Self::ResolverToManyRelation(_) => {
                EventName::CreateEntityResolverToManyRelationMethods
            }
            Self::Service(_) => EventName::CreateEntityService,
            Self::ServiceBase(_) => EventName::CreateEntityServiceBase
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_report_their_event() {
        let params = EventParams::ServerDotEnv(DotEnvParams::default());
        assert_eq!(params.event(), EventName::CreateServerDotEnv);

        let params = EventParams::ServiceBase(ClassTemplateParams {
            entity:           Entity::new("User"),
            class_id:         "UserServiceBase".to_string(),
            template:         Program::default(),
            template_mapping: TemplateMapping::new()
        });
        assert_eq!(params.event(), EventName::CreateEntityServiceBase);
    }
}
