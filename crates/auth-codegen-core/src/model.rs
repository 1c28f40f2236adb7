// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Read-only view of the host's data model.
//!
//! The host owns entities, fields and roles. Hooks only ever read them
//! through [`ModelView`], so any host representation can be adapted with a
//! thin impl. [`Model`] is the in-memory implementation used by Rust hosts
//! and tests; entity descriptions can be written by hand or derived:
//!
//! ```rust,ignore
//! #[derive(Entity)]
//! #[entity(name = "User")]
//! struct User {
//!     #[id]
//!     id: String,
//!     email: String,
//!     #[password]
//!     password: String,
//!     #[has_many(Order)]
//!     orders: Vec<Order>,
//! }
//!
//! let model = Model::new().with_described::<User>();
//! ```

use crate::action::AccessAction;

/// Field data kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// Primary key.
    Id,
    /// Short text.
    SingleLineText,
    /// Long text.
    MultiLineText,
    /// E-mail address.
    Email,
    /// Boolean flag.
    Boolean,
    /// Integer.
    WholeNumber,
    /// Floating point number.
    DecimalNumber,
    /// Date and time.
    DateTime,
    /// Login name of an auth entity.
    Username,
    /// Credential, hashed before storage.
    Password,
    /// Roles of an auth entity.
    Roles,
    /// JSON value.
    Json,
    /// Relation to another entity.
    Lookup {
        /// Target entity name. Filled in by the host before hooks run.
        related_entity: Option<String>,
        /// `true` for to-many, `false` for to-one.
        allow_multiple: bool
    },
    /// Anything the hooks never look at.
    Other
}

/// Entity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name as used in generated code.
    pub name:      String,
    /// Data kind.
    pub data_type: DataType
}

impl Field {
    /// Field of the given kind.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type
        }
    }

    /// Relation field.
    pub fn lookup(name: impl Into<String>, related_entity: Option<&str>, allow_multiple: bool) -> Self {
        Self::new(
            name,
            DataType::Lookup {
                related_entity: related_entity.map(str::to_string),
                allow_multiple
            }
        )
    }

    /// Whether the field holds a credential.
    pub fn is_password(&self) -> bool {
        self.data_type == DataType::Password
    }

    /// Whether the field is a to-many relation.
    pub fn is_to_many(&self) -> bool {
        matches!(
            self.data_type,
            DataType::Lookup {
                allow_multiple: true,
                ..
            }
        )
    }

    /// Whether the field is a to-one relation.
    pub fn is_to_one(&self) -> bool {
        matches!(
            self.data_type,
            DataType::Lookup {
                allow_multiple: false,
                ..
            }
        )
    }

    /// Target entity of a relation field.
    pub fn related_entity(&self) -> Option<&str> {
        match &self.data_type {
            DataType::Lookup {
                related_entity, ..
            } => related_entity.as_deref(),
            _ => None
        }
    }
}

/// Which roles may perform an action on an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionKind {
    /// Every role.
    AllRoles,
    /// Listed roles only.
    Granular(Vec<String>),
    /// Nobody.
    Disabled
}

/// Permission for one action on an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityPermission {
    /// Governed action.
    pub action: AccessAction,
    /// Who is allowed.
    pub kind:   PermissionKind
}

impl EntityPermission {
    /// Permission granted to every role.
    pub fn all_roles(action: AccessAction) -> Self {
        Self {
            action,
            kind: PermissionKind::AllRoles
        }
    }

    /// Permission granted to the listed roles.
    pub fn granular<I, S>(action: AccessAction, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self {
            action,
            kind: PermissionKind::Granular(roles.into_iter().map(Into::into).collect())
        }
    }
}

/// Entity description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Entity name (`User`).
    pub name:        String,
    /// Plural display name; `None` means `{name}s`.
    pub plural_name: Option<String>,
    /// Fields in declaration order.
    pub fields:      Vec<Field>,
    /// Per-action permissions.
    pub permissions: Vec<EntityPermission>
}

impl Entity {
    /// Entity with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:        name.into(),
            plural_name: None,
            fields:      Vec::new(),
            permissions: Vec::new()
        }
    }

    /// Set the plural name.
    #[must_use]
    pub fn with_plural(mut self, plural: impl Into<String>) -> Self {
        self.plural_name = Some(plural.into());
        self
    }

    /// Append a field.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Append a permission.
    #[must_use]
    pub fn with_permission(mut self, permission: EntityPermission) -> Self {
        self.permissions.push(permission);
        self
    }

    /// Plural name.
    pub fn plural(&self) -> String {
        self.plural_name
            .clone()
            .unwrap_or_else(|| format!("{}s", self.name))
    }

    /// Credential fields, in declaration order.
    pub fn password_fields(&self) -> Vec<&Field> {
        self.fields.iter().filter(|field| field.is_password()).collect()
    }

    /// To-many relation fields, in declaration order.
    pub fn to_many_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.is_to_many())
    }
}

/// Role declared by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    /// Role name.
    pub name: String
}

impl Role {
    /// Role with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into()
        }
    }
}

/// Static entity description, implemented by `#[derive(Entity)]`.
pub trait DescribeEntity {
    /// Build the entity description.
    fn describe() -> Entity;
}

/// Read-only access to the host model.
pub trait ModelView: Send + Sync {
    /// All entities of the generation run.
    fn entities(&self) -> &[Entity];

    /// All roles of the generation run.
    fn roles(&self) -> &[Role];

    /// Entity by name, ignoring case.
    fn find_entity(&self, name: &str) -> Option<&Entity> {
        self.entities()
            .iter()
            .find(|entity| entity.name.eq_ignore_ascii_case(name))
    }
}

/// In-memory model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    entities: Vec<Entity>,
    roles:    Vec<Role>
}

impl Model {
    /// Empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity.
    #[must_use]
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    /// Add a derived entity description.
    #[must_use]
    pub fn with_described<T: DescribeEntity>(self) -> Self {
        self.with_entity(T::describe())
    }

    /// Add a role.
    #[must_use]
    pub fn with_role(mut self, name: impl Into<String>) -> Self {
        self.roles.push(Role::new(name));
        self
    }
}

impl ModelView for Model {
    fn entities(&self) -> &[Entity] {
        &self.entities
    }

    fn roles(&self) -> &[Role] {
        &self.roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> Entity {
        Entity::new("User")
            .with_field(Field::new("id", DataType::Id))
            .with_field(Field::new("email", DataType::Email))
            .with_field(Field::new("password", DataType::Password))
            .with_field(Field::lookup("orders", Some("Order"), true))
            .with_field(Field::lookup("profile", Some("Profile"), false))
    }

    #[test]
    fn password_fields_in_order() {
        let entity = user();
        let names: Vec<_> = entity
            .password_fields()
            .iter()
            .map(|field| field.name.as_str())
            .collect();
        assert_eq!(names, vec!["password"]);
    }

    #[test]
    fn relation_predicates() {
        let entity = user();
        let orders = &entity.fields[3];
        let profile = &entity.fields[4];
        assert!(orders.is_to_many());
        assert!(!orders.is_to_one());
        assert!(profile.is_to_one());
        assert_eq!(orders.related_entity(), Some("Order"));
        assert_eq!(entity.fields[0].related_entity(), None);
        assert_eq!(entity.to_many_fields().count(), 1);
    }

    #[test]
    fn plural_defaults_to_suffix() {
        assert_eq!(Entity::new("User").plural(), "Users");
        assert_eq!(Entity::new("Person").with_plural("People").plural(), "People");
    }

    #[test]
    fn find_entity_ignores_case() {
        let model = Model::new().with_entity(user()).with_role("admin");
        assert!(model.find_entity("user").is_some());
        assert!(model.find_entity("USER").is_some());
        assert!(model.find_entity("Order").is_none());
        assert_eq!(model.roles().len(), 1);
    }
}
