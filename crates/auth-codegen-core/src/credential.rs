// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Password field handling for service templates.
//!
//! Entities without credential fields pass through untouched. Otherwise the
//! service class gets a `PasswordService` dependency, its `create` and
//! `update` methods become `async`, and the hashing service (plus, for the
//! base service, the update-input helper) is imported. The base service also
//! rewires its argument mappings so plaintext values are hashed:
//!
//! ```text
//! create: { ...args, data: { ...args.data, password: await this.passwordService.hash(args.data.password) } }
//! update: { ...args, data: { ...args.data, password: args.data.password && await
//!           transformStringFieldUpdateInput(args.data.password, (password) => this.passwordService.hash(password)) } }
//! ```

use tracing::debug;

use crate::{
    ast::{
        Accessibility, ClassDeclaration, Expression, ObjectMember,
        build::{and, arrow, await_expr, call, ident, import_names, member_path, object, property, spread}
    },
    error::Result,
    inject,
    model::Field,
    module::relative_import_path,
    template::{TemplateMapping, interpolate}
};

/// Type of the injected hashing service.
pub const PASSWORD_SERVICE_ID: &str = "PasswordService";

/// Constructor parameter holding the hashing service.
pub const PASSWORD_SERVICE_MEMBER: &str = "passwordService";

/// Helper applying a transform to string update inputs.
pub const TRANSFORM_STRING_FIELD_UPDATE_INPUT: &str = "transformStringFieldUpdateInput";

/// Methods turned `async` whenever the entity has a credential field.
pub const PASSWORD_FIELD_ASYNC_METHODS: [&str; 2] = ["create", "update"];

/// Mapping key of the create-arguments expression.
pub const CREATE_ARGS_MAPPING: &str = "CREATE_ARGS_MAPPING";

/// Mapping key of the update-arguments expression.
pub const UPDATE_ARGS_MAPPING: &str = "UPDATE_ARGS_MAPPING";

const ARGS: &str = "args";

/// Service template flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// `{src}/{entity}/{entity}.service.ts`, extends the base service.
    Service,
    /// `{src}/{entity}/base/{entity}.service.base.ts`.
    ServiceBase
}

impl ServiceKind {
    /// Generated file path of this service.
    pub fn module_path(self, src_directory: &str, entity_name: &str) -> String {
        match self {
            Self::Service => format!("{src_directory}/{entity_name}/{entity_name}.service.ts"),
            Self::ServiceBase => {
                format!("{src_directory}/{entity_name}/base/{entity_name}.service.base.ts")
            }
        }
    }
}

/// Service template being augmented.
#[derive(Debug, Clone, Copy)]
pub struct ServiceTarget<'a> {
    /// Template flavor.
    pub kind:          ServiceKind,
    /// Symbolic id of the service class.
    pub class_id:      &'a str,
    /// Entity name as used in file paths.
    pub entity_name:   &'a str,
    /// Server source directory.
    pub src_directory: &'a str
}

/// Augment a service template for `password_fields`.
///
/// Returns `true` when the service class was found and augmented. With no
/// credential fields nothing is touched, not even interpolation.
///
/// # Errors
///
/// - [`crate::AugmentError::MissingConstructor`] when the class has no
///   constructor
/// - [`crate::AugmentError::MissingSuperCall`] when a [`ServiceKind::Service`]
///   constructor never calls `super`
pub fn augment_service(
    template: &mut crate::ast::Program,
    mapping: &mut TemplateMapping,
    target: ServiceTarget<'_>,
    password_fields: &[&Field]
) -> Result<bool> {
    if password_fields.is_empty() {
        debug!(entity = target.entity_name, "no password fields, service untouched");
        return Ok(false);
    }
    if target.kind == ServiceKind::ServiceBase {
        mapping.insert(CREATE_ARGS_MAPPING, create_args_mapping(password_fields));
        mapping.insert(UPDATE_ARGS_MAPPING, update_args_mapping(password_fields));
    }

    let mut template = interpolate(template, mapping);
    let Some(class) = template.class_mut(target.class_id) else {
        debug!(class = target.class_id, "service class absent, credential steps skipped");
        return Ok(false);
    };
    inject::add_injectable_dependency(
        class,
        PASSWORD_SERVICE_MEMBER,
        PASSWORD_SERVICE_ID,
        Accessibility::Protected
    )?;
    mark_password_methods_async(class);

    if target.kind == ServiceKind::Service {
        template.add_identifier_to_constructor_super_call(PASSWORD_SERVICE_MEMBER)?;
    }

    let module_path = target.kind.module_path(target.src_directory, target.entity_name);
    let src = target.src_directory;
    let mut imports = vec![import_names(
        &[PASSWORD_SERVICE_ID],
        &relative_import_path(&module_path, &format!("{src}/auth/password.service.ts"))
    )];
    if target.kind == ServiceKind::ServiceBase {
        imports.push(import_names(
            &[TRANSFORM_STRING_FIELD_UPDATE_INPUT],
            &relative_import_path(&module_path, &format!("{src}/prisma.util.ts"))
        ));
    }
    template.add_imports(imports);
    Ok(true)
}

/// Mark every `create` / `update` method `async`; returns how many changed.
pub fn mark_password_methods_async(class: &mut ClassDeclaration) -> usize {
    let mut changed = 0;
    for method in class.methods_mut() {
        let targeted = PASSWORD_FIELD_ASYNC_METHODS
            .iter()
            .any(|name| method.key.is(name));
        if targeted && !method.is_async {
            method.is_async = true;
            changed += 1;
        }
    }
    changed
}

/// `{ ...args, data: { ...args.data, <mappings> } }`, or plain `args` when
/// there is nothing to map.
pub fn mutation_data_mapping(mappings: Vec<ObjectMember>) -> Expression {
    if mappings.is_empty() {
        return ident(ARGS);
    }
    let mut data = vec![spread(member_path("args.data"))];
    data.extend(mappings);
    object(vec![spread(ident(ARGS)), property("data", object(data))])
}

/// Create arguments hashing every credential field.
pub fn create_args_mapping(password_fields: &[&Field]) -> Expression {
    mutation_data_mapping(
        password_fields
            .iter()
            .map(|field| {
                property(
                    &field.name,
                    await_expr(call(hash_member(), vec![data_member(&field.name)]))
                )
            })
            .collect()
    )
}

/// Update arguments hashing every credential field that is being set.
pub fn update_args_mapping(password_fields: &[&Field]) -> Expression {
    mutation_data_mapping(
        password_fields
            .iter()
            .map(|field| {
                let transform = call(
                    ident(TRANSFORM_STRING_FIELD_UPDATE_INPUT),
                    vec![
                        data_member(&field.name),
                        arrow(&["password"], call(hash_member(), vec![ident("password")])),
                    ]
                );
                property(&field.name, and(data_member(&field.name), await_expr(transform)))
            })
            .collect()
    )
}

fn hash_member() -> Expression {
    member_path("this.passwordService.hash")
}

fn data_member(field: &str) -> Expression {
    member_path(&format!("args.data.{field}"))
}
