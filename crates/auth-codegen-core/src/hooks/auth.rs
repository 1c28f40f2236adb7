// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Access-control plugin.
//!
//! | Event | Phase | Effect |
//! |-------|-------|--------|
//! | `CreateServerDotEnv` | before | adds `BCRYPT_SALT`, `JWT_SECRET_KEY`, `JWT_EXPIRATION` |
//! | `CreateServerPackageJson` | before | suppresses the default manifest |
//! | `CreateServerPackageJson` | after | adds the static `package-json` set |
//! | `CreateServerAuth` | after | adds static auth and interceptors, default guard, grants |
//! | `CreateEntityModuleBase` | before | imports and exports `ACLModule`, `AuthModule` |
//! | `CreateEntityControllerBase` | before | guard imports, permissions, interceptors |
//! | `CreateEntityControllerToManyRelationMethods` | before | Search permission on the accessor |
//! | `CreateEntityResolverBase` | before | guard imports, permissions |
//! | `CreateEntityResolverToOneRelationMethods` | before | View permission on the accessor |
//! | `CreateEntityResolverToManyRelationMethods` | before | Search permission on the accessor |
//! | `CreateEntityService` | before | password hashing wiring |
//! | `CreateEntityServiceBase` | before | password hashing wiring |

use async_trait::async_trait;
use convert_case::{Case, Casing};
use tracing::{debug, instrument};

use super::{
    AuthProvider, ClassTemplateParams, DotEnvParams, EventName, EventParams, Events,
    ModuleBaseParams, Phases, Plugin, PluginContext, RelationParams, ServiceParams
};
use crate::{
    action::{Api, GenerationTarget, map_methods},
    annotate::{NEST_ACCESS_CONTROL, PermissionAnnotator},
    ast::{
        ClassDeclaration, Expression, Name, Program, Statement,
        build::{arrow, call, ident, import_names, import_namespace, ts_ignore}
    },
    credential::{ServiceKind, ServiceTarget, augment_service},
    error::Result,
    grants::create_grants_module,
    inject,
    locate::MIXIN_ID,
    module::Module,
    settings::AuthSettings,
    template::interpolate
};

const ACL_MODULE: &str = "ACLModule";
const AUTH_MODULE: &str = "AuthModule";
const FORWARD_REF: &str = "forwardRef";
const IMPORTS_ARRAY: &str = "IMPORTS_ARRAY";
const EXPORT_ARRAY: &str = "EXPORT_ARRAY";

/// Role and attribute based access control for generated servers.
#[derive(Debug, Clone, Default)]
pub struct AuthPlugin {
    settings: AuthSettings
}

impl AuthPlugin {
    /// Plugin using `settings`.
    pub fn new(settings: AuthSettings) -> Self {
        Self {
            settings
        }
    }

    /// Plugin configured from host installation settings.
    ///
    /// # Errors
    ///
    /// [`crate::AugmentError::Settings`] for malformed settings.
    pub fn from_settings(value: serde_json::Value) -> Result<Self> {
        Ok(Self::new(AuthSettings::from_value(value)?))
    }

    /// Active settings.
    pub fn settings(&self) -> &AuthSettings {
        &self.settings
    }

    fn annotator(&self, api: Api) -> PermissionAnnotator {
        PermissionAnnotator::new(self.settings.possession)
            .with_interceptors(api == Api::Rest && self.settings.acl_interceptors)
    }

    fn before_server_dot_env(&self, params: &mut DotEnvParams) {
        for variable in self.settings.env_variables() {
            if params
                .env_variables
                .iter()
                .all(|existing| existing.name != variable.name)
            {
                params.env_variables.push(variable);
            }
        }
    }

    #[instrument(skip_all, fields(entity = %params.entity_name))]
    fn before_entity_module_base(&self, params: &mut ModuleBaseParams) -> Result<()> {
        let imports = prepend_unique(
            vec![ident(ACL_MODULE), ident(AUTH_MODULE), forward_ref_auth_module()],
            params.template_mapping.array_elements(IMPORTS_ARRAY)?
        );
        let exports = prepend_unique(
            vec![ident(ACL_MODULE), ident(AUTH_MODULE)],
            params.template_mapping.array_elements(EXPORT_ARRAY)?
        );
        params
            .template_mapping
            .insert(IMPORTS_ARRAY, Expression::Array(imports));
        params
            .template_mapping
            .insert(EXPORT_ARRAY, Expression::Array(exports));

        inject::add_imports(
            &mut params.template,
            [
                import_names(&[ACL_MODULE], "../../auth/acl.module"),
                import_names(&[AUTH_MODULE], "../../auth/auth.module"),
                import_names(&[FORWARD_REF], "@nestjs/common"),
            ]
        );
        Ok(())
    }

    #[instrument(skip_all, fields(entity = %params.entity.name))]
    fn before_controller_base(&self, params: &mut ClassTemplateParams) -> Result<()> {
        let mut template = interpolate(&mut params.template, &params.template_mapping);
        template.add_imports([
            import_namespace(NEST_ACCESS_CONTROL, "nest-access-control"),
            ts_ignore(import_names(&["DefaultAuthGuard"], "../../auth/defaultAuth.guard")),
        ]);
        let Some(class) = template.class_mut(&params.class_id) else {
            debug!(class = %params.class_id, "controller class absent");
            return Ok(());
        };
        let pairs = map_methods(GenerationTarget::Controller, &params.template_mapping, &params.entity)?;
        let annotator = self.annotator(Api::Rest);
        annotator.annotate_all(class, &pairs);
        template.add_imports(annotator.interceptor_imports(&pairs));
        Ok(())
    }

    #[instrument(skip_all, fields(entity = %params.entity.name))]
    fn before_resolver_base(&self, params: &mut ClassTemplateParams) -> Result<()> {
        let mut template = interpolate(&mut params.template, &params.template_mapping);
        template.add_imports([
            import_namespace(NEST_ACCESS_CONTROL, "nest-access-control"),
            ts_ignore(import_namespace("gqlACGuard", "../../auth/gqlAC.guard")),
            import_names(&["GqlDefaultAuthGuard"], "../../auth/gqlDefaultAuth.guard"),
            import_namespace("common", "@nestjs/common"),
            import_namespace("swagger", "@nestjs/swagger"),
        ]);
        let Some(class) = template.class_mut(&params.class_id) else {
            debug!(class = %params.class_id, "resolver class absent");
            return Ok(());
        };
        let pairs = map_methods(GenerationTarget::Resolver, &params.template_mapping, &params.entity)?;
        self.annotator(Api::GraphQl).annotate_all(class, &pairs);
        Ok(())
    }

    #[instrument(skip_all, fields(entity = %params.entity.name, field = %params.field.name))]
    fn before_relation(&self, params: &mut RelationParams, target: GenerationTarget<'_>, api: Api) -> Result<()> {
        let mut template = interpolate(&mut params.template, &params.template_mapping);
        let Some(class) = template.class_mut(MIXIN_ID) else {
            debug!("relation mixin absent");
            return Ok(());
        };
        let pairs = map_methods(target, &params.template_mapping, &params.entity)?;
        let annotator = self.annotator(api);
        annotator.annotate_all(class, &pairs);
        template.add_imports(annotator.interceptor_imports(&pairs));
        Ok(())
    }

    #[instrument(skip_all, fields(entity = %params.entity_name))]
    fn before_service(&self, context: &PluginContext<'_>, params: &mut ServiceParams) -> Result<()> {
        let Some(entity) = context.model.find_entity(&params.entity_name) else {
            debug!("entity unknown to the model, service untouched");
            return Ok(());
        };
        let password_fields = entity.password_fields();
        augment_service(
            &mut params.template,
            &mut params.template_mapping,
            ServiceTarget {
                kind:          ServiceKind::Service,
                class_id:      &params.class_id,
                entity_name:   &params.entity_name,
                src_directory: &context.directories.src_directory
            },
            &password_fields
        )?;
        Ok(())
    }

    #[instrument(skip_all, fields(entity = %params.entity.name))]
    fn before_service_base(&self, context: &PluginContext<'_>, params: &mut ClassTemplateParams) -> Result<()> {
        let password_fields = params.entity.password_fields();
        let entity_name = params.entity.name.to_case(Case::Camel);
        augment_service(
            &mut params.template,
            &mut params.template_mapping,
            ServiceTarget {
                kind:          ServiceKind::ServiceBase,
                class_id:      &params.class_id,
                entity_name:   &entity_name,
                src_directory: &context.directories.src_directory
            },
            &password_fields
        )?;
        Ok(())
    }

    async fn after_server_package_json(&self, context: &PluginContext<'_>) -> Result<Vec<Module>> {
        let source = self.settings.static_directory.join("package-json");
        context
            .statics
            .import_static_modules(&source, &context.directories.base_directory)
            .await
    }

    async fn after_server_auth(&self, context: &PluginContext<'_>) -> Result<Vec<Module>> {
        let directories = &context.directories;
        let mut modules = context
            .statics
            .import_static_modules(&self.settings.static_directory.join("auth"), &directories.auth_directory)
            .await?;
        modules.extend(
            context
                .statics
                .import_static_modules(
                    &self.settings.static_directory.join("interceptors"),
                    &format!("{}/interceptors", directories.src_directory)
                )
                .await?
        );
        modules.push(match context.resource {
            Some(resource) => default_guard_module(resource.auth_provider, &directories.auth_directory),
            None => Module::empty()
        });
        if let Some(grants) =
            create_grants_module(&directories.src_directory, context.model, self.settings.possession)?
        {
            modules.push(grants);
        }
        Ok(modules)
    }
}

#[async_trait]
impl Plugin for AuthPlugin {
    fn name(&self) -> &str {
        "auth-core"
    }

    fn register(&self) -> Events {
        Events::from([
            (EventName::CreateServerDotEnv, Phases::BEFORE),
            (EventName::CreateServerPackageJson, Phases::BOTH),
            (EventName::CreateServerAuth, Phases::AFTER),
            (EventName::CreateEntityModuleBase, Phases::BEFORE),
            (EventName::CreateEntityControllerBase, Phases::BEFORE),
            (EventName::CreateEntityControllerToManyRelationMethods, Phases::BEFORE),
            (EventName::CreateEntityResolverBase, Phases::BEFORE),
            (EventName::CreateEntityResolverToOneRelationMethods, Phases::BEFORE),
            (EventName::CreateEntityResolverToManyRelationMethods, Phases::BEFORE),
            (EventName::CreateEntityService, Phases::BEFORE),
            (EventName::CreateEntityServiceBase, Phases::BEFORE),
        ])
    }

    fn before(&self, context: &mut PluginContext<'_>, mut params: EventParams) -> Result<EventParams> {
        match &mut params {
            EventParams::ServerDotEnv(p) => self.before_server_dot_env(p),
            EventParams::ServerPackageJson(_) => context.skip_default_behavior = true,
            EventParams::EntityModuleBase(p) => self.before_entity_module_base(p)?,
            EventParams::ControllerBase(p) => self.before_controller_base(p)?,
            EventParams::ControllerToManyRelation(p) => {
                let field = p.field.clone();
                let target = GenerationTarget::ToManyRelation {
                    field: &field,
                    api:   Api::Rest
                };
                self.before_relation(p, target, Api::Rest)?;
            }
            EventParams::ResolverBase(p) => self.before_resolver_base(p)?,
            EventParams::ResolverToOneRelation(p) => {
                let field = p.field.clone();
                let target = GenerationTarget::ToOneRelation {
                    field: &field
                };
                self.before_relation(p, target, Api::GraphQl)?;
            }
            EventParams::ResolverToManyRelation(p) => {
                let field = p.field.clone();
                let target = GenerationTarget::ToManyRelation {
                    field: &field,
                    api:   Api::GraphQl
                };
                self.before_relation(p, target, Api::GraphQl)?;
            }
            EventParams::Service(p) => self.before_service(context, p)?,
            EventParams::ServiceBase(p) => self.before_service_base(context, p)?
        }
        Ok(params)
    }

    async fn after(
        &self,
        context: &PluginContext<'_>,
        event: EventName,
        mut modules: Vec<Module>
    ) -> Result<Vec<Module>> {
        let added = match event {
            EventName::CreateServerPackageJson => self.after_server_package_json(context).await?,
            EventName::CreateServerAuth => self.after_server_auth(context).await?,
            _ => Vec::new()
        };
        debug!(%event, added = added.len(), "after hook");
        modules.extend(added);
        Ok(modules)
    }
}

fn prepend_unique(mut head: Vec<Expression>, tail: Vec<Expression>) -> Vec<Expression> {
    for element in tail {
        if !head.contains(&element) {
            head.push(element);
        }
    }
    head
}

/// `forwardRef(() => AuthModule)`
fn forward_ref_auth_module() -> Expression {
    call(ident(FORWARD_REF), vec![arrow(&[], ident(AUTH_MODULE))])
}

/// `{auth}/defaultAuth.guard.ts` extending the provider's guard.
fn default_guard_module(provider: AuthProvider, auth_directory: &str) -> Module {
    let (guard, source) = match provider {
        AuthProvider::Jwt => ("JwtAuthGuard", "./jwt/jwtAuth.guard"),
        AuthProvider::Http => ("BasicAuthGuard", "./basic/basicAuth.guard")
    };
    let program = Program::new(vec![
        Statement::Import(import_names(&[guard], source)),
        Statement::Class(ClassDeclaration {
            id:          Name::from("DefaultAuthGuard"),
            super_class: Some(Name::from(guard)),
            decorators:  vec![],
            body:        vec![],
            exported:    true
        }),
    ]);
    Module::new(format!("{auth_directory}/defaultAuth.guard.ts"), program.to_string())
}
