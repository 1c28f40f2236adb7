// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Permission decorators.
//!
//! Each mapped method receives
//!
//! ```text
//! @nestAccessControl.UseRoles({ resource: "User", action: "read", possession: "any" })
//! ```
//!
//! and, for controllers with ACL interceptors enabled, an interceptor that
//! filters response attributes (reads) or validates request attributes
//! (writes). New decorators are placed in front of the existing ones; the
//! existing list keeps its order. A decorator already present for the same
//! resource and verb is never added again.

use tracing::{debug, trace};

use crate::{
    action::{AccessAction, MethodActionPair},
    ast::{
        ClassDeclaration, Decorator, Expression, ImportDeclaration, ObjectMember,
        build::{decorator_call, ident, import_names, object, property, string}
    },
    locate,
    settings::Possession
};

/// Namespace import of the access-control library.
pub const NEST_ACCESS_CONTROL: &str = "nestAccessControl";

const USE_ROLES: &str = "UseRoles";

/// Interceptor filtering response attributes.
pub const ACL_FILTER_RESPONSE_INTERCEPTOR: &str = "AclFilterResponseInterceptor";

/// Interceptor validating request attributes.
pub const ACL_VALIDATE_REQUEST_INTERCEPTOR: &str = "AclValidateRequestInterceptor";

const FILTER_RESPONSE_MODULE: &str = "../../interceptors/aclFilterResponse.interceptor";
const VALIDATE_REQUEST_MODULE: &str = "../../interceptors/aclValidateRequest.interceptor";

/// Attaches permission decorators to located methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionAnnotator {
    possession:   Possession,
    interceptors: bool
}

impl PermissionAnnotator {
    /// Annotator writing `possession` into every decorator.
    pub const fn new(possession: Possession) -> Self {
        Self {
            possession,
            interceptors: false
        }
    }

    /// Also attach ACL interceptors.
    #[must_use]
    pub const fn with_interceptors(mut self, enabled: bool) -> Self {
        self.interceptors = enabled;
        self
    }

    /// Annotate `method_id` of `class` with `(subject, action)`.
    ///
    /// Returns `false` when the method is absent or already annotated.
    pub fn annotate(
        &self,
        class: &mut ClassDeclaration,
        method_id: &str,
        action: AccessAction,
        subject: &str
    ) -> bool {
        let Some(method) = locate::find_method_mut(class, method_id) else {
            debug!(method = method_id, "method absent, permission skipped");
            return false;
        };
        let mut added = false;
        if !method
            .decorators
            .iter()
            .any(|decorator| grants_roles(decorator, subject, action))
        {
            method
                .decorators
                .insert(0, use_roles(subject, action, self.possession));
            trace!(method = method_id, resource = subject, action = action.verb(), "UseRoles added");
            added = true;
        }
        if let Some(interceptor) = self.interceptor_for(action) {
            let decorator = use_interceptors(interceptor);
            if !method.decorators.contains(&decorator) {
                method.decorators.insert(0, decorator);
                trace!(method = method_id, interceptor, "interceptor added");
                added = true;
            }
        }
        added
    }

    /// Annotate every pair; returns how many methods changed.
    pub fn annotate_all(&self, class: &mut ClassDeclaration, pairs: &[MethodActionPair]) -> usize {
        pairs
            .iter()
            .filter(|pair| self.annotate(class, &pair.method_id, pair.action, &pair.subject))
            .count()
    }

    /// Interceptor imports required by `pairs`.
    pub fn interceptor_imports(&self, pairs: &[MethodActionPair]) -> Vec<ImportDeclaration> {
        let mut imports = Vec::new();
        if !self.interceptors {
            return imports;
        }
        if pairs.iter().any(|pair| pair.action.filters_response()) {
            imports.push(import_names(&[ACL_FILTER_RESPONSE_INTERCEPTOR], FILTER_RESPONSE_MODULE));
        }
        if pairs.iter().any(|pair| pair.action.validates_request()) {
            imports.push(import_names(
                &[ACL_VALIDATE_REQUEST_INTERCEPTOR],
                VALIDATE_REQUEST_MODULE
            ));
        }
        imports
    }

    fn interceptor_for(&self, action: AccessAction) -> Option<&'static str> {
        if !self.interceptors {
            return None;
        }
        if action.filters_response() {
            Some(ACL_FILTER_RESPONSE_INTERCEPTOR)
        } else if action.validates_request() {
            Some(ACL_VALIDATE_REQUEST_INTERCEPTOR)
        } else {
            None
        }
    }
}

fn use_roles(subject: &str, action: AccessAction, possession: Possession) -> Decorator {
    decorator_call(
        NEST_ACCESS_CONTROL,
        USE_ROLES,
        vec![object(vec![
            property("resource", string(subject)),
            property("action", string(action.verb())),
            property("possession", string(possession.as_str())),
        ])]
    )
}

fn use_interceptors(interceptor: &str) -> Decorator {
    decorator_call("common", "UseInterceptors", vec![ident(interceptor)])
}

/// Whether `decorator` is a `UseRoles` call for `(subject, action verb)`.
fn grants_roles(decorator: &Decorator, subject: &str, action: AccessAction) -> bool {
    let Expression::Call {
        callee,
        arguments
    } = &decorator.expression
    else {
        return false;
    };
    let Expression::Member {
        object,
        property
    } = callee.as_ref()
    else {
        return false;
    };
    let is_use_roles = matches!(object.as_ref(), Expression::Identifier(id) if id.name() == NEST_ACCESS_CONTROL)
        && property.is(USE_ROLES);
    if !is_use_roles {
        return false;
    }
    let Some(Expression::Object(members)) = arguments.first() else {
        return false;
    };
    string_property(members, "resource") == Some(subject)
        && string_property(members, "action") == Some(action.verb())
}

fn string_property<'a>(members: &'a [ObjectMember], key: &str) -> Option<&'a str> {
    members.iter().find_map(|member| match member {
        ObjectMember::Property {
            key: name,
            value: Expression::StringLiteral(value)
        } if name.is(key) => Some(value.as_str()),
        _ => None
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ast::{ClassMember, ClassMethod, Name};

    fn controller() -> ClassDeclaration {
        let mut find_one = ClassMethod::method("findOne");
        find_one
            .decorators
            .push(decorator_call("common", "Get", vec![string("/:id")]));
        ClassDeclaration {
            id:          Name::from("UserControllerBase"),
            super_class: None,
            decorators:  vec![],
            body:        vec![
                ClassMember::Method(find_one),
                ClassMember::Method(ClassMethod::method("create")),
                ClassMember::Method(ClassMethod::method("delete")),
            ],
            exported:    true
        }
    }

    fn decorators_of(class: &mut ClassDeclaration, method: &str) -> Vec<String> {
        locate::find_method_mut(class, method)
            .expect("method")
            .decorators
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn prepends_use_roles_and_keeps_existing() {
        let mut class = controller();
        let annotator = PermissionAnnotator::new(Possession::Any);
        assert!(annotator.annotate(&mut class, "findOne", AccessAction::Read, "User"));
        assert_eq!(
            decorators_of(&mut class, "findOne"),
            vec![
                "@nestAccessControl.UseRoles({ resource: \"User\", action: \"read\", possession: \"any\" })"
                    .to_string(),
                "@common.Get(\"/:id\")".to_string(),
            ]
        );
    }

    #[test]
    fn annotation_is_idempotent() {
        let mut class = controller();
        let annotator = PermissionAnnotator::new(Possession::Own).with_interceptors(true);
        assert!(annotator.annotate(&mut class, "create", AccessAction::Create, "User"));
        assert!(!annotator.annotate(&mut class, "create", AccessAction::Create, "User"));
        let decorators = decorators_of(&mut class, "create");
        assert_eq!(decorators.len(), 2);
        assert_eq!(decorators[0], "@common.UseInterceptors(AclValidateRequestInterceptor)");
        assert!(decorators[1].contains("possession: \"own\""));
    }

    #[test]
    fn same_verb_from_different_actions_is_not_duplicated() {
        let mut class = controller();
        let annotator = PermissionAnnotator::new(Possession::Any);
        annotator.annotate(&mut class, "findOne", AccessAction::Read, "User");
        assert!(!annotator.annotate(&mut class, "findOne", AccessAction::View, "User"));
    }

    #[test]
    fn absent_method_is_a_no_op() {
        let mut class = controller();
        let before = class.clone();
        let annotator = PermissionAnnotator::new(Possession::Any);
        assert!(!annotator.annotate(&mut class, "update", AccessAction::Update, "User"));
        assert_eq!(class, before);
    }

    #[test]
    fn delete_gets_no_interceptor() {
        let mut class = controller();
        let annotator = PermissionAnnotator::new(Possession::Any).with_interceptors(true);
        annotator.annotate(&mut class, "delete", AccessAction::Delete, "User");
        assert_eq!(decorators_of(&mut class, "delete").len(), 1);
    }

    #[test]
    fn interceptor_imports_follow_actions() {
        let annotator = PermissionAnnotator::new(Possession::Any).with_interceptors(true);
        let reads = [MethodActionPair::new("findMany", AccessAction::Search, "User")];
        let imports = annotator.interceptor_imports(&reads);
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].source, FILTER_RESPONSE_MODULE);

        let disabled = PermissionAnnotator::new(Possession::Any);
        assert!(disabled.interceptor_imports(&reads).is_empty());
    }

    #[test]
    fn annotate_all_counts_changed_methods() {
        let mut class = controller();
        let pairs = [
            MethodActionPair::new("findOne", AccessAction::Read, "User"),
            MethodActionPair::new("create", AccessAction::Create, "User"),
            MethodActionPair::new("findMany", AccessAction::Search, "User"),
        ];
        let annotator = PermissionAnnotator::new(Possession::Any);
        assert_eq!(annotator.annotate_all(&mut class, &pairs), 2);
        assert_eq!(annotator.annotate_all(&mut class, &pairs), 0);
    }
}
