// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Placeholder interpolation.
//!
//! Base templates carry named slots (`${CREATE_ARGS_MAPPING}`,
//! `${FIND_MANY}`). The host assembles a [`TemplateMapping`] for every
//! template instance; [`interpolate`] resolves each slot in place and hands
//! back an [`InterpolatedTemplate`], the only handle through which classes
//! can be located afterwards.
//!
//! # Resolution Rules
//!
//! | Slot position | Mapping value | Result |
//! |---------------|---------------|--------|
//! | expression | [`MappingValue::Node`] | node cloned in place |
//! | expression | [`MappingValue::Text`] | string literal |
//! | identifier | `Node(Identifier)` | identifier |
//! | identifier | [`MappingValue::Text`] | identifier |
//! | identifier | any other node | left unresolved, logged |
//! | any | key absent | left unresolved |
//!
//! Substituted fragments are not descended into, so running the pass twice
//! with the same mapping is a no-op the second time.

use std::collections::HashMap;

use tracing::{trace, warn};

use crate::{
    ast::{
        ClassDeclaration, Expression, Identifier, ImportDeclaration, Name, Program,
        visit::{VisitMut, walk_expression_mut}
    },
    error::{AugmentError, Result},
    inject, locate
};

/// Value registered for a placeholder key.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingValue {
    /// Tree fragment (array, identifier, object, call, ...).
    Node(Expression),
    /// Raw text value.
    Text(String)
}

impl From<Expression> for MappingValue {
    fn from(value: Expression) -> Self {
        Self::Node(value)
    }
}

impl From<Identifier> for MappingValue {
    fn from(value: Identifier) -> Self {
        Self::Node(Expression::Identifier(value))
    }
}

impl From<&str> for MappingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MappingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Placeholder key to fragment mapping for one template instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateMapping {
    entries: HashMap<String, MappingValue>
}

impl TemplateMapping {
    /// Empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<MappingValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MappingValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Raw lookup.
    pub fn get(&self, key: &str) -> Option<&MappingValue> {
        self.entries.get(key)
    }

    /// Whether the key is registered.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifier name registered under `key`.
    ///
    /// Text values are accepted as identifiers.
    ///
    /// # Errors
    ///
    /// [`AugmentError::MappingShape`] when the value is a non-identifier node.
    pub fn identifier(&self, key: &str) -> Result<Option<&str>> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(MappingValue::Text(text)) => Ok(Some(text)),
            Some(MappingValue::Node(Expression::Identifier(id))) => Ok(Some(id.name())),
            Some(MappingValue::Node(_)) => Err(AugmentError::MappingShape {
                key:      key.to_string(),
                expected: "an identifier"
            })
        }
    }

    /// Elements of the array literal registered under `key`.
    ///
    /// A missing key reads as an empty array.
    ///
    /// # Errors
    ///
    /// [`AugmentError::MappingShape`] when the value is not an array literal.
    pub fn array_elements(&self, key: &str) -> Result<Vec<Expression>> {
        match self.entries.get(key) {
            None => Ok(Vec::new()),
            Some(MappingValue::Node(Expression::Array(elements))) => Ok(elements.clone()),
            Some(_) => Err(AugmentError::MappingShape {
                key:      key.to_string(),
                expected: "an array expression"
            })
        }
    }
}

/// Resolve every placeholder of `program` found in `mapping`.
///
/// Returns the handle used by all later pipeline stages.
pub fn interpolate<'a>(program: &'a mut Program, mapping: &TemplateMapping) -> InterpolatedTemplate<'a> {
    let mut interpolator = Interpolator {
        mapping,
        resolved: 0
    };
    interpolator.visit_program_mut(program);
    trace!(resolved = interpolator.resolved, "template interpolated");
    InterpolatedTemplate {
        program
    }
}

struct Interpolator<'m> {
    mapping:  &'m TemplateMapping,
    resolved: usize
}

impl VisitMut for Interpolator<'_> {
    fn visit_expression_mut(&mut self, node: &mut Expression) {
        if let Expression::Placeholder(key) = node {
            match self.mapping.get(key) {
                Some(MappingValue::Node(fragment)) => {
                    *node = fragment.clone();
                    self.resolved += 1;
                }
                Some(MappingValue::Text(text)) => {
                    *node = Expression::StringLiteral(text.clone());
                    self.resolved += 1;
                }
                None => {}
            }
            return;
        }
        walk_expression_mut(self, node);
    }

    fn visit_name_mut(&mut self, node: &mut Name) {
        let Name::Placeholder(key) = node else {
            return;
        };
        let resolved = match self.mapping.get(key) {
            Some(MappingValue::Text(text)) => Identifier::new(text.as_str()),
            Some(MappingValue::Node(Expression::Identifier(id))) => id.clone(),
            Some(MappingValue::Node(_)) => {
                warn!(key = %key, "non-identifier fragment in identifier position");
                return;
            }
            None => return
        };
        *node = Name::Ident(resolved);
        self.resolved += 1;
    }
}

/// A template whose placeholders have been resolved.
///
/// Class lookup and tree-wide injection are only reachable from here, so a
/// class can never be located before interpolation ran.
#[derive(Debug)]
pub struct InterpolatedTemplate<'a> {
    program: &'a mut Program
}

impl InterpolatedTemplate<'_> {
    /// Read access to the resolved tree.
    pub fn program(&self) -> &Program {
        self.program
    }

    /// Locate a top-level class by its symbolic identifier.
    pub fn class_mut(&mut self, id: &str) -> Option<&mut ClassDeclaration> {
        locate::find_class_mut(self.program, id)
    }

    /// Add import declarations, skipping those already present.
    ///
    /// Returns the number of new declarations.
    pub fn add_imports(&mut self, imports: impl IntoIterator<Item = ImportDeclaration>) -> usize {
        inject::add_imports(self.program, imports)
    }

    /// Append `identifier` to the `super(...)` call of the constructor.
    ///
    /// # Errors
    ///
    /// [`AugmentError::MissingSuperCall`] if the template has none.
    pub fn add_identifier_to_constructor_super_call(&mut self, identifier: &str) -> Result<bool> {
        inject::add_identifier_to_constructor_super_call(self.program, identifier)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ast::{
        ClassMember, ClassMethod, Statement,
        build::{call, ident, member_path}
    };

    fn template() -> Program {
        let mut method = ClassMethod::method(Name::Placeholder("FIND_MANY".to_string()));
        method.body.push(Statement::Return(Some(call(
            member_path("this.service.findMany"),
            vec![Expression::Placeholder("ARGS".to_string())]
        ))));
        Program::new(vec![Statement::Class(ClassDeclaration {
            id:          Name::Placeholder("CLASS".to_string()),
            super_class: None,
            decorators:  vec![],
            body:        vec![ClassMember::Method(method)],
            exported:    true
        })])
    }

    #[test]
    fn resolves_identifier_and_expression_slots() {
        let mut program = template();
        let mapping = TemplateMapping::new()
            .with("CLASS", "UserControllerBase")
            .with("FIND_MANY", Identifier::new("findManyOrders"))
            .with("ARGS", ident("args"));

        let mut handle = interpolate(&mut program, &mapping);
        let class = handle.class_mut("UserControllerBase").expect("class");
        let method = locate::find_method_mut(class, "findManyOrders").expect("method");
        assert_eq!(
            method.body[0],
            Statement::Return(Some(call(member_path("this.service.findMany"), vec![ident("args")])))
        );
    }

    #[test]
    fn missing_keys_are_left_in_place() {
        let mut program = template();
        let mapping = TemplateMapping::new().with("CLASS", "UserControllerBase");
        let handle = interpolate(&mut program, &mapping);
        let rendered = handle.program().to_string();
        assert!(rendered.contains("${FIND_MANY}"));
        assert!(rendered.contains("${ARGS}"));
    }

    #[test]
    fn interpolation_is_idempotent() {
        let mapping = TemplateMapping::new()
            .with("CLASS", "UserControllerBase")
            .with("FIND_MANY", "users")
            .with("ARGS", Expression::Placeholder("ARGS".to_string()));

        let mut once = template();
        interpolate(&mut once, &mapping);
        let mut twice = once.clone();
        interpolate(&mut twice, &mapping);
        assert_eq!(once, twice);
    }

    #[test]
    fn non_identifier_node_in_name_position_is_skipped() {
        let mut program = template();
        let mapping = TemplateMapping::new().with("CLASS", Expression::Array(vec![]));
        let mut handle = interpolate(&mut program, &mapping);
        assert!(handle.class_mut("UserControllerBase").is_none());
    }

    #[test]
    fn identifier_lookup_rejects_other_nodes() {
        let mapping = TemplateMapping::new()
            .with("FIND_ONE", Identifier::new("user"))
            .with("IMPORTS_ARRAY", Expression::Array(vec![]));
        assert_eq!(mapping.identifier("FIND_ONE").unwrap(), Some("user"));
        assert_eq!(mapping.identifier("ABSENT").unwrap(), None);
        assert!(matches!(
            mapping.identifier("IMPORTS_ARRAY"),
            Err(AugmentError::MappingShape { .. })
        ));
    }

    #[test]
    fn array_elements_default_to_empty() {
        let mapping = TemplateMapping::new().with("EXPORT_ARRAY", "oops");
        assert!(mapping.array_elements("IMPORTS_ARRAY").unwrap().is_empty());
        assert!(mapping.array_elements("EXPORT_ARRAY").is_err());
    }
}
