// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mutable tree traversal.
//!
//! Same shape as `syn::visit_mut`: each `visit_*` method defaults to the
//! matching `walk_*` function, which recurses into children. Override a
//! method to intercept a node kind; call the walker from the override to
//! keep descending.

use super::{
    ClassDeclaration, ClassMember, ClassMethod, ClassProperty, Decorator, Expression,
    ImportDeclaration, Name, ObjectMember, Param, Program, Statement, TypeRef
};

/// Mutable visitor over a [`Program`].
pub trait VisitMut {
    /// Visit a program.
    fn visit_program_mut(&mut self, node: &mut Program) {
        walk_program_mut(self, node);
    }

    /// Visit a statement.
    fn visit_statement_mut(&mut self, node: &mut Statement) {
        walk_statement_mut(self, node);
    }

    /// Visit an import. Imports have no placeholders; the default is a no-op.
    fn visit_import_mut(&mut self, _node: &mut ImportDeclaration) {}

    /// Visit a class declaration.
    fn visit_class_mut(&mut self, node: &mut ClassDeclaration) {
        walk_class_mut(self, node);
    }

    /// Visit a class method.
    fn visit_method_mut(&mut self, node: &mut ClassMethod) {
        walk_method_mut(self, node);
    }

    /// Visit a class property.
    fn visit_property_mut(&mut self, node: &mut ClassProperty) {
        walk_property_mut(self, node);
    }

    /// Visit a parameter.
    fn visit_param_mut(&mut self, node: &mut Param) {
        walk_param_mut(self, node);
    }

    /// Visit a type reference.
    fn visit_type_mut(&mut self, node: &mut TypeRef) {
        walk_type_mut(self, node);
    }

    /// Visit a decorator.
    fn visit_decorator_mut(&mut self, node: &mut Decorator) {
        self.visit_expression_mut(&mut node.expression);
    }

    /// Visit an expression.
    fn visit_expression_mut(&mut self, node: &mut Expression) {
        walk_expression_mut(self, node);
    }

    /// Visit an identifier-position name.
    fn visit_name_mut(&mut self, _node: &mut Name) {}
}

/// Walk all statements of a program.
pub fn walk_program_mut<V: VisitMut + ?Sized>(visitor: &mut V, node: &mut Program) {
    for stmt in &mut node.body {
        visitor.visit_statement_mut(stmt);
    }
}

/// Walk the children of a statement.
pub fn walk_statement_mut<V: VisitMut + ?Sized>(visitor: &mut V, node: &mut Statement) {
    match node {
        Statement::Import(import) => visitor.visit_import_mut(import),
        Statement::Class(class) => visitor.visit_class_mut(class),
        Statement::Expression(expr) => visitor.visit_expression_mut(expr),
        Statement::Return(expr) => {
            if let Some(expr) = expr {
                visitor.visit_expression_mut(expr);
            }
        }
        Statement::Const {
            name,
            init
        } => {
            visitor.visit_name_mut(name);
            visitor.visit_expression_mut(init);
        }
        Statement::Raw(_) => {}
    }
}

/// Walk a class: id, superclass, decorators, members.
pub fn walk_class_mut<V: VisitMut + ?Sized>(visitor: &mut V, node: &mut ClassDeclaration) {
    visitor.visit_name_mut(&mut node.id);
    if let Some(super_class) = &mut node.super_class {
        visitor.visit_name_mut(super_class);
    }
    for decorator in &mut node.decorators {
        visitor.visit_decorator_mut(decorator);
    }
    for member in &mut node.body {
        match member {
            ClassMember::Method(method) => visitor.visit_method_mut(method),
            ClassMember::Property(property) => visitor.visit_property_mut(property)
        }
    }
}

/// Walk a method: decorators, key, params, return type, body.
pub fn walk_method_mut<V: VisitMut + ?Sized>(visitor: &mut V, node: &mut ClassMethod) {
    for decorator in &mut node.decorators {
        visitor.visit_decorator_mut(decorator);
    }
    visitor.visit_name_mut(&mut node.key);
    for param in &mut node.params {
        visitor.visit_param_mut(param);
    }
    if let Some(ty) = &mut node.return_type {
        visitor.visit_type_mut(ty);
    }
    for stmt in &mut node.body {
        visitor.visit_statement_mut(stmt);
    }
}

/// Walk a property: decorators, key, type, initializer.
pub fn walk_property_mut<V: VisitMut + ?Sized>(visitor: &mut V, node: &mut ClassProperty) {
    for decorator in &mut node.decorators {
        visitor.visit_decorator_mut(decorator);
    }
    visitor.visit_name_mut(&mut node.key);
    if let Some(ty) = &mut node.type_annotation {
        visitor.visit_type_mut(ty);
    }
    if let Some(value) = &mut node.value {
        visitor.visit_expression_mut(value);
    }
}

/// Walk a parameter.
pub fn walk_param_mut<V: VisitMut + ?Sized>(visitor: &mut V, node: &mut Param) {
    for decorator in &mut node.decorators {
        visitor.visit_decorator_mut(decorator);
    }
    visitor.visit_name_mut(&mut node.name);
    if let Some(ty) = &mut node.type_annotation {
        visitor.visit_type_mut(ty);
    }
}

/// Walk a type reference and its generic arguments.
pub fn walk_type_mut<V: VisitMut + ?Sized>(visitor: &mut V, node: &mut TypeRef) {
    visitor.visit_name_mut(&mut node.name);
    for argument in &mut node.arguments {
        visitor.visit_type_mut(argument);
    }
}

/// Walk the children of an expression.
pub fn walk_expression_mut<V: VisitMut + ?Sized>(visitor: &mut V, node: &mut Expression) {
    match node {
        Expression::Identifier(_)
        | Expression::Placeholder(_)
        | Expression::StringLiteral(_)
        | Expression::This
        | Expression::Super
        | Expression::Raw(_) => {}
        Expression::Array(elements) => {
            for element in elements {
                visitor.visit_expression_mut(element);
            }
        }
        Expression::Object(members) => {
            for member in members {
                match member {
                    ObjectMember::Property {
                        key,
                        value
                    } => {
                        visitor.visit_name_mut(key);
                        visitor.visit_expression_mut(value);
                    }
                    ObjectMember::Spread(expr) => visitor.visit_expression_mut(expr)
                }
            }
        }
        Expression::Member {
            object,
            property
        } => {
            visitor.visit_expression_mut(object);
            visitor.visit_name_mut(property);
        }
        Expression::Call {
            callee,
            arguments
        } => {
            visitor.visit_expression_mut(callee);
            for argument in arguments {
                visitor.visit_expression_mut(argument);
            }
        }
        Expression::Arrow {
            params,
            body,
            ..
        } => {
            for param in params {
                visitor.visit_param_mut(param);
            }
            visitor.visit_expression_mut(body);
        }
        Expression::Await(expr) => visitor.visit_expression_mut(expr),
        Expression::Logical {
            left,
            right,
            ..
        } => {
            visitor.visit_expression_mut(left);
            visitor.visit_expression_mut(right);
        }
    }
}
