// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Node constructors.
//!
//! Short helpers for the handful of shapes the augmentation steps insert.
//! They keep call sites close to the TypeScript they produce:
//!
//! ```rust,ignore
//! // this.passwordService.hash(args.data.password)
//! call(member_path("this.passwordService.hash"), vec![member_path("args.data.password")])
//! ```

use super::{
    Decorator, Expression, Identifier, ImportDeclaration, ImportSpecifier, LogicalOperator,
    Name, ObjectMember, Param
};

/// Identifier expression.
pub fn ident(name: &str) -> Expression {
    Expression::ident(name)
}

/// String literal expression.
pub fn string(value: &str) -> Expression {
    Expression::StringLiteral(value.to_string())
}

/// `object.property`
pub fn member(object: Expression, property: &str) -> Expression {
    Expression::Member {
        object:   Box::new(object),
        property: Name::from(property)
    }
}

/// Dotted path, `this` aware: `"this.prisma.user"`.
pub fn member_path(path: &str) -> Expression {
    let mut segments = path.split('.');
    let head = match segments.next() {
        Some("this") => Expression::This,
        Some(first) => ident(first),
        None => return ident(path)
    };
    segments.fold(head, member)
}

/// `callee(arguments)`
pub fn call(callee: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::Call {
        callee: Box::new(callee),
        arguments
    }
}

/// `await expr`
pub fn await_expr(expr: Expression) -> Expression {
    Expression::Await(Box::new(expr))
}

/// `left && right`
pub fn and(left: Expression, right: Expression) -> Expression {
    Expression::Logical {
        operator: LogicalOperator::And,
        left:     Box::new(left),
        right:    Box::new(right)
    }
}

/// `(params) => body`
pub fn arrow(params: &[&str], body: Expression) -> Expression {
    Expression::Arrow {
        params:   params.iter().map(|name| Param::new(*name)).collect(),
        body:     Box::new(body),
        is_async: false
    }
}

/// `key: value` object member.
pub fn property(key: &str, value: Expression) -> ObjectMember {
    ObjectMember::Property {
        key: Name::from(key),
        value
    }
}

/// `...expr` object member.
pub fn spread(expr: Expression) -> ObjectMember {
    ObjectMember::Spread(expr)
}

/// `{ ...members }`
pub fn object(members: Vec<ObjectMember>) -> Expression {
    Expression::Object(members)
}

/// `@namespace.name(arguments)`
pub fn decorator_call(namespace: &str, name: &str, arguments: Vec<Expression>) -> Decorator {
    Decorator::new(call(member(ident(namespace), name), arguments))
}

/// `import { a, b } from "source";`
pub fn import_names(names: &[&str], source: &str) -> ImportDeclaration {
    ImportDeclaration {
        specifiers:       names
            .iter()
            .map(|name| ImportSpecifier::Named {
                imported: Identifier::new(*name),
                local:    None
            })
            .collect(),
        source:           source.to_string(),
        leading_comments: Vec::new()
    }
}

/// `import * as local from "source";`
pub fn import_namespace(local: &str, source: &str) -> ImportDeclaration {
    ImportDeclaration {
        specifiers:       vec![ImportSpecifier::Namespace(Identifier::new(local))],
        source:           source.to_string(),
        leading_comments: Vec::new()
    }
}

/// Prefix an import with a `// @ts-ignore` line.
pub fn ts_ignore(mut import: ImportDeclaration) -> ImportDeclaration {
    import.leading_comments.push("@ts-ignore".to_string());
    import
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_path_starts_with_this() {
        let expr = member_path("this.passwordService.hash");
        let Expression::Member {
            object,
            property
        } = expr
        else {
            panic!("expected member expression");
        };
        assert!(property.is("hash"));
        assert_eq!(*object, member(Expression::This, "passwordService"));
    }

    #[test]
    fn member_path_single_segment_is_identifier() {
        assert_eq!(member_path("args"), ident("args"));
    }

    #[test]
    fn import_names_builds_named_specifiers() {
        let import = import_names(&["ACLModule"], "../../auth/acl.module");
        assert_eq!(import.source, "../../auth/acl.module");
        assert_eq!(import.bound_names().collect::<Vec<_>>(), vec!["ACLModule"]);
    }

    #[test]
    fn ts_ignore_adds_comment() {
        let import = ts_ignore(import_namespace("gqlACGuard", "../../auth/gqlAC.guard"));
        assert_eq!(import.leading_comments, vec!["@ts-ignore".to_string()]);
    }
}
