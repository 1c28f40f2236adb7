// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Imports and constructor wiring.
//!
//! Every operation here can be re-run on its own output without effect:
//! imports are deduplicated by (bound name, source module), constructor
//! parameters by name, super-call arguments by identifier.

use tracing::trace;

use crate::{
    ast::{
        Accessibility, ClassDeclaration, Expression, ImportDeclaration, ImportSpecifier, Param,
        Program, Statement, TypeRef
    },
    error::{AugmentError, Result}
};

/// Add `imports` to `program`.
///
/// Specifiers already bound from the same source are dropped. Remaining named
/// specifiers are merged into an existing named-only declaration of the same
/// source when neither declaration carries leading comments; anything else
/// becomes a new declaration placed after the last existing import. Returns
/// the number of new declarations.
pub fn add_imports(program: &mut Program, imports: impl IntoIterator<Item = ImportDeclaration>) -> usize {
    let mut added = 0;
    for mut import in imports {
        import
            .specifiers
            .retain(|specifier| !is_imported(program, specifier.imported_name(), &import.source));
        if import.specifiers.is_empty() {
            continue;
        }
        if let Some(existing) = mergeable_declaration(program, &import) {
            trace!(source = %import.source, "import specifiers merged");
            existing.specifiers.append(&mut import.specifiers);
            continue;
        }
        let position = program
            .body
            .iter()
            .rposition(|stmt| matches!(stmt, Statement::Import(_)))
            .map_or(0, |index| index + 1);
        trace!(source = %import.source, "import added");
        program.body.insert(position, Statement::Import(import));
        added += 1;
    }
    added
}

fn is_imported(program: &Program, name: &str, source: &str) -> bool {
    program
        .imports()
        .filter(|import| import.source == source)
        .any(|import| import.bound_names().any(|bound| bound == name))
}

/// Named specifiers only, and no `// @ts-ignore`-style comment attached.
fn is_plain_named(import: &ImportDeclaration) -> bool {
    import.leading_comments.is_empty()
        && import
            .specifiers
            .iter()
            .all(|specifier| matches!(specifier, ImportSpecifier::Named { .. }))
}

fn mergeable_declaration<'a>(
    program: &'a mut Program,
    import: &ImportDeclaration
) -> Option<&'a mut ImportDeclaration> {
    if !is_plain_named(import) {
        return None;
    }
    program.body.iter_mut().find_map(|stmt| match stmt {
        Statement::Import(existing)
            if existing.source == import.source && is_plain_named(existing) =>
        {
            Some(existing)
        }
        _ => None
    })
}

/// Declare a constructor-injected dependency on `class`.
///
/// Appends `<visibility> <name>: <type_name>` to the constructor parameters.
/// Returns `false` if a parameter with that name already exists.
///
/// # Errors
///
/// [`AugmentError::MissingConstructor`] if the class declares no constructor.
pub fn add_injectable_dependency(
    class: &mut ClassDeclaration,
    name: &str,
    type_name: &str,
    visibility: Accessibility
) -> Result<bool> {
    let class_name = class.display_name();
    let Some(constructor) = class.constructor_mut() else {
        return Err(AugmentError::MissingConstructor {
            class:      class_name,
            dependency: name.to_string()
        });
    };
    if constructor.params.iter().any(|param| param.name.is(name)) {
        return Ok(false);
    }
    constructor.params.push(
        Param::new(name)
            .typed(TypeRef::named(type_name))
            .with_accessibility(visibility)
    );
    trace!(class = %class_name, dependency = name, "dependency injected");
    Ok(true)
}

/// Append `identifier` to every constructor `super(...)` call in `program`.
///
/// Returns `false` when every call already passes it.
///
/// # Errors
///
/// [`AugmentError::MissingSuperCall`] when no constructor calls `super`.
pub fn add_identifier_to_constructor_super_call(program: &mut Program, identifier: &str) -> Result<bool> {
    let mut found = false;
    let mut changed = false;
    for class in program.classes_mut() {
        let Some(constructor) = class.constructor_mut() else {
            continue;
        };
        for stmt in &mut constructor.body {
            let Statement::Expression(Expression::Call {
                callee,
                arguments
            }) = stmt
            else {
                continue;
            };
            if **callee != Expression::Super {
                continue;
            }
            found = true;
            let already = arguments
                .iter()
                .any(|argument| matches!(argument, Expression::Identifier(id) if id.name() == identifier));
            if !already {
                arguments.push(Expression::ident(identifier));
                changed = true;
            }
        }
    }
    if !found {
        return Err(AugmentError::MissingSuperCall {
            identifier: identifier.to_string()
        });
    }
    Ok(changed)
}
