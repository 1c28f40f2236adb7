// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration lookup by symbolic identifier.
//!
//! Classes are matched by exact name among top-level statements; methods by
//! exact key among class members. Absence is `None`, never an error: a
//! template may legitimately lack the declaration a step is after.

use crate::ast::{ClassDeclaration, ClassMethod, MethodKind, Program};

/// Class name of every relation-methods template (to-one and to-many).
pub const MIXIN_ID: &str = "Mixin";

/// Top-level class with the given name.
///
/// Only reachable through [`crate::template::InterpolatedTemplate`].
pub(crate) fn find_class_mut<'a>(program: &'a mut Program, id: &str) -> Option<&'a mut ClassDeclaration> {
    program.classes_mut().find(|class| class.id.is(id))
}

/// Method of `class` whose key equals `id`.
///
/// Constructors never match.
pub fn find_method_mut<'a>(class: &'a mut ClassDeclaration, id: &str) -> Option<&'a mut ClassMethod> {
    class
        .methods_mut()
        .find(|method| method.kind == MethodKind::Method && method.key.is(id))
}
