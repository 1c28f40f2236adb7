// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Output modules and import paths.

use serde::{Deserialize, Serialize};

/// Generated file: path plus source text.
///
/// A module with an empty path and empty code is the "nothing to add"
/// sentinel; hosts drop it instead of writing an empty file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Path relative to the output root.
    pub path: String,
    /// File contents.
    pub code: String
}

impl Module {
    /// Module with the given path and code.
    pub fn new(path: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            code: code.into()
        }
    }

    /// The empty sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this is the empty sentinel.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.code.is_empty()
    }
}

/// Module specifier importing `to` from a file at `from`.
///
/// Both are paths of TypeScript files relative to the same root. The `.ts`
/// extension is dropped and the result always starts with `./` or `../`.
///
/// ```
/// use auth_codegen_core::module::relative_import_path;
///
/// assert_eq!(
///     relative_import_path("src/user/base/user.service.base.ts", "src/auth/password.service.ts"),
///     "../../auth/password.service"
/// );
/// ```
pub fn relative_import_path(from: &str, to: &str) -> String {
    let from_dir: Vec<&str> = {
        let mut segments = segments(from);
        segments.pop();
        segments
    };
    let target = segments(to.strip_suffix(".ts").unwrap_or(to));
    let common = from_dir
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();
    let ups = from_dir.len() - common;
    let rest = target[common..].join("/");
    if ups == 0 {
        format!("./{rest}")
    } else {
        format!("{}{rest}", "../".repeat(ups))
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_imports_one_level_up() {
        assert_eq!(
            relative_import_path("src/user/user.service.ts", "src/auth/password.service.ts"),
            "../auth/password.service"
        );
    }

    #[test]
    fn base_service_imports_two_levels_up() {
        assert_eq!(
            relative_import_path("src/user/base/user.service.base.ts", "src/prisma.util.ts"),
            "../../prisma.util"
        );
    }

    #[test]
    fn same_directory_gets_dot_prefix() {
        assert_eq!(
            relative_import_path("./src/auth/auth.module.ts", "src/auth/acl.module.ts"),
            "./acl.module"
        );
    }

    #[test]
    fn empty_sentinel() {
        assert!(Module::empty().is_empty());
        assert!(!Module::new("src/grants.json", "[]").is_empty());
    }
}
