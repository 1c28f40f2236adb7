// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Role grants file.
//!
//! Turns entity permissions into the grant list the access-control library
//! loads at startup, written as `{src}/grants.json`:
//!
//! ```json
//! [
//!   { "role": "admin", "resource": "User", "action": "read:any", "attributes": "*" }
//! ]
//! ```

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    error::{AugmentError, Result},
    model::{ModelView, PermissionKind},
    module::Module,
    settings::Possession
};

/// One grant entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Grant {
    /// Role name.
    pub role:       String,
    /// Entity name.
    pub resource:   String,
    /// `<verb>:<possession>`.
    pub action:     String,
    /// Attribute glob.
    pub attributes: String
}

/// Grants for every role allowed by every entity permission.
///
/// Actions sharing a verb collapse into one grant.
pub fn create_grants(model: &dyn ModelView, possession: Possession) -> Vec<Grant> {
    let mut seen = BTreeSet::new();
    let mut grants = Vec::new();
    for entity in model.entities() {
        for permission in &entity.permissions {
            let roles: Vec<&str> = match &permission.kind {
                PermissionKind::AllRoles => model.roles().iter().map(|role| role.name.as_str()).collect(),
                PermissionKind::Granular(roles) => roles.iter().map(String::as_str).collect(),
                PermissionKind::Disabled => Vec::new()
            };
            for role in roles {
                let grant = Grant {
                    role:       role.to_string(),
                    resource:   entity.name.clone(),
                    action:     format!("{}:{}", permission.action.verb(), possession.as_str()),
                    attributes: "*".to_string()
                };
                if seen.insert(grant.clone()) {
                    grants.push(grant);
                }
            }
        }
    }
    grants
}

/// `{src}/grants.json`, or `None` when the model declares no roles.
///
/// # Errors
///
/// [`AugmentError::GrantsSerialization`] if serialization fails.
pub fn create_grants_module(
    src_directory: &str,
    model: &dyn ModelView,
    possession: Possession
) -> Result<Option<Module>> {
    if model.roles().is_empty() {
        return Ok(None);
    }
    let grants = create_grants(model, possession);
    let code = serde_json::to_string_pretty(&grants).map_err(AugmentError::GrantsSerialization)?;
    Ok(Some(Module::new(format!("{src_directory}/grants.json"), code)))
}
