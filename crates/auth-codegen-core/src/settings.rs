// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Plugin installation settings.
//!
//! The host stores per-installation settings as JSON. Every key is optional;
//! missing keys fall back to the defaults below.
//!
//! | Key | Default |
//! |-----|---------|
//! | `possession` | `"any"` |
//! | `aclInterceptors` | `true` |
//! | `jwtSecretKey` | `"Change_ME!!!"` |
//! | `jwtExpiration` | `"2d"` |
//! | `bcryptSalt` | `10` |
//! | `staticDirectory` | `"static"` |

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Ownership scope written into permission decorators and grants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Possession {
    /// Any record of the resource.
    #[default]
    Any,
    /// Only records owned by the caller.
    Own
}

impl Possession {
    /// Token used by the access-control library.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Own => "own"
        }
    }
}

/// Settings of one plugin installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSettings {
    /// Possession of every generated permission.
    #[serde(default)]
    pub possession:       Possession,
    /// Attach ACL interceptors to controller methods.
    #[serde(default = "default_acl_interceptors")]
    pub acl_interceptors: bool,
    /// `JWT_SECRET_KEY` written to the server environment.
    #[serde(default = "default_jwt_secret_key")]
    pub jwt_secret_key:   String,
    /// `JWT_EXPIRATION` written to the server environment.
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration:   String,
    /// `BCRYPT_SALT` written to the server environment.
    #[serde(default = "default_bcrypt_salt")]
    pub bcrypt_salt:      u32,
    /// Root of the static module sets (`auth`, `interceptors`,
    /// `package-json`).
    #[serde(default = "default_static_directory")]
    pub static_directory: PathBuf
}

fn default_acl_interceptors() -> bool {
    true
}

fn default_jwt_secret_key() -> String {
    "Change_ME!!!".to_string()
}

fn default_jwt_expiration() -> String {
    "2d".to_string()
}

fn default_bcrypt_salt() -> u32 {
    10
}

fn default_static_directory() -> PathBuf {
    PathBuf::from("static")
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            possession:       Possession::default(),
            acl_interceptors: default_acl_interceptors(),
            jwt_secret_key:   default_jwt_secret_key(),
            jwt_expiration:   default_jwt_expiration(),
            bcrypt_salt:      default_bcrypt_salt(),
            static_directory: default_static_directory()
        }
    }
}

impl AuthSettings {
    /// Decode host settings. `null` yields the defaults.
    ///
    /// # Errors
    ///
    /// [`crate::AugmentError::Settings`] for malformed JSON values.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Environment variables the generated server needs.
    pub fn env_variables(&self) -> Vec<EnvVariable> {
        vec![
            EnvVariable::new("BCRYPT_SALT", self.bcrypt_salt.to_string()),
            EnvVariable::new("JWT_SECRET_KEY", self.jwt_secret_key.clone()),
            EnvVariable::new("JWT_EXPIRATION", self.jwt_expiration.clone()),
        ]
    }
}

/// One `.env` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVariable {
    /// Variable name.
    pub name:  String,
    /// Variable value.
    pub value: String
}

impl EnvVariable {
    /// Build an entry.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name:  name.into(),
            value: value.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn null_and_empty_yield_defaults() {
        assert_eq!(AuthSettings::from_value(serde_json::Value::Null).unwrap(), AuthSettings::default());
        assert_eq!(AuthSettings::from_value(json!({})).unwrap(), AuthSettings::default());
    }

    #[test]
    fn camel_case_keys_override_defaults() {
        let settings = AuthSettings::from_value(json!({
            "possession": "own",
            "aclInterceptors": false,
            "bcryptSalt": 12
        }))
        .unwrap();
        assert_eq!(settings.possession, Possession::Own);
        assert!(!settings.acl_interceptors);
        assert_eq!(settings.bcrypt_salt, 12);
        assert_eq!(settings.jwt_expiration, "2d");
    }

    #[test]
    fn malformed_settings_are_rejected() {
        let err = AuthSettings::from_value(json!({ "possession": "everyone" })).unwrap_err();
        assert!(matches!(err, crate::AugmentError::Settings(_)));
    }

    #[test]
    fn env_variables_reflect_settings() {
        let vars = AuthSettings::default().env_variables();
        assert_eq!(
            vars,
            vec![
                EnvVariable::new("BCRYPT_SALT", "10"),
                EnvVariable::new("JWT_SECRET_KEY", "Change_ME!!!"),
                EnvVariable::new("JWT_EXPIRATION", "2d"),
            ]
        );
    }
}
