// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Lifecycle event vocabulary.

use std::{collections::BTreeMap, fmt};

/// Host pipeline event a plugin can hook into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventName {
    /// Server `.env` listing.
    CreateServerDotEnv,
    /// Server `package.json`.
    CreateServerPackageJson,
    /// Server auth scaffolding.
    CreateServerAuth,
    /// Entity base module.
    CreateEntityModuleBase,
    /// Entity controller base class.
    CreateEntityControllerBase,
    /// To-many relation methods of an entity controller.
    CreateEntityControllerToManyRelationMethods,
    /// Entity resolver base class.
    CreateEntityResolverBase,
    /// To-one relation methods of an entity resolver.
    CreateEntityResolverToOneRelationMethods,
    /// To-many relation methods of an entity resolver.
    CreateEntityResolverToManyRelationMethods,
    /// Entity service.
    CreateEntityService,
    /// Entity base service.
    CreateEntityServiceBase
}

impl EventName {
    /// Name as registered with the host.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateServerDotEnv => "CreateServerDotEnv",
            Self::CreateServerPackageJson => "CreateServerPackageJson",
            Self::CreateServerAuth => "CreateServerAuth",
            Self::CreateEntityModuleBase => "CreateEntityModuleBase",
            Self::CreateEntityControllerBase => "CreateEntityControllerBase",
            Self::CreateEntityControllerToManyRelationMethods => {
                "CreateEntityControllerToManyRelationMethods"
            }
            Self::CreateEntityResolverBase => "CreateEntityResolverBase",
            Self::CreateEntityResolverToOneRelationMethods => {
                "CreateEntityResolverToOneRelationMethods"
            }
            Self::CreateEntityResolverToManyRelationMethods => {
                "CreateEntityResolverToManyRelationMethods"
            }
            Self::CreateEntityService => "CreateEntityService",
            Self::CreateEntityServiceBase => "CreateEntityServiceBase"
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phases a plugin handles for one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Phases {
    /// Mutates event parameters ahead of default serialization.
    pub before: bool,
    /// Contributes modules once the event's modules are final.
    pub after:  bool
}

impl Phases {
    /// Before phase only.
    pub const BEFORE: Self = Self {
        before: true,
        after:  false
    };

    /// After phase only.
    pub const AFTER: Self = Self {
        before: false,
        after:  true
    };

    /// Both phases.
    pub const BOTH: Self = Self {
        before: true,
        after:  true
    };
}

/// Registration table returned by a plugin.
pub type Events = BTreeMap<EventName, Phases>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_host_names() {
        assert_eq!(
            EventName::CreateEntityResolverToOneRelationMethods.to_string(),
            "CreateEntityResolverToOneRelationMethods"
        );
    }

    #[test]
    fn phase_constants() {
        assert!(Phases::BOTH.before && Phases::BOTH.after);
        assert!(!Phases::BEFORE.after);
        assert!(!Phases::AFTER.before);
    }
}
