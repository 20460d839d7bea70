use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::{CommonConfig, PathSet};

/// Who may create, update and delete catalog resources (books, authors,
/// libraries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogPolicy {
    /// The actor needs the matching `can_*` permission, granted explicitly or
    /// implied by its role.
    #[default]
    Permission,
    /// Any authenticated actor.
    Authenticated,
    /// Only actors with the admin role, explicit permissions are ignored.
    AdminOnly,
}

/// Authorization related configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthzConfig {
    /// Policy for catalog mutations. Defaults to `permission`.
    #[serde(default = "AuthzConfig::default_catalog_policy")]
    pub catalog_policy: CatalogPolicy,

    /// Whether anonymous actors may read catalog resources. When disabled,
    /// reads require the `can_view_*` permission.
    /// Defaults to true.
    #[serde(default = "AuthzConfig::default_catalog_public_read")]
    pub catalog_public_read: bool,
}

impl CommonConfig for AuthzConfig {
    fn default() -> Self {
        Self {
            catalog_policy: Self::default_catalog_policy(),
            catalog_public_read: Self::default_catalog_public_read(),
        }
    }

    fn complete(&mut self, _ps: &PathSet) -> Result<()> {
        Ok(())
    }
}

impl AuthzConfig {
    pub fn default_catalog_policy() -> CatalogPolicy {
        CatalogPolicy::default()
    }

    pub fn default_catalog_public_read() -> bool {
        true
    }
}
