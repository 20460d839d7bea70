use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub type UserId = u64;

/// Library roles, ordered by precedence. A higher role holds every
/// capability of the roles below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Member,
    Librarian,
    Admin,
}

impl Role {
    /// All roles from lowest to highest.
    pub const ALL: [Role; 3] = [Role::Member, Role::Librarian, Role::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Librarian => "librarian",
            Role::Admin => "admin",
        }
    }

    /// Whether this role holds the capabilities of `other`.
    pub fn implies(self, other: Role) -> bool {
        self >= other
    }

    /// This role and every role below it.
    pub fn with_lower(self) -> impl Iterator<Item = Role> {
        Self::ALL.into_iter().filter(move |role| self.implies(*role))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "member" => Ok(Role::Member),
            "librarian" => Ok(Role::Librarian),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("unknown role '{s}'")),
        }
    }
}

/// The identity performing an operation. Resolved by the caller from a
/// session or token before any authorization happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Actor {
    Anonymous,
    User(UserInfo),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: UserId,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Explicitly granted permission names, e.g. `can_delete_book`.
    #[serde(default)]
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub permissions: BTreeSet<String>,
}

impl Actor {
    pub fn user(id: UserId) -> Self {
        Actor::User(UserInfo {
            id,
            role: None,
            permissions: BTreeSet::new(),
        })
    }

    pub fn with_role(self, role: Role) -> Self {
        match self {
            Actor::Anonymous => Actor::Anonymous,
            Actor::User(mut info) => {
                info.role = Some(role);
                Actor::User(info)
            }
        }
    }

    pub fn with_permission(self, name: impl Into<String>) -> Self {
        match self {
            Actor::Anonymous => Actor::Anonymous,
            Actor::User(mut info) => {
                info.permissions.insert(name.into());
                Actor::User(info)
            }
        }
    }

    #[inline]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Actor::Anonymous)
    }

    pub fn id(&self) -> Option<UserId> {
        match self {
            Actor::Anonymous => None,
            Actor::User(info) => Some(info.id),
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Actor::Anonymous => None,
            Actor::User(info) => info.role,
        }
    }

    pub fn has_permission(&self, name: &str) -> bool {
        match self {
            Actor::Anonymous => false,
            Actor::User(info) => info.permissions.contains(name),
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Anonymous => f.write_str("anonymous"),
            Actor::User(info) => match info.role {
                Some(role) => write!(f, "user#{} ({role})", info.id),
                None => write!(f, "user#{}", info.id),
            },
        }
    }
}
