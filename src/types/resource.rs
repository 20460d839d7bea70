use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::actor::{Role, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Post,
    Comment,
    Like,
    Notification,
    Profile,
    Feed,
    Follow,

    Book,
    Author,
    Library,

    AdminArea,
    LibrarianArea,
    MemberArea,
}

/// How mutations of a resource kind are authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Semantics {
    /// Only the owner may change or delete the resource.
    Ownership,
    /// Role and permission checks only, the resource has no owner.
    Catalog,
    /// Readable by actors holding at least the given role.
    RoleGate(Role),
    /// Readable by any authenticated actor, never written through a request.
    Authenticated,
    /// A relation from the actor to another user, the `owner` of the
    /// resource is the target user. Acting on yourself is refused.
    Relation,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 13] = [
        ResourceKind::Post,
        ResourceKind::Comment,
        ResourceKind::Like,
        ResourceKind::Notification,
        ResourceKind::Profile,
        ResourceKind::Feed,
        ResourceKind::Follow,
        ResourceKind::Book,
        ResourceKind::Author,
        ResourceKind::Library,
        ResourceKind::AdminArea,
        ResourceKind::LibrarianArea,
        ResourceKind::MemberArea,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Post => "post",
            ResourceKind::Comment => "comment",
            ResourceKind::Like => "like",
            ResourceKind::Notification => "notification",
            ResourceKind::Profile => "profile",
            ResourceKind::Feed => "feed",
            ResourceKind::Follow => "follow",
            ResourceKind::Book => "book",
            ResourceKind::Author => "author",
            ResourceKind::Library => "library",
            ResourceKind::AdminArea => "admin_area",
            ResourceKind::LibrarianArea => "librarian_area",
            ResourceKind::MemberArea => "member_area",
        }
    }

    pub fn semantics(self) -> Semantics {
        match self {
            ResourceKind::Post
            | ResourceKind::Comment
            | ResourceKind::Like
            | ResourceKind::Notification
            | ResourceKind::Profile => Semantics::Ownership,

            ResourceKind::Book | ResourceKind::Author | ResourceKind::Library => {
                Semantics::Catalog
            }

            ResourceKind::Feed => Semantics::Authenticated,
            ResourceKind::Follow => Semantics::Relation,

            ResourceKind::AdminArea => Semantics::RoleGate(Role::Admin),
            ResourceKind::LibrarianArea => Semantics::RoleGate(Role::Librarian),
            ResourceKind::MemberArea => Semantics::RoleGate(Role::Member),
        }
    }

    /// Kinds that anyone, including anonymous actors, may list and read.
    /// Catalog kinds can be made private through configuration.
    pub fn is_public_read(self) -> bool {
        match self {
            ResourceKind::Post | ResourceKind::Comment | ResourceKind::Like => true,
            ResourceKind::Book | ResourceKind::Author | ResourceKind::Library => true,
            ResourceKind::Notification | ResourceKind::Profile => false,
            ResourceKind::Feed | ResourceKind::Follow => false,
            ResourceKind::AdminArea | ResourceKind::LibrarianArea | ResourceKind::MemberArea => {
                false
            }
        }
    }

    /// Whether any authenticated actor may create this kind of resource and
    /// become its owner. Notifications and profiles are created by the system,
    /// never directly by a request.
    pub fn is_user_creatable(self) -> bool {
        matches!(
            self,
            ResourceKind::Post | ResourceKind::Comment | ResourceKind::Like
        )
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        // Accept plural collection names too, "books" -> "book".
        let name = match name.as_str() {
            "libraries" => "library",
            n => n.strip_suffix('s').unwrap_or(n),
        };
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| format!("unknown resource kind '{s}'"))
    }
}

/// The target of an action, already fetched by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub kind: ResourceKind,

    /// None for a resource that is about to be created.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The author or owner. Catalog resources have none.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserId>,
}

impl Resource {
    pub fn new(kind: ResourceKind, id: u64) -> Self {
        Self {
            kind,
            id: Some(id),
            owner: None,
        }
    }

    /// A resource that does not exist yet, used to authorize Create.
    pub fn prospective(kind: ResourceKind) -> Self {
        Self {
            kind,
            id: None,
            owner: None,
        }
    }

    pub fn owned_by(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{}#{id}", self.kind),
            None => write!(f, "{}#new", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("book".parse::<ResourceKind>().unwrap(), ResourceKind::Book);
        assert_eq!("Books".parse::<ResourceKind>().unwrap(), ResourceKind::Book);
        assert_eq!(
            "libraries".parse::<ResourceKind>().unwrap(),
            ResourceKind::Library
        );
        assert_eq!(
            "admin_area".parse::<ResourceKind>().unwrap(),
            ResourceKind::AdminArea
        );
        assert_eq!(
            "notifications".parse::<ResourceKind>().unwrap(),
            ResourceKind::Notification
        );
        assert_eq!("feed".parse::<ResourceKind>().unwrap(), ResourceKind::Feed);
        assert_eq!(
            "follows".parse::<ResourceKind>().unwrap(),
            ResourceKind::Follow
        );

        assert!("shelf".parse::<ResourceKind>().is_err());
        assert!("s".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_kind_table() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.as_str().parse::<ResourceKind>().unwrap(), kind);
            if kind.is_user_creatable() {
                assert_eq!(kind.semantics(), Semantics::Ownership);
                assert!(kind.is_public_read());
            }
            if matches!(
                kind.semantics(),
                Semantics::RoleGate(_) | Semantics::Authenticated | Semantics::Relation
            ) {
                assert!(!kind.is_public_read());
            }
        }
    }

    #[test]
    fn test_display() {
        let post = Resource::new(ResourceKind::Post, 9).owned_by(5);
        assert_eq!(post.to_string(), "post#9");
        assert_eq!(
            Resource::prospective(ResourceKind::Comment).to_string(),
            "comment#new"
        );
    }
}
