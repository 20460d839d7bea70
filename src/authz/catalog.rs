use std::collections::BTreeSet;

use serde::Serialize;

use crate::types::action::Action;
use crate::types::actor::{Actor, Role};
use crate::types::decision::DenyReason;
use crate::types::resource::{ResourceKind, Semantics};

use super::config::CatalogPolicy;
use super::{Authorizer, AuthzRequest, AuthzResponse};

/// The permission an actor must hold to perform `action` on a catalog kind.
///
/// Every entry is spelled out. Kinds outside the catalog have no entry and
/// are never authorized by permission names.
pub fn required_permission(kind: ResourceKind, action: Action) -> Option<&'static str> {
    let name = match (kind, action) {
        (ResourceKind::Book, Action::Read) => "can_view_book",
        (ResourceKind::Book, Action::Create) => "can_add_book",
        (ResourceKind::Book, Action::Update) => "can_change_book",
        (ResourceKind::Book, Action::Delete) => "can_delete_book",

        (ResourceKind::Author, Action::Read) => "can_view_author",
        (ResourceKind::Author, Action::Create) => "can_add_author",
        (ResourceKind::Author, Action::Update) => "can_change_author",
        (ResourceKind::Author, Action::Delete) => "can_delete_author",

        (ResourceKind::Library, Action::Read) => "can_view_library",
        (ResourceKind::Library, Action::Create) => "can_add_library",
        (ResourceKind::Library, Action::Update) => "can_change_library",
        (ResourceKind::Library, Action::Delete) => "can_delete_library",

        _ => return None,
    };
    Some(name)
}

/// Permissions a role adds on top of the roles below it.
pub fn role_grants(role: Role) -> &'static [&'static str] {
    match role {
        Role::Member => &["can_view_book", "can_view_author", "can_view_library"],
        Role::Librarian => &[
            "can_add_book",
            "can_change_book",
            "can_add_author",
            "can_change_author",
            "can_add_library",
            "can_change_library",
        ],
        Role::Admin => &["can_delete_book", "can_delete_author", "can_delete_library"],
    }
}

/// Whether the actor holds `name`, either granted explicitly or implied by
/// its role.
pub fn holds_permission(actor: &Actor, name: &str) -> bool {
    if actor.has_permission(name) {
        return true;
    }
    match actor.role() {
        Some(role) => role
            .with_lower()
            .any(|role| role_grants(role).contains(&name)),
        None => false,
    }
}

/// The resolved capability set of an actor: explicit grants plus everything
/// its role implies.
pub fn capabilities(actor: &Actor) -> BTreeSet<String> {
    let mut caps = BTreeSet::new();
    if let Actor::User(info) = actor {
        caps.extend(info.permissions.iter().cloned());
        if let Some(role) = info.role {
            for role in role.with_lower() {
                caps.extend(role_grants(role).iter().map(|name| name.to_string()));
            }
        }
    }
    caps
}

/// One row of the permission table.
#[derive(Debug, Clone, Serialize)]
pub struct PermissionRule {
    pub kind: ResourceKind,
    pub action: Action,
    pub permission: &'static str,
    /// The lowest role whose grants include the permission.
    pub granted_from: Option<Role>,
}

pub fn permission_rules() -> Vec<PermissionRule> {
    let mut rules = Vec::new();
    for kind in ResourceKind::ALL {
        for action in Action::ALL {
            let Some(permission) = required_permission(kind, action) else {
                continue;
            };
            let granted_from = Role::ALL
                .into_iter()
                .find(|role| role_grants(*role).contains(&permission));
            rules.push(PermissionRule {
                kind,
                action,
                permission,
                granted_from,
            });
        }
    }
    rules
}

/// Authorizer for catalog kinds (books, authors, libraries), which have no
/// owner. What it checks depends on the configured [`CatalogPolicy`].
pub struct CatalogAuthorizer {
    policy: CatalogPolicy,
}

impl CatalogAuthorizer {
    pub fn new(policy: CatalogPolicy) -> Self {
        Self { policy }
    }

    fn check_permission(req: &AuthzRequest) -> AuthzResponse {
        let Some(name) = required_permission(req.resource.kind, req.action) else {
            return AuthzResponse::Continue;
        };
        if holds_permission(req.actor, name) {
            return AuthzResponse::Allow;
        }
        AuthzResponse::Deny(DenyReason::MissingPermission)
    }
}

impl Authorizer for CatalogAuthorizer {
    fn authorize_request(&self, req: &AuthzRequest) -> AuthzResponse {
        if req.resource.kind.semantics() != Semantics::Catalog {
            return AuthzResponse::Continue;
        }
        if req.actor.is_anonymous() {
            return AuthzResponse::Deny(DenyReason::Unauthenticated);
        }

        match self.policy {
            CatalogPolicy::Permission => Self::check_permission(req),
            CatalogPolicy::Authenticated => AuthzResponse::Allow,
            CatalogPolicy::AdminOnly => {
                if req.action == Action::Read {
                    return Self::check_permission(req);
                }
                if req.actor.role() == Some(Role::Admin) {
                    return AuthzResponse::Allow;
                }
                AuthzResponse::Deny(DenyReason::InsufficientRole)
            }
        }
    }
}
