use crate::types::action::Action;
use crate::types::actor::{Actor, Role};
use crate::types::decision::DenyReason;
use crate::types::resource::Semantics;

use super::{Authorizer, AuthzRequest, AuthzResponse};

/// The highest role class that applies to the actor, Admin taking precedence
/// over Librarian over Member.
pub fn role_class(actor: &Actor) -> Option<Role> {
    actor.role()
}

/// Authorizer for the role dashboards. Reading an area requires at least the
/// area's role; the areas cannot be written to.
pub struct RoleGateAuthorizer;

impl RoleGateAuthorizer {
    pub fn new() -> Self {
        Self
    }
}

impl Authorizer for RoleGateAuthorizer {
    fn authorize_request(&self, req: &AuthzRequest) -> AuthzResponse {
        let Semantics::RoleGate(required) = req.resource.kind.semantics() else {
            return AuthzResponse::Continue;
        };
        if req.action != Action::Read {
            return AuthzResponse::Continue;
        }

        match role_class(req.actor) {
            Some(role) if role.implies(required) => AuthzResponse::Allow,
            _ => AuthzResponse::Deny(DenyReason::InsufficientRole),
        }
    }
}
