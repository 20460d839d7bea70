use crate::types::action::Action;
use crate::types::decision::DenyReason;
use crate::types::resource::Semantics;

use super::{Authorizer, AuthzRequest, AuthzResponse};

/// Authorizer for authored resources (posts, comments, likes, notifications,
/// profiles).
///
/// - Update and Delete are allowed only for the owner. No role bypasses this.
/// - Read of a private kind is allowed only for the owner.
/// - Create is allowed for kinds users may create themselves.
///
/// Anonymous actors never reach this authorizer in a chain, but a missing id
/// still never matches an owner.
pub struct OwnershipAuthorizer;

impl OwnershipAuthorizer {
    pub fn new() -> Self {
        Self
    }
}

impl Authorizer for OwnershipAuthorizer {
    fn authorize_request(&self, req: &AuthzRequest) -> AuthzResponse {
        let kind = req.resource.kind;
        if kind.semantics() != Semantics::Ownership {
            return AuthzResponse::Continue;
        }

        match req.action {
            Action::Create => {
                if kind.is_user_creatable() {
                    return AuthzResponse::Allow;
                }
                AuthzResponse::Continue
            }
            Action::Read | Action::Update | Action::Delete => {
                let owner = req.resource.owner;
                if owner.is_some() && req.actor.id() == owner {
                    return AuthzResponse::Allow;
                }
                AuthzResponse::Deny(DenyReason::NotOwner)
            }
        }
    }
}
