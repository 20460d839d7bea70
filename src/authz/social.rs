use crate::types::action::Action;
use crate::types::decision::DenyReason;
use crate::types::resource::Semantics;

use super::{Authorizer, AuthzRequest, AuthzResponse};

/// Authorizer for the social graph: the personal feed and follow relations.
///
/// - The feed can be read by any authenticated actor. It is never written.
/// - Following and unfollowing target another user, the resource owner. An
///   actor cannot follow or unfollow themselves.
///
/// Anything else is left to the end of the chain.
pub struct SocialAuthorizer;

impl SocialAuthorizer {
    pub fn new() -> Self {
        Self
    }
}

impl Authorizer for SocialAuthorizer {
    fn authorize_request(&self, req: &AuthzRequest) -> AuthzResponse {
        let semantics = req.resource.kind.semantics();
        if !matches!(semantics, Semantics::Authenticated | Semantics::Relation) {
            return AuthzResponse::Continue;
        }
        if req.actor.is_anonymous() {
            return AuthzResponse::Deny(DenyReason::Unauthenticated);
        }

        match (semantics, req.action) {
            (Semantics::Authenticated, Action::Read) => AuthzResponse::Allow,
            (Semantics::Relation, Action::Create | Action::Delete) => {
                let Some(target) = req.resource.owner else {
                    return AuthzResponse::Continue;
                };
                if req.actor.id() == Some(target) {
                    return AuthzResponse::Deny(DenyReason::SelfTarget);
                }
                AuthzResponse::Allow
            }
            _ => AuthzResponse::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::actor::Actor;
    use crate::types::resource::{Resource, ResourceKind};

    use super::*;

    fn check(actor: &Actor, action: Action, resource: &Resource) -> AuthzResponse {
        let req = AuthzRequest {
            actor,
            action,
            resource,
        };
        SocialAuthorizer::new().authorize_request(&req)
    }

    #[test]
    fn test_feed() {
        let feed = Resource::prospective(ResourceKind::Feed);
        assert_eq!(
            check(&Actor::user(4), Action::Read, &feed),
            AuthzResponse::Allow
        );
        assert_eq!(
            check(&Actor::Anonymous, Action::Read, &feed),
            AuthzResponse::Deny(DenyReason::Unauthenticated)
        );
        assert_eq!(
            check(&Actor::user(4), Action::Update, &feed),
            AuthzResponse::Continue
        );
    }

    #[test]
    fn test_follow() {
        let alice = Actor::user(1);
        let follow_bob = Resource::prospective(ResourceKind::Follow).owned_by(2);
        assert_eq!(
            check(&alice, Action::Create, &follow_bob),
            AuthzResponse::Allow
        );
        assert_eq!(
            check(&alice, Action::Delete, &follow_bob),
            AuthzResponse::Allow
        );

        let follow_self = Resource::prospective(ResourceKind::Follow).owned_by(1);
        assert_eq!(
            check(&alice, Action::Create, &follow_self),
            AuthzResponse::Deny(DenyReason::SelfTarget)
        );
        assert_eq!(
            check(&alice, Action::Delete, &follow_self),
            AuthzResponse::Deny(DenyReason::SelfTarget)
        );

        // Without a target there is nothing to decide on
        let no_target = Resource::prospective(ResourceKind::Follow);
        assert_eq!(
            check(&alice, Action::Create, &no_target),
            AuthzResponse::Continue
        );
        assert_eq!(
            check(&alice, Action::Update, &follow_bob),
            AuthzResponse::Continue
        );
    }

    #[test]
    fn test_other_kinds_pass() {
        let post = Resource::new(ResourceKind::Post, 1).owned_by(2);
        assert_eq!(
            check(&Actor::user(1), Action::Update, &post),
            AuthzResponse::Continue
        );
        assert_eq!(
            check(&Actor::Anonymous, Action::Update, &post),
            AuthzResponse::Continue
        );
    }
}
