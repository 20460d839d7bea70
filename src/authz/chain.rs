use crate::types::decision::DenyReason;

use super::union::UnionAuthorizer;
use super::{Authorizer, AuthzRequest, AuthzResponse};

/// Runs authorizers in order until one of them decides. A request no
/// authorizer decides on is denied.
pub struct ChainAuthorizer {
    pub(super) authorizers: Vec<UnionAuthorizer>,
}

impl ChainAuthorizer {
    pub fn new(authorizers: Vec<UnionAuthorizer>) -> Self {
        Self { authorizers }
    }
}

impl Authorizer for ChainAuthorizer {
    fn authorize_request(&self, req: &AuthzRequest) -> AuthzResponse {
        for authorizer in self.authorizers.iter() {
            match authorizer.authorize_request(req) {
                AuthzResponse::Allow => return AuthzResponse::Allow,
                AuthzResponse::Continue => continue,
                AuthzResponse::Deny(reason) => return AuthzResponse::Deny(reason),
            }
        }

        AuthzResponse::Deny(DenyReason::NoMatchingRule)
    }
}

#[cfg(test)]
mod tests {
    use crate::authz::anonymous::AnonymousAuthorizer;
    use crate::authz::ownership::OwnershipAuthorizer;
    use crate::types::action::Action;
    use crate::types::actor::Actor;
    use crate::types::resource::{Resource, ResourceKind};

    use super::*;

    #[test]
    fn test_chain_fail_closed() {
        let chain = ChainAuthorizer::new(vec![]);
        let actor = Actor::user(1);
        let post = Resource::new(ResourceKind::Post, 1).owned_by(1);
        let req = AuthzRequest {
            actor: &actor,
            action: Action::Update,
            resource: &post,
        };
        assert_eq!(
            chain.authorize_request(&req),
            AuthzResponse::Deny(DenyReason::NoMatchingRule)
        );
    }

    #[test]
    fn test_chain_order() {
        let chain = ChainAuthorizer::new(vec![
            UnionAuthorizer::Anonymous(AnonymousAuthorizer::new()),
            UnionAuthorizer::Ownership(OwnershipAuthorizer::new()),
        ]);
        let post = Resource::new(ResourceKind::Post, 1).owned_by(1);

        // The first deciding authorizer wins
        let req = AuthzRequest {
            actor: &Actor::Anonymous,
            action: Action::Update,
            resource: &post,
        };
        assert_eq!(
            chain.authorize_request(&req),
            AuthzResponse::Deny(DenyReason::Unauthenticated)
        );

        let owner = Actor::user(1);
        let req = AuthzRequest {
            actor: &owner,
            ..req
        };
        assert_eq!(chain.authorize_request(&req), AuthzResponse::Allow);
    }
}
