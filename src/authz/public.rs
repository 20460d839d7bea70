use std::collections::BTreeSet;

use crate::types::action::Action;
use crate::types::resource::ResourceKind;

use super::{Authorizer, AuthzRequest, AuthzResponse};

/// Lets everyone, anonymous actors included, read publicly listed kinds.
pub struct PublicReadAuthorizer {
    kinds: BTreeSet<ResourceKind>,
}

impl PublicReadAuthorizer {
    pub fn new(kinds: BTreeSet<ResourceKind>) -> Self {
        Self { kinds }
    }
}

impl Authorizer for PublicReadAuthorizer {
    fn authorize_request(&self, req: &AuthzRequest) -> AuthzResponse {
        if req.action == Action::Read && self.kinds.contains(&req.resource.kind) {
            return AuthzResponse::Allow;
        }

        AuthzResponse::Continue
    }
}

#[cfg(test)]
mod tests {
    use crate::types::actor::Actor;
    use crate::types::resource::Resource;

    use super::*;

    #[test]
    fn test_public_read() {
        let authorizer =
            PublicReadAuthorizer::new([ResourceKind::Post, ResourceKind::Book].into());
        let anon = Actor::Anonymous;

        let post = Resource::new(ResourceKind::Post, 1).owned_by(2);
        let req = AuthzRequest {
            actor: &anon,
            action: Action::Read,
            resource: &post,
        };
        assert_eq!(authorizer.authorize_request(&req), AuthzResponse::Allow);

        let req = AuthzRequest {
            action: Action::Update,
            ..req
        };
        assert_eq!(authorizer.authorize_request(&req), AuthzResponse::Continue);

        let profile = Resource::new(ResourceKind::Profile, 2).owned_by(2);
        let req = AuthzRequest {
            actor: &anon,
            action: Action::Read,
            resource: &profile,
        };
        assert_eq!(authorizer.authorize_request(&req), AuthzResponse::Continue);
    }
}
