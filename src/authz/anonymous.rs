use crate::types::decision::DenyReason;

use super::{Authorizer, AuthzRequest, AuthzResponse};

/// Stops anonymous actors at the first non-public request. Public reads were
/// already allowed earlier in the chain, everything else needs a login.
pub struct AnonymousAuthorizer;

impl AnonymousAuthorizer {
    pub fn new() -> Self {
        Self
    }
}

impl Authorizer for AnonymousAuthorizer {
    fn authorize_request(&self, req: &AuthzRequest) -> AuthzResponse {
        if req.actor.is_anonymous() {
            return AuthzResponse::Deny(DenyReason::Unauthenticated);
        }

        AuthzResponse::Continue
    }
}
