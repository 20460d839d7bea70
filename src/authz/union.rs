use super::anonymous::AnonymousAuthorizer;
use super::catalog::CatalogAuthorizer;
use super::ownership::OwnershipAuthorizer;
use super::public::PublicReadAuthorizer;
use super::role::RoleGateAuthorizer;
use super::social::SocialAuthorizer;
use super::{Authorizer, AuthzRequest, AuthzResponse};

pub enum UnionAuthorizer {
    PublicRead(PublicReadAuthorizer),
    Anonymous(AnonymousAuthorizer),
    Ownership(OwnershipAuthorizer),
    Catalog(CatalogAuthorizer),
    Social(SocialAuthorizer),
    RoleGate(RoleGateAuthorizer),
}

impl Authorizer for UnionAuthorizer {
    fn authorize_request(&self, req: &AuthzRequest) -> AuthzResponse {
        match self {
            UnionAuthorizer::PublicRead(a) => a.authorize_request(req),
            UnionAuthorizer::Anonymous(a) => a.authorize_request(req),
            UnionAuthorizer::Ownership(o) => o.authorize_request(req),
            UnionAuthorizer::Catalog(c) => c.authorize_request(req),
            UnionAuthorizer::Social(s) => s.authorize_request(req),
            UnionAuthorizer::RoleGate(r) => r.authorize_request(req),
        }
    }
}
