use std::collections::BTreeSet;

use log::{debug, warn};

use crate::types::resource::{ResourceKind, Semantics};

use super::anonymous::AnonymousAuthorizer;
use super::catalog::CatalogAuthorizer;
use super::chain::ChainAuthorizer;
use super::config::{AuthzConfig, CatalogPolicy};
use super::ownership::OwnershipAuthorizer;
use super::public::PublicReadAuthorizer;
use super::role::RoleGateAuthorizer;
use super::social::SocialAuthorizer;
use super::union::UnionAuthorizer;

/// Factory for building the authorization chain from configuration.
///
/// The chain runs in this order:
/// 1. Public reads
/// 2. Anonymous actors are stopped
/// 3. Ownership kinds
/// 4. Catalog kinds
/// 5. Feed and follow relations
/// 6. Role gated areas
///
/// Anything left undecided is denied by the chain itself.
pub struct AuthzFactory;

impl AuthzFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn build_authorizer(&self, cfg: &AuthzConfig) -> ChainAuthorizer {
        let mut authorizers = vec![];

        let public_kinds = Self::public_kinds(cfg);
        debug!("Publicly readable kinds: {:?}", public_kinds);
        let public_authz = PublicReadAuthorizer::new(public_kinds);
        authorizers.push(UnionAuthorizer::PublicRead(public_authz));

        let anonymous_authz = AnonymousAuthorizer::new();
        authorizers.push(UnionAuthorizer::Anonymous(anonymous_authz));

        let ownership_authz = OwnershipAuthorizer::new();
        authorizers.push(UnionAuthorizer::Ownership(ownership_authz));

        if cfg.catalog_policy == CatalogPolicy::Authenticated {
            warn!(
                "Every authenticated user may modify catalog resources \
                 (catalog_policy = authenticated)"
            );
        }
        let catalog_authz = CatalogAuthorizer::new(cfg.catalog_policy);
        authorizers.push(UnionAuthorizer::Catalog(catalog_authz));

        let social_authz = SocialAuthorizer::new();
        authorizers.push(UnionAuthorizer::Social(social_authz));

        let role_authz = RoleGateAuthorizer::new();
        authorizers.push(UnionAuthorizer::RoleGate(role_authz));

        ChainAuthorizer::new(authorizers)
    }

    fn public_kinds(cfg: &AuthzConfig) -> BTreeSet<ResourceKind> {
        ResourceKind::ALL
            .into_iter()
            .filter(|kind| kind.is_public_read())
            .filter(|kind| cfg.catalog_public_read || kind.semantics() != Semantics::Catalog)
            .collect()
    }
}
