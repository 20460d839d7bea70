use std::collections::BTreeSet;

use crate::config::CommonConfig;
use crate::types::action::Action;
use crate::types::actor::{Actor, Role, UserId};
use crate::types::decision::{Decision, DenyReason};
use crate::types::resource::{Resource, ResourceKind};

use super::catalog;
use super::chain::ChainAuthorizer;
use super::config::AuthzConfig;
use super::factory::AuthzFactory;
use super::role;
use super::{Authorizer, AuthzRequest, AuthzResponse};

/// Decides whether an actor may perform an action on a resource.
///
/// The evaluator holds only the configured chain and never mutates it, so a
/// single instance can be shared between request handlers. Every call is a
/// pure function of its arguments: no I/O and no logging happen here, audit
/// belongs to the calling layer (see [`crate::guard::Guard`]).
pub struct AccessControlEvaluator {
    chain: ChainAuthorizer,
}

impl AccessControlEvaluator {
    pub fn new(cfg: &AuthzConfig) -> Self {
        let chain = AuthzFactory::new().build_authorizer(cfg);
        Self { chain }
    }

    pub fn evaluate(&self, actor: &Actor, action: Action, resource: &Resource) -> Decision {
        let req = AuthzRequest {
            actor,
            action,
            resource,
        };
        match self.chain.authorize_request(&req) {
            AuthzResponse::Allow => Decision::Allow,
            AuthzResponse::Deny(reason) => Decision::Deny(reason),
            // The chain never defers, treat it as undecided anyway
            AuthzResponse::Continue => Decision::Deny(DenyReason::NoMatchingRule),
        }
    }

    /// Like [`Self::evaluate`], for action and kind names that still need
    /// parsing. Unknown names are denied with their own reason codes.
    pub fn evaluate_raw(
        &self,
        actor: &Actor,
        action: &str,
        kind: &str,
        id: Option<u64>,
        owner: Option<UserId>,
    ) -> Decision {
        let Ok(action) = action.parse::<Action>() else {
            return Decision::Deny(DenyReason::UnknownAction);
        };
        let Ok(kind) = kind.parse::<ResourceKind>() else {
            return Decision::Deny(DenyReason::UnknownResourceKind);
        };

        let resource = Resource { kind, id, owner };
        self.evaluate(actor, action, &resource)
    }

    pub fn role_class(&self, actor: &Actor) -> Option<Role> {
        role::role_class(actor)
    }

    pub fn capabilities(&self, actor: &Actor) -> BTreeSet<String> {
        catalog::capabilities(actor)
    }
}

impl Default for AccessControlEvaluator {
    fn default() -> Self {
        Self::new(&AuthzConfig::default())
    }
}
