use log::{debug, info};
use thiserror::Error;

use crate::authz::config::AuthzConfig;
use crate::authz::evaluator::AccessControlEvaluator;
use crate::types::action::Action;
use crate::types::actor::{Actor, UserId};
use crate::types::decision::{Decision, DenyReason};
use crate::types::resource::{Resource, ResourceKind};
use crate::types::response::CommonResponse;

/// Errors a request handler turns into an error response.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    #[error("resource not found")]
    NotFound,
    #[error("authentication required: {0}")]
    Unauthenticated(DenyReason),
    #[error("permission denied: {0}")]
    Forbidden(DenyReason),
}

impl AccessError {
    pub fn code(&self) -> u16 {
        match self {
            AccessError::NotFound => 404,
            AccessError::Unauthenticated(_) => 401,
            AccessError::Forbidden(_) => 403,
        }
    }

    pub fn reason(&self) -> Option<DenyReason> {
        match self {
            AccessError::NotFound => None,
            AccessError::Unauthenticated(reason) | AccessError::Forbidden(reason) => Some(*reason),
        }
    }
}

/// An allowed request, the handler goes on to perform the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub code: u16,
}

/// Request-boundary wrapper around the evaluator: resolves missing
/// resources, logs decisions and maps them to status codes.
pub struct Guard {
    evaluator: AccessControlEvaluator,
    audit: bool,
}

impl Guard {
    pub fn new(cfg: &AuthzConfig, audit: bool) -> Self {
        Self {
            evaluator: AccessControlEvaluator::new(cfg),
            audit,
        }
    }

    /// Authorizes `action` on `resource`. Pass `None` when the resource could
    /// not be fetched; for Create pass the prospective resource.
    pub fn authorize(
        &self,
        actor: &Actor,
        action: Action,
        resource: Option<&Resource>,
    ) -> Result<Outcome, AccessError> {
        let Some(resource) = resource else {
            if self.audit {
                info!("Deny {action} for {actor}: resource not found");
            }
            return Err(AccessError::NotFound);
        };

        match self.evaluator.evaluate(actor, action, resource) {
            Decision::Allow => {
                if self.audit {
                    debug!("Allow {action} on {resource} for {actor}");
                }
                Ok(Outcome {
                    code: action.success_code(),
                })
            }
            Decision::Deny(reason) => {
                if self.audit {
                    info!("Deny {action} on {resource} for {actor}: {reason}");
                }
                Err(Self::denied(actor, reason))
            }
        }
    }

    /// Like [`Self::authorize`], for action and kind names taken straight
    /// from a request. `found` tells whether the resource could be fetched.
    pub fn authorize_raw(
        &self,
        actor: &Actor,
        action: &str,
        kind: &str,
        id: Option<u64>,
        owner: Option<UserId>,
        found: bool,
    ) -> Result<Outcome, AccessError> {
        if let (Ok(action), Ok(kind)) = (action.parse::<Action>(), kind.parse::<ResourceKind>()) {
            let resource = Resource { kind, id, owner };
            return self.authorize(actor, action, found.then_some(&resource));
        }

        match self.evaluator.evaluate_raw(actor, action, kind, id, owner) {
            Decision::Deny(reason) => {
                if self.audit {
                    info!("Deny '{action}' on '{kind}' for {actor}: {reason}");
                }
                Err(Self::denied(actor, reason))
            }
            Decision::Allow => Err(Self::denied(actor, DenyReason::NoMatchingRule)),
        }
    }

    fn denied(actor: &Actor, reason: DenyReason) -> AccessError {
        if actor.is_anonymous() {
            return AccessError::Unauthenticated(reason);
        }
        AccessError::Forbidden(reason)
    }

    pub fn respond(
        &self,
        actor: &Actor,
        action: Action,
        resource: Option<&Resource>,
    ) -> CommonResponse {
        match self.authorize(actor, action, resource) {
            Ok(outcome) => CommonResponse::ok(outcome.code),
            Err(err) => CommonResponse::error(err.code(), err),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::CommonConfig;
    use crate::types::actor::Role;

    use super::*;

    fn new_guard() -> Guard {
        Guard::new(&AuthzConfig::default(), true)
    }

    #[test]
    fn test_status_codes() {
        let guard = new_guard();
        let post = Resource::new(ResourceKind::Post, 9).owned_by(5);

        let resp = guard.respond(&Actor::Anonymous, Action::Delete, Some(&post));
        assert_eq!(resp.code, 401);

        let resp = guard.respond(&Actor::user(6), Action::Update, Some(&post));
        assert_eq!(resp.code, 403);
        assert_eq!(
            resp.message.as_deref(),
            Some("permission denied: not_owner")
        );

        let resp = guard.respond(&Actor::user(5), Action::Update, None);
        assert_eq!(resp.code, 404);

        let resp = guard.respond(&Actor::user(5), Action::Update, Some(&post));
        assert_eq!(resp, CommonResponse::ok(200));

        let resp = guard.respond(&Actor::user(5), Action::Delete, Some(&post));
        assert_eq!(resp.code, 204);

        let new_comment = Resource::prospective(ResourceKind::Comment);
        let resp = guard.respond(&Actor::user(5), Action::Create, Some(&new_comment));
        assert_eq!(resp.code, 201);

        let resp = guard.respond(&Actor::Anonymous, Action::Read, Some(&post));
        assert_eq!(resp.code, 200);
    }

    #[test]
    fn test_authorize_errors() {
        let guard = new_guard();
        let book = Resource::new(ResourceKind::Book, 7);

        let member = Actor::user(1).with_role(Role::Member);
        let err = guard
            .authorize(&member, Action::Delete, Some(&book))
            .unwrap_err();
        assert_eq!(err, AccessError::Forbidden(DenyReason::MissingPermission));
        assert_eq!(err.reason(), Some(DenyReason::MissingPermission));

        let err = guard
            .authorize(&Actor::Anonymous, Action::Create, Some(&book))
            .unwrap_err();
        assert_eq!(err, AccessError::Unauthenticated(DenyReason::Unauthenticated));

        let err = guard.authorize(&member, Action::Read, None).unwrap_err();
        assert_eq!(err.code(), 404);
        assert_eq!(err.reason(), None);
    }

    #[test]
    fn test_authorize_raw() {
        let guard = new_guard();
        let author = Actor::user(5);

        let outcome = guard
            .authorize_raw(&author, "patch", "posts", Some(9), Some(5), true)
            .unwrap();
        assert_eq!(outcome.code, 200);

        let err = guard
            .authorize_raw(&author, "patch", "posts", Some(9), Some(5), false)
            .unwrap_err();
        assert_eq!(err, AccessError::NotFound);

        let err = guard
            .authorize_raw(&author, "archive", "posts", Some(9), Some(5), true)
            .unwrap_err();
        assert_eq!(err, AccessError::Forbidden(DenyReason::UnknownAction));

        let err = guard
            .authorize_raw(&Actor::Anonymous, "read", "shelf", Some(1), None, true)
            .unwrap_err();
        assert_eq!(
            err,
            AccessError::Unauthenticated(DenyReason::UnknownResourceKind)
        );
    }
}
