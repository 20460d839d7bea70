mod anonymous;
mod chain;
mod ownership;
mod public;
mod role;
mod social;
mod union;

pub mod catalog;
pub mod config;
pub mod evaluator;
pub mod factory;

use crate::types::action::Action;
use crate::types::actor::Actor;
use crate::types::decision::DenyReason;
use crate::types::resource::Resource;

pub trait Authorizer: Send + Sync {
    fn authorize_request(&self, req: &AuthzRequest) -> AuthzResponse;
}

#[derive(Debug, Clone, Copy)]
pub struct AuthzRequest<'a> {
    pub actor: &'a Actor,
    pub action: Action,
    pub resource: &'a Resource,
}

/// Possible responses from an authorization check.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthzResponse {
    /// Access is granted
    Allow,
    /// Defers decision to next authorizer in chain
    Continue,
    /// Access is denied
    Deny(DenyReason),
}
