use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine readable reason attached to a denial.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("not_owner")]
    NotOwner,
    #[error("missing_permission")]
    MissingPermission,
    #[error("insufficient_role")]
    InsufficientRole,
    #[error("self_target")]
    SelfTarget,
    #[error("no_matching_rule")]
    NoMatchingRule,
    #[error("unknown_action")]
    UnknownAction,
    #[error("unknown_resource_kind")]
    UnknownResourceKind,
}

impl DenyReason {
    pub fn describe(self) -> &'static str {
        match self {
            DenyReason::Unauthenticated => "Authentication required",
            DenyReason::NotOwner => "Only the owner may do this",
            DenyReason::MissingPermission => "Missing required permission",
            DenyReason::InsufficientRole => "Role too low for this resource",
            DenyReason::SelfTarget => "Cannot do this to yourself",
            DenyReason::NoMatchingRule => "No rule allows this action",
            DenyReason::UnknownAction => "Unknown action",
            DenyReason::UnknownResourceKind => "Unknown resource kind",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "reason", rename_all = "snake_case")]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    #[inline]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn reason(&self) -> Option<DenyReason> {
        match self {
            Decision::Allow => None,
            Decision::Deny(reason) => Some(*reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes() {
        assert_eq!(DenyReason::NotOwner.to_string(), "not_owner");
        assert_eq!(DenyReason::SelfTarget.to_string(), "self_target");
        assert_eq!(
            serde_json::to_string(&DenyReason::MissingPermission).unwrap(),
            r#""missing_permission""#
        );
        assert_eq!(
            serde_json::to_string(&Decision::Deny(DenyReason::Unauthenticated)).unwrap(),
            r#"{"decision":"deny","reason":"unauthenticated"}"#
        );
        assert_eq!(
            serde_json::to_string(&Decision::Allow).unwrap(),
            r#"{"decision":"allow"}"#
        );
    }
}
