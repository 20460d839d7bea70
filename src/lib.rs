pub mod authz;
pub mod cmd;
pub mod config;
pub mod display;
pub mod guard;
pub mod logs;
pub mod table;
pub mod types;

pub use authz::evaluator::AccessControlEvaluator;
pub use guard::{AccessError, Guard};
pub use types::action::Action;
pub use types::actor::{Actor, Role, UserInfo};
pub use types::decision::{Decision, DenyReason};
pub use types::resource::{Resource, ResourceKind};
