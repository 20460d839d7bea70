use std::process;

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;

use crate::config::GatekeeperConfig;
use crate::display::display_json;
use crate::guard::Guard;
use crate::types::actor::UserId;
use crate::types::decision::{Decision, DenyReason};

use super::{ActorArgs, RunCommand};

/// Check whether an actor may perform an action on a resource. Exits with
/// code 1 when the request is denied.
#[derive(Args)]
pub struct CheckArgs {
    /// Action to check: read, create, update or delete (HTTP methods work too).
    #[arg(short, long)]
    pub action: String,

    /// Resource kind, e.g. book, post, comment, feed, follow, admin_area.
    #[arg(short, long)]
    pub kind: String,

    /// Resource id, omit for create.
    #[arg(long)]
    pub id: Option<u64>,

    /// Owner (author) id of the resource. For follow, the followed user.
    #[arg(short, long)]
    pub owner: Option<UserId>,

    /// Pretend the resource could not be fetched.
    #[arg(long)]
    pub missing: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub actor: ActorArgs,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    code: u16,

    #[serde(flatten)]
    decision: Decision,

    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl RunCommand for CheckArgs {
    fn run(&self, cfg: &GatekeeperConfig) -> Result<()> {
        let guard = Guard::new(&cfg.authz, cfg.audit);
        let report = self.check(&guard);

        if self.json {
            display_json(&report)?;
        } else {
            match report.decision {
                Decision::Allow => println!("{} {}", style("allow").green(), report.code),
                Decision::Deny(reason) => println!(
                    "{} {} ({reason}: {})",
                    style("deny").red(),
                    report.code,
                    reason.describe()
                ),
            }
        }

        if !report.decision.is_allowed() {
            process::exit(1);
        }
        Ok(())
    }
}

impl CheckArgs {
    fn check(&self, guard: &Guard) -> CheckReport {
        let actor = self.actor.build_actor();
        let result = guard.authorize_raw(
            &actor,
            &self.action,
            &self.kind,
            self.id,
            self.owner,
            !self.missing,
        );

        match result {
            Ok(outcome) => CheckReport {
                code: outcome.code,
                decision: Decision::Allow,
                message: None,
            },
            Err(err) => CheckReport {
                code: err.code(),
                // A missing resource is denied before any rule is consulted
                decision: Decision::Deny(err.reason().unwrap_or(DenyReason::NoMatchingRule)),
                message: Some(err.to_string()),
            },
        }
    }
}
