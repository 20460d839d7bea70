use std::collections::BTreeSet;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::authz::evaluator::AccessControlEvaluator;
use crate::config::GatekeeperConfig;
use crate::display::display_json;
use crate::types::actor::{Actor, Role};

use super::{ActorArgs, RunCommand};

/// Show the role class and the resolved capability set of an actor.
#[derive(Args)]
pub struct CapsArgs {
    #[command(flatten)]
    pub actor: ActorArgs,
}

#[derive(Debug, Serialize)]
struct CapsReport {
    actor: Actor,
    role_class: Option<Role>,
    capabilities: BTreeSet<String>,
}

impl RunCommand for CapsArgs {
    fn run(&self, cfg: &GatekeeperConfig) -> Result<()> {
        let evaluator = AccessControlEvaluator::new(&cfg.authz);
        let actor = self.actor.build_actor();

        let report = CapsReport {
            role_class: evaluator.role_class(&actor),
            capabilities: evaluator.capabilities(&actor),
            actor,
        };
        display_json(report)
    }
}
