mod caps;
mod check;
mod rules;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::{CommonConfig, GatekeeperConfig, PathSet};
use crate::types::actor::{Actor, Role, UserId};

#[derive(Args, Debug, Clone)]
pub struct ActorArgs {
    /// Id of the authenticated user. Without it the actor is anonymous.
    #[arg(short, long)]
    pub user: Option<UserId>,

    /// Role of the user: member, librarian or admin.
    #[arg(short, long)]
    pub role: Option<Role>,

    /// Explicitly granted permission, e.g. can_delete_book. Can be repeated.
    #[arg(short, long = "perm")]
    pub perms: Vec<String>,
}

impl ActorArgs {
    pub fn build_actor(&self) -> Actor {
        let Some(id) = self.user else {
            return Actor::Anonymous;
        };

        let mut actor = Actor::user(id);
        if let Some(role) = self.role {
            actor = actor.with_role(role);
        }
        for perm in self.perms.iter() {
            actor = actor.with_permission(perm.clone());
        }
        actor
    }
}

pub trait RunCommand {
    fn run(&self, cfg: &GatekeeperConfig) -> Result<()>;
}

/// Evaluate role and ownership based access to catalog, blog and social
/// resources.
#[derive(Parser)]
#[command(author, version, about)]
pub struct App {
    /// Directory holding gatekeeper.toml. Defaults to $GATEKEEPER_CONFIG,
    /// /etc/gatekeeper for root, or ~/.config/gatekeeper.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured log level: error, info or debug.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Caps(caps::CapsArgs),
    Check(check::CheckArgs),
    Rules(rules::RulesArgs),
}

impl App {
    /// Level used while the config file is being loaded, so warnings about
    /// the config itself are not lost.
    pub fn initial_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    pub fn load_config(&self) -> Result<GatekeeperConfig> {
        let ps = PathSet::new(self.config.clone())?;
        ps.load_config("gatekeeper", GatekeeperConfig::default)
    }

    pub fn run(&self, cfg: &GatekeeperConfig) -> Result<()> {
        match &self.command {
            Commands::Caps(args) => args.run(cfg),
            Commands::Check(args) => args.run(cfg),
            Commands::Rules(args) => args.run(cfg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_app() {
        let app = App::try_parse_from([
            "gatekeeper",
            "check",
            "--action",
            "delete",
            "--kind",
            "book",
            "--id",
            "7",
            "--user",
            "1",
            "--role",
            "member",
            "--perm",
            "can_delete_book",
        ])
        .unwrap();
        let Commands::Check(args) = app.command else {
            panic!("expect check command");
        };
        let actor = args.actor.build_actor();
        assert_eq!(
            actor,
            Actor::user(1)
                .with_role(Role::Member)
                .with_permission("can_delete_book")
        );
    }

    #[test]
    fn test_initial_log_level() {
        let app = App::try_parse_from(["gatekeeper", "rules"]).unwrap();
        assert_eq!(app.initial_log_level(), "info");

        let app =
            App::try_parse_from(["gatekeeper", "--log-level", "debug", "rules"]).unwrap();
        assert_eq!(app.initial_log_level(), "debug");
    }

    #[test]
    fn test_anonymous_actor() {
        let args = ActorArgs {
            user: None,
            role: Some(Role::Admin),
            perms: vec!["can_add_book".to_string()],
        };
        assert_eq!(args.build_actor(), Actor::Anonymous);
    }
}
