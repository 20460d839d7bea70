use anyhow::Result;
use clap::Args;

use crate::authz::catalog::permission_rules;
use crate::config::GatekeeperConfig;
use crate::display::{display_list, DisplayStyle};

use super::RunCommand;

/// Show the permission required for each catalog kind and action, and the
/// lowest role granting it.
#[derive(Args)]
pub struct RulesArgs {
    /// Output style.
    #[arg(short, long, default_value = "table")]
    pub style: DisplayStyle,

    /// Don't print the title row.
    #[arg(long)]
    pub headless: bool,

    /// Csv columns to print, split with comma.
    #[arg(long)]
    pub csv_titles: Option<String>,
}

impl RunCommand for RulesArgs {
    fn run(&self, _cfg: &GatekeeperConfig) -> Result<()> {
        display_list(
            permission_rules(),
            self.style,
            self.headless,
            self.csv_titles.clone(),
        )
    }
}
