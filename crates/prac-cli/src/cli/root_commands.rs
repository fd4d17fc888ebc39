use clap::{Args, Subcommand};
use prac_core::enums::SiteRetention;

use crate::cli::subcommands::{HoursCommands, ReportCommands, SiteCommands, StudentCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize a practrack store for a project.
    Init(InitArgs),
    /// Student roster.
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Placement sites and their required hours.
    Site {
        #[command(subcommand)]
        action: SiteCommands,
    },
    /// Hour ledger.
    Hours {
        #[command(subcommand)]
        action: HoursCommands,
    },
    /// Completion reports.
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Counts of students, sites, entries and total hours.
    Overview,
    /// Delete all students and log entries, plus custom sites (see --keep-sites, --all-sites).
    Reset(ResetArgs),
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `prac init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Do not create the four standard placement sites.
    #[arg(long)]
    pub no_default_sites: bool,
}

/// Arguments for `prac reset`.
#[derive(Clone, Debug, Args)]
pub struct ResetArgs {
    /// Confirm the reset.
    #[arg(long)]
    pub yes: bool,
    /// Keep every site, custom ones included.
    #[arg(long, conflicts_with = "all_sites")]
    pub keep_sites: bool,
    /// Delete the standard sites as well as custom ones.
    #[arg(long)]
    pub all_sites: bool,
}

impl ResetArgs {
    /// Without a flag the standard sites survive and custom ones go.
    #[must_use]
    pub const fn site_retention(&self) -> SiteRetention {
        if self.keep_sites {
            SiteRetention::KeepAll
        } else if self.all_sites {
            SiteRetention::RemoveAll
        } else {
            SiteRetention::KeepDefaults
        }
    }
}

/// Arguments for `prac schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: String,
}
