use clap::Subcommand;

/// Placement site commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SiteCommands {
    /// Register a site.
    Add {
        name: String,
        #[arg(long)]
        required_hours: f64,
        /// Explicit site ID (generated when omitted).
        #[arg(long)]
        id: Option<String>,
    },
    /// Get a site by ID or name.
    Get { id: String },
    /// Rename a site or change its required hours.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        required_hours: Option<f64>,
    },
    /// Delete a site.
    Delete {
        id: String,
        /// Also delete log entries recorded at the site.
        #[arg(long)]
        cascade: bool,
    },
    /// List sites.
    List,
    /// Add the standard placement sites that are missing.
    SeedDefaults,
}
