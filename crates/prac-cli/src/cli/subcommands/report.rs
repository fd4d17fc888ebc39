use clap::Subcommand;

/// Completion report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// Every student against every site.
    Completion {
        /// Write the summary as CSV to this file instead of printing it.
        #[arg(long, short = 'o')]
        output: Option<String>,
    },
    /// Students at or past the threshold at a site but not yet complete.
    NearCompletion {
        /// Percentage threshold (defaults to general.near_completion_threshold).
        #[arg(long)]
        threshold: Option<f64>,
    },
}
