use clap::{Args, Subcommand};

/// Hour ledger commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HoursCommands {
    /// Log hours for a student at a site.
    Log(LogArgs),
    /// Get a log entry by ID.
    Get { id: String },
    /// Update a log entry.
    Update {
        id: String,
        #[arg(long)]
        student: Option<String>,
        /// Site ID or name.
        #[arg(long)]
        site: Option<String>,
        /// Date (YYYY-MM-DD).
        #[arg(long)]
        date: Option<String>,
        #[arg(long, conflicts_with_all = ["start", "end"])]
        hours: Option<f64>,
        #[arg(long, requires = "end")]
        start: Option<String>,
        #[arg(long, requires = "start")]
        end: Option<String>,
        /// Lecturer name; pass an empty string to clear.
        #[arg(long)]
        lecturer: Option<String>,
        /// Notes; pass an empty string to clear.
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a log entry.
    Delete { id: String },
    /// List log entries, newest first.
    List(LedgerFilterArgs),
    /// Export log entries as CSV.
    Export {
        #[command(flatten)]
        filter: LedgerFilterArgs,
        /// Write to this file instead of stdout.
        #[arg(long, short = 'o')]
        output: Option<String>,
    },
    /// Completion per site for one student.
    Summary {
        student: String,
        /// Only this site (ID or name), listed even when no hours are logged.
        #[arg(long)]
        site: Option<String>,
    },
}

/// Arguments for `prac hours log`.
#[derive(Clone, Debug, Args)]
pub struct LogArgs {
    #[arg(long)]
    pub student: String,
    /// Site ID or name.
    #[arg(long)]
    pub site: String,
    /// Date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub date: Option<String>,
    /// Hours worked. Alternatively give --start and --end.
    #[arg(long, conflicts_with_all = ["start", "end"], required_unless_present = "start")]
    pub hours: Option<f64>,
    /// Shift start (HH:MM).
    #[arg(long, requires = "end")]
    pub start: Option<String>,
    /// Shift end (HH:MM); earlier than start means the shift ran past midnight.
    #[arg(long, requires = "start")]
    pub end: Option<String>,
    #[arg(long)]
    pub lecturer: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

/// Ledger filter shared by `list` and `export`.
#[derive(Clone, Debug, Default, Args)]
pub struct LedgerFilterArgs {
    #[arg(long)]
    pub student: Option<String>,
    /// Site ID or name.
    #[arg(long)]
    pub site: Option<String>,
    /// Earliest date, inclusive (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<String>,
    /// Latest date, inclusive (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
}
