use clap::Subcommand;

/// Student roster commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// Register a student.
    Add {
        student_id: String,
        #[arg(long)]
        last_name: String,
        #[arg(long, default_value = "")]
        initials: String,
    },
    /// Get a student by ID.
    Get { id: String },
    /// Update a student's name or initials.
    Update {
        id: String,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        initials: Option<String>,
    },
    /// Delete a student.
    Delete {
        id: String,
        /// Also delete the student's log entries.
        #[arg(long)]
        cascade: bool,
    },
    /// List students.
    List {
        /// Case-insensitive match on last name, initials or ID.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Import students from a class list (.csv or .xlsx; columns last_name,initials,student_id).
    Import { file: String },
}
