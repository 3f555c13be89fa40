use clap::Subcommand;

/// Employee commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EmployeeCommands {
    /// List employees (dashboard).
    List,
    /// Show an employee with history and available actions.
    Get { id: String },
    /// Add an employee.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Starting class (1-6).
        #[arg(long, default_value_t = 1)]
        class: i64,
    },
    /// Edit an employee.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Set the class directly (no history entry).
        #[arg(long)]
        class: Option<i64>,
    },
    /// Delete an employee and their history.
    Delete { id: String },
    /// Move an employee up one class.
    Promote { id: String },
    /// Move an employee down one class.
    Downgrade { id: String },
    /// Show an employee's progress history, newest first.
    History { id: String },
}
