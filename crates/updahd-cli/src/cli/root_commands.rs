use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, ClassCommands, EmployeeCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Employees and their class progression.
    Employee {
        #[command(subcommand)]
        action: EmployeeCommands,
    },
    /// Formation classes.
    Class {
        #[command(subcommand)]
        action: ClassCommands,
    },
    /// Ask the session gate where a page path leads.
    Open {
        /// Page path, e.g. `/employee/emp-1a2b3c4d`
        path: String,
    },
}
