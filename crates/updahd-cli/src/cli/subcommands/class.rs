use clap::Subcommand;

/// Formation class commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClassCommands {
    /// List the class ladder.
    List,
    /// Show one class.
    Get {
        /// Class id (1-6)
        id: i64,
    },
}
