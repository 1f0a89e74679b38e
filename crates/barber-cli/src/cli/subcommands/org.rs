use clap::{Args, Subcommand};

/// Organization commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OrgCommands {
    /// Create an organization.
    Create(OrgCreateArgs),
    /// List organizations.
    List,
    /// Re-activate an organization.
    Activate {
        /// Organization ID.
        id: String,
    },
    /// Mark an organization inactive. Its owner still resolves as owner.
    Deactivate {
        /// Organization ID.
        id: String,
    },
    /// Hand an organization to a new owner.
    Transfer {
        /// Organization ID.
        id: String,
        /// New owner subject.
        new_owner: String,
    },
    /// Delete an organization with its staff and scoped roles.
    Delete {
        /// Organization ID.
        id: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct OrgCreateArgs {
    /// Display name.
    pub name: String,
    /// Owner subject (defaults to the current subject).
    #[arg(long)]
    pub owner: Option<String>,
}
