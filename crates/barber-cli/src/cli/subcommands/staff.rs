use clap::{Args, Subcommand};

/// Staff commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StaffCommands {
    /// Add a staff member to an organization.
    Add(StaffAddArgs),
    /// List an organization's staff.
    List {
        /// Organization ID.
        org_id: String,
    },
    /// Re-activate a staff member.
    Activate {
        /// Staff member ID.
        id: String,
    },
    /// Deactivate a staff member.
    Deactivate {
        /// Staff member ID.
        id: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct StaffAddArgs {
    /// Organization ID.
    pub org_id: String,
    /// Display name.
    pub name: String,
    /// Linked user subject, if the staff member has an account.
    #[arg(long)]
    pub user: Option<String>,
}
