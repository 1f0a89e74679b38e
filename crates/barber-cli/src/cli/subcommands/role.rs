use barber_core::enums::Role;
use clap::{Args, Subcommand};

/// Generic role table commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RoleCommands {
    /// Store a role for a subject.
    Assign(RoleAssignArgs),
    /// Delete a stored role row.
    Revoke {
        /// Role row ID.
        id: String,
    },
    /// List a subject's stored roles.
    List {
        /// User subject.
        user_id: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct RoleAssignArgs {
    /// User subject.
    pub user_id: String,
    /// owner, staff, or customer.
    pub role: Role,
    /// Organization ID (required for owner and staff).
    #[arg(long)]
    pub org: Option<String>,
}
