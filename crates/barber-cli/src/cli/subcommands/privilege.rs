use clap::{Args, Subcommand};

/// Privilege commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PrivilegeCommands {
    /// Grant a privilege.
    Grant(PrivilegeArgs),
    /// Revoke a privilege.
    Revoke(PrivilegeArgs),
    /// List a subject's privileges.
    List {
        /// User subject.
        user_id: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct PrivilegeArgs {
    /// User subject.
    pub user_id: String,
    /// Privilege name (defaults to `access.admin_privilege`).
    #[arg(long)]
    pub privilege: Option<String>,
}
