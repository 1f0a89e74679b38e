use clap::Subcommand;

use crate::cli::subcommands::{
    ConfigCommands, OrgCommands, PrivilegeCommands, RoleCommands, StaffCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Resolve the current subject's role and admin flag.
    Whoami,
    /// Evaluate the admin access gate for the current subject.
    Gate,
    /// Organizations (shops).
    Org {
        #[command(subcommand)]
        action: OrgCommands,
    },
    /// Staff members.
    Staff {
        #[command(subcommand)]
        action: StaffCommands,
    },
    /// Generic role table.
    Role {
        #[command(subcommand)]
        action: RoleCommands,
    },
    /// Privilege grants checked by the admin gate.
    Privilege {
        #[command(subcommand)]
        action: PrivilegeCommands,
    },
    /// Effective configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}
