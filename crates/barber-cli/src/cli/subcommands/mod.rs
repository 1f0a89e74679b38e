pub mod config;
pub mod org;
pub mod privilege;
pub mod role;
pub mod staff;

pub use config::ConfigCommands;
pub use org::OrgCommands;
pub use privilege::PrivilegeCommands;
pub use role::RoleCommands;
pub use staff::StaffCommands;
