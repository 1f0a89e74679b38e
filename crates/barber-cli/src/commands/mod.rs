pub mod config;
pub mod dispatch;
pub mod gate;
pub mod org;
pub mod privilege;
pub mod role;
pub mod staff;
pub mod whoami;
