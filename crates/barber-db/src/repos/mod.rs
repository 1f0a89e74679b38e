//! Repositories for the role-determining tables.
//!
//! Each module adds methods to `BarberService` via `impl BarberService` blocks.

pub mod organization;
pub mod privilege;
pub mod staff;
pub mod user_role;
