//! # barber-core
//!
//! Core types shared by every barber crate:
//! - `Identity`, the authenticated subject handed out by the identity provider
//! - Stored role-determining records (organizations, staff, role rows, privileges)
//! - `Role` / `RoleAssignment`, the resolved access tuple
//! - `AccessState`, the gate's state enum
//! - The `DataStore` contract every backend implements, with its `LookupError`
//! - ID prefix constants
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod records;
pub mod role;
pub mod store;
