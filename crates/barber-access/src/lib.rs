//! # barber-access
//!
//! Decides who a signed-in subject is to the app and whether they may enter
//! the admin area.
//!
//! - [`resolver::RoleResolver`]: owner → active staff → generic role table,
//!   first match wins, lookup failures propagate.
//! - [`admin::AdminFlagResolver`]: one privilege check, fail-closed.
//! - [`gate::AccessGate`]: state machine over identity + admin flag that
//!   issues at most one redirect per state change.
//! - [`cache`]: subject-keyed caching with invalidation and stale-result discard.
//! - [`guard::AdminGuard`]: drives the gate from identity provider updates.
//!
//! The two resolvers deliberately differ on failure: role resolution hands
//! the error to the caller, the admin check denies.

pub mod admin;
pub mod cache;
pub mod error;
pub mod gate;
pub mod guard;
pub mod provider;
pub mod resolver;

#[cfg(test)]
pub(crate) mod test_support;

pub use admin::AdminFlagResolver;
pub use cache::{CacheTicket, CachedResolver, SubjectCache};
pub use error::AccessError;
pub use gate::{AccessGate, GateInputs, GatePaths, GateStatus, Navigator};
pub use guard::AdminGuard;
pub use provider::{IdentityProvider, WatchIdentityProvider};
pub use resolver::RoleResolver;
