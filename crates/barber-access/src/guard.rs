//! Drives the access gate from identity updates.
//!
//! For each identity snapshot the guard feeds the gate the loading window and
//! runs one admin check. Answers are cached per subject; the cache is shared
//! so privilege mutations can invalidate it. A loading snapshot keeps the
//! cache as is, so a session restore for the same subject does not re-check.
//! An answer for a previous identity never lands: [`AdminGuard::run`] drops
//! the in-flight check as soon as a new snapshot arrives.

use std::sync::Arc;

use tokio::sync::watch;

use barber_core::enums::AccessState;
use barber_core::identity::{Identity, IdentitySnapshot};
use barber_core::store::DataStore;

use crate::admin::AdminFlagResolver;
use crate::cache::{CacheTicket, SubjectCache};
use crate::gate::{AccessGate, GateInputs, GateStatus, Navigator};

pub struct AdminGuard<S, N> {
    admin: AdminFlagResolver<S>,
    gate: AccessGate<N>,
    flags: Arc<SubjectCache<bool>>,
    status: GateStatus,
}

impl<S: DataStore, N: Navigator> AdminGuard<S, N> {
    pub fn new(admin: AdminFlagResolver<S>, gate: AccessGate<N>) -> Self {
        Self::with_flag_cache(admin, gate, Arc::new(SubjectCache::new()))
    }

    /// Guard sharing an existing admin-answer cache.
    pub const fn with_flag_cache(
        admin: AdminFlagResolver<S>,
        gate: AccessGate<N>,
        flags: Arc<SubjectCache<bool>>,
    ) -> Self {
        Self {
            admin,
            gate,
            flags,
            status: GateStatus {
                state: AccessState::Initializing,
                is_authorized: false,
                is_loading: true,
            },
        }
    }

    pub const fn status(&self) -> GateStatus {
        self.status
    }

    pub const fn gate(&self) -> &AccessGate<N> {
        &self.gate
    }

    /// Admin answers cached per subject. Register as a `RoleInvalidator` to
    /// have privilege changes picked up.
    pub fn flag_cache(&self) -> Arc<SubjectCache<bool>> {
        Arc::clone(&self.flags)
    }

    fn apply(&mut self, inputs: &GateInputs) -> GateStatus {
        self.status = self.gate.update(inputs);
        self.status
    }

    /// Evaluate the gate for `snapshot`.
    pub async fn on_identity(&mut self, snapshot: IdentitySnapshot) -> GateStatus {
        if snapshot.loading {
            return self.apply(&GateInputs::identity_loading());
        }
        self.flags.switch_subject(snapshot.subject_id());
        let Some(identity) = snapshot.identity else {
            return self.apply(&GateInputs::signed_out());
        };

        if let Some(is_admin) = self.flags.get(identity.subject_id()) {
            return self.apply(&GateInputs::settled(identity, is_admin));
        }

        self.apply(&GateInputs::checking(identity.clone()));
        let ticket = self.flags.begin(identity.subject_id());
        let is_admin = self.admin.is_super_admin(Some(&identity)).await;
        self.finish(&ticket, identity, is_admin)
    }

    fn finish(&mut self, ticket: &CacheTicket, identity: Identity, is_admin: bool) -> GateStatus {
        // Not cached if invalidated mid-flight; the next snapshot re-checks.
        if !self.flags.complete(ticket, is_admin) {
            tracing::debug!(
                subject_id = ticket.subject_id(),
                "admin answer invalidated in flight, not cached"
            );
        }
        self.apply(&GateInputs::settled(identity, is_admin))
    }

    /// Follow `updates` until the sender is dropped, returning the last status.
    ///
    /// A change that arrives while an admin check is in flight cancels that
    /// check, so its answer is never applied, and evaluates the new snapshot
    /// instead.
    pub async fn run(&mut self, mut updates: watch::Receiver<IdentitySnapshot>) -> GateStatus {
        let mut snapshot = updates.borrow_and_update().clone();
        loop {
            let status = tokio::select! {
                status = self.on_identity(snapshot.clone()) => status,
                changed = updates.changed() => {
                    if changed.is_err() {
                        return self.on_identity(snapshot).await;
                    }
                    snapshot = updates.borrow_and_update().clone();
                    continue;
                }
            };

            if updates.changed().await.is_err() {
                return status;
            }
            snapshot = updates.borrow_and_update().clone();
        }
    }
}
