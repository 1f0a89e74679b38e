//! Identity provider seam.

use tokio::sync::watch;

use barber_core::identity::{Identity, IdentitySnapshot};

/// Source of the current identity and its changes.
pub trait IdentityProvider {
    fn snapshot(&self) -> IdentitySnapshot;

    /// Receiver that observes every future change.
    fn subscribe(&self) -> watch::Receiver<IdentitySnapshot>;
}

/// In-process provider backed by a `watch` channel. Starts out loading.
#[derive(Debug)]
pub struct WatchIdentityProvider {
    tx: watch::Sender<IdentitySnapshot>,
}

impl Default for WatchIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchIdentityProvider {
    pub fn new() -> Self {
        Self::starting_with(IdentitySnapshot::loading())
    }

    pub fn starting_with(snapshot: IdentitySnapshot) -> Self {
        let (tx, _rx) = watch::channel(snapshot);
        Self { tx }
    }

    pub fn sign_in(&self, identity: Identity) {
        tracing::debug!(subject_id = identity.subject_id(), "identity signed in");
        self.tx.send_replace(IdentitySnapshot::signed_in(identity));
    }

    pub fn sign_out(&self) {
        tracing::debug!("identity signed out");
        self.tx.send_replace(IdentitySnapshot::signed_out());
    }

    pub fn set_loading(&self) {
        self.tx.send_replace(IdentitySnapshot::loading());
    }
}

impl IdentityProvider for WatchIdentityProvider {
    fn snapshot(&self) -> IdentitySnapshot {
        self.tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<IdentitySnapshot> {
        self.tx.subscribe()
    }
}
