//! Service layer hosting the repositories.
//!
//! `BarberService` wraps `BarberDb` and a list of [`RoleInvalidator`] hooks.
//! Every repository mutation that can change how a subject resolves calls
//! [`BarberService::notify_role_change`] after the write succeeds, so
//! subject-keyed caches drop their entry instead of serving a stale role.

use std::sync::Arc;

use barber_core::store::RoleInvalidator;

use crate::BarberDb;
use crate::error::DatabaseError;

pub struct BarberService {
    db: BarberDb,
    invalidators: Vec<Arc<dyn RoleInvalidator>>,
}

impl BarberService {
    /// Open a local database and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = BarberDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    #[must_use]
    pub const fn from_db(db: BarberDb) -> Self {
        Self {
            db,
            invalidators: Vec::new(),
        }
    }

    #[must_use]
    pub const fn db(&self) -> &BarberDb {
        &self.db
    }

    /// Register a hook fired whenever a subject's role-determining rows change.
    pub fn add_invalidator(&mut self, invalidator: Arc<dyn RoleInvalidator>) {
        self.invalidators.push(invalidator);
    }

    pub(crate) fn notify_role_change(&self, subject_id: &str) {
        tracing::debug!(subject_id, hooks = self.invalidators.len(), "role rows changed");
        for invalidator in &self.invalidators {
            invalidator.invalidate(subject_id);
        }
    }
}
