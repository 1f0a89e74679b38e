//! Named privilege repository (e.g. `super_admin`).

use barber_core::records::PrivilegeGrant;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::BarberService;

impl BarberService {
    /// Grant a privilege. Granting twice is a no-op.
    pub async fn grant_privilege(
        &self,
        user_id: &str,
        privilege: &str,
    ) -> Result<PrivilegeGrant, DatabaseError> {
        let inserted = self
            .db()
            .conn()
            .execute(
                "INSERT INTO user_privileges (user_id, privilege) VALUES (?1, ?2)
                 ON CONFLICT(user_id, privilege) DO NOTHING",
                libsql::params![user_id, privilege],
            )
            .await?;
        if inserted > 0 {
            self.notify_role_change(user_id);
        }
        self.list_privileges(user_id)
            .await?
            .into_iter()
            .find(|grant| grant.privilege == privilege)
            .ok_or(DatabaseError::NoResult)
    }

    /// Revoke a privilege. Returns whether it was held.
    pub async fn revoke_privilege(
        &self,
        user_id: &str,
        privilege: &str,
    ) -> Result<bool, DatabaseError> {
        let removed = self
            .db()
            .conn()
            .execute(
                "DELETE FROM user_privileges WHERE user_id = ?1 AND privilege = ?2",
                libsql::params![user_id, privilege],
            )
            .await?;
        if removed > 0 {
            self.notify_role_change(user_id);
        }
        Ok(removed > 0)
    }

    pub async fn list_privileges(&self, user_id: &str) -> Result<Vec<PrivilegeGrant>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT user_id, privilege, granted_at FROM user_privileges
                 WHERE user_id = ?1 ORDER BY privilege",
                [user_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(PrivilegeGrant {
                user_id: row.get::<String>(0)?,
                privilege: row.get::<String>(1)?,
                granted_at: parse_datetime(&row.get::<String>(2)?)?,
            });
        }
        Ok(results)
    }

    pub async fn has_privilege(&self, user_id: &str, privilege: &str) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT 1 FROM user_privileges WHERE user_id = ?1 AND privilege = ?2",
                libsql::params![user_id, privilege],
            )
            .await?;
        Ok(rows.next().await?.is_some())
    }
}
