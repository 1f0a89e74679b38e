//! Generic role table repository.

use barber_core::enums::Role;
use barber_core::ids::PREFIX_ROLE;
use barber_core::records::UserRoleRecord;
use barber_core::role::RoleAssignment;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_role};
use crate::service::BarberService;

const COLUMNS: &str = "id, user_id, role, organization_id, created_at";

fn row_to_role(row: &libsql::Row) -> Result<UserRoleRecord, DatabaseError> {
    Ok(UserRoleRecord {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        role: parse_role(&row.get::<String>(2)?)?,
        organization_id: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl BarberService {
    /// Store a role for a subject. Re-assigning an identical role returns the
    /// existing row.
    pub async fn assign_role(
        &self,
        user_id: &str,
        role: Role,
        organization_id: Option<&str>,
    ) -> Result<UserRoleRecord, DatabaseError> {
        if role == Role::None {
            return Err(DatabaseError::InvalidState(
                "role 'none' cannot be stored".into(),
            ));
        }
        RoleAssignment::from_stored(role, organization_id.map(str::to_string))
            .map_err(|e| DatabaseError::InvalidState(e.to_string()))?;

        if let Some(existing) = self.find_role(user_id, role, organization_id).await? {
            return Ok(existing);
        }

        let id = self.db().generate_id(PREFIX_ROLE).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO user_roles (id, user_id, role, organization_id) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![id.as_str(), user_id, role.as_str(), organization_id],
            )
            .await?;
        self.notify_role_change(user_id);

        self.find_role(user_id, role, organization_id)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    /// Delete a role row by id. Returns whether a row was removed.
    pub async fn revoke_role(&self, id: &str) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT user_id FROM user_roles WHERE id = ?1", [id])
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(false);
        };
        let user_id = row.get::<String>(0)?;

        self.db()
            .conn()
            .execute("DELETE FROM user_roles WHERE id = ?1", [id])
            .await?;
        self.notify_role_change(&user_id);
        Ok(true)
    }

    pub async fn list_roles(&self, user_id: &str) -> Result<Vec<UserRoleRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM user_roles WHERE user_id = ?1 ORDER BY created_at, id"),
                [user_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_role(&row)?);
        }
        Ok(results)
    }

    async fn find_role(
        &self,
        user_id: &str,
        role: Role,
        organization_id: Option<&str>,
    ) -> Result<Option<UserRoleRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {COLUMNS} FROM user_roles
                     WHERE user_id = ?1 AND role = ?2 AND organization_id IS ?3"
                ),
                libsql::params![user_id, role.as_str(), organization_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_role(&row)?)),
            None => Ok(None),
        }
    }
}
