//! Staff member repository.

use barber_core::ids::PREFIX_STAFF;
use barber_core::records::StaffMember;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::BarberService;

const COLUMNS: &str = "id, organization_id, user_id, display_name, active, created_at";

fn row_to_staff(row: &libsql::Row) -> Result<StaffMember, DatabaseError> {
    Ok(StaffMember {
        id: row.get::<String>(0)?,
        organization_id: row.get::<String>(1)?,
        user_id: get_opt_string(row, 2)?,
        display_name: row.get::<String>(3)?,
        active: row.get::<i64>(4)? != 0,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl BarberService {
    /// Add an active staff member to an organization.
    pub async fn add_staff_member(
        &self,
        organization_id: &str,
        display_name: &str,
        user_id: Option<&str>,
    ) -> Result<StaffMember, DatabaseError> {
        if self.get_organization(organization_id).await?.is_none() {
            return Err(DatabaseError::NotFound {
                entity: "organization",
                id: organization_id.to_string(),
            });
        }
        let id = self.db().generate_id(PREFIX_STAFF).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO staff_members (id, organization_id, user_id, display_name)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![id.as_str(), organization_id, user_id, display_name],
            )
            .await?;
        if let Some(user_id) = user_id {
            self.notify_role_change(user_id);
        }
        self.require_staff(&id).await
    }

    pub async fn get_staff(&self, id: &str) -> Result<Option<StaffMember>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM staff_members WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_staff(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_staff(&self, organization_id: &str) -> Result<Vec<StaffMember>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {COLUMNS} FROM staff_members WHERE organization_id = ?1
                     ORDER BY display_name, id"
                ),
                [organization_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_staff(&row)?);
        }
        Ok(results)
    }

    /// Activate or deactivate a staff member. Only active records resolve as staff.
    pub async fn set_staff_active(
        &self,
        id: &str,
        active: bool,
    ) -> Result<StaffMember, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE staff_members SET active = ?1 WHERE id = ?2",
                libsql::params![active, id],
            )
            .await?;
        if changed == 0 {
            return Err(not_found(id));
        }
        let staff = self.require_staff(id).await?;
        if let Some(user_id) = &staff.user_id {
            self.notify_role_change(user_id);
        }
        Ok(staff)
    }

    async fn require_staff(&self, id: &str) -> Result<StaffMember, DatabaseError> {
        self.get_staff(id).await?.ok_or_else(|| not_found(id))
    }
}

fn not_found(id: &str) -> DatabaseError {
    DatabaseError::NotFound {
        entity: "staff member",
        id: id.to_string(),
    }
}
