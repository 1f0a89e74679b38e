//! Organization repository.

use barber_core::ids::PREFIX_ORGANIZATION;
use barber_core::records::Organization;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::BarberService;

const COLUMNS: &str = "id, name, owner_id, active, created_at";

fn row_to_organization(row: &libsql::Row) -> Result<Organization, DatabaseError> {
    Ok(Organization {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        owner_id: row.get::<String>(2)?,
        active: row.get::<i64>(3)? != 0,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl BarberService {
    pub async fn create_organization(
        &self,
        name: &str,
        owner_id: &str,
    ) -> Result<Organization, DatabaseError> {
        let id = self.db().generate_id(PREFIX_ORGANIZATION).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO organizations (id, name, owner_id) VALUES (?1, ?2, ?3)",
                libsql::params![id.as_str(), name, owner_id],
            )
            .await?;
        self.notify_role_change(owner_id);
        self.require_organization(&id).await
    }

    pub async fn get_organization(&self, id: &str) -> Result<Option<Organization>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM organizations WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_organization(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_organizations(&self) -> Result<Vec<Organization>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM organizations ORDER BY created_at, id"),
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_organization(&row)?);
        }
        Ok(results)
    }

    /// Toggle the listing flag. Ownership, and so owner resolution, is unchanged.
    pub async fn set_organization_active(
        &self,
        id: &str,
        active: bool,
    ) -> Result<Organization, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE organizations SET active = ?1 WHERE id = ?2",
                libsql::params![active, id],
            )
            .await?;
        if changed == 0 {
            return Err(not_found(id));
        }
        self.require_organization(id).await
    }

    /// Hand an organization to a new owner. Both subjects change role.
    pub async fn transfer_ownership(
        &self,
        id: &str,
        new_owner_id: &str,
    ) -> Result<Organization, DatabaseError> {
        let previous = self.require_organization(id).await?;
        self.db()
            .conn()
            .execute(
                "UPDATE organizations SET owner_id = ?1 WHERE id = ?2",
                libsql::params![new_owner_id, id],
            )
            .await?;
        self.notify_role_change(&previous.owner_id);
        self.notify_role_change(new_owner_id);
        self.require_organization(id).await
    }

    /// Delete an organization together with its staff and scoped role rows.
    ///
    /// Everyone who could have resolved through it is invalidated.
    pub async fn delete_organization(&self, id: &str) -> Result<(), DatabaseError> {
        let org = self.require_organization(id).await?;

        let mut affected = vec![org.owner_id];
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT user_id FROM staff_members WHERE organization_id = ?1 AND user_id IS NOT NULL
                 UNION
                 SELECT user_id FROM user_roles WHERE organization_id = ?1",
                [id],
            )
            .await?;
        while let Some(row) = rows.next().await? {
            affected.push(row.get::<String>(0)?);
        }

        self.db()
            .conn()
            .execute("DELETE FROM organizations WHERE id = ?1", [id])
            .await?;

        affected.sort();
        affected.dedup();
        for subject in &affected {
            self.notify_role_change(subject);
        }
        Ok(())
    }

    async fn require_organization(&self, id: &str) -> Result<Organization, DatabaseError> {
        self.get_organization(id).await?.ok_or_else(|| not_found(id))
    }
}

fn not_found(id: &str) -> DatabaseError {
    DatabaseError::NotFound {
        entity: "organization",
        id: id.to_string(),
    }
}
