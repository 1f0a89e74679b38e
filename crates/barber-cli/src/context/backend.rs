use serde_json::Value;

use barber_core::store::{DataStore, Filter, LookupError, Row, Table};
use barber_db::service::BarberService;
use barber_rest::RestStore;

/// Where role-determining data is read from.
pub enum Backend {
    Local(BarberService),
    Remote(RestStore),
}

impl Backend {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Local(_) => "local",
            Self::Remote(_) => "remote",
        }
    }

    /// The local database, for commands that write.
    pub fn local(&self) -> anyhow::Result<&BarberService> {
        match self {
            Self::Local(service) => Ok(service),
            Self::Remote(_) => anyhow::bail!(
                "this command writes to the local database and cannot run with --remote"
            ),
        }
    }
}

impl DataStore for Backend {
    async fn query(
        &self,
        table: Table,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Row>, LookupError> {
        match self {
            Self::Local(service) => service.query(table, filter, limit).await,
            Self::Remote(store) => store.query(table, filter, limit).await,
        }
    }

    async fn authorization_check(
        &self,
        subject_id: &str,
        privilege: &str,
    ) -> Result<Value, LookupError> {
        match self {
            Self::Local(service) => service.authorization_check(subject_id, privilege).await,
            Self::Remote(store) => store.authorization_check(subject_id, privilege).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use barber_config::BackendConfig;

    use super::*;

    #[tokio::test]
    async fn local_backend_reads_through() {
        let service = BarberService::new_local(":memory:").await.expect("db should open");
        service
            .create_organization("Shop", "user-1")
            .await
            .expect("org should create");
        let backend = Backend::Local(service);

        let rows = backend
            .query(Table::Organizations, &Filter::new().eq("owner_id", "user-1"), 1)
            .await
            .expect("query should succeed");
        assert_eq!(rows.len(), 1);
        assert_eq!(backend.kind(), "local");
        assert!(backend.local().is_ok());
    }

    #[test]
    fn remote_backend_refuses_writes() {
        let store = RestStore::new(&BackendConfig {
            url: "https://abc.backend.example".into(),
            anon_key: "anon".into(),
            ..Default::default()
        })
        .expect("store should build");
        let backend = Backend::Remote(store);

        let err = backend.local().err().expect("remote should refuse");
        assert!(err.to_string().contains("--remote"));
    }
}
