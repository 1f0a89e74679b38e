//! # barber-rest
//!
//! `DataStore` over the hosted backend's HTTP API.
//!
//! Table reads go to `GET {url}/rest/v1/{table}` with `column=eq.value`
//! filters; the privilege check calls the `has_role` RPC at
//! `POST {url}/rest/v1/rpc/has_role`. Requests carry the project's `apikey`
//! header and a bearer token (the signed-in user's, or the anon key).

mod error;

pub use error::RestError;

use std::time::Duration;

use reqwest::Url;
use serde_json::Value;

use barber_config::BackendConfig;
use barber_core::store::{DataStore, Filter, LookupError, Row, Table};

const REST_PREFIX: &str = "rest/v1";
const HAS_ROLE_RPC: &str = "has_role";

pub struct RestStore {
    client: reqwest::Client,
    base: Url,
    anon_key: String,
    bearer: String,
}

impl RestStore {
    /// Build a store from backend config.
    ///
    /// # Errors
    ///
    /// Returns `RestError::InvalidUrl` if `config.url` does not parse, or
    /// `RestError::Client` if the HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, RestError> {
        let mut base = Url::parse(&config.url).map_err(|e| RestError::InvalidUrl {
            url: config.url.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(RestError::InvalidUrl {
                url: config.url.clone(),
                reason: "not a base url".into(),
            });
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RestError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base,
            anon_key: config.anon_key.clone(),
            bearer: config.bearer_token().to_string(),
        })
    }

    /// URL for a filtered table read.
    ///
    /// # Errors
    ///
    /// Returns `RestError::InvalidUrl` if the joined path is invalid.
    pub fn table_url(&self, table: Table, filter: &Filter, limit: usize) -> Result<Url, RestError> {
        let mut url = self.join(&format!("{REST_PREFIX}/{table}"))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            for (column, value) in filter.conditions() {
                pairs.append_pair(column, &filter_operand(value));
            }
            pairs.append_pair("limit", &limit.to_string());
        }
        Ok(url)
    }

    fn join(&self, path: &str) -> Result<Url, RestError> {
        self.base.join(path).map_err(|e| RestError::InvalidUrl {
            url: format!("{}{path}", self.base),
            reason: e.to_string(),
        })
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.bearer))
    }

    async fn read_json(resp: reqwest::Response) -> Result<Value, RestError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RestError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| RestError::Decode(e.to_string()))
    }

    async fn fetch_rows(
        &self,
        table: Table,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Row>, RestError> {
        let url = self.table_url(table, filter, limit)?;
        tracing::debug!(%table, url = %url, "backend query");
        let resp = self.authorized(self.client.get(url)).send().await?;
        match Self::read_json(resp).await? {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(row) => Ok(row),
                    other => Err(RestError::Decode(format!("expected row object, got {other}"))),
                })
                .collect(),
            other => Err(RestError::Decode(format!("expected row array, got {other}"))),
        }
    }

    async fn call_has_role(&self, subject_id: &str, privilege: &str) -> Result<Value, RestError> {
        let url = self.join(&format!("{REST_PREFIX}/rpc/{HAS_ROLE_RPC}"))?;
        let body = serde_json::json!({ "_user_id": subject_id, "_role": privilege });
        let resp = self
            .authorized(self.client.post(url))
            .json(&body)
            .send()
            .await?;
        Self::read_json(resp).await
    }
}

/// Render a filter value as a `PostgREST` operand (`eq.x`, `is.null`).
fn filter_operand(value: &Value) -> String {
    match value {
        Value::Null => "is.null".to_string(),
        Value::String(s) => format!("eq.{s}"),
        other => format!("eq.{other}"),
    }
}

impl DataStore for RestStore {
    async fn query(
        &self,
        table: Table,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Row>, LookupError> {
        filter.validate_for(table)?;
        Ok(self.fetch_rows(table, filter, limit).await?)
    }

    async fn authorization_check(
        &self,
        subject_id: &str,
        privilege: &str,
    ) -> Result<Value, LookupError> {
        Ok(self.call_has_role(subject_id, privilege).await?)
    }
}
