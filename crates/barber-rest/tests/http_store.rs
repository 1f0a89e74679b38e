//! `RestStore` against a mock backend.

use barber_config::BackendConfig;
use barber_core::store::{DataStore, Filter, LookupError, Table};
use barber_rest::RestStore;
use httpmock::prelude::*;
use serde_json::{Value, json};

fn store_for(server: &MockServer) -> RestStore {
    RestStore::new(&BackendConfig {
        url: server.base_url(),
        anon_key: "anon-key".into(),
        access_token: "user-jwt".into(),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn query_sends_filters_and_headers() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/rest/v1/organizations")
                .query_param("select", "*")
                .query_param("owner_id", "eq.user-1")
                .query_param("limit", "1")
                .header("apikey", "anon-key")
                .header("Authorization", "Bearer user-jwt");
            then.status(200)
                .json_body(json!([{ "id": "org-1", "owner_id": "user-1", "active": true }]));
        })
        .await;

    let store = store_for(&server);
    let rows = store
        .query(Table::Organizations, &Filter::new().eq("owner_id", "user-1"), 1)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], Value::from("org-1"));
}

#[tokio::test]
async fn empty_array_is_not_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rest/v1/user_roles");
            then.status(200).json_body(json!([]));
        })
        .await;

    let rows = store_for(&server)
        .query(Table::UserRoles, &Filter::new().eq("user_id", "nobody"), 1)
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn forbidden_maps_to_permission_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rest/v1/staff_members");
            then.status(403).body("row level security");
        })
        .await;

    let err = store_for(&server)
        .query(Table::StaffMembers, &Filter::new().eq("user_id", "u"), 1)
        .await
        .unwrap_err();
    assert_eq!(err, LookupError::Permission("row level security".into()));
}

#[tokio::test]
async fn non_array_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rest/v1/organizations");
            then.status(200).json_body(json!({ "message": "oops" }));
        })
        .await;

    let err = store_for(&server)
        .query(Table::Organizations, &Filter::new(), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, LookupError::Decode(_)));
}

#[tokio::test]
async fn has_role_rpc_returns_raw_json() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/rest/v1/rpc/has_role")
                .json_body(json!({ "_user_id": "user-a", "_role": "super_admin" }));
            then.status(200).json_body(json!("true"));
        })
        .await;

    let answer = store_for(&server)
        .authorization_check("user-a", "super_admin")
        .await
        .unwrap();

    mock.assert_async().await;
    // A string "true" is passed through untouched; interpreting it is the caller's job.
    assert_eq!(answer, Value::from("true"));
}

#[tokio::test]
async fn rpc_server_error_maps_to_transport() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/rest/v1/rpc/has_role");
            then.status(500).body("boom");
        })
        .await;

    let err = store_for(&server)
        .authorization_check("user-a", "super_admin")
        .await
        .unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)));
}
