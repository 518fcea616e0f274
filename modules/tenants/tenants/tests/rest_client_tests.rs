#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Wire behavior of `HttpTenantsClient` against a mock dashboards backend.

use httpmock::prelude::*;
use serde_json::json;
use tenancy_http::HttpError;
use tenants::{HttpTenantsClient, TenantsClientConfig, transform_tenant_data};
use tenants_sdk::{TenantSelect, TenantUpdate, TenantsClient, TenantsError};

fn client_for(server: &MockServer) -> HttpTenantsClient {
    let config = TenantsClientConfig {
        base_url: server.base_url(),
        allow_insecure_http: true,
        ..TenantsClientConfig::default()
    };
    HttpTenantsClient::from_config(&config).unwrap()
}

fn tenants_body() -> serde_json::Value {
    json!({
        "total": 3,
        "data": {
            "global_tenant": { "reserved": true, "description": "Global tenant", "hidden": false },
            "zeta": { "reserved": false, "description": "Last alphabetically" },
            "finance": { "reserved": false, "description": "Finance team" }
        }
    })
}

#[tokio::test]
async fn fetch_tenants_unwraps_envelope_in_backend_order() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/configuration/tenants");
        then.status(200).json_body(tenants_body());
    });

    let tenants = client_for(&server).fetch_tenants().await.unwrap();

    mock.assert();
    let keys: Vec<&str> = tenants.keys().map(String::as_str).collect();
    assert_eq!(keys, ["global_tenant", "zeta", "finance"]);
    assert!(tenants["global_tenant"].reserved);
    assert_eq!(tenants["finance"].description, "Finance team");

    let rows = transform_tenant_data(&tenants, true);
    let labels: Vec<&str> = rows.iter().map(|r| r.tenant.as_str()).collect();
    assert_eq!(labels, ["Global", "Private", "zeta", "finance"]);
}

#[tokio::test]
async fn fetch_tenant_name_list_returns_keys() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/configuration/tenants");
        then.status(200).json_body(tenants_body());
    });

    let names = client_for(&server).fetch_tenant_name_list().await.unwrap();

    assert_eq!(names, ["global_tenant", "zeta", "finance"]);
}

#[tokio::test]
async fn fetch_current_tenant_accepts_json_string() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/multitenancy/tenant");
        then.status(200)
            .header("content-type", "application/json")
            .body("\"finance\"");
    });

    let current = client_for(&server).fetch_current_tenant().await.unwrap();

    assert_eq!(current, "finance");
}

#[tokio::test]
async fn fetch_current_tenant_accepts_plain_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/multitenancy/tenant");
        then.status(200)
            .header("content-type", "text/plain")
            .body("__user__");
    });

    let current = client_for(&server).fetch_current_tenant().await.unwrap();

    assert_eq!(current, "__user__");
}

#[tokio::test]
async fn update_tenant_posts_description_to_tenant_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/configuration/tenants/team-a")
            .header("content-type", "application/json")
            .header("osd-xsrf", "true")
            .json_body(json!({ "description": "Team A" }));
        then.status(200)
            .json_body(json!({ "status": "OK", "message": "'team-a' updated." }));
    });

    client_for(&server)
        .update_tenant(
            "team-a",
            &TenantUpdate {
                description: "Team A".to_owned(),
            },
        )
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn select_tenant_posts_tenant_and_username() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/multitenancy/tenant")
            .json_body(json!({ "tenant": "finance", "username": "alice" }));
        then.status(200).body("\"finance\"");
    });

    let selected = client_for(&server)
        .select_tenant(&TenantSelect {
            tenant: "finance".to_owned(),
            username: "alice".to_owned(),
        })
        .await
        .unwrap();

    mock.assert();
    assert_eq!(selected, "finance");
}

#[tokio::test]
async fn delete_removes_each_tenant_in_order() {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/configuration/tenants/alpha");
        then.status(200);
    });
    let second = server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/configuration/tenants/beta");
        then.status(200);
    });

    client_for(&server)
        .request_delete_tenant(&["alpha".to_owned(), "beta".to_owned()])
        .await
        .unwrap();

    first.assert_calls(1);
    second.assert_calls(1);
}

#[tokio::test]
async fn delete_stops_at_first_failure() {
    let server = MockServer::start();
    let alpha = server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/configuration/tenants/alpha");
        then.status(200);
    });
    let beta = server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/configuration/tenants/beta");
        then.status(403).body("forbidden");
    });
    let gamma = server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/configuration/tenants/gamma");
        then.status(200);
    });

    let err = client_for(&server)
        .request_delete_tenant(&["alpha".to_owned(), "beta".to_owned(), "gamma".to_owned()])
        .await
        .unwrap_err();

    alpha.assert_calls(1);
    beta.assert_calls(1);
    gamma.assert_calls(0);

    match err {
        TenantsError::PartialDelete {
            failed,
            deleted,
            source,
        } => {
            assert_eq!(failed, "beta");
            assert_eq!(deleted, ["alpha"]);
            assert!(matches!(*source, TenantsError::Transport { .. }));
        }
        other => panic!("expected PartialDelete, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_of_nothing_makes_no_calls() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE);
        then.status(200);
    });

    client_for(&server).request_delete_tenant(&[]).await.unwrap();

    mock.assert_calls(0);
}

#[tokio::test]
async fn server_error_is_propagated_with_transport_source() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/configuration/tenants");
        then.status(500).body("backend exploded");
    });

    let err = client_for(&server).fetch_tenants().await.unwrap_err();

    let TenantsError::Transport { operation, source } = err else {
        panic!("expected Transport error");
    };
    assert_eq!(operation, "fetch_tenants");
    let http_err = source
        .downcast_ref::<HttpError>()
        .expect("source should be HttpError");
    assert!(http_err.status().is_some_and(|s| s.as_u16() == 500));
    match http_err {
        HttpError::HttpStatus { body_preview, .. } => {
            assert_eq!(body_preview, "backend exploded");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_tenant_body_is_a_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/configuration/tenants");
        then.status(200).json_body(json!({ "data": { "finance": { "description": 1 } } }));
    });

    let err = client_for(&server).fetch_tenants().await.unwrap_err();

    let TenantsError::Transport { source, .. } = err else {
        panic!("expected Transport error");
    };
    assert!(matches!(
        source.downcast_ref::<HttpError>(),
        Some(HttpError::Json(_))
    ));
}

#[tokio::test]
async fn configured_headers_are_sent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/multitenancy/tenant")
            .header("osd-xsrf", "true")
            .header("authorization", "Basic YWRtaW46YWRtaW4=");
        then.status(200).body("finance");
    });

    let mut config = TenantsClientConfig {
        base_url: server.base_url(),
        allow_insecure_http: true,
        ..TenantsClientConfig::default()
    };
    config.headers.insert(
        "authorization".to_owned(),
        "Basic YWRtaW46YWRtaW4=".to_owned(),
    );
    let client = HttpTenantsClient::from_config(&config).unwrap();

    client.fetch_current_tenant().await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn custom_endpoints_and_base_path_are_honored() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/dashboards/custom/tenants");
        then.status(200).json_body(json!({ "data": {} }));
    });

    let config = TenantsClientConfig {
        base_url: format!("{}/dashboards/", server.base_url()),
        tenants_endpoint: "custom/tenants".to_owned(),
        allow_insecure_http: true,
        ..TenantsClientConfig::default()
    };
    let tenants = HttpTenantsClient::from_config(&config)
        .unwrap()
        .fetch_tenants()
        .await
        .unwrap();

    mock.assert();
    assert!(tenants.is_empty());
}

#[tokio::test]
async fn plain_http_is_refused_unless_allowed() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let config = TenantsClientConfig {
        base_url: server.base_url(),
        ..TenantsClientConfig::default()
    };
    let err = HttpTenantsClient::from_config(&config)
        .unwrap()
        .fetch_current_tenant()
        .await
        .unwrap_err();

    let TenantsError::Transport { source, .. } = err else {
        panic!("expected Transport error");
    };
    assert!(matches!(
        source.downcast_ref::<HttpError>(),
        Some(HttpError::InvalidScheme { .. })
    ));
    mock.assert_calls(0);
}

#[test]
fn unparsable_base_url_is_invalid_endpoint() {
    let config = TenantsClientConfig {
        base_url: "not a url".to_owned(),
        ..TenantsClientConfig::default()
    };

    let result = HttpTenantsClient::from_config(&config);

    assert!(matches!(result, Err(TenantsError::InvalidEndpoint(_))));
}

#[tokio::test]
async fn dot_tenant_names_never_reach_the_collection() {
    let server = MockServer::start();
    let collection = server.mock(|when, then| {
        when.path("/api/v1/configuration/tenants");
        then.status(200);
    });
    let client = client_for(&server);

    let update = client
        .update_tenant(
            ".",
            &TenantUpdate {
                description: "x".to_owned(),
            },
        )
        .await;
    assert!(matches!(update, Err(TenantsError::InvalidEndpoint(_))));

    let err = client
        .request_delete_tenant(&["..".to_owned()])
        .await
        .unwrap_err();
    match err {
        TenantsError::PartialDelete {
            failed,
            deleted,
            source,
        } => {
            assert_eq!(failed, "..");
            assert!(deleted.is_empty());
            assert!(matches!(*source, TenantsError::InvalidEndpoint(_)));
        }
        other => panic!("expected PartialDelete, got {other:?}"),
    }

    collection.assert_calls(0);
}
