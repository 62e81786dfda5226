//! Integration tests for setup link issuance, lookup, listing, and removal.

mod helpers;

use setuplink_core::types::response::{ApiError, ApiResponse};
use setuplink_entity::setup_link::{CreateSetupLink, SetupLink};

const THREE_DAYS_MS: i64 = 3 * 24 * 60 * 60 * 1000;

fn expired_link(token: &str, service: &str) -> SetupLink {
    SetupLink {
        setup_id: format!("setup-{token}"),
        tenant: "acme".to_string(),
        product: "crm".to_string(),
        service: service.to_string(),
        token: token.to_string(),
        valid_till: helpers::now_ms() - 1,
        url: format!("https://sso.example.test/setup/{token}"),
    }
}

#[tokio::test]
async fn test_create_then_create_returns_same_link() {
    let app = helpers::TestApp::new().await;
    let before = helpers::now_ms();

    let first = app
        .service
        .create(CreateSetupLink::new("acme", "crm", "", false))
        .await
        .unwrap();
    let link = first.data.clone().expect("link issued");
    assert!(first.error.is_none());
    assert!(link.valid_till >= before + THREE_DAYS_MS);
    assert!(link.valid_till <= helpers::now_ms() + THREE_DAYS_MS);
    assert!(link.url.starts_with("https://sso.example.test/setup/"));
    assert!(link.url.ends_with(&link.token));

    let second = app
        .service
        .create(CreateSetupLink::new("acme", "crm", "", false))
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_setup_id_is_stable_across_services() {
    let app = helpers::TestApp::new().await;
    let other = helpers::TestApp::new().await;

    let a = app
        .service
        .create(CreateSetupLink::new("acme", "crm", "sso", false))
        .await
        .unwrap()
        .data
        .unwrap();
    let b = other
        .service
        .create(CreateSetupLink::new("acme", "crm", "sso", false))
        .await
        .unwrap()
        .data
        .unwrap();

    assert_eq!(a.setup_id, b.setup_id);
    assert_ne!(a.token, b.token);
}

#[tokio::test]
async fn test_resolve_issued_link() {
    let app = helpers::TestApp::new().await;
    let link = app
        .service
        .create(CreateSetupLink::new("acme", "crm", "billing", false))
        .await
        .unwrap()
        .data
        .unwrap();

    let resolved = app.service.get_by_token(&link.token).await.unwrap();
    assert_eq!(resolved, ApiResponse::ok(link));
}

#[tokio::test]
async fn test_expired_token_envelope() {
    let app = helpers::TestApp::new().await;
    app.seed(&expired_link("stale", "")).await;

    let resp = app.service.get_by_token("stale").await.unwrap();
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "data": null,
            "error": { "message": "Link is expired!", "code": 401 }
        })
    );
}

#[tokio::test]
async fn test_regenerate_replaces_live_link() {
    let app = helpers::TestApp::new().await;
    let original = app
        .service
        .create(CreateSetupLink::new("acme", "crm", "", false))
        .await
        .unwrap()
        .data
        .unwrap();
    let regenerated = app
        .service
        .create(CreateSetupLink::new("acme", "crm", "", true))
        .await
        .unwrap()
        .data
        .unwrap();

    assert_eq!(original.setup_id, regenerated.setup_id);
    assert_ne!(original.token, regenerated.token);
    assert_eq!(
        app.service.get_by_token(&original.token).await.unwrap(),
        ApiResponse::fail(ApiError {
            message: "Link not found!".to_string(),
            code: 404,
        })
    );
}

#[tokio::test]
async fn test_list_by_service() {
    let app = helpers::TestApp::new().await;
    app.seed(&expired_link("old", "billing")).await;
    for tenant in ["acme", "globex"] {
        app.service
            .create(CreateSetupLink::new(tenant, "crm", "billing", false))
            .await
            .unwrap();
    }
    app.service
        .create(CreateSetupLink::new("acme", "crm", "other", false))
        .await
        .unwrap();

    let links = app
        .service
        .get_by_service("billing")
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(links.len(), 3);
    assert!(links.iter().all(|l| l.service == "billing"));

    let none = app.service.get_by_service("").await.unwrap();
    assert_eq!(none, ApiResponse::ok(Vec::new()));
}

#[tokio::test]
async fn test_remove_flow() {
    let app = helpers::TestApp::new().await;
    let link = app
        .service
        .create(CreateSetupLink::new("acme", "crm", "", false))
        .await
        .unwrap()
        .data
        .unwrap();

    assert_eq!(
        app.service.remove(&link.setup_id).await.unwrap(),
        ApiResponse::ok(true)
    );
    assert!(app.store.get(&link.setup_id).await.unwrap().is_none());

    let recreated = app
        .service
        .create(CreateSetupLink::new("acme", "crm", "", false))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_ne!(recreated.token, link.token);

    assert_eq!(
        app.service.remove("nonexistent-key").await.unwrap(),
        ApiResponse::ok(true)
    );
    let rejected = app.service.remove("").await.unwrap();
    assert_eq!(rejected.error.map(|e| e.code), Some(400));
}

#[tokio::test]
async fn test_empty_inputs() {
    let app = helpers::TestApp::new().await;

    let by_token = app.service.get_by_token("").await.unwrap();
    assert_eq!(by_token.error.map(|e| e.code), Some(404));

    let missing_tenant = app
        .service
        .create(CreateSetupLink::new("", "crm", "", false))
        .await
        .unwrap();
    assert_eq!(missing_tenant.error.map(|e| e.code), Some(400));

    let all = app.service.get_all().await.unwrap();
    assert_eq!(all.error.map(|e| e.code), Some(501));
}
