//! Setup link flows against a live Redis server.
//!
//! Every test returns early unless `REDIS_URL` is set, e.g.
//! `REDIS_URL=redis://localhost:6379 cargo test --test redis`.

mod helpers;

use setuplink_core::types::response::{ApiError, ApiResponse};
use setuplink_entity::setup_link::CreateSetupLink;
use setuplink_store::keys::IndexName;

#[tokio::test]
async fn test_regenerated_token_is_not_found() {
    let Some(app) = helpers::TestApp::redis("regenerate").await else {
        return;
    };
    let original = app
        .service
        .create(CreateSetupLink::new("acme", "crm", "sso", false))
        .await
        .unwrap()
        .data
        .unwrap();
    let regenerated = app
        .service
        .create(CreateSetupLink::new("acme", "crm", "sso", true))
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
    assert!(
        app.store
            .get_by_index(&IndexName::SetupToken.entry(original.token.as_str()))
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        app.service.get_by_token(&regenerated.token).await.unwrap(),
        ApiResponse::ok(regenerated.clone())
    );

    app.service.remove(&regenerated.setup_id).await.unwrap();
}

#[tokio::test]
async fn test_remove_then_list_on_redis() {
    let Some(app) = helpers::TestApp::redis("remove").await else {
        return;
    };
    let link = app
        .service
        .create(CreateSetupLink::new("acme", "crm", "billing", false))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(
        app.service.get_by_service("billing").await.unwrap(),
        ApiResponse::ok(vec![link.clone()])
    );

    assert_eq!(
        app.service.remove(&link.setup_id).await.unwrap(),
        ApiResponse::ok(true)
    );
    assert_eq!(
        app.service.get_by_service("billing").await.unwrap(),
        ApiResponse::ok(Vec::new())
    );
    assert!(app.store.get(&link.setup_id).await.unwrap().is_none());
}
