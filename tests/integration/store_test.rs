//! Integration tests for the indexed store contract through `StoreManager`.

mod helpers;

use setuplink_core::traits::store::IndexEntry;
use setuplink_store::keys::IndexName;

#[tokio::test]
async fn test_index_reads_follow_latest_write() {
    let app = helpers::TestApp::new().await;
    let store = &app.store;

    store
        .put("k", "v1", &[IndexName::SetupToken.entry("t1"), IndexName::Service.entry("s")])
        .await
        .unwrap();
    store
        .put("k", "v2", &[IndexName::SetupToken.entry("t2"), IndexName::Service.entry("s")])
        .await
        .unwrap();

    assert!(
        store
            .get_by_index(&IndexName::SetupToken.entry("t1"))
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        store.get_by_index(&IndexName::Service.entry("s")).await.unwrap(),
        vec!["v2".to_string()]
    );
}

#[tokio::test]
async fn test_delete_then_lookup() {
    let app = helpers::TestApp::new().await;
    let store = &app.store;
    let entry = IndexEntry::new("service", "billing");

    store.put("a", "va", std::slice::from_ref(&entry)).await.unwrap();
    store.put("b", "vb", std::slice::from_ref(&entry)).await.unwrap();
    store.delete("a").await.unwrap();

    assert_eq!(store.get_by_index(&entry).await.unwrap(), vec!["vb".to_string()]);
    assert!(store.get("a").await.unwrap().is_none());
    assert!(store.health_check().await.unwrap());
}
