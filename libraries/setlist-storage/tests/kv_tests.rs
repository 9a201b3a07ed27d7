
use setlist_storage::kv;
use test_helpers::TestDb;

#[tokio::test]
async fn test_set_and_get_value() {
    let db = TestDb::new().await;

    kv::set_value(db.pool(), "default", "playlist.history.v1", r#"{"present":[]}"#)
        .await
        .unwrap();

    let value = kv::get_value(db.pool(), "default", "playlist.history.v1")
        .await
        .unwrap();

    assert_eq!(value.as_deref(), Some(r#"{"present":[]}"#));
}

#[tokio::test]
async fn test_get_missing_value() {
    let db = TestDb::new().await;

    let value = kv::get_value(db.pool(), "default", "missing").await.unwrap();
    assert_eq!(value, None);
}

#[tokio::test]
async fn test_set_value_overwrites() {
    let db = TestDb::new().await;

    kv::set_value(db.pool(), "default", "k", "first").await.unwrap();
    kv::set_value(db.pool(), "default", "k", "second").await.unwrap();

    let value = kv::get_value(db.pool(), "default", "k").await.unwrap();
    assert_eq!(value.as_deref(), Some("second"));

    let keys = kv::list_keys(db.pool(), "default").await.unwrap();
    assert_eq!(keys, vec!["k".to_string()]);
}

#[tokio::test]
async fn test_scopes_are_isolated() {
    let db = TestDb::new().await;

    kv::set_value(db.pool(), "alice", "k", "a").await.unwrap();
    kv::set_value(db.pool(), "bob", "k", "b").await.unwrap();

    assert_eq!(
        kv::get_value(db.pool(), "alice", "k").await.unwrap().as_deref(),
        Some("a")
    );
    assert_eq!(
        kv::get_value(db.pool(), "bob", "k").await.unwrap().as_deref(),
        Some("b")
    );
    assert!(kv::get_value(db.pool(), "carol", "k").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_value() {
    let db = TestDb::new().await;

    kv::set_value(db.pool(), "default", "k", "v").await.unwrap();

    assert!(kv::delete_value(db.pool(), "default", "k").await.unwrap());
    assert!(!kv::delete_value(db.pool(), "default", "k").await.unwrap());
    assert!(kv::get_value(db.pool(), "default", "k").await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_keys_sorted() {
    let db = TestDb::new().await;

    for key in ["zeta", "alpha", "mid"] {
        kv::set_value(db.pool(), "default", key, "{}").await.unwrap();
    }
    kv::set_value(db.pool(), "other", "beta", "{}").await.unwrap();

    let keys = kv::list_keys(db.pool(), "default").await.unwrap();
    assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = TestDb::new().await;

    kv::set_value(db.pool(), "default", "k", "kept").await.unwrap();
    setlist_storage::run_migrations(db.pool()).await.unwrap();

    let value = kv::get_value(db.pool(), "default", "k").await.unwrap();
    assert_eq!(value.as_deref(), Some("kept"));
}
