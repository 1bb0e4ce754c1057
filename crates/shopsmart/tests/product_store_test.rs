use shopsmart::model::Product;
use shopsmart::projections::order_total;
use shopsmart::store::fs_backend::FsBackend;
use shopsmart::store::{ProductStore, ITEMS_KEY, ORDERS_KEY};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn open(dir: &TempDir, key: &str) -> ProductStore<FsBackend> {
    ProductStore::new(Arc::new(FsBackend::new(dir.path().to_path_buf())), key)
}

#[tokio::test]
async fn round_trip_through_disk() {
    let dir = TempDir::new().unwrap();
    let items = vec![
        Product::new("Milk", 1.5, 2).with_image_url("milk.png"),
        Product::new("Bread", 2.25, 1),
    ];

    open(&dir, ITEMS_KEY).save_items(&items).await.unwrap();

    // A fresh store over the same directory sees the same collection.
    let reopened = open(&dir, ITEMS_KEY);
    let mut stream = reopened.read_stream();
    assert_eq!(stream.next_snapshot().await.unwrap().unwrap(), items);
}

#[tokio::test]
async fn reads_collections_written_by_the_app() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("items.json"),
        r#"[
            {"id":"5f1c","name":"Rice","amount":10.0,"no_of_items":2,"dateAdded":1700000000000},
            {"name":"Dal","amount":5,"no_of_items":3,"imageUrl":"dal.png","dateAdded":1700000000001}
        ]"#,
    )
    .unwrap();

    let store = open(&dir, ITEMS_KEY);
    let items = store.snapshot().await.unwrap();
    assert_eq!(items[0].id, "5f1c");
    assert!(items[1].has_identity());
    assert_eq!(items[1].image_url.as_deref(), Some("dal.png"));
    assert_eq!(order_total(&items), 35.0);
}

#[tokio::test]
async fn missing_file_is_empty_and_corrupt_file_errors() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir, ORDERS_KEY);
    assert!(store.snapshot().await.unwrap().is_empty());

    fs::write(dir.path().join("orders.json"), "[{\"name\":").unwrap();
    assert!(store.snapshot().await.is_err());
}

#[tokio::test]
async fn overwrite_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir, ITEMS_KEY);
    store
        .save_items(&[Product::new("A", 1.0, 1), Product::new("B", 1.0, 1)])
        .await
        .unwrap();
    let b = vec![Product::new("C", 2.0, 2)];
    store.save_items(&b).await.unwrap();

    assert_eq!(store.snapshot().await.unwrap(), b);
}
