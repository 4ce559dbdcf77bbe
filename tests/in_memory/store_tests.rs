//! Port-contract checks for the in-memory store behind a trait object.

use std::sync::Arc;

use taskboard::task::{adapters::memory::InMemoryTaskStore, ports::TaskStore};

use super::helpers::task_titled;

#[tokio::test(flavor = "multi_thread")]
async fn the_port_is_object_safe_and_echoes_upserts() {
    let store: Arc<dyn TaskStore> = Arc::new(InMemoryTaskStore::new());
    let task = task_titled("Learn");

    let echoed = store
        .upsert(task.clone())
        .await
        .expect("upsert should succeed");
    assert_eq!(echoed, task);

    let listed = store.list_all().await.expect("list should succeed");
    assert_eq!(listed, vec![task]);
}

#[tokio::test(flavor = "multi_thread")]
async fn removing_the_same_task_twice_is_idempotent() {
    let store: Arc<dyn TaskStore> = Arc::new(InMemoryTaskStore::new());
    let task = task_titled("Build");
    store
        .upsert(task.clone())
        .await
        .expect("upsert should succeed");

    store
        .remove(task.id())
        .await
        .expect("first remove should succeed");
    store
        .remove(task.id())
        .await
        .expect("second remove is a no-op success");

    let listed = store.list_all().await.expect("list should succeed");
    assert!(listed.is_empty());
}
