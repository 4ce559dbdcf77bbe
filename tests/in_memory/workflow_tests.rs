//! End-to-end workflow integration over the public crate surface.

use taskboard::task::{
    domain::Task,
    ports::TaskStore,
    services::{TaskDraft, TaskWorkflowError},
};

use super::helpers::{seed, service_with_store, task_titled};

#[tokio::test(flavor = "multi_thread")]
async fn full_modal_lifecycle_converges_with_the_store() {
    let (mut service, store) = service_with_store();
    let learn = task_titled("Learn");
    let build = task_titled("Build");
    seed(&store, &[learn.clone(), build.clone()]).await;
    service.load().await.expect("load should succeed");

    service.request_add();
    let added = service
        .save(TaskDraft::new("Review").with_description("Weekly pass"))
        .await
        .expect("add should succeed");

    assert!(service.request_edit(added.id()));
    let revised = service
        .save(TaskDraft::new("Review notes").with_id(added.id()))
        .await
        .expect("edit should succeed");
    // The description was omitted from the edit draft and survives.
    assert_eq!(revised.description(), Some("Weekly pass"));

    service
        .toggle_complete(build.id())
        .await
        .expect("toggle should succeed");

    assert!(service.request_delete(learn.id()));
    service
        .confirm_delete()
        .await
        .expect("delete should succeed");

    assert!(service.workflow().is_idle());
    assert!(service.last_error().is_none());

    // The canonical collection and the durable mirror converge after every
    // successful mutation.
    let stored = store.list_all().await.expect("list should succeed");
    let canonical: Vec<Task> = service.tasks().cloned().collect();
    assert_eq!(stored, canonical);
}

#[tokio::test(flavor = "multi_thread")]
async fn write_failure_recovery_reaches_the_store() {
    let (mut service, store) = service_with_store();
    service.load().await.expect("load should succeed");
    service.request_add();

    store.fail_writes(true);
    let draft = TaskDraft::new("Buy milk");
    let failed = service.save(draft.clone()).await;
    assert!(matches!(failed, Err(TaskWorkflowError::Persistence(_))));

    let stored = store.list_all().await.expect("list should succeed");
    assert!(stored.is_empty(), "failed write must not reach the store");

    store.fail_writes(false);
    let saved = service.save(draft).await.expect("retry should succeed");

    let replayed = store.list_all().await.expect("list should succeed");
    assert_eq!(replayed, vec![saved]);
}

#[tokio::test(flavor = "multi_thread")]
async fn unavailable_store_degrades_then_recovers_on_reload() {
    let (mut service, store) = service_with_store();
    seed(&store, &[task_titled("Learn")]).await;

    store.fail_reads(true);
    let failed = service.load().await;
    assert!(matches!(failed, Err(TaskWorkflowError::StoreUnavailable(_))));
    assert_eq!(service.task_count(), 0);
    assert!(service.last_error().is_some());

    store.fail_reads(false);
    service.load().await.expect("reload should succeed");
    assert_eq!(service.task_count(), 1);
    assert!(service.last_error().is_none());
}
