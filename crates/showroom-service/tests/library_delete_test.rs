//! Integration tests for cascading library deletion.

mod helpers;

use helpers::{Op, TestApp};
use showroom_core::error::ErrorKind;
use showroom_core::traits::DataStore;
use showroom_core::types::LibraryId;

#[tokio::test]
async fn test_delete_library_removes_projects_then_library() {
    let app = TestApp::new();
    let ctx = app.seed_user("owner").await;
    let library = app.seed_library(None, "doomed").await;
    app.seed_projects(&library, 3).await;
    let keeper = app.seed_library(None, "keeper").await;
    app.seed_projects(&keeper, 2).await;
    app.store.clear_calls();

    let deleted = app
        .services
        .libraries
        .delete_library(&ctx, library.id)
        .await
        .unwrap();

    assert_eq!(deleted.id, library.id);
    assert!(app.library(library.id).await.is_none());
    assert!(app.projects_of(library.id).await.is_empty());
    assert_eq!(app.projects_of(keeper.id).await.len(), 2);

    let deletes: Vec<String> = app
        .store
        .calls()
        .into_iter()
        .filter(|(op, _)| *op == Op::Delete)
        .map(|(_, collection)| collection)
        .collect();
    assert_eq!(
        deletes,
        vec!["core_project", "core_project", "core_project", "core_library"]
    );
}

#[tokio::test]
async fn test_delete_empty_library() {
    let app = TestApp::new();
    let ctx = app.seed_user("owner").await;
    let library = app.seed_library(None, "empty").await;

    let deleted = app
        .services
        .libraries
        .delete_library(&ctx, library.id)
        .await
        .unwrap();

    assert_eq!(deleted.name, "empty");
    assert_eq!(app.rows(&app.collections.libraries).await, 0);
}

#[tokio::test]
async fn test_delete_missing_library_is_not_found() {
    let app = TestApp::new();
    let ctx = app.seed_user("owner").await;

    let err = app
        .services
        .libraries
        .delete_library(&ctx, LibraryId::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "Library not found");
}

#[tokio::test]
async fn test_child_fetch_failure_leaves_library_untouched() {
    let app = TestApp::new();
    let ctx = app.seed_user("owner").await;
    let library = app.seed_library(None, "safe").await;
    app.seed_projects(&library, 2).await;
    app.store.clear_calls();
    app.store.fail(Op::Query, &app.collections.projects);

    let err = app
        .services
        .libraries
        .delete_library(&ctx, library.id)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::UpstreamFailure);
    assert!(app.store.calls().iter().all(|(op, _)| *op != Op::Delete));

    app.store.heal();
    assert!(app.library(library.id).await.is_some());
    assert_eq!(app.projects_of(library.id).await.len(), 2);
}

#[tokio::test]
async fn test_child_delete_failure_halts_and_restores() {
    let app = TestApp::new();
    let ctx = app.seed_user("owner").await;
    let library = app.seed_library(None, "partial").await;
    let originals = app.seed_projects(&library, 3).await;
    app.store.clear_calls();
    app.store.fail_after(Op::Delete, &app.collections.projects, 1);

    let err = app
        .services
        .libraries
        .delete_library(&ctx, library.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UpstreamFailure);

    // The loop stopped at the failing child; the library was never touched.
    let library_deletes = app
        .store
        .calls()
        .iter()
        .filter(|(op, c)| *op == Op::Delete && c == "core_library")
        .count();
    assert_eq!(library_deletes, 0);

    app.store.heal();
    let mut restored = app.projects_of(library.id).await;
    restored.sort_by_key(|p| p.name.clone());
    assert_eq!(restored, originals);

    let library = app.library(library.id).await.unwrap();
    assert_eq!(library.project_count, 3);
}

#[tokio::test]
async fn test_library_delete_failure_restores_children() {
    let app = TestApp::new();
    let ctx = app.seed_user("owner").await;
    let library = app.seed_library(None, "stubborn").await;
    app.seed_projects(&library, 2).await;
    app.store.fail(Op::Delete, &app.collections.libraries);

    let err = app
        .services
        .libraries
        .delete_library(&ctx, library.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UpstreamFailure);

    app.store.heal();
    assert!(app.library(library.id).await.is_some());
    assert_eq!(app.projects_of(library.id).await.len(), 2);
    assert_eq!(app.library(library.id).await.unwrap().project_count, 2);
}

#[tokio::test]
async fn test_orphaned_children_are_removed_even_without_library() {
    let app = TestApp::new();
    let ctx = app.seed_user("owner").await;
    let library = app.seed_library(None, "ghost").await;
    app.seed_projects(&library, 2).await;
    app.store
        .inner()
        .delete(
            &app.collections.libraries,
            &showroom_core::types::filter::Filter::eq("uuid", library.id),
        )
        .await
        .unwrap();

    let err = app
        .services
        .libraries
        .delete_library(&ctx, library.id)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert!(app.projects_of(library.id).await.is_empty());
}
