//! Router-level tests driving the API with `oneshot` over an in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use tower::ServiceExt;

use showroom_api::{AppState, build_router};
use showroom_core::config::AppConfig;
use showroom_core::error::AppError;
use showroom_core::result::AppResult;
use showroom_core::traits::{DataStore, IdentityProvider};
use showroom_core::types::filter::Filter;
use showroom_core::types::{CompanyId, LibraryId, UserId};
use showroom_database::{MemoryStore, Repositories};
use showroom_entity::library::{CreateLibrary, Library};
use showroom_entity::share_code::CreateShareCode;
use showroom_service::Services;

/// Treats the bearer token as the user id itself.
struct TokenIsUserId;

#[async_trait]
impl IdentityProvider for TokenIsUserId {
    async fn resolve(&self, token: &str) -> AppResult<UserId> {
        token
            .parse()
            .map_err(|_| AppError::unauthorized("Unknown token"))
    }
}

struct TestApp {
    router: Router,
    store: MemoryStore,
    repos: Repositories,
    config: AppConfig,
}

impl TestApp {
    fn new() -> Self {
        let config = AppConfig::default();
        let store = MemoryStore::new();
        let repos = Repositories::new(Arc::new(store.clone()), &config.collections);
        let services = Services::new(&repos);
        let state = AppState::new(Arc::new(config.clone()), services, Arc::new(TokenIsUserId));
        Self {
            router: build_router(state),
            store,
            repos,
            config,
        }
    }

    async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        user: Option<UserId>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header("authorization", format!("Bearer {user}"));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn seed_user(&self) -> UserId {
        let id = UserId::new();
        let row = json!({"uuid": id, "name": "Ada", "lastName": "Lovelace", "email": null, "core_company": null});
        let Value::Object(row) = row else { unreachable!() };
        self.store
            .insert(&self.config.collections.users, row)
            .await
            .unwrap();
        id
    }

    async fn seed_company(&self) -> CompanyId {
        let id = CompanyId::new();
        let row = json!({"uuid": id, "name": "Acme", "code": "JOIN", "uuid_user": null, "logo_url": null});
        let Value::Object(row) = row else { unreachable!() };
        self.store
            .insert(&self.config.collections.companies, row)
            .await
            .unwrap();
        id
    }

    async fn seed_library(&self, company: Option<CompanyId>) -> Library {
        self.repos
            .libraries
            .create(&CreateLibrary {
                name: "Catalogue".to_string(),
                description: None,
                core_company: company,
                belongs_to: None,
                is_personal: false,
                is_copy: false,
                project_count: 0,
                logo_url: None,
                banner_url: None,
                created_by: None,
            })
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let app = TestApp::new();
    let (status, body) = app.request("GET", "/api/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["status"], json!("ok"));
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = TestApp::new();
    let uri = format!("/api/copies/libraries/{}", LibraryId::new());
    let (status, body) = app.request("POST", &uri, None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("UNAUTHORIZED"));
}

#[tokio::test]
async fn test_issue_then_redeem() {
    let app = TestApp::new();
    let issuer = app.seed_user().await;
    let reader = app.seed_user().await;
    let library = app.seed_library(None).await;

    let (status, body) = app
        .request(
            "POST",
            &format!("/api/copies/libraries/{}", library.id),
            None,
            Some(issuer),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let code = body["data"]["code"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 10);
    assert_eq!(body["data"]["core_library"], json!(library.id.to_string()));

    let (status, body) = app
        .request("POST", &format!("/api/copies/redeem/{code}"), None, Some(reader))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["belongs_to"], json!(reader.to_string()));
    assert_eq!(body["data"]["is_copy"], json!(true));
    assert_eq!(body["data"]["is_personal"], json!(true));
    assert_ne!(body["data"]["uuid"], json!(library.id.to_string()));
}

#[tokio::test]
async fn test_redeem_unknown_code_is_404() {
    let app = TestApp::new();
    let user = app.seed_user().await;

    let (status, body) = app
        .request("POST", "/api/copies/redeem/DOESNOTEXIST", None, Some(user))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "NOT_FOUND", "message": "Code not found"}));
}

#[tokio::test]
async fn test_redeem_expired_code_is_400() {
    let app = TestApp::new();
    let user = app.seed_user().await;
    let library = app.seed_library(None).await;
    app.repos
        .share_codes
        .create(&CreateShareCode {
            core_library: library.id,
            code: "OLDCODE123".to_string(),
            ended_at: Utc::now() - Duration::days(1),
        })
        .await
        .unwrap();

    let (status, body) = app
        .request("POST", "/api/copies/redeem/OLDCODE123", None, Some(user))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("EXPIRED"));
}

#[tokio::test]
async fn test_project_lifecycle_keeps_count() {
    let app = TestApp::new();
    let user = app.seed_user().await;
    let library = app.seed_library(None).await;

    let (status, body) = app
        .request(
            "POST",
            "/api/projects",
            Some(json!({
                "core_library": library.id,
                "name": "Demo",
                "apk_url": "https://cdn.example.com/demo.apk",
            })),
            Some(user),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["created_by"], json!(user.to_string()));
    let project_id = body["data"]["uuid"].as_str().unwrap().to_string();

    let (status, body) = app
        .request(
            "PATCH",
            &format!("/api/libraries/{}/project-count", library.id),
            None,
            Some(user),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["project_count"], json!(1));

    let (status, body) = app
        .request(
            "GET",
            &format!("/api/libraries/{}/projects", library.id),
            None,
            Some(user),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = app
        .request("DELETE", &format!("/api/projects/{project_id}"), None, Some(user))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request("DELETE", &format!("/api/projects/{project_id}"), None, Some(user))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blank_project_name_is_400() {
    let app = TestApp::new();
    let user = app.seed_user().await;
    let library = app.seed_library(None).await;

    let (status, body) = app
        .request(
            "POST",
            "/api/projects",
            Some(json!({"core_library": library.id, "name": ""})),
            Some(user),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("INVALID"));
}

#[tokio::test]
async fn test_create_project_rejects_unknown_fields() {
    let app = TestApp::new();
    let user = app.seed_user().await;
    let library = app.seed_library(None).await;

    let (status, body) = app
        .request(
            "POST",
            "/api/projects",
            Some(json!({
                "core_library": library.id,
                "name": "Demo",
                "not_a_column": 1,
                "project_count": 99,
            })),
            Some(user),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("INVALID"));
    assert!(body["message"].as_str().unwrap().contains("not_a_column"));
    assert_eq!(
        app.store
            .count(&app.config.collections.projects, &Filter::all())
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_malformed_json_body_uses_error_envelope() {
    let app = TestApp::new();
    let user = app.seed_user().await;

    let (status, body) = app
        .request("POST", "/api/projects", Some(json!({"name": "Demo"})), Some(user))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("INVALID"));
}

#[tokio::test]
async fn test_malformed_id_uses_error_envelope() {
    let app = TestApp::new();
    let user = app.seed_user().await;

    for (method, uri) in [
        ("DELETE", "/api/libraries/not-a-uuid"),
        ("PATCH", "/api/libraries/not-a-uuid/project-count"),
        ("DELETE", "/api/projects/not-a-uuid"),
        ("GET", "/api/companies/not-a-uuid"),
        ("POST", "/api/copies/libraries/not-a-uuid"),
    ] {
        let (status, body) = app.request(method, uri, None, Some(user)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(
            body,
            json!({"error": "INVALID", "message": "Invalid identifier: not-a-uuid"}),
            "{method} {uri}"
        );
    }
}

#[tokio::test]
async fn test_delete_library_twice() {
    let app = TestApp::new();
    let user = app.seed_user().await;
    let library = app.seed_library(None).await;
    let uri = format!("/api/libraries/{}", library.id);

    let (status, body) = app.request("DELETE", &uri, None, Some(user)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["uuid"], json!(library.id.to_string()));

    let (status, _) = app.request("DELETE", &uri, None, Some(user)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_company_endpoints_report_stats() {
    let app = TestApp::new();
    let user = app.seed_user().await;
    let company = app.seed_company().await;
    app.seed_library(Some(company)).await;
    app.seed_library(Some(company)).await;

    let (status, body) = app
        .request("GET", &format!("/api/companies/{company}"), None, Some(user))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], json!("Acme"));
    assert_eq!(body["data"]["stats"], json!({"projectCpt": 0, "libraryCpt": 2}));

    let (status, body) = app
        .request(
            "GET",
            &format!("/api/companies/{company}/statistics"),
            None,
            Some(user),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({"projectCpt": 0, "libraryCpt": 2}));

    let (status, _) = app
        .request(
            "GET",
            &format!("/api/companies/{}", CompanyId::new()),
            None,
            Some(user),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
