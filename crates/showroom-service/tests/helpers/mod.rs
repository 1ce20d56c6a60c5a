//! Shared test helpers for service integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;

use showroom_core::config::CollectionsConfig;
use showroom_core::error::AppError;
use showroom_core::result::AppResult;
use showroom_core::traits::store::{DataStore, Record};
use showroom_core::types::filter::Filter;
use showroom_core::types::{CompanyId, LibraryId, UserId};
use showroom_database::{MemoryStore, Repositories};
use showroom_entity::library::{CreateLibrary, Library};
use showroom_entity::project::{CreateProject, Project};
use showroom_entity::share_code::{CreateShareCode, ShareCode};
use showroom_service::{RequestContext, Services};

/// Store operations a fault can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Query,
    Insert,
    Update,
    Delete,
    Count,
}

#[derive(Debug)]
struct Fault {
    op: Op,
    collection: String,
    /// Calls allowed through before the fault starts firing.
    passes: usize,
}

/// A [`MemoryStore`] wrapper that fails chosen calls and journals every
/// call it sees.
#[derive(Debug, Default)]
pub struct FaultyStore {
    inner: MemoryStore,
    faults: Mutex<Vec<Fault>>,
    journal: Mutex<Vec<(Op, String)>>,
}

impl FaultyStore {
    /// Fail every `op` on `collection` once `passes` calls have succeeded.
    pub fn fail_after(&self, op: Op, collection: &str, passes: usize) {
        self.faults.lock().unwrap().push(Fault {
            op,
            collection: collection.to_string(),
            passes,
        });
    }

    /// Fail every `op` on `collection`.
    pub fn fail(&self, op: Op, collection: &str) {
        self.fail_after(op, collection, 0);
    }

    /// Remove all faults.
    pub fn heal(&self) {
        self.faults.lock().unwrap().clear();
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<(Op, String)> {
        self.journal.lock().unwrap().clone()
    }

    /// Forget the call journal.
    pub fn clear_calls(&self) {
        self.journal.lock().unwrap().clear();
    }

    /// The wrapped store, bypassing faults and the journal.
    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    fn check(&self, op: Op, collection: &str) -> AppResult<()> {
        self.journal
            .lock()
            .unwrap()
            .push((op, collection.to_string()));

        let mut faults = self.faults.lock().unwrap();
        for fault in faults
            .iter_mut()
            .filter(|f| f.op == op && f.collection == collection)
        {
            if fault.passes == 0 {
                return Err(AppError::upstream(format!(
                    "injected {op:?} failure on {collection}"
                )));
            }
            fault.passes -= 1;
        }
        Ok(())
    }
}

#[async_trait]
impl DataStore for FaultyStore {
    async fn query(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Record>> {
        self.check(Op::Query, collection)?;
        self.inner.query(collection, filter).await
    }

    async fn insert(&self, collection: &str, record: Record) -> AppResult<Record> {
        self.check(Op::Insert, collection)?;
        self.inner.insert(collection, record).await
    }

    async fn update(
        &self,
        collection: &str,
        filter: &Filter,
        patch: Record,
    ) -> AppResult<Vec<Record>> {
        self.check(Op::Update, collection)?;
        self.inner.update(collection, filter, patch).await
    }

    async fn delete(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Record>> {
        self.check(Op::Delete, collection)?;
        self.inner.delete(collection, filter).await
    }

    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        self.check(Op::Count, collection)?;
        self.inner.count(collection, filter).await
    }
}

/// Services wired over a fault-injecting in-memory store.
pub struct TestApp {
    pub store: Arc<FaultyStore>,
    pub repos: Repositories,
    pub services: Services,
    pub collections: CollectionsConfig,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(FaultyStore::default());
        let collections = CollectionsConfig::default();
        let repos = Repositories::new(store.clone(), &collections);
        let services = Services::new(&repos);
        Self {
            store,
            repos,
            services,
            collections,
        }
    }

    /// Insert a user row and return a request context acting as that user.
    pub async fn seed_user(&self, name: &str) -> RequestContext {
        let id = UserId::new();
        let row = json!({
            "uuid": id,
            "name": name,
            "lastName": "Tester",
            "email": format!("{name}@example.com"),
            "core_company": null,
        });
        self.store
            .inner()
            .insert(&self.collections.users, object(row))
            .await
            .unwrap();
        RequestContext::new(id)
    }

    /// Insert a company row.
    pub async fn seed_company(&self, name: &str) -> CompanyId {
        let id = CompanyId::new();
        let row = json!({
            "uuid": id,
            "name": name,
            "code": "JOIN42",
            "uuid_user": null,
            "logo_url": null,
        });
        self.store
            .inner()
            .insert(&self.collections.companies, object(row))
            .await
            .unwrap();
        id
    }

    /// Create a library with no projects.
    pub async fn seed_library(&self, company: Option<CompanyId>, name: &str) -> Library {
        self.repos
            .libraries
            .create(&CreateLibrary {
                name: name.to_string(),
                description: Some(format!("{name} description")),
                core_company: company,
                belongs_to: None,
                is_personal: false,
                is_copy: false,
                project_count: 0,
                logo_url: Some(format!("https://cdn.example.com/{name}.png")),
                banner_url: None,
                created_by: None,
            })
            .await
            .unwrap()
    }

    /// Create `n` projects under `library` and recount it.
    pub async fn seed_projects(&self, library: &Library, n: usize) -> Vec<Project> {
        let mut projects = Vec::with_capacity(n);
        for i in 0..n {
            let mut extra = serde_json::Map::new();
            extra.insert("position".to_string(), json!(i));
            let project = self
                .repos
                .projects
                .create(&CreateProject {
                    core_library: library.id,
                    core_company: library.core_company,
                    name: format!("Project {i}"),
                    description: None,
                    logo_url: None,
                    illustrations: Some(vec![format!("illustration-{i}.png")]),
                    apk_url: Some(format!("https://cdn.example.com/p{i}.apk")),
                    is_copy: false,
                    is_personal: false,
                    created_by: None,
                    extra,
                })
                .await
                .unwrap();
            projects.push(project);
        }
        self.services
            .counter
            .recount_library_projects(library.id)
            .await
            .unwrap();
        projects
    }

    /// Insert a share code with a fixed text and expiry.
    pub async fn seed_code(
        &self,
        library_id: LibraryId,
        code: &str,
        ended_at: DateTime<Utc>,
    ) -> ShareCode {
        self.repos
            .share_codes
            .create(&CreateShareCode {
                core_library: library_id,
                code: code.to_string(),
                ended_at,
            })
            .await
            .unwrap()
    }

    pub async fn library(&self, id: LibraryId) -> Option<Library> {
        self.repos.libraries.find_by_id(id).await.unwrap()
    }

    pub async fn projects_of(&self, id: LibraryId) -> Vec<Project> {
        self.repos.projects.find_by_library(id).await.unwrap()
    }

    /// Row count of a collection, bypassing faults.
    pub async fn rows(&self, collection: &str) -> u64 {
        self.store
            .inner()
            .count(collection, &Filter::all())
            .await
            .unwrap()
    }
}

fn object(value: serde_json::Value) -> Record {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("expected a JSON object"),
    }
}
