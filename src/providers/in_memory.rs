//! In-memory repository provider.
//!
//! Stores pages in insertion order behind an async `RwLock`, which makes it
//! suitable for tests, demos and small static collections. Each page is
//! exposed under the local path `page/<id>`.
//!
//! # Usage
//!
//! ```rust
//! use oai_pmh_server::providers::{InMemoryRepository, Page};
//! use oai_pmh_server::provider::SetDescriptor;
//!
//! # async fn example() {
//! let repository = InMemoryRepository::with_sets(vec![
//!     SetDescriptor::new("Video", "Vidéo").with_description("Patate"),
//! ]);
//! repository.insert(Page::new(2, "About")).await;
//! assert_eq!(repository.len().await, 1);
//! # }
//! ```

use crate::provider::{RepositoryProvider, SetDescriptor};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

const PAGE_PREFIX: &str = "page/";

/// Errors returned by [`InMemoryRepository`] lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InMemoryError {
    #[error("no page stored under '{local_path}'")]
    NotFound { local_path: String },

    #[error("'{local_path}' is not a page path")]
    MalformedKey { local_path: String },
}

/// A stored page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub last_modified: DateTime<Utc>,
    pub sets: Vec<String>,
}

impl Page {
    /// Create a page last modified now, with no content and no sets.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: String::new(),
            last_modified: Utc::now(),
            sets: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn modified_at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.last_modified = timestamp;
        self
    }

    pub fn in_set(mut self, spec: impl Into<String>) -> Self {
        self.sets.push(spec.into());
        self
    }

    pub fn local_path(&self) -> String {
        format!("{}{}", PAGE_PREFIX, self.id)
    }
}

/// Thread-safe in-memory page store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    pages: Arc<RwLock<Vec<Page>>>,
    sets: Arc<RwLock<Vec<SetDescriptor>>>,
}

impl InMemoryRepository {
    /// Create an empty repository with no set hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty repository with the given set catalog.
    pub fn with_sets(sets: Vec<SetDescriptor>) -> Self {
        Self {
            pages: Arc::new(RwLock::new(Vec::new())),
            sets: Arc::new(RwLock::new(sets)),
        }
    }

    /// Store a page. A page with the same id is replaced in place.
    pub async fn insert(&self, page: Page) {
        let mut pages = self.pages.write().await;
        match pages.iter_mut().find(|p| p.id == page.id) {
            Some(existing) => *existing = page,
            None => pages.push(page),
        }
    }

    /// Remove a page, returning whether it existed.
    pub async fn remove(&self, id: u64) -> bool {
        let mut pages = self.pages.write().await;
        let before = pages.len();
        pages.retain(|p| p.id != id);
        pages.len() != before
    }

    pub async fn add_set(&self, set: SetDescriptor) {
        self.sets.write().await.push(set);
    }

    pub async fn len(&self) -> usize {
        self.pages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pages.read().await.is_empty()
    }
}

fn parse_page_id(local_path: &str) -> Result<u64, InMemoryError> {
    local_path
        .strip_prefix(PAGE_PREFIX)
        .and_then(|id| id.parse::<u64>().ok())
        .ok_or_else(|| InMemoryError::MalformedKey {
            local_path: local_path.to_string(),
        })
}

impl RepositoryProvider for InMemoryRepository {
    type Item = Page;
    type Error = InMemoryError;

    fn items(&self) -> impl Future<Output = Result<Vec<Page>, InMemoryError>> + Send {
        async move { Ok(self.pages.read().await.clone()) }
    }

    fn item(&self, local_path: &str) -> impl Future<Output = Result<Page, InMemoryError>> + Send {
        async move {
            let id = parse_page_id(local_path)?;
            self.pages
                .read()
                .await
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| InMemoryError::NotFound {
                    local_path: local_path.to_string(),
                })
        }
    }

    fn local_path(&self, item: &Page) -> String {
        item.local_path()
    }

    fn last_modified(&self, item: &Page) -> DateTime<Utc> {
        item.last_modified
    }

    fn sets(&self, item: &Page) -> Vec<String> {
        item.sets.clone()
    }

    fn sets_list(&self) -> impl Future<Output = Result<Vec<SetDescriptor>, InMemoryError>> + Send {
        async move { Ok(self.sets.read().await.clone()) }
    }
}
