//! Repository provider trait for supplying harvestable items.
//!
//! This module defines the trait that users implement to expose a collection
//! through OAI-PMH. The verb handler never touches storage directly; all item
//! enumeration, lookup and set membership flows through this trait.
//!
//! Implementations must be safe for concurrent reads: the handler shares one
//! provider across all in-flight requests without locking. Any blocking I/O
//! and its timeouts are the provider's responsibility.

use crate::metadata_format::{MetadataFormat, MetadataFormatRegistry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// A named grouping of items used for selective harvesting.
///
/// `spec` is unique within one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetDescriptor {
    pub spec: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SetDescriptor {
    pub fn new(spec: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            spec: spec.into(),
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Source of items for the verb handler.
///
/// `Item` is an opaque handle owned by the provider; the handler only borrows
/// it for the duration of one response build and resolves it through
/// [`local_path`](Self::local_path), [`last_modified`](Self::last_modified)
/// and [`sets`](Self::sets).
///
/// # Example Implementation
///
/// ```rust
/// use oai_pmh_server::provider::{RepositoryProvider, SetDescriptor};
/// use chrono::{DateTime, Utc};
/// use std::future::Future;
///
/// struct Article {
///     slug: String,
///     updated: DateTime<Utc>,
/// }
///
/// struct Articles {
///     articles: Vec<Article>,
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("no article at '{0}'")]
/// struct Missing(String);
///
/// impl RepositoryProvider for Articles {
///     type Item = Article;
///     type Error = Missing;
///
///     fn items(&self) -> impl Future<Output = Result<Vec<Article>, Missing>> + Send {
///         let items = self
///             .articles
///             .iter()
///             .map(|a| Article { slug: a.slug.clone(), updated: a.updated })
///             .collect();
///         async move { Ok(items) }
///     }
///
///     fn item(&self, local_path: &str) -> impl Future<Output = Result<Article, Missing>> + Send {
///         let found = self
///             .articles
///             .iter()
///             .find(|a| format!("articles/{}", a.slug) == local_path)
///             .map(|a| Article { slug: a.slug.clone(), updated: a.updated })
///             .ok_or_else(|| Missing(local_path.to_string()));
///         async move { found }
///     }
///
///     fn local_path(&self, item: &Article) -> String {
///         format!("articles/{}", item.slug)
///     }
///
///     fn last_modified(&self, item: &Article) -> DateTime<Utc> {
///         item.updated
///     }
///
///     fn sets(&self, _item: &Article) -> Vec<String> {
///         Vec::new()
///     }
///
///     fn sets_list(&self) -> impl Future<Output = Result<Vec<SetDescriptor>, Missing>> + Send {
///         async { Ok(Vec::new()) }
///     }
/// }
/// ```
pub trait RepositoryProvider {
    type Item: Send + Sync;
    type Error: std::error::Error + Send + Sync + 'static;

    /// All harvestable items, in a stable order.
    ///
    /// The order is preserved end-to-end in list responses.
    fn items(&self) -> impl Future<Output = Result<Vec<Self::Item>, Self::Error>> + Send;

    /// Look up one item by the local path decoded from its OAI identifier.
    ///
    /// Fails when the path is unknown or malformed.
    fn item(
        &self,
        local_path: &str,
    ) -> impl Future<Output = Result<Self::Item, Self::Error>> + Send;

    /// Provider-specific local path, e.g. `page/2`.
    fn local_path(&self, item: &Self::Item) -> String;

    fn last_modified(&self, item: &Self::Item) -> DateTime<Utc>;

    /// Set specs the item belongs to.
    fn sets(&self, item: &Self::Item) -> Vec<String>;

    /// The full set catalog.
    fn sets_list(&self) -> impl Future<Output = Result<Vec<SetDescriptor>, Self::Error>> + Send;

    /// Formats available for one item. Defaults to every registered format.
    fn metadata_formats(
        &self,
        _item: &Self::Item,
        registry: &MetadataFormatRegistry,
    ) -> Vec<MetadataFormat> {
        registry.formats().to_vec()
    }
}
