//! Common test utilities for OAI-PMH verb handling.
//!
//! Provides the reference repository configuration, an in-memory page
//! fixture, a flat-page provider with URL paths and per-page formats, a
//! provider that fails every call, and assertion macros for protocol errors.

use chrono::{DateTime, TimeZone, Utc};
use oai_pmh_server::config::{RepositoryConfig, RepositoryConfigBuilder};
use oai_pmh_server::metadata_format::{MetadataFormat, MetadataFormatRegistry};
use oai_pmh_server::provider::{RepositoryProvider, SetDescriptor};
use oai_pmh_server::providers::{InMemoryRepository, Page};
use oai_pmh_server::verb_handler::OaiVerbHandler;
use std::future::Future;

/// Assert that a response carries a specific protocol error code.
#[macro_export]
macro_rules! assert_oai_error {
    ($response:expr, $code:expr) => {
        match $response.error() {
            Some(error) => assert_eq!(
                error.code, $code,
                "Expected {:?}, got {:?} ({})",
                $code, error.code, error.message
            ),
            None => panic!("Expected error {:?}, but the request succeeded", $code),
        }
    };
    ($response:expr, $code:expr, $message:expr) => {
        match $response.error() {
            Some(error) => {
                assert_eq!(error.code, $code, "unexpected code: {}", error.message);
                assert_eq!(error.message, $message);
            }
            None => panic!("Expected error {:?}, but the request succeeded", $code),
        }
    };
}

/// Route `log` output through the test harness. Set `RUST_LOG=debug` to see it.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builder preloaded with the example deployment.
pub fn example_config_builder() -> RepositoryConfigBuilder {
    RepositoryConfig::builder()
        .repository_name("oai test project")
        .base_url("http://example.org")
        .endpoint_path("/oai/")
        .identifier_scheme("oai")
        .identifier_delimiter(":")
        .repository_identifier("example.org")
        .sample_identifier("oai:example.org:page/1")
        .admin("Archivist", "archivist@example.org")
        .admin("Webmaster", "webmaster@example.org")
}

pub fn example_config() -> RepositoryConfig {
    example_config_builder()
        .build()
        .expect("example config should be valid")
}

pub fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// The two sets the flat-page demo site exposes.
pub fn example_sets() -> Vec<SetDescriptor> {
    vec![
        SetDescriptor::new("Video", "Vidéo").with_description("Patate"),
        SetDescriptor::new("Video2", "Vidéo2").with_description("Patate2"),
    ]
}

/// Three pages with distinct datestamps and set membership.
pub async fn example_repository() -> InMemoryRepository {
    let repository = InMemoryRepository::with_sets(example_sets());
    repository
        .insert(
            Page::new(2, "About")
                .modified_at(timestamp(2024, 1, 10))
                .in_set("Video"),
        )
        .await;
    repository
        .insert(Page::new(7, "Contact").modified_at(timestamp(2024, 2, 20)))
        .await;
    repository
        .insert(
            Page::new(3, "History")
                .modified_at(timestamp(2024, 3, 30))
                .in_set("Video")
                .in_set("Video2"),
        )
        .await;
    repository
}

pub async fn example_handler() -> OaiVerbHandler<InMemoryRepository> {
    init_logging();
    OaiVerbHandler::new(example_repository().await, example_config())
        .expect("handler should build")
}

pub fn empty_handler() -> OaiVerbHandler<InMemoryRepository> {
    init_logging();
    OaiVerbHandler::new(InMemoryRepository::new(), example_config())
        .expect("handler should build")
}

/// Provider whose backing store is unreachable.
#[derive(Debug, Default)]
pub struct UnavailableRepository;

#[derive(Debug, thiserror::Error)]
#[error("backing store unavailable")]
pub struct Unavailable;

impl RepositoryProvider for UnavailableRepository {
    type Item = Page;
    type Error = Unavailable;

    fn items(&self) -> impl Future<Output = Result<Vec<Page>, Unavailable>> + Send {
        async { Err(Unavailable) }
    }

    fn item(&self, _local_path: &str) -> impl Future<Output = Result<Page, Unavailable>> + Send {
        async { Err(Unavailable) }
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

    fn sets_list(&self) -> impl Future<Output = Result<Vec<SetDescriptor>, Unavailable>> + Send {
        async { Err(Unavailable) }
    }
}

/// A flat page addressed by its URL, e.g. `/about/`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatPage {
    pub url: String,
    pub title: String,
    pub last_modified: DateTime<Utc>,
    /// Metadata prefixes this page can be disseminated in.
    pub formats: Vec<String>,
}

impl FlatPage {
    pub fn new(url: &str, title: &str, formats: &[&str]) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
            last_modified: timestamp(2024, 5, 1),
            formats: formats.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("no flat page at '{0}'")]
pub struct NoSuchPage(String);

/// Provider whose local paths are page URLs and whose pages each offer
/// their own subset of the registered formats.
#[derive(Debug, Clone, Default)]
pub struct FlatPageRepository {
    pages: Vec<FlatPage>,
}

impl FlatPageRepository {
    pub fn new(pages: Vec<FlatPage>) -> Self {
        Self { pages }
    }
}

impl RepositoryProvider for FlatPageRepository {
    type Item = FlatPage;
    type Error = NoSuchPage;

    fn items(&self) -> impl Future<Output = Result<Vec<FlatPage>, NoSuchPage>> + Send {
        let pages = self.pages.clone();
        async move { Ok(pages) }
    }

    fn item(&self, local_path: &str) -> impl Future<Output = Result<FlatPage, NoSuchPage>> + Send {
        let found = self
            .pages
            .iter()
            .find(|p| p.url == local_path)
            .cloned()
            .ok_or_else(|| NoSuchPage(local_path.to_string()));
        async move { found }
    }

    fn local_path(&self, item: &FlatPage) -> String {
        item.url.clone()
    }

    fn last_modified(&self, item: &FlatPage) -> DateTime<Utc> {
        item.last_modified
    }

    fn sets(&self, _item: &FlatPage) -> Vec<String> {
        Vec::new()
    }

    fn sets_list(&self) -> impl Future<Output = Result<Vec<SetDescriptor>, NoSuchPage>> + Send {
        async { Ok(Vec::new()) }
    }

    fn metadata_formats(
        &self,
        item: &FlatPage,
        registry: &MetadataFormatRegistry,
    ) -> Vec<MetadataFormat> {
        registry
            .formats()
            .iter()
            .filter(|f| item.formats.contains(&f.metadata_prefix))
            .cloned()
            .collect()
    }
}

pub fn marc21() -> MetadataFormat {
    MetadataFormat::new(
        "marc21",
        "http://www.loc.gov/standards/marcxml/schema/MARC21slim.xsd",
        "http://www.loc.gov/MARC21/slim",
    )
}

/// `/about/` offers oai_dc and marc21, `/contact/` only oai_dc and
/// `/drafts/` nothing at all.
pub fn flat_page_handler() -> OaiVerbHandler<FlatPageRepository> {
    init_logging();
    let repository = FlatPageRepository::new(vec![
        FlatPage::new("/about/", "About", &["oai_dc", "marc21"]),
        FlatPage::new("/contact/", "Contact", &["oai_dc"]),
        FlatPage::new("/drafts/", "Drafts", &[]),
    ]);
    OaiVerbHandler::new(repository, example_config())
        .expect("handler should build")
        .with_formats(MetadataFormatRegistry::default().with_format(marc21()))
}
