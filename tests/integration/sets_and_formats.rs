//! ListSets and ListMetadataFormats.

use crate::common::{empty_handler, example_config, example_config_builder, example_handler, example_sets};
use oai_pmh_server::providers::{InMemoryRepository, Page};
use oai_pmh_server::verb_handler::{ListMetadataFormatsPayload, ListSetsPayload, messages};
use oai_pmh_server::{
    MetadataFormat, MetadataFormatRegistry, OaiErrorCode, OaiRequest, OaiVerbHandler,
    ResponseBody, SetDescriptor, SetHierarchyPolicy,
};

fn list_sets(body: ResponseBody<Page>) -> ListSetsPayload {
    match body {
        ResponseBody::ListSets(payload) => payload,
        other => panic!("expected a ListSets body, got {:?}", other),
    }
}

fn list_formats(body: ResponseBody<Page>) -> ListMetadataFormatsPayload {
    match body {
        ResponseBody::ListMetadataFormats(payload) => payload,
        other => panic!("expected a ListMetadataFormats body, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_sets_returns_catalog() {
    let handler = example_handler().await;
    let payload = list_sets(handler.handle(OaiRequest::list_sets()).await.body);

    assert_eq!(payload.sets, example_sets());
    assert_eq!(payload.sets[0].spec, "Video");
    assert_eq!(payload.sets[0].name, "Vidéo");
    assert_eq!(payload.sets[0].description.as_deref(), Some("Patate"));
}

#[tokio::test]
async fn test_empty_catalog_default_policy() {
    let handler = empty_handler();
    let response = handler.handle(OaiRequest::list_sets()).await;
    assert!(list_sets(response.body).sets.is_empty());
}

#[tokio::test]
async fn test_empty_catalog_no_set_hierarchy_policy() {
    let config = example_config_builder()
        .empty_set_policy(SetHierarchyPolicy::NoSetHierarchy)
        .build()
        .unwrap();
    let handler = OaiVerbHandler::new(InMemoryRepository::new(), config).unwrap();

    let response = handler.handle(OaiRequest::list_sets()).await;
    assert_oai_error!(
        response,
        OaiErrorCode::NoSetHierarchy,
        messages::NO_SET_HIERARCHY
    );
}

#[tokio::test]
async fn test_duplicate_set_specs_are_dropped() {
    let repository = InMemoryRepository::with_sets(example_sets());
    repository
        .add_set(SetDescriptor::new("Video", "Duplicate"))
        .await;
    let handler = OaiVerbHandler::new(repository, example_config()).unwrap();

    let payload = list_sets(handler.handle(OaiRequest::list_sets()).await.body);
    assert_eq!(payload.sets.len(), 2);
    assert_eq!(payload.sets[0].name, "Vidéo");
}

#[tokio::test]
async fn test_repository_formats() {
    let handler = example_handler().await;
    let payload = list_formats(handler.handle(OaiRequest::list_metadata_formats()).await.body);

    assert!(payload.identifier.is_none());
    assert_eq!(payload.formats, vec![MetadataFormat::oai_dc()]);
}

#[tokio::test]
async fn test_item_formats() {
    let handler = example_handler().await;
    let payload = list_formats(
        handler
            .handle(
                OaiRequest::list_metadata_formats()
                    .with_param("identifier", "oai:example.org:page/3"),
            )
            .await
            .body,
    );

    assert_eq!(payload.identifier.as_deref(), Some("oai:example.org:page/3"));
    assert_eq!(payload.formats[0].metadata_prefix, "oai_dc");
}

#[tokio::test]
async fn test_item_formats_unknown_identifier() {
    let handler = example_handler().await;
    let response = handler
        .handle(
            OaiRequest::list_metadata_formats().with_param("identifier", "oai:example.org:page/404"),
        )
        .await;
    assert_oai_error!(response, OaiErrorCode::IdDoesNotExist);
}

#[tokio::test]
async fn test_no_metadata_formats() {
    let handler = OaiVerbHandler::new(InMemoryRepository::new(), example_config())
        .unwrap()
        .with_formats(MetadataFormatRegistry::empty());

    let response = handler.handle(OaiRequest::list_metadata_formats()).await;
    assert_oai_error!(
        response,
        OaiErrorCode::NoMetadataFormats,
        messages::NO_METADATA_FORMATS
    );
}

mod per_item_formats {
    use super::*;
    use crate::common::{marc21, flat_page_handler};

    #[tokio::test]
    async fn test_item_with_several_formats() {
        let handler = flat_page_handler();
        let response = handler
            .handle(
                OaiRequest::list_metadata_formats().with_param("identifier", "oai:example.org:/about/"),
            )
            .await;
        match response.body {
            ResponseBody::ListMetadataFormats(payload) => {
                assert_eq!(payload.formats, vec![MetadataFormat::oai_dc(), marc21()]);
            }
            other => panic!("expected a ListMetadataFormats body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_item_without_formats() {
        let handler = flat_page_handler();
        let response = handler
            .handle(
                OaiRequest::list_metadata_formats().with_param("identifier", "oai:example.org:/drafts/"),
            )
            .await;
        assert_oai_error!(
            response,
            OaiErrorCode::NoMetadataFormats,
            messages::NO_METADATA_FORMATS
        );
    }

    #[tokio::test]
    async fn test_repository_formats_include_registered() {
        let handler = flat_page_handler();
        let response = handler.handle(OaiRequest::list_metadata_formats()).await;
        match response.body {
            ResponseBody::ListMetadataFormats(payload) => assert_eq!(payload.formats.len(), 2),
            other => panic!("expected a ListMetadataFormats body, got {:?}", other),
        }
    }
}
