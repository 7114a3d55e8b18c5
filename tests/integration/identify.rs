//! Identify echoes configuration and nothing else.

use crate::common::{UnavailableRepository, example_config, example_config_builder, example_handler};
use oai_pmh_server::verb_handler::{IdentifyPayload, PROTOCOL_VERSION};
use oai_pmh_server::{
    DeletedRecordPolicy, Granularity, OaiRequest, OaiVerbHandler, RepositoryConfig, ResponseBody,
};
use chrono::{TimeZone, Utc};

fn identify_payload<I>(body: ResponseBody<I>) -> IdentifyPayload {
    match body {
        ResponseBody::Identify(payload) => payload,
        _ => panic!("expected an Identify body"),
    }
}

#[tokio::test]
async fn test_identify_reflects_configuration() {
    let handler = example_handler().await;
    let config = example_config();

    let payload = identify_payload(handler.handle(OaiRequest::identify()).await.body);

    assert_eq!(payload.repository_name, config.repository_name);
    assert_eq!(payload.base_url, "http://example.org/oai/");
    assert_eq!(payload.protocol_version, PROTOCOL_VERSION);
    assert_eq!(
        payload.admin_emails,
        vec!["archivist@example.org", "webmaster@example.org"]
    );
    assert_eq!(payload.earliest_datestamp, "1990-02-01T12:00:00Z");
    assert_eq!(payload.deleted_record, DeletedRecordPolicy::No);
    assert_eq!(payload.granularity, Granularity::Seconds);
    assert_eq!(payload.compression, config.compression);
    assert_eq!(payload.identifier_scheme, "oai");
    assert_eq!(payload.repository_identifier, "example.org");
    assert_eq!(payload.identifier_delimiter, ":");
    assert_eq!(payload.sample_identifier, "oai:example.org:page/1");
}

#[tokio::test]
async fn test_identify_never_touches_the_provider() {
    let handler = OaiVerbHandler::new(UnavailableRepository, example_config()).unwrap();
    let response = handler.handle(OaiRequest::identify()).await;
    assert!(!response.is_error());
}

#[tokio::test]
async fn test_identify_formats_datestamp_by_granularity() {
    let config = example_config_builder()
        .granularity(Granularity::Day)
        .earliest_datestamp(Utc.with_ymd_and_hms(2001, 5, 17, 8, 30, 0).unwrap())
        .deleted_record(DeletedRecordPolicy::Persistent)
        .build()
        .unwrap();
    let handler = OaiVerbHandler::new(UnavailableRepository, config).unwrap();

    let payload = identify_payload(handler.handle(OaiRequest::identify()).await.body);
    assert_eq!(payload.earliest_datestamp, "2001-05-17");
    assert_eq!(payload.granularity, Granularity::Day);
    assert_eq!(payload.deleted_record, DeletedRecordPolicy::Persistent);
}

#[tokio::test]
async fn test_identify_from_json_config() {
    let config = RepositoryConfig::from_json_str(
        r#"{
            "repository_name": "Flat pages",
            "base_url": "https://pages.example.net",
            "repository_identifier": "pages.example.net",
            "admins": [{ "name": "Ops", "email": "ops@example.net" }]
        }"#,
    )
    .unwrap();
    let handler = OaiVerbHandler::new(UnavailableRepository, config).unwrap();

    let payload = identify_payload(handler.handle(OaiRequest::identify()).await.body);
    assert_eq!(payload.repository_name, "Flat pages");
    assert_eq!(payload.base_url, "https://pages.example.net/oai/");
    assert_eq!(payload.admin_emails, vec!["ops@example.net"]);
}

#[test]
fn test_invalid_config_is_rejected_at_construction() {
    let config = RepositoryConfig {
        repository_identifier: String::new(),
        ..example_config()
    };
    assert!(OaiVerbHandler::new(UnavailableRepository, config).is_err());
}
