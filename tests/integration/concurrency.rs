//! Concurrent requests against one shared handler.

use crate::common::example_handler;
use futures::future::join_all;
use oai_pmh_server::{OaiRequest, ResponseBody};
use std::sync::Arc;

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let handler = example_handler().await;

    let requests = (0..50).map(|i| {
        let request = match i % 4 {
            0 => OaiRequest::identify(),
            1 => OaiRequest::get_record("oai:example.org:page/7"),
            2 => OaiRequest::list_identifiers(),
            _ => OaiRequest::new("Bogus"),
        };
        handler.handle(request.with_request_id(format!("req-{}", i)))
    });
    let responses = join_all(requests).await;

    for (i, response) in responses.iter().enumerate() {
        match i % 4 {
            0 => assert!(matches!(response.body, ResponseBody::Identify(_))),
            1 => assert!(matches!(response.body, ResponseBody::GetRecord(_))),
            2 => assert!(matches!(response.body, ResponseBody::ListIdentifiers(_))),
            _ => assert!(response.is_error()),
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_handler_shared_across_tasks() {
    let handler = Arc::new(example_handler().await);

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let handler = Arc::clone(&handler);
            tokio::spawn(async move {
                handler
                    .handle(OaiRequest::get_record("oai:example.org:page/3"))
                    .await
            })
        })
        .collect();

    for task in tasks {
        let response = task.await.expect("task panicked");
        match response.body {
            ResponseBody::GetRecord(payload) => assert_eq!(payload.record.item.id, 3),
            other => panic!("unexpected body {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_writes_are_visible_to_later_requests() {
    let handler = example_handler().await;
    handler
        .provider()
        .insert(oai_pmh_server::providers::Page::new(11, "Late arrival"))
        .await;

    let response = handler
        .handle(OaiRequest::get_record("oai:example.org:page/11"))
        .await;
    assert!(!response.is_error());
}
