//! Tests for response parsing and connection establishment

use super::*;
use crate::config::SolrConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_parse_select_response() {
    let body = json!({
        "responseHeader": {"status": 0, "QTime": 3},
        "response": {
            "numFound": 5,
            "start": 2,
            "docs": [
                {"id": "a", "price": 9.5},
                {"id": "b", "price": 1.0}
            ]
        }
    });

    let response = SolrResponse::from_body(body).unwrap();
    assert_eq!(response.num_found, 5);
    assert_eq!(response.start, 2);
    assert_eq!(response.docs.len(), 2);
    assert_eq!(response.docs[0]["id"], json!("a"));
}

#[test]
fn test_parse_error_body() {
    let body = json!({
        "error": {"msg": "undefined field foo", "code": 400}
    });

    let err = SolrResponse::from_body(body).unwrap_err();
    match err {
        Error::Solr { code, message } => {
            assert_eq!(code, 400);
            assert_eq!(message, "undefined field foo");
        }
        other => panic!("expected Solr error, got {other:?}"),
    }
}

#[test]
fn test_parse_missing_response_object() {
    let err = SolrResponse::from_body(json!({"responseHeader": {}})).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_parse_non_object_doc() {
    let body = json!({
        "response": {"numFound": 1, "start": 0, "docs": [42]}
    });
    let err = SolrResponse::from_body(body).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[test]
fn test_unwrap_singletons() {
    let doc = json!({
        "id": "a",
        "tags": ["only"],
        "scores": [1, 2, 3],
        "empty": [],
        "nested": {"inner": ["x"]}
    });
    let serde_json::Value::Object(doc) = doc else {
        unreachable!()
    };

    let out = unwrap_singletons(doc);
    assert_eq!(out["id"], json!("a"));
    // One-element list becomes the bare scalar
    assert_eq!(out["tags"], json!("only"));
    // Multi-element and empty lists are preserved
    assert_eq!(out["scores"], json!([1, 2, 3]));
    assert_eq!(out["empty"], json!([]));
    // Only top-level fields are normalized
    assert_eq!(out["nested"], json!({"inner": ["x"]}));
}

#[tokio::test]
async fn test_connect_direct_endpoint() {
    let config = SolrConfig::builder("http://localhost:8983/solr/", "products").build();
    let client = SolrClient::connect(&config).await.unwrap();
    assert_eq!(
        client.endpoint().as_str(),
        "http://localhost:8983/solr/products/select"
    );
}

#[tokio::test]
async fn test_connect_cloud_uses_discovery() {
    struct OneNode;

    #[async_trait]
    impl ClusterDiscovery for OneNode {
        async fn live_nodes(&self, ensemble: &[String], _collection: &str) -> Result<Vec<String>> {
            assert_eq!(ensemble.len(), 2);
            Ok(vec!["http://node-1:8983/solr".to_string()])
        }
    }

    let config = SolrConfig::builder("zk-1:2181/solr,zk-2:2181/solr", "ignored")
        .zoo_collection("catalog")
        .build();
    let client = SolrClient::connect_with(&config, &OneNode).await.unwrap();
    assert_eq!(
        client.endpoint().as_str(),
        "http://node-1:8983/solr/catalog/select"
    );
}

#[tokio::test]
async fn test_connect_cloud_static_fallback() {
    let config = SolrConfig::builder("http://node-a:8983/solr,http://node-b:8983/solr", "c")
        .zoo_collection("catalog")
        .build();
    let client = SolrClient::connect(&config).await.unwrap();
    assert_eq!(
        client.endpoint().as_str(),
        "http://node-a:8983/solr/catalog/select"
    );
}

#[tokio::test]
async fn test_connect_cloud_empty_ensemble() {
    let config = SolrConfig::builder("", "c").zoo_collection("catalog").build();
    let err = SolrClient::connect(&config).await.unwrap_err();
    assert!(matches!(err, Error::Discovery { .. }));
}
