//! Unit tests for service descriptions
//!
//! Covers JSON decoding, operation lookup and catalog behavior.
//! Directory loading is exercised in the integration tests.

#![allow(clippy::unwrap_used)]

use crate::services::{
    OperationModel, ProviderError, ServiceCatalog, ServiceModel, ServiceModelProvider, ShapeType,
};

const S3_JSON: &str = r#"
{
  "metadata": { "apiVersion": "2006-03-01", "endpointPrefix": "s3", "protocol": "rest-xml" },
  "operations": {
    "ListObjects": {
      "documentation": "<p>Returns some or all of the objects in a bucket.</p>",
      "httpMethod": "GET",
      "requestUri": "/{Bucket}",
      "input": {
        "type": "structure",
        "required": ["Bucket"],
        "members": {
          "Bucket": { "type": "string" },
          "MaxKeys": { "type": "integer" }
        }
      }
    },
    "GetObject": { "name": "GetObject" }
  }
}
"#;

#[test]
fn decodes_operations_and_fills_names() {
    let model = ServiceModel::from_json_str("s3", S3_JSON).unwrap();

    assert_eq!(model.service_name, "s3");
    assert_eq!(model.metadata.api_version.as_deref(), Some("2006-03-01"));
    assert_eq!(model.operation_names(), vec!["GetObject", "ListObjects"]);

    let list_objects = model.operation_model("ListObjects").unwrap();
    assert_eq!(list_objects.name, "ListObjects");
    assert_eq!(list_objects.http_method.as_deref(), Some("GET"));
    assert_eq!(list_objects.request_uri.as_deref(), Some("/{Bucket}"));

    let input = list_objects.input.as_ref().unwrap();
    assert_eq!(input.shape_type, ShapeType::Structure);
    assert_eq!(input.required, vec!["Bucket"]);
    assert_eq!(input.members["MaxKeys"].shape_type, ShapeType::Integer);
}

#[test]
fn unknown_operation_is_an_error() {
    let model = ServiceModel::from_json_str("s3", S3_JSON).unwrap();

    let err = model.operation_model("DeleteEverything").unwrap_err();
    assert!(matches!(
        err,
        ProviderError::UnknownOperation { ref operation, .. } if operation == "DeleteEverything"
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = ServiceModel::from_json_str("broken", "{ not json").unwrap_err();
    assert!(matches!(err, ProviderError::Parse { .. }));
}

#[test]
fn catalog_serves_inserted_models() {
    let mut catalog = ServiceCatalog::new();
    catalog.insert(ServiceModel::new("ec2").with_operation(OperationModel {
        name: "DescribeInstances".to_string(),
        ..OperationModel::default()
    }));

    let model = catalog.get_service_model("ec2").unwrap();
    assert!(model.operation_model("DescribeInstances").is_ok());
    assert_eq!(catalog.service_names(), vec!["ec2"]);
}

#[test]
fn catalog_reports_unknown_service() {
    let catalog = ServiceCatalog::new();

    let err = catalog.get_service_model("nope").unwrap_err();
    assert!(matches!(err, ProviderError::UnknownService { .. }));
}
