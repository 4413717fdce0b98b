//! Unit tests for the docs module
//!
//! Tests page selection for typed command text and text cleanup helpers.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use crate::{
    docs::{DocsGetter, first_line, strip_html_tags},
    registry::CommandRegistry,
};

const COMMAND_TABLE: &str = r#"
[commands.ec2]
documentation = "<p>Amazon Elastic Compute Cloud.</p>"

[commands.ec2.commands.describe-instances]
documentation = "<p>Describes the specified instances.</p>"

[commands.ec2.commands.describe-instances.args.instance-ids]
documentation = "<p>The instance IDs.</p>\n<p>Default: all instances.</p>"

[commands.ec2.commands.describe-instances.args.dry-run]

[commands.s3api]
documentation = "Low level S3 operations."
"#;

fn getter() -> DocsGetter {
    let registry = CommandRegistry::from_toml_str(COMMAND_TABLE).unwrap();
    DocsGetter::new(Arc::new(registry))
}

#[test]
fn strips_tags_but_keeps_content() {
    assert_eq!(strip_html_tags("<p>Hello <b>world</b></p>"), "Hello world");
    assert_eq!(strip_html_tags("no tags"), "no tags");
    assert_eq!(strip_html_tags(""), "");
}

#[test]
fn first_line_skips_blank_lines() {
    assert_eq!(first_line("\n\n  first  \nsecond"), "first");
    assert_eq!(first_line(""), "");
}

#[test]
fn empty_text_shows_top_level() {
    let docs = getter().get_docs("");

    assert!(docs.starts_with("Available services:"));
    assert!(docs.contains("ec2"));
    assert!(docs.contains("Amazon Elastic Compute Cloud."));
    assert!(docs.contains("s3api"));
}

#[test]
fn unknown_service_shows_top_level() {
    let getter = getter();

    assert_eq!(getter.get_docs("ec"), getter.get_docs(""));
}

#[test]
fn service_without_operation_shows_service_page() {
    let docs = getter().get_docs("ec2");

    assert!(docs.starts_with("ec2\n==="));
    assert!(docs.contains("Amazon Elastic Compute Cloud."));
    assert!(docs.contains("describe-instances"));
    assert!(!docs.contains("<p>"));
}

#[test]
fn invalid_operation_shows_service_page() {
    let getter = getter();

    assert_eq!(getter.get_docs("ec2 describe-nothing"), getter.get_docs("ec2"));
}

#[test]
fn operation_shows_operation_page() {
    let docs = getter().get_docs("ec2 describe-instances");

    assert!(docs.starts_with("ec2 describe-instances\n"));
    assert!(docs.contains("Describes the specified instances."));
    assert!(docs.contains("--instance-ids"));
    assert!(docs.contains("The instance IDs."));
    assert!(!docs.contains("Default: all instances."));
    assert!(docs.contains("--dry-run"));
}

#[test]
fn options_and_paths_are_ignored() {
    let getter = getter();
    let expected = getter.get_docs("ec2 describe-instances");

    assert_eq!(
        getter.get_docs("ec2 --output json describe-instances"),
        getter.get_docs("ec2 json describe-instances")
    );
    assert_eq!(
        getter.get_docs("ec2 describe-instances --cli-input-json file://input.json"),
        expected
    );
    assert_eq!(getter.get_docs("./script.sh ec2 describe-instances"), expected);
}

#[test]
fn repeated_lookups_are_stable() {
    let getter = getter();

    let first = getter.get_docs("ec2 describe-instances");
    let second = getter.get_docs("ec2 describe-instances");

    assert_eq!(first, second);
}
