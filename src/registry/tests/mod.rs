//! Unit tests for the command registry
//!
//! Tests programmatic registration and TOML command tables.
//! No filesystem dependencies.

#![allow(clippy::unwrap_used)]

use crate::{
    ArgscopeError,
    registry::{ArgumentDescriptor, CommandNode, CommandRegistry},
    services::ShapeType,
};

const COMMAND_TABLE: &str = r#"
[args.output]
documentation = "The formatting style for command output."
choices = ["json", "text", "table"]

[args.debug]
documentation = "Turn on debug logging."

[commands.s3api]
documentation = "Low level S3 operations."

[commands.s3api.commands.list-objects]
documentation = "Lists objects in a bucket."

[commands.s3api.commands.list-objects.args.bucket]
documentation = "The name of the bucket."
required = true
model = { type = "string" }

[commands.s3api.commands.list-objects.args.max-items]
model = { type = "integer" }

[commands.ec2.commands.describe-instances]
"#;

#[test]
fn loads_nested_commands_and_fills_names() {
    let registry = CommandRegistry::from_toml_str(COMMAND_TABLE).unwrap();

    let s3api = &registry.subcommand_table()["s3api"];
    assert_eq!(s3api.name, "s3api");
    assert_eq!(s3api.documentation(), Some("Low level S3 operations."));

    let list_objects = &s3api.subcommand_table()["list-objects"];
    assert_eq!(list_objects.name, "list-objects");

    let bucket = &list_objects.arg_table()["bucket"];
    assert_eq!(bucket.name, "bucket");
    assert!(bucket.required);
    assert_eq!(
        bucket.argument_model().map(|shape| shape.shape_type),
        Some(ShapeType::String)
    );

    let max_items = &list_objects.arg_table()["max-items"];
    assert_eq!(max_items.documentation(), None);
}

#[test]
fn loads_global_arguments() {
    let registry = CommandRegistry::from_toml_str(COMMAND_TABLE).unwrap();

    let output = &registry.arg_table()["output"];
    assert_eq!(output.name, "output");
    assert_eq!(
        output.choices(),
        Some(&["json".to_string(), "text".to_string(), "table".to_string()][..])
    );
    assert_eq!(registry.arg_table()["debug"].choices(), None);
}

#[test]
fn invalid_toml_reports_string_location() {
    let err = CommandRegistry::from_toml_str("[commands.s3api\n").unwrap_err();

    assert!(matches!(
        err,
        ArgscopeError::TomlParseError { ref location, .. } if location == "string"
    ));
}

#[test]
fn empty_table_is_an_empty_registry() {
    let registry = CommandRegistry::from_toml_str("").unwrap();

    assert!(registry.subcommand_table().is_empty());
    assert!(registry.arg_table().is_empty());
}

#[test]
fn register_command_follows_parent_lineage() {
    let mut registry = CommandRegistry::new();
    registry
        .register_command(&["aws"], CommandNode::new("s3api"))
        .unwrap();
    registry
        .register_command(
            &["aws", "s3api"],
            CommandNode::new("get-object")
                .with_argument(ArgumentDescriptor::new("key").with_documentation("Object key.")),
        )
        .unwrap();

    let get_object = &registry.subcommand_table()["s3api"].subcommand_table()["get-object"];
    assert_eq!(get_object.arg_table()["key"].documentation(), Some("Object key."));
}

#[test]
fn register_command_rejects_missing_parent() {
    let mut registry = CommandRegistry::new();

    let err = registry
        .register_command(&["aws", "missing"], CommandNode::new("child"))
        .unwrap_err();

    assert!(matches!(
        err,
        ArgscopeError::SubcommandNotFound { ref token, .. } if token == "missing"
    ));
}

#[test]
fn register_command_replaces_same_name() {
    let mut registry = CommandRegistry::new();
    registry
        .register_command(&["aws"], CommandNode::new("ec2").with_documentation("old"))
        .unwrap();
    registry
        .register_command(&["aws"], CommandNode::new("ec2").with_documentation("new"))
        .unwrap();

    assert_eq!(registry.subcommand_table().len(), 1);
    assert_eq!(registry.subcommand_table()["ec2"].documentation(), Some("new"));
}

#[test]
fn list_commands_is_sorted() {
    let registry = CommandRegistry::from_toml_str(COMMAND_TABLE).unwrap();

    assert_eq!(
        registry.list_commands(),
        vec![
            ("ec2".to_string(), vec!["describe-instances".to_string()]),
            ("s3api".to_string(), vec!["list-objects".to_string()]),
        ]
    );
}
