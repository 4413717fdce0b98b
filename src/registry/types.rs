use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::services::Shape;

/// Mapping from subcommand name to its node.
pub type CommandTable = HashMap<String, CommandNode>;

/// Mapping from argument name to its descriptor.
pub type ArgTable = HashMap<String, ArgumentDescriptor>;

/// Metadata for a single command argument.
///
/// Every field except the name is optional. Accessors return `Option` and
/// leave the choice of default to the caller, since different lookups fall
/// back to different values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ArgumentDescriptor {
    /// Argument name as typed after `--`.
    #[serde(skip)]
    pub name: String,

    /// Structural model of the accepted value.
    #[serde(rename = "model", default, skip_serializing_if = "Option::is_none")]
    pub argument_model: Option<Shape>,

    /// Human-readable documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// Literal values accepted by an enumerated argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,

    /// Whether the argument must be supplied.
    #[serde(default)]
    pub required: bool,
}

impl ArgumentDescriptor {
    /// Creates a descriptor with only a name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Sets the structural model.
    pub fn with_model(mut self, model: Shape) -> Self {
        self.argument_model = Some(model);
        self
    }

    /// Sets the documentation string.
    pub fn with_documentation(mut self, documentation: &str) -> Self {
        self.documentation = Some(documentation.to_string());
        self
    }

    /// Restricts the argument to a set of literal values.
    pub fn with_choices(mut self, choices: &[&str]) -> Self {
        self.choices = Some(choices.iter().map(|c| c.to_string()).collect());
        self
    }

    /// Marks the argument as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Structural model, if one is attached.
    pub fn argument_model(&self) -> Option<&Shape> {
        self.argument_model.as_ref()
    }

    /// Documentation, if any was provided.
    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    /// Valid literal values, if the argument is enumerated.
    pub fn choices(&self) -> Option<&[String]> {
        self.choices.as_deref()
    }
}

/// A node of the command tree.
///
/// Nodes are built once when the registry is assembled and are only read
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CommandNode {
    /// Command name as typed on the command line.
    #[serde(skip)]
    pub name: String,

    /// Documentation shown for the command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    #[serde(rename = "commands", default, skip_serializing_if = "HashMap::is_empty")]
    subcommand_table: CommandTable,

    #[serde(rename = "args", default, skip_serializing_if = "HashMap::is_empty")]
    arg_table: ArgTable,
}

impl CommandNode {
    /// Creates a node without documentation, children or arguments.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Sets the documentation string.
    pub fn with_documentation(mut self, documentation: &str) -> Self {
        self.documentation = Some(documentation.to_string());
        self
    }

    /// Adds a child command, keyed by its name.
    pub fn with_subcommand(mut self, node: CommandNode) -> Self {
        self.subcommand_table.insert(node.name.clone(), node);
        self
    }

    /// Adds an argument, keyed by its name.
    pub fn with_argument(mut self, argument: ArgumentDescriptor) -> Self {
        self.arg_table.insert(argument.name.clone(), argument);
        self
    }

    /// Child commands of this node.
    pub fn subcommand_table(&self) -> &CommandTable {
        &self.subcommand_table
    }

    /// Arguments accepted by this node.
    pub fn arg_table(&self) -> &ArgTable {
        &self.arg_table
    }

    /// Documentation, if any was provided.
    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    pub(super) fn subcommand_table_mut(&mut self) -> &mut CommandTable {
        &mut self.subcommand_table
    }

    /// Copies table keys into the `name` fields of nodes and arguments.
    pub(super) fn fill_names(&mut self) {
        fill_table_names(&mut self.subcommand_table, &mut self.arg_table);
    }
}

pub(super) fn fill_table_names(commands: &mut CommandTable, args: &mut ArgTable) {
    for (name, argument) in args.iter_mut() {
        argument.name.clone_from(name);
    }

    for (name, node) in commands.iter_mut() {
        node.name.clone_from(name);
        node.fill_names();
    }
}
