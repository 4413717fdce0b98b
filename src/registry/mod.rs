//! Command tree consulted during completion.
//!
//! The registry is a hierarchy of named commands. Each level maps names to
//! [`CommandNode`]s, and every node carries its own argument table. The root
//! additionally owns the global arguments that apply to every command.

mod loading;
mod types;

#[cfg(test)]
mod tests;

pub use types::{ArgTable, ArgumentDescriptor, CommandNode, CommandTable};

use serde::{Deserialize, Serialize};

use crate::{ArgscopeError, Result};

/// Root of the command tree.
///
/// # Example Structure
///
/// ```text
/// registry            (global args: --output, --region, ...)
/// ├── s3api
/// │   ├── list-objects   (args: --bucket, --prefix, ...)
/// │   └── get-object
/// └── ec2
///     └── describe-instances
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CommandRegistry {
    #[serde(rename = "commands", default)]
    subcommand_table: CommandTable,

    #[serde(rename = "args", default)]
    arg_table: ArgTable,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level commands.
    pub fn subcommand_table(&self) -> &CommandTable {
        &self.subcommand_table
    }

    /// Global arguments accepted by every command.
    pub fn arg_table(&self) -> &ArgTable {
        &self.arg_table
    }

    /// Registers `node` beneath the command reached by `parent_lineage`.
    ///
    /// The lineage is root-first and its first element names the root
    /// itself, so `["root"]` registers a top-level command and
    /// `["root", "s3api"]` registers a child of `s3api`. A node with the
    /// same name at that level is replaced.
    ///
    /// # Errors
    ///
    /// Returns `ArgscopeError::SubcommandNotFound` if any parent token does
    /// not exist.
    pub fn register_command<S: AsRef<str>>(
        &mut self,
        parent_lineage: &[S],
        node: CommandNode,
    ) -> Result<()> {
        let mut table = &mut self.subcommand_table;

        for token in parent_lineage.iter().skip(1) {
            let token = token.as_ref();
            table = table
                .get_mut(token)
                .ok_or_else(|| ArgscopeError::subcommand_not_found(token, parent_lineage))?
                .subcommand_table_mut();
        }

        table.insert(node.name.clone(), node);
        Ok(())
    }

    /// Registers a global argument, replacing any existing one with the same name.
    pub fn register_global_arg(&mut self, argument: ArgumentDescriptor) {
        self.arg_table.insert(argument.name.clone(), argument);
    }

    /// Lists top-level commands with their direct subcommands.
    ///
    /// Both levels are sorted alphabetically for consistent display.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut commands: Vec<(String, Vec<String>)> = self
            .subcommand_table
            .iter()
            .map(|(name, node)| {
                let mut children: Vec<String> = node.subcommand_table().keys().cloned().collect();
                children.sort();

                (name.clone(), children)
            })
            .collect();

        commands.sort();

        commands
    }
}
