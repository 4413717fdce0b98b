use tracing::trace;

use crate::{
    ArgscopeError, Result,
    registry::{ArgumentDescriptor, CommandNode, CommandRegistry, CommandTable},
};

/// Walks the command tree along a lineage.
///
/// The first lineage element names the root and is never looked up; every
/// following element must name a subcommand of the previous level. A missing
/// intermediate token is an error, while a missing leaf command or argument
/// is simply absent.
pub struct LineageResolver<'a> {
    registry: &'a CommandRegistry,
}

impl<'a> LineageResolver<'a> {
    /// Creates a resolver over `registry`.
    pub fn new(registry: &'a CommandRegistry) -> Self {
        Self { registry }
    }

    /// Returns the subcommand table reached after descending through
    /// `lineage[1..]`.
    ///
    /// # Errors
    ///
    /// Returns `ArgscopeError::SubcommandNotFound` for the first token that
    /// has no matching subcommand.
    pub fn resolve_subcommand_table<S: AsRef<str>>(
        &self,
        lineage: &[S],
    ) -> Result<&'a CommandTable> {
        let mut table = self.registry.subcommand_table();

        for token in lineage.iter().skip(1) {
            let token = token.as_ref();
            let subcommand = table
                .get(token)
                .ok_or_else(|| ArgscopeError::subcommand_not_found(token, lineage))?;

            trace!(token, "descending into subcommand");
            table = subcommand.subcommand_table();
        }

        Ok(table)
    }

    /// Resolves the command node for `current_command` beneath `lineage`.
    ///
    /// # Errors
    ///
    /// Propagates traversal errors from [`Self::resolve_subcommand_table`].
    pub fn resolve_command<S: AsRef<str>>(
        &self,
        lineage: &[S],
        current_command: Option<&str>,
    ) -> Result<Option<&'a CommandNode>> {
        let table = self.resolve_subcommand_table(lineage)?;

        Ok(current_command.and_then(|command| table.get(command)))
    }

    /// Resolves the descriptor of `arg_name` on `current_command`.
    ///
    /// # Errors
    ///
    /// Propagates traversal errors from [`Self::resolve_subcommand_table`].
    pub fn resolve_argument<S: AsRef<str>>(
        &self,
        lineage: &[S],
        current_command: Option<&str>,
        arg_name: &str,
    ) -> Result<Option<&'a ArgumentDescriptor>> {
        let command = self.resolve_command(lineage, current_command)?;

        Ok(command.and_then(|node| node.arg_table().get(arg_name)))
    }
}
