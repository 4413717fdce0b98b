//! Plain-text documentation for partially typed command lines.
//!
//! Resolves typed text to the top level, a service command or an
//! operation, and renders the matching documentation from the command
//! registry.

mod getter;
mod text;

#[cfg(test)]
mod tests;

pub use getter::DocsGetter;
pub use text::{first_line, strip_html_tags};
