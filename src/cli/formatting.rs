//! Formatting utilities for CLI output.
//!
//! Provides styled headers and a compact one-line rendering of structural
//! models for terminal display.

use crate::services::{Shape, ShapeType};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Blue color
    pub const BLUE: &'static str = "\x1b[34m";
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats service names with styling
pub fn format_service(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::BLUE, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Renders a structural model as a compact one-line summary.
///
/// Scalars print their type name, enumerated strings list their values,
/// containers show their element types and structures show their member
/// count rather than full contents.
///
/// # Examples
///
/// ```
/// use argscope::cli::formatting::format_shape;
/// use argscope::services::{Shape, ShapeType};
///
/// let shape = Shape::new(ShapeType::List).with_list_member(Shape::new(ShapeType::String));
/// assert_eq!(format_shape(&shape), "list<string>");
/// ```
pub fn format_shape(shape: &Shape) -> String {
    let inner = |member: &Option<Box<Shape>>| {
        member
            .as_deref()
            .map_or_else(|| "?".to_string(), format_shape)
    };

    match shape.shape_type {
        ShapeType::Structure => format!("structure{{{}}}", shape.members.len()),
        ShapeType::List => format!("list<{}>", inner(&shape.member)),
        ShapeType::Map => format!("map<{}, {}>", inner(&shape.key), inner(&shape.value)),
        ShapeType::String if !shape.enum_values.is_empty() => {
            format!("string({})", shape.enum_values.join("|"))
        }
        ShapeType::String => "string".to_string(),
        ShapeType::Integer => "integer".to_string(),
        ShapeType::Long => "long".to_string(),
        ShapeType::Boolean => "boolean".to_string(),
        ShapeType::Double => "double".to_string(),
        ShapeType::Float => "float".to_string(),
        ShapeType::Timestamp => "timestamp".to_string(),
        ShapeType::Blob => "blob".to_string(),
    }
}
