use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use tracing::{debug, warn};

use crate::registry::{CommandNode, CommandRegistry};

use super::{first_line, strip_html_tags};

const TOP_LEVEL_KEY: &str = "top";
const FILE_PATH_CHARS: &[char] = &['.', ':', '\\', '/'];

/// Renders documentation for the command line being typed.
///
/// Text that does not name a known service falls back to the top-level
/// overview, a service without a valid operation shows the service page,
/// and anything deeper shows the operation page. Rendered pages are cached
/// per key since the registry never changes.
pub struct DocsGetter {
    registry: Arc<CommandRegistry>,
    cache: RwLock<HashMap<String, String>>,
}

impl DocsGetter {
    /// Creates a docs getter over `registry`.
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self {
            registry,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns plain-text documentation for `command_text`.
    ///
    /// Options (`--name`) and tokens that look like file paths are ignored,
    /// since only service and operation names select a page.
    pub fn get_docs(&self, command_text: &str) -> String {
        let args: Vec<&str> = command_text
            .split_whitespace()
            .filter(|arg| !arg.starts_with("--") && !arg.contains(FILE_PATH_CHARS))
            .collect();

        let Some((service_name, remaining)) = args.split_first() else {
            return self.top_level_docs();
        };

        let Some(service) = self.registry.subcommand_table().get(*service_name) else {
            debug!("'{service_name}' is not a known service, showing top-level docs");
            return self.top_level_docs();
        };

        match remaining
            .first()
            .and_then(|operation| service.subcommand_table().get(*operation))
        {
            Some(operation) => self.operation_docs(service, operation),
            None => self.service_docs(service),
        }
    }

    fn top_level_docs(&self) -> String {
        self.cached(TOP_LEVEL_KEY, || {
            let mut names: Vec<&String> = self.registry.subcommand_table().keys().collect();
            names.sort();

            let mut content = String::from("Available services:\n");
            for name in names {
                let node = &self.registry.subcommand_table()[name];
                content.push_str(&format_entry(name, node.documentation()));
            }
            content
        })
    }

    fn service_docs(&self, service: &CommandNode) -> String {
        self.cached(&format!("service:{}", service.name), || {
            let mut content = render_heading(&service.name, service.documentation());

            let mut names: Vec<&String> = service.subcommand_table().keys().collect();
            names.sort();
            if !names.is_empty() {
                content.push_str("\nAvailable commands:\n");
                for name in names {
                    let node = &service.subcommand_table()[name];
                    content.push_str(&format_entry(name, node.documentation()));
                }
            }
            content
        })
    }

    fn operation_docs(&self, service: &CommandNode, operation: &CommandNode) -> String {
        let title = format!("{} {}", service.name, operation.name);
        self.cached(&format!("operation:{title}"), || {
            let mut content = render_heading(&title, operation.documentation());

            let mut names: Vec<&String> = operation.arg_table().keys().collect();
            names.sort();
            if !names.is_empty() {
                content.push_str("\nOptions:\n");
                for name in names {
                    let argument = &operation.arg_table()[name];
                    content.push_str(&format_entry(&format!("--{name}"), argument.documentation()));
                }
            }
            content
        })
    }

    fn cached(&self, key: &str, render: impl FnOnce() -> String) -> String {
        if let Ok(cache) = self.cache.read() {
            if let Some(content) = cache.get(key) {
                return content.clone();
            }
        }

        let content = render();

        match self.cache.write() {
            Ok(mut cache) => {
                cache.insert(key.to_string(), content.clone());
            }
            Err(_) => warn!("Docs cache lock poisoned, serving uncached page for '{key}'"),
        }

        content
    }
}

fn render_heading(title: &str, documentation: Option<&str>) -> String {
    let mut content = format!("{title}\n{}\n", "=".repeat(title.chars().count()));
    if let Some(documentation) = documentation {
        content.push('\n');
        content.push_str(strip_html_tags(documentation).trim());
        content.push('\n');
    }
    content
}

fn format_entry(name: &str, documentation: Option<&str>) -> String {
    let summary = documentation.map(strip_html_tags).unwrap_or_default();
    let summary = first_line(&summary);

    if summary.is_empty() {
        format!("  {name}\n")
    } else {
        format!("  {name:<24} {summary}\n")
    }
}
