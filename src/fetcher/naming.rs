//! Translation between command-table names and service-side names.

/// Command-table names whose service description is published under a
/// different name.
pub const SERVICE_NAME_OVERRIDES: &[(&str, &str)] = &[("s3api", "s3")];

/// Returns the service name used by the metadata provider for a
/// command-table `token`.
pub fn service_name_for(token: &str) -> &str {
    SERVICE_NAME_OVERRIDES
        .iter()
        .find(|(command, _)| *command == token)
        .map_or(token, |&(_, service)| service)
}

/// Converts a dashed command name into its operation name.
///
/// Each `-` separated segment gets an upper-case first character and
/// lower-case remainder: `list-objects` becomes `ListObjects`.
pub fn operation_name_for(command_token: &str) -> String {
    command_token.split('-').map(capitalize).collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
