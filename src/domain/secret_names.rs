//! Partitioning of uploaded secret names.

use log::warn;

/// Deployment credentials the workflows consume directly.
pub const SYSTEM_VARIABLES: [&str; 3] = ["SERVER_HOST", "SERVER_USER", "SSH_PRIVATE_KEY"];

/// Names the templates already bind themselves.
pub const TEMPLATE_BOUND_VARIABLES: [&str; 1] = ["COMPOSE_PROJECT_NAME"];

pub fn is_system_variable(name: &str) -> bool {
    SYSTEM_VARIABLES.contains(&name)
}

/// Application variable names, in upload order.
///
/// Drops system and template-bound names, empty names, names that are not
/// shell identifiers, and repeats.
pub fn application_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    for name in names.iter().map(|n| n.as_ref().trim()) {
        if name.is_empty() || is_system_variable(name) || TEMPLATE_BOUND_VARIABLES.contains(&name) {
            continue;
        }
        if !is_identifier(name) {
            warn!("Skipping secret '{}': not a valid variable name", name);
            continue;
        }
        if out.iter().any(|existing| existing == name) {
            continue;
        }
        out.push(name.to_string());
    }

    out
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
