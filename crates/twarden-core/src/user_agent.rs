//! Default user agent assembly
//!
//! The SDK reports itself to backends and analytics in the form:
//! `TerminalWarden/0.2.1 linux/x86_64 (xterm-256color) MyApp/1.0 Native`
//! with an optional trailing qualifier supplied by the caller.

use crate::types::{AppKind, SDK_NAME, SDK_VERSION};

/// Build the default user agent string.
///
/// `qualifier` is appended verbatim when non-empty; hosts use it to tag
/// individual subsystems (e.g. `"rest"`) without replacing the whole builder.
pub fn build(app_name: &str, app_version: &str, kind: AppKind, qualifier: &str) -> String {
    let mut agent = format!(
        "{}/{} {}/{} ({}) {}/{} {}",
        SDK_NAME,
        SDK_VERSION,
        std::env::consts::OS,
        std::env::consts::ARCH,
        terminal_descriptor(),
        sanitize(app_name),
        app_version,
        kind.designator(),
    );

    if !qualifier.is_empty() {
        agent.push(' ');
        agent.push_str(qualifier);
    }

    agent
}

/// The `(iPad)`-slot descriptor: whatever terminal we are running inside.
fn terminal_descriptor() -> String {
    std::env::var("TERM").unwrap_or_else(|_| "unknown".to_string())
}

/// App names can be arbitrary display strings; collapse whitespace so the
/// product token stays a single token.
fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();
    if cleaned.is_empty() {
        "app".to_string()
    } else {
        cleaned
    }
}
