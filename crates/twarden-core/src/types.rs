//! Core domain type definitions

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// SDK product name used in logs and the default user agent
pub const SDK_NAME: &str = "TerminalWarden";

/// SDK version baked in at compile time
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Host app classification, reported in the user agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    /// Pure-Rust TUI host
    #[default]
    Native,
    /// Terminal UI bridged to another surface (web terminal, SSH relay)
    Hybrid,
    /// No interactive UI (CI, daemons, scripted runs)
    Headless,
}

impl AppKind {
    /// Designator embedded in the user agent string
    pub fn designator(&self) -> &'static str {
        match self {
            AppKind::Native => "Native",
            AppKind::Hybrid => "Hybrid",
            AppKind::Headless => "Headless",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppKind::Native => "native",
            AppKind::Hybrid => "hybrid",
            AppKind::Headless => "headless",
        }
    }
}

impl std::fmt::Display for AppKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated user identity known to the SDK.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserAccount {
    /// Stable account identifier (issuer-scoped)
    pub id: String,
    /// Login name
    pub username: String,
    /// Human-readable display name, falls back to `username` when empty
    #[serde(default)]
    pub display_name: String,
    /// When this account was last authenticated
    #[serde(default = "Local::now")]
    pub authenticated_at: DateTime<Local>,
}

impl UserAccount {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            id: id.into(),
            display_name: username.clone(),
            username,
            authenticated_at: Local::now(),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Name to show in selection lists and the header
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_kind_designators() {
        assert_eq!(AppKind::Native.designator(), "Native");
        assert_eq!(AppKind::Hybrid.designator(), "Hybrid");
        assert_eq!(AppKind::Headless.designator(), "Headless");
    }

    #[test]
    fn test_app_kind_default_is_native() {
        assert_eq!(AppKind::default(), AppKind::Native);
    }

    #[test]
    fn test_account_label_falls_back_to_username() {
        let account = UserAccount::new("005-1", "ada@example.org");
        assert_eq!(account.label(), "ada@example.org");

        let named = account.clone().with_display_name("Ada");
        assert_eq!(named.label(), "Ada");
    }

    #[test]
    fn test_account_serde_round_trip() {
        let account = UserAccount::new("005-1", "ada@example.org").with_display_name("Ada");
        let json = serde_json::to_string(&account).unwrap();
        let back: UserAccount = serde_json::from_str(&json).unwrap();
        assert_eq!(account.id, back.id);
        assert_eq!(account.username, back.username);
        assert_eq!(account.display_name, back.display_name);
    }
}
