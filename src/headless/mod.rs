//! Headless mode - JSON event output for E2E testing
//!
//! This module provides a headless (non-TUI) mode for twarden that outputs
//! structured shell events to stdout. This enables reliable parsing in test
//! scripts, avoiding the complexity of parsing ANSI escape codes from the TUI.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with
//! event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"launch_started","timestamp":1704700001000}
//! {"event":"launch_succeeded","actions":"AuthVerified","user":"ada","timestamp":1704700002000}
//! {"event":"lifecycle","transition":"did_enter_background","timestamp":1704700003000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use twarden_app::SnapshotSpec;
use twarden_core::UserAccount;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Launch pipeline kicked off
    LaunchStarted { timestamp: i64 },

    /// Launch pipeline completed successfully
    LaunchSucceeded {
        actions: String,
        user: Option<String>,
        timestamp: i64,
    },

    /// Launch pipeline failed
    LaunchFailed { message: String, timestamp: i64 },

    /// Lifecycle transition fanned out to delegates
    Lifecycle { transition: String, timestamp: i64 },

    /// Privacy snapshot raised over the screen
    SnapshotPresented { kind: String, timestamp: i64 },

    /// Privacy snapshot dismissed
    SnapshotDismissed { kind: String, timestamp: i64 },

    /// Current account replaced; `old` is absent on first sign-in
    UserSwitched {
        old: Option<String>,
        new: String,
        timestamp: i64,
    },

    /// Current account cleared
    LoggedOut { timestamp: i64 },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    fn snapshot_kind(spec: &SnapshotSpec) -> String {
        match spec {
            SnapshotSpec::Blank => "blank".to_string(),
            SnapshotSpec::Branded { .. } => "branded".to_string(),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn launch_started() -> Self {
        Self::LaunchStarted {
            timestamp: Self::now(),
        }
    }

    pub fn launch_succeeded(actions: String, user: Option<String>) -> Self {
        Self::LaunchSucceeded {
            actions,
            user,
            timestamp: Self::now(),
        }
    }

    pub fn launch_failed(message: String) -> Self {
        Self::LaunchFailed {
            message,
            timestamp: Self::now(),
        }
    }

    pub fn lifecycle(transition: &str) -> Self {
        Self::Lifecycle {
            transition: transition.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn snapshot_presented(spec: &SnapshotSpec) -> Self {
        Self::SnapshotPresented {
            kind: Self::snapshot_kind(spec),
            timestamp: Self::now(),
        }
    }

    pub fn snapshot_dismissed(spec: &SnapshotSpec) -> Self {
        Self::SnapshotDismissed {
            kind: Self::snapshot_kind(spec),
            timestamp: Self::now(),
        }
    }

    pub fn user_switched(old: Option<&UserAccount>, new: &UserAccount) -> Self {
        Self::UserSwitched {
            old: old.map(|account| account.username.clone()),
            new: new.username.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn logged_out() -> Self {
        Self::LoggedOut {
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_succeeded_serialization() {
        let event =
            HeadlessEvent::launch_succeeded("AuthVerified".to_string(), Some("ada".to_string()));
        let json = serde_json::to_string(&event).expect("serialization failed");

        // Parse back to ensure valid JSON
        let value: serde_json::Value = serde_json::from_str(&json).expect("invalid JSON");

        assert_eq!(value["event"], "launch_succeeded");
        assert_eq!(value["actions"], "AuthVerified");
        assert_eq!(value["user"], "ada");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_launch_failed_serialization() {
        let event = HeadlessEvent::launch_failed("no boot configuration".to_string());
        let json = serde_json::to_string(&event).expect("serialization failed");

        let value: serde_json::Value = serde_json::from_str(&json).expect("invalid JSON");

        assert_eq!(value["event"], "launch_failed");
        assert_eq!(value["message"], "no boot configuration");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_lifecycle_serialization() {
        let event = HeadlessEvent::lifecycle("did_enter_background");
        let json = serde_json::to_string(&event).expect("serialization failed");

        let value: serde_json::Value = serde_json::from_str(&json).expect("invalid JSON");

        assert_eq!(value["event"], "lifecycle");
        assert_eq!(value["transition"], "did_enter_background");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_snapshot_kinds() {
        let event = HeadlessEvent::snapshot_presented(&SnapshotSpec::Blank);
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();
        assert_eq!(value["event"], "snapshot_presented");
        assert_eq!(value["kind"], "blank");

        let event = HeadlessEvent::snapshot_dismissed(&SnapshotSpec::Branded {
            title: "Warden".to_string(),
        });
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();
        assert_eq!(value["event"], "snapshot_dismissed");
        assert_eq!(value["kind"], "branded");
    }

    #[test]
    fn test_user_switched_serialization() {
        let old = UserAccount::new("005-a", "grace");
        let new = UserAccount::new("005-b", "ada");
        let event = HeadlessEvent::user_switched(Some(&old), &new);
        let json = serde_json::to_string(&event).expect("serialization failed");

        let value: serde_json::Value = serde_json::from_str(&json).expect("invalid JSON");

        assert_eq!(value["event"], "user_switched");
        assert_eq!(value["old"], "grace");
        assert_eq!(value["new"], "ada");
    }

    #[test]
    fn test_first_sign_in_has_no_old_user() {
        let new = UserAccount::new("005-b", "ada");
        let event = HeadlessEvent::user_switched(None, &new);

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();

        assert!(value["old"].is_null());
        assert_eq!(value["new"], "ada");
    }

    #[test]
    fn test_error_serialization() {
        let event = HeadlessEvent::error("channel closed".to_string(), true);
        let json = serde_json::to_string(&event).expect("serialization failed");

        let value: serde_json::Value = serde_json::from_str(&json).expect("invalid JSON");

        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "channel closed");
        assert_eq!(value["fatal"], true);
        assert!(value["timestamp"].is_number());
    }
}
