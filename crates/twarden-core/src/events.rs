//! Lifecycle event and launch descriptor definitions

use serde::{Deserialize, Serialize};

/// A host lifecycle transition delivered to the SDK manager.
///
/// These are the terminal renditions of the four application lifecycle
/// notifications a windowed platform emits. The shell maps terminal focus
/// transitions onto them; hosts may also feed them in directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// The app is about to stop being the active/focused surface
    WillResignActive,
    /// The app became the active/focused surface
    DidBecomeActive,
    /// The app is returning from the background
    WillEnterForeground,
    /// The app moved to the background
    DidEnterBackground,
}

impl LifecycleEvent {
    /// Stable name used in logs and headless JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleEvent::WillResignActive => "will_resign_active",
            LifecycleEvent::DidBecomeActive => "did_become_active",
            LifecycleEvent::WillEnterForeground => "will_enter_foreground",
            LifecycleEvent::DidEnterBackground => "did_enter_background",
        }
    }

    /// True for the two transitions that take the app out of active use
    pub fn is_deactivation(&self) -> bool {
        matches!(
            self,
            LifecycleEvent::WillResignActive | LifecycleEvent::DidEnterBackground
        )
    }
}

impl std::fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags::bitflags! {
    /// Bit-coded descriptor of the actions taken during a launch.
    ///
    /// Delivered to the post-launch hook so hosts can tell how the session
    /// was established (fresh authentication, restored account, bypass).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LaunchActions: u8 {
        /// Stored credentials passed the passcode gate
        const PASSCODE_VERIFIED = 0b0000_0001;
        /// A fresh authentication was performed
        const AUTH_VERIFIED = 0b0000_0010;
        /// An existing account was restored without re-authenticating
        const ALREADY_AUTHENTICATED = 0b0000_0100;
        /// Authentication was skipped per the boot configuration
        const AUTH_BYPASSED = 0b0000_1000;
    }
}

impl LaunchActions {
    /// A log-friendly string of the launch actions that were taken.
    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "None".to_string();
        }

        let mut parts = Vec::new();
        if self.contains(LaunchActions::PASSCODE_VERIFIED) {
            parts.push("PasscodeVerified");
        }
        if self.contains(LaunchActions::AUTH_VERIFIED) {
            parts.push("AuthVerified");
        }
        if self.contains(LaunchActions::ALREADY_AUTHENTICATED) {
            parts.push("AlreadyAuthenticated");
        }
        if self.contains(LaunchActions::AUTH_BYPASSED) {
            parts.push("AuthBypassed");
        }
        parts.join(",")
    }
}

impl serde::Serialize for LaunchActions {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> serde::Deserialize<'de> for LaunchActions {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(LaunchActions::from_bits_truncate(bits))
    }
}
