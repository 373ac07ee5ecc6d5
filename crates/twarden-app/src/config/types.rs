//! Configuration types for Terminal Warden
//!
//! Defines:
//! - `BootConfig` - App identity and launch behavior (.twarden/bootconfig.toml)
//! - `ShellSettings` - Shell behavior settings (.twarden/settings.toml)
//! - Related sub-types

use serde::{Deserialize, Serialize};

/// App identity and launch behavior (.twarden/bootconfig.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BootConfig {
    /// Consumer key identifying this app to its backing service
    #[serde(default)]
    pub consumer_key: String,

    /// Redirect URI completing an external login flow
    #[serde(default = "default_callback_uri")]
    pub callback_uri: String,

    /// Access scopes requested at login
    #[serde(default)]
    pub scopes: Vec<String>,

    /// If false, launch skips authentication entirely
    #[serde(default = "default_true")]
    pub should_authenticate: bool,

    /// Host the authenticator signs in against
    #[serde(default = "default_login_host")]
    pub login_host: String,

    /// Branded login path appended to the login host
    #[serde(default)]
    pub brand_login_path: Option<String>,

    /// Display name shown in the header and branded snapshot
    #[serde(default = "default_display_name")]
    pub app_display_name: String,

    /// Local identity used by the default authenticator
    #[serde(default)]
    pub profile: ProfileConfig,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            consumer_key: String::new(),
            callback_uri: default_callback_uri(),
            scopes: Vec::new(),
            should_authenticate: true,
            login_host: default_login_host(),
            brand_login_path: None,
            app_display_name: default_display_name(),
            profile: ProfileConfig::default(),
        }
    }
}

/// Local identity for the default authenticator
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,
}

fn default_callback_uri() -> String {
    "twarden://auth/done".to_string()
}

fn default_login_host() -> String {
    "login.example.com".to_string()
}

fn default_display_name() -> String {
    "Terminal Warden".to_string()
}

/// Shell behavior settings (.twarden/settings.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShellSettings {
    #[serde(default)]
    pub snapshot: SnapshotSettings,

    #[serde(default)]
    pub loading: LoadingSettings,

    #[serde(default)]
    pub dev: DevSettings,
}

/// Privacy snapshot settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnapshotSettings {
    /// Obscure the screen while the app is backgrounded
    #[serde(default = "default_true")]
    pub use_snapshot_view: bool,

    /// Treat terminal focus loss as backgrounding
    #[serde(default = "default_true")]
    pub on_focus_loss: bool,

    /// Show the app display name on the snapshot instead of a blank fill
    #[serde(default)]
    pub branded: bool,
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        Self {
            use_snapshot_view: true,
            on_focus_loss: true,
            branded: false,
        }
    }
}

/// Loading view settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoadingSettings {
    /// Time for one full spinner rotation, in milliseconds
    #[serde(default = "default_rotation_ms")]
    pub rotation_ms: u64,

    /// Title shown on the launch loading view
    #[serde(default = "default_loading_title")]
    pub title: String,
}

impl Default for LoadingSettings {
    fn default() -> Self {
        Self {
            rotation_ms: default_rotation_ms(),
            title: default_loading_title(),
        }
    }
}

/// Dev support settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DevSettings {
    /// Override the dev-support gate; absent means "debug builds only"
    #[serde(default)]
    pub enabled: Option<bool>,
}

fn default_rotation_ms() -> u64 {
    1000
}

fn default_loading_title() -> String {
    "Starting up".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_config_defaults() {
        let config: BootConfig = toml::from_str("").unwrap();

        assert!(config.should_authenticate);
        assert_eq!(config.callback_uri, "twarden://auth/done");
        assert_eq!(config.app_display_name, "Terminal Warden");
        assert!(config.profile.username.is_none());
    }

    #[test]
    fn test_boot_config_parses_profile() {
        let config: BootConfig = toml::from_str(
            r#"
            consumer_key = "3MVG9key"
            scopes = ["shell", "api"]
            should_authenticate = true

            [profile]
            username = "ada"
            display_name = "Ada Lovelace"
            "#,
        )
        .unwrap();

        assert_eq!(config.consumer_key, "3MVG9key");
        assert_eq!(config.scopes, vec!["shell", "api"]);
        assert_eq!(config.profile.username.as_deref(), Some("ada"));
    }

    #[test]
    fn test_shell_settings_defaults() {
        let settings: ShellSettings = toml::from_str("").unwrap();

        assert!(settings.snapshot.use_snapshot_view);
        assert!(settings.snapshot.on_focus_loss);
        assert!(!settings.snapshot.branded);
        assert_eq!(settings.loading.rotation_ms, 1000);
        assert!(settings.dev.enabled.is_none());
    }

    #[test]
    fn test_shell_settings_partial_override() {
        let settings: ShellSettings = toml::from_str(
            r#"
            [snapshot]
            on_focus_loss = false

            [dev]
            enabled = true
            "#,
        )
        .unwrap();

        assert!(settings.snapshot.use_snapshot_view);
        assert!(!settings.snapshot.on_focus_loss);
        assert_eq!(settings.dev.enabled, Some(true));
    }
}
