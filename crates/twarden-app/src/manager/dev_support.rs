//! Developer support: dialog actions and live diagnostics
//!
//! Mirrors the dev dialog every debug build of the shell can summon: a
//! short list of actions against the manager plus a name/value dump of
//! everything worth knowing about the current SDK state.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use twarden_core::prelude::*;
use twarden_core::{SDK_NAME, SDK_VERSION};

use super::SdkManager;

/// One entry in the dev support dialog
#[derive(Clone)]
pub struct DevAction {
    pub title: String,
    handler: Arc<dyn Fn(&SdkManager) + Send + Sync>,
}

impl DevAction {
    pub fn new(
        title: impl Into<String>,
        handler: impl Fn(&SdkManager) + Send + Sync + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            handler: Arc::new(handler),
        }
    }

    /// Run this action against the manager
    pub fn run(&self, manager: &SdkManager) {
        debug!(action = %self.title, "Dev action invoked");
        (self.handler)(manager);
    }
}

impl std::fmt::Debug for DevAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DevAction")
            .field("title", &self.title)
            .finish()
    }
}

impl SdkManager {
    /// Whether dev support is available. Defaults to debug builds; hosts
    /// and settings can override either way.
    pub fn is_dev_support_enabled(&self) -> bool {
        self.dev_support_override
            .lock()
            .unwrap()
            .unwrap_or(cfg!(debug_assertions))
    }

    pub fn set_dev_support_enabled(&self, enabled: bool) {
        *self.dev_support_override.lock().unwrap() = Some(enabled);
    }

    /// Ask the shell to open the dev support dialog. Ignored (with a
    /// warning) when dev support is disabled.
    pub fn show_dev_support_dialog(&self) {
        if !self.is_dev_support_enabled() {
            warn!("Dev support is disabled; dialog request ignored");
            return;
        }
        self.dev_dialog_requested.store(true, Ordering::SeqCst);
    }

    /// Consume a pending dialog request. The shell polls this each tick.
    pub fn take_dev_dialog_request(&self) -> bool {
        self.dev_dialog_requested.swap(false, Ordering::SeqCst)
    }

    /// Ask the shell to open the dev info panel
    pub fn request_dev_info(&self) {
        self.dev_info_requested.store(true, Ordering::SeqCst);
    }

    /// Consume a pending dev info request
    pub fn take_dev_info_request(&self) -> bool {
        self.dev_info_requested.swap(false, Ordering::SeqCst)
    }

    /// The actions offered by the dev support dialog.
    ///
    /// Handlers operate on the manager only; UI navigation flows through
    /// the request flags so the shell stays in charge of its own modes.
    pub fn dev_actions(&self) -> Vec<DevAction> {
        vec![
            DevAction::new("View dev info", |m| m.request_dev_info()),
            DevAction::new("Logout current user", |m| m.logout()),
            DevAction::new("Toggle privacy snapshot", |m| {
                let next = !m.use_snapshot_view();
                m.set_use_snapshot_view(next);
            }),
            DevAction::new("Show log file path", |_m| {
                match twarden_core::logging::get_current_log_file() {
                    Ok(path) => info!("Log file: {}", path.display()),
                    Err(e) => warn!("Could not resolve log file path: {}", e),
                }
            }),
            DevAction::new("Close", |_m| {}),
        ]
    }

    /// Name/value diagnostics for the dev info panel
    pub fn dev_support_infos(&self) -> Vec<(String, String)> {
        let boot = self.boot_config();
        let current = self.current_account();
        let last_actions = self.last_launch_actions();

        let mut infos = vec![
            ("SDK".to_string(), format!("{} {}", SDK_NAME, SDK_VERSION)),
            ("App kind".to_string(), self.app_kind_as_str().to_string()),
            (
                "Analytics app name".to_string(),
                SdkManager::analytics_app_name(),
            ),
            ("App display name".to_string(), self.app_display_name()),
            ("User agent".to_string(), self.user_agent("")),
            ("Device id".to_string(), self.device_id()),
            (
                "Boot config source".to_string(),
                self.boot_config_source().unwrap_or_else(|| "unset".to_string()),
            ),
            (
                "Login host".to_string(),
                boot.as_ref()
                    .map(|b| b.login_host.clone())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            (
                "Brand login path".to_string(),
                self.brand_login_path().unwrap_or_else(|| "-".to_string()),
            ),
            (
                "Should authenticate".to_string(),
                boot.as_ref()
                    .map(|b| b.should_authenticate.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            (
                "Current user".to_string(),
                current
                    .as_ref()
                    .map(|a| a.label().to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),
            ("Authenticated".to_string(), current.is_some().to_string()),
            (
                "Launch in progress".to_string(),
                self.is_launching().to_string(),
            ),
            (
                "Last launch actions".to_string(),
                last_actions
                    .map(|a| a.describe())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            (
                "Snapshot view".to_string(),
                format!(
                    "{} (active: {})",
                    if self.use_snapshot_view() {
                        "enabled"
                    } else {
                        "disabled"
                    },
                    self.snapshot_active()
                ),
            ),
            (
                "Identity provider".to_string(),
                self.is_identity_provider().to_string(),
            ),
            (
                "IDP app scheme".to_string(),
                self.idp_app_scheme().unwrap_or_else(|| "-".to_string()),
            ),
            (
                "Legacy auth manager".to_string(),
                self.use_legacy_authentication_manager().to_string(),
            ),
            (
                "Passcode provider".to_string(),
                self.preferred_passcode_provider(),
            ),
            ("Authenticator".to_string(), self.authenticator_name()),
            (
                "Dev support".to_string(),
                self.is_dev_support_enabled().to_string(),
            ),
        ];

        if let Ok(path) = twarden_core::logging::get_current_log_file() {
            infos.push(("Log file".to_string(), path.display().to_string()));
        }

        infos
    }
}
