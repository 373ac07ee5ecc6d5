//! The process-wide SDK manager
//!
//! `SdkManager` owns the launch state machine, the customization hooks, the
//! lifecycle delegate registry, the snapshot privacy view, and the stored
//! account set. Hosts usually talk to the one shared instance created by
//! [`SdkManager::shared`], but every piece works on an owned instance too,
//! which is how the tests run without process-global state.
//!
//! Hooks are invoked with no locks held, so a hook body may freely call
//! back into the manager.

mod delegates;
pub mod dev_support;
pub mod hooks;
mod launch;
pub mod snapshot;

pub use delegates::SdkManagerDelegate;
pub use dev_support::DevAction;
pub use snapshot::SnapshotSpec;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use twarden_core::prelude::*;
use twarden_core::{user_agent, AppKind, LaunchActions, LifecycleEvent, UserAccount, SDK_NAME};

use crate::auth::{AccountStore, Authenticator, ConfigAuthenticator};
use crate::config::BootConfig;

use delegates::DelegateRegistry;
use hooks::Hooks;

/// Deferred constructor for the shared instance
pub type InstanceFactory = Box<dyn FnOnce() -> SdkManager + Send>;

static INSTANCE: OnceLock<SdkManager> = OnceLock::new();
static INSTANCE_FACTORY: Mutex<Option<InstanceFactory>> = Mutex::new(None);
static ANALYTICS_APP_NAME: Mutex<Option<String>> = Mutex::new(None);

/// Coordinates launch, lifecycle, and account state for the embedding app
pub struct SdkManager {
    app_kind: Mutex<AppKind>,
    boot_config: Mutex<Option<BootConfig>>,
    boot_config_source: Mutex<Option<String>>,
    app_display_name: Mutex<String>,
    app_version: Mutex<String>,
    preferred_passcode_provider: Mutex<String>,
    idp_app_scheme: Mutex<Option<String>>,
    is_identity_provider: AtomicBool,
    use_legacy_authentication_manager: AtomicBool,
    use_snapshot_view: AtomicBool,
    dev_support_override: Mutex<Option<bool>>,
    launching: AtomicBool,
    last_launch_actions: Mutex<Option<LaunchActions>>,
    dev_dialog_requested: AtomicBool,
    dev_info_requested: AtomicBool,
    hooks: Mutex<Hooks>,
    delegates: DelegateRegistry,
    snapshot: Mutex<Option<SnapshotSpec>>,
    accounts: Mutex<AccountStore>,
    authenticator: Mutex<Box<dyn Authenticator>>,
    device_id: OnceLock<String>,
}

impl SdkManager {
    /// Create a standalone manager with default settings
    pub fn new() -> Self {
        Self {
            app_kind: Mutex::new(AppKind::default()),
            boot_config: Mutex::new(None),
            boot_config_source: Mutex::new(None),
            app_display_name: Mutex::new("Terminal Warden".to_string()),
            app_version: Mutex::new("0.0.0".to_string()),
            preferred_passcode_provider: Mutex::new("pbkdf2".to_string()),
            idp_app_scheme: Mutex::new(None),
            is_identity_provider: AtomicBool::new(false),
            use_legacy_authentication_manager: AtomicBool::new(false),
            use_snapshot_view: AtomicBool::new(true),
            dev_support_override: Mutex::new(None),
            launching: AtomicBool::new(false),
            last_launch_actions: Mutex::new(None),
            dev_dialog_requested: AtomicBool::new(false),
            dev_info_requested: AtomicBool::new(false),
            hooks: Mutex::new(Hooks::default()),
            delegates: DelegateRegistry::new(),
            snapshot: Mutex::new(None),
            accounts: Mutex::new(AccountStore::new()),
            authenticator: Mutex::new(Box::new(ConfigAuthenticator)),
            device_id: OnceLock::new(),
        }
    }

    /// The shared process-wide instance, created on first access
    pub fn shared() -> &'static SdkManager {
        INSTANCE.get_or_init(|| {
            let factory = INSTANCE_FACTORY.lock().unwrap().take();
            match factory {
                Some(factory) => factory(),
                None => SdkManager::new(),
            }
        })
    }

    /// Install a constructor for the shared instance.
    ///
    /// Only effective before the first [`SdkManager::shared`] call. Returns
    /// false when the shared instance already exists, in which case the
    /// factory is dropped.
    pub fn set_instance_factory(factory: impl FnOnce() -> SdkManager + Send + 'static) -> bool {
        if INSTANCE.get().is_some() {
            warn!("Instance factory ignored; the shared manager already exists");
            return false;
        }
        *INSTANCE_FACTORY.lock().unwrap() = Some(Box::new(factory));
        true
    }

    // ─── App identity ───

    pub fn app_kind(&self) -> AppKind {
        *self.app_kind.lock().unwrap()
    }

    pub fn set_app_kind(&self, kind: AppKind) {
        *self.app_kind.lock().unwrap() = kind;
    }

    /// Lowercase app kind name, as reported in dev info
    pub fn app_kind_as_str(&self) -> &'static str {
        self.app_kind().as_str()
    }

    pub fn app_display_name(&self) -> String {
        self.app_display_name.lock().unwrap().clone()
    }

    pub fn set_app_display_name(&self, name: impl Into<String>) {
        *self.app_display_name.lock().unwrap() = name.into();
    }

    /// Host app version reported in the user agent
    pub fn app_version(&self) -> String {
        self.app_version.lock().unwrap().clone()
    }

    pub fn set_app_version(&self, version: impl Into<String>) {
        *self.app_version.lock().unwrap() = version.into();
    }

    /// App name used when reporting analytics events.
    ///
    /// Process-level, shared by every manager instance. Defaults to the
    /// executable name.
    pub fn analytics_app_name() -> String {
        if let Some(name) = ANALYTICS_APP_NAME.lock().unwrap().clone() {
            return name;
        }
        default_analytics_app_name()
    }

    pub fn set_analytics_app_name(name: impl Into<String>) {
        *ANALYTICS_APP_NAME.lock().unwrap() = Some(name.into());
    }

    /// User agent for outbound requests, `qualifier` appended to the app
    /// kind field. The `user_agent` hook replaces the built string wholesale.
    pub fn user_agent(&self, qualifier: &str) -> String {
        let hook = self.hooks.lock().unwrap().user_agent.clone();
        if let Some(hook) = hook {
            return hook(qualifier);
        }
        user_agent::build(
            &self.app_display_name(),
            &self.app_version(),
            self.app_kind(),
            qualifier,
        )
    }

    /// Stable per-installation identifier, generated on first use
    pub fn device_id(&self) -> String {
        self.device_id
            .get_or_init(|| match twarden_core::device_id::device_id() {
                Ok(id) => id,
                Err(err) => {
                    warn!("Could not load device id: {}", err);
                    "unknown".to_string()
                }
            })
            .clone()
    }

    // ─── Boot configuration ───

    pub fn boot_config(&self) -> Option<BootConfig> {
        self.boot_config.lock().unwrap().clone()
    }

    /// Install the boot configuration. The config's display name becomes
    /// the manager's display name.
    pub fn set_boot_config(&self, config: BootConfig) {
        *self.app_display_name.lock().unwrap() = config.app_display_name.clone();
        *self.boot_config.lock().unwrap() = Some(config);
    }

    pub fn boot_config_source(&self) -> Option<String> {
        self.boot_config_source.lock().unwrap().clone()
    }

    pub fn set_boot_config_source(&self, source: impl Into<String>) {
        *self.boot_config_source.lock().unwrap() = Some(source.into());
    }

    /// Branded login path from the boot config, if one is set
    pub fn brand_login_path(&self) -> Option<String> {
        self.boot_config
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|config| config.brand_login_path.clone())
    }

    // ─── Authentication settings ───

    pub fn preferred_passcode_provider(&self) -> String {
        self.preferred_passcode_provider.lock().unwrap().clone()
    }

    pub fn set_preferred_passcode_provider(&self, provider: impl Into<String>) {
        *self.preferred_passcode_provider.lock().unwrap() = provider.into();
    }

    pub fn idp_app_scheme(&self) -> Option<String> {
        self.idp_app_scheme.lock().unwrap().clone()
    }

    pub fn set_idp_app_scheme(&self, scheme: Option<String>) {
        *self.idp_app_scheme.lock().unwrap() = scheme;
    }

    /// Whether this app acts as an identity provider for other apps
    pub fn is_identity_provider(&self) -> bool {
        self.is_identity_provider.load(Ordering::SeqCst)
    }

    pub fn set_is_identity_provider(&self, value: bool) {
        self.is_identity_provider.store(value, Ordering::SeqCst);
    }

    pub fn use_legacy_authentication_manager(&self) -> bool {
        self.use_legacy_authentication_manager.load(Ordering::SeqCst)
    }

    pub fn set_use_legacy_authentication_manager(&self, value: bool) {
        self.use_legacy_authentication_manager
            .store(value, Ordering::SeqCst);
    }

    /// Replace the authenticator driving the launch pipeline
    pub fn set_authenticator(&self, authenticator: Box<dyn Authenticator>) {
        debug!(name = authenticator.name(), "Authenticator replaced");
        *self.authenticator.lock().unwrap() = authenticator;
    }

    pub fn authenticator_name(&self) -> String {
        self.authenticator.lock().unwrap().name().to_string()
    }

    // ─── Hooks ───

    pub fn set_post_launch_hook(&self, hook: impl Fn(LaunchActions) + Send + Sync + 'static) {
        self.hooks.lock().unwrap().post_launch = Some(Arc::new(hook));
    }

    pub fn set_launch_error_hook(&self, hook: impl Fn(&Error) + Send + Sync + 'static) {
        self.hooks.lock().unwrap().launch_error = Some(Arc::new(hook));
    }

    pub fn set_post_logout_hook(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.hooks.lock().unwrap().post_logout = Some(Arc::new(hook));
    }

    pub fn set_switch_user_hook(
        &self,
        hook: impl Fn(Option<&UserAccount>, &UserAccount) + Send + Sync + 'static,
    ) {
        self.hooks.lock().unwrap().switch_user = Some(Arc::new(hook));
    }

    pub fn set_post_foreground_hook(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.hooks.lock().unwrap().post_foreground = Some(Arc::new(hook));
    }

    pub fn set_snapshot_create_hook(
        &self,
        hook: impl Fn() -> SnapshotSpec + Send + Sync + 'static,
    ) {
        self.hooks.lock().unwrap().snapshot_create = Some(Arc::new(hook));
    }

    pub fn set_snapshot_present_hook(&self, hook: impl Fn(&SnapshotSpec) + Send + Sync + 'static) {
        self.hooks.lock().unwrap().snapshot_present = Some(Arc::new(hook));
    }

    pub fn set_snapshot_dismiss_hook(&self, hook: impl Fn(&SnapshotSpec) + Send + Sync + 'static) {
        self.hooks.lock().unwrap().snapshot_dismiss = Some(Arc::new(hook));
    }

    pub fn set_user_agent_hook(&self, hook: impl Fn(&str) -> String + Send + Sync + 'static) {
        self.hooks.lock().unwrap().user_agent = Some(Arc::new(hook));
    }

    pub fn set_passcode_gate_hook(
        &self,
        hook: impl Fn() -> Result<()> + Send + Sync + 'static,
    ) {
        self.hooks.lock().unwrap().passcode_gate = Some(Arc::new(hook));
    }

    pub fn set_login_flow_selection_hook(
        &self,
        hook: impl Fn(&crate::auth::LoginFlowContext) -> crate::auth::LoginFlow
            + Send
            + Sync
            + 'static,
    ) {
        self.hooks.lock().unwrap().idp_login_flow_selection = Some(Arc::new(hook));
    }

    pub fn set_user_selection_hook(
        &self,
        hook: impl Fn(&[UserAccount]) -> Option<UserAccount> + Send + Sync + 'static,
    ) {
        self.hooks.lock().unwrap().idp_user_selection = Some(Arc::new(hook));
    }

    // ─── Lifecycle delegates ───

    /// Register a lifecycle delegate. The registry holds a weak reference;
    /// the delegate stops receiving events when the caller drops its `Arc`.
    pub fn add_delegate<D>(&self, delegate: &Arc<D>)
    where
        D: SdkManagerDelegate + 'static,
    {
        let handle: Arc<dyn SdkManagerDelegate> = delegate.clone();
        self.delegates.add(handle);
    }

    pub fn remove_delegate<D>(&self, delegate: &Arc<D>)
    where
        D: SdkManagerDelegate + 'static,
    {
        let handle: Arc<dyn SdkManagerDelegate> = delegate.clone();
        self.delegates.remove(&handle);
    }

    /// Number of live registered delegates
    pub fn delegate_count(&self) -> usize {
        self.delegates.len()
    }

    /// Fan an app lifecycle event out to delegates, then apply the built-in
    /// behavior: backgrounding raises the snapshot view, foregrounding
    /// dismisses it and runs the `post_foreground` hook.
    pub fn handle_lifecycle_event(&self, event: LifecycleEvent) {
        debug!(event = %event, "Lifecycle event");
        self.delegates.notify(event);

        match event {
            LifecycleEvent::DidEnterBackground => self.activate_snapshot(),
            LifecycleEvent::WillEnterForeground => {
                self.deactivate_snapshot();
                let hook = self.hooks.lock().unwrap().post_foreground.clone();
                if let Some(hook) = hook {
                    hook();
                }
            }
            LifecycleEvent::WillResignActive | LifecycleEvent::DidBecomeActive => {}
        }
    }

    // ─── Accounts ───

    pub fn current_account(&self) -> Option<UserAccount> {
        self.accounts.lock().unwrap().current().cloned()
    }

    /// Store an account and make it current
    pub fn set_current_account(&self, account: UserAccount) {
        self.accounts.lock().unwrap().set_current(account);
    }

    pub fn stored_accounts(&self) -> Vec<UserAccount> {
        self.accounts.lock().unwrap().accounts().to_vec()
    }

    /// Sign the current user out and run the `post_logout` hook
    pub fn logout(&self) {
        let previous = self.accounts.lock().unwrap().clear_current();
        match previous {
            Some(account) => info!(user = %account.username, "Logged out"),
            None => debug!("Logout with no current account"),
        }

        let hook = self.hooks.lock().unwrap().post_logout.clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    /// Make `account` current and run the `switch_user` hook with the
    /// outgoing and incoming accounts
    pub fn switch_user(&self, account: UserAccount) {
        let previous = self.accounts.lock().unwrap().set_current(account.clone());
        info!(user = %account.username, "Switched user");

        let hook = self.hooks.lock().unwrap().switch_user.clone();
        if let Some(hook) = hook {
            hook(previous.as_ref(), &account);
        }
    }
}

impl Default for SdkManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SdkManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkManager")
            .field("app_kind", &self.app_kind())
            .field("app_display_name", &self.app_display_name())
            .field("is_launching", &self.is_launching())
            .field("last_launch_actions", &self.last_launch_actions())
            .field("snapshot_active", &self.snapshot_active())
            .field("delegates", &self.delegate_count())
            .field("current_account", &self.current_account())
            .finish_non_exhaustive()
    }
}

fn default_analytics_app_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| SDK_NAME.to_string())
}
