//! Authentication seam for the launch pipeline
//!
//! The manager never talks to an identity service itself. It hands an
//! [`AuthContext`] to the installed [`Authenticator`] and acts on the
//! [`AuthOutcome`]. The default [`ConfigAuthenticator`] trusts the local
//! session (configured profile, falling back to the OS user), which keeps
//! the reference shell runnable without any backing service.

use twarden_core::prelude::*;
use twarden_core::UserAccount;

/// Which login flow the launch pipeline should take.
///
/// Chosen by the `idp_login_flow_selection` hook when one is installed,
/// otherwise `Local`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFlow {
    /// Authenticate directly against the configured login host
    #[default]
    Local,
    /// Route through an external identity provider app
    IdentityProvider,
}

impl LoginFlow {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginFlow::Local => "local",
            LoginFlow::IdentityProvider => "identity-provider",
        }
    }
}

/// Inputs to the login-flow selection hook.
#[derive(Debug, Clone)]
pub struct LoginFlowContext {
    /// Login host from the boot config
    pub login_host: String,
    /// Whether any accounts are already stored for this process
    pub has_stored_accounts: bool,
    /// Whether this app is itself configured as an identity provider
    pub is_identity_provider: bool,
}

/// Everything an authenticator gets to see for one launch attempt.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Login host from the boot config
    pub login_host: String,
    /// Branded login path, if the boot config carries one
    pub brand_login_path: Option<String>,
    /// Flow resolved by the selection hook (or `Local`)
    pub login_flow: LoginFlow,
    /// Username from the boot config `[profile]` section
    pub profile_username: Option<String>,
    /// Display name from the boot config `[profile]` section
    pub profile_display_name: Option<String>,
    /// Preferred credential-verification provider (informational)
    pub passcode_provider: String,
    /// Legacy-manager compatibility flag, surfaced to custom authenticators
    pub use_legacy_manager: bool,
}

/// What an authentication attempt produced.
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    /// A signed-in account; the pipeline completes immediately.
    Authenticated(UserAccount),

    /// The authenticator took over completion. The launch stays in
    /// progress until the host calls `auth_validated_to_post_auth` or
    /// `send_launch_error` on the manager.
    Deferred,
}

/// Pluggable authentication strategy used by `SdkManager::launch`.
#[cfg_attr(test, mockall::automock)]
pub trait Authenticator: Send + Sync {
    /// Short name surfaced in dev support info
    fn name(&self) -> &str;

    /// Run the authentication flow for one launch attempt
    fn authenticate(&self, ctx: &AuthContext) -> Result<AuthOutcome>;
}

/// Default authenticator: resolves an identity from the boot config
/// profile, falling back to the OS user. No credentials are checked;
/// hosts wanting real verification install a `passcode_gate` hook or
/// their own [`Authenticator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigAuthenticator;

impl Authenticator for ConfigAuthenticator {
    fn name(&self) -> &str {
        "config"
    }

    fn authenticate(&self, ctx: &AuthContext) -> Result<AuthOutcome> {
        let username = ctx
            .profile_username
            .clone()
            .or_else(local_username)
            .ok_or_else(|| {
                Error::auth("no profile configured and no local user to fall back to")
            })?;

        debug!(username = %username, flow = ctx.login_flow.as_str(), "Resolved local identity");

        let mut account = UserAccount::new(format!("local:{}", username), username);
        if let Some(display_name) = ctx.profile_display_name.clone() {
            account = account.with_display_name(display_name);
        }
        Ok(AuthOutcome::Authenticated(account))
    }
}

fn local_username() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|name| !name.is_empty())
}

// ─────────────────────────────────────────────────────────────────────────────
// Account store
// ─────────────────────────────────────────────────────────────────────────────

/// In-process registry of signed-in accounts and the current selection.
#[derive(Debug, Clone, Default)]
pub struct AccountStore {
    accounts: Vec<UserAccount>,
    current_id: Option<String>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored accounts, in insertion order
    pub fn accounts(&self) -> &[UserAccount] {
        &self.accounts
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// The currently selected account, if any
    pub fn current(&self) -> Option<&UserAccount> {
        let id = self.current_id.as_deref()?;
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Insert or replace by id, and make it current. Returns the account
    /// that was current before the switch.
    pub fn set_current(&mut self, account: UserAccount) -> Option<UserAccount> {
        let previous = self.current().cloned();
        match self.accounts.iter_mut().find(|a| a.id == account.id) {
            Some(slot) => *slot = account.clone(),
            None => self.accounts.push(account.clone()),
        }
        self.current_id = Some(account.id);
        previous
    }

    /// Drop the current selection, keeping the account stored. Returns the
    /// account that was signed in.
    pub fn clear_current(&mut self) -> Option<UserAccount> {
        let previous = self.current().cloned();
        self.current_id = None;
        previous
    }

    /// Remove an account entirely; clears the selection if it was current.
    pub fn remove(&mut self, id: &str) {
        self.accounts.retain(|a| a.id != id);
        if self.current_id.as_deref() == Some(id) {
            self.current_id = None;
        }
    }
}
