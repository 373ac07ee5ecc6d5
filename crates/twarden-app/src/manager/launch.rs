//! Guarded launch pipeline and its public continuations
//!
//! `launch` is the single entry point into the startup sequence. The
//! in-progress flag stays raised until one of the two continuations runs,
//! which is what lets a deferring authenticator finish the launch from its
//! own flow.

use std::sync::atomic::Ordering;

use twarden_core::prelude::*;
use twarden_core::{LaunchActions, UserAccount};

use crate::auth::{AuthContext, AuthOutcome, LoginFlow, LoginFlowContext};
use crate::config::BootConfig;

use super::SdkManager;

impl SdkManager {
    /// Kick off the launch sequence.
    ///
    /// Returns false, with no side effects, when a launch is already in
    /// progress. Pipeline failures do not affect the return value; they are
    /// delivered to the `launch_error` hook.
    pub fn launch(&self) -> bool {
        if self.launching.swap(true, Ordering::SeqCst) {
            warn!("launch() called while a launch is already in progress");
            return false;
        }

        info!("Launch sequence started");
        match self.run_launch_pipeline() {
            Ok(Some(actions)) => self.auth_validated_to_post_auth(actions),
            Ok(None) => info!("Launch handed off to the authenticator"),
            Err(err) => self.send_launch_error(err),
        }
        true
    }

    fn run_launch_pipeline(&self) -> Result<Option<LaunchActions>> {
        let boot = self.boot_config().ok_or(Error::BootConfigMissing)?;

        let mut actions = LaunchActions::empty();

        let gate = self.hooks.lock().unwrap().passcode_gate.clone();
        if let Some(gate) = gate {
            gate()?;
            actions |= LaunchActions::PASSCODE_VERIFIED;
            debug!("Credential gate passed");
        }

        if !boot.should_authenticate {
            info!("Authentication bypassed by boot config");
            return Ok(Some(actions | LaunchActions::AUTH_BYPASSED));
        }

        if let Some(account) = self.resume_stored_account() {
            info!(user = %account.username, "Resuming stored account");
            self.accounts.lock().unwrap().set_current(account);
            return Ok(Some(actions | LaunchActions::ALREADY_AUTHENTICATED));
        }

        let flow = self.select_login_flow(&boot);
        debug!(flow = flow.as_str(), "Login flow resolved");

        let ctx = self.auth_context(&boot, flow);
        let outcome = self.authenticator.lock().unwrap().authenticate(&ctx)?;
        match outcome {
            AuthOutcome::Authenticated(account) => {
                info!(user = %account.username, "Authentication verified");
                self.accounts.lock().unwrap().set_current(account);
                Ok(Some(actions | LaunchActions::AUTH_VERIFIED))
            }
            AuthOutcome::Deferred => Ok(None),
        }
    }

    /// Resume path: when accounts are already stored, the user selection
    /// hook (or the current/first account) decides who signs back in.
    /// A hook returning `None` forces a fresh authentication.
    fn resume_stored_account(&self) -> Option<UserAccount> {
        let stored = self.accounts.lock().unwrap().accounts().to_vec();
        if stored.is_empty() {
            return None;
        }

        let selection = self.hooks.lock().unwrap().idp_user_selection.clone();
        match selection {
            Some(select) => select(&stored),
            None => {
                let accounts = self.accounts.lock().unwrap();
                accounts
                    .current()
                    .cloned()
                    .or_else(|| stored.first().cloned())
            }
        }
    }

    fn select_login_flow(&self, boot: &BootConfig) -> LoginFlow {
        let selection = self.hooks.lock().unwrap().idp_login_flow_selection.clone();
        let Some(select) = selection else {
            return LoginFlow::default();
        };

        let ctx = LoginFlowContext {
            login_host: boot.login_host.clone(),
            has_stored_accounts: !self.accounts.lock().unwrap().is_empty(),
            is_identity_provider: self.is_identity_provider(),
        };
        select(&ctx)
    }

    fn auth_context(&self, boot: &BootConfig, flow: LoginFlow) -> AuthContext {
        AuthContext {
            login_host: boot.login_host.clone(),
            brand_login_path: boot.brand_login_path.clone(),
            login_flow: flow,
            profile_username: boot.profile.username.clone(),
            profile_display_name: boot.profile.display_name.clone(),
            passcode_provider: self.preferred_passcode_provider(),
            use_legacy_manager: self.use_legacy_authentication_manager(),
        }
    }

    /// Public continuation for a launch that validated successfully.
    ///
    /// Clears the in-progress flag, records the launch descriptor, and
    /// invokes the `post_launch` hook. Deferring authenticators call this
    /// once their own flow completes.
    pub fn auth_validated_to_post_auth(&self, actions: LaunchActions) {
        self.launching.store(false, Ordering::SeqCst);
        *self.last_launch_actions.lock().unwrap() = Some(actions);
        info!("Launch completed: {}", actions.describe());

        let hook = self.hooks.lock().unwrap().post_launch.clone();
        if let Some(hook) = hook {
            hook(actions);
        }
    }

    /// Public continuation for a launch that failed.
    ///
    /// Clears the in-progress flag and delivers the error to the
    /// `launch_error` hook.
    pub fn send_launch_error(&self, error: Error) {
        self.launching.store(false, Ordering::SeqCst);
        error!("Launch failed: {}", error);

        let hook = self.hooks.lock().unwrap().launch_error.clone();
        if let Some(hook) = hook {
            hook(&error);
        }
    }

    /// True from a successful `launch` kick-off until a continuation runs
    pub fn is_launching(&self) -> bool {
        self.launching.load(Ordering::SeqCst)
    }

    /// Descriptor recorded by the most recent completed launch
    pub fn last_launch_actions(&self) -> Option<LaunchActions> {
        *self.last_launch_actions.lock().unwrap()
    }
}
