//! Terminal Warden Library
//!
//! An application-shell SDK for secure terminal apps: a process-wide
//! manager that guards the launch pipeline, fans lifecycle transitions
//! out to registered delegates, and obscures the screen with a privacy
//! snapshot while the app is backgrounded.

// Module declarations
pub mod headless;

// Re-export the SDK surface for hosts
pub use twarden_core::{Error, LaunchActions, LifecycleEvent, Result, UserAccount};

pub use twarden_app::{
    load_boot_config, load_settings, save_settings, AccountStore, AuthContext, AuthOutcome,
    Authenticator, BootConfig, BootConfigSource, ConfigAuthenticator, DevAction,
    LoadingViewService, Message, ProfileConfig, SdkManager, SdkManagerDelegate, ShellSettings,
    ShellState, SnapshotSpec, UiMode,
};

// Re-export main entry points
pub use headless::runner::run_headless;
pub use twarden_tui::run_shell;
