//! Application shell engine for Terminal Warden
//!
//! This crate owns everything between the terminal frontend and the core
//! types: the [`SdkManager`] singleton with its launch pipeline, hooks,
//! lifecycle delegates, and snapshot privacy view; the loading view
//! service; authentication plumbing; configuration loading; and the TEA
//! state machine (`Message` in, `ShellState` mutated, `UpdateAction` out)
//! that frontends drive.
//!
//! The crate is terminal-agnostic. Rendering and raw input live in the
//! TUI crate; headless hosts feed [`Message`]s straight into [`update`].

pub mod auth;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod loading;
pub mod manager;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Core surface
pub use manager::{DevAction, SdkManager, SdkManagerDelegate, SnapshotSpec};

// Shell state machine
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{DevDialogState, ShellState, UiMode};

// Loading view
pub use loading::{LoadingViewService, LoadingViewState};

// Authentication
pub use auth::{
    AccountStore, AuthContext, AuthOutcome, Authenticator, ConfigAuthenticator, LoginFlow,
    LoginFlowContext,
};

// Configuration
pub use config::{
    load_boot_config, load_settings, save_settings, BootConfig, BootConfigSource, DevSettings,
    LoadingSettings, ProfileConfig, ShellSettings, SnapshotSettings,
};
