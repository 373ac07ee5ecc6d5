//! Configuration file parsing for Terminal Warden
//!
//! Supports:
//! - `.twarden/bootconfig.toml` - App identity and launch behavior
//! - `.twarden/settings.toml` - Shell behavior settings

pub mod boot;
pub mod settings;
pub mod types;
pub mod writer;

pub use boot::{
    load_boot_config, BootConfigSource, BOOT_CONFIG_ENV, BOOT_CONFIG_FILENAME, TWARDEN_DIR,
};
pub use settings::{load_settings, SETTINGS_FILENAME};
pub use types::*;
pub use writer::save_settings;
