//! # twarden-core - Core Domain Types
//!
//! Foundation crate for Terminal Warden. Provides domain types, error
//! handling, lifecycle event definitions, the user-agent builder, and the
//! persisted device identifier.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, bitflags, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AppKind`] - Host application flavor (Native, Hybrid, Headless)
//! - [`UserAccount`] - A signed-in account as seen by the shell
//! - [`SDK_NAME`], [`SDK_VERSION`] - Identification constants
//!
//! ### Lifecycle (`events`)
//! - [`LifecycleEvent`] - The four terminal lifecycle transitions fanned out
//!   to delegates (WillResignActive, DidBecomeActive, WillEnterForeground,
//!   DidEnterBackground)
//! - [`LaunchActions`] - Bitflags describing what the launch pipeline did
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### User Agent (`user_agent`)
//! - [`user_agent::build()`] - Compose the canonical user-agent string
//!
//! ### Device Identity (`device_id`)
//! - [`device_id::device_id()`] - Stable per-install identifier, generated
//!   once and persisted
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use twarden_core::prelude::*;
//! ```

pub mod device_id;
pub mod error;
pub mod events;
pub mod logging;
pub mod types;
pub mod user_agent;

/// Prelude for common imports used throughout all Terminal Warden crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use events::{LaunchActions, LifecycleEvent};
pub use types::{AppKind, UserAccount, SDK_NAME, SDK_VERSION};
