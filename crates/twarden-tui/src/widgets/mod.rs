//! Widgets for the shell TUI
//!
//! Each widget is a thin render-only view over state owned by the
//! app layer. Widgets never mutate state.

pub mod dev_dialog;
pub mod dev_info;
pub mod header;
pub mod launch_error;
pub mod lifecycle_log;
pub mod loading_view;
pub mod modal_overlay;
pub mod snapshot_view;
pub mod status_bar;

pub use dev_dialog::DevDialog;
pub use dev_info::DevInfoPanel;
pub use header::ShellHeader;
pub use launch_error::LaunchErrorView;
pub use lifecycle_log::LifecycleLog;
pub use loading_view::LoadingView;
pub use snapshot_view::SnapshotView;
pub use status_bar::{StatusBar, StatusBarCompact};
