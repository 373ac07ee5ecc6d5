//! Shell state (Model in TEA pattern)

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use twarden_core::{LaunchActions, LifecycleEvent, UserAccount};

use crate::config::ShellSettings;
use crate::manager::SnapshotSpec;

/// Most recent lifecycle transitions kept for the status pane
pub const LIFECYCLE_LOG_CAP: usize = 50;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Launch in progress - loading view over a blank screen
    #[default]
    Launching,

    /// Normal shell with header, lifecycle log, and status bar
    Normal,

    /// Launch failed - error screen with retry prompt
    LaunchFailed,

    /// Dev support action dialog over the normal screen
    DevDialog,

    /// Dev support info screen
    DevInfo,
}

/// Selection state for the dev support action dialog
#[derive(Debug, Clone, Default)]
pub struct DevDialogState {
    pub titles: Vec<String>,
    pub selected: usize,
}

impl DevDialogState {
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles,
            selected: 0,
        }
    }

    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.titles.len() {
            self.selected += 1;
        }
    }

    pub fn selected_title(&self) -> Option<&str> {
        self.titles.get(self.selected).map(String::as_str)
    }
}

/// Complete shell state driven by the update function.
///
/// Fields mirroring SDK manager state (`snapshot_active`, `current_user`,
/// `last_launch_actions`) exist so rendering never has to reach into the
/// manager's locks; the update function refreshes them on the messages
/// that change them.
#[derive(Debug, Clone)]
pub struct ShellState {
    /// Current UI mode
    pub ui_mode: UiMode,

    /// Shell settings loaded at startup
    pub settings: ShellSettings,

    /// App display name shown in the header
    pub display_name: String,

    /// Descriptor of the most recent completed launch
    pub last_launch_actions: Option<LaunchActions>,

    /// Rendered error from a failed launch
    pub launch_error: Option<String>,

    /// Dev action dialog, present while `ui_mode` is `DevDialog`
    pub dev_dialog: Option<DevDialogState>,

    /// Label/value rows for the dev info screen
    pub dev_infos: Vec<(String, String)>,

    /// Recent lifecycle transitions, newest last
    pub lifecycle_log: VecDeque<(DateTime<Local>, LifecycleEvent)>,

    /// Whether the snapshot privacy view is currently covering the screen
    pub snapshot_active: bool,

    /// What the raised snapshot overlay shows, present while active
    pub snapshot_spec: Option<SnapshotSpec>,

    /// Whether the app is logically backgrounded (set by focus handling)
    pub backgrounded: bool,

    /// Signed-in user, if any
    pub current_user: Option<UserAccount>,

    /// Set when the event loop should exit
    pub should_quit: bool,
}

impl ShellState {
    pub fn new(settings: ShellSettings) -> Self {
        Self {
            ui_mode: UiMode::default(),
            settings,
            display_name: "Terminal Warden".to_string(),
            last_launch_actions: None,
            launch_error: None,
            dev_dialog: None,
            dev_infos: Vec::new(),
            lifecycle_log: VecDeque::new(),
            snapshot_active: false,
            snapshot_spec: None,
            backgrounded: false,
            current_user: None,
            should_quit: false,
        }
    }

    /// Append a lifecycle transition, dropping the oldest past the cap
    pub fn record_lifecycle(&mut self, event: LifecycleEvent) {
        if self.lifecycle_log.len() == LIFECYCLE_LOG_CAP {
            self.lifecycle_log.pop_front();
        }
        self.lifecycle_log.push_back((Local::now(), event));
    }

    pub fn open_dev_dialog(&mut self, titles: Vec<String>) {
        self.dev_dialog = Some(DevDialogState::new(titles));
        self.ui_mode = UiMode::DevDialog;
    }

    pub fn close_dev_dialog(&mut self) {
        self.dev_dialog = None;
        self.ui_mode = UiMode::Normal;
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(ShellSettings::default())
    }
}
