//! Shell entry point and event loop
//!
//! `run_shell` owns the terminal for its whole lifetime: it installs the
//! panic hook, kicks off the first launch, then drives a synchronous
//! draw/poll loop until the state machine raises `should_quit`. Launch
//! results arrive through the manager's hooks, which forward into the
//! same message channel the signal handler uses.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{info, warn};

use twarden_app::message::Message;
use twarden_app::process::{process_message, spawn_launch};
use twarden_app::signals::spawn_signal_handler;
use twarden_app::state::ShellState;
use twarden_app::{LoadingViewService, SdkManager, ShellSettings};
use twarden_core::Result;

use crate::{event, render, terminal};

/// Channel capacity for messages from hooks and the signal handler
const MESSAGE_CHANNEL_SIZE: usize = 256;

/// Run the interactive shell against the process-wide SDK manager.
///
/// Returns when the user quits or the event loop fails. The terminal is
/// restored on the way out even when the loop errors.
pub async fn run_shell(manager: &'static SdkManager, settings: ShellSettings) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    terminal::enable_focus_reporting()?;

    let mut state = ShellState::new(settings);
    state.display_name = manager.app_display_name();

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_SIZE);

    spawn_signal_handler(msg_tx.clone());
    install_launch_hooks(manager, &msg_tx);

    // First launch starts before the loop so the loading modal has
    // something to wait on
    info!("Starting initial launch");
    LoadingViewService::shared().show_with_rotation(
        state.settings.loading.title.clone(),
        "",
        Duration::from_millis(state.settings.loading.rotation_ms),
    );
    spawn_launch(manager);

    let result = run_loop(&mut term, &mut state, manager, msg_rx);

    let _ = terminal::disable_focus_reporting();
    ratatui::restore();

    result
}

/// Forward launch outcomes from the manager's hook slots into the
/// message channel. Hooks run on the launch thread, so sends must not
/// block.
fn install_launch_hooks(manager: &SdkManager, msg_tx: &mpsc::Sender<Message>) {
    let tx = msg_tx.clone();
    manager.set_post_launch_hook(move |actions| {
        if tx.try_send(Message::LaunchSucceeded { actions }).is_err() {
            warn!("Dropping launch result; message channel is full");
        }
    });

    let tx = msg_tx.clone();
    manager.set_launch_error_hook(move |error| {
        let message = error.to_string();
        if tx.try_send(Message::LaunchFailed { message }).is_err() {
            warn!("Dropping launch error; message channel is full");
        }
    });
}

/// Synchronous draw/poll loop.
///
/// Each iteration drains pending channel messages, draws one frame, then
/// blocks on terminal input for up to the poll interval. Ticks from the
/// poll timeout keep the loading spinner advancing.
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut ShellState,
    manager: &'static SdkManager,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit {
        while let Ok(message) = msg_rx.try_recv() {
            process_message(state, manager, message);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, manager, message);
        }
    }

    info!("Shell loop exited");
    Ok(())
}
