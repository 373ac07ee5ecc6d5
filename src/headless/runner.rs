//! Headless mode runner - main event loop without TUI
//!
//! Drives the same state machine as the TUI through stdin commands and
//! emits JSON events to stdout for E2E testing. Lifecycle fan-out is
//! observed through a registered delegate; everything else comes from the
//! manager's hook slots.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use twarden_app::manager::SdkManagerDelegate;
use twarden_app::message::Message;
use twarden_app::process::{process_message, spawn_launch};
use twarden_app::state::ShellState;
use twarden_app::{SdkManager, ShellSettings};
use twarden_core::{LifecycleEvent, Result};

use super::HeadlessEvent;

const MESSAGE_CHANNEL_SIZE: usize = 256;

/// Emits a JSON event for every lifecycle transition the manager fans out
struct LifecycleEmitter;

impl SdkManagerDelegate for LifecycleEmitter {
    fn will_resign_active(&self) {
        HeadlessEvent::lifecycle(LifecycleEvent::WillResignActive.as_str()).emit();
    }

    fn did_become_active(&self) {
        HeadlessEvent::lifecycle(LifecycleEvent::DidBecomeActive.as_str()).emit();
    }

    fn will_enter_foreground(&self) {
        HeadlessEvent::lifecycle(LifecycleEvent::WillEnterForeground.as_str()).emit();
    }

    fn did_enter_background(&self) {
        HeadlessEvent::lifecycle(LifecycleEvent::DidEnterBackground.as_str()).emit();
    }
}

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(manager: &'static SdkManager, settings: ShellSettings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Terminal Warden starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut state = ShellState::new(settings);
    state.display_name = manager.app_display_name();

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_SIZE);

    install_observers(manager, &msg_tx);

    // The registry holds delegates weakly; the Arc must outlive the loop
    let lifecycle_emitter = Arc::new(LifecycleEmitter);
    manager.add_delegate(&lifecycle_emitter);

    // Spawn headless-specific stdin reader
    let stdin_tx = msg_tx.clone();
    std::thread::spawn(move || {
        stdin_reader_blocking(stdin_tx);
    });

    // Headless always launches immediately
    HeadlessEvent::launch_started().emit();
    spawn_launch(manager);

    // Main event loop
    loop {
        if state.should_quit {
            info!("Quit requested");
            break;
        }

        match msg_rx.recv().await {
            Some(message) => process_message(&mut state, manager, message),
            None => {
                info!("Message channel closed");
                break;
            }
        }
    }

    manager.remove_delegate(&lifecycle_emitter);
    info!("Terminal Warden headless mode exiting");
    Ok(())
}

/// Wire the manager's hook slots to JSON emission. Launch outcomes are
/// also forwarded into the message channel so the state machine sees them.
fn install_observers(manager: &'static SdkManager, msg_tx: &mpsc::Sender<Message>) {
    let tx = msg_tx.clone();
    manager.set_post_launch_hook(move |actions| {
        let user = manager.current_account().map(|account| account.username);
        HeadlessEvent::launch_succeeded(actions.describe(), user).emit();
        if tx.try_send(Message::LaunchSucceeded { actions }).is_err() {
            warn!("Dropping launch result; message channel is full");
        }
    });

    let tx = msg_tx.clone();
    manager.set_launch_error_hook(move |err| {
        let message = err.to_string();
        HeadlessEvent::launch_failed(message.clone()).emit();
        if tx.try_send(Message::LaunchFailed { message }).is_err() {
            warn!("Dropping launch error; message channel is full");
        }
    });

    manager.set_post_logout_hook(|| {
        HeadlessEvent::logged_out().emit();
    });

    manager.set_switch_user_hook(|old, new| {
        HeadlessEvent::user_switched(old, new).emit();
    });

    // Paired, so the manager treats them as the presentation channel
    manager.set_snapshot_present_hook(|spec| {
        HeadlessEvent::snapshot_presented(spec).emit();
    });
    manager.set_snapshot_dismiss_hook(|spec| {
        HeadlessEvent::snapshot_dismissed(spec).emit();
    });
}

/// Map one stdin line to a shell message
fn parse_command(line: &str) -> Option<Message> {
    match line {
        "b" | "background" => Some(Message::FocusLost),
        "f" | "foreground" => Some(Message::FocusGained),
        "l" | "logout" => Some(Message::Logout),
        "r" | "retry" => Some(Message::RetryLaunch),
        "q" | "quit" => Some(Message::Quit),
        _ => None,
    }
}

/// Read commands from stdin and send them to the message channel
fn stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match parse_command(trimmed) {
                    Some(msg) => {
                        info!("Stdin command: {}", trimmed);
                        let quit = matches!(&msg, Message::Quit);
                        let _ = msg_tx.blocking_send(msg);
                        if quit {
                            break;
                        }
                    }
                    None => {
                        warn!("Unknown stdin command: {}", trimmed);
                    }
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_background_commands() {
        assert_eq!(parse_command("b"), Some(Message::FocusLost));
        assert_eq!(parse_command("background"), Some(Message::FocusLost));
        assert_eq!(parse_command("f"), Some(Message::FocusGained));
        assert_eq!(parse_command("foreground"), Some(Message::FocusGained));
    }

    #[test]
    fn test_parse_control_commands() {
        assert_eq!(parse_command("l"), Some(Message::Logout));
        assert_eq!(parse_command("r"), Some(Message::RetryLaunch));
        assert_eq!(parse_command("q"), Some(Message::Quit));
        assert_eq!(parse_command("quit"), Some(Message::Quit));
    }

    #[test]
    fn test_unknown_command_is_none() {
        assert_eq!(parse_command("reload"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_lifecycle_emitter_registers_and_removes() {
        let manager: &'static SdkManager = Box::leak(Box::new(SdkManager::new()));
        let emitter = Arc::new(LifecycleEmitter);

        manager.add_delegate(&emitter);
        assert_eq!(manager.delegate_count(), 1);

        manager.remove_delegate(&emitter);
        assert_eq!(manager.delegate_count(), 0);
    }
}
