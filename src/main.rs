//! Terminal Warden - an application-shell SDK for secure terminal apps
//!
//! This is the reference host binary. All logic lives in the library
//! crates; main wires configuration into the shared SDK manager and picks
//! a frontend.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use terminal_warden::{
    load_boot_config, load_settings, run_headless, run_shell, Error, Result, SdkManager,
    SnapshotSpec,
};

/// Terminal Warden - an application-shell SDK for secure terminal apps
#[derive(Parser, Debug)]
#[command(name = "twarden")]
#[command(about = "A lifecycle-managed shell for secure terminal apps", long_about = None)]
struct Args {
    /// Project directory holding .twarden/ configuration
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Explicit boot config path (overrides discovery)
    #[arg(long, value_name = "FILE")]
    boot_config: Option<PathBuf>,

    /// Skip authentication even when the boot config requests it
    #[arg(long)]
    no_auth: bool,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    twarden_core::logging::init()?;

    let project_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    info!("Project path: {}", project_path.display());

    let (mut boot_config, source) = load_boot_config(&project_path, args.boot_config.as_deref())?;
    if args.no_auth {
        boot_config.should_authenticate = false;
    }
    let settings = load_settings(&project_path);

    let manager = configure_manager(boot_config, source.label(), &settings);

    let result = if args.headless {
        run_headless(manager, settings).await
    } else {
        run_shell(manager, settings).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Terminal Warden exiting");
    result
}

/// Push the loaded configuration into the process-wide SDK manager
fn configure_manager(
    boot_config: terminal_warden::BootConfig,
    source_label: String,
    settings: &terminal_warden::ShellSettings,
) -> &'static SdkManager {
    let manager = SdkManager::shared();

    manager.set_boot_config(boot_config);
    manager.set_boot_config_source(source_label);
    manager.set_app_version(env!("CARGO_PKG_VERSION"));
    manager.set_use_snapshot_view(settings.snapshot.use_snapshot_view);

    if settings.snapshot.branded {
        manager.set_snapshot_create_hook(move || SnapshotSpec::Branded {
            title: SdkManager::shared().app_display_name(),
        });
    }

    manager
}
