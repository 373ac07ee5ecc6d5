//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use twarden_app::loading::LoadingViewService;
use twarden_app::state::{ShellState, UiMode};
use twarden_app::SnapshotSpec;

use crate::layout;
use crate::theme::palette;
use crate::widgets;

/// Below this width the compact status bar is used
const COMPACT_WIDTH_THRESHOLD: u16 = 60;

/// Render the complete UI (View function in TEA)
///
/// Pure over the shell state; the only process-global it consults is the
/// loading view service, which renders a modal whenever a view is shown.
/// The snapshot overlay is drawn last so nothing paints above it.
pub fn view(frame: &mut Frame, state: &ShellState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let header = widgets::ShellHeader::new(&state.display_name, state);
    frame.render_widget(header, areas.header);

    frame.render_widget(
        widgets::LifecycleLog::new(&state.lifecycle_log),
        areas.content,
    );

    if area.width < COMPACT_WIDTH_THRESHOLD {
        frame.render_widget(widgets::StatusBarCompact::new(state), areas.status);
    } else {
        frame.render_widget(widgets::StatusBar::new(state), areas.status);
    }

    // Render modal overlays based on UI mode
    match state.ui_mode {
        UiMode::Launching | UiMode::Normal => {}
        UiMode::LaunchFailed => {
            let message = state
                .launch_error
                .as_deref()
                .unwrap_or("Launch failed for an unknown reason");
            frame.render_widget(widgets::LaunchErrorView::new(message), area);
        }
        UiMode::DevDialog => {
            if let Some(dialog) = &state.dev_dialog {
                frame.render_widget(widgets::DevDialog::new(dialog), area);
            }
        }
        UiMode::DevInfo => {
            frame.render_widget(widgets::DevInfoPanel::new(&state.dev_infos), area);
        }
    }

    // Loading modal whenever the service holds a visible view
    if let Some(loading) = LoadingViewService::shared().view() {
        frame.render_widget(widgets::LoadingView::new(&loading), area);
    }

    // Snapshot privacy overlay covers everything
    if state.snapshot_active {
        let spec = state.snapshot_spec.clone().unwrap_or(SnapshotSpec::Blank);
        frame.render_widget(widgets::SnapshotView::new(&spec), area);
    }
}
