//! Snapshot privacy overlay
//!
//! Full-screen cover drawn while the shell is backgrounded so no session
//! content stays visible. Drawn last, over every other widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};
use twarden_app::SnapshotSpec;

use crate::theme::{icons, palette};

use super::modal_overlay;

/// Privacy overlay rendering a [`SnapshotSpec`]
pub struct SnapshotView<'a> {
    spec: &'a SnapshotSpec,
}

impl<'a> SnapshotView<'a> {
    pub fn new(spec: &'a SnapshotSpec) -> Self {
        Self { spec }
    }
}

impl Widget for SnapshotView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Replace every cell; underlying content must not bleed through
        modal_overlay::clear_area(buf, area);

        let fill_style = Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::SNAPSHOT_BG);

        let y_end = area.y.saturating_add(area.height);
        let x_end = area.x.saturating_add(area.width);
        for y in area.y..y_end {
            for x in area.x..x_end {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(icons::SHADE);
                    cell.set_style(fill_style);
                }
            }
        }

        if let SnapshotSpec::Branded { title } = self.spec {
            let strip_width = (title.len() as u16).saturating_add(4).min(area.width);
            let strip = modal_overlay::centered_rect(strip_width, 1, area);
            modal_overlay::clear_area(buf, strip);

            let brand = Paragraph::new(title.as_str())
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(palette::SNAPSHOT_TITLE)
                        .bg(palette::SNAPSHOT_BG)
                        .add_modifier(Modifier::DIM),
                );
            brand.render(strip, buf);
        }
    }
}
