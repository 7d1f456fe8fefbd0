//! Modal dialog widget for confirmations and action results

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub use runboard_app::confirm_dialog::ConfirmDialogState;

use super::modal_overlay::{centered_rect, dim_background, render_shadow};
use crate::theme::styles;

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 9;

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    /// `[y] Yes  [n] No`, or `[Enter] OK` for single-button dialogs
    fn buttons(&self) -> Line<'static> {
        let keys: &[&str] = match self.state.options.len() {
            1 => &["Enter"],
            _ => &["y", "n"],
        };
        let mut spans = Vec::new();
        for (key, (label, _)) in keys.iter().zip(&self.state.options) {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("[{}]", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {}", label), styles::text_primary()));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal_area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        ratatui::widgets::Clear.render(modal_area, buf);
        render_shadow(buf, modal_area);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Min(2),    // Message
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Spacer
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(styles::text_primary())
            .render(chunks[1], buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}
