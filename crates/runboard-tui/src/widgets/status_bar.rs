//! Status bar widget
//!
//! Pagination, refresh state, last-updated time and any fetch error.

use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use runboard_app::AppState;

use crate::theme::{palette, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
    now: DateTime<Utc>,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, now: DateTime<Utc>) -> Self {
        Self { state, now }
    }

    fn pagination(&self) -> Vec<Span<'static>> {
        let view = &self.state.view;
        let runs = &self.state.runs;
        let arrow = |enabled: bool, symbol: &'static str| {
            if enabled {
                Span::styled(symbol, styles::keybinding())
            } else {
                Span::styled(symbol, styles::text_muted())
            }
        };
        vec![
            Span::raw(" "),
            arrow(view.has_previous_page(), "◀"),
            Span::raw(" "),
            Span::styled(view.page_label(runs), styles::text_primary()),
            Span::raw(" "),
            arrow(view.has_next_page(runs), "▶"),
        ]
    }

    fn refresh_state(&self) -> Vec<Span<'static>> {
        let refresh = &self.state.refresh;
        let mut spans = vec![Span::styled("  │ ", styles::text_muted())];

        if refresh.is_refreshing() {
            spans.push(Span::styled("↻ Refreshing…", styles::status_yellow()));
        } else if let Some(label) = refresh.last_updated_label(self.now) {
            spans.push(Span::styled(format!("Updated {}", label), styles::text_secondary()));
        } else {
            spans.push(Span::styled("Never updated", styles::text_muted()));
        }

        for flow in [&self.state.cancel_flow, &self.state.delete_flow] {
            for target in flow.in_flight() {
                spans.push(Span::styled("  │ ", styles::text_muted()));
                spans.push(Span::styled(
                    format!("{} {}…", flow.kind().label(), target.label),
                    styles::status_yellow(),
                ));
            }
        }

        if let Some(error) = refresh.error() {
            spans.push(Span::styled("  │ ", styles::text_muted()));
            spans.push(Span::styled(format!("✗ {}", error), styles::status_red()));
            // `r` is ignored until the running refresh settles
            if !refresh.is_refreshing() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled("[r]", styles::keybinding()));
                spans.push(Span::styled(" Retry", styles::text_secondary()));
            }
        }

        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));

        let mut spans = self.pagination();
        spans.extend(self.refresh_state());

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
