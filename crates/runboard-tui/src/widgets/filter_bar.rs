//! Filter bar: status toggles, algorithm filter, sort order and poll interval

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use runboard_app::config::PollInterval;
use runboard_app::{RunView, StatusFilter};
use runboard_core::DisplayStatus;

use crate::theme::{palette, styles};

pub struct FilterBar<'a> {
    view: &'a RunView,
    interval: PollInterval,
}

impl<'a> FilterBar<'a> {
    pub fn new(view: &'a RunView, interval: PollInterval) -> Self {
        Self { view, interval }
    }

    fn status_spans(&self) -> Vec<Span<'static>> {
        let mut spans = vec![Span::styled(" Status ", styles::text_secondary())];

        let all_style = if self.view.status_filter == StatusFilter::NoFilter {
            styles::focused_selected()
        } else {
            styles::text_muted()
        };
        spans.push(Span::styled("0 All", all_style));

        for (i, status) in DisplayStatus::ALL.iter().enumerate() {
            spans.push(Span::raw(" "));
            let style = if self.view.status_filter.is_selected(*status) {
                styles::focused_selected()
            } else {
                styles::display_status(*status)
            };
            spans.push(Span::styled(format!("{} {}", i + 1, status.label()), style));
        }
        spans
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));

        let separator = || Span::styled("  │ ", styles::text_muted());
        let mut spans = self.status_spans();
        spans.extend([
            separator(),
            Span::styled("[a] ", styles::keybinding()),
            Span::styled(self.view.algorithm_filter.label(), styles::text_primary()),
            separator(),
            Span::styled("[s] ", styles::keybinding()),
            Span::styled(self.view.sort.label(), styles::text_primary()),
            separator(),
            Span::styled("[i] ", styles::keybinding()),
            Span::styled(format!("every {}", self.interval.label()), styles::text_primary()),
        ]);

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
