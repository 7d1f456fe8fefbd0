//! Header bar with the app title and route breadcrumb

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use runboard_app::RouteContext;

use crate::theme::{palette, styles};

const TITLE: &str = "runboard";
const SUBTITLE: &str = "Test Runs";

/// Main header showing title, optional project/flow context and key hints
pub struct MainHeader<'a> {
    route: &'a RouteContext,
}

impl<'a> MainHeader<'a> {
    pub fn new(route: &'a RouteContext) -> Self {
        Self { route }
    }

    fn left_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled("◆", styles::accent()),
            Span::raw(" "),
            Span::styled(TITLE, styles::accent_bold()),
            Span::styled(" / ", styles::text_muted()),
            Span::styled(SUBTITLE, styles::text_secondary()),
        ];
        if let Some(chrome) = self.route.chrome_label() {
            spans.push(Span::styled(" · ", styles::text_muted()));
            spans.push(Span::styled(chrome, styles::text_primary()));
        }
        Line::from(spans)
    }

    fn shortcuts_line() -> Line<'static> {
        let mut spans = Vec::new();
        for (key, label) in [("r", "Refresh"), ("c", "Cancel"), ("d", "Delete"), ("q", "Quit")] {
            spans.push(Span::styled(format!("[{}]", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", label), styles::text_secondary()));
        }
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = self.left_line();
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Shortcuts only when they fit beside the title
        let shortcuts = Self::shortcuts_line();
        let shortcuts_width = shortcuts.width() as u16;
        if left_width + shortcuts_width + 2 <= inner.width {
            let x = inner.x + inner.width - shortcuts_width;
            buf.set_line(x, inner.y, &shortcuts, shortcuts_width);
        }
    }
}
