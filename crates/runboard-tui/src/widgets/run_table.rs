//! Run table: one row per run on the current page

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use runboard_core::{
    estimated_time_remaining, progress_fill_percent, DisplayStatus, RunAction, RunRecord,
};

use super::truncate_with_ellipsis;
use crate::theme::{palette, styles};

/// Cells in the progress gauge
const GAUGE_WIDTH: usize = 10;

/// Algorithm names longer than this are cut with an ellipsis
const ALGORITHM_MAX_WIDTH: usize = 24;

const COLUMNS: [&str; 8] = [
    "Algorithm", "Status", "Progress", "ETA", "Dataset", "Model", "Created", "Action",
];

pub struct RunTable<'a> {
    runs: &'a [&'a RunRecord],
    selected: usize,
    /// Shown in the title, e.g. "12 runs"
    total: usize,
}

impl<'a> RunTable<'a> {
    pub fn new(runs: &'a [&'a RunRecord], selected: usize, total: usize) -> Self {
        Self {
            runs,
            selected,
            total,
        }
    }

    fn row(run: &RunRecord, selected: bool) -> Row<'static> {
        let status = run.display_status();
        let in_progress = matches!(status, DisplayStatus::Pending | DisplayStatus::Running);

        let eta = if in_progress {
            estimated_time_remaining(run.progress).to_string()
        } else {
            "-".to_string()
        };

        let row = Row::new(vec![
            Cell::from(truncate_with_ellipsis(&run.algorithm_name(), ALGORITHM_MAX_WIDTH)),
            Cell::from(Span::styled(status.label(), styles::display_status(status))),
            Cell::from(progress_gauge(run.progress)),
            Cell::from(Span::styled(eta, styles::text_secondary())),
            Cell::from(run.test_dataset.clone()),
            Cell::from(run.model_file.clone()),
            Cell::from(Span::styled(
                run.created_at.format("%m-%d %H:%M").to_string(),
                styles::text_muted(),
            )),
            Cell::from(action_hint(run.available_action())),
        ]);

        if selected {
            row.style(styles::focused_selected())
        } else {
            row.style(styles::text_primary())
        }
    }
}

/// Text gauge such as `████░░░░░░ 42%`.
///
/// The fill is clamped to the gauge; the percentage is printed unclamped.
pub fn progress_gauge(progress: i64) -> Line<'static> {
    let fill = progress_fill_percent(progress).clamp(0, 100) as usize;
    let filled = (fill * GAUGE_WIDTH + 50) / 100;
    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(palette::GAUGE_FILL)),
        Span::styled(
            "░".repeat(GAUGE_WIDTH - filled),
            Style::default().fg(palette::GAUGE_EMPTY),
        ),
        Span::raw(format!(" {}%", progress)),
    ])
}

/// Only the action the run actually offers is shown
fn action_hint(action: RunAction) -> Line<'static> {
    let key = match action {
        RunAction::Cancel => "c",
        RunAction::Delete => "d",
    };
    Line::from(vec![
        Span::styled(format!("[{}] ", key), styles::keybinding()),
        Span::raw(action.label()),
    ])
}

impl Widget for RunTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.total {
            1 => " 1 run ".to_string(),
            n => format!(" {} runs ", n),
        };
        let block = styles::glass_block(true)
            .title(title)
            .style(Style::default().bg(palette::CARD_BG));

        if self.runs.is_empty() {
            Paragraph::new("No test runs")
                .alignment(Alignment::Center)
                .style(styles::text_muted())
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c)))
            .style(styles::accent_bold())
            .bottom_margin(1);

        let rows = self
            .runs
            .iter()
            .enumerate()
            .map(|(i, run)| Self::row(run, i == self.selected));

        let widths = [
            Constraint::Fill(2),
            Constraint::Length(9),
            Constraint::Length(GAUGE_WIDTH as u16 + 6),
            Constraint::Length(13),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(11),
            Constraint::Length(10),
        ];

        Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .block(block)
            .render(area, buf);
    }
}
