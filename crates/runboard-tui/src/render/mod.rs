//! Main render/view function (View in TEA pattern)


use chrono::{DateTime, Utc};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use runboard_app::AppState;

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI.
///
/// Pure with respect to `state`; `now` drives the relative "last updated" text.
pub fn view(frame: &mut Frame, state: &AppState, now: DateTime<Utc>) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(&state.route), areas.header);

    frame.render_widget(
        widgets::FilterBar::new(&state.view, state.refresh.interval()),
        areas.filters,
    );

    let visible = state.view.visible(&state.runs);
    let page = runboard_app::run_view::page_slice(&visible, state.view.page());
    frame.render_widget(
        widgets::RunTable::new(page, state.view.selected_index(), visible.len()),
        areas.table,
    );

    frame.render_widget(widgets::StatusBar::new(state, now), areas.status);

    if let Some(dialog) = state.active_dialog() {
        frame.render_widget(widgets::ConfirmDialog::new(&dialog), area);
    }
}
