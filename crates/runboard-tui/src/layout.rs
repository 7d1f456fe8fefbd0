//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and route breadcrumb
    pub header: Rect,

    /// Status toggles, algorithm, sort and interval
    pub filters: Rect,

    /// Run table
    pub table: Rect,

    /// Pagination, last updated, errors
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Length(3), // Filter bar
        Constraint::Min(3),    // Table
        Constraint::Length(3), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        filters: chunks[1],
        table: chunks[2],
        status: chunks[3],
    }
}
