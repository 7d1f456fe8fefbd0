//! Headless runner - one fetch, one event

use runboard_app::{AlgorithmFilter, RunView, SortOption, StatusFilter};
use runboard_client::RunService;
use runboard_core::{DisplayStatus, RunRecord};
use tracing::{info, warn};

use super::{HeadlessEvent, RunRow};

/// Filter, sort and page selection for a headless listing
#[derive(Debug, Clone, Default)]
pub struct HeadlessQuery {
    /// Empty means no status filter
    pub statuses: Vec<DisplayStatus>,
    pub algorithm: Option<String>,
    pub sort: SortOption,
    /// 1-based; pages out of range fall back to the first page
    pub page: usize,
}

impl HeadlessQuery {
    /// Build the view these options describe over `runs`
    pub fn view(&self, runs: &[RunRecord]) -> RunView {
        let mut view = RunView::new();
        if !self.statuses.is_empty() {
            view.set_status_filter(StatusFilter::from_statuses(self.statuses.iter().copied()));
        }
        if let Some(gid) = &self.algorithm {
            view.set_algorithm_filter(AlgorithmFilter::Group(gid.clone()));
        }
        view.set_sort(self.sort);

        if self.page > 1 && !view.go_to_page(self.page, runs) {
            warn!(
                "Page {} is out of range ({}), showing page 1",
                self.page,
                view.page_label(runs)
            );
        }
        view
    }
}

/// Fetch the run list once and describe the requested page
pub async fn run_headless<S: RunService>(service: &S, query: &HeadlessQuery) -> HeadlessEvent {
    info!("runboard starting in HEADLESS mode");

    let runs = match service.list_runs().await {
        Ok(runs) => runs,
        Err(e) => {
            warn!("Headless fetch failed: {}", e);
            return HeadlessEvent::fetch_failed(e.to_string());
        }
    };

    let view = query.view(&runs);
    let visible = view.visible(&runs);
    let rows = view
        .current_page(&runs)
        .into_iter()
        .map(RunRow::from_run)
        .collect();

    HeadlessEvent::runs_page(
        view.page(),
        view.total_pages(&runs).max(1),
        visible.len(),
        view.page_label(&runs),
        rows,
    )
}
