//! Filtering, sorting and pagination of the run list
//!
//! Everything here is a pure function of the full run list plus the view
//! settings in [`RunView`]. The run list itself is never mutated.

use std::collections::BTreeSet;

use runboard_core::{DisplayStatus, RunRecord};

/// Fixed number of runs per page
pub const PAGE_SIZE: usize = 5;

/// Status filter.
///
/// `NoFilter` passes every run. `FilterBy` is never empty: removing the last
/// status turns the filter back into `NoFilter`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    NoFilter,
    FilterBy(BTreeSet<DisplayStatus>),
}

impl StatusFilter {
    /// Build a filter from a list of statuses (empty = `NoFilter`)
    pub fn from_statuses(statuses: impl IntoIterator<Item = DisplayStatus>) -> Self {
        let set: BTreeSet<_> = statuses.into_iter().collect();
        if set.is_empty() {
            StatusFilter::NoFilter
        } else {
            StatusFilter::FilterBy(set)
        }
    }

    /// Add `status` if absent, remove it if present
    pub fn toggle(&mut self, status: DisplayStatus) {
        let mut set = match std::mem::take(self) {
            StatusFilter::NoFilter => BTreeSet::new(),
            StatusFilter::FilterBy(set) => set,
        };
        if !set.remove(&status) {
            set.insert(status);
        }
        *self = Self::from_statuses(set);
    }

    pub fn matches(&self, status: DisplayStatus) -> bool {
        match self {
            StatusFilter::NoFilter => true,
            StatusFilter::FilterBy(set) => set.contains(&status),
        }
    }

    /// Whether `status` is explicitly toggled on
    pub fn is_selected(&self, status: DisplayStatus) -> bool {
        matches!(self, StatusFilter::FilterBy(set) if set.contains(&status))
    }
}

/// Algorithm filter (exact match on the algorithm group id)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlgorithmFilter {
    #[default]
    All,
    Group(String),
}

impl AlgorithmFilter {
    pub fn matches(&self, gid: &str) -> bool {
        match self {
            AlgorithmFilter::All => true,
            AlgorithmFilter::Group(group) => group == gid,
        }
    }

    /// Next filter in `All → groups[0] → groups[1] → … → All` order.
    ///
    /// A group that is no longer in `groups` cycles back to `All`.
    pub fn cycle(&self, groups: &[String]) -> Self {
        let next_index = match self {
            AlgorithmFilter::All => 0,
            AlgorithmFilter::Group(current) => match groups.iter().position(|g| g == current) {
                Some(i) => i + 1,
                None => groups.len(),
            },
        };
        groups
            .get(next_index)
            .map(|g| AlgorithmFilter::Group(g.clone()))
            .unwrap_or(AlgorithmFilter::All)
    }

    pub fn label(&self) -> String {
        match self {
            AlgorithmFilter::All => "All".to_string(),
            AlgorithmFilter::Group(gid) => runboard_core::algorithm_display_name(gid, gid),
        }
    }
}

/// Sort order over the derived algorithm display name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Keep input order
    #[default]
    None,
    NameAscending,
    NameDescending,
}

impl SortOption {
    /// Cycle to the next sort option (wraps around)
    pub fn cycle(self) -> Self {
        match self {
            SortOption::None => SortOption::NameAscending,
            SortOption::NameAscending => SortOption::NameDescending,
            SortOption::NameDescending => SortOption::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::None => "Unsorted",
            SortOption::NameAscending => "Name A→Z",
            SortOption::NameDescending => "Name Z→A",
        }
    }
}

/// Runs passing both filters, in original relative order
pub fn filter_runs<'a>(
    runs: &'a [RunRecord],
    status: &StatusFilter,
    algorithm: &AlgorithmFilter,
) -> Vec<&'a RunRecord> {
    runs.iter()
        .filter(|r| status.matches(r.display_status()))
        .filter(|r| algorithm.matches(&r.algorithm_gid))
        .collect()
}

/// Stable sort by derived algorithm display name
pub fn sort_runs<'a>(runs: Vec<&'a RunRecord>, sort: SortOption) -> Vec<&'a RunRecord> {
    if sort == SortOption::None {
        return runs;
    }
    let mut keyed: Vec<(String, &RunRecord)> =
        runs.into_iter().map(|r| (r.algorithm_name(), r)).collect();
    match sort {
        SortOption::NameAscending => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
        SortOption::NameDescending => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
        SortOption::None => {}
    }
    keyed.into_iter().map(|(_, r)| r).collect()
}

/// `ceil(count / PAGE_SIZE)`
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Runs on 1-based `page`; empty when the page does not exist
pub fn page_slice<'s, 'a>(runs: &'s [&'a RunRecord], page: usize) -> &'s [&'a RunRecord] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1) * PAGE_SIZE;
    if start >= runs.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(runs.len());
    &runs[start..end]
}

/// Distinct algorithm group ids in first-seen order
pub fn algorithm_groups(runs: &[RunRecord]) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for run in runs {
        if !groups.iter().any(|g| g == &run.algorithm_gid) {
            groups.push(run.algorithm_gid.clone());
        }
    }
    groups
}

/// Filter, sort, page and row-selection state for the run table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunView {
    pub status_filter: StatusFilter,
    pub algorithm_filter: AlgorithmFilter,
    pub sort: SortOption,
    /// Current page (1-based)
    page: usize,
    /// Selected row within the current page
    selected: usize,
}

impl Default for RunView {
    fn default() -> Self {
        Self::new()
    }
}

impl RunView {
    pub fn new() -> Self {
        Self {
            status_filter: StatusFilter::default(),
            algorithm_filter: AlgorithmFilter::default(),
            sort: SortOption::default(),
            page: 1,
            selected: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Filtered and sorted runs across all pages
    pub fn visible<'a>(&self, runs: &'a [RunRecord]) -> Vec<&'a RunRecord> {
        sort_runs(
            filter_runs(runs, &self.status_filter, &self.algorithm_filter),
            self.sort,
        )
    }

    /// Runs shown on the current page
    pub fn current_page<'a>(&self, runs: &'a [RunRecord]) -> Vec<&'a RunRecord> {
        page_slice(&self.visible(runs), self.page).to_vec()
    }

    pub fn total_pages(&self, runs: &[RunRecord]) -> usize {
        total_pages(self.visible(runs).len())
    }

    /// Jump to `page`. Pages outside `[1, total_pages]` are ignored.
    ///
    /// Returns whether the page changed.
    pub fn go_to_page(&mut self, page: usize, runs: &[RunRecord]) -> bool {
        let total = self.total_pages(runs);
        if page < 1 || page > total || page == self.page {
            return false;
        }
        self.page = page;
        self.selected = 0;
        true
    }

    pub fn next_page(&mut self, runs: &[RunRecord]) -> bool {
        self.go_to_page(self.page + 1, runs)
    }

    pub fn previous_page(&mut self, runs: &[RunRecord]) -> bool {
        self.go_to_page(self.page.saturating_sub(1), runs)
    }

    pub fn has_next_page(&self, runs: &[RunRecord]) -> bool {
        self.page < self.total_pages(runs)
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    /// "Page X of Y" (an empty list reads "Page 1 of 1")
    pub fn page_label(&self, runs: &[RunRecord]) -> String {
        format!("Page {} of {}", self.page, self.total_pages(runs).max(1))
    }

    pub fn toggle_status(&mut self, status: DisplayStatus) {
        self.status_filter.toggle(status);
        self.reset_position();
    }

    pub fn clear_status_filter(&mut self) {
        self.status_filter = StatusFilter::NoFilter;
        self.reset_position();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
        self.reset_position();
    }

    pub fn set_algorithm_filter(&mut self, filter: AlgorithmFilter) {
        self.algorithm_filter = filter;
        self.reset_position();
    }

    /// Advance the algorithm filter through the groups present in `runs`
    pub fn cycle_algorithm_filter(&mut self, runs: &[RunRecord]) {
        let next = self.algorithm_filter.cycle(&algorithm_groups(runs));
        self.set_algorithm_filter(next);
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
        self.reset_position();
    }

    pub fn cycle_sort(&mut self) {
        self.set_sort(self.sort.cycle());
    }

    /// Keep page and selection valid after the run list was replaced
    pub fn clamp_to(&mut self, runs: &[RunRecord]) {
        let total = self.total_pages(runs).max(1);
        if self.page > total {
            self.page = total;
        }
        let rows = self.current_page(runs).len();
        self.selected = self.selected.min(rows.saturating_sub(1));
    }

    pub fn select_next(&mut self, runs: &[RunRecord]) {
        let rows = self.current_page(runs).len();
        if self.selected + 1 < rows {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_run<'a>(&self, runs: &'a [RunRecord]) -> Option<&'a RunRecord> {
        self.current_page(runs).get(self.selected).copied()
    }

    fn reset_position(&mut self) {
        self.page = 1;
        self.selected = 0;
    }
}
