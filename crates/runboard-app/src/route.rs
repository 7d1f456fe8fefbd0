//! Optional project/flow context the dashboard was opened from

/// Route parameters. Only affects header chrome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteContext {
    pub project_id: Option<String>,
    pub flow: Option<String>,
}

impl RouteContext {
    pub fn new(project_id: Option<String>, flow: Option<String>) -> Self {
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        Self {
            project_id: non_empty(project_id),
            flow: non_empty(flow),
        }
    }

    /// Opened from inside a project flow (both parameters present)
    pub fn is_embedded(&self) -> bool {
        self.project_id.is_some() && self.flow.is_some()
    }

    /// Header breadcrumb, e.g. `project 42 › flow results`
    pub fn chrome_label(&self) -> Option<String> {
        match (&self.project_id, &self.flow) {
            (Some(project), Some(flow)) => Some(format!("project {} › flow {}", project, flow)),
            _ => None,
        }
    }
}
