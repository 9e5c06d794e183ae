use serde::Serialize;

use super::task::{Priority, Task, TaskStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_teams: usize,
    pub total_tasks: usize,
    pub total_updates: usize,
    pub tasks_by_status: StatusCounts,
    pub tasks_by_priority: PriorityCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusCounts {
    #[serde(rename = "To Do")]
    pub to_do: usize,
    #[serde(rename = "In Progress")]
    pub in_progress: usize,
    #[serde(rename = "Completed")]
    pub completed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl StatusCounts {
    /// Tasks whose status is not one of the three known labels are skipped.
    pub fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut counts = StatusCounts::default();
        for task in tasks {
            match TaskStatus::from_label(&task.status) {
                Some(TaskStatus::ToDo) => counts.to_do += 1,
                Some(TaskStatus::InProgress) => counts.in_progress += 1,
                Some(TaskStatus::Completed) => counts.completed += 1,
                None => {}
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.to_do + self.in_progress + self.completed
    }
}

impl PriorityCounts {
    pub fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut counts = PriorityCounts::default();
        for task in tasks {
            match Priority::from_label(&task.priority) {
                Some(Priority::High) => counts.high += 1,
                Some(Priority::Medium) => counts.medium += 1,
                Some(Priority::Low) => counts.low += 1,
                None => {}
            }
        }
        counts
    }
}
