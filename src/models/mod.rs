pub mod stats;
pub mod task;
pub mod team;
pub mod team_update;

use chrono::{DateTime, Local, Utc};

pub use stats::{PriorityCounts, Stats, StatusCounts};
pub use task::{CreateTaskRequest, Priority, Task, TaskFilter, TaskStatus, UpdateTaskStatusRequest};
pub use team::{CreateTeamRequest, Team};
pub use team_update::{CreateUpdateRequest, TeamUpdate, UpdateQuery};

/// Treats an empty string the same as a missing field.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// One clock read, rendered both as an ISO timestamp and as the
/// display date/time pair the dashboard shows.
#[derive(Debug, Clone)]
pub(crate) struct CreationTime {
    pub at: DateTime<Utc>,
    pub date: String,
    pub time: String,
}

impl CreationTime {
    pub fn now() -> Self {
        let at = Utc::now();
        let local = at.with_timezone(&Local);
        CreationTime {
            at,
            date: local.format("%-m/%-d/%Y").to_string(),
            time: local.format("%-I:%M:%S %p").to_string(),
        }
    }
}
