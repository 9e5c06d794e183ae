use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `status` and `priority` are open strings. The enums below name the
/// conventional values; anything else is stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub team_name: String,
    pub task_title: String,
    pub assigned_to: String,
    pub priority: String,
    pub deadline: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub date: String,
    pub time: String,
}

pub const UNASSIGNED: &str = "Unassigned";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "To Do" => Some(TaskStatus::ToDo),
            "In Progress" => Some(TaskStatus::InProgress),
            "Completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "High" => Some(Priority::High),
            "Medium" => Some(Priority::Medium),
            "Low" => Some(Priority::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub team_name: Option<String>,
    pub task_title: Option<String>,
    pub assigned_to: Option<String>,
    pub priority: Option<String>,
    pub deadline: Option<String>,
}

/// Body of `PATCH /api/tasks/{id}`. The value is not checked against
/// [`TaskStatus`], and a body that is not a JSON object reads as empty.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskStatusRequest {
    #[serde(default)]
    pub status: Option<Value>,
}

impl UpdateTaskStatusRequest {
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Strings are stored verbatim, a missing or null status becomes `""`,
    /// and any other JSON value is stored as its JSON text.
    pub fn into_status(self) -> String {
        match self.status {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
        }
    }
}

/// Query for `GET /api/tasks`. Empty parameters impose no constraint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    pub team_name: Option<String>,
    pub status: Option<String>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        let team_ok = match self.team_name.as_deref() {
            Some(name) if !name.is_empty() => task.team_name == name,
            _ => true,
        };
        let status_ok = match self.status.as_deref() {
            Some(status) if !status.is_empty() => task.status == status,
            _ => true,
        };
        team_ok && status_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_label() {
        for status in [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Completed] {
            assert_eq!(TaskStatus::from_label(status.label()), Some(status));
        }
        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            assert_eq!(Priority::from_label(priority.label()), Some(priority));
        }
        assert_eq!(TaskStatus::from_label("done"), None);
        assert_eq!(Priority::from_label("urgent"), None);
    }

    #[test]
    fn status_body_is_read_leniently() {
        let status = |body: &str| UpdateTaskStatusRequest::from_body(body.as_bytes()).into_status();
        assert_eq!(status(r#"{"status":"In Progress"}"#), "In Progress");
        assert_eq!(status(r#"{"status":"Blocked"}"#), "Blocked");
        assert_eq!(status(r#"{"status":3}"#), "3");
        assert_eq!(status(r#"{"status":null}"#), "");
        assert_eq!(status("{}"), "");
        assert_eq!(status(""), "");
        assert_eq!(status("{not json"), "");
    }

    #[test]
    fn filter_ignores_empty_parameters() {
        let task = Task {
            id: "1".to_string(),
            team_name: "Alpha".to_string(),
            task_title: "Design doc".to_string(),
            assigned_to: UNASSIGNED.to_string(),
            priority: "Medium".to_string(),
            deadline: String::new(),
            status: "To Do".to_string(),
            created_at: Utc::now(),
            date: String::new(),
            time: String::new(),
        };

        let filter = TaskFilter {
            team_name: Some(String::new()),
            status: Some("To Do".to_string()),
        };
        assert!(filter.matches(&task));

        let filter = TaskFilter {
            team_name: Some("Beta".to_string()),
            status: None,
        };
        assert!(!filter.matches(&task));
    }
}
