// src/store.rs

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use log::debug;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::task::UNASSIGNED;
use crate::models::team::{ACTIVE, DEFAULT_EVENT_NAME};
use crate::models::team_update::DEFAULT_UPDATE_TYPE;
use crate::models::{
    present, CreateTaskRequest, CreateTeamRequest, CreateUpdateRequest, CreationTime,
    Priority, PriorityCounts, Stats, StatusCounts, Task, TaskFilter, TaskStatus, Team, TeamUpdate,
};

#[derive(Debug, Default)]
struct Collections {
    teams: Vec<Team>,
    tasks: Vec<Task>,
    /// Newest first.
    updates: VecDeque<TeamUpdate>,
}

/// In-memory holder of teams, tasks and updates.
///
/// Every operation takes the lock once and releases it before returning,
/// so callers on different workers never see a half-applied change.
#[derive(Debug, Default)]
pub struct CollaborationStore {
    collections: Mutex<Collections>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl CollaborationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, StoreError> {
        self.collections
            .lock()
            .map_err(|e| StoreError::Internal(e.to_string()))
    }

    // ─── TEAMS ─────────────────────────────────────────────────────────────────

    pub fn create_team(&self, req: CreateTeamRequest) -> Result<Team, StoreError> {
        let team_name = present(req.team_name)
            .ok_or_else(|| StoreError::Validation("Team name is required".to_string()))?;

        let team = Team {
            id: new_id(),
            team_name,
            member_count: req.member_count,
            event_name: present(req.event_name).unwrap_or_else(|| DEFAULT_EVENT_NAME.to_string()),
            created_at: CreationTime::now().at,
            status: ACTIVE.to_string(),
        };

        self.lock()?.teams.push(team.clone());
        Ok(team)
    }

    pub fn list_teams(&self) -> Result<Vec<Team>, StoreError> {
        Ok(self.lock()?.teams.clone())
    }

    // ─── TASKS ─────────────────────────────────────────────────────────────────

    pub fn create_task(&self, req: CreateTaskRequest) -> Result<Task, StoreError> {
        let missing =
            || StoreError::Validation("Team name and task title are required".to_string());
        let team_name = present(req.team_name).ok_or_else(missing)?;
        let task_title = present(req.task_title).ok_or_else(missing)?;

        let created = CreationTime::now();
        let task = Task {
            id: new_id(),
            team_name,
            task_title,
            assigned_to: present(req.assigned_to).unwrap_or_else(|| UNASSIGNED.to_string()),
            priority: present(req.priority)
                .unwrap_or_else(|| Priority::Medium.label().to_string()),
            deadline: req.deadline.unwrap_or_default(),
            status: TaskStatus::ToDo.label().to_string(),
            created_at: created.at,
            date: created.date,
            time: created.time,
        };

        self.lock()?.tasks.push(task.clone());
        Ok(task)
    }

    pub fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, StoreError> {
        let collections = self.lock()?;
        Ok(collections
            .tasks
            .iter()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect())
    }

    /// Overwrites the status with whatever the caller sent; no transition
    /// or label check.
    pub fn update_task_status(&self, id: &str, status: String) -> Result<Task, StoreError> {
        let mut collections = self.lock()?;
        let task = collections
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound("Task not found".to_string()))?;

        if TaskStatus::from_label(&status).is_none() {
            debug!("Task {} moved to unrecognized status {:?}", id, status);
        }
        task.status = status;
        Ok(task.clone())
    }

    pub fn delete_task(&self, id: &str) -> Result<(), StoreError> {
        let mut collections = self.lock()?;
        let before = collections.tasks.len();
        collections.tasks.retain(|t| t.id != id);

        if collections.tasks.len() == before {
            return Err(StoreError::NotFound("Task not found".to_string()));
        }
        Ok(())
    }

    // ─── UPDATES ───────────────────────────────────────────────────────────────

    pub fn create_update(&self, req: CreateUpdateRequest) -> Result<TeamUpdate, StoreError> {
        let missing =
            || StoreError::Validation("Team name and update text are required".to_string());
        let team_name = present(req.team_name).ok_or_else(missing)?;
        let update_text = present(req.update_text).ok_or_else(missing)?;

        let created = CreationTime::now();
        let update = TeamUpdate {
            id: new_id(),
            team_name,
            update_text,
            update_type: present(req.update_type)
                .unwrap_or_else(|| DEFAULT_UPDATE_TYPE.to_string()),
            timestamp: created.at,
            date: created.date,
            time: created.time,
        };

        self.lock()?.updates.push_front(update.clone());
        Ok(update)
    }

    /// Newest first, optionally narrowed to one team, at most `limit` records.
    pub fn list_updates(
        &self,
        team_name: Option<&str>,
        limit: usize,
    ) -> Result<Vec<TeamUpdate>, StoreError> {
        let collections = self.lock()?;
        Ok(collections
            .updates
            .iter()
            .filter(|u| team_name.map_or(true, |name| u.team_name == name))
            .take(limit)
            .cloned()
            .collect())
    }

    pub fn delete_update(&self, id: &str) -> Result<(), StoreError> {
        let mut collections = self.lock()?;
        let before = collections.updates.len();
        collections.updates.retain(|u| u.id != id);

        if collections.updates.len() == before {
            return Err(StoreError::NotFound("Update not found".to_string()));
        }
        Ok(())
    }

    // ─── DASHBOARD ─────────────────────────────────────────────────────────────

    pub fn compute_stats(&self) -> Result<Stats, StoreError> {
        let collections = self.lock()?;
        Ok(Stats {
            total_teams: collections.teams.len(),
            total_tasks: collections.tasks.len(),
            total_updates: collections.updates.len(),
            tasks_by_status: StatusCounts::tally(&collections.tasks),
            tasks_by_priority: PriorityCounts::tally(&collections.tasks),
        })
    }

    pub fn clear_all(&self) -> Result<(), StoreError> {
        let mut collections = self.lock()?;
        collections.teams.clear();
        collections.tasks.clear();
        collections.updates.clear();
        Ok(())
    }
}
