// In-memory task store with eager re-sorting

use crate::edit::EditSession;
use crate::sort::{SortConfig, SortKey};
use crate::task::{Task, TaskId, now_ms};
use tracing::debug;

const HOUR_MS: i64 = 60 * 60 * 1000;

/// Ordered collection of tasks plus the active sort and edit state
///
/// Every operation is infallible. Invalid input (blank text, unknown ids)
/// leaves the store untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    sort: SortConfig,
    editing: Option<EditSession>,
    last_id: i64,
}

impl TaskStore {
    /// Create an empty store sorted by date added, newest first
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given sort config
    pub fn with_sort(sort: SortConfig) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    /// Create a store holding the starter tasks shown on first open
    pub fn with_default_tasks() -> Self {
        let mut store = Self::new();
        store.seed_default_tasks(now_ms());
        store
    }

    /// Add the starter tasks relative to `now`
    pub fn seed_default_tasks(&mut self, now: i64) {
        self.add_at("Complete daily coding challenge", now - 2 * HOUR_MS);
        if let Some(id) = self.add_at("Review project documentation", now - HOUR_MS) {
            self.toggle(id);
        }
        self.add_at("Setup team meeting", now);
    }

    // ========================================================================
    // Read API
    // ========================================================================

    /// Tasks in their current sorted order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn sort_config(&self) -> SortConfig {
        self.sort
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing.as_ref().is_some_and(|s| s.task_id == id)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Add a task created now. Returns `None` when `text` is blank.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        self.add_at(text, now_ms())
    }

    /// Add a task with an explicit creation timestamp (milliseconds)
    pub fn add_at(&mut self, text: &str, date_added: i64) -> Option<TaskId> {
        if text.trim().is_empty() {
            debug!("add: blank text ignored");
            return None;
        }

        let id = self.next_id(date_added);
        self.tasks.push(Task::new(id, text, date_added));
        self.resort();

        debug!(%id, date_added, count = self.tasks.len(), "add: task created");
        Some(id)
    }

    /// Remove a task. Returns the removed task, or `None` if the id is unknown.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            debug!(%id, "delete: no such task");
            return None;
        };

        let removed = self.tasks.remove(pos);
        if self.is_editing(id) {
            self.editing = None;
        }

        debug!(%id, count = self.tasks.len(), "delete: task removed");
        Some(removed)
    }

    /// Flip a task's completed flag. Returns the new state.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(%id, "toggle: no such task");
            return None;
        };

        task.completed = !task.completed;
        let completed = task.completed;
        self.resort();

        debug!(%id, completed, "toggle: task updated");
        Some(completed)
    }

    /// Open an edit session seeded with the task's text, replacing any open one
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        let Some(task) = self.get(id) else {
            debug!(%id, "begin_edit: no such task");
            return false;
        };

        let session = EditSession::new(id, task.text.clone());
        if let Some(prior) = self.editing.replace(session) {
            debug!(prior = %prior.task_id, "begin_edit: discarded prior session");
        }

        debug!(%id, "begin_edit: session opened");
        true
    }

    /// Replace the draft text of the open edit session
    pub fn set_draft(&mut self, text: &str) -> bool {
        match self.editing.as_mut() {
            Some(session) => {
                session.draft = text.to_string();
                true
            }
            None => {
                debug!("set_draft: no open session");
                false
            }
        }
    }

    /// Commit the draft to the task under edit and close the session.
    ///
    /// Leaves the session open when the draft is blank. Order is not touched:
    /// text is not a sort key.
    pub fn save_edit(&mut self, id: TaskId) -> bool {
        let Some(session) = self.editing.as_ref().filter(|s| s.task_id == id) else {
            debug!(%id, "save_edit: task is not under edit");
            return false;
        };

        if !session.is_committable() {
            debug!(%id, "save_edit: blank draft kept open");
            return false;
        }

        let draft = session.draft.clone();
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.text = draft;
        }
        self.editing = None;

        debug!(%id, "save_edit: text committed");
        true
    }

    /// Drop the open edit session without touching any task
    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.editing.take() {
            debug!(id = %session.task_id, "cancel_edit: session closed");
        }
    }

    /// Select a sort key, flipping direction when it is already active
    pub fn set_sort(&mut self, key: SortKey) -> SortConfig {
        let config = self.sort.select(key);
        self.set_sort_config(config);
        config
    }

    /// Install a full sort config and re-sort
    pub fn set_sort_config(&mut self, config: SortConfig) {
        self.sort = config;
        self.resort();
        debug!(key = %config.key, direction = %config.direction, "sort config changed");
    }

    /// Remove every task. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        self.editing = None;
        debug!(count, "clear: all tasks removed");
        count
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn resort(&mut self) {
        self.sort.apply(&mut self.tasks);
    }

    /// Ids follow creation time but stay strictly increasing
    fn next_id(&mut self, at_ms: i64) -> TaskId {
        let id = at_ms.max(self.last_id + 1);
        self.last_id = id;
        TaskId(id)
    }
}
