// Inline edit session state

use crate::task::TaskId;
use serde::Serialize;

/// Draft text for the single task currently being edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSession {
    pub task_id: TaskId,
    pub draft: String,
}

impl EditSession {
    pub fn new(task_id: TaskId, draft: impl Into<String>) -> Self {
        Self {
            task_id,
            draft: draft.into(),
        }
    }

    /// True when the draft has something other than whitespace to commit
    pub fn is_committable(&self) -> bool {
        !self.draft.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_committable() {
        assert!(EditSession::new(TaskId(1), "Call mom").is_committable());
        assert!(!EditSession::new(TaskId(1), "").is_committable());
        assert!(!EditSession::new(TaskId(1), " \t\n").is_committable());
    }
}
