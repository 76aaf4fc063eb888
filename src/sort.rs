// Sort configuration and ordering for tasks

use crate::task::Task;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Field the task list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "dateAdded")]
    DateAdded,
    #[serde(rename = "completed")]
    Completed,
}

/// Direction of the primary ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active (key, direction) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::DateAdded,
            direction: SortDirection::Desc,
        }
    }
}

impl SortConfig {
    /// Config that results from selecting `key` while `self` is active.
    ///
    /// Reselecting the active key flips its direction; any other key starts at `Desc`.
    pub fn select(self, key: SortKey) -> Self {
        let direction = if self.key == key {
            self.direction.flipped()
        } else {
            SortDirection::Desc
        };
        Self { key, direction }
    }

    /// Compare two tasks under this config
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self.key {
            SortKey::DateAdded => {
                let newest_first = b.date_added.cmp(&a.date_added);
                match self.direction {
                    SortDirection::Desc => newest_first,
                    SortDirection::Asc => newest_first.reverse(),
                }
            }
            SortKey::Completed => {
                if a.completed == b.completed {
                    // Within a group, newest first whatever the primary direction
                    return b.date_added.cmp(&a.date_added);
                }
                let completed_first = if a.completed { Ordering::Less } else { Ordering::Greater };
                match self.direction {
                    SortDirection::Desc => completed_first,
                    SortDirection::Asc => completed_first.reverse(),
                }
            }
        }
    }

    /// Stable in-place sort of `tasks`
    pub fn apply(&self, tasks: &mut [Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::DateAdded => write!(f, "dateAdded"),
            SortKey::Completed => write!(f, "completed"),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortKey {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" | "dateadded" | "date_added" => Ok(SortKey::DateAdded),
            "completed" | "status" => Ok(SortKey::Completed),
            other => Err(eyre::eyre!("Unknown sort key: {} (expected date or completed)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    fn task(id: i64, date_added: i64, completed: bool) -> Task {
        let mut t = Task::new(TaskId(id), format!("task {}", id), date_added);
        t.completed = completed;
        t
    }

    fn ids(tasks: &[Task]) -> Vec<i64> {
        tasks.iter().map(|t| t.id.0).collect()
    }

    #[test]
    fn test_default_config() {
        let config = SortConfig::default();
        assert_eq!(config.key, SortKey::DateAdded);
        assert_eq!(config.direction, SortDirection::Desc);
    }

    #[test]
    fn test_select_same_key_flips_direction() {
        let config = SortConfig::default().select(SortKey::DateAdded);
        assert_eq!(config.direction, SortDirection::Asc);
        let config = config.select(SortKey::DateAdded);
        assert_eq!(config.direction, SortDirection::Desc);
    }

    #[test]
    fn test_select_other_key_resets_to_desc() {
        let asc = SortConfig {
            key: SortKey::DateAdded,
            direction: SortDirection::Asc,
        };
        let config = asc.select(SortKey::Completed);
        assert_eq!(config.key, SortKey::Completed);
        assert_eq!(config.direction, SortDirection::Desc);
    }

    #[test]
    fn test_date_added_desc_and_asc_are_reversed() {
        let mut tasks = vec![task(1, 300, false), task(2, 100, true), task(3, 200, false)];

        SortConfig::default().apply(&mut tasks);
        let desc = ids(&tasks);
        assert_eq!(desc, vec![1, 3, 2]);

        SortConfig {
            key: SortKey::DateAdded,
            direction: SortDirection::Asc,
        }
        .apply(&mut tasks);
        let mut asc = ids(&tasks);
        asc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_completed_desc_groups_completed_first() {
        let mut tasks = vec![
            task(1, 100, false),
            task(2, 200, true),
            task(3, 300, false),
            task(4, 400, true),
        ];
        SortConfig {
            key: SortKey::Completed,
            direction: SortDirection::Desc,
        }
        .apply(&mut tasks);
        assert_eq!(ids(&tasks), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_completed_asc_keeps_newest_first_within_group() {
        let mut tasks = vec![
            task(1, 100, false),
            task(2, 200, true),
            task(3, 300, false),
            task(4, 400, true),
        ];
        SortConfig {
            key: SortKey::Completed,
            direction: SortDirection::Asc,
        }
        .apply(&mut tasks);
        assert_eq!(ids(&tasks), vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_equal_timestamps_keep_insertion_order() {
        let mut tasks = vec![task(1, 100, false), task(2, 100, false), task(3, 100, false)];
        SortConfig::default().apply(&mut tasks);
        assert_eq!(ids(&tasks), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("date".parse::<SortKey>().unwrap(), SortKey::DateAdded);
        assert_eq!("dateAdded".parse::<SortKey>().unwrap(), SortKey::DateAdded);
        assert_eq!("Completed".parse::<SortKey>().unwrap(), SortKey::Completed);
        assert!("priority".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_config_serialization() {
        let json = serde_json::to_string(&SortConfig::default()).unwrap();
        assert_eq!(json, r#"{"key":"dateAdded","direction":"desc"}"#);
    }
}
