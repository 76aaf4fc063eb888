// Text and JSON rendering of a task store

use crate::edit::EditSession;
use crate::sort::{SortConfig, SortDirection, SortKey};
use crate::store::TaskStore;
use crate::task::Task;
use chrono::{DateTime, Local, TimeZone, Utc};
use colored::Colorize;
use serde::Serialize;
use std::fmt::{Display, Write};

const DATE_FORMAT: &str = "%b %-d, %-I:%M %p";

/// Header describing the active sort, e.g. `Sort by: Date Added (Newest First)`
pub fn sort_label(config: &SortConfig) -> String {
    let detail = match (config.key, config.direction) {
        (SortKey::DateAdded, SortDirection::Desc) => "Newest First",
        (SortKey::DateAdded, SortDirection::Asc) => "Oldest First",
        (SortKey::Completed, SortDirection::Desc) => "Completed First",
        (SortKey::Completed, SortDirection::Asc) => "Incomplete First",
    };
    format!("Sort by: {} ({})", key_label(config.key), detail)
}

pub fn key_label(key: SortKey) -> &'static str {
    match key {
        SortKey::DateAdded => "Date Added",
        SortKey::Completed => "Completion Status",
    }
}

/// Sort menu entries, one per key.
///
/// Each entry names the order you get by picking it from a `desc` config,
/// so the wording only depends on the current direction.
pub fn sort_menu(config: &SortConfig) -> Vec<(SortKey, String)> {
    let (date, completed) = match config.direction {
        SortDirection::Desc => ("Oldest First", "Incomplete First"),
        SortDirection::Asc => ("Newest First", "Completed First"),
    };
    vec![
        (SortKey::DateAdded, format!("{} ({})", date, key_label(SortKey::DateAdded))),
        (SortKey::Completed, format!("{} ({})", completed, key_label(SortKey::Completed))),
    ]
}

pub fn item_count_label(count: usize) -> String {
    format!("{} items", count)
}

/// Format a millisecond timestamp in local time, e.g. `Oct 16, 3:04 PM`
pub fn format_date(ms: i64) -> String {
    format_date_in(ms, &Local)
}

pub fn format_date_in<Tz>(ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(utc) => utc.with_timezone(tz).format(DATE_FORMAT).to_string(),
        None => String::from("-"),
    }
}

/// Plain-text listing: sort header, one line per task, item count footer
pub fn render_text(store: &TaskStore) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", sort_label(&store.sort_config()).bold());
    out.push('\n');

    if store.is_empty() {
        let _ = writeln!(out, "  {}", "(no tasks)".dimmed());
    }
    for task in store.tasks() {
        let _ = writeln!(out, "{}", render_task(task, store.edit_session()));
    }

    out.push('\n');
    let _ = writeln!(out, "{}", item_count_label(store.len()));
    out
}

fn render_task(task: &Task, editing: Option<&EditSession>) -> String {
    let check = if task.completed { "[x]".green() } else { "[ ]".normal() };
    let date = format_date(task.date_added).dimmed();

    match editing.filter(|s| s.task_id == task.id) {
        Some(session) => format!(
            "  {} {:>14}  {} {}  {}",
            check,
            task.id,
            "editing:".yellow(),
            session.draft,
            date
        ),
        None => {
            let text = if task.completed {
                task.text.strikethrough().dimmed()
            } else {
                task.text.normal()
            };
            format!("  {} {:>14}  {}  {}", check, task.id, text, date)
        }
    }
}

/// Everything a view needs to draw the list
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub tasks: &'a [Task],
    pub sort: SortConfig,
    pub editing: Option<&'a EditSession>,
    pub count: usize,
}

impl<'a> Snapshot<'a> {
    pub fn of(store: &'a TaskStore) -> Self {
        Self {
            tasks: store.tasks(),
            sort: store.sort_config(),
            editing: store.edit_session(),
            count: store.len(),
        }
    }
}

pub fn render_json(store: &TaskStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Snapshot::of(store))
}
