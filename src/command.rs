// Line-oriented commands for an interactive session

use crate::sort::SortKey;
use crate::store::TaskStore;
use crate::task::TaskId;
use crate::view;
use eyre::{Context, Result, eyre};

pub const HELP: &str = "\
Commands:
  add <text>           Add a task
  delete <id>          Delete a task
  toggle <id>          Mark a task complete / incomplete
  edit <id>            Start editing a task
  draft <text>         Replace the text being edited
  save [id]            Save the edit (defaults to the task being edited)
  cancel               Discard the edit
  sort [date|completed]  Sort by key, or show the sort menu
  clear                Remove all tasks
  list                 Show the list
  help                 Show this help
  quit                 Leave the session";

/// A user intent parsed from one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Delete(TaskId),
    Toggle(TaskId),
    Edit(TaskId),
    Draft(String),
    Save(Option<TaskId>),
    Cancel,
    Sort(Option<SortKey>),
    Clear,
    List,
    Help,
    Quit,
}

/// What the session should do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the list
    Render,
    /// Print a message instead of the list
    Message(String),
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "add" | "a" => Command::Add(rest.to_string()),
            "delete" | "del" | "rm" => Command::Delete(parse_id(rest)?),
            "toggle" | "t" | "done" => Command::Toggle(parse_id(rest)?),
            "edit" | "e" => Command::Edit(parse_id(rest)?),
            "draft" => Command::Draft(rest.to_string()),
            "save" => {
                if rest.is_empty() {
                    Command::Save(None)
                } else {
                    Command::Save(Some(parse_id(rest)?))
                }
            }
            "cancel" => Command::Cancel,
            "sort" => {
                if rest.is_empty() {
                    Command::Sort(None)
                } else {
                    Command::Sort(Some(rest.parse()?))
                }
            }
            "clear" => Command::Clear,
            "list" | "ls" => Command::List,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(eyre!("Unknown command: {} (try 'help')", other)),
        };

        Ok(Some(command))
    }

    /// Apply this command to the store
    pub fn execute(self, store: &mut TaskStore) -> Outcome {
        match self {
            Command::Add(text) => {
                store.add(&text);
            }
            Command::Delete(id) => {
                store.delete(id);
            }
            Command::Toggle(id) => {
                store.toggle(id);
            }
            Command::Edit(id) => {
                store.begin_edit(id);
            }
            Command::Draft(text) => {
                store.set_draft(&text);
            }
            Command::Save(id) => {
                if let Some(id) = id.or_else(|| store.edit_session().map(|s| s.task_id)) {
                    store.save_edit(id);
                }
            }
            Command::Cancel => store.cancel_edit(),
            Command::Sort(Some(key)) => {
                store.set_sort(key);
            }
            Command::Sort(None) => {
                let menu: Vec<String> = view::sort_menu(&store.sort_config())
                    .into_iter()
                    .map(|(key, label)| format!("  sort {:<10} {}", key_arg(key), label))
                    .collect();
                return Outcome::Message(format!("{}\n{}", view::sort_label(&store.sort_config()), menu.join("\n")));
            }
            Command::Clear => {
                store.clear();
            }
            Command::List => {}
            Command::Help => return Outcome::Message(HELP.to_string()),
            Command::Quit => return Outcome::Quit,
        }
        Outcome::Render
    }
}

fn parse_id(arg: &str) -> Result<TaskId> {
    if arg.is_empty() {
        return Err(eyre!("Missing task id"));
    }
    arg.parse::<TaskId>().with_context(|| format!("Invalid task id: {}", arg))
}

fn key_arg(key: SortKey) -> &'static str {
    match key {
        SortKey::DateAdded => "date",
        SortKey::Completed => "completed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_add_keeps_inner_spacing() {
        let cmd = Command::parse("add   Buy  milk").unwrap().unwrap();
        assert_eq!(cmd, Command::Add("Buy  milk".to_string()));
    }

    #[test]
    fn test_parse_id_commands() {
        assert_eq!(Command::parse("toggle 42").unwrap(), Some(Command::Toggle(TaskId(42))));
        assert_eq!(Command::parse("DELETE 7").unwrap(), Some(Command::Delete(TaskId(7))));
        assert_eq!(Command::parse("edit 3").unwrap(), Some(Command::Edit(TaskId(3))));
        assert_eq!(Command::parse("save").unwrap(), Some(Command::Save(None)));
        assert_eq!(Command::parse("save 3").unwrap(), Some(Command::Save(Some(TaskId(3)))));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("toggle").is_err());
        assert!(Command::parse("toggle abc").is_err());
        assert!(Command::parse("sort priority").is_err());
        assert!(Command::parse("fly away").is_err());
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(Command::parse("sort").unwrap(), Some(Command::Sort(None)));
        assert_eq!(
            Command::parse("sort completed").unwrap(),
            Some(Command::Sort(Some(SortKey::Completed)))
        );
    }

    #[test]
    fn test_execute_edit_flow() {
        let mut store = TaskStore::new();
        assert_eq!(Command::Add("Buy milk".to_string()).execute(&mut store), Outcome::Render);
        let id = store.tasks()[0].id;

        Command::Edit(id).execute(&mut store);
        Command::Draft("Buy oat milk".to_string()).execute(&mut store);
        Command::Save(None).execute(&mut store);

        assert_eq!(store.get(id).unwrap().text, "Buy oat milk");
        assert!(store.edit_session().is_none());
    }

    #[test]
    fn test_execute_blank_add_is_silent() {
        let mut store = TaskStore::new();
        assert_eq!(Command::Add(String::new()).execute(&mut store), Outcome::Render);
        assert!(store.is_empty());
    }

    #[test]
    fn test_execute_sort_menu() {
        let mut store = TaskStore::new();
        match Command::Sort(None).execute(&mut store) {
            Outcome::Message(msg) => {
                assert!(msg.contains("Sort by: Date Added (Newest First)"));
                assert!(msg.contains("Oldest First (Date Added)"));
            }
            other => panic!("expected message, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_quit_and_help() {
        let mut store = TaskStore::new();
        assert_eq!(Command::Quit.execute(&mut store), Outcome::Quit);
        assert!(matches!(Command::Help.execute(&mut store), Outcome::Message(_)));
    }
}
