//! Demo 01: Basic Usage
//!
//! This demo walks through adding, toggling, editing and sorting tasks
//! with an in-memory TaskStore.
//!
//! Run with: cargo run --example 01_basic_usage

use eyre::{Result, eyre};
use todolist::{SortKey, TaskStore, view};

fn main() -> Result<()> {
    println!("todolist Basic Usage Demo");
    println!("=========================\n");

    let mut store = TaskStore::new();

    // ADD: blank text is ignored
    println!("1. ADD - Adding tasks...");
    let milk = store.add_at("Buy milk", 1_000).ok_or_else(|| eyre!("task text was blank"))?;
    let report = store.add_at("Write report", 2_000).ok_or_else(|| eyre!("task text was blank"))?;
    store.add_at("Call plumber", 3_000);
    println!("   Blank add accepted: {}", store.add("   ").is_some());
    println!("   Total tasks: {}\n", store.len());

    // TOGGLE: completion re-sorts when sorting by status
    println!("2. TOGGLE - Completing 'Write report'...");
    store.toggle(report);
    store.set_sort(SortKey::Completed);
    println!("   {}", view::sort_label(&store.sort_config()));
    for task in store.tasks() {
        println!("   - [{}] {}", if task.completed { "x" } else { " " }, task.text);
    }
    println!();

    // EDIT: draft is kept apart from the task until saved
    println!("3. EDIT - Renaming 'Buy milk'...");
    store.begin_edit(milk);
    store.set_draft("Buy oat milk");
    println!("   Saved: {}", store.save_edit(milk));
    println!("   New text: {:?}\n", store.get(milk).map(|t| t.text.as_str()));

    // SORT: picking the same key again flips direction
    println!("4. SORT - Incomplete first...");
    store.set_sort(SortKey::Completed);
    print!("{}", view::render_text(&store));
    println!();

    // CLEAR
    println!("5. CLEAR - Removing everything...");
    println!("   Removed {} tasks\n", store.clear());

    println!("Demo complete!");
    Ok(())
}
