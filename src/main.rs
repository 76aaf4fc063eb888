use clap::Parser;
use eyre::Result;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use todolist::{Command, Config, Outcome, TaskStore, view};
use tracing::{Level, debug, info};

#[derive(Parser)]
#[command(name = "todolist")]
#[command(about = "Daily to-do list - add, edit, toggle and sort tasks for one session")]
#[command(version)]
struct Cli {
    /// Path to the config file (default: <config dir>/todolist/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with an empty list instead of the starter tasks
    #[arg(long)]
    empty: bool,

    /// Print the list as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    let config = Config::load_or_default(cli.config.as_deref())?;
    debug!(?config, "Effective config");

    let mut store = TaskStore::with_sort(config.sort);
    if config.seed_defaults && !cli.empty {
        store.seed_default_tasks(todolist::now_ms());
    }
    info!(count = store.len(), "Session started");

    render(&store, cli.json)?;
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                continue;
            }
        };

        match command.execute(&mut store) {
            Outcome::Render => render(&store, cli.json)?,
            Outcome::Message(msg) => println!("{}", msg),
            Outcome::Quit => break,
        }
    }

    info!(count = store.len(), "Session ended, tasks discarded");
    Ok(())
}

fn render(store: &TaskStore, json: bool) -> Result<()> {
    if json {
        println!("{}", view::render_json(store)?);
    } else {
        print!("{}", view::render_text(store));
    }
    Ok(())
}
