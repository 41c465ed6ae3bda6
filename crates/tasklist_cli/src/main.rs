//! Interactive terminal front-end for the task list.
//!
//! # Responsibility
//! - Resolve storage/log locations and bootstrap logging.
//! - Turn input lines into task list manager calls.

mod command;
mod terminal;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use command::{Command, HELP};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tasklist_core::db::open_db;
use tasklist_core::{
    default_log_level, init_logging, KeyValueStore, ManagerConfig, Outcome, SqliteStore, TaskId,
    TaskListManager,
};
use terminal::TerminalShell;

const APP_DIR_NAME: &str = "tasklist";
const DB_FILE_NAME: &str = "tasks.sqlite3";

#[derive(Debug, Parser)]
#[command(name = "tasklist", version, about = "Keep a short list of tasks in the terminal")]
struct Cli {
    /// SQLite file holding the task list.
    #[arg(long)]
    db: Option<PathBuf>,

    /// Directory for rolling log files (absolute).
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// trace | debug | info | warn | error
    #[arg(long)]
    log_level: Option<String>,
}

type Manager<S, R, W> = TaskListManager<S, TerminalShell<R, W>>;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let app_dir = dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME));

    let log_dir = cli
        .log_dir
        .or_else(|| app_dir.as_ref().map(|dir| dir.join("logs")));
    if let Some(log_dir) = log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let db_path = match cli.db {
        Some(path) => path,
        None => app_dir
            .ok_or_else(|| anyhow!("cannot determine a data directory; pass --db <path>"))?
            .join(DB_FILE_NAME),
    };
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }
    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open task database `{}`", db_path.display()))?;
    info!("event=cli_start module=cli status=ok db={}", db_path.display());

    let shell = TerminalShell::new(io::stdin().lock(), io::stdout());
    let mut manager = TaskListManager::open(SqliteStore::new(conn), shell, ManagerConfig::text())
        .map_err(|err| anyhow!("failed to start task list: {err}"))?;
    run(&mut manager)?;

    info!("event=cli_exit module=cli status=ok");
    Ok(())
}

fn run<S: KeyValueStore, R: BufRead, W: Write>(manager: &mut Manager<S, R, W>) -> Result<()> {
    manager.shell_mut().say("type `help` for commands");
    while let Some(line) = manager.shell_mut().read_line("> ")? {
        match command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => dispatch(manager, command),
            Err(err) => manager.shell_mut().say(&err.to_string()),
        }
    }
    Ok(())
}

fn dispatch<S: KeyValueStore, R: BufRead, W: Write>(
    manager: &mut Manager<S, R, W>,
    command: Command,
) {
    let outcome = match command {
        Command::Add(text) => manager.add(&text),
        Command::Toggle(row) => match row_id(manager, row) {
            Some(id) => manager.toggle_completed(&id),
            None => return,
        },
        Command::Delete(row) => match row_id(manager, row) {
            Some(id) => manager.delete(&id),
            None => return,
        },
        Command::Edit(row) => match row_id(manager, row) {
            Some(id) => manager.begin_edit(&id),
            None => return,
        },
        Command::Save(text) => match manager.editing_id().cloned() {
            Some(id) => manager.commit_edit(&id, &text),
            None => {
                manager.shell_mut().say("nothing is being edited; use `edit <n>` first");
                return;
            }
        },
        Command::Cancel => manager.cancel_edit(),
        Command::Filter(filter) => manager.set_filter(filter),
        Command::Clear => manager.clear_completed(),
        Command::List => {
            manager.refresh();
            return;
        }
        Command::Help => {
            manager.shell_mut().say(HELP);
            return;
        }
        Command::Quit => return,
    };

    if outcome == Outcome::NotFound {
        warn!("event=cli_dispatch module=cli status=stale_row");
    }
}

fn row_id<S: KeyValueStore, R: BufRead, W: Write>(
    manager: &mut Manager<S, R, W>,
    row: usize,
) -> Option<TaskId> {
    let id = manager.shell().row_id(row).cloned();
    if id.is_none() {
        manager.shell_mut().say(&format!("no row {row} in the current list"));
    }
    id
}

#[cfg(test)]
mod tests {
    use super::{run, Manager};
    use crate::terminal::TerminalShell;
    use std::io::Cursor;
    use tasklist_core::{ManagerConfig, MemoryStore, TaskListManager};

    fn session(script: &[u8]) -> Manager<MemoryStore, Cursor<Vec<u8>>, Vec<u8>> {
        let shell = TerminalShell::new(Cursor::new(script.to_vec()), Vec::new());
        let mut manager =
            TaskListManager::open(MemoryStore::new(), shell, ManagerConfig::text()).unwrap();
        run(&mut manager).unwrap();
        manager
    }

    fn printed(manager: &Manager<MemoryStore, Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(manager.shell().output()).into_owned()
    }

    fn texts(manager: &Manager<MemoryStore, Cursor<Vec<u8>>, Vec<u8>>) -> Vec<(String, bool)> {
        manager
            .tasks()
            .iter()
            .map(|task| (task.text.clone(), task.completed))
            .collect()
    }

    #[test]
    fn scripted_session_drives_the_manager_by_row_number() {
        let manager = session(
            b"add a\nadd b\nfilter active\ntoggle 1\ndelete 9\nsave x\nedit 1\nsave y\nquit\n",
        );

        assert_eq!(
            texts(&manager),
            vec![("b".to_string(), true), ("y".to_string(), false)]
        );
        assert_eq!(manager.editing_id(), None);

        let output = printed(&manager);
        assert!(output.contains("no row 9 in the current list"));
        assert!(output.contains("nothing is being edited"));
        assert!(output.contains("-- active --"));
    }

    #[test]
    fn invalid_utf8_line_does_not_end_the_session() {
        let manager = session(b"add first\n\xff\xfe\nadd second\nquit\n");

        assert_eq!(manager.tasks().len(), 2);
        assert!(printed(&manager).contains("unknown command"));
    }

    #[test]
    fn end_of_input_stops_without_quit() {
        let manager = session(b"add only\nbogus\n");

        assert_eq!(texts(&manager), vec![("only".to_string(), false)]);
        assert!(printed(&manager).contains("unknown command `bogus`"));
    }
}
