//! Line command parsing for the interactive loop.

use std::fmt::{Display, Formatter};
use tasklist_core::{Filter, UnknownFilter};

pub const HELP: &str = "\
commands:
  add <text>        add a task at the top of the list
  toggle <n>        mark row n done / not done
  delete <n>        delete row n
  edit <n>          start editing row n
  save <text>       save the text of the row being edited
  cancel            stop editing without saving
  filter <name>     show all | active | completed
  clear             remove all completed tasks
  list              show the list again
  help              show this help
  quit              leave";

/// One parsed input line. Rows are 1-based positions in the last shown list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(usize),
    Delete(usize),
    Edit(usize),
    Save(String),
    Cancel,
    Filter(Filter),
    Clear,
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidRow(String),
    InvalidFilter(UnknownFilter),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "type a command, or `help`"),
            Self::Unknown(word) => write!(f, "unknown command `{word}`; try `help`"),
            Self::MissingArgument(what) => write!(f, "missing {what}"),
            Self::InvalidRow(value) => write!(f, "`{value}` is not a row number"),
            Self::InvalidFilter(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses one input line.
///
/// Text arguments are passed through untrimmed-but-joined so the manager's
/// own validation decides what blank means.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line.trim_end(), ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Err(ParseError::Empty),
        "add" | "a" => Ok(Command::Add(rest.to_string())),
        "toggle" | "t" | "done" => Ok(Command::Toggle(parse_row(rest)?)),
        "delete" | "del" | "rm" => Ok(Command::Delete(parse_row(rest)?)),
        "edit" | "e" => Ok(Command::Edit(parse_row(rest)?)),
        "save" | "s" => Ok(Command::Save(rest.to_string())),
        "cancel" => Ok(Command::Cancel),
        "filter" | "f" => {
            let name = rest.trim();
            if name.is_empty() {
                return Err(ParseError::MissingArgument("filter name"));
            }
            name.parse()
                .map(Command::Filter)
                .map_err(ParseError::InvalidFilter)
        }
        "clear" => Ok(Command::Clear),
        "list" | "ls" => Ok(Command::List),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

fn parse_row(value: &str) -> Result<usize, ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ParseError::MissingArgument("row number"));
    }
    match value.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row),
        _ => Err(ParseError::InvalidRow(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, Command, ParseError};
    use tasklist_core::Filter;

    #[test]
    fn add_keeps_raw_text_for_core_validation() {
        assert_eq!(parse("add   Buy milk  ").unwrap(), Command::Add("  Buy milk  ".to_string()));
        assert_eq!(parse("add").unwrap(), Command::Add(String::new()));
    }

    #[test]
    fn row_commands_require_positive_numbers() {
        assert_eq!(parse("toggle 2").unwrap(), Command::Toggle(2));
        assert_eq!(parse("rm 1").unwrap(), Command::Delete(1));
        assert_eq!(parse("edit 0").unwrap_err(), ParseError::InvalidRow("0".to_string()));
        assert_eq!(parse("edit").unwrap_err(), ParseError::MissingArgument("row number"));
    }

    #[test]
    fn filter_names_are_parsed() {
        assert_eq!(parse("filter Completed").unwrap(), Command::Filter(Filter::Completed));
        assert!(matches!(parse("filter later"), Err(ParseError::InvalidFilter(_))));
    }

    #[test]
    fn blank_and_unknown_lines_are_errors() {
        assert_eq!(parse("   ").unwrap_err(), ParseError::Empty);
        assert_eq!(parse("dance").unwrap_err(), ParseError::Unknown("dance".to_string()));
        assert_eq!(parse("QUIT").unwrap(), Command::Quit);
    }
}
