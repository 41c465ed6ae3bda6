//! Terminal UI shell.
//!
//! # Responsibility
//! - Present frames as plain text and remember which task each row shows.
//! - Answer confirmation prompts from the same input the command loop reads.

use log::warn;
use std::io::{self, BufRead, Write};
use tasklist_core::{Frame, Notice, NoticeLevel, TaskId, UiShell};

/// Line-oriented shell over any reader/writer pair.
pub struct TerminalShell<R, W> {
    input: R,
    output: W,
    rows: Vec<TaskId>,
}

impl<R: BufRead, W: Write> TerminalShell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            rows: Vec::new(),
        }
    }

    /// Reads one line; `Ok(None)` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so a garbled line becomes
    /// an unknown command instead of ending the session.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Task id shown at 1-based `row` in the last presented frame.
    pub fn row_id(&self, row: usize) -> Option<&TaskId> {
        row.checked_sub(1).and_then(|index| self.rows.get(index))
    }

    pub fn say(&mut self, message: &str) {
        self.write_line(message);
    }

    fn write_line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}") {
            warn!("event=terminal_write module=cli status=error error={err}");
        }
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> UiShell for TerminalShell<R, W> {
    fn present(&mut self, frame: &Frame) {
        self.rows = frame.visible.clone();
        let clear = if frame.clear_enabled() {
            frame.clear_label()
        } else {
            format!("{} - nothing to clear", frame.clear_label())
        };
        self.write_line(&format!(
            "\n-- {} --\n{}\n{} | {}",
            frame.filter,
            frame.list.trim_end(),
            frame.status_text(),
            clear
        ));
    }

    fn confirm(&mut self, message: &str) -> bool {
        match self.read_line(&format!("{message} [y/N] ")) {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }

    fn notify(&mut self, notice: Notice) {
        let marker = match notice.level {
            NoticeLevel::Error => "!",
            NoticeLevel::Success => "*",
        };
        self.write_line(&format!("{marker} {}", notice.text));
    }

    fn focus_edit_input(&mut self, _id: &TaskId) {
        self.write_line("editing: `save <text>` to keep, `cancel` to stop");
    }
}

#[cfg(test)]
mod tests {
    use super::TerminalShell;
    use std::io::{self, Cursor, Write};
    use tasklist_core::{ManagerConfig, MemoryStore, TaskListManager, UiShell};

    #[test]
    fn confirm_accepts_only_yes() {
        let mut shell = TerminalShell::new(Cursor::new("y\nno\n\nYES\n"), Vec::new());
        assert!(shell.confirm("sure?"));
        assert!(!shell.confirm("sure?"));
        assert!(!shell.confirm("sure?"));
        assert!(shell.confirm("sure?"));
        assert!(!shell.confirm("sure?"));
    }

    #[test]
    fn invalid_utf8_line_is_read_lossily() {
        let input: &[u8] = b"\xff\xfe add\nnext\n";
        let mut shell = TerminalShell::new(input, Vec::new());

        let garbled = shell.read_line("> ").unwrap().unwrap();
        assert!(garbled.contains('\u{FFFD}'));
        assert!(garbled.ends_with(" add"));
        assert_eq!(shell.read_line("> ").unwrap().as_deref(), Some("next"));
        assert_eq!(shell.read_line("> ").unwrap(), None);
    }

    #[test]
    fn present_maps_rows_to_visible_tasks() {
        let shell = TerminalShell::new(Cursor::new(""), Vec::new());
        let mut manager =
            TaskListManager::open(MemoryStore::new(), shell, ManagerConfig::text()).unwrap();
        manager.add("older");
        manager.add("newer");

        let newest = manager.tasks()[0].id.clone();
        assert_eq!(manager.shell().row_id(1), Some(&newest));
        assert_eq!(manager.shell().row_id(3), None);
        assert_eq!(manager.shell().row_id(0), None);

        let printed = String::from_utf8(manager.shell().output().clone()).unwrap();
        assert!(printed.contains("1. [ ] newer"));
        assert!(printed.contains("2 tasks remaining"));
        assert!(printed.contains("* Task added"));
    }

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn closed_output_does_not_stop_presenting() {
        let shell = TerminalShell::new(Cursor::new(""), ClosedOutput);
        let mut manager =
            TaskListManager::open(MemoryStore::new(), shell, ManagerConfig::text()).unwrap();
        manager.add("still tracked");
        manager.shell_mut().say("ignored");

        assert_eq!(manager.tasks().len(), 1);
        assert_eq!(manager.shell().row_id(1), Some(&manager.tasks()[0].id));
        assert!(manager.shell_mut().read_line("> ").is_err());
    }
}
