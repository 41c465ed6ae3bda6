#![allow(dead_code)]

use std::collections::VecDeque;
use tasklist_core::{Frame, Notice, NoticeLevel, TaskId, UiShell};

/// Shell that records every call and answers prompts from a script.
#[derive(Debug, Default)]
pub struct RecordingShell {
    pub frames: Vec<Frame>,
    pub prompts: Vec<String>,
    pub notices: Vec<Notice>,
    pub answers: VecDeque<bool>,
    pub add_input_resets: usize,
    pub focused: Vec<TaskId>,
}

impl RecordingShell {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> &Frame {
        self.frames.last().expect("at least one frame presented")
    }

    pub fn errors(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|notice| notice.level == NoticeLevel::Error)
            .map(|notice| notice.text.as_str())
            .collect()
    }
}

impl UiShell for RecordingShell {
    fn present(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        // Unscripted prompts are accepted.
        self.answers.pop_front().unwrap_or(true)
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn reset_add_input(&mut self) {
        self.add_input_resets += 1;
    }

    fn focus_edit_input(&mut self, id: &TaskId) {
        self.focused.push(id.clone());
    }
}
