//! Batch progress display for multi-file submissions

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::debug;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Status of one file in the rolling display
#[derive(Debug, Clone, PartialEq, Eq)]
enum FileStatus {
    Running,
    Done(Duration),
}

/// Coordinates progress display for batch submissions
///
/// Shows an overall bar plus one status line for each of the most recent
/// files, capped at [`MAX_INDIVIDUAL_PROGRESS_BARS`] lines.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_lines: Vec<ProgressBar>,
    /// (`file name`, `status`) for every file started so far
    file_states: Vec<(String, FileStatus)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static LINE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_lines: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Create the batch bar and status lines for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let batch_bar = ProgressBar::new(file_count as u64);
        batch_bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(self.multi_progress.add(batch_bar));

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let line = ProgressBar::new_spinner();
            line.set_style(LINE_STYLE.clone());
            self.file_lines.push(self.multi_progress.add(line));
        }
    }

    /// Mark a file as in progress
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states
                .resize(index + 1, (String::new(), FileStatus::Running));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (display_name, FileStatus::Running);
        }
        self.update_lines();
    }

    /// Mark a file as completed and advance the batch bar
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.file_states.get_mut(index) {
            state.1 = FileStatus::Done(elapsed);
        }
        self.update_lines();
    }

    /// Number of files started so far
    pub const fn started_count(&self) -> usize {
        self.file_states.len()
    }

    /// Number of files marked as completed
    pub fn completed_count(&self) -> usize {
        self.file_states
            .iter()
            .filter(|(_, status)| matches!(status, FileStatus::Done(_)))
            .count()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All submissions processed");
        }
        if let Err(e) = self.multi_progress.clear() {
            debug!("Could not clear progress display: {e}");
        }
    }

    /// Show the last N files on the status lines
    fn update_lines(&self) {
        let active: Vec<&(String, FileStatus)> = self
            .file_states
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (line_idx, (name, status)) in visible.iter().enumerate() {
            if let Some(line) = self.file_lines.get(line_idx) {
                match status {
                    FileStatus::Running => {
                        line.set_prefix("…".to_string());
                        line.set_message(name.clone());
                    }
                    FileStatus::Done(elapsed) => {
                        line.set_prefix("✓".to_string());
                        line.set_message(format!("{name} ({} ms)", elapsed.as_millis()));
                    }
                }
            }
        }

        for line_idx in visible.len()..self.file_lines.len() {
            if let Some(line) = self.file_lines.get(line_idx) {
                line.set_prefix(String::new());
                line.set_message(String::new());
            }
        }
    }
}
