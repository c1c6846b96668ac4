//! Progress bar implementation for hashing.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressState;
use indicatif::ProgressStyle;
use std::fmt::Write;
use vger_core::NoopProgress;
use vger_core::ProgressCallback;

/// CLI progress spinner implementing `ProgressCallback`.
///
/// The number of units is only known once the container has been opened,
/// so this shows the current unit and bytes hashed rather than a bar.
pub struct CliProgress {
    bar: ProgressBar,
    bytes_hashed: u64,
}

impl CliProgress {
    /// Creates a new CLI progress spinner.
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();

        // Template: "⠋ Hashing 2/5 a.zip (15.2 MB, 5.1 MB/s)"
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg} ({bytes}, {bytes_per_sec})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .with_key("bytes", |state: &ProgressState, w: &mut dyn Write| {
                    write!(w, "{}", humanize_bytes(state.pos())).unwrap_or(());
                })
                .with_key("bytes_per_sec", |state: &ProgressState, w: &mut dyn Write| {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let bytes_per_sec = state.per_sec() as u64;
                    write!(w, "{}/s", humanize_bytes(bytes_per_sec)).unwrap_or(());
                }),
        );

        bar.set_message(message.to_string());

        Self {
            bar,
            bytes_hashed: 0,
        }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stderr().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, label: &str, current: usize, total: usize) {
        self.bar
            .set_message(format!("Hashing {current}/{total} {label}"));
    }

    fn on_bytes_hashed(&mut self, bytes: u64) {
        self.bytes_hashed += bytes;
        self.bar.set_position(self.bytes_hashed);
    }

    fn on_entry_complete(&mut self, _label: &str) {
        self.bar.tick();
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Runs `f` with a spinner when `enabled` and stderr is a terminal, or with
/// a no-op callback otherwise.
pub fn with_progress<T>(enabled: bool, f: impl FnOnce(&mut dyn ProgressCallback) -> T) -> T {
    if enabled && CliProgress::should_show() {
        let mut progress = CliProgress::new("Hashing");
        f(&mut progress)
    } else {
        f(&mut NoopProgress)
    }
}

/// Converts bytes to human-readable format (KB, MB, GB, TB).
#[allow(clippy::cast_precision_loss)]
fn humanize_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
