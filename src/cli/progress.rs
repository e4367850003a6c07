use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use same_same::progress::percent_complete;
use same_same::ProgressReporter;
use std::sync::Mutex;

const BAR_TEMPLATE: &str = "[{elapsed_precise}] {prefix:.bold}▕{bar:40.blue}▏{msg}";

/// CLI progress reporter using an indicatif bar over the `n²` ordered pairs.
/// The message carries the percentage with two decimals.
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn set_bar(&self, pb: ProgressBar) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(old) = guard.take() {
                old.finish_and_clear();
            }
            *guard = Some(pb);
        }
    }

    fn finish_bar(&self) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(pb) = guard.take() {
                pb.finish();
            }
        }
    }
}

impl ProgressReporter for CliReporter {
    fn on_discover_complete(&self, total_files: usize, duration_secs: f64) {
        eprintln!(
            "  \x1b[32m✓\x1b[0m Discovery complete: {} files in {:.2}s",
            total_files, duration_secs
        );
    }

    fn on_compare_start(&self, total_visits: u64) {
        let _ = Term::stderr().hide_cursor();
        let pb = ProgressBar::new(total_visits);
        pb.set_style(
            ProgressStyle::with_template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░  "),
        );
        pb.set_prefix("Comparing");
        pb.set_message(format!("{:.2}%", 0.0));
        self.set_bar(pb);
    }

    fn on_compare_progress(&self, visited: u64, total_visits: u64) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(pb) = guard.as_ref() {
                pb.set_position(visited);
                pb.set_message(format!("{:.2}%", percent_complete(visited, total_visits)));
            }
        }
    }

    fn on_compare_complete(&self, scored_pairs: usize, duration_secs: f64) {
        self.finish_bar();
        restore_cursor();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Compare complete: {} scored pairs in {:.2}s",
            scored_pairs, duration_secs
        );
    }
}

/// Shows the cursor again. Safe to call when it was never hidden.
pub fn restore_cursor() {
    let _ = Term::stderr().show_cursor();
}
