//! Spinner shown while a package is being unpacked.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use std::time::Duration;

/// Indeterminate progress indicator for CLI operations.
///
/// The core does not report per-entry progress, so this only signals that
/// work is under way. Clears itself on drop.
pub struct UnpackSpinner {
    bar: ProgressBar,
}

impl UnpackSpinner {
    /// Creates and starts a spinner.
    ///
    /// # Arguments
    ///
    /// * `message` - Message to display (e.g., "Unpacking")
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();

        // Template: "⠋ Unpacking (3s)"
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg} ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stderr().is_term()
    }
}

impl Drop for UnpackSpinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
