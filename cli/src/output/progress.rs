//! Spinner shown while waiting on the provider.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(100);

/// Start a steadily ticking spinner with `msg` next to it.
#[must_use]
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner().with_message(msg.to_string());
    if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg:.dim}") {
        pb.set_style(style.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
    }
    pb.enable_steady_tick(TICK);
    pb
}

/// Remove a spinner from the terminal without leaving a trace.
pub fn finish_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}
