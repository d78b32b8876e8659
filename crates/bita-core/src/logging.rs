//! Logging integration for bita-rs.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-submission spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level`. In debug mode a pretty,
/// human-readable format is used; otherwise a structured JSON format is used.
/// Calling this more than once is harmless: later calls are ignored.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one form submission.
///
/// The form pipeline enters this span while it awaits the submission
/// channel, so every event logged by a channel implementation carries the
/// form name and submission id.
///
/// # Examples
///
/// ```
/// use bita_core::logging::submission_span;
///
/// let span = submission_span("booking", "5b1c0f3e");
/// let _guard = span.enter();
/// tracing::info!("sending");
/// ```
pub fn submission_span(form: &str, submission_id: &str) -> tracing::Span {
    tracing::info_span!("submission", form = form, id = submission_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_is_harmless() {
        let settings = Settings {
            log_level: "not a [valid filter".to_string(),
            ..Settings::default()
        };
        setup_logging(&settings);
        setup_logging(&settings);
    }

    #[test]
    fn test_submission_span_enters() {
        let span = submission_span("contact", "abc");
        let _guard = span.enter();
        tracing::debug!("inside span");
    }
}
