//! Settings for the Bita site.
//!
//! [`Settings`] holds the site-wide configuration and one [`FormSettings`]
//! block per form. Each form instance reads its own block at construction;
//! there is no process-wide settings singleton.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What happens to the success state after a submission succeeds.
///
/// The booking and contact forms disagree here: the booking form leaves its
/// confirmation in place, while the contact form clears it after five seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SuccessDisplay {
    /// Stay in `Succeeded` until the next edit.
    #[default]
    Sticky,
    /// Return to `Idle` after the given number of milliseconds.
    AutoDismiss {
        /// Display duration in milliseconds.
        after_ms: u64,
    },
}

impl SuccessDisplay {
    /// Returns the auto-dismiss delay, or `None` for sticky display.
    pub const fn dismiss_after(&self) -> Option<Duration> {
        match self {
            Self::Sticky => None,
            Self::AutoDismiss { after_ms } => Some(Duration::from_millis(*after_ms)),
        }
    }
}

/// Per-form configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSettings {
    /// Behavior of the success state.
    pub success_display: SuccessDisplay,
    /// Upper bound on a single submission call, in milliseconds.
    ///
    /// `None` waits on the channel indefinitely.
    pub submission_timeout_ms: Option<u64>,
    /// Notice text emitted when the channel accepts the submission.
    pub success_message: String,
    /// Notice text emitted when the channel fails.
    pub error_message: String,
    /// Delay of the simulated submission channel, in milliseconds.
    pub simulated_delay_ms: u64,
}

impl FormSettings {
    /// Defaults for the table booking form.
    pub fn booking() -> Self {
        Self {
            success_display: SuccessDisplay::Sticky,
            submission_timeout_ms: None,
            success_message: "ההזמנה נשלחה בהצלחה!".to_string(),
            error_message: "אירעה שגיאה בשליחת ההזמנה. אנא נסה שוב.".to_string(),
            simulated_delay_ms: 1500,
        }
    }

    /// Defaults for the contact form.
    pub fn contact() -> Self {
        Self {
            success_display: SuccessDisplay::AutoDismiss { after_ms: 5000 },
            submission_timeout_ms: None,
            success_message: "ההודעה נשלחה בהצלחה! נחזור אליך בהקדם.".to_string(),
            error_message: "אירעה שגיאה בשליחת ההודעה. אנא נסה שוב.".to_string(),
            simulated_delay_ms: 1000,
        }
    }

    /// Returns the configured submission timeout.
    pub const fn submission_timeout(&self) -> Option<Duration> {
        match self.submission_timeout_ms {
            Some(ms) => Some(Duration::from_millis(ms)),
            None => None,
        }
    }

    /// Returns the simulated channel delay.
    pub const fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

impl Default for FormSettings {
    fn default() -> Self {
        Self::booking()
    }
}

/// The complete set of site settings.
///
/// # Examples
///
/// ```
/// use bita_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.log_level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled.
    pub debug: bool,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level or filter directive (e.g. "info", "`bita_forms=debug`").
    pub log_level: String,

    // ── Forms ────────────────────────────────────────────────────────

    /// Table booking form.
    pub booking: FormSettings,
    /// Contact form.
    pub contact: FormSettings,

    // ── Escape hatch ─────────────────────────────────────────────────

    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            booking: FormSettings::booking(),
            contact: FormSettings::contact(),
            extra: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.debug);
        assert_eq!(settings.booking.success_display, SuccessDisplay::Sticky);
        assert_eq!(
            settings.contact.success_display,
            SuccessDisplay::AutoDismiss { after_ms: 5000 }
        );
    }

    #[test]
    fn test_success_display_dismiss_after() {
        assert_eq!(SuccessDisplay::Sticky.dismiss_after(), None);
        assert_eq!(
            SuccessDisplay::AutoDismiss { after_ms: 250 }.dismiss_after(),
            Some(Duration::from_millis(250))
        );
    }

    #[test]
    fn test_simulated_delay_per_form() {
        assert_eq!(
            FormSettings::booking().simulated_delay(),
            Duration::from_millis(1500)
        );
        assert_eq!(
            FormSettings::contact().simulated_delay(),
            Duration::from_millis(1000)
        );
    }

    #[test]
    fn test_no_timeout_by_default() {
        assert_eq!(FormSettings::booking().submission_timeout(), None);
        assert_eq!(FormSettings::contact().submission_timeout(), None);
    }

    #[test]
    fn test_success_display_serde_tagging() {
        let json = serde_json::to_value(SuccessDisplay::AutoDismiss { after_ms: 10 }).unwrap();
        assert_eq!(json["mode"], "auto_dismiss");
        assert_eq!(json["after_ms"], 10);

        let sticky: SuccessDisplay = serde_json::from_str(r#"{"mode":"sticky"}"#).unwrap();
        assert_eq!(sticky, SuccessDisplay::Sticky);
    }

    #[test]
    fn test_settings_serde_roundtrip_keeps_forms() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.booking, settings.booking);
        assert_eq!(back.contact, settings.contact);
    }
}
