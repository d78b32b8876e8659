//! Valid values and pre-wired forms for tests.

use std::sync::Arc;

use chrono::{Days, NaiveDate};

use bita_core::FormSettings;
use bita_forms::presets::{booking_form, contact_form};
use bita_forms::{FormPipeline, NoticeBoard};

use crate::recording_channel::RecordingChannel;

/// A fixed "today" so date windows are reproducible.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 10).unwrap_or_default()
}

/// A booking that passes validation for `today`.
pub fn valid_booking(today: NaiveDate) -> Vec<(&'static str, String)> {
    let date = today.checked_add_days(Days::new(7)).unwrap_or(today);
    vec![
        ("name", "דנה כהן".to_string()),
        ("phone", "0501234567".to_string()),
        ("email", "dana@example.com".to_string()),
        ("partySize", "4".to_string()),
        ("date", date.format("%Y-%m-%d").to_string()),
        ("time", "19:30".to_string()),
        ("message", String::new()),
    ]
}

/// A contact message that passes validation.
pub fn valid_contact() -> Vec<(&'static str, String)> {
    vec![
        ("name", "Dana".to_string()),
        ("phone", "050-1234567".to_string()),
        ("email", "d@x.com".to_string()),
        ("message", "Do you have vegan options?".to_string()),
    ]
}

/// A form wired to a [`RecordingChannel`] and a [`NoticeBoard`].
#[derive(Debug, Clone)]
pub struct FormHarness {
    /// The form under test.
    pub form: FormPipeline,
    /// Every payload the form sent.
    pub channel: RecordingChannel,
    /// Every notice the form emitted.
    pub notices: NoticeBoard,
}

/// A booking form whose date window follows [`today`], with the given settings.
pub fn booking_harness(settings: FormSettings) -> FormHarness {
    let channel = RecordingChannel::new();
    let notices = NoticeBoard::new();
    let form = booking_form(
        today,
        settings,
        Arc::new(channel.clone()),
        Arc::new(notices.clone()),
    );
    FormHarness {
        form,
        channel,
        notices,
    }
}

/// A contact form with the given settings.
pub fn contact_harness(settings: FormSettings) -> FormHarness {
    let channel = RecordingChannel::new();
    let notices = NoticeBoard::new();
    let form = contact_form(settings, Arc::new(channel.clone()), Arc::new(notices.clone()));
    FormHarness {
        form,
        channel,
        notices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bita_forms::validate_form;
    use std::collections::HashMap;

    fn as_map(pairs: Vec<(&'static str, String)>) -> HashMap<String, String> {
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_valid_booking_validates() {
        let form = booking_harness(FormSettings::booking()).form;
        assert!(validate_form(form.specs(), &as_map(valid_booking(today()))).is_empty());
    }

    #[test]
    fn test_valid_contact_validates() {
        let form = contact_harness(FormSettings::contact()).form;
        assert!(validate_form(form.specs(), &as_map(valid_contact())).is_empty());
    }
}
