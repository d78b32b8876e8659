//! The site's two forms.
//!
//! Both share one engine and differ only in their field tables and
//! [`FormSettings`]. The booking form's date window is relative to the
//! current date, read from the clock function the caller supplies each time
//! the field is checked.

use std::sync::Arc;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use bita_core::FormSettings;

use crate::channel::SubmissionChannel;
use crate::fields::{day_window, FieldRule, FieldSpec};
use crate::notice::Notifier;
use crate::pipeline::FormPipeline;

/// Form name of the table booking form.
pub const BOOKING_FORM: &str = "booking";

/// Form name of the contact form.
pub const CONTACT_FORM: &str = "contact";

/// Reservation slots offered by the booking form: lunch and dinner service.
pub const BOOKING_TIME_SLOTS: [&str; 13] = [
    "12:00", "12:30", "13:00", "13:30", "14:00", "14:30", //
    "18:00", "18:30", "19:00", "19:30", "20:00", "20:30", "21:00",
];

/// Party sizes offered by the booking form. `"11"` stands for "11 or more".
pub const PARTY_SIZES: [&str; 11] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"];

/// How far ahead a table can be booked, in days.
pub const BOOKING_WINDOW_DAYS: u64 = 30;

const REQUIRED: &str = "שדה חובה";

static BOOKING_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0\d{8,9}$").expect("valid booking phone regex"));

static CONTACT_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\-\+]{9,15}$").expect("valid contact phone regex"));

/// Returns the bookable date window for `today`: tomorrow through 30 days out.
pub fn booking_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    day_window(today, 1, BOOKING_WINDOW_DAYS)
}

/// The local calendar date, for forms that face real users.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Field table of the booking form, with its date window relative to `today()`.
pub fn booking_fields(today: fn() -> NaiveDate) -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name")
            .label("שם מלא")
            .required_message(REQUIRED),
        FieldSpec::new("phone")
            .label("טלפון")
            .required_message(REQUIRED)
            .rule(FieldRule::Regex(BOOKING_PHONE_RE.clone()))
            .error_message("אנא הכנס מספר טלפון תקין"),
        FieldSpec::new("email")
            .label("אימייל")
            .required_message(REQUIRED)
            .rule(FieldRule::Email)
            .error_message("אנא הכנס כתובת אימייל תקינה"),
        FieldSpec::new("partySize")
            .label("מספר סועדים")
            .required_message(REQUIRED)
            .rule(FieldRule::one_of(PARTY_SIZES))
            .error_message("אנא בחר מספר סועדים"),
        FieldSpec::new("date")
            .label("תאריך")
            .required_message(REQUIRED)
            .rule(FieldRule::DateWithinDays {
                first: 1,
                last: BOOKING_WINDOW_DAYS,
                today,
            })
            .error_message("אנא בחר תאריך בטווח ההזמנות"),
        FieldSpec::new("time")
            .label("שעה")
            .required_message(REQUIRED)
            .rule(FieldRule::one_of(BOOKING_TIME_SLOTS))
            .error_message("אנא בחר שעה"),
        FieldSpec::new("message")
            .label("הערות מיוחדות")
            .required(false),
    ]
}

/// Field table of the contact form.
pub fn contact_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name")
            .label("שם מלא")
            .required_message(REQUIRED),
        FieldSpec::new("phone")
            .label("טלפון")
            .required_message(REQUIRED)
            .rule(FieldRule::Regex(CONTACT_PHONE_RE.clone()))
            .error_message("מספר טלפון לא תקין"),
        FieldSpec::new("email")
            .label("אימייל")
            .required_message(REQUIRED)
            .rule(FieldRule::Email)
            .error_message("כתובת אימייל לא תקינה"),
        FieldSpec::new("message")
            .label("הודעה")
            .required_message(REQUIRED),
    ]
}

/// Builds a booking form whose date window follows `today()`.
pub fn booking_form(
    today: fn() -> NaiveDate,
    settings: FormSettings,
    channel: Arc<dyn SubmissionChannel>,
    notifier: Arc<dyn Notifier>,
) -> FormPipeline {
    FormPipeline::new(BOOKING_FORM, booking_fields(today), settings, channel, notifier)
}

/// Builds a contact form.
pub fn contact_form(
    settings: FormSettings,
    channel: Arc<dyn SubmissionChannel>,
    notifier: Arc<dyn Notifier>,
) -> FormPipeline {
    FormPipeline::new(CONTACT_FORM, contact_fields(), settings, channel, notifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::validation::{validate_field, validate_form};
    use std::collections::HashMap;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn spec<'a>(specs: &'a [FieldSpec], name: &str) -> &'a FieldSpec {
        specs.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn test_booking_field_order() {
        let names: Vec<String> = booking_fields(today).into_iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            ["name", "phone", "email", "partySize", "date", "time", "message"]
        );
    }

    #[test]
    fn test_booking_phone() {
        let specs = booking_fields(today);
        let phone = spec(&specs, "phone");
        assert!(validate_field(phone, "0501234567").is_ok());
        assert!(validate_field(phone, "031234567").is_ok());
        let err = validate_field(phone, "501234567").unwrap_err();
        assert_eq!(err.message(), "אנא הכנס מספר טלפון תקין");
        assert_eq!(validate_field(phone, "").unwrap_err().message(), "שדה חובה");
    }

    #[test]
    fn test_booking_date_window() {
        let specs = booking_fields(today);
        let date = spec(&specs, "date");
        assert!(validate_field(date, "2024-05-10").is_err());
        assert!(validate_field(date, "2024-05-11").is_ok());
        assert!(validate_field(date, "2024-06-09").is_ok());
        assert!(validate_field(date, "2024-06-10").is_err());
        assert!(validate_field(date, "10/05/2024").is_err());
    }

    #[test]
    fn test_booking_window_edges() {
        let (min, max) = booking_window(today());
        assert_eq!(min, NaiveDate::from_ymd_opt(2024, 5, 11).unwrap());
        assert_eq!(max, NaiveDate::from_ymd_opt(2024, 6, 9).unwrap());
    }

    #[test]
    fn test_booking_window_follows_clock() {
        use std::sync::atomic::{AtomicU64, Ordering};

        static DAYS_OPEN: AtomicU64 = AtomicU64::new(0);
        fn clock() -> NaiveDate {
            today()
                .checked_add_days(chrono::Days::new(DAYS_OPEN.load(Ordering::SeqCst)))
                .unwrap()
        }

        let specs = booking_fields(clock);
        let date = spec(&specs, "date");
        assert!(validate_field(date, "2024-05-11").is_ok());

        // The form stays open past midnight.
        DAYS_OPEN.store(1, Ordering::SeqCst);
        assert!(validate_field(date, "2024-05-11").is_err());
        assert!(validate_field(date, "2024-06-10").is_ok());
    }

    #[test]
    fn test_booking_time_slots() {
        let specs = booking_fields(today);
        let time = spec(&specs, "time");
        for slot in BOOKING_TIME_SLOTS {
            assert!(validate_field(time, slot).is_ok(), "{slot}");
        }
        assert!(validate_field(time, "16:00").is_err());
        assert!(validate_field(time, "12:15").is_err());
    }

    #[test]
    fn test_booking_party_size() {
        let specs = booking_fields(today);
        let party = spec(&specs, "partySize");
        assert!(validate_field(party, "1").is_ok());
        assert!(validate_field(party, "11").is_ok());
        assert!(validate_field(party, "12").is_err());
        assert!(validate_field(party, "0").is_err());
    }

    #[test]
    fn test_booking_message_optional() {
        let specs = booking_fields(today);
        assert!(validate_field(spec(&specs, "message"), "").is_ok());
    }

    #[test]
    fn test_contact_all_required() {
        let errors = validate_form(&contact_fields(), &HashMap::new());
        assert_eq!(errors.len(), 4);
        assert!(errors
            .values()
            .all(|e| matches!(e, FieldError::MissingRequired { .. })));
    }

    #[test]
    fn test_contact_phone_and_email() {
        let specs = contact_fields();
        let phone = spec(&specs, "phone");
        assert!(validate_field(phone, "+972-50-1234567").is_ok());
        assert!(validate_field(phone, "050 1234567").is_err());
        assert_eq!(
            validate_field(spec(&specs, "email"), "d@x")
                .unwrap_err()
                .message(),
            "כתובת אימייל לא תקינה"
        );
    }
}
