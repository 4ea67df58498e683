//! Table Booking
//!
//! Form state and phone validation. Nothing is sent anywhere; an accepted
//! booking only clears the form.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{CLOSING_HOUR, OPENING_HOUR, PHONE_PATTERN};

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("PHONE_PATTERN is a valid regex"));

/// Drop whitespace and hyphens ("+380 50-123-45-67" -> "+380501234567")
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace() && *c != '-').collect()
}

pub fn is_valid_phone(raw: &str) -> bool {
    PHONE_RE.is_match(&normalize_phone(raw))
}

/// Hourly slots for the time selector, "10:00" through "22:00"
pub fn time_slots() -> Vec<String> {
    (OPENING_HOUR..=CLOSING_HOUR).map(|hour| format!("{}:00", hour)).collect()
}

/// Validity marker on the phone input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhoneMarker {
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

impl PhoneMarker {
    /// Bootstrap class for the marker
    pub fn class(self) -> &'static str {
        match self {
            PhoneMarker::Unchecked => "",
            PhoneMarker::Valid => "is-valid",
            PhoneMarker::Invalid => "is-invalid",
        }
    }
}

/// Result of one submit attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    Accepted,
}

/// Booking form fields as typed by the visitor
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingDraft {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub phone_marker: PhoneMarker,
}

impl BookingDraft {
    /// Check the phone and set its marker
    pub fn validate(&mut self) -> SubmitOutcome {
        if is_valid_phone(&self.phone) {
            self.phone_marker = PhoneMarker::Valid;
            SubmitOutcome::Accepted
        } else {
            self.phone_marker = PhoneMarker::Invalid;
            SubmitOutcome::Invalid
        }
    }

    /// Clear every field and marker
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
