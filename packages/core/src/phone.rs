//! Phone login: format validation and the form it guards
//!
//! The login form holds a country code and a local number. At submission the
//! two are concatenated and checked against [`PHONE_PATTERN`]; a rejected
//! candidate produces a user-visible error and no navigation.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::notify::NotificationSink;

/// Leading `+`, one digit 1-9, then 7 to 11 digits
pub const PHONE_PATTERN: &str = r"^\+[1-9]{1}[0-9]{7,11}$";

/// Message shown when the candidate is rejected
pub const INVALID_PHONE_MESSAGE: &str = "Please write a valid phone number";

pub const DEFAULT_COUNTRY_CODE: &str = "+82";

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(PHONE_PATTERN).unwrap();
}

/// Check `country_code + local_number` against [`PHONE_PATTERN`]
pub fn validate(country_code: &str, local_number: &str) -> Result<(), ValidationError> {
    let candidate = format!("{}{}", country_code, local_number);
    if PHONE_REGEX.is_match(&candidate) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhoneFormat)
    }
}

/// Input change on the login form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneAction {
    SetCountryCode(String),
    SetLocalNumber(String),
    Reset,
}

/// Login form state. Updated only through [`PhoneForm::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneForm {
    country_code: String,
    local_number: String,
}

impl Default for PhoneForm {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            local_number: String::new(),
        }
    }
}

impl PhoneForm {
    pub fn new(country_code: impl Into<String>, local_number: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            local_number: local_number.into(),
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn local_number(&self) -> &str {
        &self.local_number
    }

    /// The validation candidate
    pub fn candidate(&self) -> String {
        format!("{}{}", self.country_code, self.local_number)
    }

    /// Return the form with `action` applied
    #[must_use]
    pub fn apply(&self, action: PhoneAction) -> Self {
        match action {
            PhoneAction::SetCountryCode(country_code) => Self {
                country_code,
                ..self.clone()
            },
            PhoneAction::SetLocalNumber(local_number) => Self {
                local_number,
                ..self.clone()
            },
            PhoneAction::Reset => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.country_code, &self.local_number)
    }
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Candidate accepted and handed to the next step
    Submitted(String),
    /// Candidate rejected; the sink was notified
    Rejected,
}

/// Validate the form and either hand the candidate to `proceed` or notify
/// `sink` with [`INVALID_PHONE_MESSAGE`]. `proceed` is not called on rejection.
pub fn submit<S, F>(form: &PhoneForm, sink: &S, proceed: F) -> SubmitOutcome
where
    S: NotificationSink + ?Sized,
    F: FnOnce(&str),
{
    let candidate = form.candidate();

    match form.validate() {
        Ok(()) => {
            debug!(phone = %candidate, "phone number accepted");
            proceed(&candidate);
            SubmitOutcome::Submitted(candidate)
        }
        Err(e) => {
            warn!(phone = %candidate, error = %e, "phone number rejected");
            sink.notify_error(INVALID_PHONE_MESSAGE);
            SubmitOutcome::Rejected
        }
    }
}

/// Entry of the country select on the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    pub flag: &'static str,
    pub dial_code: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { name: "South Korea", flag: "\u{1F1F0}\u{1F1F7}", dial_code: "+82" },
    Country { name: "United States", flag: "\u{1F1FA}\u{1F1F8}", dial_code: "+1" },
    Country { name: "United Kingdom", flag: "\u{1F1EC}\u{1F1E7}", dial_code: "+44" },
    Country { name: "Japan", flag: "\u{1F1EF}\u{1F1F5}", dial_code: "+81" },
    Country { name: "China", flag: "\u{1F1E8}\u{1F1F3}", dial_code: "+86" },
    Country { name: "Germany", flag: "\u{1F1E9}\u{1F1EA}", dial_code: "+49" },
    Country { name: "France", flag: "\u{1F1EB}\u{1F1F7}", dial_code: "+33" },
    Country { name: "Spain", flag: "\u{1F1EA}\u{1F1F8}", dial_code: "+34" },
    Country { name: "Italy", flag: "\u{1F1EE}\u{1F1F9}", dial_code: "+39" },
    Country { name: "Brazil", flag: "\u{1F1E7}\u{1F1F7}", dial_code: "+55" },
    Country { name: "Mexico", flag: "\u{1F1F2}\u{1F1FD}", dial_code: "+52" },
    Country { name: "India", flag: "\u{1F1EE}\u{1F1F3}", dial_code: "+91" },
    Country { name: "Australia", flag: "\u{1F1E6}\u{1F1FA}", dial_code: "+61" },
    Country { name: "Colombia", flag: "\u{1F1E8}\u{1F1F4}", dial_code: "+57" },
    Country { name: "Philippines", flag: "\u{1F1F5}\u{1F1ED}", dial_code: "+63" },
];
