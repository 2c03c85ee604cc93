use std::fmt;
use std::sync::LazyLock;
use regex::Regex;
use crate::domain::models::{
    booking::{BookingDraft, BookingSubmission},
    tour::Tour,
};

pub const MIN_PARTY_SIZE: i64 = 1;
pub const MAX_PARTY_SIZE: i64 = 20;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern")
});

/// Every rule that failed for one submission, in evaluation order. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// `preferred_date_time` -> `Preferred Date Time`
pub fn humanize_field(field: &str) -> String {
    field
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn trimmed(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or("")
}

/// Checks a submission against the catalog snapshot. All rules run; the
/// draft is only produced when none of them failed.
pub fn validate_booking(form: &BookingSubmission, catalog: &[Tour]) -> Result<BookingDraft, ValidationErrors> {
    let mut errors = Vec::new();

    let required = [
        ("tour_id", &form.tour_id),
        ("user_name", &form.user_name),
        ("user_email", &form.user_email),
        ("user_phone", &form.user_phone),
        ("preferred_date_time", &form.preferred_date_time),
        ("number_of_people", &form.number_of_people),
    ];
    for (field, value) in required {
        if trimmed(value).is_empty() {
            errors.push(format!("{} is required", humanize_field(field)));
        }
    }

    let email = trimmed(&form.user_email);
    if !email.is_empty() && !is_valid_email(email) {
        errors.push("Please enter a valid email address".to_string());
    }

    // An absent field counts as zero, so it fails the range check rather than the parse.
    let party_size = match &form.number_of_people {
        None => Some(0),
        Some(raw) => raw.trim().parse::<i64>().ok(),
    };
    match party_size {
        Some(n) if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&n) => {
            errors.push(format!(
                "Number of people must be between {} and {}",
                MIN_PARTY_SIZE, MAX_PARTY_SIZE
            ));
        }
        Some(_) => {}
        None => errors.push("Number of people must be a valid number".to_string()),
    }

    let tour_id = form.tour_id.as_deref();
    if !catalog.iter().any(|t| Some(t.id.as_str()) == tour_id) {
        errors.push("Invalid tour selected".to_string());
    }

    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }

    Ok(BookingDraft {
        tour_id: tour_id.unwrap_or_default().to_string(),
        user_name: trimmed(&form.user_name).to_string(),
        user_email: email.to_string(),
        user_phone: trimmed(&form.user_phone).to_string(),
        number_of_people: party_size.and_then(|n| u32::try_from(n).ok()).unwrap_or_default(),
        preferred_date_time: trimmed(&form.preferred_date_time).to_string(),
        special_requests: trimmed(&form.special_requests).to_string(),
    })
}
