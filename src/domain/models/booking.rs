use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{Local, NaiveDateTime};

/// A persisted booking. Field names are the keys of the bookings file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Booking {
    pub booking_id: String,
    pub tour_id: String,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub number_of_people: u32,
    pub preferred_date_time: String,
    pub special_requests: String,
    pub booking_time: NaiveDateTime,
}

/// Raw `POST /book` form fields, exactly as submitted.
#[derive(Debug, Clone, Default)]
pub struct BookingSubmission {
    pub tour_id: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_phone: Option<String>,
    pub preferred_date_time: Option<String>,
    pub number_of_people: Option<String>,
    pub special_requests: Option<String>,
}

/// Validated, normalized form input that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub tour_id: String,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub number_of_people: u32,
    pub preferred_date_time: String,
    pub special_requests: String,
}

impl Booking {
    pub fn new(draft: BookingDraft) -> Self {
        Self {
            booking_id: Uuid::new_v4().to_string(),
            tour_id: draft.tour_id,
            user_name: draft.user_name,
            user_email: draft.user_email,
            user_phone: draft.user_phone,
            number_of_people: draft.number_of_people,
            preferred_date_time: draft.preferred_date_time,
            special_requests: draft.special_requests,
            booking_time: Local::now().naive_local(),
        }
    }
}
