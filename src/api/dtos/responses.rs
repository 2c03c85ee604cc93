use serde::{Deserialize, Serialize};

pub const BOOKING_SUCCESS_MESSAGE: &str =
    "Booking successful! We will contact you soon to confirm details.";
pub const BOOKING_FAILURE_MESSAGE: &str =
    "Booking failed due to server error. Please try again or contact us directly.";

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
}

impl BookingResponse {
    pub fn accepted() -> Self {
        Self { success: true, message: BOOKING_SUCCESS_MESSAGE.to_string() }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
