use axum::{extract::State, Json};
use crate::state::AppState;
use crate::api::dtos::responses::{BookingResponse, BOOKING_FAILURE_MESSAGE};
use crate::api::extractors::booking_form::BookingForm;
use crate::domain::models::booking::Booking;
use crate::domain::services::validation::validate_booking;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Validation and storage failures are reported in the body with
/// `success: false`; only an unreadable catalog turns into an error status.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    BookingForm(payload): BookingForm,
) -> Result<Json<BookingResponse>, AppError> {
    let tours = state.tour_repo.list().await?;

    let draft = match validate_booking(&payload, &tours) {
        Ok(draft) => draft,
        Err(errors) => {
            warn!("Booking rejected: {}", errors);
            return Ok(Json(BookingResponse::rejected(errors.to_string())));
        }
    };

    let booking = Booking::new(draft);

    if let Err(e) = state.booking_repo.append(&booking).await {
        error!("Error saving booking {}: {}", booking.booking_id, e);
        return Ok(Json(BookingResponse::rejected(BOOKING_FAILURE_MESSAGE)));
    }

    info!("Booking confirmed: {} for tour {}", booking.booking_id, booking.tour_id);
    Ok(Json(BookingResponse::accepted()))
}
