use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::HashMap;
use tracing::warn;
use crate::api::dtos::responses::BookingResponse;
use crate::domain::models::booking::BookingSubmission;

/// Booking form fields from either a urlencoded or a multipart body.
///
/// A repeated field keeps its first value. Any other content type yields an
/// empty submission, which then fails validation like a blank form.
pub struct BookingForm(pub BookingSubmission);

/// Undecodable bodies still answer with the `{success, message}` shape.
pub struct BookingFormRejection(String);

impl IntoResponse for BookingFormRejection {
    fn into_response(self) -> Response {
        warn!("Booking form could not be read: {}", self.0);
        Json(BookingResponse::rejected("Invalid booking form submission")).into_response()
    }
}

impl<S> FromRequest<S> for BookingForm
where
    S: Send + Sync,
{
    type Rejection = BookingFormRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let pairs = if content_type.starts_with("multipart/form-data") {
            read_multipart(req, state).await?
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|e| BookingFormRejection(e.body_text()))?;
            serde_urlencoded::from_bytes::<Vec<(String, String)>>(&body)
                .map_err(|e| BookingFormRejection(e.to_string()))?
        } else {
            Vec::new()
        };

        Ok(BookingForm(submission_from_pairs(pairs)))
    }
}

async fn read_multipart<S: Send + Sync>(req: Request, state: &S) -> Result<Vec<(String, String)>, BookingFormRejection> {
    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|e| BookingFormRejection(e.body_text()))?;

    let mut pairs = Vec::new();
    while let Some(field) = multipart.next_field()
        .await
        .map_err(|e| BookingFormRejection(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else { continue };
        let value = field.text()
            .await
            .map_err(|e| BookingFormRejection(e.body_text()))?;
        pairs.push((name, value));
    }
    Ok(pairs)
}

fn submission_from_pairs(pairs: Vec<(String, String)>) -> BookingSubmission {
    let mut fields: HashMap<String, String> = HashMap::new();
    for (name, value) in pairs {
        fields.entry(name).or_insert(value);
    }

    BookingSubmission {
        tour_id: fields.remove("tour_id"),
        user_name: fields.remove("user_name"),
        user_email: fields.remove("user_email"),
        user_phone: fields.remove("user_phone"),
        preferred_date_time: fields.remove("preferred_date_time"),
        number_of_people: fields.remove("number_of_people"),
        special_requests: fields.remove("special_requests"),
    }
}
