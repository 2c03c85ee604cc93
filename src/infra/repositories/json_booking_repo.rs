use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Stores all bookings as one pretty-printed JSON array.
///
/// `append` reads the whole file, pushes the record and rewrites the file.
/// Earlier records are carried over as raw JSON, whatever their shape.
/// There is no locking: two concurrent appends can read the same base list
/// and the later write drops the earlier record.
pub struct JsonBookingRepo {
    path: PathBuf,
}

impl JsonBookingRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load_all(&self) -> Result<Vec<Value>, AppError> {
        match tokio::fs::read(&self.path).await {
            Ok(raw) => Ok(serde_json::from_slice(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

#[async_trait]
impl BookingRepository for JsonBookingRepo {
    async fn append(&self, booking: &Booking) -> Result<(), AppError> {
        let mut bookings = self.load_all().await?;
        bookings.push(serde_json::to_value(booking)?);

        let body = serde_json::to_vec_pretty(&bookings)?;
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }
}
