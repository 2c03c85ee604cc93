use crate::domain::models::{booking::Booking, tour::Tour};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait TourRepository: Send + Sync {
    /// Returns the catalog in file order. A missing data file is an empty catalog.
    async fn list(&self) -> Result<Vec<Tour>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Tour>, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn append(&self, booking: &Booking) -> Result<(), AppError>;
}
