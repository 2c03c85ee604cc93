use std::sync::Arc;
use crate::domain::ports::{BookingRepository, TourRepository};
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub tour_repo: Arc<dyn TourRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub templates: Arc<Tera>,
}
