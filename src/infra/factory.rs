use std::sync::Arc;
use tera::Tera;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;
use crate::infra::repositories::{
    json_booking_repo::JsonBookingRepo, json_tour_repo::JsonTourRepo,
};

/// Page templates compiled into the binary. Registered in one batch so that
/// `{% extends "base.html" %}` resolves.
pub fn load_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("tour_detail.html", include_str!("../templates/tour_detail.html")),
        ("about.html", include_str!("../templates/about.html")),
    ])?;
    Ok(tera)
}

pub fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    if config.uses_default_secret() {
        warn!("SESSION_SECRET not set, falling back to the built-in default secret");
    }

    info!(
        "Using tours file {} and bookings file {}",
        config.tours_file, config.bookings_file
    );

    Ok(AppState {
        config: config.clone(),
        tour_repo: Arc::new(JsonTourRepo::new(&config.tours_file)),
        booking_repo: Arc::new(JsonBookingRepo::new(&config.bookings_file)),
        templates: Arc::new(load_templates()?),
    })
}
