pub mod json_booking_repo;
pub mod json_tour_repo;
