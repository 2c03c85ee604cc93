#[tokio::main]
async fn main() -> Result<(), tour_booking::error::AppError> {
    tour_booking::run().await
}
