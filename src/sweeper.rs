use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::engine::ReservationService;
use crate::store::{BookingStore, RoomDirectory};

/// Background task that periodically moves confirmed bookings with a passed
/// check-out to completed.
pub async fn run_sweeper<S, R>(service: Arc<ReservationService<S, R>>, period: Duration)
where
    S: BookingStore,
    R: RoomDirectory,
{
    let mut interval = tokio::time::interval(period);
    loop {
        interval.tick().await;
        match service.sweep_completions().await {
            Ok(done) => {
                for booking in &done {
                    info!(
                        "swept booking {} to completed (checked out {})",
                        booking.id, booking.stay.check_out
                    );
                }
            }
            Err(e) => warn!("completion sweep failed: {e}"),
        }
    }
}
