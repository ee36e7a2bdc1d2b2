mod calendar;
mod conflict;
mod error;
mod lifecycle;
mod pricing;

pub use calendar::{Calendar, DaySlot, build_calendar};
pub use conflict::{Availability, DatePolicy, check_conflict, validate_range};
pub use error::ReservationError;
pub use pricing::total_price;

use std::sync::Arc;
use std::time::Instant;

use chrono::{Duration, NaiveDate};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::limits::{DEFAULT_HORIZON_DAYS, MAX_GUESTS_PER_BOOKING, MAX_HORIZON_DAYS, MAX_NIGHTLY_RATE};
use crate::model::{Booking, BookingId, BookingStatus, Guests, Room, RoomId, StayRange};
use crate::observability;
use crate::store::{BookingStore, RoomDirectory};

#[derive(Debug, Clone, Copy)]
pub struct ServiceConfig {
    pub horizon_days: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

/// Status a booking may be created in. Which one applies is the payment
/// collaborator's call: `Pending` awaits payment, `Confirmed` is for stays
/// already paid (manager walk-ins, cash).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialStatus {
    Pending,
    Confirmed,
}

impl InitialStatus {
    fn status(self) -> BookingStatus {
        match self {
            InitialStatus::Pending => BookingStatus::Pending,
            InitialStatus::Confirmed => BookingStatus::Confirmed,
        }
    }
}

/// Orchestrating façade over the calendar, conflict checker, pricing and the
/// booking state machine. The customer, manager and admin flows all go
/// through here — none of them builds availability maps on its own.
///
/// Discipline: at most one confirmed booking per room-night. Enforced by
/// serializing `create_booking`/`confirm_booking` per room — the room's mutex
/// is held across load → check → persist, so two concurrent requests for
/// overlapping dates resolve to one success and one `RoomUnavailable`.
/// Requests for different rooms proceed in parallel.
pub struct ReservationService<S, R> {
    store: S,
    rooms: R,
    clock: Arc<dyn Clock>,
    config: ServiceConfig,
    room_locks: DashMap<RoomId, Arc<Mutex<()>>>,
}

impl<S: BookingStore, R: RoomDirectory> ReservationService<S, R> {
    pub fn new(store: S, rooms: R, clock: Arc<dyn Clock>, config: ServiceConfig) -> Self {
        Self {
            store,
            rooms,
            clock,
            config,
            room_locks: DashMap::new(),
        }
    }

    fn room_lock(&self, room_id: RoomId) -> Arc<Mutex<()>> {
        self.room_locks
            .entry(room_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn load_room(&self, room_id: RoomId) -> Result<Room, ReservationError> {
        let room = self
            .rooms
            .room(room_id)
            .await?
            .ok_or(ReservationError::RoomNotFound(room_id))?;
        if room.nightly_rate <= 0 || room.nightly_rate > MAX_NIGHTLY_RATE {
            return Err(ReservationError::InvalidRate(room.nightly_rate));
        }
        Ok(room)
    }

    /// Calendar window covering the configured horizon plus, when given, the
    /// whole requested range — the conflict checker treats days outside the
    /// window as occupied, so the window must never undershoot the request.
    /// Backdated ranges pull the window start before today.
    fn window_for(&self, today: NaiveDate, range: Option<&StayRange>) -> (NaiveDate, u32) {
        let mut start = today;
        let mut end = today + Duration::days(i64::from(self.config.horizon_days));
        if let Some(r) = range {
            start = start.min(r.check_in);
            end = end.max(r.check_out);
        }
        let days = (end - start).num_days().max(0) as u32;
        (start, days.min(MAX_HORIZON_DAYS))
    }

    /// Load the room's bookings and build a fresh Calendar Index. `exclude`
    /// drops one booking from the build — confirmation re-checks a booking's
    /// own dates and must not collide with itself.
    async fn room_calendar(
        &self,
        room_id: RoomId,
        range: Option<&StayRange>,
        exclude: Option<BookingId>,
    ) -> Result<Calendar, ReservationError> {
        let mut bookings = self.store.list_for_room(room_id).await?;
        if let Some(excluded) = exclude {
            bookings.retain(|b| b.id != excluded);
        }
        let (start, days) = self.window_for(self.clock.today(), range);
        Ok(build_calendar(&bookings, start, days))
    }

    /// Validate the range and test it against current confirmed bookings.
    /// Advisory only — the verdict can go stale the moment it is returned, so
    /// mutations re-check under the room lock before persisting.
    pub async fn check_availability(
        &self,
        room_id: RoomId,
        range: StayRange,
        policy: DatePolicy,
    ) -> Result<Availability, ReservationError> {
        let started = Instant::now();
        validate_range(&range, self.clock.today(), policy)?;
        self.load_room(room_id).await?;
        let cal = self.room_calendar(room_id, Some(&range), None).await?;
        let result = check_conflict(&cal, &range);

        metrics::counter!(observability::AVAILABILITY_CHECKS_TOTAL).increment(1);
        metrics::histogram!(observability::AVAILABILITY_CHECK_DURATION_SECONDS)
            .record(started.elapsed().as_secs_f64());
        Ok(result)
    }

    /// Full-horizon calendar for one room, for disabled-dates rendering.
    pub async fn calendar(&self, room_id: RoomId) -> Result<Calendar, ReservationError> {
        self.load_room(room_id).await?;
        self.room_calendar(room_id, None, None).await
    }

    pub async fn create_booking(
        &self,
        room_id: RoomId,
        range: StayRange,
        guests: Guests,
        initial: InitialStatus,
        policy: DatePolicy,
    ) -> Result<Booking, ReservationError> {
        if guests.adults < 1 {
            return Err(ReservationError::InvalidGuests("at least one adult required"));
        }
        if guests.total() > MAX_GUESTS_PER_BOOKING {
            return Err(ReservationError::InvalidGuests("too many guests"));
        }
        validate_range(&range, self.clock.today(), policy)?;
        let room = self.load_room(room_id).await?;

        let lock = self.room_lock(room_id);
        let _guard = lock.lock().await;

        let cal = self.room_calendar(room_id, Some(&range), None).await?;
        if let Availability::Unavailable { first_conflict } = check_conflict(&cal, &range) {
            metrics::counter!(observability::CONFLICTS_REJECTED_TOTAL).increment(1);
            debug!("create rejected for room {room_id}: conflict on {first_conflict}");
            return Err(ReservationError::RoomUnavailable { first_conflict });
        }

        let total_price = total_price(room.nightly_rate, &range);
        let booking = Booking::new(
            BookingId::new(),
            room_id,
            range,
            initial.status(),
            total_price,
            guests,
            self.clock.now(),
        );
        let saved = self.store.save(booking).await?;

        info!(
            "booking {} created {} for room {room_id}: {} -> {}, total {total_price}",
            saved.id, saved.status, range.check_in, range.check_out
        );
        metrics::counter!(
            observability::BOOKINGS_CREATED_TOTAL,
            "status" => observability::status_label(saved.status)
        )
        .increment(1);
        Ok(saved)
    }

    /// `pending → confirmed`. Availability is re-verified under the room lock
    /// because the dates may have been taken by another confirmed booking
    /// since creation.
    pub async fn confirm_booking(&self, id: BookingId) -> Result<Booking, ReservationError> {
        let booking = self
            .store
            .get(id)
            .await?
            .ok_or(ReservationError::BookingNotFound(id))?;

        let lock = self.room_lock(booking.room_id);
        let _guard = lock.lock().await;

        // Reload under the lock; the status may have moved in the meantime.
        let mut booking = self
            .store
            .get(id)
            .await?
            .ok_or(ReservationError::BookingNotFound(id))?;
        booking.confirm()?;

        let cal = self
            .room_calendar(booking.room_id, Some(&booking.stay), Some(id))
            .await?;
        if let Availability::Unavailable { first_conflict } = check_conflict(&cal, &booking.stay) {
            metrics::counter!(observability::CONFLICTS_REJECTED_TOTAL).increment(1);
            debug!("confirm rejected for booking {id}: conflict on {first_conflict}");
            return Err(ReservationError::RoomUnavailable { first_conflict });
        }

        let updated = self
            .store
            .update_status(id, BookingStatus::Confirmed)
            .await?;
        info!("booking {id} confirmed for room {}", updated.room_id);
        metrics::counter!(observability::BOOKINGS_CONFIRMED_TOTAL).increment(1);
        Ok(updated)
    }

    /// Cancel a booking, freeing its dates if it had been blocking the
    /// calendar. Idempotent: cancelling an already-cancelled booking returns
    /// the current record (UI flows retry); completed stays still reject.
    pub async fn cancel_booking(&self, id: BookingId) -> Result<Booking, ReservationError> {
        let booking = self
            .store
            .get(id)
            .await?
            .ok_or(ReservationError::BookingNotFound(id))?;

        let lock = self.room_lock(booking.room_id);
        let _guard = lock.lock().await;

        let mut booking = self
            .store
            .get(id)
            .await?
            .ok_or(ReservationError::BookingNotFound(id))?;
        if booking.status == BookingStatus::Cancelled {
            debug!("cancel of already-cancelled booking {id}");
            return Ok(booking);
        }
        booking.cancel()?;

        let updated = self
            .store
            .update_status(id, BookingStatus::Cancelled)
            .await?;
        info!("booking {id} cancelled for room {}", updated.room_id);
        metrics::counter!(observability::BOOKINGS_CANCELLED_TOTAL).increment(1);
        Ok(updated)
    }

    /// `confirmed → completed` once the check-out date has arrived.
    pub async fn complete_booking(&self, id: BookingId) -> Result<Booking, ReservationError> {
        let mut booking = self
            .store
            .get(id)
            .await?
            .ok_or(ReservationError::BookingNotFound(id))?;
        booking.complete(self.clock.today())?;

        let updated = self
            .store
            .update_status(id, BookingStatus::Completed)
            .await?;
        metrics::counter!(observability::BOOKINGS_COMPLETED_TOTAL).increment(1);
        Ok(updated)
    }

    /// Move every confirmed booking whose check-out has arrived to completed.
    /// Returns the transitioned bookings; races into a terminal state are
    /// skipped, not errors.
    pub async fn sweep_completions(&self) -> Result<Vec<Booking>, ReservationError> {
        let today = self.clock.today();
        let due = self.store.list_confirmed_past_checkout(today).await?;

        let mut completed = Vec::new();
        for mut booking in due {
            if booking.complete(today).is_err() {
                continue; // raced into a terminal state since listing
            }
            match self
                .store
                .update_status(booking.id, BookingStatus::Completed)
                .await
            {
                Ok(saved) => {
                    metrics::counter!(observability::SWEEP_COMPLETIONS_TOTAL).increment(1);
                    completed.push(saved);
                }
                Err(e) => debug!("sweep skip {}: {e}", booking.id),
            }
        }
        Ok(completed)
    }
}
