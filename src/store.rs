use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;

use crate::model::{Booking, BookingId, BookingStatus, Room, RoomId};

// ── Collaborator boundaries ──────────────────────────────────────
//
// The reservation core owns no storage of its own; it talks to the hosting
// application through these traits. The in-memory implementations below are
// the reference storage and the substrate for the engine tests.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound,
    Io(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "record not found"),
            StoreError::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Authoritative booking collection. Implementations must give at least
/// read-your-writes consistency; the per-room serialization in the façade is
/// meaningless without it.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn list_for_room(&self, room_id: RoomId) -> Result<Vec<Booking>, StoreError>;

    async fn get(&self, id: BookingId) -> Result<Option<Booking>, StoreError>;

    async fn save(&self, booking: Booking) -> Result<Booking, StoreError>;

    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, StoreError>;

    /// Confirmed bookings whose check-out is on or before `today` — the
    /// completion sweeper's work list.
    async fn list_confirmed_past_checkout(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<Booking>, StoreError>;
}

/// Read-only room metadata, owned by the hotel directory.
#[async_trait]
pub trait RoomDirectory: Send + Sync {
    async fn room(&self, id: RoomId) -> Result<Option<Room>, StoreError>;
}

// Hosting applications usually share one store between the service and their
// own tasks; delegate through Arc so that works without wrapper types.
#[async_trait]
impl<T: BookingStore + ?Sized> BookingStore for std::sync::Arc<T> {
    async fn list_for_room(&self, room_id: RoomId) -> Result<Vec<Booking>, StoreError> {
        (**self).list_for_room(room_id).await
    }

    async fn get(&self, id: BookingId) -> Result<Option<Booking>, StoreError> {
        (**self).get(id).await
    }

    async fn save(&self, booking: Booking) -> Result<Booking, StoreError> {
        (**self).save(booking).await
    }

    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, StoreError> {
        (**self).update_status(id, status).await
    }

    async fn list_confirmed_past_checkout(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<Booking>, StoreError> {
        (**self).list_confirmed_past_checkout(today).await
    }
}

#[async_trait]
impl<T: RoomDirectory + ?Sized> RoomDirectory for std::sync::Arc<T> {
    async fn room(&self, id: RoomId) -> Result<Option<Room>, StoreError> {
        (**self).room(id).await
    }
}

// ── In-memory implementations ────────────────────────────────────

#[derive(Default)]
pub struct MemoryStore {
    bookings: DashMap<BookingId, Booking>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn list_for_room(&self, room_id: RoomId) -> Result<Vec<Booking>, StoreError> {
        Ok(self
            .bookings
            .iter()
            .filter(|e| e.value().room_id == room_id)
            .map(|e| e.value().clone())
            .collect())
    }

    async fn get(&self, id: BookingId) -> Result<Option<Booking>, StoreError> {
        Ok(self.bookings.get(&id).map(|e| e.value().clone()))
    }

    async fn save(&self, booking: Booking) -> Result<Booking, StoreError> {
        self.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, StoreError> {
        let mut entry = self.bookings.get_mut(&id).ok_or(StoreError::NotFound)?;
        entry.status = status;
        Ok(entry.clone())
    }

    async fn list_confirmed_past_checkout(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<Booking>, StoreError> {
        Ok(self
            .bookings
            .iter()
            .filter(|e| {
                e.value().status == BookingStatus::Confirmed && e.value().stay.check_out <= today
            })
            .map(|e| e.value().clone())
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryRooms {
    rooms: DashMap<RoomId, Room>,
}

impl MemoryRooms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, room: Room) {
        self.rooms.insert(room.id, room);
    }
}

#[async_trait]
impl RoomDirectory for MemoryRooms {
    async fn room(&self, id: RoomId) -> Result<Option<Room>, StoreError> {
        Ok(self.rooms.get(&id).map(|e| e.value().clone()))
    }
}
