use chrono::NaiveDate;

use crate::models::{Bill, Booking, Room};
use crate::services::availability::is_available;
use crate::services::dates::{parse_date, to_iso};
use crate::store::{Store, StoreError};

/// Why a booking operation could not complete. The `Display` text is the
/// message shown to the guest.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid date format. Please use YYYY-MM-DD or DD/MM/YYYY.")]
    InvalidDate,

    #[error("Check-out ({check_out}) must be after check-in ({check_in}).")]
    InvalidRange { check_in: String, check_out: String },

    #[error("No rooms available for {room_type} from {check_in} to {check_out}.")]
    NoRoomAvailable {
        room_type: String,
        check_in: String,
        check_out: String,
    },

    #[error("No booking found for {name}.")]
    NotFound { name: String },

    #[error("Room data missing.")]
    RoomDataMissing,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub fn view_rooms(store: &Store) -> Result<Vec<Room>, StoreError> {
    store.rooms()
}

pub fn view_bookings(store: &Store) -> Result<Vec<Booking>, StoreError> {
    store.bookings()
}

/// Book the first free room of `room_type` for the stay, in room order.
pub fn add_booking(
    store: &Store,
    name: &str,
    room_type: &str,
    check_in: &str,
    check_out: &str,
) -> Result<Booking, BookingError> {
    let (ci, co) = parse_stay(check_in, check_out)?;
    let wanted = room_type.to_lowercase();

    store.transaction(|store| -> Result<Booking, BookingError> {
        let rooms = store.rooms()?;
        let mut bookings = store.bookings()?;

        let room = rooms
            .iter()
            .filter(|r| r.room_type.to_lowercase() == wanted)
            .find(|r| is_available(r.room_no, ci, co, &bookings));

        let Some(room) = room else {
            tracing::info!(name, room_type, %ci, %co, "no room available");
            return Err(BookingError::NoRoomAvailable {
                room_type: room_type.to_string(),
                check_in: to_iso(ci),
                check_out: to_iso(co),
            });
        };

        let booking = Booking {
            name: name.to_string(),
            room_no: room.room_no,
            room_type: room.room_type.clone(),
            check_in: ci,
            check_out: co,
        };
        bookings.push(booking.clone());
        store.save_bookings(&bookings)?;

        tracing::info!(name, room_no = booking.room_no, %ci, %co, "booking created");
        Ok(booking)
    })
}

/// Remove every booking under `name`, returning how many were removed.
pub fn cancel_booking(store: &Store, name: &str) -> Result<usize, BookingError> {
    store.transaction(|store| -> Result<usize, BookingError> {
        let bookings = store.bookings()?;
        let before = bookings.len();
        let remaining: Vec<Booking> = bookings.into_iter().filter(|b| !b.is_for(name)).collect();

        let removed = before - remaining.len();
        if removed == 0 {
            return Err(BookingError::NotFound {
                name: name.to_string(),
            });
        }

        store.save_bookings(&remaining)?;
        tracing::info!(name, removed, "bookings cancelled");
        Ok(removed)
    })
}

/// Bill the first booking under `name`.
pub fn generate_bill(store: &Store, name: &str) -> Result<Bill, BookingError> {
    let rooms = store.rooms()?;
    let bookings = store.bookings()?;

    let booking = bookings
        .iter()
        .find(|b| b.is_for(name))
        .ok_or_else(|| BookingError::NotFound {
            name: name.to_string(),
        })?;

    let room = rooms
        .iter()
        .find(|r| r.room_no == booking.room_no)
        .ok_or(BookingError::RoomDataMissing)?;

    let days = booking.nights();
    Ok(Bill {
        name: booking.name.clone(),
        room_no: room.room_no,
        days,
        price_per_day: room.price,
        total_bill: days as f64 * room.price,
    })
}

fn parse_stay(check_in: &str, check_out: &str) -> Result<(NaiveDate, NaiveDate), BookingError> {
    let (Some(ci), Some(co)) = (parse_date(check_in), parse_date(check_out)) else {
        return Err(BookingError::InvalidDate);
    };
    if co <= ci {
        return Err(BookingError::InvalidRange {
            check_in: to_iso(ci),
            check_out: to_iso(co),
        });
    }
    Ok((ci, co))
}
