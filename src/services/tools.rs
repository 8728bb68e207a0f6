//! The operations the assistant can invoke. Each takes one string and
//! answers with one string; guest-facing failures (unknown name, no free
//! room, bad dates) are part of the answer, only storage and collaborator
//! faults come back as errors.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::booking::{self, BookingError};
use crate::services::intent::IntentExtractor;
use crate::services::resort_info;
use crate::services::search::WebSearch;
use crate::state::AppState;
use crate::store::{Store, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    ViewRooms,
    ViewBookings,
    CreateBooking,
    CancelBooking,
    GenerateBill,
    SearchResortInfo,
    WebSearch,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::ViewRooms,
        Tool::ViewBookings,
        Tool::CreateBooking,
        Tool::CancelBooking,
        Tool::GenerateBill,
        Tool::SearchResortInfo,
        Tool::WebSearch,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::ViewRooms => "view_rooms",
            Tool::ViewBookings => "view_bookings",
            Tool::CreateBooking => "create_booking",
            Tool::CancelBooking => "cancel_booking",
            Tool::GenerateBill => "generate_bill",
            Tool::SearchResortInfo => "search_resort_info",
            Tool::WebSearch => "web_search",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tool::ViewRooms => "List all rooms with type and nightly price. Input ignored.",
            Tool::ViewBookings => "List current bookings. Input ignored.",
            Tool::CreateBooking => {
                "Create a booking from the guest's full sentence (name, room type, check-in and check-out dates)."
            }
            Tool::CancelBooking => "Cancel every booking under a customer name. Input: the name.",
            Tool::GenerateBill => "Generate the bill for a customer. Input: the name.",
            Tool::SearchResortInfo => {
                "Search resort information (amenities, dining, activities). Input: keywords."
            }
            Tool::WebSearch => {
                "Search the web for anything unrelated to the resort. Input: the question."
            }
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Tool::ALL.into_iter().find(|t| t.name() == name)
    }
}

pub async fn run_tool(state: &AppState, tool: Tool, input: &str) -> Result<String, AppError> {
    let input = input.trim();
    tracing::info!(tool = tool.name(), input, "running tool");

    let output = match tool {
        Tool::ViewRooms => view_rooms(&state.store)?,
        Tool::ViewBookings => view_bookings(&state.store)?,
        Tool::CreateBooking => create_booking(&state.store, state.extractor.as_ref(), input)?,
        Tool::CancelBooking => cancel_booking(&state.store, input)?,
        Tool::GenerateBill => generate_bill(&state.store, input)?,
        Tool::SearchResortInfo => search_resort_info(&state.store, input),
        Tool::WebSearch => web_search(state.search.as_ref(), input).await?,
    };
    Ok(output)
}

pub fn view_rooms(store: &Store) -> Result<String, StoreError> {
    let rooms = booking::view_rooms(store)?;
    if rooms.is_empty() {
        return Ok("No rooms data available.".to_string());
    }
    Ok(rooms
        .iter()
        .map(|r| r.to_human_readable())
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn view_bookings(store: &Store) -> Result<String, StoreError> {
    let bookings = booking::view_bookings(store)?;
    if bookings.is_empty() {
        return Ok("No bookings yet.".to_string());
    }
    Ok(bookings
        .iter()
        .map(|b| b.to_human_readable())
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn create_booking(
    store: &Store,
    extractor: &dyn IntentExtractor,
    sentence: &str,
) -> Result<String, StoreError> {
    let request = match extractor.extract(sentence).into_request() {
        Ok(request) => request,
        Err(missing) => {
            tracing::info!(missing = ?missing.0, "booking request incomplete");
            return Ok(missing.to_string());
        }
    };

    let result = booking::add_booking(
        store,
        &request.name,
        &request.room_type,
        &request.check_in,
        &request.check_out,
    );
    match result {
        Ok(b) => Ok(format!(
            "Room {} booked successfully for {}.",
            b.room_no, b.name
        )),
        Err(e) => guest_message(e),
    }
}

pub fn cancel_booking(store: &Store, name: &str) -> Result<String, StoreError> {
    match booking::cancel_booking(store, name) {
        Ok(_) => Ok(format!("Booking for {name} has been cancelled.")),
        Err(e) => guest_message(e),
    }
}

pub fn generate_bill(store: &Store, name: &str) -> Result<String, StoreError> {
    match booking::generate_bill(store, name) {
        Ok(bill) => Ok(bill.to_human_readable()),
        Err(e) => guest_message(e),
    }
}

pub fn search_resort_info(store: &Store, query: &str) -> String {
    match resort_info::search_info(store, query) {
        Ok(records) => resort_info::to_human_readable(&records),
        Err(e) => e.to_string(),
    }
}

pub async fn web_search(search: &dyn WebSearch, query: &str) -> Result<String, AppError> {
    if query.is_empty() {
        return Ok("Query cannot be empty.".to_string());
    }
    let results = search
        .search(query)
        .await
        .map_err(|e| AppError::Search(format!("{e:#}")))?;

    if results.is_empty() {
        return Ok(format!("No web results found for '{query}'."));
    }
    Ok(results
        .iter()
        .map(|r| r.to_human_readable())
        .collect::<Vec<_>>()
        .join("\n\n"))
}

fn guest_message(err: BookingError) -> Result<String, StoreError> {
    match err {
        BookingError::Store(e) => Err(e),
        other => Ok(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Room;
    use crate::services::intent::PatternIntentExtractor;
    use crate::store::Collection;

    fn store() -> Store {
        let store = Store::in_memory();
        store
            .save(
                Collection::Rooms,
                &[
                    Room {
                        room_no: 101,
                        room_type: "Deluxe".to_string(),
                        price: 100.0,
                    },
                    Room {
                        room_no: 201,
                        room_type: "Suite".to_string(),
                        price: 250.0,
                    },
                ],
            )
            .unwrap();
        store
    }

    #[test]
    fn test_tool_names_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(Tool::parse(tool.name()), Some(tool));
            let json = serde_json::to_value(tool).unwrap();
            assert_eq!(json, tool.name());
        }
        assert_eq!(Tool::parse("drop_tables"), None);
    }

    #[test]
    fn test_view_rooms_lines() {
        assert_eq!(
            view_rooms(&store()).unwrap(),
            "Room 101: Deluxe - $100/day\nRoom 201: Suite - $250/day"
        );
        assert_eq!(
            view_rooms(&Store::in_memory()).unwrap(),
            "No rooms data available."
        );
    }

    #[test]
    fn test_create_view_bill_cancel_flow() {
        let store = store();
        assert_eq!(view_bookings(&store).unwrap(), "No bookings yet.");

        let reply = create_booking(
            &store,
            &PatternIntentExtractor,
            "Book Suite room for Maya from 01/02/2025 to 05/02/2025",
        )
        .unwrap();
        assert_eq!(reply, "Room 201 booked successfully for Maya.");

        assert_eq!(
            view_bookings(&store).unwrap(),
            "Maya -> Room 201 (Suite), 2025-02-01 to 2025-02-05"
        );
        assert_eq!(
            generate_bill(&store, "maya").unwrap(),
            "Maya booked Room 201 for 4 days.\nPrice per day: $250\nTotal bill: $1000"
        );
        assert_eq!(
            cancel_booking(&store, "Maya").unwrap(),
            "Booking for Maya has been cancelled."
        );
        assert_eq!(
            cancel_booking(&store, "Maya").unwrap(),
            "No booking found for Maya."
        );
    }

    #[test]
    fn test_create_booking_names_missing_details() {
        let store = store();
        let reply = create_booking(&store, &PatternIntentExtractor, "need a deluxe for Ravi").unwrap();
        assert!(reply.starts_with("Missing details: check-in date, check-out date."));
        assert!(store.bookings().unwrap().is_empty());
    }

    #[test]
    fn test_create_booking_unavailable() {
        let store = store();
        let sentence = "Deluxe for Asha 2025-01-01 to 2025-01-03";
        create_booking(&store, &PatternIntentExtractor, sentence).unwrap();
        let reply = create_booking(&store, &PatternIntentExtractor, "Deluxe for Ravi 2025-01-02 to 2025-01-04").unwrap();
        assert_eq!(
            reply,
            "No rooms available for Deluxe from 2025-01-02 to 2025-01-04."
        );
    }

    #[test]
    fn test_storage_fault_is_an_error() {
        let backend = std::sync::Arc::new(crate::store::MemoryBackend::default());
        backend.insert(Collection::Bookings, b"not json".to_vec());
        let store = Store::new(backend);
        assert!(view_bookings(&store).is_err());
        assert!(cancel_booking(&store, "Asha").is_err());
    }
}
