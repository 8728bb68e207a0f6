use std::fmt;

use serde::{Deserialize, Serialize};

/// Fields recovered from a free-form booking sentence. Each one is extracted
/// independently, so any subset may be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingIntent {
    pub name: Option<String>,
    pub room_type: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub name: String,
    pub room_type: String,
    pub check_in: String,
    pub check_out: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Name,
    RoomType,
    CheckIn,
    CheckOut,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MissingField::Name => "name",
            MissingField::RoomType => "room type",
            MissingField::CheckIn => "check-in date",
            MissingField::CheckOut => "check-out date",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "Missing details: {}. Please provide name, room type, check-in and check-out dates \
     (e.g. 'Book Deluxe room for Rahul from 26/11/2025 to 27/11/2025').",
    join_fields(.0)
)]
pub struct MissingDetails(pub Vec<MissingField>);

fn join_fields(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl BookingIntent {
    pub fn missing_fields(&self) -> Vec<MissingField> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push(MissingField::Name);
        }
        if self.room_type.is_none() {
            missing.push(MissingField::RoomType);
        }
        if self.check_in.is_none() {
            missing.push(MissingField::CheckIn);
        }
        if self.check_out.is_none() {
            missing.push(MissingField::CheckOut);
        }
        missing
    }

    pub fn into_request(self) -> Result<BookingRequest, MissingDetails> {
        match (self.name, self.room_type, self.check_in, self.check_out) {
            (Some(name), Some(room_type), Some(check_in), Some(check_out)) => Ok(BookingRequest {
                name,
                room_type,
                check_in,
                check_out,
            }),
            (name, room_type, check_in, check_out) => Err(MissingDetails(
                BookingIntent {
                    name,
                    room_type,
                    check_in,
                    check_out,
                }
                .missing_fields(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_intent_becomes_request() {
        let intent = BookingIntent {
            name: Some("Maya".to_string()),
            room_type: Some("Suite".to_string()),
            check_in: Some("2025-02-01".to_string()),
            check_out: Some("2025-02-05".to_string()),
        };
        let request = intent.into_request().unwrap();
        assert_eq!(request.name, "Maya");
        assert_eq!(request.check_out, "2025-02-05");
    }

    #[test]
    fn test_missing_fields_are_named() {
        let intent = BookingIntent {
            name: Some("Maya".to_string()),
            room_type: None,
            check_in: Some("2025-02-01".to_string()),
            check_out: None,
        };
        let err = intent.into_request().unwrap_err();
        assert_eq!(err.0, vec![MissingField::RoomType, MissingField::CheckOut]);
        let msg = err.to_string();
        assert!(msg.starts_with("Missing details: room type, check-out date."));
        assert!(msg.contains("Book Deluxe room for Rahul"));
    }
}
