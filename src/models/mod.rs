pub mod booking;
pub mod intent;
pub mod resort_info;
pub mod room;

pub use booking::{Bill, Booking};
pub use intent::{BookingIntent, BookingRequest, MissingDetails, MissingField};
pub use resort_info::ResortInfo;
pub use room::Room;
