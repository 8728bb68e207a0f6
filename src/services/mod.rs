pub mod ai;
pub mod availability;
pub mod booking;
pub mod dates;
pub mod intent;
pub mod resort_info;
pub mod search;
pub mod tools;
