use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::services::dates::{self, iso_date};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub name: String,
    pub room_no: u32,
    #[serde(default)]
    pub room_type: String,
    #[serde(with = "iso_date")]
    pub check_in: NaiveDate,
    #[serde(with = "iso_date")]
    pub check_out: NaiveDate,
}

impl Booking {
    /// Case-insensitive match on the customer name.
    pub fn is_for(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Number of nights between check-in and check-out.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn to_human_readable(&self) -> String {
        format!(
            "{} -> Room {} ({}), {} to {}",
            self.name,
            self.room_no,
            self.room_type,
            dates::to_iso(self.check_in),
            dates::to_iso(self.check_out),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub name: String,
    pub room_no: u32,
    pub days: i64,
    pub price_per_day: f64,
    pub total_bill: f64,
}

impl Bill {
    pub fn to_human_readable(&self) -> String {
        format!(
            "{} booked Room {} for {} days.\nPrice per day: ${}\nTotal bill: ${}",
            self.name, self.room_no, self.days, self.price_per_day, self.total_bill
        )
    }
}
