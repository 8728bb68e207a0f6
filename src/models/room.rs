use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub room_no: u32,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: f64,
}

impl Room {
    pub fn to_human_readable(&self) -> String {
        format!("Room {}: {} - ${}/day", self.room_no, self.room_type, self.price)
    }
}
