// src/models/studio.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    #[serde(rename = "Waiting Verification")]
    WaitingVerification,
    Confirmed,
    Completed,
}

impl BookingStatus {
    /// Bookings that count as money in the bank.
    pub fn is_revenue(self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    pub service: String,
    pub date: NaiveDate,
    pub time: String,
    pub price: Decimal,
    pub status: BookingStatus,
    pub payment_slip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub duration_minutes: u32,
    pub active: bool,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct ServiceForm {
    #[validate(length(min = 1, message = "Service name is required."))]
    pub name: String,
    pub price: Decimal,
    #[validate(range(min = 1, message = "Duration must be at least one minute."))]
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotStatus {
    Available,
    Busy,
    Booked,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub date: NaiveDate,
    pub time: String,
    pub status: SlotStatus,
    pub customer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: i64,
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub customer_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

// The three cards at the top of the studio overview.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioStats {
    pub bookings_on_day: usize,
    pub revenue: Decimal,
    pub average_rating: Decimal,
}
