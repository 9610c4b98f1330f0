// src/models/sales.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

// One row per calendar day, summed by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailySales {
    pub sale_date: String,
    pub total: Decimal,
}

impl DailySales {
    pub fn date(&self) -> Option<NaiveDate> {
        self.sale_date
            .get(..10)
            .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
    }
}

// Card under the sales history table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryStats {
    pub total: Decimal,
    pub avg: Decimal,
    pub max: Decimal,
}

// Per-category breakdown for a single day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStat {
    pub count: u32,
    pub total: Decimal,
}
