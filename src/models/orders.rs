// src/models/orders.rs

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::{prelude::FromPrimitive, Decimal};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::catalog::Sweetness;

// --- Orders as the admin endpoint returns them ---
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total: Decimal,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<OrderItem>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderItem {
    pub name: String,
    // Older rows carry `qty`, newer ones `quantity`.
    #[serde(default, deserialize_with = "lenient_count")]
    pub qty: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub quantity: Option<u32>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub sweetness: Option<String>,
}

// Old rows store numbers as text, or leave them null. A value that cannot be
// read as a number counts as missing instead of failing the whole list.
fn number_from(value: Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .ok()
            .or_else(|| n.as_f64().and_then(Decimal::from_f64)),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

fn lenient_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    Ok(number_from(Value::deserialize(deserializer)?).unwrap_or(Decimal::ZERO))
}

fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Decimal>, D::Error> {
    Ok(number_from(Value::deserialize(deserializer)?))
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    use rust_decimal::prelude::ToPrimitive;

    Ok(number_from(Value::deserialize(deserializer)?)
        .filter(|n| !n.is_sign_negative())
        .and_then(|n| n.trunc().to_u32()))
}

impl OrderItem {
    /// First positive of `qty` / `quantity`, else one.
    pub fn count(&self) -> u32 {
        self.qty
            .filter(|q| *q > 0)
            .or(self.quantity.filter(|q| *q > 0))
            .unwrap_or(1)
    }

    pub fn unit_price(&self) -> Decimal {
        self.price.unwrap_or(Decimal::ZERO)
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.count())
    }
}

impl Order {
    pub fn items(&self) -> &[OrderItem] {
        self.items.as_deref().unwrap_or(&[])
    }

    /// Calendar day the order was placed, seen from the shop's timezone.
    ///
    /// RFC 3339 timestamps are shifted into `offset`; anything else is read by
    /// its leading `YYYY-MM-DD`.
    pub fn local_date(&self, offset: FixedOffset) -> Option<NaiveDate> {
        let raw = self.created_at.as_deref()?.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&offset).date_naive());
        }
        raw.get(..10)
            .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
    }

    pub fn note_or_placeholder(&self) -> &str {
        match self.note.as_deref() {
            Some(note) if !note.trim().is_empty() => note,
            _ => "No message",
        }
    }
}

// --- Guest checkout ---
// One cart line as posted: the product fields plus quantity and sweetness.
#[derive(Debug, Clone, Serialize)]
pub struct OrderLine {
    pub id: i64,
    pub name: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub has_sweetness: bool,
    pub icon: Option<String>,
    pub quantity: u32,
    pub sweetness: Option<Sweetness>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    pub items: Vec<OrderLine>,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total: Decimal,
    pub note: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderReceipt {
    #[serde(default)]
    pub success: bool,
    // The queue number handed to the guest.
    #[serde(default)]
    pub id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bangkok() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    #[test]
    fn item_count_prefers_qty_then_quantity_then_one() {
        let item: OrderItem = serde_json::from_str(r#"{"name":"Latte","qty":2,"quantity":5}"#).unwrap();
        assert_eq!(item.count(), 2);

        let item: OrderItem = serde_json::from_str(r#"{"name":"Latte","qty":0,"quantity":3}"#).unwrap();
        assert_eq!(item.count(), 3);

        let item: OrderItem = serde_json::from_str(r#"{"name":"Latte"}"#).unwrap();
        assert_eq!(item.count(), 1);
        assert_eq!(item.line_total(), Decimal::ZERO);
    }

    #[test]
    fn sloppy_numbers_do_not_break_decoding() {
        let orders: Vec<Order> = serde_json::from_str(
            r#"[
                {"id":1,"total":null,"items":[{"name":"Latte","qty":"2","price":"55"}]},
                {"id":2,"total":"abc","items":[{"name":"Mocha","qty":-1,"quantity":"x","price":null}]},
                {"id":3,"total":12.5,"items":[{"name":"Tea","quantity":3.0,"price":40}]}
            ]"#,
        )
        .unwrap();

        assert_eq!(orders[0].total, Decimal::ZERO);
        assert_eq!(orders[0].items()[0].count(), 2);
        assert_eq!(orders[0].items()[0].line_total(), Decimal::from(110));

        assert_eq!(orders[1].total, Decimal::ZERO);
        assert_eq!(orders[1].items()[0].count(), 1);
        assert_eq!(orders[1].items()[0].unit_price(), Decimal::ZERO);

        assert_eq!(orders[2].total, Decimal::new(125, 1));
        assert_eq!(orders[2].items()[0].count(), 3);
    }

    #[test]
    fn utc_timestamp_late_in_the_day_lands_on_the_next_local_date() {
        let order: Order = serde_json::from_str(
            r#"{"id":7,"created_at":"2026-02-02T18:30:00Z","total":"120","items":null}"#,
        )
        .unwrap();
        assert_eq!(order.local_date(bangkok()), NaiveDate::from_ymd_opt(2026, 2, 3));
        assert!(order.items().is_empty());
    }

    #[test]
    fn naive_timestamp_uses_its_date_prefix() {
        let order: Order =
            serde_json::from_str(r#"{"id":8,"created_at":"2026-02-02 23:59:00","total":10}"#).unwrap();
        assert_eq!(order.local_date(bangkok()), NaiveDate::from_ymd_opt(2026, 2, 2));

        let undated: Order = serde_json::from_str(r#"{"id":9,"total":10}"#).unwrap();
        assert_eq!(undated.local_date(bangkok()), None);
        assert_eq!(undated.note_or_placeholder(), "No message");
    }
}
