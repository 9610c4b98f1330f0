// src/models/catalog.rs

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const DEFAULT_PRODUCT_ICON: &str = "☕";

// --- 1. Categories ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct NewCategory {
    pub name: String,
}

// --- 2. Products ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    // Postgres NUMERIC arrives as a string, plain numbers are accepted too.
    pub price: Decimal,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub has_sweetness: bool,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Product {
    pub fn icon_or_default(&self) -> &str {
        match self.icon.as_deref() {
            Some(icon) if !icon.is_empty() => icon,
            _ => DEFAULT_PRODUCT_ICON,
        }
    }

    /// Icons are either an emoji or a link to an image.
    pub fn has_image_icon(&self) -> bool {
        self.icon.as_deref().is_some_and(|i| i.starts_with("http"))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub category_id: i64,
    pub has_sweetness: bool,
    pub icon: String,
}

// The admin "new product" form, as typed in. Price stays text until it validates.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, message = "Product name is required."))]
    pub name: String,

    #[validate(custom(function = "validate_price_text"))]
    pub price: String,

    #[validate(required(message = "Pick a category."))]
    pub category_id: Option<i64>,

    pub has_sweetness: bool,
    pub icon: String,
}

fn validate_price_text(price: &str) -> Result<(), ValidationError> {
    match Decimal::from_str(price.trim()) {
        Ok(value) if !value.is_sign_negative() => Ok(()),
        _ => Err(ValidationError::new("price").with_message("Enter a valid price.".into())),
    }
}

impl ProductForm {
    /// Validates the form and turns it into the POST body.
    pub fn to_payload(&self) -> Result<NewProduct, validator::ValidationErrors> {
        self.validate()?;

        let icon = match self.icon.trim() {
            "" => DEFAULT_PRODUCT_ICON.to_string(),
            icon => icon.to_string(),
        };

        // validate() already checked that price parses and category is set.
        Ok(NewProduct {
            name: self.name.clone(),
            price: Decimal::from_str(self.price.trim()).unwrap_or_default(),
            category_id: self.category_id.unwrap_or_default(),
            has_sweetness: self.has_sweetness,
            icon,
        })
    }

    /// Empty form that remembers the last category picked.
    pub fn reset_keeping_category(&self) -> Self {
        Self {
            category_id: self.category_id,
            ..Self::default()
        }
    }
}

// --- 3. Sweetness levels ---
// Wire values are the labels the backend stores verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sweetness {
    #[serde(rename = "ไม่หวาน", alias = "none")]
    None,
    #[serde(rename = "หวานน้อย", alias = "low")]
    Low,
    #[default]
    #[serde(rename = "ปกติ", alias = "normal")]
    Normal,
    #[serde(rename = "หวานมาก", alias = "high")]
    High,
}

impl Sweetness {
    pub const ALL: [Sweetness; 4] = [Sweetness::None, Sweetness::Low, Sweetness::Normal, Sweetness::High];

    pub fn label(self) -> &'static str {
        match self {
            Sweetness::None => "ไม่หวาน",
            Sweetness::Low => "หวานน้อย",
            Sweetness::Normal => "ปกติ",
            Sweetness::High => "หวานมาก",
        }
    }
}

impl fmt::Display for Sweetness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sweetness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Sweetness::ALL
            .into_iter()
            .find(|level| {
                level.label() == wanted || format!("{:?}", level).eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| format!("unknown sweetness level '{}'", wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn product_price_accepts_numbers_and_numeric_strings() {
        let from_string: Product =
            serde_json::from_str(r#"{"id":1,"name":"Latte","price":"55.00","category_id":2}"#).unwrap();
        let from_number: Product =
            serde_json::from_str(r#"{"id":1,"name":"Latte","price":55,"category_id":2}"#).unwrap();

        assert_eq!(from_string.price, dec("55"));
        assert_eq!(from_number.price, dec("55"));
        assert!(!from_string.has_sweetness);
        assert_eq!(from_string.icon_or_default(), DEFAULT_PRODUCT_ICON);
    }

    #[test]
    fn sweetness_uses_backend_labels_and_accepts_english() {
        assert_eq!(serde_json::to_string(&Sweetness::Low).unwrap(), "\"หวานน้อย\"");
        let parsed: Sweetness = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, Sweetness::High);
        assert_eq!("ไม่หวาน".parse::<Sweetness>().unwrap(), Sweetness::None);
        assert_eq!("Normal".parse::<Sweetness>().unwrap(), Sweetness::Normal);
        assert!("extra".parse::<Sweetness>().is_err());
    }

    #[test]
    fn incomplete_product_form_is_rejected() {
        let form = ProductForm {
            name: "Mocha".into(),
            price: String::new(),
            category_id: None,
            ..Default::default()
        };
        let errors = form.to_payload().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("category_id"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn product_form_defaults_the_icon_and_serializes_price_as_number() {
        let form = ProductForm {
            name: "Mocha".into(),
            price: "65.5".into(),
            category_id: Some(3),
            has_sweetness: true,
            icon: "  ".into(),
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.icon, DEFAULT_PRODUCT_ICON);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["price"], serde_json::json!(65.5));
        assert_eq!(json["category_id"], serde_json::json!(3));

        let reset = form.reset_keeping_category();
        assert_eq!(reset.category_id, Some(3));
        assert!(reset.name.is_empty());
    }
}
