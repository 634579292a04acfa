//! Draft Input
//!
//! The not-yet-validated record behind the "Add New Medicine" form.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Name,
    Price,
    Discount,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Price => "price",
            DraftField::Discount => "discount",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-keyed validation messages, shown inline next to each input
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors(BTreeMap<DraftField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, field: DraftField, message: &str) {
        self.0.insert(field, message.to_string());
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: DraftField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// User-entered data for a new item.
///
/// Numeric fields are kept as the text the user typed; `price` and
/// `discount` also deserialize from JSON numbers, and `null` reads as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Draft {
    pub name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub price: String,
    #[serde(deserialize_with = "text_or_number")]
    pub discount: String,
    /// Empty means "use the placeholder"
    pub image: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            discount: "0".to_string(),
            image: String::new(),
        }
    }
}

/// A draft that passed validation, with numbers parsed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub name: String,
    pub price: f64,
    pub discount: f64,
    pub image: Option<String>,
}

impl Draft {
    pub fn new(name: impl Into<String>, price: impl ToString) -> Self {
        Self {
            name: name.into(),
            price: price.to_string(),
            ..Default::default()
        }
    }

    pub fn with_discount(mut self, discount: impl ToString) -> Self {
        self.discount = discount.to_string();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Nothing typed yet (discount still at its "0" default)
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.price.is_empty() && self.discount == "0" && self.image.is_empty()
    }

    /// Check every field and report all failures together.
    pub fn validate(&self) -> Result<ValidDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(DraftField::Name, "Name is required");
        }

        let price = match parse_number(&self.price) {
            Some(price) if price < 0.0 => {
                errors.insert(DraftField::Price, "Price cannot be negative");
                None
            }
            Some(price) => Some(price),
            None => {
                errors.insert(DraftField::Price, "Valid price is required");
                None
            }
        };

        // An empty discount input means no discount
        let discount = if self.discount.trim().is_empty() {
            Some(0.0)
        } else {
            match parse_number(&self.discount) {
                Some(discount) if !(0.0..=100.0).contains(&discount) => {
                    errors.insert(DraftField::Discount, "Discount must be between 0 and 100");
                    None
                }
                Some(discount) => Some(discount),
                None => {
                    errors.insert(DraftField::Discount, "Discount must be a number");
                    None
                }
            }
        };

        match (price, discount) {
            (Some(price), Some(discount)) if errors.is_empty() => {
                let image = self.image.trim();
                Ok(ValidDraft {
                    name: name.to_string(),
                    price,
                    discount,
                    image: (!image.is_empty()).then(|| image.to_string()),
                })
            }
            _ => Err(errors),
        }
    }
}

/// Finite number from trimmed text. `-0` comes back as `0`.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value + 0.0)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
