use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: String,
}

/// Free-form nutrition facts (`{"calories": "52 kcal", ...}`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Nutrition(Map<String, Value>);

impl Nutrition {
    pub const FLATTENED_KEYS: [&'static str; 5] = ["calories", "protein", "carbs", "fat", "fiber"];

    /// Anything that is not a JSON object counts as empty.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// The stored value for `key`, or an empty string when absent.
    pub fn field(&self, key: &str) -> Value {
        self.0
            .get(key)
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()))
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub category_id: Option<Uuid>,
    pub name: String,
    pub price: Decimal,
    pub rating: f64,
    pub description: String,
    pub image: String,
    pub weight: Option<String>,
    pub origin: Option<String>,
    pub organic: bool,
    pub storage: Option<String>,
    pub nutrition: Nutrition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Uuid,
    pub product_id: Uuid,
    /// Display name of the author.
    pub author: String,
    pub rating: i16,
    pub comment: String,
    pub date: NaiveDate,
    pub upvotes: i32,
    pub downvotes: i32,
}

impl Review {
    pub fn helpfulness(&self) -> i32 {
        self.upvotes - self.downvotes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Vote direction must be 'up' or 'down'")]
pub struct InvalidVoteDirection;

impl FromStr for VoteDirection {
    type Err = InvalidVoteDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(InvalidVoteDirection),
        }
    }
}
