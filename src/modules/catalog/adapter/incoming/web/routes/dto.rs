//! JSON shapes shared by the catalog routes.
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::catalog::application::domain::entities::{Category, Product, Review};

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    #[schema(example = "Fruits")]
    pub name: String,
    #[schema(example = "fruits")]
    pub slug: String,
    pub description: String,
    pub image: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            description: c.description,
            image: c.image,
        }
    }
}

/// Product with the common nutrition facts lifted to the top level.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: Uuid,
    pub category_id: Option<Uuid>,
    #[schema(example = "Gala Apple")]
    pub name: String,
    #[schema(value_type = String, example = "2.49")]
    pub price: Decimal,
    #[schema(example = 4.5)]
    pub rating: f64,
    pub description: String,
    pub image: String,
    pub weight: Option<String>,
    pub origin: Option<String>,
    pub organic: bool,
    pub storage: Option<String>,
    #[schema(value_type = Object)]
    pub nutrition: Value,
    #[schema(value_type = String, example = "52 kcal")]
    pub calories: Value,
    #[schema(value_type = String, example = "0.3 g")]
    pub protein: Value,
    #[schema(value_type = String, example = "14 g")]
    pub carbs: Value,
    #[schema(value_type = String, example = "0.2 g")]
    pub fat: Value,
    #[schema(value_type = String, example = "2.4 g")]
    pub fiber: Value,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            calories: p.nutrition.field("calories"),
            protein: p.nutrition.field("protein"),
            carbs: p.nutrition.field("carbs"),
            fat: p.nutrition.field("fat"),
            fiber: p.nutrition.field("fiber"),
            nutrition: p.nutrition.to_json(),
            id: p.id,
            category_id: p.category_id,
            name: p.name,
            price: p.price,
            rating: p.rating,
            description: p.description,
            image: p.image,
            weight: p.weight,
            origin: p.origin,
            organic: p.organic,
            storage: p.storage,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RelatedProductResponse {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = String, example = "2.49")]
    pub price: Decimal,
    pub rating: f64,
    pub image: String,
}

impl From<Product> for RelatedProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            rating: p.rating,
            image: p.image,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub id: Uuid,
    /// Author display name.
    #[schema(example = "Jane Doe")]
    pub user: String,
    #[schema(example = 5)]
    pub rating: i16,
    pub comment: String,
    pub date: NaiveDate,
    pub upvotes: i32,
    pub downvotes: i32,
    pub helpfulness: i32,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self {
            helpfulness: r.helpfulness(),
            id: r.id,
            user: r.author,
            rating: r.rating,
            comment: r.comment,
            date: r.date,
            upvotes: r.upvotes,
            downvotes: r.downvotes,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryDetailResponse {
    #[serde(flatten)]
    pub category: CategoryResponse,
    pub products: Vec<ProductResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetailResponse {
    #[serde(flatten)]
    pub product: ProductResponse,
    pub reviews: Vec<ReviewResponse>,
}

pub fn products<T: From<Product>>(items: Vec<Product>) -> Vec<T> {
    items.into_iter().map(T::from).collect()
}
