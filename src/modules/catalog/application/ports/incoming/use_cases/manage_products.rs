use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use crate::catalog::application::domain::entities::{Nutrition, Product};
use crate::catalog::application::domain::policies::{
    check_price, check_product_rating, CatalogPolicyError, PRODUCT_NAME_MAX_LEN,
};
use crate::catalog::application::ports::outgoing::ProductData;

/// Product fields as received from an admin request.
#[derive(Debug, Clone, Default)]
pub struct ProductFields {
    pub category_id: Option<Uuid>,
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub weight: Option<String>,
    pub origin: Option<String>,
    pub organic: Option<bool>,
    pub storage: Option<String>,
    pub nutrition: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductCommandError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must not exceed {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    #[error(transparent)]
    Policy(#[from] CatalogPolicyError),

    #[error("nutrition must be a JSON object")]
    InvalidNutrition,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ProductCommandError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ProductCommandError::MissingField(field)),
    }
}

/// Blank optional text is stored as NULL.
fn optional(
    value: Option<String>,
    field: &'static str,
    max: usize,
) -> Result<Option<String>, ProductCommandError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if v.is_empty() => Ok(None),
        Some(v) if v.chars().count() > max => Err(ProductCommandError::FieldTooLong { field, max }),
        other => Ok(other),
    }
}

/// A fully validated product, used by both create and update.
#[derive(Debug, Clone)]
pub struct ProductCommand(ProductData);

impl ProductCommand {
    pub fn new(fields: ProductFields) -> Result<Self, ProductCommandError> {
        let name = required(fields.name, "name")?;
        if name.chars().count() > PRODUCT_NAME_MAX_LEN {
            return Err(ProductCommandError::FieldTooLong {
                field: "name",
                max: PRODUCT_NAME_MAX_LEN,
            });
        }

        let price = check_price(fields.price.ok_or(ProductCommandError::MissingField("price"))?)?;
        let rating = check_product_rating(fields.rating.unwrap_or(0.0))?;

        let nutrition = match fields.nutrition {
            None | Some(Value::Null) => Nutrition::default(),
            Some(value @ Value::Object(_)) => Nutrition::from_json(value),
            Some(_) => return Err(ProductCommandError::InvalidNutrition),
        };

        Ok(Self(ProductData {
            category_id: fields.category_id,
            name,
            price,
            rating,
            description: required(fields.description, "description")?,
            image: required(fields.image, "image")?,
            weight: optional(fields.weight, "weight", 50)?,
            origin: optional(fields.origin, "origin", 100)?,
            organic: fields.organic.unwrap_or(false),
            storage: optional(fields.storage, "storage", 255)?,
            nutrition,
        }))
    }

    pub fn category_id(&self) -> Option<Uuid> {
        self.0.category_id
    }

    pub fn into_data(self) -> ProductData {
        self.0
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ManageProductError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, command: ProductCommand) -> Result<Product, ManageProductError>;
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        command: ProductCommand,
    ) -> Result<Product, ManageProductError>;
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ManageProductError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn apple() -> ProductFields {
        ProductFields {
            name: Some("Gala Apple".to_string()),
            price: Some(Decimal::new(249, 2)),
            description: Some("Sweet and crisp".to_string()),
            image: Some("https://cdn.example.com/apple.png".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_are_applied() {
        let data = ProductCommand::new(apple()).unwrap().into_data();

        assert_eq!(data.rating, 0.0);
        assert!(!data.organic);
        assert_eq!(data.nutrition, Nutrition::default());
        assert!(data.weight.is_none());
    }

    #[test]
    fn name_is_required_and_bounded() {
        let mut fields = apple();
        fields.name = Some("   ".to_string());
        assert_eq!(
            ProductCommand::new(fields).unwrap_err(),
            ProductCommandError::MissingField("name")
        );

        let mut fields = apple();
        fields.name = Some("x".repeat(256));
        assert_eq!(
            ProductCommand::new(fields).unwrap_err(),
            ProductCommandError::FieldTooLong {
                field: "name",
                max: 255
            }
        );
    }

    #[test]
    fn price_rules_are_enforced() {
        let mut fields = apple();
        fields.price = Some(Decimal::new(-1, 0));
        assert_eq!(
            ProductCommand::new(fields).unwrap_err(),
            ProductCommandError::Policy(CatalogPolicyError::NonPositivePrice)
        );

        let mut fields = apple();
        fields.price = None;
        assert_eq!(
            ProductCommand::new(fields).unwrap_err(),
            ProductCommandError::MissingField("price")
        );
    }

    #[test]
    fn rating_above_five_is_rejected() {
        let mut fields = apple();
        fields.rating = Some(5.5);
        assert_eq!(
            ProductCommand::new(fields).unwrap_err(),
            ProductCommandError::Policy(CatalogPolicyError::ProductRatingOutOfRange)
        );
    }

    #[test]
    fn nutrition_must_be_an_object() {
        let mut fields = apple();
        fields.nutrition = Some(json!("lots"));
        assert_eq!(
            ProductCommand::new(fields).unwrap_err(),
            ProductCommandError::InvalidNutrition
        );

        let mut fields = apple();
        fields.nutrition = Some(json!({ "calories": "52 kcal" }));
        let data = ProductCommand::new(fields).unwrap().into_data();
        assert_eq!(data.nutrition.field("calories"), json!("52 kcal"));
    }

    #[test]
    fn weight_longer_than_fifty_is_rejected() {
        let mut fields = apple();
        fields.weight = Some("9".repeat(51));
        assert_eq!(
            ProductCommand::new(fields).unwrap_err(),
            ProductCommandError::FieldTooLong {
                field: "weight",
                max: 50
            }
        );
    }
}
