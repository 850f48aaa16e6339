use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::catalog::application::domain::entities::{Nutrition, Product};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub category_id: Option<Uuid>,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub rating: f64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image: String,
    pub weight: Option<String>,
    pub origin: Option<String>,
    pub organic: bool,
    pub storage: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub nutrition: Json,
    /// `false` once the product is retired; kept for order history.
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id",
        on_delete = "SetNull"
    )]
    Category,

    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Model {
    pub fn to_product(&self) -> Product {
        Product {
            id: self.id,
            category_id: self.category_id,
            name: self.name.clone(),
            price: self.price,
            rating: self.rating,
            description: self.description.clone(),
            image: self.image.clone(),
            weight: self.weight.clone(),
            origin: self.origin.clone(),
            organic: self.organic,
            storage: self.storage.clone(),
            nutrition: Nutrition::from_json(self.nutrition.clone()),
        }
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
