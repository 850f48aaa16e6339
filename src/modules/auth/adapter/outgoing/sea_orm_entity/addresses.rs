use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::{Coordinates, UserId},
    ports::outgoing::AddressRecord,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub address_type: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub is_default: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Model {
    pub fn to_record(&self) -> AddressRecord {
        // Rows are only written through validated coordinates; anything else reads as absent.
        let coordinates = match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Coordinates::new(lat, lng).ok(),
            _ => None,
        };

        AddressRecord {
            id: self.id,
            user_id: UserId::from(self.user_id),
            address_type: self.address_type.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            postal_code: self.postal_code.clone(),
            is_default: self.is_default,
            coordinates,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
