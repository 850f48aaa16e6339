use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Coordinates, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct AddressRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub address_type: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub is_default: bool,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAddressData {
    pub address_type: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub is_default: bool,
    pub coordinates: Option<Coordinates>,
}

/// Partial update. `coordinates: Some(None)` clears the stored pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressChanges {
    pub address_type: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub is_default: Option<bool>,
    pub coordinates: Option<Option<Coordinates>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddressRepositoryError {
    #[error("Address not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Every method is scoped to `owner`; rows of other users behave as missing.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn list(&self, owner: UserId) -> Result<Vec<AddressRecord>, AddressRepositoryError>;

    async fn find(&self, owner: UserId, id: Uuid) -> Result<AddressRecord, AddressRepositoryError>;

    /// When `data.is_default` is set, the owner's other addresses are un-defaulted
    /// in the same transaction.
    async fn create(
        &self,
        owner: UserId,
        data: NewAddressData,
    ) -> Result<AddressRecord, AddressRepositoryError>;

    async fn update(
        &self,
        owner: UserId,
        id: Uuid,
        changes: AddressChanges,
    ) -> Result<AddressRecord, AddressRepositoryError>;

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), AddressRepositoryError>;
}
