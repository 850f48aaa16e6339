use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Coordinates, CoordinatesError, UserId};
use crate::auth::application::ports::outgoing::{AddressChanges, AddressRecord, NewAddressData};

const DEFAULT_ADDRESS_TYPE: &str = "home";

//
// ──────────────────────────────────────────────────────────
// Raw input
// ──────────────────────────────────────────────────────────
//

/// Address fields as received. `coordinates` is tri-state:
/// absent (`None`), explicit null (`Some(None)`), or a value.
#[derive(Debug, Clone, Default)]
pub struct AddressFields {
    pub address_type: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub is_default: Option<bool>,
    pub coordinates: Option<Option<Vec<f64>>>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddressCommandError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must not exceed {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    #[error(transparent)]
    InvalidCoordinates(#[from] CoordinatesError),
}

fn text(
    value: Option<String>,
    field: &'static str,
    max: usize,
) -> Result<Option<String>, AddressCommandError> {
    match value.map(|v| v.trim().to_string()) {
        None => Ok(None),
        Some(v) if v.is_empty() => Err(AddressCommandError::MissingField(field)),
        Some(v) if v.chars().count() > max => {
            Err(AddressCommandError::FieldTooLong { field, max })
        }
        Some(v) => Ok(Some(v)),
    }
}

fn required(
    value: Option<String>,
    field: &'static str,
    max: usize,
) -> Result<String, AddressCommandError> {
    text(value, field, max)?.ok_or(AddressCommandError::MissingField(field))
}

fn coordinates(
    raw: Option<Option<Vec<f64>>>,
) -> Result<Option<Option<Coordinates>>, AddressCommandError> {
    Ok(match raw {
        None => None,
        Some(None) => Some(None),
        Some(Some(values)) => Some(Some(Coordinates::from_slice(&values)?)),
    })
}

//
// ──────────────────────────────────────────────────────────
// Commands
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateAddressCommand(NewAddressData);

impl CreateAddressCommand {
    pub fn new(fields: AddressFields) -> Result<Self, AddressCommandError> {
        Ok(Self(NewAddressData {
            address_type: text(fields.address_type, "address_type", 50)?
                .unwrap_or_else(|| DEFAULT_ADDRESS_TYPE.to_string()),
            name: required(fields.name, "name", 100)?,
            address: required(fields.address, "address", 255)?,
            city: required(fields.city, "city", 100)?,
            state: required(fields.state, "state", 50)?,
            postal_code: required(fields.postal_code, "postal_code", 20)?,
            is_default: fields.is_default.unwrap_or(false),
            coordinates: coordinates(fields.coordinates)?.flatten(),
        }))
    }

    pub fn into_data(self) -> NewAddressData {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct UpdateAddressCommand(AddressChanges);

impl UpdateAddressCommand {
    /// Full update (PUT): every text field except `address_type` is required.
    /// Omitted coordinates are kept.
    pub fn replace(fields: AddressFields) -> Result<Self, AddressCommandError> {
        Ok(Self(AddressChanges {
            address_type: text(fields.address_type, "address_type", 50)?,
            name: Some(required(fields.name, "name", 100)?),
            address: Some(required(fields.address, "address", 255)?),
            city: Some(required(fields.city, "city", 100)?),
            state: Some(required(fields.state, "state", 50)?),
            postal_code: Some(required(fields.postal_code, "postal_code", 20)?),
            is_default: fields.is_default,
            coordinates: coordinates(fields.coordinates)?,
        }))
    }

    /// Partial update (PATCH): only the supplied fields change.
    pub fn patch(fields: AddressFields) -> Result<Self, AddressCommandError> {
        Ok(Self(AddressChanges {
            address_type: text(fields.address_type, "address_type", 50)?,
            name: text(fields.name, "name", 100)?,
            address: text(fields.address, "address", 255)?,
            city: text(fields.city, "city", 100)?,
            state: text(fields.state, "state", 50)?,
            postal_code: text(fields.postal_code, "postal_code", 20)?,
            is_default: fields.is_default,
            coordinates: coordinates(fields.coordinates)?,
        }))
    }

    pub fn into_changes(self) -> AddressChanges {
        self.0
    }
}

//
// ──────────────────────────────────────────────────────────
// Use cases
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddressError {
    #[error("Address not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListAddressesUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<AddressRecord>, AddressError>;
}

#[async_trait]
pub trait GetAddressUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<AddressRecord, AddressError>;
}

#[async_trait]
pub trait CreateAddressUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        command: CreateAddressCommand,
    ) -> Result<AddressRecord, AddressError>;
}

#[async_trait]
pub trait UpdateAddressUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
        command: UpdateAddressCommand,
    ) -> Result<AddressRecord, AddressError>;
}

#[async_trait]
pub trait DeleteAddressUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), AddressError>;
}
