use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    AddressError, CreateAddressCommand, CreateAddressUseCase, DeleteAddressUseCase,
    GetAddressUseCase, ListAddressesUseCase, UpdateAddressCommand, UpdateAddressUseCase,
};
use crate::auth::application::ports::outgoing::{
    AddressRecord, AddressRepository, AddressRepositoryError,
};

/// All address book operations; each is scoped to the calling user.
pub struct AddressService<R>
where
    R: AddressRepository,
{
    repository: R,
}

impl<R> AddressService<R>
where
    R: AddressRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_err(e: AddressRepositoryError) -> AddressError {
    match e {
        AddressRepositoryError::NotFound => AddressError::NotFound,
        AddressRepositoryError::DatabaseError(msg) => AddressError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R> ListAddressesUseCase for AddressService<R>
where
    R: AddressRepository,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<AddressRecord>, AddressError> {
        self.repository.list(owner).await.map_err(map_err)
    }
}

#[async_trait]
impl<R> GetAddressUseCase for AddressService<R>
where
    R: AddressRepository,
{
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<AddressRecord, AddressError> {
        self.repository.find(owner, id).await.map_err(map_err)
    }
}

#[async_trait]
impl<R> CreateAddressUseCase for AddressService<R>
where
    R: AddressRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        command: CreateAddressCommand,
    ) -> Result<AddressRecord, AddressError> {
        let record = self
            .repository
            .create(owner, command.into_data())
            .await
            .map_err(map_err)?;

        tracing::info!(user_id = %owner, address_id = %record.id, "Address created");
        Ok(record)
    }
}

#[async_trait]
impl<R> UpdateAddressUseCase for AddressService<R>
where
    R: AddressRepository,
{
    async fn execute(
        &self,
        owner: UserId,
        id: Uuid,
        command: UpdateAddressCommand,
    ) -> Result<AddressRecord, AddressError> {
        self.repository
            .update(owner, id, command.into_changes())
            .await
            .map_err(map_err)
    }
}

#[async_trait]
impl<R> DeleteAddressUseCase for AddressService<R>
where
    R: AddressRepository,
{
    async fn execute(&self, owner: UserId, id: Uuid) -> Result<(), AddressError> {
        self.repository.delete(owner, id).await.map_err(map_err)?;

        tracing::info!(user_id = %owner, address_id = %id, "Address deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::use_cases::AddressFields;
    use crate::auth::application::ports::outgoing::{AddressChanges, NewAddressData};
    use std::sync::{Arc, Mutex};

    /// Keeps the one-default-per-user rule like the database adapter does.
    #[derive(Clone, Default)]
    struct MockAddressRepo {
        rows: Arc<Mutex<Vec<AddressRecord>>>,
    }

    impl MockAddressRepo {
        fn defaults(&self, owner: UserId) -> Vec<Uuid> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.user_id == owner && a.is_default)
                .map(|a| a.id)
                .collect()
        }

        fn clear_defaults(rows: &mut [AddressRecord], owner: UserId) {
            rows.iter_mut()
                .filter(|a| a.user_id == owner)
                .for_each(|a| a.is_default = false);
        }
    }

    #[async_trait]
    impl AddressRepository for MockAddressRepo {
        async fn list(&self, owner: UserId) -> Result<Vec<AddressRecord>, AddressRepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.user_id == owner)
                .cloned()
                .collect())
        }

        async fn find(
            &self,
            owner: UserId,
            id: Uuid,
        ) -> Result<AddressRecord, AddressRepositoryError> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.user_id == owner && a.id == id)
                .cloned()
                .ok_or(AddressRepositoryError::NotFound)
        }

        async fn create(
            &self,
            owner: UserId,
            data: NewAddressData,
        ) -> Result<AddressRecord, AddressRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            if data.is_default {
                Self::clear_defaults(&mut rows, owner);
            }
            let record = AddressRecord {
                id: Uuid::new_v4(),
                user_id: owner,
                address_type: data.address_type,
                name: data.name,
                address: data.address,
                city: data.city,
                state: data.state,
                postal_code: data.postal_code,
                is_default: data.is_default,
                coordinates: data.coordinates,
            };
            rows.push(record.clone());
            Ok(record)
        }

        async fn update(
            &self,
            owner: UserId,
            id: Uuid,
            changes: AddressChanges,
        ) -> Result<AddressRecord, AddressRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            if !rows.iter().any(|a| a.user_id == owner && a.id == id) {
                return Err(AddressRepositoryError::NotFound);
            }
            if changes.is_default == Some(true) {
                Self::clear_defaults(&mut rows, owner);
            }
            let row = rows
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or(AddressRepositoryError::NotFound)?;
            if let Some(name) = changes.name {
                row.name = name;
            }
            if let Some(is_default) = changes.is_default {
                row.is_default = is_default;
            }
            Ok(row.clone())
        }

        async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), AddressRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|a| !(a.user_id == owner && a.id == id));
            if rows.len() == before {
                return Err(AddressRepositoryError::NotFound);
            }
            Ok(())
        }
    }

    fn create_command(is_default: bool) -> CreateAddressCommand {
        CreateAddressCommand::new(AddressFields {
            name: Some("Home".to_string()),
            address: Some("1 Market Street".to_string()),
            city: Some("Springfield".to_string()),
            state: Some("IL".to_string()),
            postal_code: Some("62701".to_string()),
            is_default: Some(is_default),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn only_one_default_per_user() {
        let repo = MockAddressRepo::default();
        let service = AddressService::new(repo.clone());
        let owner = UserId::from(Uuid::new_v4());

        let first = CreateAddressUseCase::execute(&service, owner, create_command(true))
            .await
            .unwrap();
        let second = CreateAddressUseCase::execute(&service, owner, create_command(true))
            .await
            .unwrap();

        assert_eq!(repo.defaults(owner), vec![second.id]);

        let patch = UpdateAddressCommand::patch(AddressFields {
            is_default: Some(true),
            ..Default::default()
        })
        .unwrap();
        UpdateAddressUseCase::execute(&service, owner, first.id, patch)
            .await
            .unwrap();

        assert_eq!(repo.defaults(owner), vec![first.id]);
    }

    #[tokio::test]
    async fn other_users_addresses_are_not_found() {
        let service = AddressService::new(MockAddressRepo::default());
        let owner = UserId::from(Uuid::new_v4());
        let stranger = UserId::from(Uuid::new_v4());

        let address = CreateAddressUseCase::execute(&service, owner, create_command(false))
            .await
            .unwrap();

        let get = GetAddressUseCase::execute(&service, stranger, address.id).await;
        let delete = DeleteAddressUseCase::execute(&service, stranger, address.id).await;
        let listed = ListAddressesUseCase::execute(&service, stranger)
            .await
            .unwrap();

        assert!(matches!(get, Err(AddressError::NotFound)));
        assert!(matches!(delete, Err(AddressError::NotFound)));
        assert!(listed.is_empty());
    }
}
