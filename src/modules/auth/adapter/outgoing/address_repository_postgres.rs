use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    AddressChanges, AddressRecord, AddressRepository, AddressRepositoryError, NewAddressData,
};

use super::sea_orm_entity::addresses::{
    ActiveModel as AddressActiveModel, Column as AddressColumn, Entity as AddressEntity,
};

#[derive(Clone, Debug)]
pub struct AddressRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AddressRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> AddressRepositoryError {
        AddressRepositoryError::DatabaseError(e.to_string())
    }

    /// Clear the default flag on every address of `owner` except `keep`.
    async fn clear_other_defaults<C: ConnectionTrait>(
        conn: &C,
        owner: Uuid,
        keep: Option<Uuid>,
    ) -> Result<(), DbErr> {
        let mut update = AddressEntity::update_many()
            .col_expr(AddressColumn::IsDefault, Expr::value(false))
            .filter(AddressColumn::UserId.eq(owner))
            .filter(AddressColumn::IsDefault.eq(true));

        if let Some(id) = keep {
            update = update.filter(AddressColumn::Id.ne(id));
        }

        update.exec(conn).await.map(|_| ())
    }
}

#[async_trait]
impl AddressRepository for AddressRepositoryPostgres {
    async fn list(&self, owner: UserId) -> Result<Vec<AddressRecord>, AddressRepositoryError> {
        let models = AddressEntity::find()
            .filter(AddressColumn::UserId.eq(owner.value()))
            .order_by_desc(AddressColumn::IsDefault)
            .order_by_asc(AddressColumn::Name)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }

    async fn find(&self, owner: UserId, id: Uuid) -> Result<AddressRecord, AddressRepositoryError> {
        AddressEntity::find_by_id(id)
            .filter(AddressColumn::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .map(|m| m.to_record())
            .ok_or(AddressRepositoryError::NotFound)
    }

    async fn create(
        &self,
        owner: UserId,
        data: NewAddressData,
    ) -> Result<AddressRecord, AddressRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if data.is_default {
            if let Err(e) = Self::clear_other_defaults(&txn, owner.value(), None).await {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        }

        let active = AddressActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner.value()),
            address_type: Set(data.address_type),
            name: Set(data.name),
            address: Set(data.address),
            city: Set(data.city),
            state: Set(data.state),
            postal_code: Set(data.postal_code),
            is_default: Set(data.is_default),
            latitude: Set(data.coordinates.map(|c| c.lat())),
            longitude: Set(data.coordinates.map(|c| c.lng())),
        };

        let inserted = match active.insert(&txn).await {
            Ok(model) => model,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(inserted.to_record())
    }

    async fn update(
        &self,
        owner: UserId,
        id: Uuid,
        changes: AddressChanges,
    ) -> Result<AddressRecord, AddressRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let existing = match AddressEntity::find_by_id(id)
            .filter(AddressColumn::UserId.eq(owner.value()))
            .lock_exclusive()
            .one(&txn)
            .await
        {
            Ok(Some(model)) => model,
            Ok(None) => {
                let _ = txn.rollback().await;
                return Err(AddressRepositoryError::NotFound);
            }
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if changes.is_default == Some(true) {
            if let Err(e) = Self::clear_other_defaults(&txn, owner.value(), Some(id)).await {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        }

        let mut active: AddressActiveModel = existing.into();
        if let Some(v) = changes.address_type {
            active.address_type = Set(v);
        }
        if let Some(v) = changes.name {
            active.name = Set(v);
        }
        if let Some(v) = changes.address {
            active.address = Set(v);
        }
        if let Some(v) = changes.city {
            active.city = Set(v);
        }
        if let Some(v) = changes.state {
            active.state = Set(v);
        }
        if let Some(v) = changes.postal_code {
            active.postal_code = Set(v);
        }
        if let Some(v) = changes.is_default {
            active.is_default = Set(v);
        }
        if let Some(coordinates) = changes.coordinates {
            active.latitude = Set(coordinates.map(|c| c.lat()));
            active.longitude = Set(coordinates.map(|c| c.lng()));
        }

        let updated = match active.update(&txn).await {
            Ok(model) => model,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(updated.to_record())
    }

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), AddressRepositoryError> {
        let result = AddressEntity::delete_many()
            .filter(AddressColumn::Id.eq(id))
            .filter(AddressColumn::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(AddressRepositoryError::NotFound);
        }
        Ok(())
    }
}
