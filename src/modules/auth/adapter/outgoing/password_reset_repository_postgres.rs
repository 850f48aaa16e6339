use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    PasswordResetRepository, PasswordResetRepositoryError,
};

use super::sea_orm_entity::password_reset_tokens::{
    ActiveModel as ResetTokenActiveModel, Column as ResetTokenColumn, Entity as ResetTokenEntity,
};
use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct PasswordResetRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PasswordResetRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> PasswordResetRepositoryError {
        PasswordResetRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl PasswordResetRepository for PasswordResetRepositoryPostgres {
    async fn create_token(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), PasswordResetRepositoryError> {
        let active = ResetTokenActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            token_hash: Set(token_hash),
            created_at: NotSet,
            expires_at: Set(expires_at.fixed_offset()),
        };

        active.insert(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(())
    }

    async fn redeem_token(
        &self,
        token_hash: &str,
        new_password_hash: String,
        now: DateTime<Utc>,
    ) -> Result<Uuid, PasswordResetRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        // Row lock keeps two concurrent redemptions from both succeeding.
        let token = match ResetTokenEntity::find()
            .filter(ResetTokenColumn::TokenHash.eq(token_hash))
            .lock_exclusive()
            .one(&txn)
            .await
        {
            Ok(Some(token)) => token,
            Ok(None) => {
                let _ = txn.rollback().await;
                return Err(PasswordResetRepositoryError::InvalidToken);
            }
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if let Err(e) = ResetTokenEntity::delete_by_id(token.id).exec(&txn).await {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        // Expired tokens are consumed too, but the password stays untouched.
        if DateTime::<Utc>::from(token.expires_at) <= now {
            txn.commit().await.map_err(Self::map_db_err)?;
            return Err(PasswordResetRepositoryError::InvalidToken);
        }

        let updated = match UserEntity::update_many()
            .col_expr(UserColumn::PasswordHash, Expr::value(new_password_hash))
            .filter(UserColumn::Id.eq(token.user_id))
            .exec(&txn)
            .await
        {
            Ok(res) => res,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if updated.rows_affected == 0 {
            let _ = txn.rollback().await;
            return Err(PasswordResetRepositoryError::InvalidToken);
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(token.user_id)
    }
}
