use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    CreateUserData, UpdateProfileData, UserRepository, UserRepositoryError, UserResult,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_error(e: DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::EmailAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            name: Set(data.name),
            password_hash: Set(data.password_hash),
            is_verified: Set(false),
            is_staff: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(inserted.to_user_result())
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<UserResult, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        if data.name.is_none() && data.email.is_none() {
            return Ok(user.to_user_result());
        }

        let mut active_user: UserActiveModel = user.into();
        if let Some(name) = data.name {
            active_user.name = Set(name);
        }
        if let Some(email) = data.email {
            active_user.email = Set(email);
        }

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(updated.to_user_result())
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::PasswordHash, Expr::value(new_password_hash))
            .filter(UserColumn::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }

    async fn mark_verified(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::IsVerified, Expr::value(true))
            .filter(UserColumn::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(user_id)
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn user_model(id: Uuid, email: &str, name: &str) -> UserModel {
        let now = Utc::now().fixed_offset();
        UserModel {
            id,
            email: email.to_string(),
            name: name.to_string(),
            password_hash: "hashed".to_string(),
            is_verified: false,
            is_staff: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        // Arrange
        let model = user_model(Uuid::new_v4(), "jane@example.com", "Jane");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();
        let repository = UserRepositoryPostgres::new(Arc::new(db));

        // Act
        let result = repository
            .create_user(CreateUserData {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                password_hash: "hashed".to_string(),
            })
            .await;

        // Assert
        let user = result.unwrap();
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.name, "Jane");
        assert!(!user.is_verified);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_key_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
            )])
            .into_connection();
        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .create_user(CreateUserData {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                password_hash: "hashed".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserRepositoryError::EmailAlreadyExists)));
    }

    #[tokio::test]
    async fn test_update_profile_changes_requested_fields() {
        let id = Uuid::new_v4();
        let before = user_model(id, "jane@example.com", "Jane");
        let after = user_model(id, "jane@example.com", "Jane Doe");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![before]])
            .append_query_results(vec![vec![after]])
            .into_connection();
        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .update_profile(
                id,
                UpdateProfileData {
                    name: Some("Jane Doe".to_string()),
                    email: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(result.name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_update_profile_missing_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();
        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .update_profile(Uuid::new_v4(), UpdateProfileData::default())
            .await;

        assert!(matches!(result, Err(UserRepositoryError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_update_password_reports_missing_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(0)])
            .into_connection();
        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .update_password(Uuid::new_v4(), "new_hash".to_string())
            .await;

        assert!(matches!(result, Err(UserRepositoryError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_mark_verified_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(1)])
            .into_connection();
        let repository = UserRepositoryPostgres::new(Arc::new(db));

        assert!(repository.mark_verified(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_success_and_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(1), exec(0)])
            .into_connection();
        let repository = UserRepositoryPostgres::new(Arc::new(db));

        assert!(repository.delete_user(Uuid::new_v4()).await.is_ok());
        assert!(matches!(
            repository.delete_user(Uuid::new_v4()).await,
            Err(UserRepositoryError::UserNotFound)
        ));
    }
}
