pub mod address_repository_postgres;
pub mod jwt;
pub mod order_history_query_postgres;
pub mod password_reset_repository_postgres;
pub mod sea_orm_entity;
pub mod security;
pub mod token_repository_redis;
pub mod user_query_postgres;
pub mod user_repository_postgres;
pub mod verification_code_store_redis;

pub use address_repository_postgres::AddressRepositoryPostgres;
pub use order_history_query_postgres::OrderHistoryQueryPostgres;
pub use password_reset_repository_postgres::PasswordResetRepositoryPostgres;
pub use token_repository_redis::RedisTokenRepository;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
pub use verification_code_store_redis::RedisVerificationCodeStore;
