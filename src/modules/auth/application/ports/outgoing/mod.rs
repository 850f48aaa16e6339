pub mod address_repository;
pub mod order_history_query;
pub mod password_hasher;
pub mod password_reset_repository;
pub mod token_provider;
pub mod token_repository;
pub mod user_query;
pub mod user_repository;
pub mod verification_code_store;

pub use address_repository::{
    AddressChanges, AddressRecord, AddressRepository, AddressRepositoryError, NewAddressData,
};
pub use order_history_query::{OrderHistoryQuery, OrderHistoryQueryError, OrderSummary};
pub use password_hasher::{HashError, PasswordHasher};
pub use password_reset_repository::{PasswordResetRepository, PasswordResetRepositoryError};
pub use token_provider::{TokenClaims, TokenError, TokenProvider, TokenSubject};
pub use token_repository::{TokenRepository, TokenRepositoryError};
pub use user_query::{UserQuery, UserQueryError, UserQueryResult};
pub use user_repository::{
    CreateUserData, UpdateProfileData, UserRepository, UserRepositoryError, UserResult,
};
pub use verification_code_store::{VerificationCodeStore, VerificationCodeStoreError};
