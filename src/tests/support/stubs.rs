//! Default use cases for route tests. Each panics when reached, so a test
//! only works against the use cases it explicitly installs.
use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccountView, UserId};
use crate::auth::application::ports::incoming::use_cases::{
    AddressError, ChangePasswordCommand, ChangePasswordError, ChangePasswordUseCase,
    CheckEmailError, CheckEmailUseCase, ConfirmPasswordResetCommand, ConfirmPasswordResetError,
    ConfirmPasswordResetUseCase, CreateAddressCommand, CreateAddressUseCase, Dashboard,
    DashboardError, DashboardUseCase, DeleteAccountError, DeleteAccountUseCase,
    DeleteAddressUseCase, FetchProfileError, FetchProfileUseCase, GetAddressUseCase,
    ListAddressesUseCase, LoginCommand, LoginError, LoginResult, LoginUserUseCase, LogoutError,
    LogoutUserUseCase, RefreshTokenError, RefreshTokenUseCase, RegisterUserCommand,
    RegisterUserError, RegisterUserUseCase, RegisteredUser, RequestPasswordResetError,
    RequestPasswordResetUseCase, ResendVerificationError, ResendVerificationUseCase,
    UpdateAddressCommand, UpdateAddressUseCase, UpdateProfileCommand, UpdateProfileError,
    UpdateProfileUseCase, VerifyEmailCommand, VerifyEmailError, VerifyEmailUseCase,
};
use crate::auth::application::ports::outgoing::AddressRecord;
use crate::cart::application::domain::entities::Cart;
use crate::cart::application::ports::incoming::use_cases::{
    AddToCartCommand, AddToCartUseCase, CartError, GetCartUseCase, RemoveCartItemUseCase,
    UpdateCartItemCommand, UpdateCartItemUseCase,
};
use crate::catalog::application::domain::entities::{Category, Product, Review, VoteDirection};
use crate::catalog::application::ports::incoming::use_cases::{
    BrowseCatalogError, CategoryDetail, CreateProductUseCase, CreateReviewCommand,
    CreateReviewUseCase, DeleteProductUseCase, GetCategoryUseCase, GetProductUseCase,
    ListCategoriesUseCase, ListProductsUseCase, ListReviewsUseCase, ManageProductError,
    ProductCommand, ProductDetail, RelatedProductsUseCase, ReviewError, SearchProductsUseCase,
    UpdateProductUseCase, VoteReviewUseCase,
};
use crate::email::application::ports::outgoing::{AccountNotificationError, AccountNotifier};
use crate::orders::application::domain::entities::{Order, PlacedOrder};
use crate::orders::application::ports::incoming::use_cases::{
    CheckoutCommand, CheckoutUseCase, GetOrderUseCase, ListOrdersUseCase, OrderActor, OrderError,
    UpdateOrderStatusCommand, UpdateOrderStatusUseCase,
};

const UNUSED: &str = "Not used in this test";

// ============================================================================
// Accounts
// ============================================================================

#[derive(Default, Clone)]
pub struct StubAccounts;

#[async_trait]
impl RegisterUserUseCase for StubAccounts {
    async fn execute(
        &self,
        _command: RegisterUserCommand,
    ) -> Result<RegisteredUser, RegisterUserError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl VerifyEmailUseCase for StubAccounts {
    async fn execute(&self, _command: VerifyEmailCommand) -> Result<(), VerifyEmailError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl ResendVerificationUseCase for StubAccounts {
    async fn execute(&self, _email: &str) -> Result<(), ResendVerificationError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl LoginUserUseCase for StubAccounts {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginResult, LoginError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl RefreshTokenUseCase for StubAccounts {
    async fn execute(&self, _refresh_token: &str) -> Result<String, RefreshTokenError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl LogoutUserUseCase for StubAccounts {
    async fn execute(&self, _caller: UserId, _refresh_token: &str) -> Result<(), LogoutError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl CheckEmailUseCase for StubAccounts {
    async fn execute(&self, _email: &str) -> Result<bool, CheckEmailError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl FetchProfileUseCase for StubAccounts {
    async fn execute(&self, _user_id: UserId) -> Result<AccountView, FetchProfileError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl UpdateProfileUseCase for StubAccounts {
    async fn execute(
        &self,
        _user_id: UserId,
        _command: UpdateProfileCommand,
    ) -> Result<AccountView, UpdateProfileError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl DeleteAccountUseCase for StubAccounts {
    async fn execute(&self, _user_id: UserId) -> Result<(), DeleteAccountError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl ChangePasswordUseCase for StubAccounts {
    async fn execute(
        &self,
        _user_id: UserId,
        _command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl RequestPasswordResetUseCase for StubAccounts {
    async fn execute(&self, _email: &str) -> Result<(), RequestPasswordResetError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl ConfirmPasswordResetUseCase for StubAccounts {
    async fn execute(
        &self,
        _command: ConfirmPasswordResetCommand,
    ) -> Result<(), ConfirmPasswordResetError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl DashboardUseCase for StubAccounts {
    async fn execute(&self, _user_id: UserId) -> Result<Dashboard, DashboardError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl ListAddressesUseCase for StubAccounts {
    async fn execute(&self, _owner: UserId) -> Result<Vec<AddressRecord>, AddressError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl GetAddressUseCase for StubAccounts {
    async fn execute(&self, _owner: UserId, _id: Uuid) -> Result<AddressRecord, AddressError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl CreateAddressUseCase for StubAccounts {
    async fn execute(
        &self,
        _owner: UserId,
        _command: CreateAddressCommand,
    ) -> Result<AddressRecord, AddressError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl UpdateAddressUseCase for StubAccounts {
    async fn execute(
        &self,
        _owner: UserId,
        _id: Uuid,
        _command: UpdateAddressCommand,
    ) -> Result<AddressRecord, AddressError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl DeleteAddressUseCase for StubAccounts {
    async fn execute(&self, _owner: UserId, _id: Uuid) -> Result<(), AddressError> {
        unimplemented!("{UNUSED}")
    }
}

/// Swallows every mail; registration route tests never wait on delivery.
#[derive(Default, Clone)]
pub struct SilentNotifier;

#[async_trait]
impl AccountNotifier for SilentNotifier {
    async fn send_verification_code(
        &self,
        _email: &str,
        _code: &str,
    ) -> Result<(), AccountNotificationError> {
        Ok(())
    }

    async fn send_password_reset(
        &self,
        _email: &str,
        _token: &str,
    ) -> Result<(), AccountNotificationError> {
        Ok(())
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCatalog;

#[async_trait]
impl ListCategoriesUseCase for StubCatalog {
    async fn execute(&self) -> Result<Vec<Category>, BrowseCatalogError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl GetCategoryUseCase for StubCatalog {
    async fn execute(&self, _slug: &str) -> Result<CategoryDetail, BrowseCatalogError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl ListProductsUseCase for StubCatalog {
    async fn execute(&self) -> Result<Vec<Product>, BrowseCatalogError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl SearchProductsUseCase for StubCatalog {
    async fn execute(&self, _query: &str) -> Result<Vec<Product>, BrowseCatalogError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl GetProductUseCase for StubCatalog {
    async fn execute(&self, _id: Uuid) -> Result<ProductDetail, BrowseCatalogError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl RelatedProductsUseCase for StubCatalog {
    async fn execute(&self, _id: Uuid) -> Result<Vec<Product>, BrowseCatalogError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl ListReviewsUseCase for StubCatalog {
    async fn execute(&self, _product_id: Uuid) -> Result<Vec<Review>, ReviewError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl CreateReviewUseCase for StubCatalog {
    async fn execute(
        &self,
        _author: UserId,
        _product_id: Uuid,
        _command: CreateReviewCommand,
    ) -> Result<Review, ReviewError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl VoteReviewUseCase for StubCatalog {
    async fn execute(
        &self,
        _review_id: Uuid,
        _direction: VoteDirection,
    ) -> Result<Review, ReviewError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl CreateProductUseCase for StubCatalog {
    async fn execute(&self, _command: ProductCommand) -> Result<Product, ManageProductError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl UpdateProductUseCase for StubCatalog {
    async fn execute(
        &self,
        _id: Uuid,
        _command: ProductCommand,
    ) -> Result<Product, ManageProductError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl DeleteProductUseCase for StubCatalog {
    async fn execute(&self, _id: Uuid) -> Result<(), ManageProductError> {
        unimplemented!("{UNUSED}")
    }
}

// ============================================================================
// Cart
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCart;

#[async_trait]
impl GetCartUseCase for StubCart {
    async fn execute(&self, _owner: UserId) -> Result<Cart, CartError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl AddToCartUseCase for StubCart {
    async fn execute(&self, _owner: UserId, _command: AddToCartCommand) -> Result<(), CartError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl RemoveCartItemUseCase for StubCart {
    async fn execute(&self, _owner: UserId, _line_id: Uuid) -> Result<(), CartError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl UpdateCartItemUseCase for StubCart {
    async fn execute(
        &self,
        _owner: UserId,
        _line_id: Uuid,
        _command: UpdateCartItemCommand,
    ) -> Result<(), CartError> {
        unimplemented!("{UNUSED}")
    }
}

// ============================================================================
// Orders
// ============================================================================

#[derive(Default, Clone)]
pub struct StubOrders;

#[async_trait]
impl CheckoutUseCase for StubOrders {
    async fn execute(
        &self,
        _owner: UserId,
        _command: CheckoutCommand,
    ) -> Result<PlacedOrder, OrderError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl ListOrdersUseCase for StubOrders {
    async fn execute(&self, _owner: UserId) -> Result<Vec<Order>, OrderError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl GetOrderUseCase for StubOrders {
    async fn execute(&self, _owner: UserId, _order_number: &str) -> Result<Order, OrderError> {
        unimplemented!("{UNUSED}")
    }
}

#[async_trait]
impl UpdateOrderStatusUseCase for StubOrders {
    async fn execute(
        &self,
        _actor: OrderActor,
        _order_number: &str,
        _command: UpdateOrderStatusCommand,
    ) -> Result<(), OrderError> {
        unimplemented!("{UNUSED}")
    }
}
