use crate::auth::application::orchestrator::UserRegistrationOrchestrator;
use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordUseCase, CheckEmailUseCase, ConfirmPasswordResetUseCase, CreateAddressUseCase,
    DashboardUseCase, DeleteAccountUseCase, DeleteAddressUseCase, FetchProfileUseCase,
    GetAddressUseCase, ListAddressesUseCase, LoginUserUseCase, LogoutUserUseCase,
    RefreshTokenUseCase, RegisterUserUseCase, RequestPasswordResetUseCase,
    ResendVerificationUseCase, UpdateAddressUseCase, UpdateProfileUseCase, VerifyEmailUseCase,
};
use crate::auth::application::AccountUseCases;
use crate::cart::application::cart_use_cases::CartUseCases;
use crate::cart::application::ports::incoming::use_cases::{
    AddToCartUseCase, GetCartUseCase, RemoveCartItemUseCase, UpdateCartItemUseCase,
};
use crate::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::catalog::application::ports::incoming::use_cases::{
    CreateProductUseCase, CreateReviewUseCase, DeleteProductUseCase, GetCategoryUseCase,
    GetProductUseCase, ListCategoriesUseCase, ListProductsUseCase, ListReviewsUseCase,
    RelatedProductsUseCase, SearchProductsUseCase, UpdateProductUseCase, VoteReviewUseCase,
};
use crate::orders::application::order_use_cases::OrderUseCases;
use crate::orders::application::ports::incoming::use_cases::{
    CheckoutUseCase, GetOrderUseCase, ListOrdersUseCase, UpdateOrderStatusUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Builds an `AppState` where every use case is a panicking stub until
/// replaced through one of the `with_*` methods.
pub struct TestAppStateBuilder {
    account: AccountUseCases,
    catalog: CatalogUseCases,
    cart: CartUseCases,
    orders: OrderUseCases,
}

fn registration_orchestrator(
    register: Arc<dyn RegisterUserUseCase + Send + Sync>,
) -> Arc<UserRegistrationOrchestrator> {
    Arc::new(UserRegistrationOrchestrator::new(
        register,
        Arc::new(SilentNotifier),
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let accounts = Arc::new(StubAccounts);
        let catalog = Arc::new(StubCatalog);
        let cart = Arc::new(StubCart);
        let orders = Arc::new(StubOrders);

        Self {
            account: AccountUseCases {
                register: registration_orchestrator(accounts.clone()),
                verify_email: accounts.clone(),
                resend_verification: accounts.clone(),
                login: accounts.clone(),
                refresh_token: accounts.clone(),
                logout: accounts.clone(),
                check_email: accounts.clone(),
                fetch_profile: accounts.clone(),
                update_profile: accounts.clone(),
                delete_account: accounts.clone(),
                change_password: accounts.clone(),
                request_password_reset: accounts.clone(),
                confirm_password_reset: accounts.clone(),
                dashboard: accounts.clone(),
                list_addresses: accounts.clone(),
                get_address: accounts.clone(),
                create_address: accounts.clone(),
                update_address: accounts.clone(),
                delete_address: accounts,
            },
            catalog: CatalogUseCases {
                list_categories: catalog.clone(),
                get_category: catalog.clone(),
                list_products: catalog.clone(),
                search_products: catalog.clone(),
                get_product: catalog.clone(),
                related_products: catalog.clone(),
                list_reviews: catalog.clone(),
                create_review: catalog.clone(),
                vote_review: catalog.clone(),
                create_product: catalog.clone(),
                update_product: catalog.clone(),
                delete_product: catalog,
            },
            cart: CartUseCases {
                get: cart.clone(),
                add: cart.clone(),
                remove: cart.clone(),
                update: cart,
            },
            orders: OrderUseCases {
                checkout: orders.clone(),
                list: orders.clone(),
                get: orders.clone(),
                update_status: orders,
            },
        }
    }
}

impl TestAppStateBuilder {
    // ------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------

    /// Registration always goes through the orchestrator; mails are dropped.
    pub fn with_register_user(
        mut self,
        uc: impl RegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.account.register = registration_orchestrator(Arc::new(uc));
        self
    }

    pub fn with_verify_email(
        mut self,
        uc: impl VerifyEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.account.verify_email = Arc::new(uc);
        self
    }

    pub fn with_resend_verification(
        mut self,
        uc: impl ResendVerificationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.account.resend_verification = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.account.login = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl RefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.account.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutUserUseCase + Send + Sync + 'static) -> Self {
        self.account.logout = Arc::new(uc);
        self
    }

    pub fn with_check_email(mut self, uc: impl CheckEmailUseCase + Send + Sync + 'static) -> Self {
        self.account.check_email = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl FetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.account.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.account.update_profile = Arc::new(uc);
        self
    }

    pub fn with_delete_account(
        mut self,
        uc: impl DeleteAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.account.delete_account = Arc::new(uc);
        self
    }

    pub fn with_change_password(
        mut self,
        uc: impl ChangePasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.account.change_password = Arc::new(uc);
        self
    }

    pub fn with_request_password_reset(
        mut self,
        uc: impl RequestPasswordResetUseCase + Send + Sync + 'static,
    ) -> Self {
        self.account.request_password_reset = Arc::new(uc);
        self
    }

    pub fn with_confirm_password_reset(
        mut self,
        uc: impl ConfirmPasswordResetUseCase + Send + Sync + 'static,
    ) -> Self {
        self.account.confirm_password_reset = Arc::new(uc);
        self
    }

    pub fn with_dashboard(mut self, uc: impl DashboardUseCase + Send + Sync + 'static) -> Self {
        self.account.dashboard = Arc::new(uc);
        self
    }

    /// Installs one address book behind all five address use cases.
    pub fn with_addresses<B>(mut self, book: B) -> Self
    where
        B: ListAddressesUseCase
            + GetAddressUseCase
            + CreateAddressUseCase
            + UpdateAddressUseCase
            + DeleteAddressUseCase
            + Send
            + Sync
            + 'static,
    {
        let book = Arc::new(book);
        self.account.list_addresses = book.clone();
        self.account.get_address = book.clone();
        self.account.create_address = book.clone();
        self.account.update_address = book.clone();
        self.account.delete_address = book;
        self
    }

    // ------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------

    pub fn with_catalog<C>(mut self, catalog: C) -> Self
    where
        C: ListCategoriesUseCase
            + GetCategoryUseCase
            + ListProductsUseCase
            + SearchProductsUseCase
            + GetProductUseCase
            + RelatedProductsUseCase
            + Send
            + Sync
            + 'static,
    {
        let catalog = Arc::new(catalog);
        self.catalog.list_categories = catalog.clone();
        self.catalog.get_category = catalog.clone();
        self.catalog.list_products = catalog.clone();
        self.catalog.search_products = catalog.clone();
        self.catalog.get_product = catalog.clone();
        self.catalog.related_products = catalog;
        self
    }

    pub fn with_reviews<R>(mut self, reviews: R) -> Self
    where
        R: ListReviewsUseCase + CreateReviewUseCase + VoteReviewUseCase + Send + Sync + 'static,
    {
        let reviews = Arc::new(reviews);
        self.catalog.list_reviews = reviews.clone();
        self.catalog.create_review = reviews.clone();
        self.catalog.vote_review = reviews;
        self
    }

    pub fn with_product_admin<A>(mut self, admin: A) -> Self
    where
        A: CreateProductUseCase
            + UpdateProductUseCase
            + DeleteProductUseCase
            + Send
            + Sync
            + 'static,
    {
        let admin = Arc::new(admin);
        self.catalog.create_product = admin.clone();
        self.catalog.update_product = admin.clone();
        self.catalog.delete_product = admin;
        self
    }

    // ------------------------------------------------------------------
    // Cart & orders
    // ------------------------------------------------------------------

    pub fn with_cart<C>(mut self, cart: C) -> Self
    where
        C: GetCartUseCase
            + AddToCartUseCase
            + RemoveCartItemUseCase
            + UpdateCartItemUseCase
            + Send
            + Sync
            + 'static,
    {
        let cart = Arc::new(cart);
        self.cart.get = cart.clone();
        self.cart.add = cart.clone();
        self.cart.remove = cart.clone();
        self.cart.update = cart;
        self
    }

    pub fn with_orders<O>(mut self, orders: O) -> Self
    where
        O: CheckoutUseCase
            + ListOrdersUseCase
            + GetOrderUseCase
            + UpdateOrderStatusUseCase
            + Send
            + Sync
            + 'static,
    {
        let orders = Arc::new(orders);
        self.orders.checkout = orders.clone();
        self.orders.list = orders.clone();
        self.orders.get = orders.clone();
        self.orders.update_status = orders;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            account: self.account,
            catalog: self.catalog,
            cart: self.cart,
            orders: self.orders,
        })
    }
}
