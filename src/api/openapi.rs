use crate::api::schemas::{ErrorDetail, ErrorResponse, MessageResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Accounts
use crate::auth::adapter::incoming::web::routes::{
    AddressRequest, AddressResponse, ChangePasswordRequest, CheckEmailResponse,
    ConfirmPasswordResetRequest, EmailRequest, LoginRequestDto, LoginResponse, LoginUserInfo,
    LogoutRequestDto, ProfileResponse, RefreshTokenRequestDto, RefreshTokenResponseBody,
    SignupRequest, SignupResponse, UpdateProfileRequest, VerifyEmailRequest,
};
// Cart
use crate::cart::adapter::incoming::web::routes::{
    AddToCartRequest, CartItemResponse, CartProductResponse, CartResponse, UpdateCartItemRequest,
};
// Catalog
use crate::catalog::adapter::incoming::web::routes::{
    CategoryDetailResponse, CategoryResponse, CreateReviewRequest, ProductDetailResponse,
    ProductRequest, ProductResponse, RelatedProductResponse, ReviewResponse, VoteRequest,
};
// Orders
use crate::orders::adapter::incoming::web::routes::{
    CheckoutRequest, CheckoutResponse, DeliverySlotResponse, OrderDetailResponse,
    OrderItemResponse, OrderProductResponse, OrderResponse, TimelineStepResponse,
    UpdateOrderStatusRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Supermarket API",
        version = "1.0.0",
        description = "Accounts, catalog, cart and order endpoints of the online supermarket",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user::signup_handler,
        crate::auth::adapter::incoming::web::routes::verify_email::verify_email_handler,
        crate::auth::adapter::incoming::web::routes::verify_email::resend_verification_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::logout_user::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::check_email::check_email_handler,
        crate::auth::adapter::incoming::web::routes::password_reset::request_password_reset_handler,
        crate::auth::adapter::incoming::web::routes::password_reset::confirm_password_reset_handler,

        // Account endpoints
        crate::auth::adapter::incoming::web::routes::account::get_account_handler,
        crate::auth::adapter::incoming::web::routes::account::update_account_handler,
        crate::auth::adapter::incoming::web::routes::account::delete_account_handler,
        crate::auth::adapter::incoming::web::routes::change_password::change_password_handler,
        crate::auth::adapter::incoming::web::routes::dashboard::dashboard_handler,

        // Address endpoints
        crate::auth::adapter::incoming::web::routes::addresses::list_addresses_handler,
        crate::auth::adapter::incoming::web::routes::addresses::create_address_handler,
        crate::auth::adapter::incoming::web::routes::addresses::get_address_handler,
        crate::auth::adapter::incoming::web::routes::addresses::replace_address_handler,
        crate::auth::adapter::incoming::web::routes::addresses::patch_address_handler,
        crate::auth::adapter::incoming::web::routes::addresses::delete_address_handler,

        // Catalog endpoints
        crate::catalog::adapter::incoming::web::routes::browse::list_categories_handler,
        crate::catalog::adapter::incoming::web::routes::browse::get_category_handler,
        crate::catalog::adapter::incoming::web::routes::browse::list_products_handler,
        crate::catalog::adapter::incoming::web::routes::browse::search_products_handler,
        crate::catalog::adapter::incoming::web::routes::browse::get_product_handler,
        crate::catalog::adapter::incoming::web::routes::browse::related_products_handler,

        // Review endpoints
        crate::catalog::adapter::incoming::web::routes::reviews::list_reviews_handler,
        crate::catalog::adapter::incoming::web::routes::reviews::create_review_handler,
        crate::catalog::adapter::incoming::web::routes::reviews::vote_review_handler,

        // Product administration
        crate::catalog::adapter::incoming::web::routes::admin_products::create_product_handler,
        crate::catalog::adapter::incoming::web::routes::admin_products::update_product_handler,
        crate::catalog::adapter::incoming::web::routes::admin_products::delete_product_handler,

        // Cart endpoints
        crate::cart::adapter::incoming::web::routes::cart::get_cart_handler,
        crate::cart::adapter::incoming::web::routes::cart::add_to_cart_handler,
        crate::cart::adapter::incoming::web::routes::cart::remove_cart_item_handler,
        crate::cart::adapter::incoming::web::routes::cart::update_cart_item_handler,

        // Order endpoints
        crate::orders::adapter::incoming::web::routes::orders::checkout_handler,
        crate::orders::adapter::incoming::web::routes::orders::list_orders_handler,
        crate::orders::adapter::incoming::web::routes::orders::get_order_handler,
        crate::orders::adapter::incoming::web::routes::orders::update_order_status_handler,
        crate::orders::adapter::incoming::web::routes::orders::delivery_times_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            MessageResponse,

            // Account DTOs
            SignupRequest,
            SignupResponse,
            VerifyEmailRequest,
            EmailRequest,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            RefreshTokenRequestDto,
            RefreshTokenResponseBody,
            LogoutRequestDto,
            CheckEmailResponse,
            ConfirmPasswordResetRequest,
            ProfileResponse,
            UpdateProfileRequest,
            ChangePasswordRequest,
            AddressRequest,
            AddressResponse,

            // Catalog DTOs
            CategoryResponse,
            CategoryDetailResponse,
            ProductResponse,
            ProductDetailResponse,
            RelatedProductResponse,
            ReviewResponse,
            CreateReviewRequest,
            VoteRequest,
            ProductRequest,

            // Cart DTOs
            CartResponse,
            CartItemResponse,
            CartProductResponse,
            AddToCartRequest,
            UpdateCartItemRequest,

            // Order DTOs
            CheckoutRequest,
            CheckoutResponse,
            OrderResponse,
            OrderDetailResponse,
            OrderItemResponse,
            OrderProductResponse,
            TimelineStepResponse,
            UpdateOrderStatusRequest,
            DeliverySlotResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and token endpoints"),
        (name = "account", description = "Profile and dashboard of the signed-in user"),
        (name = "addresses", description = "Delivery address book"),
        (name = "catalog", description = "Categories and products"),
        (name = "reviews", description = "Product reviews"),
        (name = "admin", description = "Staff-only product management"),
        (name = "cart", description = "Shopping cart"),
        (name = "orders", description = "Checkout and order tracking"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
