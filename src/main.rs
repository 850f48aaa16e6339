pub mod modules;
pub use modules::{auth, cart, catalog, email, orders};
pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{
    AddressRepositoryPostgres, OrderHistoryQueryPostgres, PasswordResetRepositoryPostgres,
    RedisTokenRepository, RedisVerificationCodeStore, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::auth::application::orchestrator::UserRegistrationOrchestrator;
use crate::auth::application::ports::incoming::use_cases::RegisterUserUseCase;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::{
    AddressService, ChangePasswordService, CheckEmailService, ConfirmPasswordResetService,
    DashboardService, DeleteAccountService, FetchProfileService, LoginUserService,
    LogoutUserService, RefreshTokenService, RegisterUserService, RequestPasswordResetService,
    ResendVerificationService, UpdateProfileService, VerifyEmailService,
};
use crate::auth::application::AccountUseCases;
use crate::cart::adapter::outgoing::CartRepositoryPostgres;
use crate::cart::application::services::CartService;
use crate::cart::application::CartUseCases;
use crate::catalog::adapter::outgoing::{
    CatalogQueryPostgres, ProductRepositoryPostgres, ReviewRepositoryPostgres,
};
use crate::catalog::application::services::{CatalogService, ProductAdminService, ReviewService};
use crate::catalog::application::CatalogUseCases;
use crate::config::AppConfig;
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::{AccountNotifier, EmailSender};
use crate::email::application::services::AccountEmailService;
use crate::orders::adapter::outgoing::OrderRepositoryPostgres;
use crate::orders::application::services::OrderService;
use crate::orders::application::OrderUseCases;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub account: AccountUseCases,
    pub catalog: CatalogUseCases,
    pub cart: CartUseCases,
    pub orders: OrderUseCases,
}

fn startup_error(context: &str, e: impl Display) -> std::io::Error {
    error!(error = %e, "{}", context);
    std::io::Error::other(format!("{context}: {e}"))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    let environment = AppConfig::load_dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(environment = %environment, "Starting application...");

    let config = AppConfig::from_env().map_err(|e| startup_error("Invalid configuration", e))?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .map_err(|e| startup_error("Failed to run migrations", e))?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| startup_error("Failed to create Redis pool", e))?;
    let redis_arc = Arc::new(redis_pool);

    // Security
    let jwt_config = JwtConfig::from_env().map_err(|e| startup_error("Invalid JWT settings", e))?;
    let tokens: Arc<dyn TokenProvider + Send + Sync> = Arc::new(JwtTokenService::new(jwt_config));
    let hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(
        Argon2Hasher::from_env(config.is_production())
            .map_err(|e| startup_error("Invalid password hashing settings", e))?,
    );

    // Mail
    let smtp_sender = SmtpEmailSender::from_settings(&config.smtp, &config.email_from)
        .map_err(|e| startup_error("Failed to configure SMTP", e))?;
    let sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(smtp_sender);
    let notifier: Arc<dyn AccountNotifier + Send + Sync> = Arc::new(AccountEmailService::new(
        sender,
        config.frontend_url.clone(),
    ));

    // Accounts
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let reset_repo = PasswordResetRepositoryPostgres::new(Arc::clone(&db_arc));
    let order_history = OrderHistoryQueryPostgres::new(Arc::clone(&db_arc));
    let addresses = Arc::new(AddressService::new(AddressRepositoryPostgres::new(
        Arc::clone(&db_arc),
    )));
    let blacklist = RedisTokenRepository::new(Arc::clone(&redis_arc));
    let codes = RedisVerificationCodeStore::new(Arc::clone(&redis_arc));

    let register_user: Arc<dyn RegisterUserUseCase + Send + Sync> =
        Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo.clone(),
            codes.clone(),
            Arc::clone(&hasher),
        ));
    let register_orchestrator =
        UserRegistrationOrchestrator::new(register_user, Arc::clone(&notifier));

    let account = AccountUseCases {
        register: Arc::new(register_orchestrator),
        verify_email: Arc::new(VerifyEmailService::new(
            user_query.clone(),
            user_repo.clone(),
            codes.clone(),
        )),
        resend_verification: Arc::new(ResendVerificationService::new(
            user_query.clone(),
            codes,
            Arc::clone(&notifier),
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            Arc::clone(&hasher),
            Arc::clone(&tokens),
        )),
        refresh_token: Arc::new(RefreshTokenService::new(
            user_query.clone(),
            blacklist.clone(),
            Arc::clone(&tokens),
        )),
        logout: Arc::new(LogoutUserService::new(blacklist, Arc::clone(&tokens))),
        check_email: Arc::new(CheckEmailService::new(user_query.clone())),
        fetch_profile: Arc::new(FetchProfileService::new(user_query.clone())),
        update_profile: Arc::new(UpdateProfileService::new(user_repo.clone())),
        delete_account: Arc::new(DeleteAccountService::new(user_repo.clone())),
        change_password: Arc::new(ChangePasswordService::new(
            user_query.clone(),
            user_repo,
            Arc::clone(&hasher),
        )),
        request_password_reset: Arc::new(RequestPasswordResetService::new(
            user_query,
            reset_repo.clone(),
            notifier,
        )),
        confirm_password_reset: Arc::new(ConfirmPasswordResetService::new(reset_repo, hasher)),
        dashboard: Arc::new(DashboardService::new(order_history)),
        list_addresses: addresses.clone(),
        get_address: addresses.clone(),
        create_address: addresses.clone(),
        update_address: addresses.clone(),
        delete_address: addresses,
    };

    // Catalog
    let catalog_query = CatalogQueryPostgres::new(Arc::clone(&db_arc));
    let review_repo = ReviewRepositoryPostgres::new(Arc::clone(&db_arc));
    let product_repo = ProductRepositoryPostgres::new(Arc::clone(&db_arc));
    let browse = Arc::new(CatalogService::new(
        catalog_query.clone(),
        review_repo.clone(),
    ));
    let reviews = Arc::new(ReviewService::new(catalog_query, review_repo));
    let product_admin = Arc::new(ProductAdminService::new(product_repo));

    let catalog = CatalogUseCases {
        list_categories: browse.clone(),
        get_category: browse.clone(),
        list_products: browse.clone(),
        search_products: browse.clone(),
        get_product: browse.clone(),
        related_products: browse,
        list_reviews: reviews.clone(),
        create_review: reviews.clone(),
        vote_review: reviews,
        create_product: product_admin.clone(),
        update_product: product_admin.clone(),
        delete_product: product_admin,
    };

    // Cart
    let cart_repo = CartRepositoryPostgres::new(Arc::clone(&db_arc));
    let cart_service = Arc::new(CartService::new(cart_repo));
    let cart = CartUseCases {
        get: cart_service.clone(),
        add: cart_service.clone(),
        remove: cart_service.clone(),
        update: cart_service,
    };

    // Orders
    let order_service = Arc::new(OrderService::new(OrderRepositoryPostgres::new(Arc::clone(
        &db_arc,
    ))));
    let orders = OrderUseCases {
        checkout: order_service.clone(),
        list: order_service.clone(),
        get: order_service.clone(),
        update_status: order_service,
    };

    let state = AppState {
        account,
        catalog,
        cart,
        orders,
    };

    info!(server_url = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&tokens)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as account;
    use crate::cart::adapter::incoming::web::routes as cart;
    use crate::catalog::adapter::incoming::web::routes as catalog;
    use crate::orders::adapter::incoming::web::routes as orders;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(account::signup_handler);
    cfg.service(account::verify_email_handler);
    cfg.service(account::resend_verification_handler);
    cfg.service(account::login_user_handler);
    cfg.service(account::refresh_token_handler);
    cfg.service(account::logout_user_handler);
    cfg.service(account::check_email_handler);
    cfg.service(account::request_password_reset_handler);
    cfg.service(account::confirm_password_reset_handler);
    // Account
    cfg.service(account::get_account_handler);
    cfg.service(account::update_account_handler);
    cfg.service(account::delete_account_handler);
    cfg.service(account::change_password_handler);
    cfg.service(account::dashboard_handler);
    cfg.service(account::list_addresses_handler);
    cfg.service(account::create_address_handler);
    cfg.service(account::get_address_handler);
    cfg.service(account::replace_address_handler);
    cfg.service(account::patch_address_handler);
    cfg.service(account::delete_address_handler);
    // Catalog; search must precede the `{id}` route
    cfg.service(catalog::list_categories_handler);
    cfg.service(catalog::get_category_handler);
    cfg.service(catalog::list_products_handler);
    cfg.service(catalog::search_products_handler);
    cfg.service(catalog::get_product_handler);
    cfg.service(catalog::related_products_handler);
    cfg.service(catalog::list_reviews_handler);
    cfg.service(catalog::create_review_handler);
    cfg.service(catalog::vote_review_handler);
    cfg.service(catalog::create_product_handler);
    cfg.service(catalog::update_product_handler);
    cfg.service(catalog::delete_product_handler);
    // Cart
    cfg.service(cart::get_cart_handler);
    cfg.service(cart::add_to_cart_handler);
    cfg.service(cart::remove_cart_item_handler);
    cfg.service(cart::update_cart_item_handler);
    // Orders; checkout must precede the `{order_id}` route
    cfg.service(orders::checkout_handler);
    cfg.service(orders::list_orders_handler);
    cfg.service(orders::get_order_handler);
    cfg.service(orders::update_order_status_handler);
    cfg.service(orders::delivery_times_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
