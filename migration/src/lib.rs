pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250305_084945_create_addresses_table;
mod m20250306_101500_create_password_reset_tokens_table;
mod m20250310_090000_create_catalog_tables;
mod m20250312_120000_create_cart_tables;
mod m20250314_080000_create_order_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250305_084945_create_addresses_table::Migration),
            Box::new(m20250306_101500_create_password_reset_tokens_table::Migration),
            Box::new(m20250310_090000_create_catalog_tables::Migration),
            Box::new(m20250312_120000_create_cart_tables::Migration),
            Box::new(m20250314_080000_create_order_tables::Migration),
        ]
    }
}
