use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::domain::entities::Product;
use crate::catalog::application::ports::incoming::use_cases::{
    CreateProductUseCase, DeleteProductUseCase, ManageProductError, ProductCommand,
    UpdateProductUseCase,
};
use crate::catalog::application::ports::outgoing::{ProductRepository, ProductRepositoryError};

/// Staff-only product maintenance.
pub struct ProductAdminService<P>
where
    P: ProductRepository,
{
    repository: P,
}

impl<P> ProductAdminService<P>
where
    P: ProductRepository,
{
    pub fn new(repository: P) -> Self {
        Self { repository }
    }

    async fn ensure_category(&self, command: &ProductCommand) -> Result<(), ManageProductError> {
        let Some(category_id) = command.category_id() else {
            return Ok(());
        };

        if self
            .repository
            .category_exists(category_id)
            .await
            .map_err(map_err)?
        {
            Ok(())
        } else {
            Err(ManageProductError::CategoryNotFound)
        }
    }
}

fn map_err(e: ProductRepositoryError) -> ManageProductError {
    match e {
        ProductRepositoryError::NotFound => ManageProductError::ProductNotFound,
        ProductRepositoryError::DatabaseError(msg) => ManageProductError::RepositoryError(msg),
    }
}

#[async_trait]
impl<P> CreateProductUseCase for ProductAdminService<P>
where
    P: ProductRepository,
{
    async fn execute(&self, command: ProductCommand) -> Result<Product, ManageProductError> {
        self.ensure_category(&command).await?;

        let product = self
            .repository
            .create(command.into_data())
            .await
            .map_err(map_err)?;

        tracing::info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }
}

#[async_trait]
impl<P> UpdateProductUseCase for ProductAdminService<P>
where
    P: ProductRepository,
{
    async fn execute(
        &self,
        id: Uuid,
        command: ProductCommand,
    ) -> Result<Product, ManageProductError> {
        self.ensure_category(&command).await?;

        self.repository
            .update(id, command.into_data())
            .await
            .map_err(map_err)
    }
}

#[async_trait]
impl<P> DeleteProductUseCase for ProductAdminService<P>
where
    P: ProductRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), ManageProductError> {
        self.repository.deactivate(id).await.map_err(map_err)?;

        tracing::info!(product_id = %id, "Product deactivated");
        Ok(())
    }
}
