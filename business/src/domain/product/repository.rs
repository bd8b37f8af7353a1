use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProductProps, Product};
use super::value_objects::ProductId;

/// Persistence port for products, keyed by numeric identifier.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every stored product, ordered by identifier.
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
    async fn exists_by_id(&self, id: ProductId) -> Result<bool, RepositoryError>;
    /// Inserts a new product; the store assigns its identifier.
    async fn create(&self, props: &NewProductProps) -> Result<Product, RepositoryError>;
    /// Inserts the product if its identifier is unknown, overwrites it otherwise.
    async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;
    /// Fails with `RepositoryError::NotFound` when no product has this identifier.
    async fn delete_by_id(&self, id: ProductId) -> Result<(), RepositoryError>;
}
