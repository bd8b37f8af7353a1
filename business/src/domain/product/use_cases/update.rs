use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

/// `id` comes from the request path and always wins over any
/// identifier the client put in the payload.
pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
