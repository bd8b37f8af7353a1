use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Verify product exists
        if !self.repository.exists_by_id(params.id).await? {
            self.logger
                .warn(&format!("Product not found for update: {}", params.id));
            return Err(ProductError::NotFound);
        }

        let product = Product::with_id(
            params.id,
            NewProductProps {
                name: params.name,
                price: params.price,
                description: params.description,
            },
        );

        let updated = self.repository.save(&product).await?;

        self.logger.info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
