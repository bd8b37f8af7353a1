use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Verify product exists before deleting
        if !self.repository.exists_by_id(params.id).await? {
            self.logger
                .warn(&format!("Product not found for deletion: {}", params.id));
            return Err(ProductError::NotFound);
        }

        // A concurrent delete may still win between the check and the removal.
        self.repository
            .delete_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
