use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = self
            .repository
            .create(&NewProductProps {
                name: params.name,
                price: params.price,
                description: params.description,
            })
            .await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
            async fn exists_by_id(&self, id: ProductId) -> Result<bool, RepositoryError>;
            async fn create(&self, props: &NewProductProps) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;
            async fn delete_by_id(&self, id: ProductId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_create_product_with_store_assigned_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|props| Ok(Product::with_id(ProductId::new(1), props.clone())));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(CreateProductParams {
                name: "Widget".to_string(),
                price: 9.99,
                description: Some("A small widget".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 9.99);
        assert_eq!(product.description.as_deref(), Some("A small widget"));
    }

    #[tokio::test]
    async fn should_pass_payload_through_without_validation() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .withf(|props| props.name.is_empty() && props.price < 0.0)
            .returning(|props| Ok(Product::with_id(ProductId::new(8), props.clone())));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "".to_string(),
                price: -1.0,
                description: None,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_propagate_repository_failure_on_create() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "Widget".to_string(),
                price: 9.99,
                description: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
