use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

/// In-memory implementation of `ProductRepository` for local runs and tests.
///
/// Identifiers start at 1 and never repeat, even after deletes or after
/// `save` stored a product under an explicit identifier.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<ProductId, Product>>>,
    last_id: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> ProductId {
        ProductId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.contains_key(&id))
    }

    async fn create(&self, props: &NewProductProps) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;

        let product = Product::with_id(self.next_id(), props.clone());
        products.insert(product.id, product.clone());

        tracing::debug!(product_id = %product.id, "Inserted product");
        Ok(product)
    }

    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;

        self.last_id.fetch_max(product.id.value(), Ordering::SeqCst);
        products.insert(product.id, product.clone());

        tracing::debug!(product_id = %product.id, "Saved product");
        Ok(product.clone())
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;

        match products.remove(&id) {
            Some(_) => {
                tracing::debug!(product_id = %id, "Deleted product");
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn widget() -> NewProductProps {
        NewProductProps {
            name: "Widget".to_string(),
            price: 9.99,
            description: None,
        }
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_on_create() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(&widget()).await.unwrap();
        let second = repo.create(&widget()).await.unwrap();

        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(second.id, ProductId::new(2));
    }

    #[tokio::test]
    async fn should_list_products_ordered_by_id() {
        let repo = InMemoryProductRepository::new();
        repo.save(&Product::with_id(ProductId::new(10), widget()))
            .await
            .unwrap();
        repo.create(&widget()).await.unwrap();
        repo.save(&Product::with_id(ProductId::new(3), widget()))
            .await
            .unwrap();

        let ids: Vec<i64> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id.value())
            .collect();

        assert_eq!(ids, vec![3, 10, 11]);
    }

    #[tokio::test]
    async fn should_return_empty_list_for_empty_store() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_overwrite_existing_product_on_save() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(&widget()).await.unwrap();

        let mut changed = created.clone();
        changed.name = "Widget Pro".to_string();
        changed.price = 19.99;
        repo.save(&changed).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Widget Pro");
        assert_eq!(found.price, 19.99);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_report_existence() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(&widget()).await.unwrap();

        assert!(repo.exists_by_id(created.id).await.unwrap());
        assert!(!repo.exists_by_id(ProductId::new(999)).await.unwrap());
    }

    #[tokio::test]
    async fn should_remove_product_on_delete() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(&widget()).await.unwrap();

        repo.delete_by_id(created.id).await.unwrap();

        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_fail_when_deleting_unknown_product() {
        let repo = InMemoryProductRepository::new();

        let result = repo.delete_by_id(ProductId::new(1)).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_not_reuse_ids_after_delete() {
        let repo = InMemoryProductRepository::new();
        let first = repo.create(&widget()).await.unwrap();
        repo.delete_by_id(first.id).await.unwrap();

        let second = repo.create(&widget()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    proptest! {
        #[test]
        fn created_product_is_found_with_same_payload(
            name in ".{0,40}",
            price in -1.0e9f64..1.0e9f64,
            description in proptest::option::of(".{0,40}"),
        ) {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let props = NewProductProps { name, price, description };

            let (created, found) = runtime.block_on(async {
                let repo = InMemoryProductRepository::new();
                let created = repo.create(&props).await.unwrap();
                let found = repo.find_by_id(created.id).await.unwrap();
                (created, found)
            });

            prop_assert_eq!(created.props(), props);
            prop_assert_eq!(found, Some(created));
        }

        #[test]
        fn created_ids_are_unique(count in 1usize..50) {
            let runtime = tokio::runtime::Runtime::new().unwrap();

            let ids = runtime.block_on(async {
                let repo = InMemoryProductRepository::new();
                let mut ids = Vec::with_capacity(count);
                for _ in 0..count {
                    ids.push(repo.create(&widget()).await.unwrap().id);
                }
                ids
            });

            let mut deduped = ids.clone();
            deduped.sort();
            deduped.dedup();
            prop_assert_eq!(deduped.len(), ids.len());
        }
    }
}
