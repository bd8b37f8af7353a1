use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::{ProductEntity, price_to_numeric};

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %error, "Product query failed");
    RepositoryError::DatabaseError
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, description FROM products ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, description FROM products WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        entity.map(|e| e.into_domain()).transpose()
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)
    }

    async fn create(&self, props: &NewProductProps) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (name, price, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, description"#,
        )
        .bind(&props.name)
        .bind(price_to_numeric(props.price)?)
        .bind(&props.description)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        entity.into_domain()
    }

    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (id, name, price, description)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                price = EXCLUDED.price,
                description = EXCLUDED.description
            RETURNING id, name, price, description"#,
        )
        .bind(product.id.value())
        .bind(&product.name)
        .bind(price_to_numeric(product.price)?)
        .bind(&product.description)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        entity.into_domain()
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
