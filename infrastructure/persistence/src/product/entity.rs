use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub price: BigDecimal,
    pub description: Option<String>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = self
            .price
            .to_f64()
            .ok_or(RepositoryError::Persistence)?;

        Ok(Product::from_repository(
            ProductId::new(self.id),
            self.name,
            price,
            self.description,
        ))
    }
}

/// Converts a price into a NUMERIC value using its shortest decimal form,
/// so `9.99` is stored as `9.99` rather than its binary expansion.
/// Non-finite prices cannot be stored.
pub fn price_to_numeric(price: f64) -> Result<BigDecimal, RepositoryError> {
    if !price.is_finite() {
        return Err(RepositoryError::Persistence);
    }
    BigDecimal::from_str(&price.to_string()).map_err(|_| RepositoryError::Persistence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_store_price_in_shortest_decimal_form() {
        let numeric = price_to_numeric(9.99).unwrap();
        assert_eq!(numeric.to_string(), "9.99");
    }

    #[test]
    fn should_reject_non_finite_price() {
        assert!(price_to_numeric(f64::NAN).is_err());
        assert!(price_to_numeric(f64::INFINITY).is_err());
    }

    #[test]
    fn should_map_entity_into_domain_product() {
        let entity = ProductEntity {
            id: 12,
            name: "Widget".to_string(),
            price: BigDecimal::from_str("9.99").unwrap(),
            description: Some("Small".to_string()),
        };

        let product = entity.into_domain().unwrap();

        assert_eq!(product.id, ProductId::new(12));
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 9.99);
        assert_eq!(product.description.as_deref(), Some("Small"));
    }
}
