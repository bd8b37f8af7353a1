use poem_openapi::Object;

use business::domain::product::model::Product;

/// Product payload for create and update.
#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Ignored: the store assigns identifiers on create and the path decides on update
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i64>,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            price: product.price,
            description: product.description,
        }
    }
}
