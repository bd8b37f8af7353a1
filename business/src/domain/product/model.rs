use super::value_objects::ProductId;

/// A product as held by the store.
///
/// Descriptive fields are opaque payload: they are stored and returned
/// exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

/// Payload fields of a product that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductProps {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

impl Product {
    /// Binds a payload to an identifier. Any identifier the caller may have
    /// received alongside the payload is discarded in favour of `id`.
    pub fn with_id(id: ProductId, props: NewProductProps) -> Self {
        Self {
            id,
            name: props.name,
            price: props.price,
            description: props.description,
        }
    }

    /// Constructor for data already persisted in the repository.
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: f64,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            description,
        }
    }

    /// Returns the payload part of the product.
    pub fn props(&self) -> NewProductProps {
        NewProductProps {
            name: self.name.clone(),
            price: self.price,
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_bind_payload_to_given_id() {
        let product = Product::with_id(
            ProductId::new(5),
            NewProductProps {
                name: "Widget".to_string(),
                price: 9.99,
                description: None,
            },
        );

        assert_eq!(product.id, ProductId::new(5));
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 9.99);
    }

    #[test]
    fn should_return_payload_without_id() {
        let product = Product::from_repository(
            ProductId::new(1),
            "Gadget".to_string(),
            15.5,
            Some("Blue".to_string()),
        );

        let props = product.props();

        assert_eq!(props.name, "Gadget");
        assert_eq!(props.price, 15.5);
        assert_eq!(props.description.as_deref(), Some("Blue"));
    }
}
