use serde::{Deserialize, Serialize};

/// Numeric product identifier assigned by the store.
/// Immutable once assigned and unique across all products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_inner_value() {
        let id = ProductId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn should_display_product_id() {
        let id = ProductId::new(7);
        assert_eq!(format!("{}", id), "7");
    }

    #[test]
    fn should_order_product_ids_numerically() {
        assert!(ProductId::new(2) < ProductId::new(10));
    }

    #[test]
    fn should_serialize_as_plain_number() {
        let json = serde_json::to_string(&ProductId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
