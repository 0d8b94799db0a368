//! Catalog data model
//!
//! Product and variant records as returned by the remote search endpoint.
//! These are snapshots: once fetched (or copied into a bundle entry) they are
//! never mutated.

use serde::{Deserialize, Deserializer, Serialize};

/// A purchasable configuration of a product (e.g. size/color)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogVariant {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    /// Unit price; the endpoint sends this as either a number or a string
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: f64,
    /// Units in stock, when the endpoint reports it
    #[serde(default)]
    pub inventory_quantity: Option<u64>,
}

/// Product image reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    #[serde(default)]
    pub src: String,
}

/// A product record from the remote catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<ProductImage>,
    #[serde(default)]
    pub variants: Vec<CatalogVariant>,
}

impl CatalogProduct {
    /// All variant ids, in the product's own order
    pub fn variant_ids(&self) -> Vec<u64> {
        self.variants.iter().map(|v| v.id).collect()
    }

    /// Whether the variant sub-list is worth expanding in the bundle view
    pub fn has_multiple_variants(&self) -> bool {
        self.variants.len() > 1
    }
}

/// Accepts `7.99`, `"7.99"`, or `null` (treated as 0)
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PriceRepr {
        Number(f64),
        Text(String),
    }

    match Option::<PriceRepr>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(PriceRepr::Number(n)) => Ok(n),
        Some(PriceRepr::Text(s)) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_numeric_price() {
        let json = r#"{
            "id": 77,
            "title": "Shirt",
            "image": { "id": 1, "product_id": 77, "src": "https://cdn/img.png" },
            "variants": [
                { "id": 1, "product_id": 77, "title": "S / Black", "price": 7.99 }
            ]
        }"#;
        let product: CatalogProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 77);
        assert_eq!(product.variants.len(), 1);
        assert_eq!(product.variants[0].price, 7.99);
        assert_eq!(product.image.unwrap().src, "https://cdn/img.png");
    }

    #[test]
    fn test_variant_deserializes_string_price() {
        let json = r#"{ "id": 2, "title": "M / Black", "price": "12.50" }"#;
        let variant: CatalogVariant = serde_json::from_str(json).unwrap();
        assert_eq!(variant.price, 12.50);
        assert_eq!(variant.inventory_quantity, None);
    }

    #[test]
    fn test_product_tolerates_missing_fields() {
        let json = r#"{ "id": 5 }"#;
        let product: CatalogProduct = serde_json::from_str(json).unwrap();
        assert!(product.title.is_empty());
        assert!(product.image.is_none());
        assert!(product.variants.is_empty());
        assert!(!product.has_multiple_variants());
    }

    #[test]
    fn test_variant_ids_preserve_order() {
        let product = CatalogProduct {
            id: 1,
            title: "Hat".to_string(),
            image: None,
            variants: vec![
                CatalogVariant {
                    id: 30,
                    title: "One size".to_string(),
                    price: 4.0,
                    inventory_quantity: Some(3),
                },
                CatalogVariant {
                    id: 10,
                    title: "Kids".to_string(),
                    price: 3.0,
                    inventory_quantity: None,
                },
            ],
        };
        assert_eq!(product.variant_ids(), vec![30, 10]);
        assert!(product.has_multiple_variants());
    }
}
