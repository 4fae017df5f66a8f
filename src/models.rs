use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a Noon catalog search response. Only the `products` array is
/// read; a response without the key decodes as an empty list.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Vec<ApiProduct>,
}

/// One product record as returned by the search API. Every field is
/// optional upstream; missing fields become empty strings in the output row.
#[derive(Debug, Default, Deserialize)]
pub struct ApiProduct {
    pub name: Option<String>,
    pub price: Option<Price>,
    // price.value and rating arrive as numbers or strings depending on the
    // catalog entry, so both stay raw JSON scalars until rendering.
    pub rating: Option<Value>,
    pub image_key: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Price {
    pub value: Option<Value>,
}

/// One CSV row. Field order here is the column order in the output file,
/// shared with the other platform crawlers writing to the same sink.
#[derive(Debug, PartialEq, Serialize)]
pub struct ProductRow {
    pub title: String,
    pub price: String,
    pub rating: String,
    pub image: String,
    pub product_link: String,
    pub description: String,
    pub search_query: String,
    pub website: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_products_key_is_empty_list() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.products.is_empty());
    }

    #[test]
    fn partial_product_record_decodes() {
        let json = r#"{"products": [{"name": "Mouse"}, {"rating": "4.2"}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.products.len(), 2);
        assert_eq!(response.products[0].name.as_deref(), Some("Mouse"));
        assert!(response.products[0].price.is_none());
        assert_eq!(response.products[1].rating, Some(Value::from("4.2")));
    }
}
