use serde_json::Value;

use crate::fetcher::BASE_SITE;
use crate::models::{ApiProduct, ProductRow};

const IMAGE_CDN: &str = "https://f.nooncdn.com/p/v1686225580/";

/// Maps one API record onto the shared eight-column row schema.
///
/// The product link always gets the site base prefixed, even for a missing
/// `url`, so an empty record still points at the site root.
pub fn to_row(item: &ApiProduct, query: &str) -> ProductRow {
    let image = match item.image_key.as_deref() {
        Some(key) if !key.is_empty() => format!("{IMAGE_CDN}{key}.jpg"),
        _ => String::new(),
    };

    ProductRow {
        title: item.name.clone().unwrap_or_default(),
        price: item
            .price
            .as_ref()
            .and_then(|p| p.value.as_ref())
            .map(render_scalar)
            .unwrap_or_default(),
        rating: item.rating.as_ref().map(render_scalar).unwrap_or_default(),
        image,
        product_link: format!("{BASE_SITE}/{}", item.url.as_deref().unwrap_or_default()),
        description: String::new(),
        search_query: query.to_string(),
        website: "Noon".to_string(),
    }
}

// The API is inconsistent about whether prices and ratings are numbers or
// strings; either way they end up as plain text in the row.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;

    #[test]
    fn full_record_maps_to_row() {
        let item = ApiProduct {
            name: Some("Dell XPS".to_string()),
            price: Some(Price {
                value: Some(Value::from(25000)),
            }),
            rating: Some(Value::from(4.5)),
            image_key: Some("img123".to_string()),
            url: Some("dell-xps/p/123".to_string()),
        };

        let row = to_row(&item, "laptop");
        assert_eq!(
            row,
            ProductRow {
                title: "Dell XPS".to_string(),
                price: "25000".to_string(),
                rating: "4.5".to_string(),
                image: "https://f.nooncdn.com/p/v1686225580/img123.jpg".to_string(),
                product_link: "https://www.noon.com/egypt-en/dell-xps/p/123".to_string(),
                description: String::new(),
                search_query: "laptop".to_string(),
                website: "Noon".to_string(),
            }
        );
    }

    #[test]
    fn missing_image_key_yields_empty_image() {
        let item = ApiProduct::default();
        assert_eq!(to_row(&item, "q").image, "");

        let item = ApiProduct {
            image_key: Some(String::new()),
            ..ApiProduct::default()
        };
        assert_eq!(to_row(&item, "q").image, "");
    }

    #[test]
    fn missing_price_value_yields_empty_price() {
        let item = ApiProduct {
            price: Some(Price { value: None }),
            ..ApiProduct::default()
        };
        assert_eq!(to_row(&item, "q").price, "");
        assert_eq!(to_row(&ApiProduct::default(), "q").price, "");
    }

    #[test]
    fn missing_url_links_to_site_root() {
        let row = to_row(&ApiProduct::default(), "q");
        assert_eq!(row.product_link, "https://www.noon.com/egypt-en/");
    }

    #[test]
    fn string_scalars_pass_through() {
        let item = ApiProduct {
            price: Some(Price {
                value: Some(Value::from("249.99")),
            }),
            rating: Some(Value::from("4.2")),
            ..ApiProduct::default()
        };
        let row = to_row(&item, "q");
        assert_eq!(row.price, "249.99");
        assert_eq!(row.rating, "4.2");
    }
}
