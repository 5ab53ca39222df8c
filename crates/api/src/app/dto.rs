//! Response envelopes and request query DTOs.
//!
//! Every response body is one of a small closed set of shapes: a list
//! envelope, a single-product envelope, an error envelope, a result envelope,
//! or (for create) the bare product.

use serde::{Deserialize, Serialize};

use skuvault_products::{Page, Product};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductsEnvelope {
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEnvelope {
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub result: String,
}

impl ResultEnvelope {
    pub fn success() -> Self {
        Self {
            result: "success".to_string(),
        }
    }
}

/// Raw `limit`/`offset` query values, kept as strings so that unparsable
/// values fall back to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListProductsQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListProductsQuery {
    /// Build from decoded query pairs. When a key repeats, the first value wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut query.limit,
                "offset" => &mut query.offset,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    pub fn page(&self) -> Page {
        Page::from_query(self.limit.as_deref(), self.offset.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skuvault_products::DEFAULT_LIMIT;

    #[test]
    fn result_envelope_shape() {
        let json = serde_json::to_value(ResultEnvelope::success()).unwrap();
        assert_eq!(json, serde_json::json!({ "result": "success" }));
    }

    #[test]
    fn empty_query_uses_default_page() {
        let page = ListProductsQuery::default().page();
        assert_eq!(page.limit(), DEFAULT_LIMIT);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn repeated_keys_keep_first_value() {
        let pairs = [("limit", "2"), ("offset", "1"), ("limit", "3"), ("sort", "x")]
            .map(|(k, v)| (k.to_string(), v.to_string()));
        let q = ListProductsQuery::from_pairs(pairs);
        assert_eq!(q.limit.as_deref(), Some("2"));
        assert_eq!(q.offset.as_deref(), Some("1"));
    }

    #[test]
    fn negative_limit_uses_default() {
        let q = ListProductsQuery {
            limit: Some("-3".to_string()),
            offset: Some("4".to_string()),
        };
        assert_eq!(q.page().limit(), DEFAULT_LIMIT);
        assert_eq!(q.page().offset(), 4);
    }
}
