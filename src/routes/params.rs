use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw listing query. Values stay as strings so empty parameters can be
/// treated as absent before they are parsed into a [`crate::filter::ProductFilter`].
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub category: Option<String>,
    /// `start,end`; either side may be empty.
    pub date_added: Option<String>,
    /// Minimum quantity on hand, inclusive.
    pub stock: Option<String>,
}
