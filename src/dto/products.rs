use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{media::ImagePayload, models::Category};

/// Field set accepted by create and update.
///
/// Update is a full replacement, so both operations share one schema. `image`
/// is an already-hosted URL; a raw file travels separately in
/// [`ProductSubmission::upload`]. An absent `image` on update keeps the stored one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub quantity: i32,
    pub category: Category,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub sales: i32,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2048))]
    pub image: Option<String>,
}

/// A decoded create/update request: the fields plus an optional raw image.
#[derive(Debug, Clone)]
pub struct ProductSubmission {
    pub input: ProductInput,
    pub upload: Option<ImagePayload>,
}

impl From<ProductInput> for ProductSubmission {
    fn from(input: ProductInput) -> Self {
        Self {
            input,
            upload: None,
        }
    }
}
