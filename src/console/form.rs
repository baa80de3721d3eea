use crate::{
    console::error::{ConsoleError, ConsoleResult},
    dto::products::ProductInput,
    media::ImagePayload,
    models::{Category, Product},
};

pub const REQUIRED_FIELDS_MESSAGE: &str = "price, quantity and category are required";

/// Image attached to a draft.
#[derive(Debug, Clone, Default)]
pub enum DraftImage {
    #[default]
    None,
    /// Already hosted; sent back unchanged.
    Url(String),
    /// Newly picked file; replaces the hosted image on submit.
    File(ImagePayload),
}

/// Editable form state. Numeric fields hold raw text as typed.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub sales: String,
    pub provider: String,
    pub category: String,
    pub image: DraftImage,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            quantity: String::new(),
            sales: "0".to_string(),
            provider: String::new(),
            category: String::new(),
            image: DraftImage::None,
        }
    }
}

impl ProductDraft {
    /// Pre-fill from an existing record for the edit dialog.
    pub fn from_product(product: &Product) -> Self {
        let image = if product.image.is_empty() {
            DraftImage::None
        } else {
            DraftImage::Url(product.image.clone())
        };
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            sales: product.sales.to_string(),
            provider: product.provider.clone(),
            category: product.category.to_string(),
            image,
        }
    }

    pub fn attach_file(&mut self, file: ImagePayload) {
        self.image = DraftImage::File(file);
    }

    /// Gate for the create form: price and quantity must be positive and a
    /// category chosen.
    pub fn validate_for_create(&self) -> ConsoleResult<()> {
        let price = parse_f64(&self.price).unwrap_or(0.0);
        let quantity = parse_i32(&self.quantity).unwrap_or(0);
        if price <= 0.0 || quantity <= 0 || self.category.trim().is_empty() {
            return Err(ConsoleError::ValidationFailed(REQUIRED_FIELDS_MESSAGE.to_string()));
        }
        Ok(())
    }

    /// Full field set plus the picked file, if any.
    pub fn to_submission(&self) -> ConsoleResult<(ProductInput, Option<ImagePayload>)> {
        let price = parse_f64(&self.price)
            .ok_or_else(|| ConsoleError::ValidationFailed("price must be a number".into()))?;
        let quantity = parse_i32(&self.quantity)
            .ok_or_else(|| ConsoleError::ValidationFailed("quantity must be a whole number".into()))?;
        let sales = if self.sales.trim().is_empty() {
            0
        } else {
            parse_i32(&self.sales)
                .ok_or_else(|| ConsoleError::ValidationFailed("sales must be a whole number".into()))?
        };
        let category = self
            .category
            .trim()
            .parse::<Category>()
            .map_err(|_| ConsoleError::ValidationFailed(format!("unknown category `{}`", self.category)))?;

        let (image, file) = match &self.image {
            DraftImage::None => (None, None),
            DraftImage::Url(url) => (Some(url.clone()), None),
            DraftImage::File(file) => (None, Some(file.clone())),
        };

        let input = ProductInput {
            name: self.name.trim().to_string(),
            price,
            quantity,
            category,
            sales,
            provider: self.provider.trim().to_string(),
            image,
        };
        Ok((input, file))
    }
}

fn parse_f64(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_i32(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}
