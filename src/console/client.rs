use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{
    Response, StatusCode,
    multipart::{Form, Part},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    console::error::{ConsoleError, ConsoleResult},
    dto::products::ProductInput,
    media::ImagePayload,
    models::{Category, Product},
};

/// Server-side listing filters, sent as query parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilters {
    pub category: Option<Category>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub min_stock: Option<i32>,
}

impl ListFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if self.date_from.is_some() || self.date_to.is_some() {
            let fmt = |d: Option<DateTime<Utc>>| {
                d.map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true))
                    .unwrap_or_default()
            };
            pairs.push(("dateAdded", format!("{},{}", fmt(self.date_from), fmt(self.date_to))));
        }
        if let Some(stock) = self.min_stock {
            pairs.push(("stock", stock.to_string()));
        }
        pairs
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the product endpoints.
#[derive(Debug, Clone)]
pub struct ProductClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ConsoleResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    fn product_url(&self, id: Uuid) -> String {
        format!("{}/api/products/{id}", self.base_url)
    }

    pub async fn list(&self, filters: &ListFilters) -> ConsoleResult<Vec<Product>> {
        let response = self
            .http
            .get(self.products_url())
            .query(&filters.query_pairs())
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create(
        &self,
        input: &ProductInput,
        image: Option<ImagePayload>,
    ) -> ConsoleResult<Product> {
        let request = self.http.post(self.products_url());
        let request = match image {
            Some(image) => request.multipart(multipart_form(input, image)?),
            None => request.json(input),
        };
        decode(request.send().await?).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: &ProductInput,
        image: Option<ImagePayload>,
    ) -> ConsoleResult<Product> {
        let request = self.http.put(self.product_url(id));
        let request = match image {
            Some(image) => request.multipart(multipart_form(input, image)?),
            None => request.json(input),
        };
        decode(request.send().await?).await
    }

    pub async fn delete(&self, id: Uuid) -> ConsoleResult<Product> {
        let response = self.http.delete(self.product_url(id)).send().await?;
        decode(response).await
    }
}

fn multipart_form(input: &ProductInput, image: ImagePayload) -> ConsoleResult<Form> {
    let mut part = Part::bytes(image.bytes).file_name(image.file_name);
    if let Some(content_type) = image.content_type.as_deref() {
        part = part.mime_str(content_type)?;
    }
    Ok(Form::new()
        .text("name", input.name.clone())
        .text("price", input.price.to_string())
        .text("quantity", input.quantity.to_string())
        .text("category", input.category.to_string())
        .text("sales", input.sales.to_string())
        .text("provider", input.provider.clone())
        .part("image", part))
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> ConsoleResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ConsoleError::NotFound);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("unexpected response").to_string(),
    };
    Err(ConsoleError::Service {
        status: status.as_u16(),
        message,
    })
}
