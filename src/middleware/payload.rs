use std::collections::HashMap;

use axum::{
    Json,
    extract::{FromRequest, Multipart, Request},
    http::header,
};

use crate::{
    dto::products::{ProductInput, ProductSubmission},
    error::AppError,
    media::ImagePayload,
    models::Category,
};

/// Decodes a product create/update body.
///
/// `application/json` bodies carry an image URL at most. `multipart/form-data`
/// bodies may carry the image as a file part named `image`; a text part with
/// the same name is read as a URL.
impl<S> FromRequest<S> for ProductSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            return read_multipart(multipart).await;
        }

        let Json(input) = Json::<ProductInput>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ProductSubmission::from(input))
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<ProductSubmission, AppError> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(err.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "image" {
            if let Some(file_name) = field.file_name().map(str::to_string) {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| AppError::BadRequest(err.body_text()))?;
                // Browsers send an empty file part when no file was picked.
                if !bytes.is_empty() {
                    upload = Some(ImagePayload {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
                continue;
            }
        }

        let text = field
            .text()
            .await
            .map_err(|err| AppError::BadRequest(err.body_text()))?;
        fields.insert(name, text);
    }

    let input = ProductInput {
        name: required(&fields, "name")?.to_string(),
        price: parse_number(&fields, "price")?,
        quantity: parse_number(&fields, "quantity")?,
        category: required(&fields, "category")?
            .parse::<Category>()
            .map_err(|_| AppError::BadRequest("unknown category".into()))?,
        sales: optional(&fields, "sales")
            .map(|_| parse_number(&fields, "sales"))
            .transpose()?
            .unwrap_or(0),
        provider: optional(&fields, "provider").unwrap_or_default().to_string(),
        image: optional(&fields, "image").map(str::to_string),
    };

    if !input.price.is_finite() {
        return Err(AppError::BadRequest("price must be a finite number".into()));
    }

    Ok(ProductSubmission { input, upload })
}

fn optional<'a>(fields: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    fields.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn required<'a>(fields: &'a HashMap<String, String>, key: &str) -> Result<&'a str, AppError> {
    optional(fields, key).ok_or_else(|| AppError::BadRequest(format!("missing field `{key}`")))
}

fn parse_number<T: std::str::FromStr>(
    fields: &HashMap<String, String>,
    key: &str,
) -> Result<T, AppError> {
    let raw = required(fields, key)?;
    raw.parse::<T>()
        .map_err(|_| AppError::BadRequest(format!("field `{key}` must be a number")))
}
