use chrono::Utc;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryFilter, Set};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::products::ProductSubmission,
    entity::products::{ActiveModel, Entity as Products},
    error::{AppError, AppResult},
    filter::ProductFilter,
    media::ImagePayload,
    models::Product,
    routes::params::ProductQuery,
    state::AppState,
};

pub async fn list_products(state: &AppState, query: ProductQuery) -> AppResult<Vec<Product>> {
    let filter = ProductFilter::from_query(&query)?;
    tracing::debug!(?filter, "listing products");

    let items = Products::find()
        .filter(filter.condition())
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    Ok(items)
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<Product> {
    Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(Product::from)
        .ok_or(AppError::NotFound)
}

pub async fn create_product(state: &AppState, submission: ProductSubmission) -> AppResult<Product> {
    let ProductSubmission { input, upload } = submission;
    input.validate()?;

    // Upload before insert so a failed upload leaves nothing behind.
    let image = resolve_image(state, upload, input.image).await?;

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        price: Set(input.price),
        quantity: Set(input.quantity),
        category: Set(input.category),
        sales: Set(input.sales),
        provider: Set(input.provider),
        image: Set(image.unwrap_or_default()),
        date_added: Set(Utc::now()),
    };
    let product = active.insert(&state.orm).await?;
    tracing::info!(product_id = %product.id, "product created");

    Ok(Product::from(product))
}

pub async fn update_product(
    state: &AppState,
    id: Uuid,
    submission: ProductSubmission,
) -> AppResult<Product> {
    let ProductSubmission { input, upload } = submission;
    input.validate()?;

    let existing = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let image = resolve_image(state, upload, input.image).await?;

    let mut active: ActiveModel = existing.into();
    active.name = Set(input.name);
    active.price = Set(input.price);
    active.quantity = Set(input.quantity);
    active.category = Set(input.category);
    active.sales = Set(input.sales);
    active.provider = Set(input.provider);
    if let Some(image) = image {
        active.image = Set(image);
    }

    let product = match active.update(&state.orm).await {
        Ok(product) => product,
        // Deleted between the lookup and the write.
        Err(DbErr::RecordNotUpdated) => return Err(AppError::NotFound),
        Err(err) => return Err(err.into()),
    };
    tracing::info!(product_id = %product.id, "product updated");

    Ok(Product::from(product))
}

pub async fn delete_product(state: &AppState, id: Uuid) -> AppResult<Product> {
    let existing = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let result = Products::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(product_id = %id, "product deleted");

    Ok(Product::from(existing))
}

/// A raw payload wins over a URL; it is uploaded and replaced by the hosted URL.
async fn resolve_image(
    state: &AppState,
    upload: Option<ImagePayload>,
    url: Option<String>,
) -> AppResult<Option<String>> {
    match upload {
        Some(payload) => {
            let url = state.media.upload(payload).await?;
            tracing::debug!(%url, "image uploaded");
            Ok(Some(url))
        }
        None => Ok(url),
    }
}
