use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::products::ProductSubmission,
    error::AppResult,
    middleware::product_id::ProductId,
    models::Product,
    routes::params::ProductQuery,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("category" = Option<String>, Query, description = "Exact category match"),
        ("dateAdded" = Option<String>, Query, description = "`start,end`; when both are given only `end` applies"),
        ("stock" = Option<i32>, Query, description = "Minimum quantity on hand, inclusive"),
    ),
    responses(
        (status = 200, description = "List products", body = Vec<Product>),
        (status = 400, description = "Malformed filter", body = crate::error::ErrorData),
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let items = product_service::list_products(&state, query).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 400, description = "Malformed product id", body = crate::error::ErrorData),
        (status = 404, description = "Product not found", body = crate::error::ErrorData),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<Product>> {
    let product = product_service::get_product(&state, id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body(
        content = crate::dto::products::ProductInput,
        description = "JSON body, or multipart/form-data with an `image` file part"
    ),
    responses(
        (status = 201, description = "Create product", body = Product),
        (status = 400, description = "Invalid input", body = crate::error::ErrorData),
        (status = 500, description = "Upload or store failure", body = crate::error::ErrorData),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    submission: ProductSubmission,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = product_service::create_product(&state, submission).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body(
        content = crate::dto::products::ProductInput,
        description = "Full field set; JSON or multipart/form-data"
    ),
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Malformed product id", body = crate::error::ErrorData),
        (status = 404, description = "Product not found", body = crate::error::ErrorData),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    submission: ProductSubmission,
) -> AppResult<Json<Product>> {
    let product = product_service::update_product(&state, id, submission).await?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted product", body = Product),
        (status = 400, description = "Malformed product id", body = crate::error::ErrorData),
        (status = 404, description = "Product not found", body = crate::error::ErrorData),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<Product>> {
    let product = product_service::delete_product(&state, id).await?;
    Ok(Json(product))
}
