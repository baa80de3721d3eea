mod common;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Method, Request, StatusCode, header},
};
use axum_inventory_api::app::build_router;
use common::{FakeMediaHost, setup_state, test_config};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app(media: Arc<FakeMediaHost>) -> anyhow::Result<Router> {
    let state = setup_state(media).await?;
    build_router(state, &test_config())
}

async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, body))
}

fn json_request(method: Method, uri: &str, body: Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))?)
}

fn empty_request(method: Method, uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().method(method).uri(uri).body(Body::empty())?)
}

fn product_body(name: &str, category: &str, quantity: i64) -> Value {
    json!({
        "name": name,
        "price": 12.75,
        "quantity": quantity,
        "category": category,
        "sales": 2,
        "provider": "Ferreteria Central",
        "image": "https://img.example/p.png"
    })
}

#[tokio::test]
async fn create_returns_201_with_camel_case_record() -> anyhow::Result<()> {
    let app = app(Arc::new(FakeMediaHost::default())).await?;

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/products", product_body("Serrucho", "Herramienta", 6))?,
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_string());
    assert!(body["dateAdded"].is_string());
    assert_eq!(body["name"], "Serrucho");
    assert_eq!(body["price"], 12.75);
    assert_eq!(body["quantity"], 6);
    assert_eq!(body["category"], "herramienta");
    assert_eq!(body["sales"], 2);
    Ok(())
}

#[tokio::test]
async fn list_applies_query_filters() -> anyhow::Result<()> {
    let app = app(Arc::new(FakeMediaHost::default())).await?;
    for (name, category, quantity) in [
        ("Tubo", "plomeria", 20),
        ("Codo", "plomeria", 2),
        ("Foco", "bombillos", 40),
    ] {
        let (status, _) = send(
            &app,
            json_request(Method::POST, "/api/products", product_body(name, category, quantity))?,
        )
        .await?;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, empty_request(Method::GET, "/api/products")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(3));

    let (_, body) = send(
        &app,
        empty_request(Method::GET, "/api/products?category=plomeria&stock=20")?,
    )
    .await?;
    let items = body.as_array().cloned().unwrap_or_default();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Tubo");

    let (status, body) = send(
        &app,
        empty_request(Method::GET, "/api/products?category=ropa")?,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, empty_request(Method::GET, "/api/products?stock=lots")?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn update_and_delete_report_missing_records() -> anyhow::Result<()> {
    let app = app(Arc::new(FakeMediaHost::default())).await?;
    let missing = "/api/products/7a1d0c7e-4c1b-4d5e-9d7f-3f2a1b0c9d8e";

    let (status, body) = send(
        &app,
        json_request(Method::PUT, missing, product_body("X", "hogar", 1))?,
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");

    let (status, _) = send(&app, empty_request(Method::DELETE, missing)?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_id_gets_json_error() -> anyhow::Result<()> {
    let app = app(Arc::new(FakeMediaHost::default())).await?;

    let (status, body) = send(&app, empty_request(Method::DELETE, "/api/products/abc")?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|msg| msg.contains("abc")));

    let (status, body) = send(&app, empty_request(Method::GET, "/api/products/abc")?).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(
        &app,
        json_request(Method::PUT, "/api/products/abc", product_body("X", "hogar", 1))?,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn cors_allows_only_the_configured_origin() -> anyhow::Result<()> {
    let app = app(Arc::new(FakeMediaHost::default())).await?;

    for origin in ["http://localhost:3000", "http://evil.example"] {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/products")
            .header(header::ORIGIN, origin)
            .body(Body::empty())?;
        let response = app.clone().oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:3000")),
            "origin {origin}"
        );

        let preflight = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/products")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())?;
        let response = app.clone().oneshot(preflight).await?;
        let allowed = response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN);
        assert_eq!(
            allowed,
            Some(&HeaderValue::from_static("http://localhost:3000")),
            "preflight origin {origin}"
        );
        assert_ne!(allowed, Some(&HeaderValue::from_static("http://evil.example")));
    }
    Ok(())
}

#[tokio::test]
async fn update_then_delete_round_trip() -> anyhow::Result<()> {
    let app = app(Arc::new(FakeMediaHost::default())).await?;
    let (_, created) = send(
        &app,
        json_request(Method::POST, "/api/products", product_body("Olla", "hogar", 3))?,
    )
    .await?;
    let id = created["id"].as_str().unwrap_or_default().to_string();
    let uri = format!("/api/products/{id}");

    let (status, fetched) = send(&app, empty_request(Method::GET, &uri)?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        json_request(Method::PUT, &uri, product_body("Olla grande", "hogar", 8))?,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["dateAdded"], created["dateAdded"]);
    assert_eq!(updated["name"], "Olla grande");
    assert_eq!(updated["quantity"], 8);

    let (status, deleted) = send(&app, empty_request(Method::DELETE, &uri)?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["name"], "Olla grande");

    let (status, _) = send(&app, empty_request(Method::DELETE, &uri)?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn invalid_body_is_rejected_with_400() -> anyhow::Result<()> {
    let app = app(Arc::new(FakeMediaHost::default())).await?;

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/products", product_body("Roto", "hogar", -1))?,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send(
        &app,
        json_request(Method::POST, "/api/products", json!({ "name": "Sin precio" }))?,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        json_request(Method::POST, "/api/products", product_body("Raro", "juguetes", 1))?,
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

fn multipart_request(uri: &str, fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> anyhow::Result<Request<Body>> {
    let boundary = "inventory-test-boundary";
    let mut body: Vec<u8> = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    Ok(Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))?)
}

const FORM_FIELDS: &[(&str, &str)] = &[
    ("name", "Bombillo LED"),
    ("price", "2.5"),
    ("quantity", "30"),
    ("category", "bombillos"),
    ("sales", "4"),
    ("provider", "Luz Andina"),
];

#[tokio::test]
async fn multipart_create_uploads_image() -> anyhow::Result<()> {
    let media = Arc::new(FakeMediaHost::default());
    let app = app(media.clone()).await?;

    let (status, body) = send(
        &app,
        multipart_request("/api/products", FORM_FIELDS, Some(("led.png", &b"\x89PNG"[..])))?,
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["image"], "https://media.test/led.png");
    assert_eq!(body["price"], 2.5);
    assert_eq!(body["quantity"], 30);
    assert_eq!(media.upload_count(), 1);
    Ok(())
}

#[tokio::test]
async fn failed_upload_returns_500_and_stores_nothing() -> anyhow::Result<()> {
    let app = app(Arc::new(FakeMediaHost::failing())).await?;

    let (status, body) = send(
        &app,
        multipart_request("/api/products", FORM_FIELDS, Some(("led.png", &b"\x89PNG"[..])))?,
    )
    .await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Image upload failed");

    let (_, listed) = send(&app, empty_request(Method::GET, "/api/products")?).await?;
    assert_eq!(listed, json!([]));
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_404() -> anyhow::Result<()> {
    let app = app(Arc::new(FakeMediaHost::default())).await?;
    let (status, body) = send(&app, empty_request(Method::GET, "/nope")?).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["path"], "/nope");
    Ok(())
}
