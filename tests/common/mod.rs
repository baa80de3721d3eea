#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_inventory_api::{
    config::{AppConfig, MediaConfig},
    db::{create_orm_conn, run_migrations},
    dto::products::ProductInput,
    entity::products::ActiveModel as ProductActive,
    media::{ImagePayload, MediaError, MediaHost},
    models::Category,
    state::AppState,
};
use chrono::{TimeZone, Utc};
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

/// In-process stand-in for the image host.
#[derive(Default)]
pub struct FakeMediaHost {
    pub fail: bool,
    pub uploads: Mutex<Vec<String>>,
}

impl FakeMediaHost {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().map(|u| u.len()).unwrap_or(0)
    }
}

#[async_trait]
impl MediaHost for FakeMediaHost {
    async fn upload(&self, image: ImagePayload) -> Result<String, MediaError> {
        if self.fail {
            return Err(MediaError::MissingUrl);
        }
        let url = format!("https://media.test/{}", image.file_name);
        self.uploads.lock().expect("uploads lock").push(url.clone());
        Ok(url)
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".into(),
        database_max_connections: 1,
        host: "127.0.0.1".into(),
        port: 0,
        cors_allowed_origin: "http://localhost:3000".into(),
        request_timeout_secs: 10,
        media: MediaConfig::default(),
    }
}

pub async fn setup_state(media: Arc<FakeMediaHost>) -> anyhow::Result<AppState> {
    // A single connection keeps every query on the same in-memory database.
    let orm = create_orm_conn("sqlite::memory:", 1).await?;
    run_migrations(&orm).await?;
    Ok(AppState::new(orm, media))
}

pub fn input(name: &str, category: Category, quantity: i32) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        price: 10.5,
        quantity,
        category,
        sales: 3,
        provider: "Ferreteria Central".to_string(),
        image: Some("https://img.example/item.png".to_string()),
    }
}

/// Insert a product with a fixed `dateAdded` (noon UTC on the given day).
pub async fn insert_dated(
    state: &AppState,
    name: &str,
    category: Category,
    quantity: i32,
    (y, m, d): (i32, u32, u32),
) -> anyhow::Result<Uuid> {
    let id = Uuid::new_v4();
    ProductActive {
        id: Set(id),
        name: Set(name.to_string()),
        price: Set(4.0),
        quantity: Set(quantity),
        category: Set(category),
        sales: Set(0),
        provider: Set("Proveedor".to_string()),
        image: Set(String::new()),
        date_added: Set(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()),
    }
    .insert(&state.orm)
    .await?;
    Ok(id)
}
