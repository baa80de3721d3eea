use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    media::{self, MediaHost},
};

/// Process-wide context shared by every request handler.
///
/// Built once by [`AppState::init`] before the listener is bound and torn
/// down with [`AppState::shutdown`] after the server stops accepting requests.
#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub media: Arc<dyn MediaHost>,
}

impl AppState {
    pub fn new(orm: DatabaseConnection, media: Arc<dyn MediaHost>) -> Self {
        Self { orm, media }
    }

    /// Connect to the product store, ensure its schema and build the media client.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let orm = create_orm_conn(&config.database_url, config.database_max_connections).await?;
        run_migrations(&orm).await?;
        let media = media::from_config(
            &config.media,
            Duration::from_secs(config.request_timeout_secs),
        )?;
        tracing::info!("application state initialised");
        Ok(Self::new(orm, media))
    }

    pub async fn shutdown(self) -> anyhow::Result<()> {
        self.orm.close().await?;
        tracing::info!("product store connection closed");
        Ok(())
    }
}
