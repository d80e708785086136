//! App Context

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::{
    database::{self, PgConnectOptions},
    domain::recipes::{PgRecipesRepository, RecipesRepository},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub recipes: Arc<dyn RecipesRepository>,
}

impl AppContext {
    /// Build application context from database connection options.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn connect(options: PgConnectOptions) -> Result<Self, AppInitError> {
        let pool = database::connect(options)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_pool(pool))
    }

    /// Build application context over an existing pool.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            recipes: Arc::new(PgRecipesRepository::new(pool)),
        }
    }
}
