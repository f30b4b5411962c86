//! Application state - shared across all handlers.

use std::sync::Arc;

use journal_core::ports::{PostRepository, UserRepository};
use journal_infra::database::DatabaseConfig;
use journal_infra::{InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "postgres")]
use journal_infra::database::DatabaseConnections;
#[cfg(feature = "postgres")]
use journal_infra::{PostgresPostRepository, PostgresUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        if let Some(config) = db_config {
            match DatabaseConnections::init(config).await {
                Ok(connections) => {
                    tracing::info!("Application state initialized (postgres)");
                    let pool = Arc::new(connections.main);
                    return Self {
                        users: Arc::new(PostgresUserRepository::new(pool.clone())),
                        posts: Arc::new(PostgresPostRepository::new(pool)),
                    };
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        #[cfg(not(feature = "postgres"))]
        {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
        }

        tracing::info!("Application state initialized (in-memory)");
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
        }
    }
}
