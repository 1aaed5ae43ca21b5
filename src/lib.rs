pub mod config;
pub mod models;
pub mod schema;
pub mod signaling;
pub mod turn;
pub mod utils;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use diesel::{PgConnection, r2d2::ConnectionManager};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use r2d2::Pool;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{Config, TurnSettings};
use crate::models::Storage;
use crate::signaling::SignalStore;
pub use utils::Error;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Shared handler state: the signaling store plus the credential settings.
/// Built once from `Config` at startup, no module-level globals.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SignalStore>,
    pub turn: TurnSettings,
}

/// Assemble the route set over an already-built state. Split out from
/// `create_router` so tests can swap in their own store.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(crate::turn::router())
        .merge(crate::signaling::web::router())
        .with_state(state)
}

/// Build the ready-to-serve router from validated configuration: connect the
/// pool, run pending migrations, then wire routes, CORS, and request tracing.
/// Any failure here must keep the process from serving traffic.
pub fn create_router(config: &Config) -> Result<Router, Error> {
    let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
    let pool = Pool::builder().build(manager)?;

    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Migration(e.to_string()))?;
    drop(conn);
    tracing::info!("Migrations completed successfully");

    let state = AppState {
        store: Arc::new(Storage::new(pool)),
        turn: config.turn.clone(),
    };

    let app = app(state)
        .layer(cors_layer(&config.allowed_origins)?)
        .layer(TraceLayer::new_for_http());
    Ok(app)
}

// Credentialed CORS cannot use wildcards, so methods and headers mirror the
// request instead; the origin list comes from configuration.
fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, Error> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| Error::Config(format!("invalid origin in ALLOWED_ORIGINS: {:?}", origin)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
