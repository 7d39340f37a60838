mod handlers;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::assistant::KnowledgeBase;
use crate::config::ServerConfig;
use crate::optimizer::OptimizerConfig;

/// Shared, read-only state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub knowledge: KnowledgeBase,
    pub optimizer: OptimizerConfig,
}

impl From<&ServerConfig> for AppState {
    fn from(config: &ServerConfig) -> Self {
        Self {
            knowledge: KnowledgeBase::default(),
            optimizer: config.optimizer,
        }
    }
}

pub fn create_router(config: &ServerConfig) -> Router {
    let api = Router::new()
        // Page selector
        .route("/pages", get(handlers::list_pages))
        // Knowledge assistant
        .route("/assistant/ask", post(handlers::ask))
        // Habitat optimizer
        .route("/optimizer/recommend", post(handlers::recommend))
        // Rocket visualizer
        .route("/visualizer/geometry", post(handlers::rocket_geometry))
        .route("/visualizer/figure", post(handlers::rocket_figure))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.cors_origins.as_deref()))
        .with_state(AppState::from(config))
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::permissive();
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
