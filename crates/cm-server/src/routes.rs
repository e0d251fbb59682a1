//! Router

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::handlers::{
    case_study, compare_assets, evaluate_bitcoin, evaluate_resource, execute_tool,
    health_check, list_tools, request_id,
};
use crate::state::AppState;

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let cors = if config.cors_permissive {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        .route("/api/tools", get(list_tools))
        .route("/api/tools/execute", post(execute_tool))
        
        // Valuation API
        .route("/api/valuation/bitcoin", post(evaluate_bitcoin))
        .route("/api/valuation/resource", post(evaluate_resource))
        .route("/api/compare", post(compare_assets))
        .route("/api/case-study", get(case_study))
        
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id))
        .with_state(state)
}
