//! cm-server HTTP Server
//!
//! Serves the Bitcoin, oil and water valuation models, the comparator and
//! the reference case study.

use cm_server::{config, router, AppState, ServerConfig};
use cm_valuation::tools;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment before reading any configuration
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();
    config::init_tracing(&config.log_filter);

    let tools = tools::registry();
    tracing::info!("Registered {} tools:", tools.len());
    for name in tools.names() {
        tracing::info!("  • {}", name);
    }

    if !config.cors_permissive {
        tracing::info!("CORS restricted to same-origin requests");
    }

    let app = router(AppState::new(tools), &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("cm-server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                  - Health check");
    tracing::info!("  GET  /api/tools               - Tool schemas");
    tracing::info!("  POST /api/tools/execute       - Execute a tool call");
    tracing::info!("  POST /api/valuation/bitcoin   - Bitcoin CM value and risk");
    tracing::info!("  POST /api/valuation/resource  - Oil/water CM value and sustainability");
    tracing::info!("  POST /api/compare             - Rank three results");
    tracing::info!("  GET  /api/case-study          - Reference scenario");

    axum::serve(listener, app).await?;

    Ok(())
}
