//! HTTP Handlers

use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use cm_toolkit::{ToolCall, ToolResult, ToolSchema, ToolkitError};
use cm_valuation::{
    BitcoinBreakdown, BitcoinInputs, BitcoinValuation, CaseStudy, CaseStudyOutcome,
    ComparisonReport, ResourceBreakdown, ResourceInputs, ResourceValuation, RiskBand,
    SustainabilityBand, ValuationError, ValuationResult, Verdict,
};

use crate::state::AppState;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub tools: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug, Serialize)]
pub struct BitcoinResponse {
    pub result: ValuationResult,
    pub breakdown: BitcoinBreakdown,
    pub band: RiskBand,
}

#[derive(Debug, Serialize)]
pub struct ResourceResponse {
    pub result: ValuationResult,
    pub breakdown: ResourceBreakdown,
    pub band: SustainabilityBand,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub bitcoin: ValuationResult,
    pub oil: ValuationResult,
    pub water: ValuationResult,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub report: ComparisonReport,
    pub verdict: Verdict,
    pub conclusion: String,
}

fn domain_error(err: &ValuationError) -> ApiError {
    tracing::warn!(error = %err, "rejected valuation input");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: err.to_string(),
            code: "DOMAIN_ERROR".into(),
        }),
    )
}

fn toolkit_error(err: &ToolkitError) -> ApiError {
    let status = match err {
        ToolkitError::ToolNotFound(_) => StatusCode::NOT_FOUND,
        ToolkitError::ToolValidation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::warn!(error = %err, "tool call failed");
    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: err.code().into(),
        }),
    )
}

// ============================================================================
// Middleware
// ============================================================================

/// Tag each request with a fresh UUID, both in the log span and the response
pub async fn request_id(req: Request, next: Next) -> Response {
    let id = uuid::Uuid::new_v4().to_string();
    let span = tracing::info_span!(
        "request",
        request_id = %id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let mut response = next.run(req).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        tools: state.tools.len(),
    })
}

/// Schemas of every registered tool
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolSchema>> {
    Json(state.tools.schemas())
}

/// Execute a tool call by name
pub async fn execute_tool(
    State(state): State<AppState>,
    Json(call): Json<ToolCall>,
) -> Result<Json<ToolResult>, ApiError> {
    state
        .tools
        .execute(&call)
        .await
        .map(Json)
        .map_err(|e| toolkit_error(&e))
}

/// Evaluate the Bitcoin model
pub async fn evaluate_bitcoin(
    Json(inputs): Json<BitcoinInputs>,
) -> Result<Json<BitcoinResponse>, ApiError> {
    let breakdown = BitcoinValuation::breakdown(&inputs).map_err(|e| domain_error(&e))?;

    Ok(Json(BitcoinResponse {
        result: breakdown.result(),
        band: RiskBand::from_risk(breakdown.risk),
        breakdown,
    }))
}

/// Evaluate the oil/water model
pub async fn evaluate_resource(
    Json(inputs): Json<ResourceInputs>,
) -> Result<Json<ResourceResponse>, ApiError> {
    let breakdown = ResourceValuation::breakdown(&inputs).map_err(|e| domain_error(&e))?;

    Ok(Json(ResourceResponse {
        result: breakdown.result(),
        band: SustainabilityBand::from_score(breakdown.sustainability),
        breakdown,
    }))
}

/// Rank three previously computed results
pub async fn compare_assets(
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    let report = cm_valuation::compare(request.bitcoin, request.oil, request.water)
        .map_err(|e| domain_error(&e))?;
    let verdict = report.verdict();

    Ok(Json(CompareResponse {
        report,
        verdict,
        conclusion: verdict.to_string(),
    }))
}

/// Run the reference scenario
pub async fn case_study() -> Result<Json<CaseStudyOutcome>, ApiError> {
    CaseStudy::reference()
        .run()
        .map(Json)
        .map_err(|e| domain_error(&e))
}
