use crate::error::ExtractError;
use crate::model::RecipeResult;
use crate::platform::classify;
use crate::render::render_html;
use crate::RecipePipeline;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::error;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<RecipePipeline>,
}

impl AppState {
    pub fn new(pipeline: RecipePipeline) -> Self {
        AppState {
            pipeline: Arc::new(pipeline),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    #[serde(default)]
    pub source_url: Option<String>,
    /// When true, the response additionally carries a rendered HTML fragment
    #[serde(default)]
    pub render_html: bool,
}

#[derive(Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub source: &'static str,
    pub processing_time: f64,
    pub data: RecipeResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/extract", post(extract))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// POST /api/extract — run one URL through the pipeline and wrap the
/// result in the response envelope.
async fn extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, (StatusCode, Json<ErrorResponse>)> {
    let url = match request.source_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => return Err(error_response(&ExtractError::MissingUrl)),
    };

    let started = Instant::now();
    let result = state.pipeline.run(url).await.map_err(|e| {
        error!("Extraction from {} failed: {}", url, e);
        error_response(&e)
    })?;

    let html = request.render_html.then(|| render_html(&result));

    Ok(Json(ExtractResponse {
        success: true,
        source: classify(url).tag(),
        processing_time: (started.elapsed().as_secs_f64() * 100.0).round() / 100.0,
        data: result,
        html,
    }))
}

fn error_response(err: &ExtractError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: err.to_string(),
        }),
    )
}
