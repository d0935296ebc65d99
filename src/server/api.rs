//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::client::CompletionClient;
use crate::core::languages;
use crate::core::models::TranslationRequest;

/// Application state
#[derive(Clone)]
pub struct AppState {
    client: Arc<CompletionClient>,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Language catalog response
#[derive(Serialize)]
struct LanguagesResponse {
    languages: Vec<LanguageInfo>,
}

#[derive(Serialize)]
struct LanguageInfo {
    label: String,
    code: String,
}

/// Translation request payload
#[derive(Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: Option<String>,
    pub target_lang: String,
}

/// Successful translation response
#[derive(Serialize)]
pub struct TranslateResponse {
    pub translation: String,
    pub model: String,
    pub created: i64,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

fn error_response(
    status: StatusCode,
    message: String,
    code: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: ErrorDetail {
                message,
                code: Some(code.to_string()),
            },
        }),
    )
}

/// Health check handler
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "gemini-translator".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Language catalog handler
async fn get_languages() -> Json<LanguagesResponse> {
    let languages = languages::entries()
        .iter()
        .map(|(label, code)| LanguageInfo {
            label: label.to_string(),
            code: code.to_string(),
        })
        .collect();

    Json(LanguagesResponse { languages })
}

/// Translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let source_label = payload
        .source_lang
        .unwrap_or_else(|| languages::AUTO.to_string());

    let source = match languages::resolve(&source_label) {
        Some(lang) => lang,
        None => {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                format!("Unsupported source language: {}", source_label),
                "unknown_language",
            ));
        }
    };

    let target = match languages::resolve(&payload.target_lang) {
        Some(lang) => lang,
        None => {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                format!("Unsupported target language: {}", payload.target_lang),
                "unknown_language",
            ));
        }
    };

    let request =
        TranslationRequest::new(payload.text, target.to_string()).with_source_lang(source);

    match state.client.translate(&request).await {
        Ok(result) => Ok(Json(TranslateResponse {
            translation: result.text,
            model: result.model_used,
            created: chrono::Utc::now().timestamp(),
        })),
        Err(e) => {
            warn!("Translation failed: {}", e);
            let status = if e.is_warning() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::BAD_GATEWAY
            };
            Err(error_response(status, e.to_string(), e.code()))
        }
    }
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16) -> anyhow::Result<()> {
    // Create completion client
    let client = Arc::new(CompletionClient::from_env()?);

    // Create app state
    let state = Arc::new(AppState { client });

    // Create router
    let app = Router::new()
        .route("/", get(health_check))
        .route("/languages", get(get_languages))
        .route("/translate", post(translate))
        .with_state(state);

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
