//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::client::translate_text_via;
use crate::core::errors::{Result, TranslationError};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Credentials file, re-read on every request
    pub env_file: PathBuf,
    /// Translator host
    pub endpoint: String,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Translation request
#[derive(Deserialize)]
pub struct TranslateRequest {
    /// Urdu text to translate
    pub text: String,
}

/// Translation response
#[derive(Serialize)]
pub struct TranslateResponse {
    /// English translation, or the fallback string
    pub translation: String,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Human-readable failure description
    pub error: String,
}

type ApiError = (StatusCode, axum::Json<ErrorResponse>);

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        axum::Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Health check handler
async fn health_check() -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslateRequest>,
) -> std::result::Result<axum::Json<TranslateResponse>, ApiError> {
    if payload.text.trim().is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "text cannot be empty"));
    }

    match translate_text_via(&state.env_file, &state.endpoint, &payload.text).await {
        Ok(translation) => Ok(axum::Json(TranslateResponse { translation })),
        Err(e @ TranslationError::ConfigError { .. }) => {
            warn!("Translator is not configured: {}", e);
            Err(error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
        Err(e) => {
            warn!("Translation failed: {}", e);
            Err(error(StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}

/// Build the router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/api/translate", post(translate))
        .with_state(Arc::new(state))
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16, state: AppState) -> Result<()> {
    let app = router(state);

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| {
            TranslationError::config(format!("Invalid bind address {}:{}: {}", host, port, e))
        })?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TRANSLATED: &str = r#"[{"translations":[{"text":"hello"}]}]"#;

    async fn spawn_remote() -> String {
        let app = Router::new().route(
            "/translate",
            post(|| async {
                (
                    [(axum::http::header::CONTENT_TYPE, "application/json")],
                    TRANSLATED,
                )
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn closed_endpoint() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    fn configured_env_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "TRANSLATOR_API_KEY=abc123").unwrap();
        file
    }

    async fn post_text(base: &str, text: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/translate", base))
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .unwrap()
    }

    async fn spawn_app(state: AppState) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn state_with(env_file: PathBuf) -> AppState {
        AppState {
            env_file,
            endpoint: "http://127.0.0.1:9".to_string(),
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let base = spawn_app(state_with(PathBuf::from(".env.local"))).await;

        let json: serde_json::Value = reqwest::get(&base).await.unwrap().json().await.unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "urdu-translator");
    }

    #[tokio::test]
    async fn test_translate_empty_text() {
        let base = spawn_app(state_with(PathBuf::from(".env.local"))).await;

        let response = reqwest::Client::new()
            .post(format!("{}/api/translate", base))
            .json(&serde_json::json!({"text": "  "}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400);
    }

    #[tokio::test]
    async fn test_translate_unconfigured() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "TRANSLATOR_API_KEY=your_actual_api_key_here").unwrap();
        let base = spawn_app(state_with(file.path().to_path_buf())).await;

        let response = reqwest::Client::new()
            .post(format!("{}/api/translate", base))
            .json(&serde_json::json!({"text": "ہیلو"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 500);

        let json: serde_json::Value = response.json().await.unwrap();
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("Configuration error"));
    }

    #[tokio::test]
    async fn test_translate_success() {
        let file = configured_env_file();
        let base = spawn_app(AppState {
            env_file: file.path().to_path_buf(),
            endpoint: spawn_remote().await,
        })
        .await;

        let response = post_text(&base, "ہیلو").await;
        assert_eq!(response.status().as_u16(), 200);

        let json: serde_json::Value = response.json().await.unwrap();
        assert_eq!(json, serde_json::json!({"translation": "hello"}));
    }

    #[tokio::test]
    async fn test_translate_remote_unreachable() {
        let file = configured_env_file();
        let base = spawn_app(AppState {
            env_file: file.path().to_path_buf(),
            endpoint: closed_endpoint(),
        })
        .await;

        let response = post_text(&base, "ہیلو").await;
        assert_eq!(response.status().as_u16(), 502);

        let json: serde_json::Value = response.json().await.unwrap();
        assert!(json["error"].as_str().unwrap().starts_with("Network error"));
    }

    #[tokio::test]
    async fn test_run_server_invalid_host() {
        let state = state_with(PathBuf::from(".env.local"));
        let err = run_server("not a host".to_string(), 0, state).await.unwrap_err();
        assert!(err.is_config());
    }

    #[tokio::test]
    async fn test_run_server_port_in_use() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let state = state_with(PathBuf::from(".env.local"));
        let err = run_server("127.0.0.1".to_string(), port, state).await.unwrap_err();
        assert!(matches!(err, TranslationError::IoError(_)));
    }
}
