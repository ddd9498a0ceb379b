use crate::services::quote_service::QuoteService;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::info;
use serde::Serialize;
use std::sync::Arc;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Stock Data App. Visit /static/index.html to use the frontend.";

/// Shared state for HTTP handlers
pub struct AppState {
    pub service: QuoteService,
}

impl AppState {
    pub fn new(service: QuoteService) -> Self {
        Self { service }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// GET /
pub async fn root() -> impl IntoResponse {
    Json(MessageBody {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// GET /stock/:ticker
///
/// 抓取失败返回 400 和 `{"error": ...}`；未知代码仍返回 200，公司名称为 "Ticker not found"
pub async fn get_stock(State(state): State<Arc<AppState>>, Path(ticker): Path<String>) -> Response {
    info!("Received quote request for {}", ticker);

    match state.service.get_summary(&ticker).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody { error: e.to_string() }),
        )
            .into_response(),
    }
}
