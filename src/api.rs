use crate::data::{Property, SuburbStore, UserPreferences};
use crate::error::AppError;
use crate::scoring::{
    property_banner, suburb_banner, top_percent, Banner, GradeTable, PropertyScore, ScoringEngine,
    Strategy, SuburbScore,
};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: Arc<PrometheusHandle>,
    pub store: Arc<SuburbStore>,
    pub engine: Arc<ScoringEngine>,
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/scores/suburb", post(suburb_score_endpoint))
        .route("/api/v1/scores/property", post(property_score_endpoint))
}

/// Router with state attached; the server adds the metric layer on top.
pub fn app(state: AppState) -> Router {
    router().layer(Extension(state))
}

#[derive(Debug, Deserialize)]
pub struct SuburbScoreRequest {
    pub suburb: String,
    #[serde(default)]
    pub strategy: Option<Strategy>,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
}

#[derive(Debug, Serialize)]
pub struct SuburbScoreResponse {
    #[serde(flatten)]
    pub score: SuburbScore,
    pub grade: &'static str,
    pub banner: Banner,
    pub top_percent: u8,
}

#[derive(Debug, Deserialize)]
pub struct PropertyScoreRequest {
    #[serde(flatten)]
    pub property: Property,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
}

#[derive(Debug, Serialize)]
pub struct PropertyScoreResponse {
    #[serde(flatten)]
    pub score: PropertyScore,
    pub grade: &'static str,
    pub banner: Banner,
    pub top_percent: u8,
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready", "suburbs": state.store.len() })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn suburb_score_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<SuburbScoreRequest>,
) -> Result<Json<SuburbScoreResponse>, AppError> {
    let SuburbScoreRequest {
        suburb,
        strategy,
        preferences,
    } = payload;

    let score =
        state
            .engine
            .score_suburb_in(&state.store, &suburb, strategy, preferences.as_ref())?;

    Ok(Json(SuburbScoreResponse {
        grade: GradeTable::Standard.letter(score.composite),
        banner: suburb_banner(score.composite),
        top_percent: top_percent(score.composite),
        score,
    }))
}

pub(crate) async fn property_score_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<PropertyScoreRequest>,
) -> Result<Json<PropertyScoreResponse>, AppError> {
    let PropertyScoreRequest {
        property,
        preferences,
    } = payload;

    let score = state
        .engine
        .score_property_in(&state.store, &property, preferences.as_ref())?;

    Ok(Json(PropertyScoreResponse {
        grade: GradeTable::Standard.letter(score.composite),
        banner: property_banner(score.composite),
        top_percent: top_percent(score.composite),
        score,
    }))
}
