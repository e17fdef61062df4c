//! REST API and page routes.
//!
//! Every request carries the client's [`SelectionState`] and is answered by a
//! fresh [`ReactiveBinder`] over the shared dataset, so requests never share
//! mutable state.

use crate::error::ApiError;
use crate::page;
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use xdash_chart::{ChartError, ChartUpdate, ReactiveBinder, Rendered, SelectionEvent, SelectionState, Theme};
use xdash_data::{Dataset, Metric};

/// Read-only state shared by all handlers.
pub struct ServerState {
    pub dataset: Arc<Dataset>,
    pub title: String,
    pub loaded_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(dataset: Dataset, title: impl Into<String>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            title: title.into(),
            loaded_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub experiments: usize,
    pub rows: usize,
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ThemeTable {
    pub dark: Theme,
    pub light: Theme,
}

/// Everything the page needs to build its controls.
#[derive(Debug, Serialize)]
pub struct ExperimentsResponse {
    pub title: String,
    pub experiments: Vec<String>,
    pub metrics: Vec<Metric>,
    /// Initial selection
    pub selection: SelectionState,
    pub themes: ThemeTable,
}

#[derive(Debug, Deserialize)]
pub struct DispatchRequest {
    pub selection: SelectionState,
    pub event: SelectionEvent,
}

/// Selection after the request plus the charts it recomputed. Charts that
/// could not be built are listed in `errors` instead of `updates`.
#[derive(Debug, Serialize)]
pub struct ChartsResponse {
    pub selection: SelectionState,
    pub updates: Vec<ChartUpdate>,
    pub errors: Vec<ChartError>,
}

impl ChartsResponse {
    fn new(binder: &ReactiveBinder, rendered: Rendered) -> Self {
        Self {
            selection: binder.selection().clone(),
            updates: rendered.updates,
            errors: rendered.errors,
        }
    }
}

/// Create the API router
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/experiments", get(list_experiments))
        .route("/api/charts", post(render_charts))
        .route("/api/dispatch", post(dispatch_event))
        .with_state(state)
}

async fn index(State(state): State<Arc<ServerState>>) -> Html<String> {
    Html(page::render_index(&state.title))
}

async fn health_check(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        experiments: state.dataset.experiment_names().len(),
        rows: state.dataset.len(),
        loaded_at: state.loaded_at,
    })
}

async fn list_experiments(State(state): State<Arc<ServerState>>) -> Json<ExperimentsResponse> {
    Json(ExperimentsResponse {
        title: state.title.clone(),
        experiments: state.dataset.experiment_names().to_vec(),
        metrics: Metric::ALL.to_vec(),
        selection: SelectionState::initial(&state.dataset),
        themes: ThemeTable {
            dark: Theme::DARK,
            light: Theme::LIGHT,
        },
    })
}

/// Full redraw for a selection (initial paint).
async fn render_charts(
    State(state): State<Arc<ServerState>>,
    Json(selection): Json<SelectionState>,
) -> Json<ChartsResponse> {
    let mut binder = ReactiveBinder::with_selection(state.dataset.clone(), selection);
    let rendered = binder.render_all();
    Json(ChartsResponse::new(&binder, rendered))
}

/// Apply one control change and return only the charts it affects.
///
/// The client's current selection is rendered first so that only charts it
/// can actually draw are able to reject the change.
async fn dispatch_event(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<DispatchRequest>,
) -> Result<Json<ChartsResponse>, ApiError> {
    log::debug!("dispatch {:?}", request.event);
    let mut binder = ReactiveBinder::with_selection(state.dataset.clone(), request.selection);
    binder.render_all();
    let rendered = binder.dispatch(request.event)?;
    Ok(Json(ChartsResponse::new(&binder, rendered)))
}
