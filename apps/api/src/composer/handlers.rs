use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::composer::document::{compose, compose_detailed, Composition};
use crate::composer::markup::to_html;
use crate::composer::registry::StyleDescriptor;
use crate::composer::sample::sample_resume;
use crate::errors::AppError;
use crate::models::layout::LayoutConfig;
use crate::models::resume::ResumeContent;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub content: ResumeContent,
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Style id; the configured default when omitted.
    #[serde(default)]
    pub style: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SampleQuery {
    pub columns: Option<u8>,
    pub accent: Option<String>,
}

fn requested_style<'a>(state: &AppState, req: &'a RenderRequest) -> &'a str {
    req.style
        .as_deref()
        .unwrap_or_else(|| state.config.default_style.as_str())
}

/// POST /api/v1/render/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Json<Composition> {
    let style_id = requested_style(&state, &req);
    let composition = compose_detailed(state.registry, &req.content, &req.layout, style_id);
    info!(
        style = composition.style.as_str(),
        fell_back = composition.fell_back,
        sections = composition.sections.len(),
        "preview composed"
    );
    Json(composition)
}

/// POST /api/v1/render/html
pub async fn handle_render_html(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Html<String> {
    let style_id = requested_style(&state, &req);
    let document = compose(&req.content, &req.layout, style_id);
    info!(style = style_id, "export markup composed");
    Html(to_html(&document))
}

/// GET /api/v1/styles
pub async fn handle_list_styles(State(state): State<AppState>) -> Json<Vec<StyleDescriptor>> {
    Json(
        state
            .registry
            .entries()
            .iter()
            .map(|entry| entry.descriptor())
            .collect(),
    )
}

/// GET /api/v1/styles/:id
pub async fn handle_get_style(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StyleDescriptor>, AppError> {
    let entry = state
        .registry
        .lookup(&id)
        .ok_or_else(|| AppError::NotFound(format!("Style {id} not found")))?;
    Ok(Json(entry.descriptor()))
}

/// GET /api/v1/styles/:id/sample
pub async fn handle_style_sample(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SampleQuery>,
) -> Result<Html<String>, AppError> {
    let entry = state
        .registry
        .lookup(&id)
        .ok_or_else(|| AppError::NotFound(format!("Style {id} not found")))?;

    let mut layout = LayoutConfig::default();
    if let Some(columns) = params.columns {
        if !(1..=2).contains(&columns) {
            return Err(AppError::Validation(format!(
                "columns must be 1 or 2, got {columns}"
            )));
        }
        layout.columns = columns;
    }
    if let Some(accent) = params.accent {
        layout.accent_color = accent;
    }

    let document = state
        .registry
        .compose_variant(entry.variant, &sample_resume(), &layout);
    Ok(Html(to_html(&document)))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
