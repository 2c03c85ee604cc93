use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use crate::state::AppState;
use crate::error::AppError;
use std::sync::Arc;
use tera::Context;
use tracing::{debug, info};

fn render(state: &AppState, template: &str, context: &Context) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.render(template, context)?))
}

pub async fn list_tours(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let tours = state.tour_repo.list().await?;
    debug!("Listing {} tours", tours.len());

    let mut context = Context::new();
    context.insert("tours", &tours);
    render(&state, "index.html", &context)
}

pub async fn get_tour(
    State(state): State<Arc<AppState>>,
    Path(tour_id): Path<String>,
) -> Result<Response, AppError> {
    let Some(tour) = state.tour_repo.find_by_id(&tour_id).await? else {
        info!("Tour {} not found, redirecting to listing", tour_id);
        return Ok(Redirect::to("/").into_response());
    };

    let mut context = Context::new();
    context.insert("tour", &tour);
    Ok(render(&state, "tour_detail.html", &context)?.into_response())
}

pub async fn about(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    render(&state, "about.html", &Context::new())
}
