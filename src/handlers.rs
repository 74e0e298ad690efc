use crate::chart;
use crate::errors::AppError;
use crate::models::{ChartSpec, HealthChartParams, StewardChartParams};
use crate::normalize::{health_by_borough, steward_shares, tally_health};
use crate::soda::BOROUGHS;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.species))
}

pub async fn get_species(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.species.as_ref().clone())
}

pub async fn get_boroughs() -> Json<Vec<&'static str>> {
    Json(BOROUGHS.to_vec())
}

pub async fn get_health_chart(
    State(state): State<AppState>,
    Query(params): Query<HealthChartParams>,
) -> Result<Json<ChartSpec>, AppError> {
    let species = require_selector(&params.species, "species")?;

    let mut tallies = Vec::with_capacity(BOROUGHS.len());
    for borough in BOROUGHS {
        let rows = state.soda.health_rows(borough, species).await?;
        tallies.push(tally_health(borough, &rows));
    }
    let table = health_by_borough(tallies);

    info!(species, rows = table.len(), "built health-by-borough chart");
    Ok(Json(chart::health_chart(&table)))
}

pub async fn get_steward_chart(
    State(state): State<AppState>,
    Query(params): Query<StewardChartParams>,
) -> Result<Json<ChartSpec>, AppError> {
    let borough = require_selector(&params.borough, "borough")?;
    let species = require_selector(&params.species, "species")?;

    let rows = state.soda.steward_rows(borough, species).await?;
    let shares = steward_shares(&rows)?;

    info!(borough, species, rows = shares.len(), "built steward share chart");
    Ok(Json(chart::steward_chart(&shares)))
}

fn require_selector<'a>(value: &'a str, name: &str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request(format!("missing `{name}` selector")));
    }
    Ok(trimmed)
}
