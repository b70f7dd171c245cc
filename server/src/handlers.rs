use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use catalog::{Facets, FilterCriteria, JobRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::apply::{self, ApplicationAck, ApplicationRequest};
use crate::display::JobView;
use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for search and board endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
    industry: Option<String>,
    location: Option<String>,
    #[serde(rename = "type")]
    job_type: Option<String>,
}

impl From<SearchParams> for FilterCriteria {
    fn from(params: SearchParams) -> Self {
        FilterCriteria {
            search_text: params.q.unwrap_or_default(),
            industry: params.industry,
            location: params.location,
            job_type: params.job_type,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LimitParams {
    limit: Option<i64>,
}

impl LimitParams {
    // Negative limits select nothing.
    fn resolve(&self, default: usize) -> usize {
        self.limit
            .map_or(default, |limit| usize::try_from(limit).unwrap_or(0))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    query: FilterCriteria,
    total_results: usize,
    results: Vec<JobView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    searching: bool,
    heading: String,
    result_count: usize,
    featured: Vec<JobView>,
    listings: Vec<JobView>,
    related: Vec<JobView>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Handler for GET / (root)
pub async fn root_handler() -> &'static str {
    "Job Board API\n\nEndpoints:\n  GET  /facets                          - Industries, locations and job types\n  GET  /jobs?q=&industry=&location=&type= - Search postings\n  GET  /jobs/featured                    - Featured postings\n  GET  /jobs/latest?limit=<n>            - Most recent postings\n  GET  /jobs/{id}                        - One posting\n  GET  /jobs/{id}/related?limit=<n>      - Same-industry suggestions\n  GET  /board?q=&industry=&location=&type= - Composed listing page\n  POST /jobs/{id}/apply                  - Submit a (demo) application\n\nExample:\n  curl 'http://127.0.0.1:3000/jobs?q=engineer&location=Remote'"
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

pub async fn facets_handler(State(state): State<AppState>) -> Json<Facets> {
    Json(state.catalog.facets())
}

/// Handler for GET /jobs?q=<keywords>&industry=&location=&type=
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let criteria = FilterCriteria::from(params);
    let results = state.catalog.search(&criteria);
    let results = state.display.render_all(&results, (state.today)());

    Json(SearchResponse {
        query: criteria,
        total_results: results.len(),
        results,
    })
}

pub async fn featured_handler(State(state): State<AppState>) -> Json<Vec<JobView>> {
    let featured = state.catalog.featured();
    Json(state.display.render_all(&featured, (state.today)()))
}

pub async fn latest_handler(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Json<Vec<JobView>> {
    let latest = state.catalog.latest(params.resolve(state.latest_limit));
    Json(state.display.render_all(&latest, (state.today)()))
}

pub async fn job_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobView>, ApiError> {
    let job = find(&state, &id)?;
    Ok(Json(state.display.render(job, (state.today)())))
}

/// Suggestions for a single posting: same industry, the posting itself excluded.
pub async fn related_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<JobView>>, ApiError> {
    let job = find(&state, &id)?;
    let exclude = HashSet::from([job.id.as_str()]);
    let related = state
        .catalog
        .related_to(&[job], &exclude, params.resolve(state.related_limit));
    Ok(Json(state.display.render_all(&related, (state.today)())))
}

pub async fn board_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<BoardResponse> {
    let criteria = FilterCriteria::from(params);
    let board = state
        .catalog
        .board(&criteria, state.latest_limit, state.related_limit);
    let today = (state.today)();

    let heading = if board.searching {
        format!("Search Results ({})", board.result_count())
    } else {
        "Latest Jobs".to_string()
    };
    Json(BoardResponse {
        searching: board.searching,
        heading,
        result_count: board.result_count(),
        featured: state.display.render_all(&board.featured, today),
        listings: state.display.render_all(&board.listings, today),
        related: state.display.render_all(&board.related, today),
    })
}

/// The posting is resolved before the body is inspected, so an unknown id is
/// a 404 whatever the body holds.
#[tracing::instrument(skip(state, body))]
pub async fn apply_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ApplicationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApplicationAck>), ApiError> {
    let job = find(&state, &id)?;
    let Json(request) = body?;
    let ack = apply::acknowledge(job, &request)?;
    Ok((StatusCode::ACCEPTED, Json(ack)))
}

fn find<'a>(state: &'a AppState, id: &str) -> Result<&'a JobRecord, ApiError> {
    state
        .catalog
        .get(id)
        .ok_or_else(|| ApiError::NotFound(id.to_string()))
}
