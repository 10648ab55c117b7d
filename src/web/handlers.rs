use crate::catalog::{self, CatalogEntry, KnownTable};
use crate::db::schema;
use crate::db::{CellValue, ColumnMeta, QueryResult};
use crate::players::{self, Candidate};
use crate::profile::{self, PlayerReport};
use crate::web::error::{ApiError, ApiResult};
use crate::web::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::Html;
use serde::{Deserialize, Serialize};

const INDEX_HTML: &str = include_str!("assets/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<&'static str> {
    Json("OK")
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub queries: &'static [CatalogEntry],
    pub tables: &'static [KnownTable],
}

pub async fn list_queries() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        queries: catalog::entries(),
        tables: catalog::known_tables(),
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct RunPayload {
    pub id: Option<String>,
    pub sql: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub columns: Vec<ColumnMeta>,
    pub rows: Vec<Vec<CellValue>>,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ResultResponse {
    fn new(result: QueryResult, warning: Option<String>) -> Self {
        Self {
            columns: result.columns,
            rows: result.rows,
            truncated: result.truncated,
            warning,
        }
    }
}

#[tracing::instrument(level = "debug", skip(state, payload))]
pub async fn run_query(
    State(state): State<AppState>,
    Json(payload): Json<RunPayload>,
) -> ApiResult<Json<ResultResponse>> {
    if let Some(ref id) = payload.id
        && catalog::get(id).is_none()
        && payload.sql.as_deref().is_none_or(|s| s.trim().is_empty())
    {
        return Err(ApiError::BadRequest(format!("unknown catalog query '{}'", id)));
    }
    let sql = catalog::resolve_sql(payload.id.as_deref(), payload.sql.as_deref())
        .ok_or_else(|| ApiError::BadRequest("Please enter a query to run.".to_string()))?;

    let outcome = state.console()?.run_sql(sql).await?;
    Ok(Json(ResultResponse::new(outcome.result, outcome.warning)))
}

#[derive(Debug, Serialize)]
pub struct TablesResponse {
    pub tables: Vec<String>,
}

pub async fn list_tables(State(state): State<AppState>) -> ApiResult<Json<TablesResponse>> {
    let console = state.console()?;
    let tables = schema::list_tables(console.backend()).await?;
    Ok(Json(TablesResponse { tables }))
}

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    pub limit: Option<usize>,
}

pub async fn preview_table(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<PreviewParams>,
) -> ApiResult<Json<ResultResponse>> {
    if name.trim().is_empty() {
        return Err(ApiError::BadRequest("table name is required".to_string()));
    }
    let console = state.console()?;
    let result = schema::preview_table(console.backend(), &name, params.limit).await?;
    Ok(Json(ResultResponse::new(result, None)))
}

pub async fn table_columns(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<ResultResponse>> {
    if name.trim().is_empty() {
        return Err(ApiError::BadRequest("table name is required".to_string()));
    }
    let console = state.console()?;
    let result = schema::table_columns(console.backend(), &name).await?;
    Ok(Json(ResultResponse::new(result, None)))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub candidates: Vec<Candidate>,
}

pub async fn search_players(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<SearchResponse>> {
    let api = state.cricbuzz()?;
    let set = players::search(&api, &params.name).await?;
    Ok(Json(SearchResponse {
        query: params.name.trim().to_string(),
        candidates: set.into_values().collect(),
    }))
}

/// Search-hit fields the browser passes back when opening a player.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CandidateParams {
    pub name: Option<String>,
    pub team_name: Option<String>,
    pub dob: Option<String>,
    pub face_image_id: Option<String>,
}

pub async fn player_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<CandidateParams>,
) -> ApiResult<Json<PlayerReport>> {
    let id = players::parse_player_id(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let api = state.cricbuzz()?;
    let candidate = Candidate {
        id,
        name: params.name.unwrap_or_default(),
        team_name: params.team_name,
        dob: params.dob,
        face_image_id: params.face_image_id,
    };
    Ok(Json(profile::assemble_report(&api, &candidate).await))
}
