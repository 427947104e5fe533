use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::{
    data::models::{LookupResult, SearchParams},
    handlers::{ApiError, AppState},
};

// Not-found and invalid words are reported in the body with a 200.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<LookupResult>, ApiError> {
    let Query(params) = params?;
    Ok(Json(state.dictionary.lookup(&params.word).await))
}
