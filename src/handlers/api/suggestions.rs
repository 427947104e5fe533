use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::{
    data::models::{SuggestionParams, SuggestionsResponse},
    handlers::{ApiError, AppState},
};

pub async fn suggestions(
    State(state): State<AppState>,
    params: Result<Query<SuggestionParams>, QueryRejection>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let Query(params) = params?;
    Ok(Json(SuggestionsResponse {
        suggestions: state.suggestions.suggest(&params.partial),
    }))
}
