use std::sync::Arc;

use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};

use crate::features::{dictionary::DictionaryApi, suggestions::SuggestionProvider};

pub mod api;
pub mod error_responses;
pub mod request_log;

pub use error_responses::ApiError;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub dictionary: Arc<DictionaryApi>,
    pub suggestions: Arc<SuggestionProvider>,
}

impl AppState {
    pub fn new(dictionary: DictionaryApi, suggestions: SuggestionProvider) -> Self {
        Self {
            dictionary: Arc::new(dictionary),
            suggestions: Arc::new(suggestions),
        }
    }
}

pub const ROUTES: [&str; 3] = [
    "GET /api/search?word=<word>",
    "GET /api/suggestions?partial=<partial_word>",
    "GET /api/health",
];

pub fn router(state: AppState) -> Router {
    let api_router = Router::new()
        .route("/search", get(api::search::search))
        .route("/suggestions", get(api::suggestions::suggestions))
        .route("/health", get(api::health::health))
        .method_not_allowed_fallback(api::method_not_allowed);

    // CORS sits outermost so preflights and panics still get the headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .nest("/api", api_router)
        .fallback(api::not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(error_responses::panic_response))
        .layer(middleware::from_fn(request_log::log_request))
        .layer(cors)
}
