mod handlers;
pub mod payload;

use axum::http::header::{ALLOW, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::error::ApiError;
use crate::store::QuestionStore;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: QuestionStore,
}

pub fn router(store: QuestionStore) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/:category_id/questions",
            get(handlers::questions_by_category),
        )
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/search", post(handlers::search_questions))
        .route("/questions/:question_id", delete(handlers::delete_question))
        .route("/quizzes", post(handlers::next_quiz_question))
        .fallback(handlers::not_found)
        .layer(middleware::map_response(method_not_allowed_as_json))
        .layer(cors())
        .with_state(AppState { store })
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

/// Routing answers a wrong method with an empty 405; give it the same JSON
/// body as every other error and keep the `Allow` header.
async fn method_not_allowed_as_json(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(ALLOW).cloned();
    let mut json = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        json.headers_mut().insert(ALLOW, allow);
    }
    json
}
