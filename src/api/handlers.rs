use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use log::debug;
use serde_json::{json, Value};

use crate::api::payload::{NewQuestionPayload, Page, QuizPayload, SearchPayload};
use crate::api::AppState;
use crate::error::ApiError;
use crate::quiz::page::paginate;
use crate::quiz::selection::{self, QuizScope};
use crate::quiz::{category_map, search};

type ApiResult = Result<Json<Value>, ApiError>;

fn bad_request(rejection: JsonRejection) -> ApiError {
    ApiError::BadRequest(rejection.body_text())
}

pub(super) async fn list_categories(State(state): State<AppState>) -> ApiResult {
    let categories = category_map(state.store.categories().await?);

    Ok(Json(json!({
        "success": true,
        "categories": categories,
    })))
}

pub(super) async fn list_questions(State(state): State<AppState>, Page(page): Page) -> ApiResult {
    let questions = state.store.questions().await?;
    let total_questions = questions.len();
    let current_questions = paginate(questions, page);

    // Paging past the end looks the same as having nothing at all
    if current_questions.is_empty() {
        debug!("Page {} of questions is empty", page);
        return Err(ApiError::NotFound);
    }

    let categories = category_map(state.store.categories().await?);

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "total_questions": total_questions,
        "categories": categories,
        "current_category": null,
    })))
}

pub(super) async fn delete_question(
    State(state): State<AppState>,
    question_id: Result<Path<i64>, PathRejection>,
    Page(page): Page,
) -> ApiResult {
    let Path(question_id) = question_id.map_err(|_| ApiError::NotFound)?;

    // Only a removed row counts; a lost race or skipped delete is a 404
    let deleted = state
        .store
        .delete(question_id)
        .await
        .map_err(ApiError::Unprocessable)?;
    if !deleted {
        debug!("Question {} was not deleted", question_id);
        return Err(ApiError::NotFound);
    }

    let questions = state
        .store
        .questions()
        .await
        .map_err(ApiError::Unprocessable)?;
    let total_questions = questions.len();

    Ok(Json(json!({
        "success": true,
        "deleted": question_id,
        "questions": paginate(questions, page),
        "total_questions": total_questions,
    })))
}

pub(super) async fn create_question(
    State(state): State<AppState>,
    Page(page): Page,
    payload: Result<Json<NewQuestionPayload>, JsonRejection>,
) -> ApiResult {
    let Json(payload) = payload.map_err(bad_request)?;
    let new_question = payload.validate()?;

    let created = state
        .store
        .insert(&new_question)
        .await
        .map_err(ApiError::Unprocessable)?;

    let questions = state
        .store
        .questions()
        .await
        .map_err(ApiError::Unprocessable)?;
    let total_questions = questions.len();

    Ok(Json(json!({
        "success": true,
        "created": created,
        "questions": paginate(questions, page),
        "total_questions": total_questions,
        "difficulty": new_question.difficulty,
    })))
}

pub(super) async fn search_questions(
    State(state): State<AppState>,
    Page(page): Page,
    payload: Result<Json<SearchPayload>, JsonRejection>,
) -> ApiResult {
    let Json(SearchPayload { search_term }) = payload.map_err(bad_request)?;

    let matches = search::filter_by_term(state.store.questions().await?, &search_term);
    let total_questions = matches.len();
    debug!("Search {:?} matched {} questions", search_term, total_questions);

    Ok(Json(json!({
        "success": true,
        "questions": paginate(matches, page),
        "total_questions": total_questions,
        "current_category": null,
    })))
}

pub(super) async fn questions_by_category(
    State(state): State<AppState>,
    category_id: Result<Path<i64>, PathRejection>,
    Page(page): Page,
) -> ApiResult {
    let Path(category_id) = category_id.map_err(|_| ApiError::NotFound)?;

    let category = state
        .store
        .category(category_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    let questions = state.store.questions_in_category(category.id).await?;
    let total_questions = questions.len();

    Ok(Json(json!({
        "success": true,
        "questions": paginate(questions, page),
        "total_questions": total_questions,
        "current_category": category.kind,
    })))
}

pub(super) async fn next_quiz_question(
    State(state): State<AppState>,
    payload: Result<Json<QuizPayload>, JsonRejection>,
) -> ApiResult {
    // Malformed quiz input is reported as 404, clients rely on it
    let Json(payload) = payload.map_err(|rejection| {
        debug!("Rejected quiz payload: {}", rejection.body_text());
        ApiError::NotFound
    })?;

    let scope = QuizScope::from(payload.quiz_category.id);
    let pool = state.store.quiz_pool(scope).await?;
    let pool_size = pool.len();

    let question = selection::next_question(
        pool,
        &payload.previous_questions,
        &mut rand::thread_rng(),
    );

    match &question {
        Some(question) => debug!("Quiz {:?}: serving question {}", scope, question.id),
        None => debug!(
            "Quiz {:?}: all {} questions served, quiz is over",
            scope, pool_size
        ),
    }

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}

pub(super) async fn not_found() -> ApiError {
    ApiError::NotFound
}
