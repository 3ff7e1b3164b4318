#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use trivia_api::quiz::NewQuestion;
use trivia_api::store::QuestionStore;

/// Fresh in-memory database with migrations applied. One connection only,
/// each `:memory:` connection is its own database.
pub async fn setup() -> (Router, QuestionStore) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");

    let store = QuestionStore::new(pool);
    store.migrate().await.expect("migrations");

    (trivia_api::router(store.clone()), store)
}

pub async fn add_question(store: &QuestionStore, question: &str, category: i64) -> i64 {
    store
        .insert(&NewQuestion {
            question: question.to_string(),
            answer: format!("Answer to {}", question),
            category,
            difficulty: 2,
        })
        .await
        .expect("insert question")
}

/// Inserts `count` questions named `Question 1`, `Question 2`, ... into `category`.
pub async fn add_questions(store: &QuestionStore, count: usize, category: i64) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for n in 1..=count {
        ids.push(add_question(store, &format!("Question {}", n), category).await);
    }
    ids
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn ids_of(questions: &Value) -> Vec<i64> {
    questions
        .as_array()
        .expect("questions array")
        .iter()
        .map(|q| q["id"].as_i64().expect("question id"))
        .collect()
}

pub fn assert_error(status: StatusCode, body: &Value, code: u16, message: &str) {
    assert_eq!(status.as_u16(), code);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], code);
    assert_eq!(body["message"], message);
}
