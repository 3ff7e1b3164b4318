mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;

use common::{add_question, add_questions, assert_error, ids_of, send, send_request, setup};

#[tokio::test]
async fn categories_are_keyed_by_id() {
    let (app, _store) = setup().await;

    let (status, body) = send(&app, Method::GET, "/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["categories"],
        json!({
            "1": "Science",
            "2": "Art",
            "3": "Geography",
            "4": "History",
            "5": "Entertainment",
            "6": "Sports",
        })
    );
}

#[tokio::test]
async fn category_listing_only_holds_its_questions() {
    let (app, store) = setup().await;
    let art = add_question(&store, "Who painted the Mona Lisa?", 2).await;
    add_question(&store, "What is the boiling point of water?", 1).await;
    let art_too = add_question(&store, "La Giaconda is better known as what?", 2).await;

    let (status, body) = send(&app, Method::GET, "/categories/2/questions", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["current_category"], "Art");
    assert_eq!(body["total_questions"], 2);
    assert_eq!(ids_of(&body["questions"]), vec![art, art_too]);
}

#[tokio::test]
async fn category_listing_is_paginated() {
    let (app, store) = setup().await;
    let ids = add_questions(&store, 11, 3).await;

    let (status, body) = send(&app, Method::GET, "/categories/3/questions?page=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 11);
    assert_eq!(ids_of(&body["questions"]), vec![ids[10]]);
}

#[tokio::test]
async fn empty_category_is_not_an_error() {
    let (app, _store) = setup().await;

    let (status, body) = send(&app, Method::GET, "/categories/6/questions", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 0);
    assert_eq!(body["current_category"], "Sports");
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let (app, _store) = setup().await;

    let (status, body) = send(&app, Method::GET, "/categories/42/questions", None).await;
    assert_error(status, &body, 404, "resource not found");

    let (status, body) = send(&app, Method::GET, "/categories/art/questions", None).await;
    assert_error(status, &body, 404, "resource not found");
}

#[tokio::test]
async fn unknown_routes_are_json_404s() {
    let (app, _store) = setup().await;

    let (status, body) = send(&app, Method::GET, "/books", None).await;
    assert_error(status, &body, 404, "resource not found");
}

#[tokio::test]
async fn read_failures_are_internal_errors() {
    let (app, store) = setup().await;
    sqlx::query("DROP TABLE categories")
        .execute(store.pool())
        .await
        .unwrap();

    let (status, body) = send(&app, Method::GET, "/categories", None).await;
    assert_error(status, &body, 500, "internal server error");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let (app, _store) = setup().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/questions")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
        .body(Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.clone(), request).await.unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("DELETE"));
    assert!(methods.contains("PATCH"));

    let request = Request::builder()
        .uri("/categories")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::OK);
}
