//! Request bodies and extractors for the HTTP layer.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::error::ApiError;
use crate::quiz::page::PageQuery;
use crate::quiz::{CategoryId, NewQuestion};

/// Page number from `?page=`, never rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub usize);

#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let number = Query::<PageQuery>::try_from_uri(&parts.uri)
            .map(|Query(query)| query.number())
            .unwrap_or(1);
        Ok(Page(number))
    }
}

/// Body of `POST /questions`. Every field is optional here so that a
/// missing one is reported as a bad request rather than a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct NewQuestionPayload {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<CategoryId>,
    pub difficulty: Option<i64>,
}

impl NewQuestionPayload {
    pub fn validate(self) -> Result<NewQuestion, ApiError> {
        let mut missing = Vec::new();

        let question = self.question.filter(|text| !text.trim().is_empty());
        if question.is_none() {
            missing.push("question");
        }
        let answer = self.answer.filter(|text| !text.trim().is_empty());
        if answer.is_none() {
            missing.push("answer");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        if self.difficulty.is_none() {
            missing.push("difficulty");
        }

        match (question, answer, self.category, self.difficulty) {
            (Some(question), Some(answer), Some(CategoryId(category)), Some(difficulty)) => {
                Ok(NewQuestion {
                    question,
                    answer,
                    category,
                    difficulty,
                })
            }
            _ => Err(ApiError::BadRequest(format!(
                "missing fields: {}",
                missing.join(", ")
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchPayload {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: CategoryId,
}

#[derive(Debug, Deserialize)]
pub struct QuizPayload {
    pub quiz_category: QuizCategory,
    pub previous_questions: Vec<i64>,
}
