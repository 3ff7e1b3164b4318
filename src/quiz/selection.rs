use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::{CategoryId, Question};

/// Selector value clients send to play across every category.
pub const ALL_CATEGORIES: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    AllCategories,
    Category(i64),
}

impl From<CategoryId> for QuizScope {
    fn from(CategoryId(id): CategoryId) -> Self {
        if id == ALL_CATEGORIES {
            QuizScope::AllCategories
        } else {
            QuizScope::Category(id)
        }
    }
}

/// Picks the next quiz question out of `pool`.
///
/// Algorithm:
/// 1. Drop every candidate whose id was already served
/// 2. Choose uniformly among what is left
///
/// `None` means the pool is exhausted and the quiz is over.
pub fn next_question<R>(pool: Vec<Question>, previous: &[i64], rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let served: HashSet<i64> = previous.iter().copied().collect();
    let unseen: Vec<Question> = pool
        .into_iter()
        .filter(|question| !served.contains(&question.id))
        .collect();

    unseen.choose(rng).cloned()
}
