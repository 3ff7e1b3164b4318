use crate::quiz::Question;

/// Literal, case-sensitive containment. The empty term matches everything.
pub fn matches(question: &Question, term: &str) -> bool {
    question.question.contains(term)
}

pub fn filter_by_term(questions: Vec<Question>, term: &str) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|question| matches(question, term))
        .collect()
}
