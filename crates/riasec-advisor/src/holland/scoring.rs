use super::domain::{AnswerSet, CategoryScores, HollandCode, Question, QuestionId};
use std::collections::HashMap;

/// Tally selected answers per Holland type.
///
/// Answers that reference ids missing from `catalog`, and answers left unselected,
/// contribute nothing. If the catalog repeats an id, the first entry wins.
pub fn compute_category_scores(answers: &AnswerSet, catalog: &[Question]) -> CategoryScores {
    let categories: HashMap<QuestionId, HollandCode> = catalog
        .iter()
        .rev()
        .map(|question| (question.id, question.category))
        .collect();

    answers
        .selected()
        .filter_map(|id| categories.get(&id).copied())
        .fold(CategoryScores::default(), |mut scores, code| {
            scores.increment(code);
            scores
        })
}
