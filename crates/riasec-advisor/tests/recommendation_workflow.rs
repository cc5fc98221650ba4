use riasec_advisor::catalog::{Catalog, CatalogProvider};
use riasec_advisor::holland::{
    compute_category_scores, filter_compatible_majors, resolve_top_profile, score_buckets,
    AnswerSet, CategoryScores, HollandCode, MatchOptions, Major, ProfileEntry, RecommendationEngine,
    ScoreGap, TopProfile, DEFAULT_MAJOR_DISPLAY_LIMIT,
};
use riasec_advisor::session::{QuizSession, QuizStep, StudentInfo};
use std::collections::BTreeSet;
use std::sync::Arc;

fn letters(profile: &TopProfile) -> Vec<(HollandCode, u32)> {
    profile
        .entries()
        .iter()
        .map(|entry| (entry.code, entry.score))
        .collect()
}

fn answers_for(catalog: &Catalog, picks: &[(HollandCode, usize)]) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for &(code, count) in picks {
        for question in catalog
            .questions()
            .iter()
            .filter(|question| question.category == code)
            .take(count)
        {
            answers.set(question.id, true);
        }
    }
    answers
}

#[test]
fn leader_followed_by_tied_pair_uses_canonical_order() {
    let scores = CategoryScores::new(10, 8, 8, 3, 1, 0);

    assert_eq!(score_buckets(&scores).len(), 5);
    assert_eq!(
        letters(&resolve_top_profile(&scores)),
        vec![
            (HollandCode::Realistic, 10),
            (HollandCode::Investigative, 8),
            (HollandCode::Artistic, 8),
        ]
    );
}

#[test]
fn degenerate_leading_ties_yield_empty_profiles() {
    assert!(resolve_top_profile(&CategoryScores::new(5, 5, 5, 5, 2, 0)).is_empty());
    assert!(resolve_top_profile(&CategoryScores::new(2, 2, 2, 2, 2, 2)).is_empty());
    assert!(resolve_top_profile(&CategoryScores::default()).is_empty());
}

#[test]
fn five_way_runner_up_is_dropped() {
    let profile = resolve_top_profile(&CategoryScores::new(9, 1, 1, 1, 1, 1));
    assert_eq!(letters(&profile), vec![(HollandCode::Realistic, 9)]);
}

#[test]
fn major_sharing_group_and_type_is_compatible() {
    let profile = TopProfile::try_from_entries(vec![
        ProfileEntry {
            code: HollandCode::Investigative,
            score: 8,
        },
        ProfileEntry {
            code: HollandCode::Conventional,
            score: 6,
        },
    ])
    .expect("valid profile");
    let catalog = vec![Major {
        id: "it".to_string(),
        name: "Information Technology".to_string(),
        description: "Logic and technology".to_string(),
        exam_groups: vec!["A00".to_string(), "B00".to_string()],
        categories: vec![HollandCode::Investigative, HollandCode::Realistic],
        characteristics: None,
    }];
    let selected = BTreeSet::from(["A00".to_string()]);

    assert_eq!(filter_compatible_majors(&profile, &selected, &catalog).len(), 1);
    assert!(filter_compatible_majors(&TopProfile::empty(), &selected, &catalog).is_empty());
}

#[test]
fn unknown_question_ids_do_not_count() {
    let catalog = Catalog::standard();
    let answers = AnswerSet::new()
        .with_answer(1, true)
        .with_answer(61, true)
        .with_answer(11, false);

    let scores = compute_category_scores(&answers, catalog.questions());

    assert_eq!(scores.total(), 1);
    assert_eq!(scores.realistic, 1);
}

#[test]
fn logistics_without_types_never_matches() {
    let catalog = Arc::new(Catalog::standard());
    let engine = RecommendationEngine::new(catalog.clone(), MatchOptions::default());
    let answers = answers_for(
        &catalog,
        &[
            (HollandCode::Realistic, 5),
            (HollandCode::Investigative, 4),
            (HollandCode::Conventional, 3),
        ],
    );

    let outcome = engine.recommend(&answers, &["A00", "A01", "D01"], Vec::new());

    assert!(outcome.recommendation.has_compatible_majors());
    assert!(outcome
        .recommendation
        .compatible_majors
        .iter()
        .all(|major| major.id != "27"));
}

#[test]
fn overlap_ranking_promotes_majors_sharing_more_types() {
    let catalog = Arc::new(Catalog::standard());
    let answers = answers_for(
        &catalog,
        &[
            (HollandCode::Conventional, 7),
            (HollandCode::Enterprising, 5),
        ],
    );

    let plain = RecommendationEngine::new(catalog.clone(), MatchOptions::default())
        .recommend(&answers, &["A00"], Vec::new());
    let ranked = RecommendationEngine::new(
        catalog.clone(),
        MatchOptions {
            rank_by_overlap: true,
        },
    )
    .recommend(&answers, &["A00"], Vec::new());

    assert_eq!(plain.recommendation.top_profile.code(), "CE");
    assert_eq!(plain.recommendation.compatible_majors[0].id, "2");
    assert_eq!(ranked.recommendation.compatible_majors[0].id, "7");
    assert_eq!(
        plain.recommendation.compatible_majors.len(),
        ranked.recommendation.compatible_majors.len()
    );
}

#[test]
fn full_quiz_session_produces_summary() {
    let catalog = Arc::new(Catalog::standard());
    let engine = RecommendationEngine::new(catalog.clone(), MatchOptions::default());

    let session = QuizSession::new()
        .with_student(StudentInfo::new("Hoa Nguyen", "12D1"))
        .and_then(|session| {
            session.with_answers(answers_for(
                &catalog,
                &[(HollandCode::Social, 9), (HollandCode::Enterprising, 6)],
            ))
        })
        .and_then(QuizSession::finish_questionnaire)
        .and_then(|session| session.select_exam_groups(&["D01"], catalog.as_ref()))
        .and_then(|session| session.set_score("English", 8.5, 8.0))
        .and_then(|session| session.complete(&engine))
        .expect("quiz completes");
    assert_eq!(session.step(), QuizStep::Results);

    let outcome = session.into_outcome().expect("completed quiz has an outcome");
    let summary = outcome
        .recommendation
        .summary(&["D01"], DEFAULT_MAJOR_DISPLAY_LIMIT);

    assert_eq!(summary.profile_code, "SE");
    assert_eq!(summary.majors.len(), DEFAULT_MAJOR_DISPLAY_LIMIT);
    assert_eq!(summary.majors[0].name, "Law");
    assert!(summary
        .advice
        .iter()
        .any(|advice| advice.subject == "English" && advice.message == "Exceeded target"));
    assert!(summary.narrative().contains("Suggested majors:"));
}

#[test]
fn seeded_gaps_follow_selected_groups() {
    let catalog = Catalog::standard();
    let gaps: Vec<ScoreGap> =
        riasec_advisor::holland::seed_score_gaps(&["C00", "D14"], catalog.exam_groups());

    let subjects: Vec<&str> = gaps.iter().map(|gap| gap.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Literature", "History", "Geography", "English"]);
}
