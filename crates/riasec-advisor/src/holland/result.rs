use super::advice::{advise, GapAdvice};
use super::domain::{
    normalize_group_code, AnswerSet, CategoryScores, Major, ScoreGap, TopProfile,
};
use super::matching::{match_majors, MatchOptions};
use super::ranking::resolve_top_profile;
use super::scoring::compute_category_scores;
use crate::catalog::CatalogProvider;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Final output of the engine, handed to presentation, storage and export collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub top_profile: TopProfile,
    pub compatible_majors: Vec<Major>,
    pub gaps: Vec<ScoreGap>,
    pub advice: Vec<GapAdvice>,
}

impl Recommendation {
    pub fn has_dominant_type(&self) -> bool {
        !self.top_profile.is_empty()
    }

    pub fn has_compatible_majors(&self) -> bool {
        !self.compatible_majors.is_empty()
    }
}

pub fn assemble_recommendation(
    top_profile: TopProfile,
    compatible_majors: Vec<Major>,
    gaps: Vec<ScoreGap>,
) -> Recommendation {
    let advice = gaps.iter().map(advise).collect();

    Recommendation {
        top_profile,
        compatible_majors,
        gaps,
        advice,
    }
}

/// Scores from the engine together with the recommendation built on them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineOutcome {
    pub category_scores: CategoryScores,
    pub recommendation: Recommendation,
}

/// Stateless facade running scoring, ranking, filtering and assembly in one call.
pub struct RecommendationEngine {
    catalog: Arc<dyn CatalogProvider>,
    options: MatchOptions,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<dyn CatalogProvider>, options: MatchOptions) -> Self {
        Self { catalog, options }
    }

    pub fn catalog(&self) -> &dyn CatalogProvider {
        self.catalog.as_ref()
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn recommend<S: AsRef<str>>(
        &self,
        answers: &AnswerSet,
        selected_groups: &[S],
        gaps: Vec<ScoreGap>,
    ) -> EngineOutcome {
        let category_scores = compute_category_scores(answers, self.catalog.questions());
        let top_profile = resolve_top_profile(&category_scores);

        let selected: BTreeSet<String> = selected_groups
            .iter()
            .map(|group| normalize_group_code(group.as_ref()))
            .collect();
        let majors = match_majors(&top_profile, &selected, self.catalog.majors(), self.options);

        debug!(
            profile = %top_profile.code(),
            selected_answers = answers.selected_count(),
            compatible_majors = majors.len(),
            "resolved holland recommendation"
        );

        EngineOutcome {
            category_scores,
            recommendation: assemble_recommendation(top_profile, majors, gaps),
        }
    }
}
