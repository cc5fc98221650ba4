use super::super::advice::GapAdvice;
use super::super::domain::HollandCode;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TopTypeView {
    pub rank: usize,
    pub code: HollandCode,
    pub label: &'static str,
    pub description: &'static str,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MajorView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub categories: Vec<HollandCode>,
    pub matched_types: Vec<HollandCode>,
    pub matched_groups: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationSummary {
    pub profile_code: String,
    pub top_types: Vec<TopTypeView>,
    pub majors: Vec<MajorView>,
    pub compatible_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_notice: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_notice: Option<&'static str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advice: Vec<GapAdvice>,
}

impl RecommendationSummary {
    /// Majors that matched but fall outside the display limit.
    pub fn hidden_count(&self) -> usize {
        self.compatible_count.saturating_sub(self.majors.len())
    }
}
