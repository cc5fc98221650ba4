use super::super::domain::{normalize_group_code, HollandCode, Major, ProfileEntry, TopProfile};
use super::super::result::Recommendation;
use super::views::{MajorView, RecommendationSummary, TopTypeView};
use std::collections::BTreeSet;
use std::fmt::Write as _;

/// Number of majors shown to the student unless configured otherwise.
pub const DEFAULT_MAJOR_DISPLAY_LIMIT: usize = 5;

/// Shown in place of a profile code when no type stands out.
pub const BALANCED_PROFILE_CODE: &str = "Balanced";

pub const NO_DOMINANT_TYPE_MESSAGE: &str =
    "Your answers are spread evenly across the Holland types, so no dominant type stands out. \
     Try answering again more decisively or talk it through with a guidance counselor.";

pub const NO_COMPATIBLE_MAJOR_MESSAGE: &str =
    "No major in the catalog matches both your personality types and the exam groups you chose. \
     Consider adding exam groups or consult a guidance counselor for advice.";

impl Recommendation {
    pub fn summary<S: AsRef<str>>(
        &self,
        selected_groups: &[S],
        display_limit: usize,
    ) -> RecommendationSummary {
        let selected: BTreeSet<String> = selected_groups
            .iter()
            .map(|group| normalize_group_code(group.as_ref()))
            .collect();

        let top_types = self
            .top_profile
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| top_type_view(index + 1, entry))
            .collect();

        let majors = self
            .compatible_majors
            .iter()
            .take(display_limit.max(1))
            .map(|major| major_view(major, &self.top_profile, &selected))
            .collect();

        let profile_notice = self
            .top_profile
            .is_empty()
            .then_some(NO_DOMINANT_TYPE_MESSAGE);
        let major_notice = self
            .compatible_majors
            .is_empty()
            .then_some(NO_COMPATIBLE_MAJOR_MESSAGE);

        RecommendationSummary {
            profile_code: profile_code(&self.top_profile),
            top_types,
            majors,
            compatible_count: self.compatible_majors.len(),
            profile_notice,
            major_notice,
            advice: self.advice.clone(),
        }
    }
}

impl RecommendationSummary {
    /// Plain-text recommendation stored alongside a result.
    pub fn narrative(&self) -> String {
        let mut text = String::new();

        if self.top_types.is_empty() {
            let _ = writeln!(text, "Holland profile: {}", self.profile_code);
        } else {
            let labels: Vec<&str> = self.top_types.iter().map(|view| view.label).collect();
            let _ = writeln!(
                text,
                "Holland profile: {} ({})",
                self.profile_code,
                labels.join(", ")
            );
        }
        if let Some(notice) = self.profile_notice {
            let _ = writeln!(text, "{notice}");
        }

        if self.majors.is_empty() {
            if let Some(notice) = self.major_notice {
                let _ = writeln!(text, "{notice}");
            }
        } else {
            let _ = writeln!(text, "Suggested majors:");
            for (index, major) in self.majors.iter().enumerate() {
                let _ = writeln!(
                    text,
                    "{}. {} [{}]",
                    index + 1,
                    major.name,
                    major.matched_groups.join(", ")
                );
            }
            if self.hidden_count() > 0 {
                let _ = writeln!(text, "...and {} more compatible majors", self.hidden_count());
            }
        }

        if !self.advice.is_empty() {
            let _ = writeln!(text, "Score outlook:");
            for advice in &self.advice {
                let _ = writeln!(
                    text,
                    "- {}: {:.1} -> {:.1} ({})",
                    advice.subject, advice.current_score, advice.target_score, advice.message
                );
            }
        }

        text.trim_end().to_string()
    }
}

fn profile_code(profile: &TopProfile) -> String {
    if profile.is_empty() {
        BALANCED_PROFILE_CODE.to_string()
    } else {
        profile.code()
    }
}

fn top_type_view(rank: usize, entry: &ProfileEntry) -> TopTypeView {
    TopTypeView {
        rank,
        code: entry.code,
        label: entry.code.label(),
        description: entry.code.description(),
        score: entry.score,
    }
}

fn major_view(major: &Major, profile: &TopProfile, selected: &BTreeSet<String>) -> MajorView {
    let matched_types: Vec<HollandCode> = profile
        .codes()
        .filter(|code| major.categories.contains(code))
        .collect();

    MajorView {
        id: major.id.clone(),
        name: major.name.clone(),
        description: major.description.clone(),
        categories: major.categories.clone(),
        matched_types,
        matched_groups: major.matched_groups(selected),
    }
}
