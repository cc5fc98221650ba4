use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Identifier of a questionnaire item.
pub type QuestionId = u32;

/// Highest value accepted for a subject score.
pub const MAX_SUBJECT_SCORE: f32 = 10.0;

/// The six Holland interest types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum HollandCode {
    #[serde(rename = "R")]
    Realistic,
    #[serde(rename = "I")]
    Investigative,
    #[serde(rename = "A")]
    Artistic,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "E")]
    Enterprising,
    #[serde(rename = "C")]
    Conventional,
}

impl HollandCode {
    /// Canonical R, I, A, S, E, C ordering used to break ties.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Realistic,
            Self::Investigative,
            Self::Artistic,
            Self::Social,
            Self::Enterprising,
            Self::Conventional,
        ]
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Realistic => 'R',
            Self::Investigative => 'I',
            Self::Artistic => 'A',
            Self::Social => 'S',
            Self::Enterprising => 'E',
            Self::Conventional => 'C',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Realistic => "Realistic",
            Self::Investigative => "Investigative",
            Self::Artistic => "Artistic",
            Self::Social => "Social",
            Self::Enterprising => "Enterprising",
            Self::Conventional => "Conventional",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Realistic => "Enjoys hands-on work with machines, tools, and practical tasks",
            Self::Investigative => "Enjoys exploring, analysing, and scientific research",
            Self::Artistic => "Enjoys creating, performing, and expressing ideas",
            Self::Social => "Enjoys helping, caring for, and working with people",
            Self::Enterprising => "Enjoys leading, persuading, and running ventures",
            Self::Conventional => "Enjoys structured work, organisation, and handling data",
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        Self::ordered()
            .into_iter()
            .find(|code| code.letter() == upper)
    }
}

impl fmt::Display for HollandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Raised when a string does not name one of the six Holland types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a Holland code (expected one of R, I, A, S, E, C)")]
pub struct UnknownHollandCode(pub String);

impl FromStr for HollandCode {
    type Err = UnknownHollandCode;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                Self::from_letter(letter).ok_or_else(|| UnknownHollandCode(raw.to_string()))
            }
            _ => Self::ordered()
                .into_iter()
                .find(|code| code.label().eq_ignore_ascii_case(trimmed))
                .ok_or_else(|| UnknownHollandCode(raw.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for HollandCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A questionnaire item tagged with the Holland type it measures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    #[serde(alias = "type")]
    pub category: HollandCode,
}

/// Selected / not-selected answers keyed by question id. Missing ids count as not selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, bool>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, id: QuestionId, selected: bool) -> Self {
        self.set(id, selected);
        self
    }

    pub fn set(&mut self, id: QuestionId, selected: bool) {
        self.answers.insert(id, selected);
    }

    pub fn is_selected(&self, id: QuestionId) -> bool {
        self.answers.get(&id).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, bool)> + '_ {
        self.answers.iter().map(|(id, selected)| (*id, *selected))
    }

    pub fn selected(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.iter()
            .filter_map(|(id, selected)| selected.then_some(id))
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<(QuestionId, bool)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, bool)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// Per-type tally of selected answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryScores {
    #[serde(rename = "R", default)]
    pub realistic: u32,
    #[serde(rename = "I", default)]
    pub investigative: u32,
    #[serde(rename = "A", default)]
    pub artistic: u32,
    #[serde(rename = "S", default)]
    pub social: u32,
    #[serde(rename = "E", default)]
    pub enterprising: u32,
    #[serde(rename = "C", default)]
    pub conventional: u32,
}

impl CategoryScores {
    /// Scores given in canonical R, I, A, S, E, C order.
    pub const fn new(r: u32, i: u32, a: u32, s: u32, e: u32, c: u32) -> Self {
        Self {
            realistic: r,
            investigative: i,
            artistic: a,
            social: s,
            enterprising: e,
            conventional: c,
        }
    }

    pub const fn get(&self, code: HollandCode) -> u32 {
        match code {
            HollandCode::Realistic => self.realistic,
            HollandCode::Investigative => self.investigative,
            HollandCode::Artistic => self.artistic,
            HollandCode::Social => self.social,
            HollandCode::Enterprising => self.enterprising,
            HollandCode::Conventional => self.conventional,
        }
    }

    fn slot_mut(&mut self, code: HollandCode) -> &mut u32 {
        match code {
            HollandCode::Realistic => &mut self.realistic,
            HollandCode::Investigative => &mut self.investigative,
            HollandCode::Artistic => &mut self.artistic,
            HollandCode::Social => &mut self.social,
            HollandCode::Enterprising => &mut self.enterprising,
            HollandCode::Conventional => &mut self.conventional,
        }
    }

    pub(crate) fn increment(&mut self, code: HollandCode) {
        let slot = self.slot_mut(code);
        *slot = slot.saturating_add(1);
    }

    pub fn with_score(mut self, code: HollandCode, score: u32) -> Self {
        *self.slot_mut(code) = score;
        self
    }

    pub fn total(&self) -> u32 {
        self.entries().iter().map(|(_, score)| score).sum()
    }

    /// `(code, score)` pairs in canonical order.
    pub fn entries(&self) -> [(HollandCode, u32); 6] {
        HollandCode::ordered().map(|code| (code, self.get(code)))
    }
}

/// Categories sharing one score. Buckets are ranked and included atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBucket {
    pub score: u32,
    pub categories: Vec<HollandCode>,
}

impl ScoreBucket {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub code: HollandCode,
    pub score: u32,
}

/// Largest number of types reported in a profile.
pub const PROFILE_CAPACITY: usize = 3;

/// Resolved top personality types, strongest first.
///
/// Always holds at most [`PROFILE_CAPACITY`] distinct codes with non-increasing scores.
/// An empty profile means the answers did not discriminate between types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ProfileEntry>", into = "Vec<ProfileEntry>")]
pub struct TopProfile {
    entries: Vec<ProfileEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("a profile holds at most 3 types, found {0}")]
    TooManyEntries(usize),
    #[error("profile scores must be non-increasing ({previous} followed by {next})")]
    IncreasingScore { previous: u32, next: u32 },
    #[error("type {0} appears more than once in the profile")]
    DuplicateCode(HollandCode),
}

impl TopProfile {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a profile from explicit entries, checking the ordering invariants.
    pub fn try_from_entries(entries: Vec<ProfileEntry>) -> Result<Self, ProfileError> {
        if entries.len() > PROFILE_CAPACITY {
            return Err(ProfileError::TooManyEntries(entries.len()));
        }

        let mut seen = BTreeSet::new();
        for entry in &entries {
            if !seen.insert(entry.code) {
                return Err(ProfileError::DuplicateCode(entry.code));
            }
        }

        for pair in entries.windows(2) {
            if pair[1].score > pair[0].score {
                return Err(ProfileError::IncreasingScore {
                    previous: pair[0].score,
                    next: pair[1].score,
                });
            }
        }

        Ok(Self { entries })
    }

    pub(crate) fn from_resolved(entries: Vec<ProfileEntry>) -> Self {
        debug_assert!(entries.len() <= PROFILE_CAPACITY);
        Self { entries }
    }

    pub fn entries(&self) -> &[ProfileEntry] {
        &self.entries
    }

    pub fn codes(&self) -> impl Iterator<Item = HollandCode> + '_ {
        self.entries.iter().map(|entry| entry.code)
    }

    pub fn contains(&self, code: HollandCode) -> bool {
        self.codes().any(|candidate| candidate == code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concatenated letters, e.g. `"RIA"`. Empty for an uninformative profile.
    pub fn code(&self) -> String {
        self.codes().map(HollandCode::letter).collect()
    }
}

impl TryFrom<Vec<ProfileEntry>> for TopProfile {
    type Error = ProfileError;

    fn try_from(entries: Vec<ProfileEntry>) -> Result<Self, Self::Error> {
        Self::try_from_entries(entries)
    }
}

impl From<TopProfile> for Vec<ProfileEntry> {
    fn from(profile: TopProfile) -> Self {
        profile.entries
    }
}

/// Normalise an exam-group code as typed by a student or administrator (`" a00 "` -> `"A00"`).
pub fn normalize_group_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Academic major offered through one or more exam groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Major {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "examBlocks", alias = "exam_blocks")]
    pub exam_groups: Vec<String>,
    #[serde(default, alias = "hollandTypes", alias = "holland_types")]
    pub categories: Vec<HollandCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<String>,
}

impl Major {
    /// `selected` must already hold normalised codes.
    pub fn offers_any_group(&self, selected: &BTreeSet<String>) -> bool {
        self.exam_groups
            .iter()
            .any(|group| selected.contains(&normalize_group_code(group)))
    }

    pub fn shares_category(&self, profile: &TopProfile) -> bool {
        self.categories.iter().any(|code| profile.contains(*code))
    }

    /// Number of distinct profile types this major is associated with.
    pub fn matched_category_count(&self, profile: &TopProfile) -> usize {
        profile
            .codes()
            .filter(|code| self.categories.contains(code))
            .count()
    }

    /// The major's exam groups that the student selected, in catalog order.
    pub fn matched_groups(&self, selected: &BTreeSet<String>) -> Vec<String> {
        self.exam_groups
            .iter()
            .map(|group| normalize_group_code(group))
            .filter(|group| selected.contains(group))
            .collect()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(value) => value,
        RawId::Number(value) => value.to_string(),
    })
}

/// Named bundle of admission subjects (e.g. `A00`: Maths, Physics, Chemistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamGroup {
    #[serde(alias = "id")]
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Current and target score for one subject, both on a 0-10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreGap {
    pub subject: String,
    #[serde(alias = "currentScore")]
    pub current_score: f32,
    #[serde(alias = "targetScore")]
    pub target_score: f32,
}

impl ScoreGap {
    pub fn new(subject: impl Into<String>, current_score: f32, target_score: f32) -> Self {
        Self {
            subject: subject.into(),
            current_score,
            target_score,
        }
    }

    pub fn unscored(subject: impl Into<String>) -> Self {
        Self::new(subject, 0.0, 0.0)
    }

    pub fn gap(&self) -> f32 {
        self.target_score - self.current_score
    }

    pub fn is_within_range(&self) -> bool {
        let valid = |score: f32| (0.0..=MAX_SUBJECT_SCORE).contains(&score);
        valid(self.current_score) && valid(self.target_score)
    }
}
