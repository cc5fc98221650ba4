//! Step-by-step quiz flow.
//!
//! A [`QuizSession`] is a value: every transition consumes it and hands back the next
//! state, or an error naming why the step could not be taken. The recommendation
//! engine is only invoked by [`QuizSession::complete`].

use crate::catalog::CatalogProvider;
use crate::holland::advice::subjects_for_groups;
use crate::holland::domain::{normalize_group_code, AnswerSet, QuestionId, ScoreGap};
use crate::holland::{EngineOutcome, RecommendationEngine};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    pub name: String,
    #[serde(rename = "class", alias = "class_name")]
    pub class_name: String,
    #[serde(
        default,
        alias = "number",
        alias = "studentNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub student_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(
        default,
        alias = "desired_major",
        alias = "desiredMajor",
        skip_serializing_if = "Option::is_none"
    )]
    pub intended_major: Option<String>,
}

impl StudentInfo {
    pub fn new(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    pub fn with_student_number(mut self, number: impl Into<String>) -> Self {
        self.student_number = Some(number.into());
        self
    }

    /// Trim every field, dropping optional ones left blank.
    fn normalized(self) -> Self {
        let optional = |value: Option<String>| {
            value
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            name: self.name.trim().to_string(),
            class_name: self.class_name.trim().to_string(),
            student_number: optional(self.student_number),
            university: optional(self.university),
            intended_major: optional(self.intended_major),
        }
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if self.name.trim().is_empty() {
            return Err(SessionError::MissingStudentField("name"));
        }
        if self.class_name.trim().is_empty() {
            return Err(SessionError::MissingStudentField("class"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStep {
    StudentInfo,
    Questionnaire,
    ExamGroups,
    Scores,
    Results,
}

impl QuizStep {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::StudentInfo,
            Self::Questionnaire,
            Self::ExamGroups,
            Self::Scores,
            Self::Results,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::StudentInfo => "Student Information",
            Self::Questionnaire => "Questionnaire",
            Self::ExamGroups => "Exam Groups",
            Self::Scores => "Subject Scores",
            Self::Results => "Results",
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::StudentInfo | Self::Questionnaire => Self::StudentInfo,
            Self::ExamGroups => Self::Questionnaire,
            Self::Scores => Self::ExamGroups,
            Self::Results => Self::Scores,
        }
    }
}

impl fmt::Display for QuizStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("the quiz is at the {actual} step, expected {expected}")]
    WrongStep { expected: QuizStep, actual: QuizStep },
    #[error("student {0} is required")]
    MissingStudentField(&'static str),
    #[error("select at least one exam group")]
    NoExamGroup,
    #[error("unknown exam group '{0}'")]
    UnknownExamGroup(String),
    #[error("'{0}' is not a subject of the selected exam groups")]
    UnknownSubject(String),
    #[error("scores for {subject} must be between 0 and 10 (got {current} and {target})")]
    ScoreOutOfRange {
        subject: String,
        current: f32,
        target: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    step: QuizStep,
    student: Option<StudentInfo>,
    answers: AnswerSet,
    exam_groups: Vec<String>,
    gaps: Vec<ScoreGap>,
    outcome: Option<EngineOutcome>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            step: QuizStep::StudentInfo,
            student: None,
            answers: AnswerSet::new(),
            exam_groups: Vec::new(),
            gaps: Vec::new(),
            outcome: None,
        }
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn student(&self) -> Option<&StudentInfo> {
        self.student.as_ref()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn exam_groups(&self) -> &[String] {
        &self.exam_groups
    }

    pub fn gaps(&self) -> &[ScoreGap] {
        &self.gaps
    }

    pub fn outcome(&self) -> Option<&EngineOutcome> {
        self.outcome.as_ref()
    }

    /// Take the engine outcome out of a completed quiz.
    pub fn into_outcome(self) -> Result<EngineOutcome, SessionError> {
        let actual = self.step;
        self.outcome.ok_or(SessionError::WrongStep {
            expected: QuizStep::Results,
            actual,
        })
    }

    fn expect_step(&self, expected: QuizStep) -> Result<(), SessionError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(SessionError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    pub fn with_student(mut self, student: StudentInfo) -> Result<Self, SessionError> {
        self.expect_step(QuizStep::StudentInfo)?;
        let student = student.normalized();
        student.validate()?;

        self.student = Some(student);
        self.step = QuizStep::Questionnaire;
        Ok(self)
    }

    pub fn answer(mut self, id: QuestionId, selected: bool) -> Result<Self, SessionError> {
        self.expect_step(QuizStep::Questionnaire)?;
        self.answers.set(id, selected);
        Ok(self)
    }

    /// Replace every answer at once.
    pub fn with_answers(mut self, answers: AnswerSet) -> Result<Self, SessionError> {
        self.expect_step(QuizStep::Questionnaire)?;
        self.answers = answers;
        Ok(self)
    }

    pub fn finish_questionnaire(mut self) -> Result<Self, SessionError> {
        self.expect_step(QuizStep::Questionnaire)?;
        self.step = QuizStep::ExamGroups;
        Ok(self)
    }

    /// Record the chosen exam groups and prepare one score entry per examined subject.
    ///
    /// Scores already entered for subjects that remain examined are kept.
    pub fn select_exam_groups<S: AsRef<str>>(
        mut self,
        groups: &[S],
        catalog: &dyn CatalogProvider,
    ) -> Result<Self, SessionError> {
        self.expect_step(QuizStep::ExamGroups)?;

        let mut selected: Vec<String> = Vec::new();
        for group in groups {
            let code = normalize_group_code(group.as_ref());
            if code.is_empty() {
                continue;
            }
            if catalog.exam_group(&code).is_none() {
                return Err(SessionError::UnknownExamGroup(code));
            }
            if !selected.contains(&code) {
                selected.push(code);
            }
        }
        if selected.is_empty() {
            return Err(SessionError::NoExamGroup);
        }

        let previous = std::mem::take(&mut self.gaps);
        self.gaps = subjects_for_groups(&selected, catalog.exam_groups())
            .into_iter()
            .map(|subject| {
                previous
                    .iter()
                    .find(|gap| gap.subject == subject)
                    .cloned()
                    .unwrap_or_else(|| ScoreGap::unscored(subject))
            })
            .collect();
        self.exam_groups = selected;
        self.step = QuizStep::Scores;
        Ok(self)
    }

    pub fn set_score(
        mut self,
        subject: &str,
        current_score: f32,
        target_score: f32,
    ) -> Result<Self, SessionError> {
        self.expect_step(QuizStep::Scores)?;

        let candidate = ScoreGap::new(subject.trim(), current_score, target_score);
        if !candidate.is_within_range() {
            return Err(SessionError::ScoreOutOfRange {
                subject: candidate.subject,
                current: current_score,
                target: target_score,
            });
        }

        let slot = self
            .gaps
            .iter_mut()
            .find(|gap| gap.subject.eq_ignore_ascii_case(&candidate.subject))
            .ok_or_else(|| SessionError::UnknownSubject(candidate.subject.clone()))?;
        slot.current_score = current_score;
        slot.target_score = target_score;
        Ok(self)
    }

    pub fn complete(mut self, engine: &RecommendationEngine) -> Result<Self, SessionError> {
        self.expect_step(QuizStep::Scores)?;

        let outcome = engine.recommend(&self.answers, &self.exam_groups, self.gaps.clone());
        self.outcome = Some(outcome);
        self.step = QuizStep::Results;
        Ok(self)
    }

    /// Step back without discarding what was entered. Leaving the results drops them.
    pub fn back(mut self) -> Self {
        if self.step == QuizStep::Results {
            self.outcome = None;
        }
        self.step = self.step.previous();
        self
    }

    pub fn reset(self) -> Self {
        Self::new()
    }
}
