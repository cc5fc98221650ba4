//! Question, major and exam-group catalogs.
//!
//! The built-in catalog mirrors the published questionnaire. Administrators can
//! replace it with files on disk: `questions.csv` (`id,text,type`), `majors.json`
//! and `exam_groups.json`.

mod import;
mod standard;

use crate::holland::domain::{
    normalize_group_code, ExamGroup, HollandCode, Major, Question, QuestionId,
};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

pub const QUESTIONS_FILE: &str = "questions.csv";
pub const MAJORS_FILE: &str = "majors.json";
pub const EXAM_GROUPS_FILE: &str = "exam_groups.json";

/// Read access to the catalogs the recommendation engine works from.
pub trait CatalogProvider: Send + Sync {
    fn questions(&self) -> &[Question];
    fn majors(&self) -> &[Major];
    fn exam_groups(&self) -> &[ExamGroup];

    fn exam_group(&self, code: &str) -> Option<&ExamGroup> {
        let code = normalize_group_code(code);
        self.exam_groups()
            .iter()
            .find(|group| normalize_group_code(&group.code) == code)
    }

    fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions().iter().find(|question| question.id == id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    questions: Vec<Question>,
    majors: Vec<Major>,
    exam_groups: Vec<ExamGroup>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate keys and blank required text.
    pub fn new(
        questions: Vec<Question>,
        majors: Vec<Major>,
        exam_groups: Vec<ExamGroup>,
    ) -> Result<Self, CatalogError> {
        validate_questions(&questions)?;
        validate_majors(&majors)?;
        validate_exam_groups(&exam_groups)?;

        Ok(Self {
            questions,
            majors,
            exam_groups,
        })
    }

    /// The 60-question RIASEC inventory with its 30 majors and 20 exam groups.
    pub fn standard() -> Self {
        Self {
            questions: standard::questions(),
            majors: standard::majors(),
            exam_groups: standard::exam_groups(),
        }
    }

    /// Load `questions.csv`, `majors.json` and `exam_groups.json` from `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();

        let questions = import::parse_questions(open(dir.join(QUESTIONS_FILE))?)?;
        let majors = import::parse_majors(open(dir.join(MAJORS_FILE))?)?;
        let exam_groups = import::parse_exam_groups(open(dir.join(EXAM_GROUPS_FILE))?)?;

        Self::new(questions, majors, exam_groups)
    }

    /// Questions grouped by type in canonical order, as shown on the questionnaire pages.
    pub fn questions_by_category(&self) -> Vec<(HollandCode, Vec<&Question>)> {
        HollandCode::ordered()
            .into_iter()
            .map(|code| {
                let questions = self
                    .questions
                    .iter()
                    .filter(|question| question.category == code)
                    .collect();
                (code, questions)
            })
            .collect()
    }
}

impl CatalogProvider for Catalog {
    fn questions(&self) -> &[Question] {
        &self.questions
    }

    fn majors(&self) -> &[Major] {
        &self.majors
    }

    fn exam_groups(&self) -> &[ExamGroup] {
        &self.exam_groups
    }
}

fn open(path: PathBuf) -> Result<File, CatalogError> {
    File::open(&path).map_err(|source| CatalogError::Io { path, source })
}

fn validate_questions(questions: &[Question]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for question in questions {
        if !seen.insert(question.id) {
            return Err(CatalogError::DuplicateQuestion(question.id));
        }
        if question.text.trim().is_empty() {
            return Err(CatalogError::Blank {
                entity: "question",
                key: question.id.to_string(),
                field: "text",
            });
        }
    }
    Ok(())
}

fn validate_majors(majors: &[Major]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for major in majors {
        if !seen.insert(major.id.trim()) {
            return Err(CatalogError::DuplicateMajor(major.id.clone()));
        }
        for (field, value) in [("name", &major.name), ("description", &major.description)] {
            if value.trim().is_empty() {
                return Err(CatalogError::Blank {
                    entity: "major",
                    key: major.id.clone(),
                    field,
                });
            }
        }
    }
    Ok(())
}

fn validate_exam_groups(groups: &[ExamGroup]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for group in groups {
        let code = normalize_group_code(&group.code);
        if code.is_empty() {
            return Err(CatalogError::Blank {
                entity: "exam group",
                key: group.name.clone(),
                field: "code",
            });
        }
        if !seen.insert(code.clone()) {
            return Err(CatalogError::DuplicateExamGroup(code));
        }
    }
    Ok(())
}

#[derive(Debug)]
pub enum CatalogError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Csv(csv::Error),
    Json(serde_json::Error),
    DuplicateQuestion(QuestionId),
    DuplicateMajor(String),
    DuplicateExamGroup(String),
    Blank {
        entity: &'static str,
        key: String,
        field: &'static str,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io { path, source } => {
                write!(f, "failed to read catalog file {}: {}", path.display(), source)
            }
            CatalogError::Csv(err) => write!(f, "invalid question CSV data: {}", err),
            CatalogError::Json(err) => write!(f, "invalid catalog JSON data: {}", err),
            CatalogError::DuplicateQuestion(id) => {
                write!(f, "question id {} appears more than once", id)
            }
            CatalogError::DuplicateMajor(id) => write!(f, "major id '{}' appears more than once", id),
            CatalogError::DuplicateExamGroup(code) => {
                write!(f, "exam group '{}' appears more than once", code)
            }
            CatalogError::Blank { entity, key, field } => {
                write!(f, "{} '{}' has a blank {}", entity, key, field)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::Csv(err) => Some(err),
            CatalogError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
