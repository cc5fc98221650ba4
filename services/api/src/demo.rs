use crate::infra::{load_catalog, InMemoryResultRepository};
use clap::Args;
use riasec_advisor::catalog::{Catalog, CatalogProvider};
use riasec_advisor::error::AppError;
use riasec_advisor::holland::{
    AnswerSet, MatchOptions, RecommendationEngine, RecommendationSummary, ScoreGap,
    DEFAULT_MAJOR_DISPLAY_LIMIT,
};
use riasec_advisor::session::{QuizSession, StudentInfo};
use riasec_advisor::submissions::{ResultQuery, SubmissionRequest, SubmissionService};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct QuizReportArgs {
    /// Answers as a JSON object of question id to selection, e.g. {"1": true, "7": false}
    #[arg(long)]
    pub(crate) answers: String,
    /// Comma separated exam group codes, e.g. A00,D01
    #[arg(long, value_delimiter = ',', required = true)]
    pub(crate) groups: Vec<String>,
    /// Subject scores as a JSON array of {"subject", "current_score", "target_score"}
    #[arg(long)]
    pub(crate) scores: Option<String>,
    /// Directory holding questions.csv, majors.json and exam_groups.json
    #[arg(long)]
    pub(crate) catalog_dir: Option<PathBuf>,
    /// Number of suggested majors to print
    #[arg(long, default_value_t = DEFAULT_MAJOR_DISPLAY_LIMIT)]
    pub(crate) limit: usize,
    /// Order majors by how many profile types they share
    #[arg(long)]
    pub(crate) rank_by_overlap: bool,
    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogShowArgs {
    /// Directory holding questions.csv, majors.json and exam_groups.json
    #[arg(long)]
    pub(crate) catalog_dir: Option<PathBuf>,
}

pub(crate) fn run_quiz_report(args: QuizReportArgs) -> Result<(), AppError> {
    let QuizReportArgs {
        answers,
        groups,
        scores,
        catalog_dir,
        limit,
        rank_by_overlap,
        json,
    } = args;

    let catalog = load_catalog(catalog_dir.as_deref())?;
    let engine = RecommendationEngine::new(Arc::new(catalog), MatchOptions { rank_by_overlap });

    let answers: AnswerSet = serde_json::from_str(&answers)?;
    let scores: Vec<ScoreGap> = match scores {
        Some(raw) => serde_json::from_str(&raw)?,
        None => Vec::new(),
    };

    let mut session = QuizSession::new()
        .with_student(StudentInfo::new("Command line", "-"))?
        .with_answers(answers)?
        .finish_questionnaire()?
        .select_exam_groups(&groups, engine.catalog())?;
    for score in &scores {
        session = session.set_score(&score.subject, score.current_score, score.target_score)?;
    }
    let selected = session.exam_groups().to_vec();
    let outcome = session.complete(&engine)?.into_outcome()?;
    let summary = outcome.recommendation.summary(&selected, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Holland quiz report");
    let tally: Vec<String> = outcome
        .category_scores
        .entries()
        .iter()
        .map(|(code, score)| format!("{}={}", code.letter(), score))
        .collect();
    println!("Type scores: {}", tally.join(" "));
    println!("Exam groups: {}", selected.join(", "));
    render_summary(&summary);
    Ok(())
}

pub(crate) fn run_catalog_show(args: CatalogShowArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog_dir.as_deref())?;
    render_catalog(&catalog);
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Career orientation demo");

    let engine = Arc::new(RecommendationEngine::new(
        Arc::new(Catalog::standard()),
        MatchOptions::default(),
    ));
    let repository = Arc::new(InMemoryResultRepository::default());
    let service = SubmissionService::new(repository, engine, DEFAULT_MAJOR_DISPLAY_LIMIT);

    let request = demo_submission();
    println!(
        "- Student {} ({}) picks exam groups {}",
        request.student.name,
        request.student.class_name,
        request.exam_groups.join(", ")
    );

    let record = match service.submit(request) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };
    println!("- Stored result {} at {}", record.id, record.submitted_at);
    render_summary(&record.summary);

    let page = match service.search(&ResultQuery {
        student_class: Some("12a".to_string()),
        ..ResultQuery::default()
    }) {
        Ok(page) => page,
        Err(err) => {
            println!("  Result search unavailable: {}", err);
            return Ok(());
        }
    };
    println!("\nAdministrator search (class contains \"12a\"): {} result(s)", page.total);
    match serde_json::to_string_pretty(&page.results) {
        Ok(json) => println!("{}", json),
        Err(err) => println!("  Listing unavailable: {}", err),
    }

    Ok(())
}

fn demo_submission() -> SubmissionRequest {
    // Mostly social and enterprising picks from the standard questionnaire.
    let selected = [11, 13, 16, 17, 19, 20, 24, 41, 43, 44, 46];
    let answers = (1..=60).map(|id| (id, selected.contains(&id))).collect();

    SubmissionRequest {
        student: StudentInfo::new("Mai Nguyen", "12A3").with_student_number("24"),
        answers,
        exam_groups: vec!["D01".to_string(), "C00".to_string()],
        scores: vec![
            ScoreGap::new("Literature", 7.0, 8.5),
            ScoreGap::new("English", 8.5, 8.0),
            ScoreGap::new("History", 6.5, 6.5),
        ],
    }
}

pub(crate) fn render_summary(summary: &RecommendationSummary) {
    println!("\nHolland profile: {}", summary.profile_code);
    for view in &summary.top_types {
        println!(
            "  {}. {} ({}) score {} | {}",
            view.rank,
            view.label,
            view.code.letter(),
            view.score,
            view.description
        );
    }
    if let Some(notice) = summary.profile_notice {
        println!("  {}", notice);
    }

    println!(
        "Suggested majors ({} compatible):",
        summary.compatible_count
    );
    if let Some(notice) = summary.major_notice {
        println!("  {}", notice);
    }
    for major in &summary.majors {
        let matched: String = major.matched_types.iter().map(|code| code.letter()).collect();
        println!(
            "  - {} [groups {}; types {}]",
            major.name,
            major.matched_groups.join(", "),
            matched
        );
    }
    if summary.hidden_count() > 0 {
        println!("  ...and {} more", summary.hidden_count());
    }

    if summary.advice.is_empty() {
        return;
    }
    println!("Score outlook:");
    for advice in &summary.advice {
        println!(
            "  - {}: {:.1} -> {:.1} ({:+.1}) {}",
            advice.subject, advice.current_score, advice.target_score, advice.gap, advice.message
        );
    }
}

pub(crate) fn render_catalog(catalog: &Catalog) {
    println!("Questions");
    for (code, questions) in catalog.questions_by_category() {
        println!("  {} - {} ({} questions)", code.letter(), code.label(), questions.len());
        for question in questions {
            println!("    {:>3}. {}", question.id, question.text);
        }
    }

    println!("\nExam groups");
    for group in catalog.exam_groups() {
        println!("  {}: {}", group.code, group.subjects.join(", "));
    }

    println!("\nMajors");
    for major in catalog.majors() {
        let types: String = major.categories.iter().map(|code| code.letter()).collect();
        println!(
            "  {:>3}. {} [{}] via {}",
            major.id,
            major.name,
            types,
            major.exam_groups.join(", ")
        );
    }
}
