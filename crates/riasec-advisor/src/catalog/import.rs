use crate::holland::domain::{ExamGroup, HollandCode, Major, Question, QuestionId};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::Read;

pub(crate) fn parse_questions<R: Read>(reader: R) -> Result<Vec<Question>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut questions = Vec::new();

    for record in csv_reader.deserialize::<QuestionRow>() {
        let row = record?;
        questions.push(Question {
            id: row.id,
            text: row.text,
            category: row.category,
        });
    }

    Ok(questions)
}

#[derive(Debug, Deserialize)]
struct QuestionRow {
    id: QuestionId,
    text: String,
    #[serde(alias = "type")]
    category: HollandCode,
}

pub(crate) fn parse_majors<R: Read>(reader: R) -> Result<Vec<Major>, serde_json::Error> {
    parse_json_array(reader)
}

pub(crate) fn parse_exam_groups<R: Read>(reader: R) -> Result<Vec<ExamGroup>, serde_json::Error> {
    parse_json_array(reader)
}

fn parse_json_array<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_reader(reader)
}
