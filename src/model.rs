use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    FillInTheBlank,
}

impl QuestionType {
    pub const ALL: [QuestionType; 2] = [QuestionType::MultipleChoice, QuestionType::FillInTheBlank];

    pub fn wire_name(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multipleChoice",
            QuestionType::FillInTheBlank => "fillInTheBlank",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "Multiple choice",
            QuestionType::FillInTheBlank => "Fill in the blank",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn wire_name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceType {
    Exam,
    Quiz,
}

impl ReferenceType {
    pub fn parse(value: &str) -> Option<ReferenceType> {
        match value.trim().to_ascii_lowercase().as_str() {
            "exam" => Some(ReferenceType::Exam),
            "quiz" => Some(ReferenceType::Quiz),
            _ => None,
        }
    }
}

/// Parent exam or quiz a question belongs to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reference {
    pub id: String,
    #[serde(rename = "referenceType")]
    pub reference_type: ReferenceType,
}

impl Reference {
    pub fn new(id: impl Into<String>, reference_type: ReferenceType) -> Self {
        Self {
            id: id.into(),
            reference_type,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ChoiceOption {
    pub option: String,
    #[serde(rename = "isCorrect", default)]
    pub is_correct: bool,
}

impl ChoiceOption {
    pub fn new(option: impl Into<String>, is_correct: bool) -> Self {
        Self {
            option: option.into(),
            is_correct,
        }
    }
}

/// Reads an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Variant-specific part of a question. The `type` key carries the tag, so
/// only the active variant's field ever reaches the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum QuestionKind {
    #[serde(rename = "multipleChoice")]
    MultipleChoice {
        #[serde(default, deserialize_with = "null_as_default")]
        options: Vec<ChoiceOption>,
    },
    #[serde(rename = "fillInTheBlank")]
    FillInTheBlank {
        #[serde(rename = "correctAnswer", default, deserialize_with = "null_as_default")]
        correct_answer: String,
    },
}

impl QuestionKind {
    pub fn question_type(&self) -> QuestionType {
        match self {
            QuestionKind::MultipleChoice { .. } => QuestionType::MultipleChoice,
            QuestionKind::FillInTheBlank { .. } => QuestionType::FillInTheBlank,
        }
    }
}

/// A question as the server returns it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
}

impl Question {
    pub fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }
}

/// Outbound body for create and update.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct QuestionPayload {
    #[serde(flatten)]
    pub kind: QuestionKind,
    pub content: String,
    pub hint: String,
    pub explanation: String,
    pub difficulty: Difficulty,
    pub reference: Reference,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn question_accepts_document_store_id_and_missing_optionals() {
        let raw = json!({
            "_id": "64b6245b8f1234567890abcd",
            "type": "multipleChoice",
            "content": "Pick one",
            "difficulty": "medium",
            "createdAt": "2024-01-01T00:00:00Z"
        });
        let question: Question = serde_json::from_value(raw).unwrap();
        assert_eq!(question.id, "64b6245b8f1234567890abcd");
        assert_eq!(question.kind, QuestionKind::MultipleChoice { options: vec![] });
        assert_eq!(question.hint, None);
        assert_eq!(question.reference, None);
        assert_eq!(question.difficulty, Difficulty::Medium);
    }

    #[test]
    fn question_reads_fill_in_the_blank_with_reference() {
        let raw = json!({
            "id": "q1",
            "type": "fillInTheBlank",
            "content": "2+2=?",
            "correctAnswer": "4",
            "hint": "even",
            "difficulty": "easy",
            "reference": { "id": "quiz-1", "referenceType": "quiz" }
        });
        let question: Question = serde_json::from_value(raw).unwrap();
        assert_eq!(
            question.kind,
            QuestionKind::FillInTheBlank {
                correct_answer: "4".into()
            }
        );
        assert_eq!(question.hint.as_deref(), Some("even"));
        assert_eq!(
            question.reference,
            Some(Reference::new("quiz-1", ReferenceType::Quiz))
        );
    }

    #[test]
    fn null_variant_fields_decode_as_empty() {
        let raw = r#"[
            {"_id":"a","type":"multipleChoice","options":null,"content":"Pick","hint":null,"difficulty":"easy"},
            {"_id":"b","type":"fillInTheBlank","correctAnswer":null,"content":"2+2=?","difficulty":"hard"}
        ]"#;
        let questions: Vec<Question> = serde_json::from_str(raw).unwrap();

        assert_eq!(questions[0].kind, QuestionKind::MultipleChoice { options: vec![] });
        assert_eq!(questions[0].hint, None);
        assert_eq!(
            questions[1].kind,
            QuestionKind::FillInTheBlank {
                correct_answer: String::new()
            }
        );
    }

    #[test]
    fn unknown_question_type_is_rejected() {
        let raw = json!({
            "id": "q1",
            "type": "essay",
            "content": "Write",
            "difficulty": "hard"
        });
        assert!(serde_json::from_value::<Question>(raw).is_err());
    }

    #[test]
    fn reference_type_parse_is_case_insensitive() {
        assert_eq!(ReferenceType::parse(" Exam "), Some(ReferenceType::Exam));
        assert_eq!(ReferenceType::parse("QUIZ"), Some(ReferenceType::Quiz));
        assert_eq!(ReferenceType::parse("course"), None);
    }
}
