use super::*;
use crate::model::QuestionKind;

impl QuestionAdmin {
    pub fn question_rows(&self) -> Vec<QuestionRow> {
        self.store
            .questions()
            .iter()
            .map(|q| QuestionRow {
                id: q.id.clone(),
                type_label: q.question_type().label(),
                content: q.content.clone(),
                difficulty_label: q.difficulty.label(),
                detail: match &q.kind {
                    QuestionKind::MultipleChoice { options } => {
                        let correct = options.iter().filter(|o| o.is_correct).count();
                        format!("{} options, {correct} correct", options.len())
                    }
                    QuestionKind::FillInTheBlank { correct_answer } => {
                        format!("Answer: {correct_answer}")
                    }
                },
            })
            .collect()
    }

    pub fn delete_target_label(&self) -> Option<String> {
        let id = self.delete_target.as_ref()?;
        Some(
            self.store
                .get(id)
                .map(|q| q.content.clone())
                .unwrap_or_else(|| id.clone()),
        )
    }
}
