use crate::app::QuestionAdmin;
use crate::app::AdminError;
use crate::draft::DraftField;
use crate::model::{Difficulty, QuestionType};
use crate::ui::helpers::two_button_row;
use egui::{Align2, ComboBox, Context, Id, RichText, TextEdit, Ui, Vec2, Window};
use log::warn;

const FIELD_WIDTH: f32 = 380.0;

fn text_row(ui: &mut Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(TextEdit::singleline(value).hint_text(label).desired_width(FIELD_WIDTH));
    ui.add_space(6.0);
}

pub fn ui_question_form(app: &mut QuestionAdmin, ctx: &Context) {
    let busy = app.is_busy();
    let editable = app.form_editable();
    let Some(session) = app.session.as_mut() else {
        return;
    };

    let mut fields = Vec::new();
    let mut add_option = false;
    let mut remove_option = None;
    let mut cancel = false;
    let mut save = false;

    Window::new(session.title())
        .id(Id::new("question_form"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.set_width(FIELD_WIDTH + 20.0);

            ui.add_enabled_ui(editable, |ui| {
                let mut question_type = session.draft.question_type;
                ComboBox::from_label("Type")
                    .selected_text(question_type.label())
                    .show_ui(ui, |ui| {
                        for t in QuestionType::ALL {
                            ui.selectable_value(&mut question_type, t, t.label());
                        }
                    });
                if question_type != session.draft.question_type {
                    fields.push(DraftField::Type(question_type));
                }
                ui.add_space(6.0);

                text_row(ui, "Content", &mut session.draft.content);

                match session.draft.question_type {
                    QuestionType::MultipleChoice => {
                        ui.label(RichText::new("Options").strong());
                        for (i, opt) in session.draft.options.iter_mut().enumerate() {
                            ui.horizontal(|ui| {
                                ui.add(
                                    TextEdit::singleline(&mut opt.option)
                                        .hint_text("Option")
                                        .desired_width(FIELD_WIDTH - 140.0),
                                );
                                ui.checkbox(&mut opt.is_correct, "Correct");
                                if ui.small_button("🗑").clicked() {
                                    remove_option = Some(i);
                                }
                            });
                        }
                        if ui.button("➕ Add option").clicked() {
                            add_option = true;
                        }
                        ui.add_space(6.0);
                    }
                    QuestionType::FillInTheBlank => {
                        text_row(ui, "Correct answer", &mut session.draft.correct_answer);
                    }
                }

                text_row(ui, "Hint", &mut session.draft.hint);
                text_row(ui, "Explanation", &mut session.draft.explanation);

                let mut difficulty = session.draft.difficulty;
                ComboBox::from_label("Difficulty")
                    .selected_text(difficulty.label())
                    .show_ui(ui, |ui| {
                        for d in Difficulty::ALL {
                            ui.selectable_value(&mut difficulty, d, d.label());
                        }
                    });
                if difficulty != session.draft.difficulty {
                    fields.push(DraftField::Difficulty(difficulty));
                }
            });

            ui.add_space(12.0);
            (cancel, save) = two_button_row(ui, FIELD_WIDTH, "Cancel", "💾 Save", !busy);
        });

    if cancel {
        app.close_session();
        return;
    }

    let mut result = Ok(());
    for field in fields {
        result = result.and(app.set_field(field));
    }
    if add_option {
        result = result.and(app.add_option());
    }
    if let Some(index) = remove_option {
        result = result.and(app.remove_option(index));
    }
    if save {
        result = result.and_then(|_| app.save());
    }

    match result {
        Ok(()) | Err(AdminError::Validation(_)) => {}
        Err(err) => {
            warn!("Form action failed: {err}");
            app.message = format!("⚠ {err}");
        }
    }
}
