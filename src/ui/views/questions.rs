use crate::app::QuestionAdmin;
use crate::ui::helpers::big_list_button;
use egui::{Button, CentralPanel, Context, Grid, RichText, ScrollArea};
use log::warn;

pub fn ui_question_list(app: &mut QuestionAdmin, ctx: &Context) {
    let rows = app.question_rows();
    let idle = !app.is_busy() && app.session.is_none() && app.delete_target.is_none();

    let mut edit_id = None;
    let mut delete_id = None;
    let mut add = false;

    CentralPanel::default().show(ctx, |ui| {
        ui.heading("Questions");
        ui.add_space(10.0);

        let table_height = (ui.available_height() - 60.0).max(120.0);
        ScrollArea::vertical()
            .max_height(table_height)
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                if rows.is_empty() {
                    ui.label("No questions yet.");
                    return;
                }

                Grid::new("question_table")
                    .striped(true)
                    .num_columns(5)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Type").strong());
                        ui.label(RichText::new("Content").strong());
                        ui.label(RichText::new("Details").strong());
                        ui.label(RichText::new("Difficulty").strong());
                        ui.label(RichText::new("Actions").strong());
                        ui.end_row();

                        for r in &rows {
                            ui.label(r.type_label);
                            ui.label(r.content_preview(60)).on_hover_text(&r.content);
                            ui.label(&r.detail);
                            ui.label(r.difficulty_label);
                            ui.horizontal(|ui| {
                                if ui.add_enabled(idle, Button::new("✏ Edit")).clicked() {
                                    edit_id = Some(r.id.clone());
                                }
                                if ui.add_enabled(idle, Button::new("🗑 Delete")).clicked() {
                                    delete_id = Some(r.id.clone());
                                }
                            });
                            ui.end_row();
                        }
                    });
            });

        ui.add_space(10.0);
        add = big_list_button(ui, "➕ Add question", 160.0, 32.0, idle);
    });

    let result = if add {
        app.open_add()
    } else if let Some(id) = edit_id {
        app.open_edit(&id)
    } else if let Some(id) = delete_id {
        app.request_delete(&id)
    } else {
        Ok(())
    };

    if let Err(err) = result {
        warn!("Table action ignored: {err}");
        app.message = format!("⚠ {err}");
    }
}
