use crate::app::QuestionAdmin;
use crate::ui::helpers::two_button_row;
use egui::{Align2, Context, Vec2, Window};
use log::warn;

pub fn ui_confirm_delete(app: &mut QuestionAdmin, ctx: &Context) {
    let label = app.delete_target_label().unwrap_or_default();
    let busy = app.is_busy();
    let mut cancel = false;
    let mut confirm = false;

    Window::new("Delete question")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Are you sure you want to delete this question? This cannot be undone.");
            ui.add_space(4.0);
            ui.label(egui::RichText::new(&label).italics());
            ui.add_space(12.0);
            (cancel, confirm) = two_button_row(ui, 360.0, "Cancel", "🗑 Delete", !busy);
        });

    if cancel {
        app.cancel_delete();
    } else if confirm {
        if let Err(err) = app.confirm_delete() {
            warn!("Delete not started: {err}");
            app.message = format!("⚠ {err}");
        }
    }
}
