use crate::app::QuestionAdmin;
use egui::{Color32, Context, RichText, Spinner, Visuals};
use log::warn;

pub fn top_panel(app: &mut QuestionAdmin, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let busy = app.is_busy();
            if ui
                .add_enabled(!busy, egui::Button::new("🔄 Reload"))
                .clicked()
            {
                if let Err(err) = app.refresh() {
                    warn!("Reload not started: {err}");
                }
            }

            if busy {
                ui.add(Spinner::new());
            }

            if !app.message.is_empty() {
                let color = if app.message.starts_with('❌') {
                    Color32::LIGHT_RED
                } else if app.message.starts_with('⚠') {
                    Color32::YELLOW
                } else {
                    ui.visuals().text_color()
                };
                ui.label(RichText::new(&app.message).color(color));
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light mode").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            },
        );
    });
}
