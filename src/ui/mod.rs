mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuestionAdmin;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for QuestionAdmin {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll();

        top_panel(self, ctx);
        bottom_panel(ctx);

        views::questions::ui_question_list(self, ctx);

        if self.session.is_some() {
            views::form::ui_question_form(self, ctx);
        }
        if self.delete_target.is_some() {
            views::confirm_delete::ui_confirm_delete(self, ctx);
        }

        // Results arrive from a worker thread; keep polling until they do.
        if self.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
