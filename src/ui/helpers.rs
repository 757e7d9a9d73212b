// src/ui/helpers.rs
use egui::{Button, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Two equally sized buttons on one row, right-aligned inside `panel_width`.
/// Returns (left clicked, right clicked). The right one is the action button
/// and is greyed out when `right_enabled` is false.
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
    right_enabled: bool,
) -> (bool, bool) {
    let btn_w = (panel_width / 4.0).max(90.0);
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space((panel_width - 2.0 * btn_w - 8.0).max(0.0));
        clicked_left = ui
            .add_sized([btn_w, 32.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_enabled(
                right_enabled,
                Button::new(right_label).min_size(Vec2::new(btn_w, 32.0)),
            )
            .clicked();
    });
    (clicked_left, clicked_right)
}
