use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::views::search_bar;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() * 0.3).max(40.0));

        ui.label(
            egui::RichText::new("Approach the info you need.")
                .size(32.0)
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(30.0);

        let width = ui.available_width().min(640.0);
        ui.allocate_ui(egui::vec2(width, 80.0), |ui| search_bar(ui, state, width));

        ui.add_space(60.0);
        ui.colored_label(colors::TEXT_SECONDARY, "factual by Bonefide");
    });
}
