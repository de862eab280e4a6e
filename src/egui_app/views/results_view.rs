use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::AppView;
use crate::egui_app::views::search_bar;
use crate::shared::search::SearchResult;

const CARD_WIDTH: f32 = 280.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        let width = ui.available_width().min(640.0);
        ui.allocate_ui(egui::vec2(width, 80.0), |ui| search_bar(ui, state, width));
    });
    ui.add_space(24.0);
    ui.heading(egui::RichText::new("Results").color(colors::TEXT_LIGHT));
    ui.add_space(12.0);

    let AppView::SearchResults(results) = &state.current_view else {
        return;
    };
    if results.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, "No results to show.");
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for result in results {
                render_card(ui, result);
            }
        });
    });
}

fn render_card(ui: &mut egui::Ui, result: &SearchResult) {
    styles::card_frame().show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical_centered(|ui| {
            ui.colored_label(colors::TEXT_SECONDARY, "Match");
            match &result.match_value {
                Some(value) => {
                    let color = styles::match_color(result.percent());
                    ui.label(egui::RichText::new(value.display()).size(28.0).strong().color(color));
                    if let Some(percent) = result.percent() {
                        ui.add(
                            egui::ProgressBar::new((percent / 100.0).clamp(0.0, 1.0) as f32)
                                .fill(color)
                                .desired_width(CARD_WIDTH - 40.0),
                        );
                    }
                }
                None => {
                    ui.colored_label(colors::TEXT_SECONDARY, "No Factual Index available for this result");
                }
            }
        });

        ui.add_space(10.0);
        ui.label(egui::RichText::new("Source:").strong().color(colors::TEXT_LIGHT));
        match (result.source_url.as_deref(), result.source_host()) {
            (Some(url), Some(host)) => {
                ui.hyperlink_to(host, url);
            }
            _ => {
                ui.colored_label(colors::TEXT_SECONDARY, "No text available for this result");
            }
        }
    });
}
