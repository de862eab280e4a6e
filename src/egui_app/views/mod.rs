use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::{AppView, HOME_PATH, PROFILE_PATH};

pub mod home_view;
pub mod modal_view;
pub mod profile_view;
pub mod results_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let brand = ui.add(
                    egui::Label::new(
                        egui::RichText::new("factual").size(20.0).strong().color(colors::TEXT_LIGHT),
                    )
                    .sense(egui::Sense::click()),
                );
                if brand.clicked() {
                    state.navigate(HOME_PATH);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !state.auth_state.is_logged_in() {
                        if ui.button("👤 Login").clicked() {
                            state.modal.open_login();
                        }
                        return;
                    }

                    ui.menu_button("👤", |ui| {
                        if ui.button("Profile").clicked() {
                            state.navigate(PROFILE_PATH);
                            ui.close();
                        }
                        if ui.button("Logout").clicked() {
                            state.logout();
                            ui.close();
                        }
                    });
                    if let Some(user) = &state.auth_state.user {
                        ui.colored_label(colors::TEXT_SECONDARY, &user.email);
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::page_frame())
        .show(ctx, |ui| {
            render_notice(ui, state);
            match state.current_view {
                AppView::Home => home_view::render(ui, state),
                AppView::SearchResults(_) => results_view::render(ui, state),
                AppView::Profile => profile_view::render(ui, state),
            }
        });

    modal_view::render(ctx, state);
    profile_view::render_account_dialog(ctx, state);
}

fn render_notice(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(notice) = state.notice.clone() else {
        return;
    };
    ui.horizontal(|ui| {
        ui.colored_label(colors::INFO, notice);
        if ui.small_button("✕").clicked() {
            state.notice = None;
        }
    });
    ui.add_space(8.0);
}

/// Search input with its submit button, shared by home and results.
pub(crate) fn search_bar(ui: &mut egui::Ui, state: &mut AppState, width: f32) {
    ui.horizontal(|ui| {
        let input = ui.add_sized(
            [width - 60.0, 36.0],
            egui::TextEdit::singleline(&mut state.search.query)
                .hint_text("Input URL or fact to check")
                .font(egui::TextStyle::Heading),
        );
        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if state.search.loading {
            ui.spinner();
        } else if ui.add_sized([48.0, 36.0], egui::Button::new("🔍").fill(colors::ACCENT)).clicked()
            || submitted
        {
            state.submit_search();
        }
    });

    if let Some(error) = &state.search.error {
        ui.colored_label(colors::ERROR, error);
    }
}
