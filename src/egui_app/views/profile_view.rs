use eframe::egui;

use crate::egui_app::state::{AccountDialog, AppState};
use crate::egui_app::theme::colors;
use crate::egui_app::views::modal_view::employment_select;
use crate::shared::profile::EmploymentType;

const FIELD_WIDTH: f32 = 320.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if !state.auth_state.is_logged_in() {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.colored_label(colors::TEXT_SECONDARY, "Log in to manage your profile.");
            if ui.button("Login").clicked() {
                state.modal.open_login();
            }
        });
        return;
    }

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("👤").size(64.0).color(colors::TEXT_LIGHT));
    });
    ui.add_space(16.0);

    let email = state
        .auth_state
        .user
        .as_ref()
        .map(|user| user.email.clone())
        .unwrap_or_default();

    egui::Grid::new("profile_grid")
        .num_columns(2)
        .spacing([16.0, 10.0])
        .show(ui, |ui| {
            ui.colored_label(colors::TEXT_SECONDARY, "Email address");
            ui.colored_label(colors::TEXT_LIGHT, email);
            ui.end_row();

            ui.colored_label(colors::TEXT_SECONDARY, "Full name");
            ui.add(egui::TextEdit::singleline(&mut state.profile_form.full_name).desired_width(FIELD_WIDTH));
            ui.end_row();

            ui.colored_label(colors::TEXT_SECONDARY, "Are you a journalist?");
            let mut is_journalist = state.profile_form.is_journalist;
            ui.horizontal(|ui| {
                ui.radio_value(&mut is_journalist, true, "Yes");
                ui.radio_value(&mut is_journalist, false, "No");
            });
            state.profile_form.set_journalist(is_journalist);
            ui.end_row();

            if state.profile_form.is_journalist {
                ui.colored_label(colors::TEXT_SECONDARY, "Employment");
                employment_select(ui, "profile_employment", &mut state.profile_form.employment_type);
                ui.end_row();

                if state.profile_form.employment_type == Some(EmploymentType::Employed) {
                    ui.colored_label(colors::TEXT_SECONDARY, "Name of organization");
                    ui.add(
                        egui::TextEdit::singleline(&mut state.profile_form.organization_name)
                            .desired_width(FIELD_WIDTH),
                    );
                    ui.end_row();
                }
            }
        });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        let saving = state.profile_form.saving;
        if ui
            .add_enabled(!saving, egui::Button::new("Update Profile").fill(colors::ACCENT))
            .clicked()
        {
            state.submit_profile_update();
        }
        if saving {
            ui.spinner();
        }
    });
    if let Some(status) = &state.profile_form.status {
        ui.colored_label(colors::INFO, status);
    }

    ui.add_space(20.0);
    ui.horizontal(|ui| {
        if ui.button("Change email").clicked() {
            state.account_dialog = AccountDialog::change_email();
        }
        if ui.button("Change password").clicked() {
            state.account_dialog = AccountDialog::change_password();
        }
    });

    if let Some(refreshed) = state.auth_state.last_refreshed {
        ui.add_space(20.0);
        ui.colored_label(
            colors::TEXT_SECONDARY,
            format!("Session refreshed at {}", refreshed.format("%H:%M:%S UTC")),
        );
    }
}

/// Change-email and change-password dialogs.
pub fn render_account_dialog(ctx: &egui::Context, state: &mut AppState) {
    let title = match &state.account_dialog {
        AccountDialog::None => return,
        AccountDialog::ChangeEmail { .. } => "Change Email",
        AccountDialog::ChangePassword { .. } => "Change Password",
    };
    let hint = state.account_dialog.validation();
    let can_submit = state.account_dialog.can_submit();
    let pending = state.account_dialog.is_pending();

    let mut open = true;
    let mut close = false;
    let mut submit = false;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            match &mut state.account_dialog {
                AccountDialog::None => {}
                AccountDialog::ChangeEmail { new_email, error, .. } => {
                    ui.add(
                        egui::TextEdit::singleline(new_email)
                            .hint_text("new email address")
                            .desired_width(FIELD_WIDTH),
                    );
                    if let Some(error) = error {
                        ui.colored_label(colors::ERROR, error.as_str());
                    }
                }
                AccountDialog::ChangePassword {
                    old_password,
                    new_password,
                    confirmation,
                    error,
                    ..
                } => {
                    for (value, hint_text) in [
                        (old_password, "Old password"),
                        (new_password, "New password"),
                        (confirmation, "Retype password"),
                    ] {
                        ui.add(
                            egui::TextEdit::singleline(value)
                                .password(true)
                                .hint_text(hint_text)
                                .desired_width(FIELD_WIDTH),
                        );
                    }
                    if let Some(error) = error {
                        ui.colored_label(colors::ERROR, error.as_str());
                    }
                }
            }

            if let Some(hint) = &hint {
                ui.colored_label(colors::TEXT_SECONDARY, hint.to_string());
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                close = ui.button("Close").clicked();
                submit = ui.add_enabled(can_submit, egui::Button::new("Update")).clicked();
                if pending {
                    ui.spinner();
                }
            });
        });

    if !open || close {
        state.account_dialog = AccountDialog::None;
    } else if submit {
        state.submit_account_dialog();
    }
}
