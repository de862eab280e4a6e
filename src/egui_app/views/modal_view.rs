use eframe::egui;

use crate::egui_app::modal::{LoginForm, Modal, RegisterStep};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::shared::profile::{EmploymentType, RegistrationDraft};

const FIELD_WIDTH: f32 = 300.0;

/// Button presses collected while the dialog borrows the form.
enum ModalAction {
    Login,
    OpenRegistration,
    Next,
    Previous,
    Register,
    Dismiss,
}

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.modal.is_open() {
        return;
    }

    let title = match state.modal.modal() {
        Modal::Closed => return,
        Modal::LoginOpen(_) => "Login",
        Modal::Register { .. } => "Register",
        Modal::NotActiveNotice => "Account pending",
    };
    let feedback = state.modal.feedback().map(str::to_string);
    let pending = state.modal.is_pending();

    let mut open = true;
    let mut action = None;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            action = match state.modal.modal_mut() {
                Modal::Closed => None,
                Modal::LoginOpen(form) => login_form(ui, form, pending),
                Modal::Register { step: RegisterStep::One, draft } => credentials_step(ui, draft),
                Modal::Register { step: RegisterStep::Two, draft } => details_step(ui, draft, pending),
                Modal::NotActiveNotice => {
                    ui.label("You are already registered on our site.");
                    ui.label("Your account activation is currently under review.");
                    ui.add_space(8.0);
                    ui.button("Close").clicked().then_some(ModalAction::Dismiss)
                }
            };

            if let Some(message) = &feedback {
                ui.add_space(6.0);
                ui.colored_label(colors::ERROR, message);
            }
        });

    if !open {
        action = Some(ModalAction::Dismiss);
    }
    match action {
        Some(ModalAction::Login) => state.submit_login(),
        Some(ModalAction::OpenRegistration) => {
            state.modal.open_registration();
        }
        Some(ModalAction::Next) => {
            state.modal.advance();
        }
        Some(ModalAction::Previous) => {
            state.modal.back();
        }
        Some(ModalAction::Register) => state.submit_registration(),
        Some(ModalAction::Dismiss) => state.modal.dismiss(),
        None => {}
    }
}

fn field(ui: &mut egui::Ui, label: &str, value: &mut String, password: bool, invalid: bool) {
    let color = if invalid { colors::ERROR } else { colors::TEXT_SECONDARY };
    ui.colored_label(color, label);
    ui.add_sized(
        [FIELD_WIDTH, 26.0],
        egui::TextEdit::singleline(value).password(password),
    );
    ui.add_space(6.0);
}

fn login_form(ui: &mut egui::Ui, form: &mut LoginForm, pending: bool) -> Option<ModalAction> {
    field(ui, "Email", &mut form.email, false, form.email_invalid);
    field(ui, "Password", &mut form.password, true, form.password_invalid);

    let mut action = None;
    ui.horizontal(|ui| {
        if ui.add_enabled(!pending, egui::Button::new("Login")).clicked() {
            action = Some(ModalAction::Login);
        }
        if ui.button("Register").clicked() {
            action = Some(ModalAction::OpenRegistration);
        }
        if pending {
            ui.spinner();
        }
    });
    action
}

fn credentials_step(ui: &mut egui::Ui, draft: &mut RegistrationDraft) -> Option<ModalAction> {
    field(ui, "Email", &mut draft.email, false, false);
    field(ui, "Password", &mut draft.password, true, false);
    field(ui, "Confirm Password", &mut draft.confirmation_password, true, false);

    ui.button("Next").clicked().then_some(ModalAction::Next)
}

fn details_step(ui: &mut egui::Ui, draft: &mut RegistrationDraft, pending: bool) -> Option<ModalAction> {
    field(ui, "Full Name", &mut draft.full_name, false, false);

    ui.colored_label(colors::TEXT_SECONDARY, "Are you a journalist?");
    ui.horizontal(|ui| {
        ui.radio_value(&mut draft.is_journalist, true, "Yes");
        ui.radio_value(&mut draft.is_journalist, false, "No");
    });

    if draft.is_journalist {
        ui.colored_label(
            colors::TEXT_SECONDARY,
            "Freelance or employed in the private/public sector?",
        );
        employment_select(ui, "register_employment", &mut draft.employment_type);

        if draft.employment_type == Some(EmploymentType::Employed) {
            let organization = draft.organization_name.get_or_insert_with(String::new);
            field(ui, "Name of organization", organization, false, false);
        }
    }

    ui.add_space(8.0);
    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("Previous").clicked() {
            action = Some(ModalAction::Previous);
        }
        if ui.add_enabled(!pending, egui::Button::new("Register")).clicked() {
            action = Some(ModalAction::Register);
        }
        if pending {
            ui.spinner();
        }
    });
    action
}

/// Employment type picker; an unset value displays as freelance.
pub(crate) fn employment_select(ui: &mut egui::Ui, id: &str, value: &mut Option<EmploymentType>) {
    let current = value.unwrap_or_default();
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.label())
        .show_ui(ui, |ui| {
            for option in [EmploymentType::Freelance, EmploymentType::Employed] {
                if ui.selectable_label(current == option, option.label()).clicked() {
                    *value = Some(option);
                }
            }
        });
}
