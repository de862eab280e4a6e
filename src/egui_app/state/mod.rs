use std::future::Future;
use std::sync::mpsc::{channel, Receiver, Sender};

use tokio::runtime::Handle;

use crate::egui_app::api::{ApiClient, ApiError};
use crate::egui_app::auth::AuthState;
use crate::egui_app::config::Config;
use crate::egui_app::modal::ModalController;
use crate::egui_app::refresh::RefreshTimer;
use crate::egui_app::session::{Session, SessionStore};
use crate::egui_app::types::AppView;
use crate::shared::profile::ProfileResponse;
use crate::shared::search::SearchResult;

mod account;

pub use account::{AccountDialog, ProfileForm};

const REGISTRATION_NOTICE: &str =
    "Registration received. Your account will be activated once it has been reviewed.";

/// Result of a background request, delivered to the UI thread.
///
/// Session-bound results carry the [`AuthState::generation`] they were
/// started under.
#[derive(Debug)]
pub enum AppEvent {
    SearchFinished(Result<Vec<SearchResult>, ApiError>),
    LoginFinished(Result<Session, ApiError>),
    RegisterFinished(Result<(), ApiError>),
    ProfileLoaded {
        generation: u64,
        result: Result<ProfileResponse, ApiError>,
    },
    RefreshDue,
    Refreshed {
        generation: u64,
        result: Result<Session, ApiError>,
    },
    ProfileUpdated(Result<(), ApiError>),
    EmailUpdated(Result<(), ApiError>),
    PasswordChanged(Result<(), ApiError>),
}

/// Search bar state, shared by the home and results views.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub query: String,
    pub loading: bool,
    pub error: Option<String>,
}

/// Central application state shared across egui views.
///
/// Requests run on the tokio runtime behind `runtime`; their results come
/// back as [`AppEvent`]s and are applied by [`AppState::poll_events`] on
/// the UI thread, so every field is only ever touched from one thread.
pub struct AppState {
    pub config: Config,
    client: ApiClient,
    store: Box<dyn SessionStore>,
    runtime: Handle,
    events_tx: Sender<AppEvent>,
    events_rx: Receiver<AppEvent>,
    refresh_timer: Option<RefreshTimer>,
    pub auth_state: AuthState,
    pub modal: ModalController,
    pub current_view: AppView,
    pub search: SearchForm,
    pub profile_form: ProfileForm,
    pub account_dialog: AccountDialog,
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(config: Config, store: Box<dyn SessionStore>, runtime: Handle) -> Result<Self, ApiError> {
        let client = ApiClient::new(config.clone())?;
        let (events_tx, events_rx) = channel();
        tracing::debug!(server = config.server_url(), "AppState initialized");

        Ok(Self {
            config,
            client,
            store,
            runtime,
            events_tx,
            events_rx,
            refresh_timer: None,
            auth_state: AuthState::new(),
            modal: ModalController::new(),
            current_view: AppView::Home,
            search: SearchForm::default(),
            profile_form: ProfileForm::default(),
            account_dialog: AccountDialog::None,
            notice: None,
        })
    }

    /// Restore a persisted session and, if there is one, load the profile
    /// and start the refresh timer.
    pub fn start(&mut self) {
        if self.auth_state.restore(self.store.as_ref()) {
            self.fetch_profile();
            self.start_refresh_timer();
        }
    }

    /// Apply every event that has arrived since the last frame. Returns
    /// how many were applied.
    pub fn poll_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SearchFinished(result) => {
                self.search.loading = false;
                match result {
                    Ok(results) => {
                        tracing::info!(count = results.len(), "search finished");
                        self.search.error = None;
                        self.current_view = AppView::search_results(results);
                    }
                    Err(e) => {
                        tracing::error!("search failed: {}", e);
                        self.search.error = Some("Search failed. Please try again.".to_string());
                    }
                }
            }
            AppEvent::LoginFinished(result) => {
                self.auth_state.loading = false;
                match result {
                    Ok(session) => {
                        if let Err(e) = self.auth_state.establish(session, self.store.as_ref()) {
                            tracing::error!("failed to persist session: {}", e);
                        }
                        self.modal.login_succeeded();
                        self.fetch_profile();
                        self.start_refresh_timer();
                    }
                    Err(e) => {
                        tracing::warn!("login rejected: {}", e);
                        self.modal.login_failed(&e);
                    }
                }
            }
            AppEvent::RegisterFinished(result) => match result {
                Ok(()) => {
                    tracing::info!("registration successful");
                    self.modal.registration_succeeded();
                    self.notice = Some(REGISTRATION_NOTICE.to_string());
                }
                Err(e) => {
                    tracing::error!("registration failed: {}", e);
                    self.modal.registration_failed(&e);
                }
            },
            AppEvent::ProfileLoaded { generation, result } => match result {
                Ok(response) => {
                    let edited = self.profile_form.has_edits(self.auth_state.profile.as_ref());
                    if !self.auth_state.apply_profile(generation, response) {
                        return;
                    }
                    // Unsaved edits on the profile page win over a re-fetch.
                    if let (false, Some(profile)) = (edited, &self.auth_state.profile) {
                        self.profile_form.reseed(profile);
                    }
                }
                // The session is kept even when the profile cannot be loaded.
                Err(e) => tracing::warn!("profile fetch failed: {}", e),
            },
            AppEvent::RefreshDue => self.refresh_session(),
            AppEvent::Refreshed { generation, result } => match result {
                Ok(session) => {
                    if let Err(e) = self.auth_state.apply_refresh(generation, session, self.store.as_ref()) {
                        tracing::error!("failed to persist refreshed session: {}", e);
                    }
                }
                // A failed refresh does not end the session.
                Err(e) => tracing::warn!("token refresh failed: {}", e),
            },
            AppEvent::ProfileUpdated(result) => {
                self.profile_form.saving = false;
                match result {
                    Ok(()) => {
                        self.profile_form.status = Some("Profile updated.".to_string());
                        self.fetch_profile();
                    }
                    Err(e) => {
                        tracing::error!("profile update failed: {}", e);
                        self.profile_form.status = Some(format!("Failed to update profile: {}", e));
                    }
                }
            }
            AppEvent::EmailUpdated(result) => match result {
                Ok(()) => {
                    self.account_dialog = AccountDialog::None;
                    self.notice = Some("Email updated.".to_string());
                    self.fetch_profile();
                }
                Err(e) => {
                    tracing::error!("email update failed: {}", e);
                    self.account_dialog.set_error(format!("Failed to update email: {}", e));
                }
            },
            AppEvent::PasswordChanged(result) => match result {
                Ok(()) => {
                    self.account_dialog = AccountDialog::None;
                    self.notice = Some("Password updated.".to_string());
                }
                Err(e) => {
                    tracing::error!("password change failed: {}", e);
                    self.account_dialog.set_error(format!("Failed to update password: {}", e));
                }
            },
        }
    }

    pub fn submit_search(&mut self) {
        let query = self.search.query.trim().to_string();
        if query.is_empty() {
            self.search.error = Some("Enter a URL or a fact to check.".to_string());
            return;
        }
        if self.search.loading {
            return;
        }
        self.search.loading = true;
        self.search.error = None;

        let client = self.client.clone();
        self.dispatch(async move { AppEvent::SearchFinished(client.search(&query).await) });
    }

    pub fn submit_login(&mut self) {
        let Some((username, password)) = self.modal.login_request() else {
            return;
        };
        self.auth_state.loading = true;
        let client = self.client.clone();
        self.dispatch(async move { AppEvent::LoginFinished(client.login(&username, &password).await) });
    }

    pub fn submit_registration(&mut self) {
        let Some(request) = self.modal.registration_request() else {
            return;
        };
        let client = self.client.clone();
        self.dispatch(async move { AppEvent::RegisterFinished(client.register(&request).await) });
    }

    pub fn fetch_profile(&mut self) {
        let client = self.client.clone();
        let session = self.auth_state.session().cloned();
        let generation = self.auth_state.generation();
        self.dispatch(async move {
            let result = client.get_profile(session.as_ref()).await;
            AppEvent::ProfileLoaded { generation, result }
        });
    }

    /// Exchange the current refresh token. Without a session there is
    /// nothing to refresh.
    pub fn refresh_session(&mut self) {
        let Some(session) = self.auth_state.session().cloned() else {
            return;
        };
        let client = self.client.clone();
        let generation = self.auth_state.generation();
        self.dispatch(async move {
            let result = client.refresh(&session).await;
            AppEvent::Refreshed { generation, result }
        });
    }

    pub fn submit_profile_update(&mut self) {
        if self.profile_form.saving {
            return;
        }
        let update = self.profile_form.to_update();
        if update.full_name.is_empty() {
            self.profile_form.status = Some("Full name is required.".to_string());
            return;
        }
        self.profile_form.saving = true;
        self.profile_form.status = None;

        let client = self.client.clone();
        let session = self.auth_state.session().cloned();
        self.dispatch(async move {
            AppEvent::ProfileUpdated(client.update_profile(session.as_ref(), &update).await)
        });
    }

    pub fn submit_account_dialog(&mut self) {
        if self.account_dialog.is_pending() {
            return;
        }
        if let Some(error) = self.account_dialog.validation() {
            self.account_dialog.set_error(error.to_string());
            return;
        }
        let client = self.client.clone();
        let session = self.auth_state.session().cloned();
        self.account_dialog.set_pending(true);
        match &self.account_dialog {
            AccountDialog::None => {}
            AccountDialog::ChangeEmail { new_email, .. } => {
                let email = new_email.trim().to_string();
                self.dispatch(async move {
                    AppEvent::EmailUpdated(client.update_email(session.as_ref(), &email).await)
                });
            }
            AccountDialog::ChangePassword { old_password, new_password, .. } => {
                let old_password = old_password.clone();
                let new_password = new_password.clone();
                self.dispatch(async move {
                    AppEvent::PasswordChanged(
                        client
                            .change_password(session.as_ref(), &old_password, &new_password)
                            .await,
                    )
                });
            }
        }
    }

    /// Drop the session and reload the view.
    pub fn logout(&mut self) {
        self.refresh_timer = None;
        if let Err(e) = self.auth_state.logout(self.store.as_ref()) {
            tracing::error!("failed to clear persisted session: {}", e);
        }
        self.reload();
    }

    /// Reset every transient view state and return to the landing page.
    pub fn reload(&mut self) {
        self.current_view = AppView::Home;
        self.search = SearchForm::default();
        self.profile_form = self
            .auth_state
            .profile
            .as_ref()
            .map(ProfileForm::from_profile)
            .unwrap_or_default();
        self.account_dialog = AccountDialog::None;
        self.modal.dismiss();
        self.notice = None;
    }

    pub fn navigate(&mut self, path: &str) {
        self.current_view = AppView::from_path(path);
        if self.current_view == AppView::Profile {
            if let Some(profile) = &self.auth_state.profile {
                self.profile_form = ProfileForm::from_profile(profile);
            }
        }
    }

    pub fn refresh_timer_running(&self) -> bool {
        self.refresh_timer.as_ref().is_some_and(RefreshTimer::is_running)
    }

    fn start_refresh_timer(&mut self) {
        let events = self.events_tx.clone();
        // Replacing the old timer aborts it.
        self.refresh_timer = Some(RefreshTimer::start(
            &self.runtime,
            self.config.refresh_interval(),
            move || events.send(AppEvent::RefreshDue).is_ok(),
        ));
    }

    fn dispatch<F>(&self, request: F)
    where
        F: Future<Output = AppEvent> + Send + 'static,
    {
        let events = self.events_tx.clone();
        self.runtime.spawn(async move {
            // The receiver only goes away with the app itself.
            let _ = events.send(request.await);
        });
    }
}
