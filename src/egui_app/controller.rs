//! Application controller: owns UI state and bridges it to the prediction client.

mod jobs;
mod prediction;
mod server;

use crate::config::{self, Settings};
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::StatusTone;
use crate::predictor::PredictorClient;
use jobs::{ControllerJobs, JobMessage};

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    settings: Settings,
    client: PredictorClient,
    jobs: ControllerJobs,
}

impl EguiController {
    pub fn new(settings: Settings) -> Self {
        let client = PredictorClient::new(&settings.server_url, settings.request_timeout());
        let mut ui = UiState::default();
        ui.server.url_input = settings.server_url.clone();
        Self {
            ui,
            settings,
            client,
            jobs: ControllerJobs::new(),
        }
    }

    /// Load persisted settings and point the client at the configured server.
    pub fn load_configuration(&mut self) -> Result<(), config::ConfigError> {
        let settings = config::load_or_default()?;
        self.apply_settings(settings);
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.tone = tone;
    }

    /// Apply every finished background job. Returns true if anything changed.
    pub fn poll_background_jobs(&mut self) -> bool {
        let mut changed = false;
        while let Some(message) = self.jobs.try_next_message() {
            self.handle_job_message(message);
            changed = true;
        }
        changed
    }

    /// True while any background request is outstanding.
    pub fn has_pending_jobs(&self) -> bool {
        self.ui.submission.is_busy() || self.jobs.health_check_in_progress()
    }

    fn handle_job_message(&mut self, message: JobMessage) {
        match message {
            JobMessage::PredictionFinished(message) => self.handle_prediction_finished(message),
            JobMessage::HealthChecked(message) => self.handle_health_checked(message),
        }
    }

    fn apply_settings(&mut self, settings: Settings) {
        self.client = PredictorClient::new(&settings.server_url, settings.request_timeout());
        self.ui.server.url_input = settings.server_url.clone();
        self.settings = settings;
    }

    /// Block until one background job finishes, then apply it.
    #[cfg(test)]
    fn wait_for_job(&mut self) {
        let message = self.jobs.next_message_blocking(std::time::Duration::from_secs(10));
        self.handle_job_message(message);
    }
}
