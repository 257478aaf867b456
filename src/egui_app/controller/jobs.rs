use crate::egui_app::state::RequestId;
use crate::predictor::{
    HousingFeatures, ModelInfo, PredictError, PredictionResult, PredictorClient, ServiceHealth,
};
use std::{
    sync::mpsc::{self, Receiver, Sender, TryRecvError},
    thread,
};

pub(crate) enum JobMessage {
    PredictionFinished(PredictionJobResult),
    HealthChecked(HealthCheckResult),
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) request: RequestId,
    pub(crate) features: HousingFeatures,
}

#[derive(Debug)]
pub(crate) struct PredictionJobResult {
    pub(crate) request: RequestId,
    pub(crate) result: Result<PredictionResult, PredictError>,
}

#[derive(Debug)]
pub(crate) struct HealthCheckResult {
    pub(crate) server_url: String,
    pub(crate) result: Result<ServiceHealth, PredictError>,
    pub(crate) model_info: Option<ModelInfo>,
}

/// Worker threads for network calls and the channel their results come back on.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    health_check_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = mpsc::channel();
        Self {
            message_tx,
            message_rx,
            health_check_in_progress: false,
        }
    }

    pub(super) fn try_next_message(&self) -> Option<JobMessage> {
        match self.message_rx.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty) => None,
            // The controller holds a sender, so the channel never disconnects.
            Err(TryRecvError::Disconnected) => None,
        }
    }

    #[cfg(test)]
    pub(super) fn next_message_blocking(&self, timeout: std::time::Duration) -> JobMessage {
        self.message_rx
            .recv_timeout(timeout)
            .expect("background job did not finish in time")
    }

    /// Run one prediction on a worker thread. Each call is independent; callers
    /// decide whether a result is still wanted by its request id.
    pub(super) fn begin_prediction(&self, client: &PredictorClient, job: PredictionJob) {
        let client = client.clone();
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = client.predict(&job.features);
            let _ = tx.send(JobMessage::PredictionFinished(PredictionJobResult {
                request: job.request,
                result,
            }));
        });
    }

    pub(super) fn health_check_in_progress(&self) -> bool {
        self.health_check_in_progress
    }

    /// Check health and, when a model is loaded, fetch its description too.
    pub(super) fn begin_health_check(&mut self, client: &PredictorClient) -> bool {
        if self.health_check_in_progress {
            return false;
        }
        self.health_check_in_progress = true;
        let client = client.clone();
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = client.check_health();
            let model_info = match &result {
                Ok(health) if health.model_loaded => client
                    .model_info()
                    .inspect_err(|err| tracing::warn!("Model info unavailable: {err}"))
                    .ok(),
                _ => None,
            };
            let _ = tx.send(JobMessage::HealthChecked(HealthCheckResult {
                server_url: client.server_url().to_string(),
                result,
                model_info,
            }));
        });
        true
    }

    pub(super) fn clear_health_check(&mut self) {
        self.health_check_in_progress = false;
    }
}
