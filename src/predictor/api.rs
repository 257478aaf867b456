//! Client for the remote price prediction service.

use std::time::Duration;

use serde::{Deserialize, de::DeserializeOwned};

use super::features::{Field, HousingFeatures};
use crate::http_client;

/// Path of the prediction endpoint, relative to the configured server URL.
pub const PREDICT_PATH: &str = "/api/predict";
/// Path of the service health endpoint.
pub const HEALTH_PATH: &str = "/api/health";
/// Path of the loaded model's description.
pub const MODEL_INFO_PATH: &str = "/api/model-info";

const MAX_PREDICTION_RESPONSE_BYTES: usize = 1024 * 1024;
const MAX_INFO_RESPONSE_BYTES: usize = 64 * 1024;

/// Price estimate returned by the service, in thousands of dollars.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub predicted_price: Option<f64>,
}

/// Health report from the service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub model_type: Option<String>,
}

/// Description of the model the service has loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub model_type: Option<String>,
    #[serde(default)]
    pub input_shape: Option<String>,
    #[serde(default)]
    pub features_expected: Option<usize>,
    #[serde(default)]
    pub feature_names: Vec<String>,
}

impl ModelInfo {
    /// Feature names the model expects that this client never sends.
    pub fn unknown_features(&self) -> Vec<&str> {
        self.feature_names
            .iter()
            .map(String::as_str)
            .filter(|name| name.parse::<Field>().is_err())
            .collect()
    }
}

/// Why a call to the prediction service produced no usable result.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PredictError {
    /// No response was received, or its body could not be read.
    #[error("{0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("API Error: {code} - {body}")]
    Status { code: u16, body: String },
    /// The service answered 2xx but did not advertise a JSON body.
    #[error("API returned non-JSON response")]
    NonJson,
    /// The body was advertised as JSON but did not have the expected shape.
    #[error("Invalid prediction response: {0}")]
    Decode(String),
}

/// Blocking client bound to one server URL. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Clone, Debug)]
pub struct PredictorClient {
    agent: ureq::Agent,
    server_url: String,
}

impl PredictorClient {
    pub fn new(server_url: &str, timeout: Option<Duration>) -> Self {
        Self {
            agent: http_client::build_agent(timeout),
            server_url: normalize_server_url(server_url),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.server_url)
    }

    /// POST the features as JSON and decode the estimate.
    pub fn predict(&self, features: &HousingFeatures) -> Result<PredictionResult, PredictError> {
        let url = self.endpoint(PREDICT_PATH);
        tracing::info!("Requesting price prediction from {url}");
        tracing::debug!(?features, "Prediction request");
        let request = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json");
        let response = into_success(request.send_json(features), MAX_PREDICTION_RESPONSE_BYTES)?;
        let body = read_json_body(response, MAX_PREDICTION_RESPONSE_BYTES)?;
        let result = parse_prediction(&body)?;
        tracing::info!(predicted_price = ?result.predicted_price, "Prediction received");
        Ok(result)
    }

    /// GET the service health report.
    pub fn check_health(&self) -> Result<ServiceHealth, PredictError> {
        self.get_json(HEALTH_PATH)
    }

    /// GET the description of the loaded model.
    pub fn model_info(&self) -> Result<ModelInfo, PredictError> {
        self.get_json(MODEL_INFO_PATH)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, PredictError> {
        let url = self.endpoint(path);
        tracing::debug!("GET {url}");
        let response = into_success(
            self.agent
                .get(&url)
                .set("Accept", "application/json")
                .call(),
            MAX_INFO_RESPONSE_BYTES,
        )?;
        let body = read_json_body(response, MAX_INFO_RESPONSE_BYTES)?;
        serde_json::from_str(body.trim()).map_err(|err| PredictError::Decode(err.to_string()))
    }
}

/// Trim whitespace and trailing slashes so endpoint paths join cleanly.
pub fn normalize_server_url(server_url: &str) -> String {
    server_url.trim().trim_end_matches('/').to_string()
}

fn into_success(
    outcome: Result<ureq::Response, ureq::Error>,
    max_bytes: usize,
) -> Result<ureq::Response, PredictError> {
    let response = match outcome {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            return Err(status_error(code, response, max_bytes));
        }
        Err(ureq::Error::Transport(err)) => {
            tracing::warn!("Prediction service unreachable: {err}");
            return Err(PredictError::Transport(err.to_string()));
        }
    };
    let code = response.status();
    if (200..300).contains(&code) {
        Ok(response)
    } else {
        Err(status_error(code, response, max_bytes))
    }
}

fn status_error(code: u16, response: ureq::Response, max_bytes: usize) -> PredictError {
    let body = http_client::read_response_text(response, max_bytes).unwrap_or_else(|err| err);
    tracing::error!("API Error: {code} {body}");
    PredictError::Status { code, body }
}

fn read_json_body(response: ureq::Response, max_bytes: usize) -> Result<String, PredictError> {
    let is_json = response
        .header("Content-Type")
        .is_some_and(is_json_content_type);
    let body =
        http_client::read_response_text(response, max_bytes).map_err(PredictError::Transport)?;
    if !is_json {
        tracing::warn!("Non-JSON response: {body}");
        return Err(PredictError::NonJson);
    }
    Ok(body)
}

fn is_json_content_type(value: &str) -> bool {
    value.to_ascii_lowercase().contains("application/json")
}

fn parse_prediction(body: &str) -> Result<PredictionResult, PredictError> {
    serde_json::from_str(body.trim()).map_err(|err| {
        tracing::warn!("Undecodable prediction body: {body}");
        PredictError::Decode(err.to_string())
    })
}
