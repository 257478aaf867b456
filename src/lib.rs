//! Desktop client for a housing price prediction service.
/// Application directory resolution.
pub mod app_dirs;
/// Persistent client settings.
pub mod config;
/// egui front end.
pub mod egui_app;
/// HTTP agent and response helpers.
pub mod http_client;
/// Tracing setup.
pub mod logging;
/// Housing features and the prediction service client.
pub mod predictor;

#[cfg(test)]
pub(crate) mod mock_service;
