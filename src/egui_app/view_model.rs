//! Pure derivations from UI state to what the result panel and submit button show.

use crate::egui_app::state::{Outcome, SubmissionState};
use crate::predictor::features::display_value;
use crate::predictor::{Field, HousingFeatures, PredictionResult};

/// Prompt shown before anything has been submitted.
pub const PLACEHOLDER_PROMPT: &str = "Enter Boston area details and click \"Get Price Prediction\" to see the estimated median home value.";
pub const SUBMIT_LABEL: &str = "Get Price Prediction";
pub const BUSY_LABEL: &str = "Predicting...";
const MISSING_PRICE: &str = "N/A";

/// What the result panel renders, in priority order: error, estimate, placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultView {
    Error(String),
    Estimate {
        price: String,
        summary: Vec<SummaryRow>,
    },
    Placeholder,
}

/// One line of the area summary shown under an estimate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
}

pub fn result_view(submission: &SubmissionState, features: &HousingFeatures) -> ResultView {
    match submission.outcome() {
        Outcome::Failed { message, .. } => ResultView::Error(message.clone()),
        Outcome::Estimate(result) => ResultView::Estimate {
            price: format_price(result),
            summary: area_summary(features),
        },
        Outcome::Empty => ResultView::Placeholder,
    }
}

/// `$23.45K` for a price of 23.45 (thousands of dollars), `N/A` when absent.
pub fn format_price(result: &PredictionResult) -> String {
    match result.predicted_price {
        Some(price) => format!("${price:.2}K"),
        None => MISSING_PRICE.to_string(),
    }
}

/// The subset of inputs echoed next to an estimate.
pub fn area_summary(features: &HousingFeatures) -> Vec<SummaryRow> {
    let value = |field: Field| display_value(features.get(field));
    vec![
        SummaryRow {
            label: "Crime Rate",
            value: value(Field::Crim),
        },
        SummaryRow {
            label: "Avg Rooms",
            value: value(Field::Rm),
        },
        SummaryRow {
            label: "Age",
            value: format!("{}%", value(Field::Age)),
        },
        SummaryRow {
            label: "Tax Rate",
            value: format!("${}", value(Field::Tax)),
        },
        SummaryRow {
            label: "PT Ratio",
            value: value(Field::Ptratio),
        },
        SummaryRow {
            label: "Lower Status",
            value: format!("{}%", value(Field::Lstat)),
        },
    ]
}

pub fn submit_button(busy: bool) -> SubmitButton {
    if busy {
        SubmitButton {
            label: BUSY_LABEL,
            enabled: false,
        }
    } else {
        SubmitButton {
            label: SUBMIT_LABEL,
            enabled: true,
        }
    }
}
