//! Housing attributes collected by the prediction form.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One of the eleven numeric attributes the prediction service expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Per capita crime rate by town.
    Crim,
    /// Proportion of residential land zoned for lots over 25,000 sq.ft.
    Zn,
    /// Proportion of non-retail business acres per town.
    Indus,
    /// Charles River dummy variable, 1 if the tract bounds the river.
    Chas,
    /// Nitric oxides concentration (parts per 10 million).
    Nox,
    /// Average number of rooms per dwelling.
    Rm,
    /// Proportion of owner-occupied units built prior to 1940.
    Age,
    /// Weighted distances to employment centres.
    Dis,
    /// Full-value property-tax rate per $10,000.
    Tax,
    /// Pupil-teacher ratio by town.
    Ptratio,
    /// Percentage of lower status of the population.
    Lstat,
}

/// Advisory input range shown next to a field. Never enforced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputHint {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: f64,
}

impl InputHint {
    const fn new(min: Option<f64>, max: Option<f64>, step: f64) -> Self {
        Self { min, max, step }
    }
}

impl Field {
    /// All fields in wire order.
    pub const ALL: [Field; 11] = [
        Field::Crim,
        Field::Zn,
        Field::Indus,
        Field::Chas,
        Field::Nox,
        Field::Rm,
        Field::Age,
        Field::Dis,
        Field::Tax,
        Field::Ptratio,
        Field::Lstat,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// JSON key used by the prediction service.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Crim => "CRIM",
            Field::Zn => "ZN",
            Field::Indus => "INDUS",
            Field::Chas => "CHAS",
            Field::Nox => "NOX",
            Field::Rm => "RM",
            Field::Age => "AGE",
            Field::Dis => "DIS",
            Field::Tax => "TAX",
            Field::Ptratio => "PTRATIO",
            Field::Lstat => "LSTAT",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Field::Crim => "Crime Rate (CRIM)",
            Field::Zn => "Zoned Land (ZN)",
            Field::Indus => "Industry (INDUS)",
            Field::Chas => "Charles River (CHAS)",
            Field::Nox => "NOX Concentration",
            Field::Rm => "Avg Rooms (RM)",
            Field::Age => "Age (AGE)",
            Field::Dis => "Distance (DIS)",
            Field::Tax => "Tax Rate (TAX)",
            Field::Ptratio => "Pupil-Teacher Ratio",
            Field::Lstat => "Lower Status % (LSTAT)",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Field::Crim => "Per capita crime rate by town",
            Field::Zn => "% residential land zoned for lots over 25,000 sq.ft.",
            Field::Indus => "% non-retail business acres per town",
            Field::Chas => "Bounds Charles River?",
            Field::Nox => "Nitric oxides concentration (parts per 10M)",
            Field::Rm => "Average number of rooms per dwelling",
            Field::Age => "% owner-occupied units built prior to 1940",
            Field::Dis => "Weighted distances to employment centres",
            Field::Tax => "Property-tax rate per $10,000",
            Field::Ptratio => "Pupil-teacher ratio by town",
            Field::Lstat => "% lower status of the population",
        }
    }

    pub const fn hint(self) -> InputHint {
        match self {
            Field::Crim => InputHint::new(Some(0.0), None, 0.001),
            Field::Zn => InputHint::new(Some(0.0), Some(100.0), 0.1),
            Field::Indus => InputHint::new(Some(0.0), Some(100.0), 0.01),
            Field::Chas => InputHint::new(Some(0.0), Some(1.0), 1.0),
            Field::Nox => InputHint::new(Some(0.0), Some(1.0), 0.001),
            Field::Rm => InputHint::new(Some(1.0), Some(15.0), 0.001),
            Field::Age => InputHint::new(Some(0.0), Some(100.0), 0.1),
            Field::Dis => InputHint::new(Some(0.0), None, 0.0001),
            Field::Tax => InputHint::new(Some(0.0), None, 1.0),
            Field::Ptratio => InputHint::new(Some(1.0), Some(50.0), 0.1),
            Field::Lstat => InputHint::new(Some(0.0), Some(100.0), 0.01),
        }
    }

    /// CHAS is a yes/no choice rendered as a picker instead of a number box.
    pub const fn is_flag(self) -> bool {
        matches!(self, Field::Chas)
    }

    pub const fn default_value(self) -> f64 {
        match self {
            Field::Crim => 0.00632,
            Field::Zn => 18.0,
            Field::Indus => 2.31,
            Field::Chas => 0.0,
            Field::Nox => 0.538,
            Field::Rm => 6.575,
            Field::Age => 65.2,
            Field::Dis => 4.09,
            Field::Tax => 296.0,
            Field::Ptratio => 15.3,
            Field::Lstat => 4.98,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field name that is not one of the eleven known attributes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown housing field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownField(name.to_string()))
    }
}

/// Coerce user text to a field value: anything that is not a finite number becomes 0.
pub fn parse_value(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Current values of all eleven fields. Every value is finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HousingFeatures {
    values: [f64; 11],
}

impl Default for HousingFeatures {
    fn default() -> Self {
        Self {
            values: Field::ALL.map(Field::default_value),
        }
    }
}

impl HousingFeatures {
    pub fn get(&self, field: Field) -> f64 {
        self.values[field.index()]
    }

    /// Copy with `field` replaced. Non-finite values are stored as 0.
    #[must_use]
    pub fn with_value(mut self, field: Field, value: f64) -> Self {
        self.values[field.index()] = if value.is_finite() { value } else { 0.0 };
        self
    }

    /// Copy with `field` replaced by the coerced value of `raw`.
    #[must_use]
    pub fn with_raw(self, field: Field, raw: &str) -> Self {
        self.with_value(field, parse_value(raw))
    }

    /// Name-based update, for callers holding wire names rather than [`Field`]s.
    pub fn update_field(&self, name: &str, raw: &str) -> Result<Self, UnknownField> {
        let field = name.parse::<Field>()?;
        Ok(self.with_raw(field, raw))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL.into_iter().map(|field| (field, self.get(field)))
    }
}

/// Serializes as a JSON object keyed by wire name, in wire order.
///
/// Integral values are written without a fractional part (`18`, not `18.0`)
/// so the body matches what a JavaScript client would send.
impl Serialize for HousingFeatures {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::ALL.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.name(), &WireNumber(value))?;
        }
        map.end()
    }
}

struct WireNumber(f64);

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for WireNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

/// Render a value the way the form echoes it back (`18`, `0.00632`).
pub fn display_value(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_serializes_to_exact_body() {
        let body = serde_json::to_string(&HousingFeatures::default()).unwrap();
        assert_eq!(
            body,
            r#"{"CRIM":0.00632,"ZN":18,"INDUS":2.31,"CHAS":0,"NOX":0.538,"RM":6.575,"AGE":65.2,"DIS":4.09,"TAX":296,"PTRATIO":15.3,"LSTAT":4.98}"#
        );
    }

    #[test]
    fn numeric_text_is_taken_verbatim() {
        for (raw, expected) in [
            ("12.5", 12.5),
            ("  7 ", 7.0),
            ("-3", -3.0),
            ("1e2", 100.0),
            (".25", 0.25),
        ] {
            assert_eq!(parse_value(raw), expected, "input {raw:?}");
        }
    }

    #[test]
    fn non_numeric_or_non_finite_text_becomes_zero() {
        for raw in ["", "abc", "12abc", "NaN", "inf", "-infinity", "1e400"] {
            assert_eq!(parse_value(raw), 0.0, "input {raw:?}");
        }
    }

    #[test]
    fn editing_one_field_leaves_the_rest_alone() {
        let before = HousingFeatures::default();
        for field in Field::ALL {
            let after = before.with_raw(field, "42");
            for other in Field::ALL {
                let expected = if other == field { 42.0 } else { before.get(other) };
                assert_eq!(after.get(other), expected, "{field} edit touched {other}");
            }
        }
    }

    #[test]
    fn update_field_by_wire_name() {
        let features = HousingFeatures::default()
            .update_field("RM", "7.25")
            .unwrap()
            .update_field("chas", "1")
            .unwrap();
        assert_eq!(features.get(Field::Rm), 7.25);
        assert_eq!(features.get(Field::Chas), 1.0);
    }

    #[test]
    fn update_field_rejects_unknown_name() {
        let err = HousingFeatures::default()
            .update_field("MEDV", "1")
            .unwrap_err();
        assert_eq!(err, UnknownField("MEDV".to_string()));
    }

    #[test]
    fn with_value_never_stores_non_finite() {
        let features = HousingFeatures::default().with_value(Field::Tax, f64::NAN);
        assert_eq!(features.get(Field::Tax), 0.0);
    }

    #[test]
    fn fractional_values_keep_their_digits_on_the_wire() {
        let features = HousingFeatures::default()
            .with_value(Field::Zn, 12.5)
            .with_value(Field::Chas, 1.0);
        let value: serde_json::Value = serde_json::to_value(features).unwrap();
        assert_eq!(value["ZN"], serde_json::json!(12.5));
        assert_eq!(value["CHAS"], serde_json::json!(1));
        assert_eq!(value.as_object().unwrap().len(), 11);
    }

    #[test]
    fn display_value_drops_trailing_zeroes() {
        assert_eq!(display_value(18.0), "18");
        assert_eq!(display_value(0.00632), "0.00632");
    }
}
