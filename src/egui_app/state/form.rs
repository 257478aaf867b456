use crate::predictor::features::{self, Field, HousingFeatures};

/// Form inputs: the coerced values plus the text the user is typing.
///
/// The buffers keep partially typed input such as `"0."` or `""` visible while
/// `features` always holds the coerced number that would be submitted.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    features: HousingFeatures,
    inputs: [String; 11],
}

impl Default for FormState {
    fn default() -> Self {
        Self::from_features(HousingFeatures::default())
    }
}

impl FormState {
    pub fn from_features(values: HousingFeatures) -> Self {
        Self {
            features: values,
            inputs: Field::ALL.map(|field| features::display_value(values.get(field))),
        }
    }

    pub fn features(&self) -> &HousingFeatures {
        &self.features
    }

    pub fn input(&self, field: Field) -> &str {
        &self.inputs[field.index()]
    }

    /// Record new text for `field` and re-coerce its value.
    pub fn edit(&mut self, field: Field, raw: &str) {
        self.features = self.features.with_raw(field, raw);
        self.inputs[field.index()] = raw.to_string();
    }

    /// Replace a field's value directly, e.g. from a picker, keeping the buffer in sync.
    pub fn set_value(&mut self, field: Field, value: f64) {
        self.features = self.features.with_value(field, value);
        self.inputs[field.index()] = features::display_value(self.features.get(field));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
