use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::model::{ItemFields, ItemImage};

pub const NAME_MIN_CHARS: usize = 4;

const NAME_TOO_SHORT: &str = "Name must be at least 4 characters";
const VALUE_REQUIRED: &str = "A value is required";
const EXPECTED_NUMBER: &str = "Expected a number";
const MINIMUM_ZERO: &str = "The minimum value must be 0";
const WHOLE_NUMBER: &str = "Sold units must be a whole number";
const TOO_LARGE: &str = "Sold units is too large";
const IMAGE_REQUIRED: &str = "An image is required";

/// Form fields that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Image,
    Name,
    Price,
    SoldUnits,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Image => "image",
            FormField::Name => "name",
            FormField::Price => "price",
            FormField::SoldUnits => "soldUnits",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to message, one entry per violated field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.0.keys().map(FormField::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Numeric form input, either already numeric or still text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

/// Candidate record as submitted by the item form.
///
/// An image with an empty `path` has not been assigned a storage key yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub image: Option<ItemImage>,
    pub name: String,
    pub price: Option<RawNumber>,
    pub sold_units: Option<RawNumber>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Valid(ItemFields),
    Invalid(FieldErrors),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    pub fn into_result(self) -> Result<ItemFields, FieldErrors> {
        match self {
            Validation::Valid(fields) => Ok(fields),
            Validation::Invalid(errors) => Err(errors),
        }
    }
}

/// Checks every rule of the item form and normalizes the accepted record.
///
/// All fields are evaluated so the caller can display every message at once.
/// Missing or blank numeric input is rejected rather than read as zero.
pub fn validate(draft: &ItemDraft) -> Validation {
    let mut errors = FieldErrors::default();

    let image = match &draft.image {
        Some(image)
            if !image.path.as_str().trim().is_empty() && !image.url.trim().is_empty() =>
        {
            Some(image.clone())
        }
        _ => {
            errors.insert(FormField::Image, IMAGE_REQUIRED);
            None
        }
    };

    let name = draft.name.trim();
    if name.chars().count() < NAME_MIN_CHARS {
        errors.insert(FormField::Name, NAME_TOO_SHORT);
    }

    let price = match coerce_non_negative(draft.price.as_ref()) {
        Ok(price) => Some(price),
        Err(message) => {
            errors.insert(FormField::Price, message);
            None
        }
    };

    let sold_units = match coerce_non_negative(draft.sold_units.as_ref()).and_then(whole_units) {
        Ok(units) => Some(units),
        Err(message) => {
            errors.insert(FormField::SoldUnits, message);
            None
        }
    };

    match (image, price, sold_units) {
        (Some(image), Some(price), Some(sold_units)) if errors.is_empty() => Validation::Valid(
            ItemFields::new(image, name.to_string(), price, sold_units),
        ),
        _ => Validation::Invalid(errors),
    }
}

fn coerce_non_negative(raw: Option<&RawNumber>) -> Result<f64, &'static str> {
    let value = match raw {
        None => return Err(VALUE_REQUIRED),
        Some(RawNumber::Number(value)) => *value,
        Some(RawNumber::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(VALUE_REQUIRED);
            }
            text.parse::<f64>().map_err(|_| EXPECTED_NUMBER)?
        }
    };

    if !value.is_finite() {
        return Err(EXPECTED_NUMBER);
    }
    if value < 0.0 {
        return Err(MINIMUM_ZERO);
    }
    // folds -0.0 into 0.0
    Ok(value + 0.0)
}

fn whole_units(value: f64) -> Result<u32, &'static str> {
    if value.fract() != 0.0 {
        return Err(WHOLE_NUMBER);
    }
    if value > f64::from(u32::MAX) {
        return Err(TOO_LARGE);
    }
    Ok(value as u32)
}
