//! Frontend Models
//!
//! Form state and the payload posted to the server.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::error::FormError;

/// Characters left alone by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// One of the three form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Date,
    Amount,
}

impl Field {
    /// Fields in the order the inputs are rendered
    pub const ALL: [Field; 3] = [Field::Date, Field::Title, Field::Amount];

    /// Input `name` attribute and wire key
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Date => "date",
            Field::Amount => "amount",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Date => "Date",
            Field::Amount => "Amount",
        }
    }

    /// HTML input type; only amount is numeric
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Amount => "number",
            Field::Title | Field::Date => "text",
        }
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "title" => Ok(Field::Title),
            "date" => Ok(Field::Date),
            "amount" => Ok(Field::Amount),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current contents of the record form. Amount stays raw text until posted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub title: String,
    pub date: String,
    pub amount: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Date => &self.date,
            Field::Amount => &self.amount,
        }
    }

    /// Replace one field, leaving the other two untouched
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Date => &mut self.date,
            Field::Amount => &mut self.amount,
        };
        *slot = value;
    }

    /// Submittable once every field has content
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty() && !self.date.is_empty() && !self.amount.is_empty()
    }
}

/// Body of the create request: `{ record: { title, date, amount } }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub record: FormState,
}

impl From<FormState> for SubmissionPayload {
    fn from(record: FormState) -> Self {
        Self { record }
    }
}

impl SubmissionPayload {
    /// Encode as `record[title]=..&record[date]=..&record[amount]=..`,
    /// brackets escaped and spaces written as `+`.
    pub fn to_form_urlencoded(&self) -> String {
        [Field::Title, Field::Date, Field::Amount]
            .iter()
            .map(|&field| {
                format!(
                    "{}={}",
                    encode_component(&format!("record[{}]", field.name())),
                    encode_component(self.record.get(field)),
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string().replace("%20", "+")
}

/// Text shown for one column of a record returned by the server
pub fn display_field(record: &serde_json::Value, key: &str) -> String {
    match record.get(key) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
