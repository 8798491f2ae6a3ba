//! Field specifications: the typed description of the single value requested
//! from the human, serialized as the `requestedSchema` of an elicitation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ElicitError;

/// Name of the only property in every requested schema.
pub const ANSWER_PROPERTY: &str = "answer";

/// Wire formats a string field can ask the client to enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringFormat {
    Email,
    Uri,
    Date,
    DateTime,
}

/// Date precision accepted by the date/time tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormat {
    /// Date only (YYYY-MM-DD)
    #[default]
    Date,
    /// Date and time
    DateTime,
}

impl From<DateFormat> for StringFormat {
    fn from(format: DateFormat) -> Self {
        match format {
            DateFormat::Date => StringFormat::Date,
            DateFormat::DateTime => StringFormat::DateTime,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringField {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<StringFormat>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(rename = "enumNames", skip_serializing_if = "Option::is_none")]
    pub enum_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BooleanField {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberField {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
}

/// The expected type and presentation of one answer.
///
/// Construct through the builders below; they enforce the pre-send
/// invariants (non-empty title, matching enum arrays, ordered bounds).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldSpec {
    String(StringField),
    Boolean(BooleanField),
    Number(NumberField),
}

impl FieldSpec {
    /// Free-text answer.
    pub fn text(title: impl Into<String>, description: Option<String>) -> Result<Self, ElicitError> {
        Self::string(title, description, None)
    }

    /// Closed choice between `options`, displayed with `labels` when given.
    pub fn choice(
        title: impl Into<String>,
        description: Option<String>,
        options: Vec<String>,
        labels: Option<Vec<String>>,
    ) -> Result<Self, ElicitError> {
        let (title, description) = header(title, description)?;

        if options.is_empty() {
            return Err(ElicitError::InvalidArgument(
                "options must contain at least one value".into(),
            ));
        }
        if options.iter().any(|o| o.is_empty()) {
            return Err(ElicitError::InvalidArgument(
                "options must not contain empty values".into(),
            ));
        }

        let labels = match labels {
            Some(labels) => {
                if labels.len() != options.len() {
                    return Err(ElicitError::InvalidArgument(format!(
                        "optionNames has {} entries but options has {}; they must be the same length",
                        labels.len(),
                        options.len()
                    )));
                }
                if labels.iter().any(|l| l.is_empty()) {
                    return Err(ElicitError::InvalidArgument(
                        "optionNames must not contain empty values".into(),
                    ));
                }
                labels
            }
            None => options.clone(),
        };

        Ok(FieldSpec::String(StringField {
            title,
            description,
            format: None,
            enum_values: Some(options),
            enum_names: Some(labels),
        }))
    }

    pub fn boolean(
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, ElicitError> {
        let (title, description) = header(title, description)?;
        Ok(FieldSpec::Boolean(BooleanField { title, description }))
    }

    /// Numeric answer with optional inclusive bounds.
    pub fn number(
        title: impl Into<String>,
        description: Option<String>,
        minimum: Option<f64>,
        maximum: Option<f64>,
    ) -> Result<Self, ElicitError> {
        let (title, description) = header(title, description)?;

        for (name, bound) in [("minimum", minimum), ("maximum", maximum)] {
            if bound.is_some_and(|b| !b.is_finite()) {
                return Err(ElicitError::InvalidArgument(format!(
                    "{name} must be a finite number"
                )));
            }
        }
        if let (Some(min), Some(max)) = (minimum, maximum) {
            if min > max {
                return Err(ElicitError::InvalidArgument(format!(
                    "minimum value ({min}) must be less than or equal to maximum value ({max})"
                )));
            }
        }

        Ok(FieldSpec::Number(NumberField {
            title,
            description,
            minimum,
            maximum,
        }))
    }

    pub fn date_time(
        title: impl Into<String>,
        description: Option<String>,
        format: DateFormat,
    ) -> Result<Self, ElicitError> {
        Self::string(title, description, Some(format.into()))
    }

    pub fn email(title: impl Into<String>, description: Option<String>) -> Result<Self, ElicitError> {
        Self::string(title, description, Some(StringFormat::Email))
    }

    pub fn uri(title: impl Into<String>, description: Option<String>) -> Result<Self, ElicitError> {
        Self::string(title, description, Some(StringFormat::Uri))
    }

    fn string(
        title: impl Into<String>,
        description: Option<String>,
        format: Option<StringFormat>,
    ) -> Result<Self, ElicitError> {
        let (title, description) = header(title, description)?;
        Ok(FieldSpec::String(StringField {
            title,
            description,
            format,
            enum_values: None,
            enum_names: None,
        }))
    }

    pub fn title(&self) -> &str {
        match self {
            FieldSpec::String(f) => &f.title,
            FieldSpec::Boolean(f) => &f.title,
            FieldSpec::Number(f) => &f.title,
        }
    }

    /// Wrap into the single-property object schema sent to the client.
    pub fn into_requested_schema(self) -> RequestedSchema {
        RequestedSchema::new(self)
    }
}

fn header(
    title: impl Into<String>,
    description: Option<String>,
) -> Result<(String, Option<String>), ElicitError> {
    let title = title.into();
    if title.is_empty() {
        return Err(ElicitError::InvalidArgument("title must not be empty".into()));
    }
    if description.as_deref().is_some_and(str::is_empty) {
        return Err(ElicitError::InvalidArgument(
            "description must not be empty when provided".into(),
        ));
    }
    Ok((title, description))
}

/// `{ "type": "object", "properties": { "answer": <FieldSpec> } }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestedSchema {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: AnswerProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct AnswerProperties {
    answer: FieldSpec,
}

impl RequestedSchema {
    pub fn new(answer: FieldSpec) -> Self {
        Self {
            kind: "object",
            properties: AnswerProperties { answer },
        }
    }

    pub fn answer(&self) -> &FieldSpec {
        &self.properties.answer
    }
}

impl From<FieldSpec> for RequestedSchema {
    fn from(field: FieldSpec) -> Self {
        RequestedSchema::new(field)
    }
}
