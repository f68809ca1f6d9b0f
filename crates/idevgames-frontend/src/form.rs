use jiff::civil::Date;

use idevgames_client::Url;
use idevgames_core::wire_date::{format_date, parse_date};
use idevgames_core::{Icon, Snippet, SnippetFields};

use crate::error::FrontendError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Editable values of the snippet form. `shared_on` is kept as the text
/// the editor typed until the form is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetForm {
    pub title: String,
    pub shared_by: String,
    pub href: String,
    /// ISO-8601 date, e.g. `2021-01-23`.
    pub shared_on: String,
    pub hidden: bool,
    pub summary: String,
    pub description: String,
    pub icon: Icon,
}

impl SnippetForm {
    /// A new, hidden snippet shared today.
    pub fn blank(today: Date) -> Self {
        Self::from_fields(&SnippetFields::blank("", today))
    }

    pub fn from_snippet(snippet: &Snippet) -> Self {
        Self::from_fields(&snippet.fields())
    }

    fn from_fields(fields: &SnippetFields) -> Self {
        Self {
            title: fields.title.clone(),
            shared_by: fields.shared_by.clone(),
            href: fields.href.clone(),
            shared_on: format_date(fields.shared_on),
            hidden: fields.hidden,
            summary: fields.summary.clone(),
            description: fields.description.clone(),
            icon: fields.icon,
        }
    }

    /// Every problem with the current values. Empty means submittable.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(FieldError::new("title", "title is a required field"));
        }
        if self.shared_by.trim().is_empty() {
            errors.push(FieldError::new("sharedBy", "sharedBy is a required field"));
        }
        if self.href.trim().is_empty() {
            errors.push(FieldError::new("href", "href is a required field"));
        } else if !is_web_url(self.href.trim()) {
            errors.push(FieldError::new("href", "href must be a valid URL"));
        }
        if self.shared_on.trim().is_empty() {
            errors.push(FieldError::new("sharedOn", "sharedOn is a required field"));
        } else if parse_date(&self.shared_on).is_err() {
            errors.push(FieldError::new("sharedOn", "sharedOn must be a date"));
        }
        if self.summary.trim().is_empty() {
            errors.push(FieldError::new("summary", "summary is a required field"));
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validated fields for `taxonomy`, ready to send.
    pub fn to_fields(&self, taxonomy: &str) -> Result<SnippetFields, FrontendError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(FrontendError::Validation(errors));
        }

        Ok(SnippetFields {
            taxonomy: taxonomy.to_string(),
            hidden: self.hidden,
            title: self.title.trim().to_string(),
            icon: self.icon,
            shared_by: self.shared_by.trim().to_string(),
            shared_on: parse_date(&self.shared_on)?,
            summary: self.summary.trim().to_string(),
            description: self.description.trim().to_string(),
            href: self.href.trim().to_string(),
        })
    }
}

fn is_web_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false)
}
