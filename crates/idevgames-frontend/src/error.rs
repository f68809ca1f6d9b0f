use thiserror::Error;

use crate::form::FieldError;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("Not authorized. Only editors may modify this site content.")]
    NotAuthorized,

    #[error("invalid snippet: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Client(#[from] idevgames_client::ClientError),

    #[error(transparent)]
    Core(#[from] idevgames_core::CoreError),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
