use crate::error::ApiError;
use validator::{Validate, ValidationErrors};

/// First human readable message out of a failed validation, if any field
/// carried one.
pub fn first_validation_message(errors: &ValidationErrors) -> Option<String> {
    let source = errors.field_errors();
    for field in source.iter() {
        for err in field.1.iter() {
            if let Some(message) = err.message.as_ref() {
                return Some(message.to_string());
            }
        }
    }
    None
}

pub fn validate_request<T: Validate>(request: &T) -> Result<(), ApiError> {
    request.validate().map_err(|errors| {
        let message =
            first_validation_message(&errors).unwrap_or_else(|| "Invalid request".to_string());
        tracing::error!("Error: {}", message);
        ApiError::BadRequest(message)
    })
}
