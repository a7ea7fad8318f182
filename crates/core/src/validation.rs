//! Request validation helpers built on the `validator` crate.
//!
//! DTOs derive [`validator::Validate`]; the resulting [`ValidationErrors`]
//! are flattened into [`FieldError`]s keyed by the camelCase wire name so
//! error bodies match the request payload the client sent.

use validator::{ValidationError, ValidationErrors};

use crate::error::{CoreError, FieldError};
use crate::music_type::MusicType;

/// Reject strings that are empty or whitespace only.
#[allow(clippy::ptr_arg)]
pub fn not_blank(value: &String) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Reject integer codes that do not name a [`MusicType`].
pub fn known_music_type(code: i16) -> Result<(), ValidationError> {
    match MusicType::from_code(code) {
        Ok(_) => Ok(()),
        Err(err) => {
            let mut error = ValidationError::new("music_type");
            error.message = Some(err.to_string().into());
            Err(error)
        }
    }
}

/// Convert a snake_case struct field name into its camelCase wire name.
pub fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Flatten validator output into field details, sorted by field then message.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut details: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = to_camel_case(&field);
            errs.iter().map(move |err| {
                let message = match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid value ({})", err.code),
                };
                FieldError::new(field.clone(), message)
            })
        })
        .collect();
    details.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    details
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation {
            message: "Validation failed".to_string(),
            details: field_errors(&errors),
        }
    }
}
