//! Shared query parameter types for API handlers.

use prsk_core::error::{CoreError, FieldError};
use prsk_core::pagination::PageRequest;
use serde::Deserialize;

/// Page-number pagination parameters (`?page=&limit=`).
///
/// Kept as raw strings so an unparsable value is reported against its own
/// parameter name. [`PageRequest::new`] applies defaults and bounds.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageParams {
    pub fn to_page_request(&self) -> Result<PageRequest, CoreError> {
        let mut details = Vec::new();
        let page = parse_param("page", "Page", self.page.as_deref(), &mut details);
        let limit = parse_param("limit", "Limit", self.limit.as_deref(), &mut details);

        if !details.is_empty() {
            return Err(CoreError::Validation {
                message: "Validation failed".to_string(),
                details,
            });
        }
        PageRequest::new(page, limit)
    }
}

fn parse_param(
    field: &str,
    label: &str,
    raw: Option<&str>,
    details: &mut Vec<FieldError>,
) -> Option<i64> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            details.push(FieldError::new(field, format!("{label} must be an integer")));
            None
        }
    }
}
