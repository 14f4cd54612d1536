//! Request validation. Pure functions of the request; the store is never consulted.

use crate::error::AppError;
use crate::id::IdFormat;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// `name` must be a string that is non-empty after trimming. Returns the trimmed name.
    pub fn require_name(body: &Value) -> Result<String, AppError> {
        let obj = body
            .as_object()
            .ok_or_else(|| AppError::Validation("body must be a JSON object".into()))?;
        match obj.get("name") {
            None | Some(Value::Null) => Err(AppError::Validation("name is required".into())),
            Some(Value::String(s)) => {
                let name = s.trim();
                if name.is_empty() {
                    Err(AppError::Validation("name must not be empty".into()))
                } else {
                    Ok(name.to_string())
                }
            }
            Some(_) => Err(AppError::Validation("name must be a string".into())),
        }
    }

    /// Returns the id in the format's canonical spelling, the only spelling stores see.
    pub fn validate_id(ids: &dyn IdFormat, raw: &str) -> Result<String, AppError> {
        ids.normalize(raw)
            .ok_or_else(|| AppError::Validation(format!("invalid id '{}': expected {}", raw, ids.name())))
    }
}
