//! Request validation from per-field rules.

use crate::error::{AppError, FieldErrors};
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Any,
    String,
    Integer,
}

#[derive(Clone, Debug, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub kind: FieldKind,
    /// Character bounds; min_length is checked against the trimmed value.
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate body against per-field rules, collecting one message per failing field.
    pub fn validate(body: &Map<String, Value>, rules: &[(&str, ValidationRule)]) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        for (field, rule) in rules {
            let val = body.get(*field).filter(|v| !v.is_null());
            match val {
                None if rule.required => {
                    errors.insert(field.to_string(), format!("{} is required", field));
                }
                None => {}
                Some(v) => {
                    if let Err(msg) = validate_field(field, v, rule) {
                        errors.insert(field.to_string(), msg);
                    }
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

fn validate_field(field: &str, v: &Value, rule: &ValidationRule) -> Result<(), String> {
    match rule.kind {
        FieldKind::Any => {}
        FieldKind::String => {
            if !v.is_string() {
                return Err(format!("{} must be a string", field));
            }
        }
        FieldKind::Integer => {
            if v.as_i64().is_none() {
                return Err(format!("{} must be an integer", field));
            }
        }
    }
    if let Some(s) = v.as_str() {
        if let Some(min) = rule.min_length {
            if s.trim().chars().count() < min as usize {
                return Err(if min == 1 {
                    format!("{} may not be blank", field)
                } else {
                    format!("{} must be at least {} characters", field, min)
                });
            }
        }
        if let Some(max) = rule.max_length {
            if s.chars().count() > max as usize {
                return Err(format!("{} must be at most {} characters", field, max));
            }
        }
    }
    if let Some(n) = v.as_i64() {
        if let Some(min) = rule.minimum {
            if n < min {
                return Err(format!("{} must be at least {}", field, min));
            }
        }
        if let Some(max) = rule.maximum {
            if n > max {
                return Err(format!("{} must be at most {}", field, max));
            }
        }
    }
    Ok(())
}
