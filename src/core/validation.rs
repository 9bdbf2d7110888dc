//! Record validation and sanitization.
//!
//! All functions here are total and side-effect free. Validation failure is
//! a structured outcome carrying the offending field's display label, never
//! an error type; the caller decides how to surface it. This layer is a UX
//! affordance only: the backend remains authoritative for enforcement.

use crate::api::models::WorkCodeDraft;
use crate::core::fields::{FieldConfig, SANITIZE_MAX_LEN, STATUS_FIELD_LABEL, TEXT_FIELDS};
use std::collections::HashMap;

/// Outcome of validating a candidate record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    /// Display label of the first field that failed, if any.
    pub missing_or_invalid_field: Option<String>,
}

impl ValidationOutcome {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            missing_or_invalid_field: None,
        }
    }

    pub fn invalid(label: &str) -> Self {
        Self {
            is_valid: false,
            missing_or_invalid_field: Some(label.to_string()),
        }
    }
}

/// Clean free text before display or submission: remove angle brackets,
/// cap at 1000 characters, trim surrounding whitespace. Trimming happens
/// after truncation so the result is stable under repeated application.
pub fn sanitize(input: &str) -> String {
    let stripped: String = input.chars().filter(|c| *c != '<' && *c != '>').collect();
    let truncated: String = stripped.trim_start().chars().take(SANITIZE_MAX_LEN).collect();
    truncated.trim_end().to_string()
}

/// A value is well formed when it fits the length budget and uses only
/// alphanumerics, hyphens, underscores, and spaces. Empty is well formed.
pub fn is_well_formed(value: &str, max_len: usize) -> bool {
    if value.chars().count() > max_len {
        return false;
    }
    value
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == ' ')
}

/// Status codes live in the fixed range [0, 3].
pub fn is_valid_status(status: i64) -> bool {
    (0..=3).contains(&status)
}

/// Return a copy of the draft with every free-text field sanitized.
pub fn sanitize_draft(draft: &WorkCodeDraft) -> WorkCodeDraft {
    WorkCodeDraft {
        short_work_code: sanitize(&draft.short_work_code),
        cost_code: sanitize(&draft.cost_code),
        project_code: sanitize(&draft.project_code),
        name: sanitize(&draft.name),
        description: sanitize(&draft.description),
        status: draft.status,
    }
}

/// Validate a candidate record against the field configuration. Fields are
/// checked in descriptor order, status last; the first failure aborts and
/// names the offending field by display label.
pub fn validate_draft(
    draft: &WorkCodeDraft,
    config: &HashMap<String, FieldConfig>,
) -> ValidationOutcome {
    for field in TEXT_FIELDS {
        let value = sanitize((field.draft_value)(draft));
        let field_config = config.get(field.name).copied().unwrap_or_default();

        if field_config.required && value.is_empty() {
            return ValidationOutcome::invalid(field.label);
        }
        if !is_well_formed(&value, field.max_len) {
            return ValidationOutcome::invalid(field.label);
        }
    }

    if !is_valid_status(draft.status) {
        return ValidationOutcome::invalid(STATUS_FIELD_LABEL);
    }

    ValidationOutcome::valid()
}
