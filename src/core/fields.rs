//! Field-descriptor table for work-code records.
//!
//! Record fields are accessed through typed accessor functions rather than
//! dynamic lookup by string key, so a misspelled field name is a `None` at
//! the call site instead of a silent empty match.

use crate::api::models::{WorkCode, WorkCodeDraft, status_label};
use std::collections::HashMap;

/// Maximum length the sanitizer ever allows for free text.
pub const SANITIZE_MAX_LEN: usize = 1000;

/// Per-field view/validation settings, normally sourced from configuration.
#[derive(Debug, Clone, Copy)]
pub struct FieldConfig {
    pub required: bool,
    pub visible: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            required: false,
            visible: true,
        }
    }
}

/// Descriptor for one free-text field: wire name, display label, maximum
/// length, and typed accessors for both the stored record and a draft.
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub max_len: usize,
    pub record_value: fn(&WorkCode) -> Option<String>,
    pub draft_value: fn(&WorkCodeDraft) -> &str,
}

/// The free-text fields of a work code, in validation order.
pub const TEXT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "short_work_code",
        label: "Short Work Code",
        max_len: 10,
        record_value: |r| Some(r.short_work_code.clone()),
        draft_value: |d| &d.short_work_code,
    },
    FieldDescriptor {
        name: "cost_code",
        label: "Cost Code",
        max_len: 10,
        record_value: |r| Some(r.cost_code.clone()),
        draft_value: |d| &d.cost_code,
    },
    FieldDescriptor {
        name: "project_code",
        label: "Project Code",
        max_len: 10,
        record_value: |r| Some(r.project_code.clone()),
        draft_value: |d| &d.project_code,
    },
    FieldDescriptor {
        name: "name",
        label: "Name",
        max_len: 50,
        record_value: |r| Some(r.name.clone()),
        draft_value: |d| &d.name,
    },
    FieldDescriptor {
        name: "description",
        label: "Description",
        max_len: SANITIZE_MAX_LEN,
        record_value: |r| r.description.clone(),
        draft_value: |d| &d.description,
    },
];

pub const STATUS_FIELD_NAME: &str = "status";
pub const STATUS_FIELD_LABEL: &str = "Status";

/// Look up a text-field descriptor by wire name.
pub fn descriptor(name: &str) -> Option<&'static FieldDescriptor> {
    TEXT_FIELDS.iter().find(|f| f.name == name)
}

/// Stringify a record field for display and search. Status resolves to its
/// display label, not its numeric value; unknown names yield `None`.
pub fn record_field_value(record: &WorkCode, name: &str) -> Option<String> {
    match name {
        "id" => Some(record.id.to_string()),
        STATUS_FIELD_NAME => status_label(record.status).map(str::to_string),
        _ => descriptor(name).and_then(|f| (f.record_value)(record)),
    }
}

/// Default field configuration: the screen shows the code columns and the
/// status, and requires the short code and name before submission.
pub fn default_field_config() -> HashMap<String, FieldConfig> {
    let mut config = HashMap::new();
    config.insert(
        "short_work_code".to_string(),
        FieldConfig {
            required: true,
            visible: true,
        },
    );
    config.insert(
        "cost_code".to_string(),
        FieldConfig {
            required: false,
            visible: true,
        },
    );
    config.insert(
        "project_code".to_string(),
        FieldConfig {
            required: false,
            visible: true,
        },
    );
    config.insert(
        "name".to_string(),
        FieldConfig {
            required: true,
            visible: true,
        },
    );
    config.insert(
        "description".to_string(),
        FieldConfig {
            required: false,
            visible: false,
        },
    );
    config.insert(
        STATUS_FIELD_NAME.to_string(),
        FieldConfig {
            required: false,
            visible: true,
        },
    );
    config
}

/// The field names marked visible, in descriptor order, status last.
pub fn visible_field_names(config: &HashMap<String, FieldConfig>) -> Vec<String> {
    let mut names: Vec<String> = TEXT_FIELDS
        .iter()
        .filter(|f| {
            config
                .get(f.name)
                .copied()
                .unwrap_or_default()
                .visible
        })
        .map(|f| f.name.to_string())
        .collect();

    if config
        .get(STATUS_FIELD_NAME)
        .copied()
        .unwrap_or_default()
        .visible
    {
        names.push(STATUS_FIELD_NAME.to_string());
    }

    names
}
