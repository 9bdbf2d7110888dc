use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Display labels for the status range [0..3], indexed by status code.
pub const STATUS_LABELS: [&str; 4] = ["Draft", "Active", "On Hold", "Closed"];

/// Resolve the display label for a status code. Out-of-range codes have no label.
pub fn status_label(status: u8) -> Option<&'static str> {
    STATUS_LABELS.get(status as usize).copied()
}

/// Custom deserializer: the backend has been observed returning status as a
/// number or a numeric string; anything else falls back to 0 (Draft)
fn deserialize_status<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => Ok(n.as_u64().map(|v| v.min(u8::MAX as u64) as u8).unwrap_or(0)),
        Value::String(s) => Ok(s.parse::<u8>().unwrap_or(0)),
        _ => Ok(0),
    }
}

/// A work-code record as returned by the backend. The identifier is
/// backend-assigned and never changes after creation.
#[derive(Debug, Deserialize, Clone)]
pub struct WorkCode {
    pub id: u32,
    pub short_work_code: String,
    #[serde(default)]
    pub cost_code: String,
    #[serde(default)]
    pub project_code: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_status", default)]
    pub status: u8,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A candidate record before submission. Status is kept as a raw integer so
/// the validation layer can reject out-of-range input instead of the type
/// system silently clamping it.
#[derive(Debug, Clone, Default)]
pub struct WorkCodeDraft {
    pub short_work_code: String,
    pub cost_code: String,
    pub project_code: String,
    pub name: String,
    pub description: String,
    pub status: i64,
}

/// Request body for create and update operations.
#[derive(Debug, Serialize)]
pub struct WorkCodePayload {
    pub short_work_code: String,
    pub cost_code: String,
    pub project_code: String,
    pub name: String,
    pub description: Option<String>,
    pub status: u8,
}

impl WorkCodePayload {
    /// Build the wire payload from an already-sanitized and validated draft.
    pub fn from_draft(draft: &WorkCodeDraft) -> Self {
        Self {
            short_work_code: draft.short_work_code.clone(),
            cost_code: draft.cost_code.clone(),
            project_code: draft.project_code.clone(),
            name: draft.name.clone(),
            description: if draft.description.is_empty() {
                None
            } else {
                Some(draft.description.clone())
            },
            status: draft.status.clamp(0, 3) as u8,
        }
    }
}

impl WorkCode {
    /// Rebuild a draft from an existing record, e.g. as the base for an update.
    pub fn to_draft(&self) -> WorkCodeDraft {
        WorkCodeDraft {
            short_work_code: self.short_work_code.clone(),
            cost_code: self.cost_code.clone(),
            project_code: self.project_code.clone(),
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            status: self.status as i64,
        }
    }
}
