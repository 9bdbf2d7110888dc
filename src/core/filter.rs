//! Client-side search over an in-memory record list.

use crate::api::models::WorkCode;
use crate::core::fields::record_field_value;
use crate::core::validation::sanitize;

/// Narrow `records` to those where at least one visible field contains the
/// query, case-insensitively. An empty (after trimming) query is the
/// identity, preserving the original order; the result is always an
/// order-preserving subsequence of the input. Status compares against its
/// display label, and absent field values never match.
pub fn filter_records(
    records: Vec<WorkCode>,
    query: &str,
    visible_fields: &[String],
) -> Vec<WorkCode> {
    if query.trim().is_empty() {
        return records;
    }

    let needle = sanitize(query).to_lowercase();

    records
        .into_iter()
        .filter(|record| {
            visible_fields.iter().any(|field| {
                record_field_value(record, field)
                    .map(|value| value.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        })
        .collect()
}
