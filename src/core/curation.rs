use std::collections::{HashMap, HashSet};

use serde_json::Value;

/// Before/after counts for a curation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurationReport {
    pub before: usize,
    pub after: usize,
}

impl CurationReport {
    pub fn removed(&self) -> usize {
        self.before - self.after
    }
}

// Curation works on raw catalog records: only the removal rule and the `id`
// renumbering touch the data, every other field is written back untouched.

/// Drop records without an address and renumber the rest from 1
pub fn drop_unaddressed(records: Vec<Value>) -> (Vec<Value>, CurationReport) {
    let before = records.len();
    let kept = renumber(
        records
            .into_iter()
            .filter(|record| !text_field(record, "address").trim().is_empty()),
    );
    let report = CurationReport { before, after: kept.len() };
    (kept, report)
}

/// Drop every location of any name that appears more than once
///
/// Names compare trimmed and lowercased. Survivors are renumbered from 1.
pub fn filter_chains(records: Vec<Value>) -> (Vec<Value>, CurationReport) {
    let before = records.len();

    let mut name_counts: HashMap<String, usize> = HashMap::new();
    for record in &records {
        *name_counts.entry(chain_key(record)).or_insert(0) += 1;
    }

    let chain_names: HashSet<String> = name_counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect();

    tracing::debug!("Detected {} multi-location names", chain_names.len());

    let kept = renumber(
        records
            .into_iter()
            .filter(|record| !chain_names.contains(&chain_key(record))),
    );
    let report = CurationReport { before, after: kept.len() };
    (kept, report)
}

fn chain_key(record: &Value) -> String {
    text_field(record, "name").trim().to_lowercase()
}

/// String view of a loosely typed field; anything else reads as empty
fn text_field(record: &Value, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn renumber(records: impl Iterator<Item = Value>) -> Vec<Value> {
    records
        .zip(1u64..)
        .map(|(mut record, id)| {
            if let Some(fields) = record.as_object_mut() {
                fields.insert("id".to_string(), Value::from(id));
            }
            record
        })
        .collect()
}
