//! Response normalization.
//!
//! The indexer has returned records in several envelopes over time: a bare
//! array, an array under `data` or `results`, records wrapped under their
//! entity name, and transactions nested under `tx` next to their mapping
//! list. Everything reduces to one flat array of typed records here. Nothing
//! in this module fails: unreadable input yields fewer records, never an
//! error.

use serde_json::{Map, Value};
use tracing::debug;

use super::types::{Entity, EntityKind};

/// Declarative per-kind reshaping applied after envelope unwrap
#[derive(Debug)]
pub struct RecordShape {
    /// Object key holding the record proper, when the record is nested
    pub inner_key: Option<&'static str>,
    /// Sibling keys of `inner_key` carried into the record, `(from, to)`
    pub attachments: &'static [(&'static str, &'static str)],
    /// Field renames, `(wire name, normalized name)`
    pub renames: &'static [(&'static str, &'static str)],
}

impl RecordShape {
    pub const PASSTHROUGH: RecordShape = RecordShape {
        inner_key: None,
        attachments: &[],
        renames: &[],
    };

    fn apply(&self, record: Value) -> Value {
        let Value::Object(mut outer) = record else {
            return record;
        };

        let mut fields = match self.inner_key.and_then(|key| outer.remove(key)) {
            Some(Value::Object(mut inner)) => {
                for (from, to) in self.attachments {
                    if let Some(value) = outer.remove(*from) {
                        inner.insert((*to).to_string(), value);
                    }
                }
                inner
            }
            Some(other) => {
                // Not a nested record after all; put it back untouched
                if let Some(key) = self.inner_key {
                    outer.insert(key.to_string(), other);
                }
                outer
            }
            None => outer,
        };

        rename_fields(&mut fields, self.renames);
        Value::Object(fields)
    }
}

fn rename_fields(fields: &mut Map<String, Value>, renames: &[(&str, &str)]) {
    for (from, to) in renames {
        if let Some(value) = fields.remove(*from) {
            fields.entry((*to).to_string()).or_insert(value);
        }
    }
}

/// Pulls the record array out of whichever envelope the payload uses
pub fn extract_candidates(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match (map.remove("data"), map.remove("results")) {
            (Some(Value::Array(items)), _) => items,
            (_, Some(Value::Array(items))) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Replaces `{ <key>: record }` with `record`; anything else is kept
pub fn unwrap_record(element: Value, key: &str) -> Value {
    match element {
        Value::Object(mut map) => match map.remove(key) {
            Some(inner) if !inner.is_null() => inner,
            _ => Value::Object(map),
        },
        other => other,
    }
}

/// Envelope extraction, unwrap and reshape, without typing
pub fn normalize_records(payload: Value, kind: EntityKind) -> Vec<Value> {
    let shape = kind.shape();
    extract_candidates(payload)
        .into_iter()
        .filter(|element| !element.is_null())
        .map(|element| shape.apply(unwrap_record(element, kind.unwrap_key())))
        .collect()
}

/// Normalizes a raw payload into typed records, dropping unreadable ones
pub fn normalize<T: Entity>(payload: Value) -> Vec<T> {
    normalize_records(payload, T::KIND)
        .into_iter()
        .filter_map(|record| match serde_json::from_value(record) {
            Ok(entity) => Some(entity),
            Err(e) => {
                debug!(kind = T::KIND.path(), error = %e, "dropping unreadable record");
                None
            }
        })
        .collect()
}
