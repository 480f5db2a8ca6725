//! Request options and response shapes of the classification API.
//!
//! | Type | Returned by |
//! |------|-------------|
//! | [`ClassificationResult`] | `classify`, `classify_batch`, `classify_short`, dashboard variants |
//! | [`WindowedResult`] | `classify_windowed`, `classify_extended` |
//! | [`PlagiarismResult`] | `check_plagiarism` |
//!
//! All result types keep fields they do not model in an `extra` map, so a
//! response from a newer API revision decodes without losing data.

pub mod classification;
pub mod plagiarism;
pub mod windowed;

pub use classification::{ClassificationResult, ClassifyOptions};
pub use plagiarism::{PlagiarismResult, PlagiarizedSource};
pub use windowed::{Window, WindowedResult};

use serde_json::Value;

/// Field pairs where older revisions used the second spelling.
const FIELD_ALIASES: [(&str, &str); 3] = [
    ("ai_likelihood", "likelihood"),
    ("dashboard_link", "dashboard_url"),
    ("source_url", "url"),
];

/// Keeps one spelling per aliased field, everywhere in `value`.
///
/// A non-null primary spelling wins and the secondary is dropped; otherwise a
/// null primary is dropped so the secondary decodes through its serde alias.
pub(crate) fn dedupe_aliases(value: &mut Value) {
    match value {
        Value::Object(obj) => {
            for (primary, secondary) in FIELD_ALIASES {
                if !obj.contains_key(secondary) {
                    continue;
                }
                match obj.get(primary) {
                    Some(v) if !v.is_null() => {
                        obj.remove(secondary);
                    }
                    Some(_) => {
                        obj.remove(primary);
                    }
                    None => {}
                }
            }
            obj.values_mut().for_each(dedupe_aliases);
        }
        Value::Array(items) => items.iter_mut().for_each(dedupe_aliases),
        _ => {}
    }
}

pub(crate) fn in_unit_range(score: Option<f64>) -> bool {
    score.map_or(true, |s| (0.0..=1.0).contains(&s))
}
