//! Expected résumé layout used for scoring.
//!
//! The extraction model is asked for these sections; only their leaves count
//! toward the completeness score.

use serde_json::{Map, Value};

/// Shape of one scored top-level section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionShape {
    /// A single object with a fixed set of scalar leaves.
    Record(&'static [&'static str]),
    /// A list of scalars scored as one leaf (empty or not).
    List,
    /// A list of objects, each with a fixed set of scalar leaves.
    RecordList(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct ScoredSection {
    pub key: &'static str,
    pub shape: SectionShape,
}

pub const CONTACT_FIELDS: &[&str] = &["name", "email", "phone", "address", "linkedIn"];
pub const EXPERIENCE_FIELDS: &[&str] = &["role", "company", "startDate", "endDate"];
pub const EDUCATION_FIELDS: &[&str] = &["institution", "degree", "startDate", "endDate"];

/// Scored sections, in the order their paths are reported.
pub const SCORED_SECTIONS: &[ScoredSection] = &[
    ScoredSection {
        key: "contact",
        shape: SectionShape::Record(CONTACT_FIELDS),
    },
    ScoredSection {
        key: "skills",
        shape: SectionShape::List,
    },
    ScoredSection {
        key: "experience",
        shape: SectionShape::RecordList(EXPERIENCE_FIELDS),
    },
    ScoredSection {
        key: "education",
        shape: SectionShape::RecordList(EDUCATION_FIELDS),
    },
];

/// Projects an extraction onto the scored sections.
///
/// The result is always an object holding exactly the scored section keys in
/// layout order. Absent sections become `null`, and records gain `null` for any
/// expected key the model left out, so a missing key is reported like a `null`
/// one. Unexpected keys and non-object list items are kept as they are.
pub fn project_scored(extraction: &Value) -> Value {
    let mut projected = Map::new();
    for section in SCORED_SECTIONS {
        let value = extraction.get(section.key).cloned().unwrap_or(Value::Null);
        projected.insert(section.key.to_string(), fill_section(section.shape, value));
    }
    Value::Object(projected)
}

fn fill_section(shape: SectionShape, value: Value) -> Value {
    match (shape, value) {
        (SectionShape::Record(fields), Value::Object(map)) => fill_record(fields, map),
        (SectionShape::RecordList(fields), Value::Array(items)) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => fill_record(fields, map),
                    other => other,
                })
                .collect(),
        ),
        (_, other) => other,
    }
}

fn fill_record(fields: &[&str], map: Map<String, Value>) -> Value {
    let mut filled = Map::new();
    for &field in fields {
        let value = map.get(field).cloned().unwrap_or(Value::Null);
        filled.insert(field.to_string(), value);
    }
    // keys outside the layout keep their original relative order
    for (key, value) in map {
        if !fields.contains(&key.as_str()) {
            filled.insert(key, value);
        }
    }
    Value::Object(filled)
}
