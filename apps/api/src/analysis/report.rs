use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::analysis::empty_fields::collect_empty_fields;
use crate::analysis::labels::field_label;
use crate::analysis::schema::project_scored;
use crate::analysis::score::{completeness_score, TOTAL_RESUME_FIELDS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingField {
    pub path: String,
    pub label: Option<String>,
}

/// Completeness analysis of one extracted résumé.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub score: u32,
    pub missing_fields: Vec<MissingField>,
    pub recommendations: Vec<String>,
    pub extracted: Value,
}

/// Builds a report from the model's raw extraction.
///
/// Only the scored sections are inspected; see [`project_scored`]. Never fails:
/// any JSON value produces a report.
pub fn build_report(extracted: Value) -> AnalysisReport {
    let missing_fields: Vec<MissingField> = collect_empty_fields(&project_scored(&extracted))
        .into_iter()
        .map(|path| MissingField {
            label: field_label(&path).map(String::from),
            path,
        })
        .collect();

    let score = completeness_score(missing_fields.len(), TOTAL_RESUME_FIELDS);
    let recommendations = extract_recommendations(&extracted);

    AnalysisReport {
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        score,
        missing_fields,
        recommendations,
        extracted,
    }
}

/// String items of the model's `recomendations` list (or `recommendations`).
fn extract_recommendations(extracted: &Value) -> Vec<String> {
    extracted
        .get("recomendations")
        .or_else(|| extracted.get("recommendations"))
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|r| r.as_str())
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
