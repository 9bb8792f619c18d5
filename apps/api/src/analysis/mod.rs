// Résumé completeness analysis.
// Implements: empty-field detection, completeness scoring, report assembly.
// The detection and scoring functions are pure and never fail.

pub mod empty_fields;
pub mod handlers;
pub mod labels;
pub mod report;
pub mod schema;
pub mod score;
