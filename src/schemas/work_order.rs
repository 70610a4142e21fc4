//! Work-order snapshot schema
//!
//! The read-only projection of a work order that the workflow guards look at.
//! Field names follow the backend's camelCase JSON.

use serde::{Deserialize, Deserializer, Serialize};

use super::Stage;

/// A diagnostic record attached to a work order. Only its presence matters to
/// the workflow; other keys are ignored and the id may be a string, a number
/// or missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
}

impl DiagnosticRecord {
    pub fn new(id: impl Into<String>) -> Self {
        DiagnosticRecord { id: Some(id.into()) }
    }
}

/// Guard-relevant fields of a work order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderSnapshot {
    /// Work-order identifier (null for drafts)
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    /// Stage the backend currently records for this work order
    #[serde(default)]
    pub current_stage: Stage,

    /// Estimated repair cost quoted to the customer
    #[serde(default)]
    pub estimated_cost: Option<f64>,

    /// Final cost after the repair
    #[serde(default)]
    pub actual_cost: Option<f64>,

    /// Assigned technician (null if unassigned)
    #[serde(default, deserialize_with = "string_or_number")]
    pub technician_id: Option<String>,

    /// Diagnostic records; `null` reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub diagnostics: Vec<DiagnosticRecord>,
}

/// Backend identifiers arrive as strings or integers; both read as text
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Identifier {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Identifier>::deserialize(deserializer)? {
        Some(Identifier::Text(text)) => Some(text),
        Some(Identifier::Number(number)) => Some(number.to_string()),
        None => None,
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DiagnosticRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DiagnosticRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A cost counts as set when it is present, finite and non-zero
fn cost_is_set(cost: Option<f64>) -> bool {
    matches!(cost, Some(c) if c.is_finite() && c != 0.0)
}

impl WorkOrderSnapshot {
    /// Create an empty snapshot at the given stage
    pub fn at_stage(stage: Stage) -> Self {
        WorkOrderSnapshot {
            current_stage: stage,
            ..Default::default()
        }
    }

    pub fn has_estimated_cost(&self) -> bool {
        cost_is_set(self.estimated_cost)
    }

    pub fn has_actual_cost(&self) -> bool {
        cost_is_set(self.actual_cost)
    }

    pub fn has_technician(&self) -> bool {
        self.technician_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty())
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a copy with the given identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Return a copy at the given stage
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.current_stage = stage;
        self
    }

    /// Return a copy with the given estimated cost
    pub fn with_estimated_cost(mut self, cost: Option<f64>) -> Self {
        self.estimated_cost = cost;
        self
    }

    /// Return a copy with the given actual cost
    pub fn with_actual_cost(mut self, cost: Option<f64>) -> Self {
        self.actual_cost = cost;
        self
    }

    /// Return a copy with the given technician assignment
    pub fn with_technician(mut self, technician_id: Option<String>) -> Self {
        self.technician_id = technician_id;
        self
    }

    /// Return a copy with one more diagnostic record
    pub fn with_diagnostic(mut self, record: DiagnosticRecord) -> Self {
        self.diagnostics.push(record);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_backend_json() {
        let json = r#"{
            "id": "WO-1042",
            "currentStage": "EXECUTION",
            "estimatedCost": 3000,
            "actualCost": null,
            "technicianId": "tech-7",
            "diagnostics": [{"id": "d1"}, {"id": "d2"}]
        }"#;
        let snapshot: WorkOrderSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.id.as_deref(), Some("WO-1042"));
        assert_eq!(snapshot.current_stage, Stage::Execution);
        assert_eq!(snapshot.estimated_cost, Some(3000.0));
        assert_eq!(snapshot.actual_cost, None);
        assert_eq!(snapshot.technician_id.as_deref(), Some("tech-7"));
        assert_eq!(snapshot.diagnostics.len(), 2);
    }

    #[test]
    fn test_missing_fields_default() {
        let snapshot: WorkOrderSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, WorkOrderSnapshot::default());
        assert_eq!(snapshot.current_stage, Stage::Triage);
        assert!(snapshot.diagnostics.is_empty());
    }

    #[test]
    fn test_null_diagnostics_read_as_empty() {
        let snapshot: WorkOrderSnapshot =
            serde_json::from_str(r#"{"currentStage": "QA", "diagnostics": null}"#).unwrap();
        assert!(!snapshot.has_diagnostics());
    }

    #[test]
    fn test_numeric_ids_read_as_text() {
        let json = r#"{
            "id": 1042,
            "currentStage": "EXECUTION",
            "technicianId": 7,
            "diagnostics": [{"id": 17}]
        }"#;
        let snapshot: WorkOrderSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.id.as_deref(), Some("1042"));
        assert_eq!(snapshot.technician_id.as_deref(), Some("7"));
        assert_eq!(snapshot.diagnostics[0].id.as_deref(), Some("17"));
        assert!(snapshot.has_technician());
    }

    #[test]
    fn test_diagnostic_content_is_ignored() {
        let json = r#"{
            "currentStage": "EXECUTION",
            "diagnostics": [{}, {"symptom": "no power", "id": null}]
        }"#;
        let snapshot: WorkOrderSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.diagnostics.len(), 2);
        assert!(snapshot.has_diagnostics());
        assert!(snapshot.diagnostics[0].id.is_none());
    }

    #[test]
    fn test_cost_presence() {
        let snapshot = WorkOrderSnapshot::default();
        assert!(!snapshot.has_estimated_cost());

        assert!(!snapshot.clone().with_estimated_cost(Some(0.0)).has_estimated_cost());
        assert!(!snapshot.clone().with_estimated_cost(Some(f64::NAN)).has_estimated_cost());
        assert!(snapshot.clone().with_estimated_cost(Some(5000.0)).has_estimated_cost());
        assert!(snapshot.with_actual_cost(Some(1.5)).has_actual_cost());
    }

    #[test]
    fn test_blank_technician_is_unassigned() {
        let snapshot = WorkOrderSnapshot::default();
        assert!(!snapshot.has_technician());
        assert!(!snapshot.clone().with_technician(Some("  ".into())).has_technician());
        assert!(snapshot.with_technician(Some("tech-1".into())).has_technician());
    }

    #[test]
    fn test_builders_leave_original_unchanged() {
        let original = WorkOrderSnapshot::at_stage(Stage::Execution);
        let updated = original
            .clone()
            .with_diagnostic(DiagnosticRecord::new("d1"))
            .with_stage(Stage::Qa);

        assert_eq!(updated.current_stage, Stage::Qa);
        assert_eq!(updated.diagnostics.len(), 1);
        assert_eq!(original.current_stage, Stage::Execution);
        assert!(original.diagnostics.is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let snapshot = WorkOrderSnapshot::at_stage(Stage::Quotation)
            .with_id("WO-1")
            .with_estimated_cost(Some(3000.0));
        let json = serde_json::to_string(&snapshot).unwrap();

        assert!(json.contains("\"currentStage\":\"QUOTATION\""));
        assert!(json.contains("\"estimatedCost\":3000.0"));
        assert!(json.contains("\"technicianId\":null"));
    }
}
