//! The use case document: single source of truth for all form content

use super::completion::{CompletionSummary, TOTAL_SECTIONS};
use super::records::{
    find_mut, remove_by_id, FailureMode, KpiEntry, RecordId, RecordKind, RecordUpdate,
    RolloutPhase, WorkflowStep,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Closed set of scalar fields in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    Title,
    Summary,
    ProblemDescription,
    EvidenceType,
    EvidenceDetails,
    SelectedDepartment,
    PainPoints,
    PrimaryStakeholders,
    Beneficiaries,
    ImpactedRoles,
    BusinessImpact,
    SystemsInvolved,
    TechStack,
    ApiIntegrations,
    DataFlow,
    Architecture,
    DevelopmentPhases,
    MonitoringStrategy,
    DataClassification,
    SecurityMeasures,
    PrivacyCompliance,
    AccessControls,
    ChangeManagement,
    SuccessMetrics,
}

impl ScalarField {
    #[cfg(test)]
    pub const ALL: [ScalarField; 24] = [
        Self::Title,
        Self::Summary,
        Self::ProblemDescription,
        Self::EvidenceType,
        Self::EvidenceDetails,
        Self::SelectedDepartment,
        Self::PainPoints,
        Self::PrimaryStakeholders,
        Self::Beneficiaries,
        Self::ImpactedRoles,
        Self::BusinessImpact,
        Self::SystemsInvolved,
        Self::TechStack,
        Self::ApiIntegrations,
        Self::DataFlow,
        Self::Architecture,
        Self::DevelopmentPhases,
        Self::MonitoringStrategy,
        Self::DataClassification,
        Self::SecurityMeasures,
        Self::PrivacyCompliance,
        Self::AccessControls,
        Self::ChangeManagement,
        Self::SuccessMetrics,
    ];

    /// Key under which the field is exported
    pub fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Summary => "summary",
            Self::ProblemDescription => "problemDescription",
            Self::EvidenceType => "evidenceType",
            Self::EvidenceDetails => "evidenceDetails",
            Self::SelectedDepartment => "selectedDepartment",
            Self::PainPoints => "painPoints",
            Self::PrimaryStakeholders => "primaryStakeholders",
            Self::Beneficiaries => "beneficiaries",
            Self::ImpactedRoles => "impactedRoles",
            Self::BusinessImpact => "businessImpact",
            Self::SystemsInvolved => "systemsInvolved",
            Self::TechStack => "techStack",
            Self::ApiIntegrations => "apiIntegrations",
            Self::DataFlow => "dataFlow",
            Self::Architecture => "architecture",
            Self::DevelopmentPhases => "developmentPhases",
            Self::MonitoringStrategy => "monitoringStrategy",
            Self::DataClassification => "dataClassification",
            Self::SecurityMeasures => "securityMeasures",
            Self::PrivacyCompliance => "privacyCompliance",
            Self::AccessControls => "accessControls",
            Self::ChangeManagement => "changeManagement",
            Self::SuccessMetrics => "successMetrics",
        }
    }

    /// Label shown above the input
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Project Title",
            Self::Summary => "One-Line Problem Summary",
            Self::ProblemDescription => "Detailed Problem Description",
            Self::EvidenceType => "Evidence Type",
            Self::EvidenceDetails => "Evidence Details",
            Self::SelectedDepartment => "Target Department",
            Self::PainPoints => "Key Pain Points",
            Self::PrimaryStakeholders => "Primary Stakeholders",
            Self::Beneficiaries => "Key Beneficiaries",
            Self::ImpactedRoles => "Impacted Roles & Departments",
            Self::BusinessImpact => "Overall Business Impact",
            Self::SystemsInvolved => "Systems & Integrations Involved",
            Self::TechStack => "Technology Stack",
            Self::ApiIntegrations => "API Integrations",
            Self::DataFlow => "Data Flow & Processing",
            Self::Architecture => "System Architecture",
            Self::DevelopmentPhases => "Development Phases",
            Self::MonitoringStrategy => "Monitoring & Alerting Strategy",
            Self::DataClassification => "Data Classification & Sensitivity",
            Self::SecurityMeasures => "Security Measures & Controls",
            Self::PrivacyCompliance => "Privacy & Compliance",
            Self::AccessControls => "Access Controls & Authorization",
            Self::ChangeManagement => "Change Management Strategy",
            Self::SuccessMetrics => "Success Metrics & Monitoring",
        }
    }

    /// Whether the input accepts newlines
    pub fn is_multiline(self) -> bool {
        !matches!(
            self,
            Self::Title | Self::EvidenceType | Self::EvidenceDetails | Self::SelectedDepartment
        )
    }
}

/// Every field of the document, in export order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContent {
    // Title & Summary
    pub title: String,
    pub summary: String,

    // Problem & Evidence
    pub problem_description: String,
    pub evidence_type: String,
    pub evidence_details: String,
    pub selected_department: String,
    pub pain_points: String,

    // Stakeholders
    pub primary_stakeholders: String,
    pub beneficiaries: String,
    pub impacted_roles: String,

    // KPIs & Impact
    pub kpi_metrics: Vec<KpiEntry>,
    pub business_impact: String,

    // Multi-Step Use Case
    pub workflow_steps: Vec<WorkflowStep>,
    pub systems_involved: String,

    // Development Approach
    pub tech_stack: String,
    pub api_integrations: String,
    pub data_flow: String,
    pub architecture: String,
    pub development_phases: String,

    // Failure Modes
    pub failure_modes: Vec<FailureMode>,
    pub monitoring_strategy: String,

    // Security & Privacy
    pub data_classification: String,
    pub security_measures: String,
    pub privacy_compliance: String,
    pub access_controls: String,
    pub security_checklist: Vec<String>,

    // Rollout Plan
    pub rollout_phases: Vec<RolloutPhase>,
    pub change_management: String,
    pub success_metrics: String,
}

impl DocumentContent {
    /// Read a scalar field
    pub fn field(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Title => &self.title,
            ScalarField::Summary => &self.summary,
            ScalarField::ProblemDescription => &self.problem_description,
            ScalarField::EvidenceType => &self.evidence_type,
            ScalarField::EvidenceDetails => &self.evidence_details,
            ScalarField::SelectedDepartment => &self.selected_department,
            ScalarField::PainPoints => &self.pain_points,
            ScalarField::PrimaryStakeholders => &self.primary_stakeholders,
            ScalarField::Beneficiaries => &self.beneficiaries,
            ScalarField::ImpactedRoles => &self.impacted_roles,
            ScalarField::BusinessImpact => &self.business_impact,
            ScalarField::SystemsInvolved => &self.systems_involved,
            ScalarField::TechStack => &self.tech_stack,
            ScalarField::ApiIntegrations => &self.api_integrations,
            ScalarField::DataFlow => &self.data_flow,
            ScalarField::Architecture => &self.architecture,
            ScalarField::DevelopmentPhases => &self.development_phases,
            ScalarField::MonitoringStrategy => &self.monitoring_strategy,
            ScalarField::DataClassification => &self.data_classification,
            ScalarField::SecurityMeasures => &self.security_measures,
            ScalarField::PrivacyCompliance => &self.privacy_compliance,
            ScalarField::AccessControls => &self.access_controls,
            ScalarField::ChangeManagement => &self.change_management,
            ScalarField::SuccessMetrics => &self.success_metrics,
        }
    }

    fn field_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::Title => &mut self.title,
            ScalarField::Summary => &mut self.summary,
            ScalarField::ProblemDescription => &mut self.problem_description,
            ScalarField::EvidenceType => &mut self.evidence_type,
            ScalarField::EvidenceDetails => &mut self.evidence_details,
            ScalarField::SelectedDepartment => &mut self.selected_department,
            ScalarField::PainPoints => &mut self.pain_points,
            ScalarField::PrimaryStakeholders => &mut self.primary_stakeholders,
            ScalarField::Beneficiaries => &mut self.beneficiaries,
            ScalarField::ImpactedRoles => &mut self.impacted_roles,
            ScalarField::BusinessImpact => &mut self.business_impact,
            ScalarField::SystemsInvolved => &mut self.systems_involved,
            ScalarField::TechStack => &mut self.tech_stack,
            ScalarField::ApiIntegrations => &mut self.api_integrations,
            ScalarField::DataFlow => &mut self.data_flow,
            ScalarField::Architecture => &mut self.architecture,
            ScalarField::DevelopmentPhases => &mut self.development_phases,
            ScalarField::MonitoringStrategy => &mut self.monitoring_strategy,
            ScalarField::DataClassification => &mut self.data_classification,
            ScalarField::SecurityMeasures => &mut self.security_measures,
            ScalarField::PrivacyCompliance => &mut self.privacy_compliance,
            ScalarField::AccessControls => &mut self.access_controls,
            ScalarField::ChangeManagement => &mut self.change_management,
            ScalarField::SuccessMetrics => &mut self.success_metrics,
        }
    }

    /// Number of records in a list
    pub fn record_count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Kpi => self.kpi_metrics.len(),
            RecordKind::WorkflowStep => self.workflow_steps.len(),
            RecordKind::FailureMode => self.failure_modes.len(),
            RecordKind::RolloutPhase => self.rollout_phases.len(),
        }
    }
}

/// A mutation of the document, dispatched by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentAction {
    SetField(ScalarField, String),
    AppendToField(ScalarField, String),
    AddRecord(RecordKind),
    UpdateRecord(RecordId, RecordUpdate),
    RemoveRecord(RecordKind, RecordId),
    ToggleChecklist { label: String, included: bool },
}

/// Result of applying a [`DocumentAction`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    Added(RecordId),
    /// The action referenced a record that no longer exists, or changed nothing
    Ignored,
}

/// Owned document state with a version counter bumped on every change
#[derive(Debug, Clone, Default)]
pub struct UseCaseDocument {
    content: DocumentContent,
    version: u64,
}

impl UseCaseDocument {
    pub fn content(&self) -> &DocumentContent {
        &self.content
    }

    /// Monotonic counter of applied changes
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn field(&self, field: ScalarField) -> &str {
        self.content.field(field)
    }

    /// Overwrite a scalar field
    pub fn set_field(&mut self, field: ScalarField, value: impl Into<String>) {
        *self.content.field_mut(field) = value.into();
        tracing::trace!("Set {}", field.key());
        self.bump();
    }

    /// Append a suggestion to a free-text field, comma separated
    pub fn append_to_field(&mut self, field: ScalarField, text: &str) {
        let slot = self.content.field_mut(field);
        if !slot.is_empty() {
            slot.push_str(", ");
        }
        slot.push_str(text);
        self.bump();
    }

    /// Append an empty record with a fresh id to the given list
    pub fn add_record(&mut self, kind: RecordKind) -> RecordId {
        let id = RecordId::generate();
        let content = &mut self.content;
        match kind {
            RecordKind::Kpi => content.kpi_metrics.push(KpiEntry::new(id.clone())),
            RecordKind::WorkflowStep => {
                let step_number = content.workflow_steps.len() as u32 + 1;
                content
                    .workflow_steps
                    .push(WorkflowStep::new(id.clone(), step_number));
            }
            RecordKind::FailureMode => content.failure_modes.push(FailureMode::new(id.clone())),
            RecordKind::RolloutPhase => {
                content.rollout_phases.push(RolloutPhase::new(id.clone()));
            }
        }
        self.bump();
        tracing::debug!("Added {} record {id}", kind.key());
        id
    }

    /// Replace one sub-field of a record. Unknown ids are ignored.
    pub fn update_record(&mut self, id: &RecordId, update: RecordUpdate) -> bool {
        let content = &mut self.content;
        let updated = match update {
            RecordUpdate::Kpi(field, value) => find_mut(&mut content.kpi_metrics, id)
                .map(|r| r.apply(field, value))
                .is_some(),
            RecordUpdate::Workflow(update) => find_mut(&mut content.workflow_steps, id)
                .map(|r| r.apply(update))
                .is_some(),
            RecordUpdate::Failure(field, value) => find_mut(&mut content.failure_modes, id)
                .map(|r| r.apply(field, value))
                .is_some(),
            RecordUpdate::Rollout(field, value) => find_mut(&mut content.rollout_phases, id)
                .map(|r| r.apply(field, value))
                .is_some(),
        };
        if updated {
            self.bump();
        }
        updated
    }

    /// Remove a record. Workflow steps are renumbered afterwards; the
    /// other lists keep their contents as they are.
    pub fn remove_record(&mut self, kind: RecordKind, id: &RecordId) -> bool {
        let content = &mut self.content;
        let removed = match kind {
            RecordKind::Kpi => remove_by_id(&mut content.kpi_metrics, id),
            RecordKind::WorkflowStep => {
                let removed = remove_by_id(&mut content.workflow_steps, id);
                if removed {
                    for (index, step) in content.workflow_steps.iter_mut().enumerate() {
                        step.step_number = index as u32 + 1;
                    }
                }
                removed
            }
            RecordKind::FailureMode => remove_by_id(&mut content.failure_modes, id),
            RecordKind::RolloutPhase => remove_by_id(&mut content.rollout_phases, id),
        };
        if removed {
            self.bump();
            tracing::debug!("Removed {} record {id}", kind.key());
        }
        removed
    }

    /// Add or remove a checklist label. Idempotent in both directions.
    pub fn toggle_checklist_item(&mut self, label: &str, included: bool) {
        let checklist = &mut self.content.security_checklist;
        let present = checklist.iter().any(|item| item == label);
        match (included, present) {
            (true, false) => checklist.push(label.to_string()),
            (false, true) => checklist.retain(|item| item != label),
            _ => return,
        }
        self.bump();
    }

    pub fn is_checked(&self, label: &str) -> bool {
        self.content
            .security_checklist
            .iter()
            .any(|item| item == label)
    }

    /// Apply a dispatched action
    pub fn apply(&mut self, action: DocumentAction) -> ActionOutcome {
        match action {
            DocumentAction::SetField(field, value) => {
                self.set_field(field, value);
                ActionOutcome::Applied
            }
            DocumentAction::AppendToField(field, text) => {
                self.append_to_field(field, &text);
                ActionOutcome::Applied
            }
            DocumentAction::AddRecord(kind) => ActionOutcome::Added(self.add_record(kind)),
            DocumentAction::UpdateRecord(id, update) => {
                if self.update_record(&id, update) {
                    ActionOutcome::Applied
                } else {
                    ActionOutcome::Ignored
                }
            }
            DocumentAction::RemoveRecord(kind, id) => {
                if self.remove_record(kind, &id) {
                    ActionOutcome::Applied
                } else {
                    ActionOutcome::Ignored
                }
            }
            DocumentAction::ToggleChecklist { label, included } => {
                let before = self.version;
                self.toggle_checklist_item(&label, included);
                if self.version == before {
                    ActionOutcome::Ignored
                } else {
                    ActionOutcome::Applied
                }
            }
        }
    }

    /// Deep copy of the current state stamped with the current time
    pub fn snapshot(&self) -> DocumentSnapshot {
        self.snapshot_at(Utc::now())
    }

    pub fn snapshot_at(&self, exported_at: DateTime<Utc>) -> DocumentSnapshot {
        let summary = CompletionSummary::evaluate(&self.content);
        DocumentSnapshot {
            content: self.content.clone(),
            exported_at,
            completed_sections: summary.completed(),
            total_sections: TOTAL_SECTIONS,
        }
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

/// Immutable export view of the document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    #[serde(flatten)]
    pub content: DocumentContent,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub exported_at: DateTime<Utc>,
    pub completed_sections: usize,
    pub total_sections: usize,
}

/// ISO-8601 with millisecond precision and a `Z` suffix
fn serialize_iso_millis<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::records::{FailureField, KpiField, WorkflowField, WorkflowStepUpdate};
    use chrono::TimeZone;

    fn step_numbers(doc: &UseCaseDocument) -> Vec<u32> {
        doc.content()
            .workflow_steps
            .iter()
            .map(|s| s.step_number)
            .collect()
    }

    mod scalar_fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_document_is_empty() {
            let doc = UseCaseDocument::default();
            for field in ScalarField::ALL {
                assert_eq!(doc.field(field), "", "{} should start empty", field.key());
            }
            assert_eq!(doc.version(), 0);
        }

        #[test]
        fn test_set_field_overwrites() {
            let mut doc = UseCaseDocument::default();
            doc.set_field(ScalarField::Title, "First");
            doc.set_field(ScalarField::Title, "Invoice Bot");
            assert_eq!(doc.field(ScalarField::Title), "Invoice Bot");
            assert_eq!(doc.version(), 2);
        }

        #[test]
        fn test_append_to_field_joins_with_comma() {
            let mut doc = UseCaseDocument::default();
            doc.append_to_field(ScalarField::PrimaryStakeholders, "CFO");
            doc.append_to_field(ScalarField::PrimaryStakeholders, "IT Admin");
            assert_eq!(doc.field(ScalarField::PrimaryStakeholders), "CFO, IT Admin");
        }

    }

    mod records {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_add_workflow_step_numbers_sequentially() {
            let mut doc = UseCaseDocument::default();
            for _ in 0..3 {
                doc.add_record(RecordKind::WorkflowStep);
            }
            assert_eq!(step_numbers(&doc), vec![1, 2, 3]);
        }

        #[test]
        fn test_remove_workflow_step_renumbers() {
            let mut doc = UseCaseDocument::default();
            let ids: Vec<_> = (0..4)
                .map(|_| doc.add_record(RecordKind::WorkflowStep))
                .collect();

            assert!(doc.remove_record(RecordKind::WorkflowStep, &ids[1]));
            assert_eq!(step_numbers(&doc), vec![1, 2, 3]);

            assert!(doc.remove_record(RecordKind::WorkflowStep, &ids[0]));
            assert_eq!(step_numbers(&doc), vec![1, 2]);

            let id = doc.add_record(RecordKind::WorkflowStep);
            assert_eq!(step_numbers(&doc), vec![1, 2, 3]);

            assert!(doc.remove_record(RecordKind::WorkflowStep, &id));
            assert_eq!(step_numbers(&doc), vec![1, 2]);
            assert_eq!(doc.content().workflow_steps[0].id, ids[2]);
        }

        #[test]
        fn test_step_numbers_stay_contiguous_over_mixed_sequence() {
            let mut doc = UseCaseDocument::default();
            let mut ids = Vec::new();
            for round in 0..6 {
                ids.push(doc.add_record(RecordKind::WorkflowStep));
                ids.push(doc.add_record(RecordKind::WorkflowStep));
                let victim = ids.remove(round % ids.len());
                doc.remove_record(RecordKind::WorkflowStep, &victim);
                let expected: Vec<u32> = (1..=ids.len() as u32).collect();
                assert_eq!(step_numbers(&doc), expected);
            }
        }

        #[test]
        fn test_remove_does_not_renumber_other_lists() {
            let mut doc = UseCaseDocument::default();
            let first = doc.add_record(RecordKind::Kpi);
            let second = doc.add_record(RecordKind::Kpi);
            doc.remove_record(RecordKind::Kpi, &first);
            assert_eq!(doc.content().kpi_metrics.len(), 1);
            assert_eq!(doc.content().kpi_metrics[0].id, second);
        }

        #[test]
        fn test_ids_unique_within_list() {
            let mut doc = UseCaseDocument::default();
            let a = doc.add_record(RecordKind::FailureMode);
            let b = doc.add_record(RecordKind::FailureMode);
            assert_ne!(a, b);
        }

        #[test]
        fn test_update_record_sets_field() {
            let mut doc = UseCaseDocument::default();
            let id = doc.add_record(RecordKind::Kpi);
            assert!(doc.update_record(&id, RecordUpdate::Kpi(KpiField::Metric, "Time".into())));
            assert_eq!(doc.content().kpi_metrics[0].metric, "Time");
        }

        #[test]
        fn test_update_unknown_id_is_noop() {
            let mut doc = UseCaseDocument::default();
            doc.add_record(RecordKind::FailureMode);
            let before = doc.content().failure_modes.clone();
            let version = doc.version();

            let changed = doc.update_record(
                &RecordId::from("missing"),
                RecordUpdate::Failure(FailureField::Scenario, "Outage".into()),
            );

            assert!(!changed);
            assert_eq!(doc.content().failure_modes, before);
            assert_eq!(doc.version(), version);
        }

        #[test]
        fn test_update_with_wrong_list_id_is_noop() {
            let mut doc = UseCaseDocument::default();
            let kpi = doc.add_record(RecordKind::Kpi);
            doc.add_record(RecordKind::WorkflowStep);
            let changed = doc.update_record(
                &kpi,
                RecordUpdate::Workflow(WorkflowStepUpdate::Text(
                    WorkflowField::Title,
                    "x".into(),
                )),
            );
            assert!(!changed);
            assert_eq!(doc.content().workflow_steps[0].title, "");
        }

        #[test]
        fn test_remove_unknown_id_is_noop() {
            let mut doc = UseCaseDocument::default();
            doc.add_record(RecordKind::RolloutPhase);
            assert!(!doc.remove_record(RecordKind::RolloutPhase, &RecordId::from("nope")));
            assert_eq!(doc.content().rollout_phases.len(), 1);
        }
    }

    mod checklist {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_toggle_on_is_idempotent() {
            let mut doc = UseCaseDocument::default();
            doc.toggle_checklist_item("Audit logging for all operations", true);
            doc.toggle_checklist_item("Audit logging for all operations", true);
            assert_eq!(
                doc.content().security_checklist,
                vec!["Audit logging for all operations".to_string()]
            );
        }

        #[test]
        fn test_toggle_off_removes_and_is_idempotent() {
            let mut doc = UseCaseDocument::default();
            doc.toggle_checklist_item("MFA", true);
            doc.toggle_checklist_item("MFA", false);
            doc.toggle_checklist_item("MFA", false);
            assert!(doc.content().security_checklist.is_empty());
            assert!(!doc.is_checked("MFA"));
        }
    }

    mod actions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_apply_add_returns_id() {
            let mut doc = UseCaseDocument::default();
            let outcome = doc.apply(DocumentAction::AddRecord(RecordKind::RolloutPhase));
            match outcome {
                ActionOutcome::Added(id) => assert_eq!(doc.content().rollout_phases[0].id, id),
                other => panic!("unexpected outcome {other:?}"),
            }
        }

        #[test]
        fn test_apply_stale_update_is_ignored() {
            let mut doc = UseCaseDocument::default();
            let outcome = doc.apply(DocumentAction::UpdateRecord(
                RecordId::from("gone"),
                RecordUpdate::Kpi(KpiField::Target, "1".into()),
            ));
            assert_eq!(outcome, ActionOutcome::Ignored);
        }

        #[test]
        fn test_apply_repeated_toggle_is_ignored() {
            let mut doc = UseCaseDocument::default();
            let label = "MFA".to_string();
            let first = doc.apply(DocumentAction::ToggleChecklist {
                label: label.clone(),
                included: true,
            });
            let second = doc.apply(DocumentAction::ToggleChecklist {
                label,
                included: true,
            });
            assert_eq!(first, ActionOutcome::Applied);
            assert_eq!(second, ActionOutcome::Ignored);
        }
    }

    mod snapshot {
        use super::*;
        use pretty_assertions::assert_eq;

        fn fixed_time() -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
        }

        #[test]
        fn test_snapshot_unaffected_by_later_mutation() {
            let mut doc = UseCaseDocument::default();
            doc.set_field(ScalarField::Title, "Invoice Bot");
            let id = doc.add_record(RecordKind::Kpi);
            let before = doc.snapshot_at(fixed_time());

            doc.update_record(&id, RecordUpdate::Kpi(KpiField::Metric, "Time".into()));
            doc.toggle_checklist_item("MFA", true);
            let after = doc.snapshot_at(fixed_time());

            assert_eq!(before.content.kpi_metrics[0].metric, "");
            assert!(before.content.security_checklist.is_empty());
            assert_eq!(after.content.kpi_metrics[0].metric, "Time");

            let mut patched = before.content.clone();
            patched.kpi_metrics[0].metric = "Time".into();
            patched.security_checklist.push("MFA".into());
            assert_eq!(patched, after.content);
        }

        #[test]
        fn test_snapshot_counts_sections() {
            let mut doc = UseCaseDocument::default();
            doc.set_field(ScalarField::Title, "Invoice Bot");
            doc.set_field(ScalarField::Summary, "cuts manual work");
            let snapshot = doc.snapshot_at(fixed_time());
            assert_eq!(snapshot.completed_sections, 1);
            assert_eq!(snapshot.total_sections, 9);
        }

        #[test]
        fn test_snapshot_timestamp_format() {
            let doc = UseCaseDocument::default();
            let json = serde_json::to_value(doc.snapshot_at(fixed_time())).unwrap();
            assert_eq!(json["exportedAt"], "2024-05-01T12:30:00.000Z");
        }

        #[test]
        fn test_empty_snapshot_has_every_key() {
            let doc = UseCaseDocument::default();
            let json = serde_json::to_value(doc.snapshot_at(fixed_time())).unwrap();
            let object = json.as_object().unwrap();

            for field in ScalarField::ALL {
                assert_eq!(object[field.key()], "", "missing {}", field.key());
            }
            for kind in [
                RecordKind::Kpi,
                RecordKind::WorkflowStep,
                RecordKind::FailureMode,
                RecordKind::RolloutPhase,
            ] {
                assert_eq!(object[kind.key()], serde_json::json!([]));
            }
            assert_eq!(object["securityChecklist"], serde_json::json!([]));
            assert_eq!(object["completedSections"], 0);
            assert_eq!(object["totalSections"], 9);
            assert_eq!(object.len(), ScalarField::ALL.len() + 4 + 1 + 3);
        }
    }
}
