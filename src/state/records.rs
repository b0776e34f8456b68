//! Repeated-record types held in the document lists

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a record within one of the document lists
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The four record lists of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Kpi,
    WorkflowStep,
    FailureMode,
    RolloutPhase,
}

impl RecordKind {
    /// Singular noun used in buttons and card titles
    pub fn label(self) -> &'static str {
        match self {
            Self::Kpi => "KPI",
            Self::WorkflowStep => "Step",
            Self::FailureMode => "Failure Mode",
            Self::RolloutPhase => "Phase",
        }
    }

    /// Export key of the list
    pub fn key(self) -> &'static str {
        match self {
            Self::Kpi => "kpiMetrics",
            Self::WorkflowStep => "workflowSteps",
            Self::FailureMode => "failureModes",
            Self::RolloutPhase => "rolloutPhases",
        }
    }
}

/// Common access to the identifier of a record
pub trait Record {
    fn id(&self) -> &RecordId;
}

/// KPI entry: {id, metric, current, target, impact}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiEntry {
    pub id: RecordId,
    pub metric: String,
    pub current: String,
    pub target: String,
    pub impact: String,
}

impl KpiEntry {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            metric: String::new(),
            current: String::new(),
            target: String::new(),
            impact: String::new(),
        }
    }
}

/// Editable sub-fields of a KPI entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KpiField {
    Metric,
    Current,
    Target,
    Impact,
}

impl KpiField {
    pub const ALL: [KpiField; 4] = [Self::Metric, Self::Current, Self::Target, Self::Impact];

    pub fn label(self) -> &'static str {
        match self {
            Self::Metric => "Metric Name",
            Self::Current => "Current State",
            Self::Target => "Target State",
            Self::Impact => "Impact",
        }
    }

    pub fn get(self, entry: &KpiEntry) -> &str {
        match self {
            Self::Metric => &entry.metric,
            Self::Current => &entry.current,
            Self::Target => &entry.target,
            Self::Impact => &entry.impact,
        }
    }

    fn slot(self, entry: &mut KpiEntry) -> &mut String {
        match self {
            Self::Metric => &mut entry.metric,
            Self::Current => &mut entry.current,
            Self::Target => &mut entry.target,
            Self::Impact => &mut entry.impact,
        }
    }
}

/// Workflow step. `step_number` is kept equal to its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub id: RecordId,
    pub step_number: u32,
    pub title: String,
    pub description: String,
    pub trigger: String,
    pub systems: Vec<String>,
    pub duration: String,
}

impl WorkflowStep {
    pub fn new(id: RecordId, step_number: u32) -> Self {
        Self {
            id,
            step_number,
            title: String::new(),
            description: String::new(),
            trigger: String::new(),
            systems: Vec::new(),
            duration: String::new(),
        }
    }
}

/// Text sub-fields of a workflow step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowField {
    Title,
    Description,
    Trigger,
    Duration,
}

impl WorkflowField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Step Title",
            Self::Description => "Step Description",
            Self::Trigger => "Trigger Type",
            Self::Duration => "Duration",
        }
    }

    pub fn get(self, step: &WorkflowStep) -> &str {
        match self {
            Self::Title => &step.title,
            Self::Description => &step.description,
            Self::Trigger => &step.trigger,
            Self::Duration => &step.duration,
        }
    }

    fn slot(self, step: &mut WorkflowStep) -> &mut String {
        match self {
            Self::Title => &mut step.title,
            Self::Description => &mut step.description,
            Self::Trigger => &mut step.trigger,
            Self::Duration => &mut step.duration,
        }
    }
}

/// Update applied to a workflow step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowStepUpdate {
    Text(WorkflowField, String),
    Systems(Vec<String>),
}

/// Failure mode. `probability` holds a probability scale label or is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureMode {
    pub id: RecordId,
    pub scenario: String,
    pub impact: String,
    pub probability: String,
    pub detection: String,
    pub recovery: String,
    pub prevention: String,
}

impl FailureMode {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            scenario: String::new(),
            impact: String::new(),
            probability: String::new(),
            detection: String::new(),
            recovery: String::new(),
            prevention: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureField {
    Scenario,
    Impact,
    Probability,
    Detection,
    Recovery,
    Prevention,
}

impl FailureField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Scenario => "Failure Scenario",
            Self::Impact => "Business Impact",
            Self::Probability => "Probability",
            Self::Detection => "Detection Method",
            Self::Recovery => "Recovery Strategy",
            Self::Prevention => "Prevention Measures",
        }
    }

    pub fn get(self, mode: &FailureMode) -> &str {
        match self {
            Self::Scenario => &mode.scenario,
            Self::Impact => &mode.impact,
            Self::Probability => &mode.probability,
            Self::Detection => &mode.detection,
            Self::Recovery => &mode.recovery,
            Self::Prevention => &mode.prevention,
        }
    }

    fn slot(self, mode: &mut FailureMode) -> &mut String {
        match self {
            Self::Scenario => &mut mode.scenario,
            Self::Impact => &mut mode.impact,
            Self::Probability => &mut mode.probability,
            Self::Detection => &mut mode.detection,
            Self::Recovery => &mut mode.recovery,
            Self::Prevention => &mut mode.prevention,
        }
    }
}

/// Rollout phase: {id, phase, duration, scope, goals, criteria, risks}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolloutPhase {
    pub id: RecordId,
    pub phase: String,
    pub duration: String,
    pub scope: String,
    pub goals: String,
    pub criteria: String,
    pub risks: String,
}

impl RolloutPhase {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            phase: String::new(),
            duration: String::new(),
            scope: String::new(),
            goals: String::new(),
            criteria: String::new(),
            risks: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RolloutField {
    Phase,
    Duration,
    Scope,
    Goals,
    Criteria,
    Risks,
}

impl RolloutField {
    pub const ALL: [RolloutField; 6] = [
        Self::Phase,
        Self::Duration,
        Self::Scope,
        Self::Goals,
        Self::Criteria,
        Self::Risks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Phase => "Phase Name",
            Self::Duration => "Duration",
            Self::Scope => "Scope & Target Users",
            Self::Goals => "Phase Goals",
            Self::Criteria => "Success Criteria",
            Self::Risks => "Phase-Specific Risks",
        }
    }

    pub fn is_multiline(self) -> bool {
        !matches!(self, Self::Phase | Self::Duration)
    }

    pub fn get(self, phase: &RolloutPhase) -> &str {
        match self {
            Self::Phase => &phase.phase,
            Self::Duration => &phase.duration,
            Self::Scope => &phase.scope,
            Self::Goals => &phase.goals,
            Self::Criteria => &phase.criteria,
            Self::Risks => &phase.risks,
        }
    }

    fn slot(self, phase: &mut RolloutPhase) -> &mut String {
        match self {
            Self::Phase => &mut phase.phase,
            Self::Duration => &mut phase.duration,
            Self::Scope => &mut phase.scope,
            Self::Goals => &mut phase.goals,
            Self::Criteria => &mut phase.criteria,
            Self::Risks => &mut phase.risks,
        }
    }
}

/// Typed sub-field update, one variant per record type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordUpdate {
    Kpi(KpiField, String),
    Workflow(WorkflowStepUpdate),
    Failure(FailureField, String),
    Rollout(RolloutField, String),
}

impl KpiEntry {
    pub(crate) fn apply(&mut self, field: KpiField, value: String) {
        *field.slot(self) = value;
    }
}

impl WorkflowStep {
    pub(crate) fn apply(&mut self, update: WorkflowStepUpdate) {
        match update {
            WorkflowStepUpdate::Text(field, value) => *field.slot(self) = value,
            WorkflowStepUpdate::Systems(systems) => self.systems = systems,
        }
    }
}

impl FailureMode {
    pub(crate) fn apply(&mut self, field: FailureField, value: String) {
        *field.slot(self) = value;
    }
}

impl RolloutPhase {
    pub(crate) fn apply(&mut self, field: RolloutField, value: String) {
        *field.slot(self) = value;
    }
}

macro_rules! impl_record {
    ($($ty:ty),*) => {
        $(impl Record for $ty {
            fn id(&self) -> &RecordId {
                &self.id
            }
        })*
    };
}

impl_record!(KpiEntry, WorkflowStep, FailureMode, RolloutPhase);

/// Find a record by id
pub fn find_mut<'a, R: Record>(records: &'a mut [R], id: &RecordId) -> Option<&'a mut R> {
    records.iter_mut().find(|r| r.id() == id)
}

/// Remove a record by id, returning whether anything was removed
pub fn remove_by_id<R: Record>(records: &mut Vec<R>, id: &RecordId) -> bool {
    let before = records.len();
    records.retain(|r| r.id() != id);
    records.len() != before
}
