//! Form field value objects

use crate::catalog;
use crate::state::document::{DocumentAction, ScalarField};
use crate::state::records::{
    FailureField, KpiField, RecordId, RecordUpdate, RolloutField, WorkflowField,
    WorkflowStepUpdate,
};
use crate::state::risk::ProbabilityLevel;

/// Where a field's value lives in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldTarget {
    Scalar(ScalarField),
    Kpi(RecordId, KpiField),
    Workflow(RecordId, WorkflowField),
    WorkflowSystems(RecordId),
    Failure(RecordId, FailureField),
    Rollout(RecordId, RolloutField),
}

impl FieldTarget {
    /// Record the field belongs to, if any
    pub fn record_id(&self) -> Option<&RecordId> {
        match self {
            Self::Scalar(_) => None,
            Self::Kpi(id, _)
            | Self::Workflow(id, _)
            | Self::WorkflowSystems(id)
            | Self::Failure(id, _)
            | Self::Rollout(id, _) => Some(id),
        }
    }

    /// Action that stores `value` into a text or choice target. List
    /// targets are written through [`FieldTarget::entries_action`].
    pub fn set_action(&self, value: String) -> Option<DocumentAction> {
        let action = match self {
            Self::Scalar(field) => DocumentAction::SetField(*field, value),
            Self::Kpi(id, field) => {
                DocumentAction::UpdateRecord(id.clone(), RecordUpdate::Kpi(*field, value))
            }
            Self::Workflow(id, field) => DocumentAction::UpdateRecord(
                id.clone(),
                RecordUpdate::Workflow(WorkflowStepUpdate::Text(*field, value)),
            ),
            Self::WorkflowSystems(_) => return None,
            Self::Failure(id, field) => {
                DocumentAction::UpdateRecord(id.clone(), RecordUpdate::Failure(*field, value))
            }
            Self::Rollout(id, field) => {
                DocumentAction::UpdateRecord(id.clone(), RecordUpdate::Rollout(*field, value))
            }
        };
        Some(action)
    }

    /// Action that replaces the entries of a list target
    pub fn entries_action(&self, entries: Vec<String>) -> Option<DocumentAction> {
        match self {
            Self::WorkflowSystems(id) => Some(DocumentAction::UpdateRecord(
                id.clone(),
                RecordUpdate::Workflow(WorkflowStepUpdate::Systems(entries)),
            )),
            _ => None,
        }
    }
}

/// Fixed option sets offered by choice fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceSource {
    EvidenceType,
    Department,
    Trigger,
    Probability,
}

impl ChoiceSource {
    /// Stored values, in display order
    pub fn values(self) -> Vec<&'static str> {
        match self {
            Self::EvidenceType => catalog::EVIDENCE_TYPES.iter().map(|e| e.value).collect(),
            Self::Department => catalog::DEPARTMENTS.iter().map(|d| d.name).collect(),
            Self::Trigger => catalog::TRIGGER_TYPES.to_vec(),
            Self::Probability => ProbabilityLevel::ALL.iter().map(|p| p.label()).collect(),
        }
    }

    /// Human readable form of a stored value
    pub fn display(self, value: &str) -> String {
        match self {
            Self::EvidenceType => catalog::evidence_label(value)
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string()),
            _ => value.to_string(),
        }
    }

    /// Step through the options. An empty or unknown value lands on the
    /// first option going forward and the last going backward.
    pub fn cycle(self, current: &str, forward: bool) -> &'static str {
        let values = self.values();
        let len = values.len();
        let next = match values.iter().position(|v| *v == current) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        values[next]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text { multiline: bool },
    Choice(ChoiceSource),
    /// Ordered list of short strings, edited through a pending buffer
    List,
}

/// A single editable field with its current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub target: FieldTarget,
    pub label: String,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    /// Current text for text and choice fields, pending entry for list fields
    pub value: String,
    /// Committed entries of a list field
    pub entries: Vec<String>,
}

impl FormField {
    pub fn text(target: FieldTarget, label: String, value: &str, multiline: bool) -> Self {
        Self {
            target,
            label,
            kind: FieldKind::Text { multiline },
            placeholder: "",
            value: value.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn choice(target: FieldTarget, label: String, value: &str, source: ChoiceSource) -> Self {
        Self {
            target,
            label,
            kind: FieldKind::Choice(source),
            placeholder: "Select...",
            value: value.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn list(target: FieldTarget, label: String, entries: &[String]) -> Self {
        Self {
            target,
            label,
            kind: FieldKind::List,
            placeholder: "Type a system and press Enter",
            value: String::new(),
            entries: entries.to_vec(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Action storing the current value
    pub fn commit_action(&self) -> Option<DocumentAction> {
        self.target.set_action(self.value.clone())
    }

    /// Cycle a choice field, returning the action to store the new option
    pub fn cycle_action(&self, forward: bool) -> Option<DocumentAction> {
        match self.kind {
            FieldKind::Choice(source) => {
                let next = source.cycle(&self.value, forward);
                self.target.set_action(next.to_string())
            }
            _ => None,
        }
    }

    /// Move the pending buffer of a list field into its entries
    pub fn commit_entry_action(&self) -> Option<DocumentAction> {
        let entry = self.value.trim();
        if self.kind != FieldKind::List || entry.is_empty() {
            return None;
        }
        let mut entries = self.entries.clone();
        entries.push(entry.to_string());
        self.target.entries_action(entries)
    }

    /// Like `commit_entry_action`, but also empties the pending buffer
    pub fn take_entry_action(&mut self) -> Option<DocumentAction> {
        let action = self.commit_entry_action()?;
        self.value.clear();
        Some(action)
    }

    /// Drop the last committed entry of a list field
    pub fn pop_entry_action(&self) -> Option<DocumentAction> {
        if self.kind != FieldKind::List || self.entries.is_empty() {
            return None;
        }
        let mut entries = self.entries.clone();
        entries.pop();
        self.target.entries_action(entries)
    }

    /// Text shown in the input box
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Choice(source) if !self.value.is_empty() => source.display(&self.value),
            _ => self.value.clone(),
        }
    }
}
