//! Section forms: the focusable items of one section screen

use super::field::{ChoiceSource, FieldKind, FieldTarget, FormField};
use crate::catalog;
use crate::state::completion::Section;
use crate::state::document::{DocumentAction, ScalarField, UseCaseDocument};
use crate::state::records::{FailureField, KpiField, RecordId, RecordKind, RolloutField, WorkflowField};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// One focusable row of a section screen
#[derive(Debug, Clone)]
pub enum FormItem {
    Field(FormField),
    AddRecord(RecordKind),
    RemoveRecord {
        kind: RecordKind,
        id: RecordId,
        title: String,
    },
    Checklist {
        label: &'static str,
        checked: bool,
    },
    /// Chip that appends its text to a free-text field
    Suggestion {
        target: ScalarField,
        text: &'static str,
    },
}

impl FormItem {
    /// Action for Enter on a non-field item
    pub fn activate(&self) -> Option<DocumentAction> {
        match self {
            Self::Field(_) => None,
            Self::AddRecord(kind) => Some(DocumentAction::AddRecord(*kind)),
            Self::RemoveRecord { kind, id, .. } => {
                Some(DocumentAction::RemoveRecord(*kind, id.clone()))
            }
            Self::Checklist { label, checked } => Some(DocumentAction::ToggleChecklist {
                label: (*label).to_string(),
                included: !checked,
            }),
            Self::Suggestion { target, text } => {
                Some(DocumentAction::AppendToField(*target, (*text).to_string()))
            }
        }
    }

    /// Record this item edits or removes
    pub fn record_id(&self) -> Option<&RecordId> {
        match self {
            Self::Field(field) => field.target.record_id(),
            Self::RemoveRecord { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&FormField> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }
}

/// Focusable items of the current section, rebuilt from the document after
/// every applied change
#[derive(Debug, Clone, Default)]
pub struct SectionForm {
    pub section: Section,
    pub items: Vec<FormItem>,
    pub active_index: usize,
}

impl Form for SectionForm {
    fn field_count(&self) -> usize {
        self.items.len()
    }
    fn active_field(&self) -> usize {
        self.active_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_index = index.min(self.items.len().saturating_sub(1));
    }
}

impl SectionForm {
    pub fn build(section: Section, doc: &UseCaseDocument) -> Self {
        let mut builder = Builder {
            doc,
            items: Vec::new(),
        };
        builder.section(section);
        Self {
            section,
            items: builder.items,
            active_index: 0,
        }
    }

    /// Rebuild from the document, keeping focus on the same row where possible.
    /// Uncommitted list entries survive the rebuild.
    pub fn refresh(&mut self, doc: &UseCaseDocument) {
        let active = self.active_index;
        let pending: Vec<(FieldTarget, String)> = self
            .items
            .iter()
            .filter_map(FormItem::as_field)
            .filter(|f| f.kind == FieldKind::List && !f.value.is_empty())
            .map(|f| (f.target.clone(), f.value.clone()))
            .collect();
        *self = Self::build(self.section, doc);
        for (target, value) in pending {
            let field = self.items.iter_mut().find_map(|item| match item {
                FormItem::Field(field) if field.target == target => Some(field),
                _ => None,
            });
            if let Some(field) = field {
                field.value = value;
            }
        }
        self.set_active_field(active);
    }

    pub fn active_item(&self) -> Option<&FormItem> {
        self.items.get(self.active_index)
    }

    pub fn active_item_mut(&mut self) -> Option<&mut FormItem> {
        self.items.get_mut(self.active_index)
    }

    /// Focus the first row belonging to `id`
    pub fn focus_record(&mut self, id: &RecordId) {
        if let Some(index) = self.items.iter().position(|i| i.record_id() == Some(id)) {
            self.active_index = index;
        }
    }

    /// Record under focus and the list it belongs to
    pub fn focused_record(&self) -> Option<(RecordKind, RecordId)> {
        let kind = self.section.record_kind()?;
        let id = self.active_item()?.record_id()?;
        Some((kind, id.clone()))
    }
}

struct Builder<'a> {
    doc: &'a UseCaseDocument,
    items: Vec<FormItem>,
}

impl Builder<'_> {
    fn section(&mut self, section: Section) {
        match section {
            Section::TitleSummary => {
                self.scalar(ScalarField::Title);
                self.scalar(ScalarField::Summary);
            }
            Section::ProblemEvidence => {
                self.choice(ScalarField::SelectedDepartment, ChoiceSource::Department);
                self.scalar(ScalarField::ProblemDescription);
                self.scalar(ScalarField::PainPoints);
                self.choice(ScalarField::EvidenceType, ChoiceSource::EvidenceType);
                self.scalar(ScalarField::EvidenceDetails);
            }
            Section::Stakeholders => {
                self.scalar(ScalarField::PrimaryStakeholders);
                self.chips(ScalarField::PrimaryStakeholders, &catalog::STAKEHOLDER_EXAMPLES);
                self.scalar(ScalarField::Beneficiaries);
                self.chips(ScalarField::Beneficiaries, &catalog::BENEFICIARY_TYPES);
                self.scalar(ScalarField::ImpactedRoles);
            }
            Section::KpisImpact => {
                self.kpis();
                self.scalar(ScalarField::BusinessImpact);
            }
            Section::Workflow => {
                self.workflow_steps();
                self.scalar(ScalarField::SystemsInvolved);
            }
            Section::Development => {
                self.scalar(ScalarField::TechStack);
                self.scalar(ScalarField::Architecture);
                self.scalar(ScalarField::ApiIntegrations);
                self.scalar(ScalarField::DataFlow);
                self.scalar(ScalarField::DevelopmentPhases);
            }
            Section::FailureModes => {
                self.failure_modes();
                self.scalar(ScalarField::MonitoringStrategy);
            }
            Section::Security => {
                self.scalar(ScalarField::DataClassification);
                self.scalar(ScalarField::SecurityMeasures);
                self.scalar(ScalarField::AccessControls);
                self.scalar(ScalarField::PrivacyCompliance);
                for label in catalog::SECURITY_CHECKLIST {
                    self.items.push(FormItem::Checklist {
                        label,
                        checked: self.doc.is_checked(label),
                    });
                }
            }
            Section::Rollout => {
                self.rollout_phases();
                self.scalar(ScalarField::ChangeManagement);
                self.scalar(ScalarField::SuccessMetrics);
            }
        }
    }

    fn push(&mut self, field: FormField) {
        self.items.push(FormItem::Field(field));
    }

    fn scalar(&mut self, field: ScalarField) {
        let input = FormField::text(
            FieldTarget::Scalar(field),
            field.label().to_string(),
            self.doc.field(field),
            field.is_multiline(),
        )
        .with_placeholder(catalog::placeholder(field));
        self.push(input);
    }

    fn choice(&mut self, field: ScalarField, source: ChoiceSource) {
        let input = FormField::choice(
            FieldTarget::Scalar(field),
            field.label().to_string(),
            self.doc.field(field),
            source,
        )
        .with_placeholder(catalog::placeholder(field));
        self.push(input);
    }

    fn chips(&mut self, target: ScalarField, texts: &[&'static str]) {
        for text in texts {
            self.items.push(FormItem::Suggestion {
                target,
                text: *text,
            });
        }
    }

    fn remove_button(&mut self, kind: RecordKind, id: &RecordId, title: String) {
        self.items.push(FormItem::RemoveRecord {
            kind,
            id: id.clone(),
            title,
        });
    }

    fn kpis(&mut self) {
        let doc = self.doc;
        for (index, kpi) in doc.content().kpi_metrics.iter().enumerate() {
            let title = format!("KPI {}", index + 1);
            for field in KpiField::ALL {
                self.push(FormField::text(
                    FieldTarget::Kpi(kpi.id.clone(), field),
                    format!("{title} · {}", field.label()),
                    field.get(kpi),
                    false,
                ));
            }
            self.remove_button(RecordKind::Kpi, &kpi.id, title);
        }
        self.items.push(FormItem::AddRecord(RecordKind::Kpi));
    }

    fn workflow_steps(&mut self) {
        let doc = self.doc;
        for step in &doc.content().workflow_steps {
            let title = format!("Step {}", step.step_number);
            let id = &step.id;
            self.push(
                FormField::text(
                    FieldTarget::Workflow(id.clone(), WorkflowField::Title),
                    format!("{title} · {}", WorkflowField::Title.label()),
                    WorkflowField::Title.get(step),
                    false,
                )
                .with_placeholder("e.g., Data Validation"),
            );
            self.push(FormField::choice(
                FieldTarget::Workflow(id.clone(), WorkflowField::Trigger),
                format!("{title} · {}", WorkflowField::Trigger.label()),
                WorkflowField::Trigger.get(step),
                ChoiceSource::Trigger,
            ));
            self.push(
                FormField::text(
                    FieldTarget::Workflow(id.clone(), WorkflowField::Duration),
                    format!("{title} · {}", WorkflowField::Duration.label()),
                    WorkflowField::Duration.get(step),
                    false,
                )
                .with_placeholder("e.g., 5 minutes"),
            );
            self.push(FormField::list(
                FieldTarget::WorkflowSystems(id.clone()),
                format!("{title} · Systems"),
                &step.systems,
            ));
            self.push(FormField::text(
                FieldTarget::Workflow(id.clone(), WorkflowField::Description),
                format!("{title} · {}", WorkflowField::Description.label()),
                WorkflowField::Description.get(step),
                true,
            ));
            self.remove_button(RecordKind::WorkflowStep, id, title);
        }
        self.items.push(FormItem::AddRecord(RecordKind::WorkflowStep));
    }

    fn failure_modes(&mut self) {
        let doc = self.doc;
        for (index, mode) in doc.content().failure_modes.iter().enumerate() {
            let title = format!("Failure Mode {}", index + 1);
            let id = &mode.id;
            self.push(
                FormField::text(
                    FieldTarget::Failure(id.clone(), FailureField::Scenario),
                    format!("{title} · {}", FailureField::Scenario.label()),
                    &mode.scenario,
                    false,
                )
                .with_placeholder("e.g., Database connection timeout"),
            );
            self.push(FormField::choice(
                FieldTarget::Failure(id.clone(), FailureField::Probability),
                format!("{title} · {}", FailureField::Probability.label()),
                &mode.probability,
                ChoiceSource::Probability,
            ));
            for (field, hint) in [
                (FailureField::Impact, "Describe the business consequences..."),
                (FailureField::Detection, "How will this failure be detected?"),
                (FailureField::Recovery, "How will the system recover?"),
                (FailureField::Prevention, "How can this be prevented?"),
            ] {
                self.push(
                    FormField::text(
                        FieldTarget::Failure(id.clone(), field),
                        format!("{title} · {}", field.label()),
                        field.get(mode),
                        true,
                    )
                    .with_placeholder(hint),
                );
            }
            self.remove_button(RecordKind::FailureMode, id, title);
        }
        self.items.push(FormItem::AddRecord(RecordKind::FailureMode));
    }

    fn rollout_phases(&mut self) {
        let doc = self.doc;
        for (index, phase) in doc.content().rollout_phases.iter().enumerate() {
            let title = format!("Phase {}", index + 1);
            for field in RolloutField::ALL {
                self.push(FormField::text(
                    FieldTarget::Rollout(phase.id.clone(), field),
                    format!("{title} · {}", field.label()),
                    field.get(phase),
                    field.is_multiline(),
                ));
            }
            self.remove_button(RecordKind::RolloutPhase, &phase.id, title);
        }
        self.items.push(FormItem::AddRecord(RecordKind::RolloutPhase));
    }
}
