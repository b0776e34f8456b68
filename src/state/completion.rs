//! Sections and per-section completion tracking

use super::document::DocumentContent;
use super::records::RecordKind;

pub const TOTAL_SECTIONS: usize = 9;

/// The nine fixed sections of a use case document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    TitleSummary,
    ProblemEvidence,
    Stakeholders,
    KpisImpact,
    Workflow,
    Development,
    FailureModes,
    Security,
    Rollout,
}

impl Section {
    pub const ALL: [Section; TOTAL_SECTIONS] = [
        Self::TitleSummary,
        Self::ProblemEvidence,
        Self::Stakeholders,
        Self::KpisImpact,
        Self::Workflow,
        Self::Development,
        Self::FailureModes,
        Self::Security,
        Self::Rollout,
    ];

    /// 1-based section number
    pub fn number(self) -> usize {
        self.index() + 1
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::TitleSummary => "Title & Summary",
            Self::ProblemEvidence => "Problem & Evidence",
            Self::Stakeholders => "Stakeholders",
            Self::KpisImpact => "KPIs & Impact",
            Self::Workflow => "Multi-Step Use Case",
            Self::Development => "Development Approach",
            Self::FailureModes => "Failure Modes",
            Self::Security => "Security & Privacy",
            Self::Rollout => "Rollout Plan",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::TitleSummary => "Define your automation use case",
            Self::ProblemEvidence => "Document the business challenge",
            Self::Stakeholders => "Identify who's involved and benefits",
            Self::KpisImpact => "Quantify measurable improvements",
            Self::Workflow => "Map the complete workflow",
            Self::Development => "Technical implementation plan",
            Self::FailureModes => "Risk analysis and recovery",
            Self::Security => "Data protection considerations",
            Self::Rollout => "Phased implementation strategy",
        }
    }

    /// Next section, clamped at the last one
    pub fn next(self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(self)
    }

    /// Previous section, clamped at the first one
    pub fn prev(self) -> Self {
        Self::from_number(self.number() - 1).unwrap_or(self)
    }

    /// Record list edited on this section, if any
    pub fn record_kind(self) -> Option<RecordKind> {
        match self {
            Self::KpisImpact => Some(RecordKind::Kpi),
            Self::Workflow => Some(RecordKind::WorkflowStep),
            Self::FailureModes => Some(RecordKind::FailureMode),
            Self::Rollout => Some(RecordKind::RolloutPhase),
            _ => None,
        }
    }

    /// Fixed completion predicate. Non-empty means length > 0, no trimming.
    pub fn is_complete(self, doc: &DocumentContent) -> bool {
        let filled = |s: &str| !s.is_empty();
        let has_records = |kind: RecordKind| doc.record_count(kind) > 0;
        match self {
            Self::TitleSummary => filled(&doc.title) && filled(&doc.summary),
            Self::ProblemEvidence => {
                filled(&doc.problem_description)
                    && filled(&doc.evidence_details)
                    && filled(&doc.selected_department)
            }
            Self::Stakeholders => {
                filled(&doc.primary_stakeholders) && filled(&doc.beneficiaries)
            }
            Self::KpisImpact => has_records(RecordKind::Kpi) && filled(&doc.business_impact),
            Self::Workflow => has_records(RecordKind::WorkflowStep) && filled(&doc.systems_involved),
            Self::Development => {
                filled(&doc.tech_stack) && filled(&doc.api_integrations) && filled(&doc.data_flow)
            }
            Self::FailureModes => {
                has_records(RecordKind::FailureMode) && filled(&doc.monitoring_strategy)
            }
            Self::Security => {
                filled(&doc.data_classification)
                    && filled(&doc.security_measures)
                    && filled(&doc.privacy_compliance)
            }
            Self::Rollout => has_records(RecordKind::RolloutPhase) && filled(&doc.change_management),
        }
    }
}

/// Completion flags for all sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionSummary {
    flags: [bool; TOTAL_SECTIONS],
}

impl CompletionSummary {
    pub fn evaluate(doc: &DocumentContent) -> Self {
        let mut flags = [false; TOTAL_SECTIONS];
        for section in Section::ALL {
            flags[section.index()] = section.is_complete(doc);
        }
        Self { flags }
    }

    pub fn is_complete(&self, section: Section) -> bool {
        self.flags[section.index()]
    }

    pub fn completed(&self) -> usize {
        self.flags.iter().filter(|done| **done).count()
    }

    pub fn total(&self) -> usize {
        TOTAL_SECTIONS
    }

    pub fn remaining(&self) -> usize {
        self.total() - self.completed()
    }

    /// Completion ratio in whole percent
    pub fn percent(&self) -> u16 {
        (self.completed() * 100 / self.total()) as u16
    }
}

/// Summary memoized against the document version it was computed for
#[derive(Debug, Clone, Default)]
pub struct CompletionCache {
    entry: Option<(u64, CompletionSummary)>,
}

impl CompletionCache {
    /// Return the cached summary, recomputing when the version moved
    pub fn get(&mut self, version: u64, doc: &DocumentContent) -> CompletionSummary {
        match self.entry {
            Some((cached, summary)) if cached == version => summary,
            _ => {
                let summary = CompletionSummary::evaluate(doc);
                self.entry = Some((version, summary));
                summary
            }
        }
    }

    /// Last computed summary without recomputing
    pub fn peek(&self) -> CompletionSummary {
        self.entry.map(|(_, summary)| summary).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::document::{ScalarField, UseCaseDocument};
    use crate::state::records::{KpiField, RecordUpdate};

    mod sections {
        use super::*;

        #[test]
        fn test_numbering_round_trips() {
            for section in Section::ALL {
                assert_eq!(Section::from_number(section.number()), Some(section));
            }
            assert_eq!(Section::from_number(0), None);
            assert_eq!(Section::from_number(10), None);
        }

        #[test]
        fn test_next_prev_clamp() {
            assert_eq!(Section::Rollout.next(), Section::Rollout);
            assert_eq!(Section::TitleSummary.prev(), Section::TitleSummary);
            assert_eq!(Section::Stakeholders.next(), Section::KpisImpact);
            assert_eq!(Section::Stakeholders.prev(), Section::ProblemEvidence);
        }

        #[test]
        fn test_record_kinds() {
            let with_lists = Section::ALL
                .iter()
                .filter(|s| s.record_kind().is_some())
                .count();
            assert_eq!(with_lists, 4);
        }
    }

    mod predicates {
        use super::*;

        #[test]
        fn test_empty_document_has_nothing_complete() {
            let doc = UseCaseDocument::default();
            let summary = CompletionSummary::evaluate(doc.content());
            assert_eq!(summary.completed(), 0);
            assert_eq!(summary.remaining(), 9);
            assert_eq!(summary.percent(), 0);
        }

        #[test]
        fn test_title_then_kpis() {
            let mut doc = UseCaseDocument::default();
            doc.set_field(ScalarField::Title, "Invoice Bot");
            doc.set_field(ScalarField::Summary, "cuts manual work");

            let summary = CompletionSummary::evaluate(doc.content());
            assert_eq!(summary.completed(), 1);
            assert!(summary.is_complete(Section::TitleSummary));

            let id = doc.add_record(RecordKind::Kpi);
            for (field, value) in KpiField::ALL.into_iter().zip(["Time", "4h", "15m", "87%"]) {
                doc.update_record(&id, RecordUpdate::Kpi(field, value.into()));
            }
            doc.set_field(ScalarField::BusinessImpact, "saves money");

            let summary = CompletionSummary::evaluate(doc.content());
            assert_eq!(summary.completed(), 2);
            assert!(summary.is_complete(Section::KpisImpact));
        }

        #[test]
        fn test_whitespace_counts_as_filled() {
            let mut doc = UseCaseDocument::default();
            doc.set_field(ScalarField::TechStack, " ");
            doc.set_field(ScalarField::ApiIntegrations, " ");
            doc.set_field(ScalarField::DataFlow, " ");
            assert!(Section::Development.is_complete(doc.content()));
        }

        #[test]
        fn test_list_sections_need_a_record() {
            let mut doc = UseCaseDocument::default();
            doc.set_field(ScalarField::ChangeManagement, "training");
            assert!(!Section::Rollout.is_complete(doc.content()));
            doc.add_record(RecordKind::RolloutPhase);
            assert!(Section::Rollout.is_complete(doc.content()));
        }

        #[test]
        fn test_evidence_type_not_required() {
            let mut doc = UseCaseDocument::default();
            doc.set_field(ScalarField::ProblemDescription, "slow");
            doc.set_field(ScalarField::EvidenceDetails, "survey");
            doc.set_field(ScalarField::SelectedDepartment, "Finance");
            assert!(Section::ProblemEvidence.is_complete(doc.content()));
        }

        #[test]
        fn test_all_complete() {
            let mut doc = UseCaseDocument::default();
            for field in ScalarField::ALL {
                doc.set_field(field, "x");
            }
            for kind in [
                RecordKind::Kpi,
                RecordKind::WorkflowStep,
                RecordKind::FailureMode,
                RecordKind::RolloutPhase,
            ] {
                doc.add_record(kind);
            }
            let summary = CompletionSummary::evaluate(doc.content());
            assert_eq!(summary.completed(), 9);
            assert_eq!(summary.percent(), 100);
        }
    }

    mod cache {
        use super::*;

        #[test]
        fn test_cache_recomputes_on_version_change() {
            let mut doc = UseCaseDocument::default();
            let mut cache = CompletionCache::default();
            assert_eq!(cache.get(doc.version(), doc.content()).completed(), 0);

            doc.set_field(ScalarField::Title, "a");
            doc.set_field(ScalarField::Summary, "b");
            assert_eq!(cache.get(doc.version(), doc.content()).completed(), 1);
            assert_eq!(cache.peek().completed(), 1);
        }

        #[test]
        fn test_cache_reuses_same_version() {
            let mut doc = UseCaseDocument::default();
            doc.set_field(ScalarField::Title, "a");
            doc.set_field(ScalarField::Summary, "b");
            let mut cache = CompletionCache::default();
            let version = doc.version();
            cache.get(version, doc.content());

            // Same version key returns the memoized value
            let empty = UseCaseDocument::default();
            assert_eq!(cache.get(version, empty.content()).completed(), 1);
        }
    }
}
