//! Application state definitions

use super::completion::{CompletionCache, CompletionSummary, Section};
use super::document::{ActionOutcome, DocumentAction, UseCaseDocument};
use super::forms::{FieldKind, Form, FormItem, SectionForm};
use std::collections::VecDeque;

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Sidebar,
    #[default]
    Form,
}

impl Focus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Sidebar => Self::Form,
            Self::Form => Self::Sidebar,
        };
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Document
    pub document: UseCaseDocument,
    completion: CompletionCache,

    // Navigation
    pub current_section: Section,
    pub form: SectionForm,
    pub focus: Focus,
    pub sidebar_index: usize,

    // UI state
    pub show_reference: bool,
    pub scroll_offset: usize,
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(start: Section) -> Self {
        let mut state = Self {
            show_reference: true,
            ..Default::default()
        };
        state.select_section(start);
        state
    }

    /// Completion of the live document, recomputed only after changes
    pub fn summary(&mut self) -> CompletionSummary {
        self.completion
            .get(self.document.version(), self.document.content())
    }

    /// Last computed completion, for read-only rendering
    pub fn cached_summary(&self) -> CompletionSummary {
        self.completion.peek()
    }

    /// Apply an action and rebuild the form around it
    pub fn dispatch(&mut self, action: DocumentAction) -> ActionOutcome {
        let outcome = self.document.apply(action);
        match &outcome {
            ActionOutcome::Applied => self.form.refresh(&self.document),
            ActionOutcome::Added(id) => {
                self.form.refresh(&self.document);
                self.form.focus_record(id);
            }
            ActionOutcome::Ignored => {
                tracing::debug!("Action ignored at version {}", self.document.version());
            }
        }
        outcome
    }

    pub fn select_section(&mut self, section: Section) {
        self.commit_pending();
        self.current_section = section;
        self.sidebar_index = section.index();
        self.form = SectionForm::build(section, &self.document);
        self.scroll_offset = 0;
    }

    pub fn next_section(&mut self) {
        self.select_section(self.current_section.next());
    }

    pub fn prev_section(&mut self) {
        self.select_section(self.current_section.prev());
    }

    /// Move the sidebar cursor down
    pub fn sidebar_down(&mut self) {
        if self.sidebar_index + 1 < Section::ALL.len() {
            self.sidebar_index += 1;
        }
    }

    /// Move the sidebar cursor up
    pub fn sidebar_up(&mut self) {
        self.sidebar_index = self.sidebar_index.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn next_item(&mut self) {
        self.commit_pending();
        self.form.next_field();
    }

    pub fn prev_item(&mut self) {
        self.commit_pending();
        self.form.prev_field();
    }

    /// Store a typed but uncommitted list entry before focus moves away
    fn commit_pending(&mut self) {
        let action = match self.form.active_item_mut() {
            Some(FormItem::Field(field)) => field.take_entry_action(),
            _ => None,
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    /// Type a character into the focused item. Space activates checklist
    /// items; other non-field items ignore input.
    pub fn input_char(&mut self, c: char) {
        let action = match self.form.active_item_mut() {
            Some(FormItem::Field(field)) => match field.kind {
                FieldKind::Text { .. } => {
                    field.push_char(c);
                    field.commit_action()
                }
                FieldKind::List => {
                    field.push_char(c);
                    None
                }
                FieldKind::Choice(_) => None,
            },
            Some(item) if c == ' ' && matches!(item, FormItem::Checklist { .. }) => {
                item.activate()
            }
            _ => None,
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    pub fn backspace(&mut self) {
        let action = match self.form.active_item_mut() {
            Some(FormItem::Field(field)) => match field.kind {
                FieldKind::Text { .. } => {
                    field.pop_char();
                    field.commit_action()
                }
                FieldKind::List if field.value.is_empty() => field.pop_entry_action(),
                FieldKind::List => {
                    field.pop_char();
                    None
                }
                FieldKind::Choice(_) => field.target.set_action(String::new()),
            },
            _ => None,
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    /// Enter: newline in multi-line text, next item in single-line text,
    /// commit for lists, cycle for choices, activate for everything else
    pub fn enter(&mut self) {
        let single_line = matches!(
            self.form.active_item().and_then(FormItem::as_field).map(|f| f.kind),
            Some(FieldKind::Text { multiline: false })
        );
        if single_line {
            self.form.next_field();
            return;
        }
        let action = match self.form.active_item_mut() {
            Some(FormItem::Field(field)) => match field.kind {
                FieldKind::Text { multiline: true } => {
                    field.push_char('\n');
                    field.commit_action()
                }
                FieldKind::Text { multiline: false } => None,
                FieldKind::List => field.take_entry_action(),
                FieldKind::Choice(_) => field.cycle_action(true),
            },
            Some(item) => item.activate(),
            None => None,
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    /// Step a focused choice field through its options
    pub fn cycle_choice(&mut self, forward: bool) {
        let action = self
            .form
            .active_item()
            .and_then(FormItem::as_field)
            .and_then(|field| field.cycle_action(forward));
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    /// Append a record to the current section's list, if it has one
    pub fn add_record(&mut self) -> bool {
        match self.current_section.record_kind() {
            Some(kind) => {
                self.dispatch(DocumentAction::AddRecord(kind));
                true
            }
            None => false,
        }
    }

    /// Remove the record whose item has focus
    pub fn remove_focused_record(&mut self) -> bool {
        match self.form.focused_record() {
            Some((kind, id)) => {
                self.dispatch(DocumentAction::RemoveRecord(kind, id)) != ActionOutcome::Ignored
            }
            None => false,
        }
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::state::forms::field::FieldTarget;
    use crate::state::records::RecordKind;
    use crate::state::ScalarField;

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.input_char(c);
        }
    }

    fn focus_where(state: &mut AppState, pred: impl Fn(&FormItem) -> bool) {
        let index = state.form.items.iter().position(pred).unwrap();
        state.form.set_active_field(index);
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_starts_at_requested_section() {
            let state = AppState::new(Section::Workflow);
            assert_eq!(state.current_section, Section::Workflow);
            assert_eq!(state.sidebar_index, 4);
            assert_eq!(state.form.section, Section::Workflow);
            assert!(state.show_reference);
        }

        #[test]
        fn test_next_and_prev_clamp() {
            let mut state = AppState::new(Section::Rollout);
            state.next_section();
            assert_eq!(state.current_section, Section::Rollout);
            state.select_section(Section::TitleSummary);
            state.prev_section();
            assert_eq!(state.current_section, Section::TitleSummary);
        }

        #[test]
        fn test_select_resets_scroll() {
            let mut state = AppState::new(Section::TitleSummary);
            state.scroll_down();
            state.scroll_down();
            state.select_section(Section::Security);
            assert_eq!(state.scroll_offset, 0);
        }

        #[test]
        fn test_sidebar_cursor_bounds() {
            let mut state = AppState::new(Section::TitleSummary);
            state.sidebar_up();
            assert_eq!(state.sidebar_index, 0);
            for _ in 0..20 {
                state.sidebar_down();
            }
            assert_eq!(state.sidebar_index, 8);
        }

        #[test]
        fn test_focus_toggle() {
            let mut focus = Focus::default();
            focus.toggle();
            assert_eq!(focus, Focus::Sidebar);
            focus.toggle();
            assert_eq!(focus, Focus::Form);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_writes_through() {
            let mut state = AppState::new(Section::TitleSummary);
            type_text(&mut state, "Invoice Bot");
            assert_eq!(state.document.field(ScalarField::Title), "Invoice Bot");

            state.backspace();
            assert_eq!(state.document.field(ScalarField::Title), "Invoice Bo");
        }

        #[test]
        fn test_enter_on_single_line_moves_on() {
            let mut state = AppState::new(Section::TitleSummary);
            state.enter();
            assert_eq!(state.form.active_index, 1);
            type_text(&mut state, "a");
            state.enter();
            type_text(&mut state, "b");
            assert_eq!(state.document.field(ScalarField::Summary), "a\nb");
        }

        #[test]
        fn test_choice_cycles_and_clears() {
            let mut state = AppState::new(Section::ProblemEvidence);
            state.cycle_choice(true);
            assert_eq!(
                state.document.field(ScalarField::SelectedDepartment),
                catalog::DEPARTMENTS[0].name
            );
            state.input_char('x');
            assert_eq!(
                state.document.field(ScalarField::SelectedDepartment),
                catalog::DEPARTMENTS[0].name
            );
            state.backspace();
            assert_eq!(state.document.field(ScalarField::SelectedDepartment), "");
        }

        #[test]
        fn test_suggestion_appends() {
            let mut state = AppState::new(Section::Stakeholders);
            focus_where(&mut state, |i| matches!(i, FormItem::Suggestion { .. }));
            state.enter();
            state.enter();
            let first = catalog::STAKEHOLDER_EXAMPLES[0];
            assert_eq!(
                state.document.field(ScalarField::PrimaryStakeholders),
                format!("{first}, {first}")
            );
        }

        #[test]
        fn test_space_toggles_checklist() {
            let mut state = AppState::new(Section::Security);
            focus_where(&mut state, |i| matches!(i, FormItem::Checklist { .. }));
            let label = catalog::SECURITY_CHECKLIST[0];
            state.input_char(' ');
            assert!(state.document.is_checked(label));
            state.input_char(' ');
            assert!(!state.document.is_checked(label));
        }
    }

    mod records {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_add_record_focuses_new_card() {
            let mut state = AppState::new(Section::Workflow);
            assert!(state.add_record());
            let id = state.document.content().workflow_steps[0].id.clone();
            assert_eq!(state.form.active_item().unwrap().record_id(), Some(&id));

            type_text(&mut state, "Intake");
            assert_eq!(state.document.content().workflow_steps[0].title, "Intake");
        }

        #[test]
        fn test_add_record_outside_list_sections() {
            let mut state = AppState::new(Section::Development);
            assert!(!state.add_record());
            assert_eq!(state.document.version(), 0);
        }

        #[test]
        fn test_systems_list_editing() {
            let mut state = AppState::new(Section::Workflow);
            state.add_record();
            focus_where(&mut state, |i| {
                matches!(
                    i,
                    FormItem::Field(f) if matches!(f.target, FieldTarget::WorkflowSystems(_))
                )
            });
            type_text(&mut state, "ERP");
            assert!(state.document.content().workflow_steps[0].systems.is_empty());
            state.enter();
            type_text(&mut state, "CRM");
            state.enter();
            assert_eq!(
                state.document.content().workflow_steps[0].systems,
                vec!["ERP".to_string(), "CRM".to_string()]
            );

            state.backspace();
            assert_eq!(
                state.document.content().workflow_steps[0].systems,
                vec!["ERP".to_string()]
            );
        }

        fn focus_systems(state: &mut AppState) {
            focus_where(state, |i| {
                matches!(
                    i,
                    FormItem::Field(f) if matches!(f.target, FieldTarget::WorkflowSystems(_))
                )
            });
        }

        #[test]
        fn test_pending_system_committed_when_leaving() {
            let mut state = AppState::new(Section::Workflow);
            state.add_record();
            focus_systems(&mut state);
            type_text(&mut state, "ERP");
            state.next_item();
            type_text(&mut state, "x");

            let step = &state.document.content().workflow_steps[0];
            assert_eq!(step.systems, vec!["ERP".to_string()]);
            assert_eq!(step.description, "x");
        }

        #[test]
        fn test_pending_system_committed_on_section_change() {
            let mut state = AppState::new(Section::Workflow);
            state.add_record();
            focus_systems(&mut state);
            type_text(&mut state, "CRM");
            state.select_section(Section::Rollout);
            assert_eq!(
                state.document.content().workflow_steps[0].systems,
                vec!["CRM".to_string()]
            );
        }

        #[test]
        fn test_pending_system_survives_add_record() {
            let mut state = AppState::new(Section::Workflow);
            state.add_record();
            focus_systems(&mut state);
            type_text(&mut state, "ERP");
            state.add_record();

            let first = state.document.content().workflow_steps[0].id.clone();
            let pending = state.form.items.iter().find_map(|item| match item {
                FormItem::Field(f) if f.target == FieldTarget::WorkflowSystems(first.clone()) => {
                    Some(f.value.clone())
                }
                _ => None,
            });
            assert_eq!(pending.as_deref(), Some("ERP"));
        }

        #[test]
        fn test_remove_focused_record_renumbers() {
            let mut state = AppState::new(Section::Workflow);
            state.add_record();
            state.add_record();
            state.add_record();
            let second = state.document.content().workflow_steps[1].id.clone();
            state.form.focus_record(&second);
            assert!(state.remove_focused_record());

            let numbers: Vec<u32> = state
                .document
                .content()
                .workflow_steps
                .iter()
                .map(|s| s.step_number)
                .collect();
            assert_eq!(numbers, vec![1, 2]);
        }

        #[test]
        fn test_remove_without_focused_record() {
            let mut state = AppState::new(Section::FailureModes);
            assert!(!state.remove_focused_record());
        }

        #[test]
        fn test_add_button_activation() {
            let mut state = AppState::new(Section::KpisImpact);
            focus_where(&mut state, |i| matches!(i, FormItem::AddRecord(_)));
            state.enter();
            assert_eq!(state.document.content().record_count(RecordKind::Kpi), 1);
        }
    }

    mod completion {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_summary_tracks_document() {
            let mut state = AppState::new(Section::TitleSummary);
            assert_eq!(state.summary().completed(), 0);
            type_text(&mut state, "Invoice Bot");
            state.next_item();
            type_text(&mut state, "cuts manual work");
            assert_eq!(state.summary().completed(), 1);
            assert_eq!(state.cached_summary().completed(), 1);
        }
    }

    mod errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_errors_queue_in_order() {
            let mut state = AppState::default();
            assert!(!state.has_errors());
            state.push_error("first".into());
            state.push_error("second".into());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }
}
