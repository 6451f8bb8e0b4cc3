use std::rc::Rc;

use yew::prelude::*;

use super::form::{BookingForm, Field, SubmissionAttempt, ValidationError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Hidden,
    Visible,
    Submitting,
}

/// Everything the booking modal renders from. Layout and scroll lock are
/// both derived from `is_visible`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    pub phase: ModalPhase,
    pub booth_name: String,
    pub form: BookingForm,
    pub error: Option<String>,
}

pub enum ModalAction {
    Open(String),
    Close,
    BackdropClicked { on_backdrop: bool },
    Edit(Field, String),
    /// Enters Submitting only when the form passes validation.
    Submit,
    SubmitSucceeded,
    SubmitFailed(String),
}

impl ModalState {
    pub fn is_visible(&self) -> bool {
        self.phase != ModalPhase::Hidden
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == ModalPhase::Submitting
    }

    pub fn begin_submit(&self) -> Result<SubmissionAttempt, ValidationError> {
        self.form.attempt(&self.booth_name).validate()
    }

    fn apply(&mut self, action: ModalAction) {
        use ModalPhase::*;

        match (self.phase, action) {
            (Hidden | Visible, ModalAction::Open(booth_name)) => {
                self.phase = Visible;
                self.booth_name = booth_name;
                self.error = None;
            }
            (Visible, ModalAction::Close) => self.phase = Hidden,
            (Visible, ModalAction::BackdropClicked { on_backdrop: true }) => self.phase = Hidden,
            (Visible, ModalAction::Edit(field, value)) => self.form.set(field, value),
            (Visible, ModalAction::Submit) => {
                if self.begin_submit().is_ok() {
                    self.phase = Submitting;
                    self.error = None;
                }
            }
            (Submitting, ModalAction::SubmitSucceeded) => {
                self.phase = Hidden;
                self.form = BookingForm::default();
            }
            (Submitting, ModalAction::SubmitFailed(message)) => {
                self.phase = Visible;
                self.error = Some(message);
            }
            _ => {}
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(actions: Vec<ModalAction>) -> Rc<ModalState> {
        actions
            .into_iter()
            .fold(Rc::new(ModalState::default()), |state, action| state.reduce(action))
    }

    fn fill(state: Rc<ModalState>) -> Rc<ModalState> {
        [
            (Field::Name, "Ayesha"),
            (Field::Email, "ayesha@example.com"),
            (Field::Phone, "0300 1234567"),
            (Field::EventDate, "2024-03-11"),
        ]
        .into_iter()
        .fold(state, |state, (field, value)| state.reduce(ModalAction::Edit(field, value.into())))
    }

    #[test]
    fn starts_hidden_with_no_booth() {
        let state = ModalState::default();
        assert_eq!(state.phase, ModalPhase::Hidden);
        assert!(state.booth_name.is_empty());
        assert!(!state.is_visible());
    }

    #[test]
    fn open_captures_booth_name() {
        let state = run(vec![ModalAction::Open("Booth A".into())]);
        assert_eq!(state.phase, ModalPhase::Visible);
        assert_eq!(state.booth_name, "Booth A");
    }

    #[test]
    fn last_open_wins() {
        let state = run(vec![ModalAction::Open("Booth A".into()), ModalAction::Open("Booth B".into())]);
        assert_eq!(state.booth_name, "Booth B");
    }

    #[test]
    fn close_hides() {
        let state = run(vec![ModalAction::Open("Booth A".into()), ModalAction::Close]);
        assert_eq!(state.phase, ModalPhase::Hidden);
        assert!(!state.is_visible());
    }

    #[test]
    fn only_direct_backdrop_hits_close() {
        let inside = run(vec![
            ModalAction::Open("Booth A".into()),
            ModalAction::BackdropClicked { on_backdrop: false },
        ]);
        assert_eq!(inside.phase, ModalPhase::Visible);

        let backdrop = inside.reduce(ModalAction::BackdropClicked { on_backdrop: true });
        assert_eq!(backdrop.phase, ModalPhase::Hidden);
    }

    #[test]
    fn edits_are_ignored_while_hidden() {
        let state = run(vec![ModalAction::Edit(Field::Name, "x".into())]);
        assert_eq!(state.form, BookingForm::default());
    }

    #[test]
    fn missing_field_keeps_modal_visible() {
        let state = fill(run(vec![ModalAction::Open("Booth A".into())]))
            .reduce(ModalAction::Edit(Field::EventDate, String::new()));
        let err = state.begin_submit().unwrap_err();
        assert_eq!(err.missing, vec![Field::EventDate]);
        assert_eq!(state.phase, ModalPhase::Visible);
    }

    #[test]
    fn empty_form_never_enters_submitting() {
        let state = run(vec![ModalAction::Open("Booth A".into()), ModalAction::Submit]);
        assert_eq!(state.phase, ModalPhase::Visible);
        assert!(!state.is_submitting());
    }

    #[test]
    fn one_missing_field_blocks_submit() {
        let state = fill(run(vec![ModalAction::Open("Booth A".into())]))
            .reduce(ModalAction::Edit(Field::Phone, String::new()))
            .reduce(ModalAction::Submit);
        assert_eq!(state.phase, ModalPhase::Visible);
        assert_eq!(state.form.name, "Ayesha");
    }

    #[test]
    fn successful_round_trip_clears_form_and_keeps_booth() {
        let state = fill(run(vec![ModalAction::Open("Booth A".into())]));
        let attempt = state.begin_submit().unwrap();
        assert_eq!(attempt.booth_name, "Booth A");

        let state = state.reduce(ModalAction::Submit);
        assert_eq!(state.phase, ModalPhase::Submitting);
        assert!(state.is_visible());
        assert!(state.is_submitting());

        let state = state.reduce(ModalAction::SubmitSucceeded);
        assert_eq!(state.phase, ModalPhase::Hidden);
        assert_eq!(state.form, BookingForm::default());
        assert_eq!(state.booth_name, "Booth A");
    }

    #[test]
    fn failed_round_trip_returns_to_visible_with_input_kept() {
        let filled = fill(run(vec![ModalAction::Open("Booth A".into())]));
        let state = filled
            .clone()
            .reduce(ModalAction::Submit)
            .reduce(ModalAction::SubmitFailed("could not reach the booking service".into()));
        assert_eq!(state.phase, ModalPhase::Visible);
        assert_eq!(state.form, filled.form);
        assert_eq!(state.error.as_deref(), Some("could not reach the booking service"));

        let reopened = state.reduce(ModalAction::Submit);
        assert_eq!(reopened.error, None);
    }

    #[test]
    fn close_requests_are_ignored_while_submitting() {
        let state = fill(run(vec![ModalAction::Open("Booth A".into())]))
            .reduce(ModalAction::Submit)
            .reduce(ModalAction::Close)
            .reduce(ModalAction::BackdropClicked { on_backdrop: true })
            .reduce(ModalAction::Open("Booth B".into()));
        assert_eq!(state.phase, ModalPhase::Submitting);
        assert_eq!(state.booth_name, "Booth A");
    }

    #[test]
    fn stray_completion_is_ignored() {
        let state = run(vec![ModalAction::Open("Booth A".into())]);
        let after = state.clone().reduce(ModalAction::SubmitSucceeded);
        assert!(Rc::ptr_eq(&state, &after));
    }
}
