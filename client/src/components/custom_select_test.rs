use std::cell::RefCell;

use super::*;
use crate::state::select::SelectPhase;

#[test]
fn join_classes_appends_trimmed_override() {
    assert_eq!(join_classes("a", ""), "a");
    assert_eq!(join_classes("a", "   "), "a");
    assert_eq!(join_classes("a", " b c "), "a b c");
}

#[test]
fn trigger_class_keeps_base_before_override() {
    assert_eq!(trigger_class(""), "custom-select__trigger");
    assert_eq!(trigger_class("w-40"), "custom-select__trigger w-40");
}

#[test]
fn panel_class_inline_by_default() {
    assert_eq!(panel_class(false, ""), "custom-select__panel");
}

#[test]
fn panel_class_absolute_adds_modifier_before_override() {
    assert_eq!(
        panel_class(true, "custom-select__panel--wide"),
        "custom-select__panel custom-select__panel--absolute custom-select__panel--wide"
    );
}

#[test]
fn wrapper_class_anchors_only_when_absolute() {
    assert_eq!(wrapper_class(false), "custom-select");
    assert_eq!(wrapper_class(true), "custom-select custom-select--anchor");
}

#[test]
fn option_class_marks_selected_row() {
    assert_eq!(option_class(false), "custom-select__option");
    assert_eq!(option_class(true), "custom-select__option custom-select__option--selected");
}

#[test]
fn chevron_rotates_while_open() {
    assert_eq!(chevron_class(false), "custom-select__chevron");
    assert!(chevron_class(true).ends_with("custom-select__chevron--open"));
}

#[test]
fn apply_choice_reports_value_once_and_closes() {
    let open = SelectState { phase: SelectPhase::Open };
    let small = SelectOption::new(1, "Small");
    let seen = RefCell::new(Vec::new());

    let next = apply_choice(open, &small, |value| seen.borrow_mut().push(value));

    assert_eq!(*seen.borrow(), vec![OptionValue::Number(1)]);
    assert!(!next.is_open());
}

#[test]
fn apply_choice_reports_before_state_is_stored() {
    let stored = RefCell::new(SelectState { phase: SelectPhase::Open });
    let open_when_notified = RefCell::new(None);

    let next = apply_choice(*stored.borrow(), &SelectOption::new("b", "B"), |_| {
        *open_when_notified.borrow_mut() = Some(stored.borrow().is_open());
    });
    *stored.borrow_mut() = next;

    assert_eq!(*open_when_notified.borrow(), Some(true));
    assert!(!stored.borrow().is_open());
}

#[test]
fn apply_choice_from_closed_still_reports() {
    let calls = RefCell::new(0);
    let next = apply_choice(SelectState::default(), &SelectOption::new(2, "Large"), |_| *calls.borrow_mut() += 1);
    assert_eq!(*calls.borrow(), 1);
    assert_eq!(next, SelectState::default());
}
