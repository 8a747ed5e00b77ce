//! Selection model for the dismissible dropdown.
//!
//! DESIGN
//! ======
//! The dropdown is a controlled view: the caller owns the chosen value and
//! the control only owns whether its option panel is open. Transitions are
//! plain methods on `SelectState` so every edge of the open/closed machine can
//! be exercised without a browser.

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Trigger text shown when the caller's value matches no option.
pub const DEFAULT_PLACEHOLDER: &str = "Pilih...";

/// Value carried by an option. Either a string or an integer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One selectable row: a value and its display label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: OptionValue,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// Whether `option` is the caller's current selection.
pub fn is_selected(option: &SelectOption, selected: Option<&OptionValue>) -> bool {
    selected.is_some_and(|value| *value == option.value)
}

/// First option whose value equals `selected`, in caller order.
pub fn find_selected<'a>(options: &'a [SelectOption], selected: Option<&OptionValue>) -> Option<&'a SelectOption> {
    options.iter().find(|option| is_selected(option, selected))
}

/// Text for the trigger: the matching option's label, else `placeholder`.
pub fn display_label<'a>(options: &'a [SelectOption], selected: Option<&OptionValue>, placeholder: &'a str) -> &'a str {
    find_selected(options, selected).map_or(placeholder, |option| option.label.as_str())
}

/// Keys that activate a focused option row.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Open/closed phase of one dropdown instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectPhase {
    #[default]
    Closed,
    Open,
}

/// Instance-local state of the dropdown. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectState {
    pub phase: SelectPhase,
}

impl SelectState {
    pub fn is_open(self) -> bool {
        self.phase == SelectPhase::Open
    }

    /// Trigger activation. Flips the phase once and returns the new phase.
    pub fn toggle(&mut self) -> SelectPhase {
        self.phase = match self.phase {
            SelectPhase::Closed => SelectPhase::Open,
            SelectPhase::Open => SelectPhase::Closed,
        };
        self.phase
    }

    /// Row activation. Closes the panel and returns the value to report to
    /// the caller, even when it is already the selected one.
    pub fn choose(&mut self, option: &SelectOption) -> OptionValue {
        self.phase = SelectPhase::Closed;
        option.value.clone()
    }

    /// Document pointer-down. Closes only when open and the event target lies
    /// outside the control. Returns `true` if this event closed the panel.
    pub fn dismiss_outside(&mut self, target_inside: bool) -> bool {
        if self.phase == SelectPhase::Open && !target_inside {
            self.phase = SelectPhase::Closed;
            return true;
        }
        false
    }
}

/// A problem found by the development-time option shape check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionIssue {
    Empty,
    DuplicateValue { value: OptionValue, first: usize, second: usize },
}

impl fmt::Display for OptionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("option list is empty"),
            Self::DuplicateValue { value, first, second } => {
                write!(f, "option value `{value}` appears at index {first} and {second}")
            }
        }
    }
}

/// Report caller contract problems. Never fails; the list still renders.
pub fn check_options(options: &[SelectOption]) -> Vec<OptionIssue> {
    if options.is_empty() {
        return vec![OptionIssue::Empty];
    }
    let mut seen: HashMap<&OptionValue, usize> = HashMap::new();
    let mut issues = Vec::new();
    for (idx, option) in options.iter().enumerate() {
        if let Some(&first) = seen.get(&option.value) {
            issues.push(OptionIssue::DuplicateValue { value: option.value.clone(), first, second: idx });
        } else {
            seen.insert(&option.value, idx);
        }
    }
    issues
}
