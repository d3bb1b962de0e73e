//! Enumerations for TUI state management.

/// Application screen for the terminal user interface.
#[derive(Clone, Copy, PartialEq)]
pub enum AppState {
    TaskList,
    Calculator,
    Help,
}

/// Which widget receives typed characters on the task list screen.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Focus {
    Input,
    List,
}

/// Active operand field on the calculator screen.
#[derive(Clone, Copy, PartialEq)]
pub enum CalcField {
    First,
    Second,
}
