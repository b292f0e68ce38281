//! Rendering capabilities required by the step navigator.
//!
//! The navigator never touches a concrete rendering surface. It drives an
//! implementation of [`ViewPort`], which may be a terminal, a browser
//! bridge, or a recording fake in tests.

use crate::{FormError, UserResponse};
use std::fmt;
use std::str::FromStr;

/// Overlay dialogs a view can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Post-submit notification
    Info,
    /// Registered users table
    Table,
}

impl FromStr for Modal {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "modal-info" | "info" => Ok(Modal::Info),
            "modal-table" | "table" => Ok(Modal::Table),
            other => Err(FormError::UnknownModal(other.to_string())),
        }
    }
}

impl fmt::Display for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modal::Info => write!(f, "modal-info"),
            Modal::Table => write!(f, "modal-table"),
        }
    }
}

/// Label of the forward navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextLabel {
    Next,
    Submit,
}

impl fmt::Display for NextLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextLabel::Next => write!(f, "Next"),
            NextLabel::Submit => write!(f, "Submit"),
        }
    }
}

/// Content of the users table dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserTable {
    /// One row per user
    Users(Vec<UserResponse>),
    /// A single row holding an error message
    Error(String),
}

/// Capability set the navigator renders through.
pub trait ViewPort {
    /// Shows or hides the section of step `step`.
    fn show_step(&mut self, step: usize, visible: bool);

    /// Shows or hides the backward navigation button.
    fn show_previous_button(&mut self, visible: bool);

    /// Sets the forward navigation button label.
    fn set_next_label(&mut self, label: NextLabel);

    /// Highlights the progress indicator of `step` as the active one.
    fn highlight_indicator(&mut self, step: usize);

    /// Sets or clears the finished marking of a progress indicator.
    fn mark_indicator_finished(&mut self, step: usize, finished: bool);

    /// Renders a field-level error, or clears it when `error` is `None`.
    fn render_field_error(&mut self, field: &str, error: Option<&str>);

    /// Clears every input value.
    fn clear_fields(&mut self);

    /// Shows or hides a modal dialog.
    fn show_modal(&mut self, modal: Modal, visible: bool);

    /// Replaces the rows of the users table.
    fn render_user_table(&mut self, table: &UserTable);

    /// Reports a failed submission.
    fn render_submit_error(&mut self, message: &str);
}
