//! Step navigator.
//!
//! This module provides the [`Navigator`], which owns the step state of a
//! multi-step form and gates forward movement on validation of the current
//! step's fields. All rendering goes through a [`ViewPort`]; remote calls go
//! through a [`RegistrationApi`].

use crate::state::{self, StepState};
use crate::{NavigatorError, Result};
use regform_client::RegistrationApi;
use regform_core::{
    ErrorMap, FormDefinition, FormError, FormValues, Modal, NextLabel, UserTable, ViewPort,
};
use regform_validator::Validation;
use tracing::{debug, info, warn};

/// Message shown in the users table when the list cannot be fetched.
pub const USERS_NOT_FOUND: &str = "Not found";

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The current step has invalid fields; nothing moved
    Blocked(ErrorMap),
    /// The current step changed
    Moved { from: usize, to: usize },
    /// The form was sent from the last step
    Submitted,
    /// Sending the form failed; the message was rendered
    SubmitFailed(String),
    /// Retreat requested on the first step; nothing moved
    Stayed,
}

/// Controller of a multi-step form.
///
/// # Example
///
/// ```ignore
/// let mut navigator = Navigator::new(FormDefinition::registration(), view, api)?;
/// navigator.input("username", "ana")?;
/// navigator.input("password", "s3cret!")?;
/// assert_eq!(navigator.next().await, StepOutcome::Moved { from: 0, to: 1 });
/// ```
pub struct Navigator<V, A> {
    definition: FormDefinition,
    validation: Validation,
    state: StepState,
    values: FormValues,
    finished: Vec<bool>,
    view: V,
    api: A,
}

impl<V: ViewPort, A: RegistrationApi> Navigator<V, A> {
    /// Creates a navigator and shows step 0.
    pub fn new(definition: FormDefinition, view: V, api: A) -> Result<Self> {
        let validation = Validation::from_definition(&definition)?;
        let state = StepState::new(definition.last_step());
        let finished = vec![false; definition.steps.len()];

        let mut navigator = Self {
            definition,
            validation,
            state,
            values: FormValues::new(),
            finished,
            view,
            api,
        };
        navigator.show_current_step();
        Ok(navigator)
    }

    /// Current step index.
    pub fn step(&self) -> usize {
        self.state.index()
    }

    /// Current step state.
    pub fn state(&self) -> StepState {
        self.state
    }

    /// Values entered so far.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Whether the progress indicator of `step` is marked finished.
    pub fn is_finished(&self, step: usize) -> bool {
        self.finished.get(step).copied().unwrap_or(false)
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Stores a value and validates that field alone, rendering its error.
    ///
    /// Returns true if the field has an error.
    pub fn input(&mut self, field: &str, value: &str) -> Result<bool> {
        if self.definition.field(field).is_none() {
            return Err(NavigatorError::Form(FormError::unknown_field(field)));
        }
        self.values.set(field, value);
        Ok(self.check_field(field).is_some())
    }

    /// Validates the stored value of `field`, rendering its error.
    pub fn validate_field(&mut self, field: &str) -> Result<Option<String>> {
        if self.definition.field(field).is_none() {
            return Err(NavigatorError::Form(FormError::unknown_field(field)));
        }
        Ok(self.check_field(field))
    }

    /// Validates every field of the current step and updates the finished
    /// marking of its indicator.
    pub fn is_step_valid(&mut self) -> bool {
        self.check_current_step().is_empty()
    }

    /// Advances to the next step, or submits from the last one.
    ///
    /// Movement is refused while any field of the current step is invalid.
    pub async fn next(&mut self) -> StepOutcome {
        let errors = self.check_current_step();
        if !errors.is_empty() {
            debug!(
                "Step {} blocked by {} invalid fields",
                self.state.index(),
                errors.len()
            );
            return StepOutcome::Blocked(errors);
        }

        if self.state.is_last() {
            return self.submit().await;
        }

        let from = self.state.index();
        self.view.show_step(from, false);
        self.state = state::advance(self.state);
        self.show_current_step();

        StepOutcome::Moved {
            from,
            to: self.state.index(),
        }
    }

    /// Goes back one step without validation. Does nothing on step 0.
    pub fn previous(&mut self) -> StepOutcome {
        if self.state.is_first() {
            return StepOutcome::Stayed;
        }

        let from = self.state.index();
        self.view.show_step(from, false);
        self.state = state::retreat(self.state);
        self.show_current_step();

        StepOutcome::Moved {
            from,
            to: self.state.index(),
        }
    }

    /// Clears the form and returns to step 0.
    pub fn reset(&mut self) {
        self.view.show_modal(Modal::Info, false);
        self.view.show_step(self.state.index(), false);

        for step in 0..self.finished.len() {
            self.finished[step] = false;
            self.view.mark_indicator_finished(step, false);
        }

        self.values.clear();
        self.view.clear_fields();

        self.state = state::reset(self.state);
        self.show_current_step();
        info!("Form reset");
    }

    /// Dismisses the post-submit notification and starts over.
    pub fn close_info(&mut self) {
        self.reset();
    }

    /// Fetches the registered users and shows them in the table dialog.
    pub async fn open_user_table(&mut self) -> UserTable {
        let table = match self.api.list_users().await {
            Ok(users) => UserTable::Users(users),
            Err(err) => {
                warn!("Failed to fetch users: {}", err);
                UserTable::Error(USERS_NOT_FOUND.to_string())
            }
        };

        self.view.render_user_table(&table);
        self.view.show_modal(Modal::Table, true);
        table
    }

    /// Hides the table dialog.
    pub fn close_user_table(&mut self) {
        self.view.show_modal(Modal::Table, false);
    }

    async fn submit(&mut self) -> StepOutcome {
        match self.api.submit_user(&self.values).await {
            Ok(()) => {
                info!("Registration submitted");
                self.view.show_modal(Modal::Info, true);
                StepOutcome::Submitted
            }
            Err(err) => {
                warn!("Registration submit failed: {}", err);
                let message = err.user_message();
                self.view.render_submit_error(&message);
                StepOutcome::SubmitFailed(message)
            }
        }
    }

    fn check_field(&mut self, field: &str) -> Option<String> {
        let error = self
            .validation
            .validate_field(field, self.values.value_or_empty(field));
        self.view.render_field_error(field, error.as_deref());
        error
    }

    fn check_current_step(&mut self) -> ErrorMap {
        let index = self.state.index();
        let fields: Vec<String> = self.definition.steps[index]
            .fields
            .iter()
            .map(|f| f.name.clone())
            .collect();

        let mut errors = ErrorMap::new();
        for field in &fields {
            if let Some(message) = self.check_field(field) {
                errors.insert(field.as_str(), message);
            }
        }

        let valid = errors.is_empty();
        self.finished[index] = valid;
        self.view.mark_indicator_finished(index, valid);
        errors
    }

    fn show_current_step(&mut self) {
        let step = self.state.index();
        self.view.show_step(step, true);
        self.view.show_previous_button(step != 0);
        self.view.set_next_label(if self.state.is_last() {
            NextLabel::Submit
        } else {
            NextLabel::Next
        });
        self.view.highlight_indicator(step);
    }
}
