//! Terminal rendering of the form.

use colored::*;
use regform_core::{FieldKind, FormDefinition, Modal, NextLabel, UserTable, ViewPort};

use crate::output;

/// [`ViewPort`] that prints to stdout.
///
/// Visibility changes are tracked rather than printed one by one; the step
/// panel and progress line are printed when the indicator is highlighted,
/// which is the last call of every step change.
pub struct TerminalView {
    titles: Vec<String>,
    fields: Vec<Vec<String>>,
    password_fields: Vec<String>,
    passwords_visible: bool,
    visible_step: Option<usize>,
    finished: Vec<bool>,
    previous_visible: bool,
    next_label: NextLabel,
    info_open: bool,
    table_open: bool,
}

impl TerminalView {
    pub fn new(definition: &FormDefinition) -> Self {
        Self {
            titles: definition.steps.iter().map(|s| s.title.clone()).collect(),
            fields: definition
                .steps
                .iter()
                .map(|s| {
                    s.fields
                        .iter()
                        .map(|f| format!("{} ({})", f.name, f.label))
                        .collect()
                })
                .collect(),
            password_fields: definition
                .fields()
                .filter(|f| f.kind == FieldKind::Password)
                .map(|f| f.name.clone())
                .collect(),
            passwords_visible: false,
            visible_step: None,
            finished: vec![false; definition.steps.len()],
            previous_visible: false,
            next_label: NextLabel::Next,
            info_open: false,
            table_open: false,
        }
    }

    pub fn info_open(&self) -> bool {
        self.info_open
    }

    pub fn table_open(&self) -> bool {
        self.table_open
    }

    /// Shows or masks the values of password fields.
    pub fn set_passwords_visible(&mut self, visible: bool) {
        self.passwords_visible = visible;
    }

    pub fn passwords_visible(&self) -> bool {
        self.passwords_visible
    }

    /// Value of `field` as it may be printed. Password values are masked
    /// one `*` per character unless shown.
    pub fn display_value(&self, field: &str, value: &str) -> String {
        if self.passwords_visible || !self.password_fields.iter().any(|f| f == field) {
            value.to_string()
        } else {
            "*".repeat(value.chars().count())
        }
    }

    /// One-line progress indicator: finished steps are ticked, the current
    /// step is bracketed.
    pub fn progress_line(&self, current: usize) -> String {
        self.titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let mark = if self.finished.get(i).copied().unwrap_or(false) {
                    "✓"
                } else {
                    " "
                };
                if i == current {
                    format!("[{} {}]", mark, title)
                } else {
                    format!(" {} {} ", mark, title)
                }
            })
            .collect::<Vec<_>>()
            .join(" > ")
    }

    /// Commands available on the current step.
    pub fn hint(&self) -> String {
        let mut commands = vec![
            "<field>=<value>".to_string(),
            self.next_label.to_string().to_lowercase(),
        ];
        if self.previous_visible {
            commands.push("prev".to_string());
        }
        if !self.password_fields.is_empty() {
            let toggle = if self.passwords_visible { "hide" } else { "show" };
            commands.push(toggle.to_string());
        }
        commands.extend(["reset", "users", "quit"].map(String::from));
        commands.join(" | ")
    }
}

impl ViewPort for TerminalView {
    fn show_step(&mut self, step: usize, visible: bool) {
        if visible {
            self.visible_step = Some(step);
        } else if self.visible_step == Some(step) {
            self.visible_step = None;
        }
    }

    fn show_previous_button(&mut self, visible: bool) {
        self.previous_visible = visible;
    }

    fn set_next_label(&mut self, label: NextLabel) {
        self.next_label = label;
    }

    fn highlight_indicator(&mut self, step: usize) {
        if self.visible_step != Some(step) {
            return;
        }
        println!("\n{}", self.progress_line(step));
        if let Some(title) = self.titles.get(step) {
            println!(
                "{}",
                format!("Step {}/{}: {}", step + 1, self.titles.len(), title).bold()
            );
        }
        for field in self.fields.get(step).into_iter().flatten() {
            println!("  - {}", field);
        }
        println!("{}", self.hint().dimmed());
    }

    fn mark_indicator_finished(&mut self, step: usize, finished: bool) {
        if let Some(slot) = self.finished.get_mut(step) {
            *slot = finished;
        }
    }

    fn render_field_error(&mut self, field: &str, error: Option<&str>) {
        match error {
            Some(message) => println!("{} {}: {}", "✗".red().bold(), field, message.red()),
            None => println!("{} {}", "✓".green().bold(), field),
        }
    }

    fn clear_fields(&mut self) {
        output::print_info("Form cleared");
    }

    fn show_modal(&mut self, modal: Modal, visible: bool) {
        match modal {
            Modal::Info => {
                if visible && !self.info_open {
                    output::print_success("Registration submitted");
                    output::print_info("Type 'close' to start a new registration");
                }
                self.info_open = visible;
            }
            Modal::Table => {
                if visible {
                    output::print_info("Type 'close' to hide the users table");
                }
                self.table_open = visible;
            }
        }
    }

    fn render_user_table(&mut self, table: &UserTable) {
        println!();
        output::print_user_table(table);
    }

    fn render_submit_error(&mut self, message: &str) {
        output::print_error(&format!("Submit failed: {}", message));
    }
}
