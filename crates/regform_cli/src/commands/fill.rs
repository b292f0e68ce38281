use anyhow::{Context, Result};
use regform_client::{ApiClient, ClientConfig};
use regform_navigator::{Navigator, StepOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use super::load_form;
use crate::output;
use crate::terminal::TerminalView;

/// A line typed during a fill session.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Set { field: &'a str, value: &'a str },
    Next,
    Previous,
    Reset,
    Users,
    Close,
    Values,
    ShowPasswords,
    HidePasswords,
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Input<'_> {
    if let Some((field, value)) = line.split_once('=') {
        return Input::Set {
            field: field.trim(),
            value,
        };
    }

    match line.trim() {
        "" => Input::Empty,
        "next" | "submit" => Input::Next,
        "prev" | "back" => Input::Previous,
        "reset" => Input::Reset,
        "users" => Input::Users,
        "close" => Input::Close,
        "values" => Input::Values,
        "show" => Input::ShowPasswords,
        "hide" => Input::HidePasswords,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        other => Input::Unknown(other),
    }
}

pub async fn execute(form_path: Option<&str>, server_url: &str) -> Result<()> {
    let form = load_form(form_path)?;
    info!("Starting fill session for '{}' against {}", form.name, server_url);

    let client = ApiClient::new(ClientConfig::new(server_url))
        .with_context(|| format!("Invalid server URL: {}", server_url))?;
    let view = TerminalView::new(&form);
    let mut navigator = Navigator::new(form, view, client)
        .context("Failed to build validation schema")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let input = parse_line(&line);
        debug!("Fill input: {:?}", input);

        match input {
            Input::Set { field, value } => {
                if let Err(e) = navigator.input(field, value) {
                    output::print_error(&e.to_string());
                }
            }
            Input::Next => {
                if let StepOutcome::Blocked(errors) = navigator.next().await {
                    output::print_error(&format!(
                        "{} field(s) need attention before continuing",
                        errors.len()
                    ));
                }
            }
            Input::Previous => {
                if navigator.previous() == StepOutcome::Stayed {
                    output::print_info("Already on the first step");
                }
            }
            Input::Reset => navigator.reset(),
            Input::Users => {
                navigator.open_user_table().await;
            }
            Input::Close => {
                if navigator.view().table_open() {
                    navigator.close_user_table();
                } else if navigator.view().info_open() {
                    navigator.close_info();
                } else {
                    output::print_info("Nothing to close");
                }
            }
            Input::Values => {
                let view = navigator.view();
                for (field, value) in navigator.values().iter() {
                    println!("  {} = {}", field, view.display_value(field, value));
                }
            }
            Input::ShowPasswords => {
                navigator.view_mut().set_passwords_visible(true);
                output::print_info("Passwords are shown");
            }
            Input::HidePasswords => {
                navigator.view_mut().set_passwords_visible(false);
                output::print_info("Passwords are hidden");
            }
            Input::Help => println!("{}", navigator.view().hint()),
            Input::Quit => break,
            Input::Empty => {}
            Input::Unknown(command) => {
                output::print_error(&format!("Unknown command: {} (try 'help')", command));
            }
        }
    }

    Ok(())
}
