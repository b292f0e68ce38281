use colored::*;
use regform_core::{ErrorMap, UserResponse, UserTable};
use serde_json::json;

pub fn print_validation_report(errors: &ErrorMap, format: &str) {
    match format {
        "json" => print_json_report(errors),
        _ => print_text_report(errors),
    }
}

fn print_text_report(errors: &ErrorMap) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if errors.is_empty() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );

        println!("\n{}", "Errors:".red().bold());
        for (i, (field, message)) in errors.iter().enumerate() {
            println!("  {}. {}: {}", i + 1, field.bold(), message.red());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Invalid fields: {}", errors.len());
    println!("{}", "═".repeat(60));
}

fn print_json_report(errors: &ErrorMap) {
    let output = json!({
        "passed": errors.is_empty(),
        "errors": errors,
        "summary": {
            "error_count": errors.len(),
        }
    });

    match serde_json::to_string_pretty(&output) {
        Ok(text) => println!("{}", text),
        Err(e) => print_error(&format!("Failed to render report: {}", e)),
    }
}

/// Prints the users table, or the table's error message.
pub fn print_user_table(table: &UserTable) {
    match table {
        UserTable::Error(message) => println!("{}", message.red()),
        UserTable::Users(users) if users.is_empty() => print_info("No registered users"),
        UserTable::Users(users) => {
            for line in table_lines(users) {
                println!("{}", line);
            }
        }
    }
}

/// Plain-text rows of the users table, header first.
fn table_lines(users: &[UserResponse]) -> Vec<String> {
    let mut widths = UserResponse::COLUMNS.map(|c| c.chars().count());
    for user in users {
        for (width, cell) in widths.iter_mut().zip(user.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let row = |cells: [&str; 6]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" │ ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![row(UserResponse::COLUMNS)];
    lines.push(
        widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─"),
    );
    lines.extend(users.iter().map(|u| row(u.cells())));
    lines
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
