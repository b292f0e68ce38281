mod commands;
mod output;
mod terminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use regform_client::SERVER_URL_ENV;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

#[derive(Parser)]
#[command(name = "regform")]
#[command(version, about = "Multi-step registration form CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a form definition and print its steps and rules
    Check {
        /// Path to the form definition (YAML or TOML); built-in form if omitted
        #[arg(long)]
        form: Option<String>,
    },

    /// Validate a JSON record of field values against a form
    Validate {
        /// Path to a JSON object of field name to value
        #[arg(short, long)]
        input: String,

        /// Path to the form definition (YAML or TOML); built-in form if omitted
        #[arg(long)]
        form: Option<String>,

        /// Validate only the fields of this step (0-based)
        #[arg(short, long)]
        step: Option<usize>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Fill in the form interactively, step by step
    Fill {
        /// Path to the form definition (YAML or TOML); built-in form if omitted
        #[arg(long)]
        form: Option<String>,

        /// Registration server base URL
        #[arg(long, env = SERVER_URL_ENV, default_value = DEFAULT_SERVER_URL)]
        server_url: String,
    },

    /// List the registered users
    Users {
        /// Registration server base URL
        #[arg(long, env = SERVER_URL_ENV, default_value = DEFAULT_SERVER_URL)]
        server_url: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match cli.command {
        Commands::Check { form } => commands::check::execute(form.as_deref()),

        Commands::Validate {
            input,
            form,
            step,
            format,
        } => commands::validate::execute(&input, form.as_deref(), step, &format),

        Commands::Fill { form, server_url } => {
            commands::fill::execute(form.as_deref(), &server_url).await
        }

        Commands::Users { server_url, format } => {
            commands::users::execute(&server_url, &format).await
        }
    }
}
