use anyhow::{Context, Result};
use regform_client::{ApiClient, ClientConfig, RegistrationApi};
use regform_core::UserTable;
use tracing::info;

use crate::output;

pub async fn execute(server_url: &str, format: &str) -> Result<()> {
    info!("Fetching users from {}", server_url);

    let client = ApiClient::new(ClientConfig::new(server_url))
        .with_context(|| format!("Invalid server URL: {}", server_url))?;

    let users = client
        .list_users()
        .await
        .context("Failed to fetch users")?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&users)?),
        _ => output::print_user_table(&UserTable::Users(users)),
    }

    Ok(())
}
