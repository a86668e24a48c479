//! The `tell` subcommand: fetch one joke and print it.

use anyhow::Result;
use chrono::Utc;
use joker_lib::Client;

use crate::output::{print_joke, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let result = client.fetch_joke().await?;
    match result.joke() {
        Some(joke) => print_joke(joke, Utc::now(), format)?,
        None => eprintln!("The joke service returned no joke"),
    }
    Ok(())
}
