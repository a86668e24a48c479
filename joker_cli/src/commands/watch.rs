//! The `watch` subcommand: show a joke, then fetch a new one on every Enter.
//!
//! Empty results and failed fetches keep the joke already on screen. Ctrl-C
//! drops any in-flight request and exits.

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use joker_lib::{Client, FeedUpdate, JokeFeed};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::output::{print_joke, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let mut feed = JokeFeed::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    eprintln!("Press Enter for a new joke, q to quit.");

    loop {
        let pb = spinner();
        let update = tokio::select! {
            update = feed.refresh(client) => Some(update),
            _ = tokio::signal::ctrl_c() => None,
        };
        pb.finish_and_clear();

        match update {
            None => break,
            Some(FeedUpdate::Updated) => {
                if let Some(joke) = feed.displayed_joke() {
                    print_joke(joke, Utc::now(), format)?;
                }
            }
            Some(other) => tracing::debug!("Refresh finished without a new joke: {:?}", other),
        }

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        match line {
            None => break,
            Some(input) if is_quit(&input) => break,
            Some(_) => continue,
        }
    }

    Ok(())
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner());
    pb.set_message("fetching joke...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn is_quit(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}
