use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use joker_lib::Joke;
use serde::Serialize;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JokeRecord<'a> {
    joke: &'a str,
    fetched_at: String,
}

pub fn print_joke(joke: &Joke, fetched_at: DateTime<Utc>, format: &OutputFormat) -> Result<()> {
    println!("{}", format_joke(joke, fetched_at, format)?);
    Ok(())
}

fn format_joke(joke: &Joke, fetched_at: DateTime<Utc>, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(joke.text().to_string()),
        OutputFormat::Json => {
            let record = JokeRecord {
                joke: joke.text(),
                fetched_at: fetched_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            };
            Ok(serde_json::to_string(&record)?)
        }
    }
}
