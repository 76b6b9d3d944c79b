//! List upcoming Cinema City screenings in the Budapest cinemas.
//! Usage:
//!   cargo run --bin showtimes -- [days] [lang]
//! `days` extends the search that many days past today (default 0),
//! `lang` is en or hu (default en).

use std::env;

use anyhow::{Context, Result};
use chrono::{Duration, Local};
use cinecity::catalog::BUDAPEST_CINEMAS;
use cinecity::{CinemaCityClient, Language};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let mut args = env::args().skip(1);
    let days: i64 = match args.next() {
        Some(raw) => raw.parse().context("days must be an integer")?,
        None => 0,
    };
    let lang: Language = match args.next() {
        Some(raw) => raw.parse()?,
        None => Language::English,
    };

    let today = Local::now().date_naive();
    let until = today + Duration::days(days);

    let mut client = CinemaCityClient::new(lang)?.with_fetch_observer(|sample| {
        info!(
            url = sample.url.as_str(),
            elapsed_ms = sample.elapsed.as_millis() as u64,
            "remote call"
        )
    });

    let query = client.search_events_between(today, until, &BUDAPEST_CINEMAS)?;

    let mut screenings: Vec<_> = query
        .filter(|e| !e.sold_out)
        .select(|e| (e.date, e.movie.name.clone(), e.cinema.name.clone()))
        .collect();
    screenings.sort();

    for (date, movie, cinema) in &screenings {
        println!("{date}  {movie}  ({cinema})");
    }
    println!("{} screenings with tickets available", screenings.len());

    Ok(())
}
