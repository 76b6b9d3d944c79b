use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between a request and a built record. No
/// variant is retried internally; all surface to the immediate caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to initialize the HTTP transport")]
    Transport(#[source] reqwest::Error),

    #[error("malformed response from {url}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("event {event_id} has an invalid date-time {value:?}")]
    EventDate {
        event_id: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("unsupported language code {0:?}, expected \"en_GB\" or \"hu_HU\"")]
    Language(String),

    #[error("start date {start} is after end date {end}")]
    DateRange { start: NaiveDate, end: NaiveDate },

    #[error("event {event_id} references film {film_id} absent from the same response")]
    UnknownFilm { event_id: String, film_id: String },
}
