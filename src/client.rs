//! Blocking client for the Cinema City data API.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use std::{fmt, thread};

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, trace};

use crate::cache::LruCache;
use crate::error::{Error, Result};
use crate::models::{Cinema, Event, Movie};
use crate::query::Query;

const DATA_API_URL: &str = "https://www.cinemacity.hu/en/data-api-service/v1/quickbook/10102/";
const DATE_FORMAT: &str = "%Y-%m-%d";
const EVENT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Fixed pause after every remote call, additive across a multi-date search.
const THROTTLE: Duration = Duration::from_millis(100);

const EVENTS_CACHE_CAPACITY: usize = 64;
const CINEMAS_CACHE_CAPACITY: usize = 8;

/// The two locales the data API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Hungarian,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en_GB",
            Language::Hungarian => "hu_HU",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "en" | "en_GB" => Ok(Language::English),
            "hu" | "hu_HU" => Ok(Language::Hungarian),
            other => Err(Error::Language(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Blocking HTTP seam. The reqwest-backed [`HttpTransport`] is the real
/// one; tests inject fakes serving canned payloads.
pub trait Transport {
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let user_agent = format!("cinecity/{}", env!("CARGO_PKG_VERSION"));
        let http = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()
            .map_err(Error::Transport)?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().map_err(|source| Error::Network {
            url: url.to_string(),
            source,
        })?;
        let status = response.status();
        let body = response.text().map_err(|source| Error::Network {
            url: url.to_string(),
            source,
        })?;
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(body)
    }
}

/// Handed to the fetch observer after each remote call. Cache hits are not
/// observed; they never leave the process.
#[derive(Debug, Clone)]
pub struct FetchObservation {
    pub url: String,
    pub elapsed: Duration,
}

/// Client for showtime and cinema listings.
///
/// Listings are memoized per `(cinema, date)` pair, so repeating a search
/// within the client's lifetime costs no further network round-trips. The
/// caches require `&mut self` and carry no locking; the client is meant to
/// be driven from a single thread.
pub struct CinemaCityClient {
    transport: Box<dyn Transport>,
    base_url: String,
    lang: Language,
    throttle: Duration,
    events_cache: LruCache<(String, String), EventListing>,
    cinemas_cache: LruCache<String, Vec<RawCinema>>,
    observer: Option<Box<dyn Fn(&FetchObservation)>>,
}

impl CinemaCityClient {
    /// A client backed by a real HTTP transport.
    pub fn new(lang: Language) -> Result<Self> {
        Ok(Self::with_transport(lang, Box::new(HttpTransport::new()?)))
    }

    pub fn with_transport(lang: Language, transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: DATA_API_URL.to_string(),
            lang,
            throttle: THROTTLE,
            events_cache: LruCache::new(EVENTS_CACHE_CAPACITY),
            cinemas_cache: LruCache::new(CINEMAS_CACHE_CAPACITY),
            observer: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    /// Installs a callback invoked after every remote call with the request
    /// URL and elapsed duration.
    pub fn with_fetch_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&FetchObservation) + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Fetches the events held in `cinemas` on `dates` and wraps them in a
    /// [`Query`].
    ///
    /// Dates are deduplicated before fetching; the first-built movie per
    /// film id is shared by every event referencing it, and a duplicate
    /// event id across overlapping requests keeps its first occurrence.
    /// Empty `dates` or `cinemas` yield a query over zero events.
    pub fn search_events(&mut self, dates: &[NaiveDate], cinemas: &[Cinema]) -> Result<Query> {
        let mut seen_dates = HashSet::new();
        let dates: Vec<String> = dates
            .iter()
            .map(|date| date.format(DATE_FORMAT).to_string())
            .filter(|date| seen_dates.insert(date.clone()))
            .collect();

        let mut movies: HashMap<String, Arc<Movie>> = HashMap::new();
        let mut seen_events = HashSet::new();
        let mut events = Vec::new();

        for cinema in cinemas {
            let cinema = Arc::new(cinema.clone());
            for date in &dates {
                let listing = self.raw_events(&cinema.id, date)?;
                for film in &listing.films {
                    movies
                        .entry(film.id.clone())
                        .or_insert_with(|| Arc::new(movie_from_raw(film)));
                }
                for raw in &listing.events {
                    if !seen_events.insert(raw.id.clone()) {
                        continue;
                    }
                    let movie = movies.get(&raw.film_id).ok_or_else(|| Error::UnknownFilm {
                        event_id: raw.id.clone(),
                        film_id: raw.film_id.clone(),
                    })?;
                    events.push(event_from_raw(raw, Arc::clone(movie), Arc::clone(&cinema))?);
                }
            }
        }

        debug!(
            events = events.len(),
            movies = movies.len(),
            cinemas = cinemas.len(),
            "built event collection"
        );
        Ok(Query::new(events))
    }

    /// Like [`search_events`](Self::search_events) for every day from
    /// `start` through `end` inclusive. Fails with [`Error::DateRange`]
    /// before any request when `start > end`.
    pub fn search_events_between(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
        cinemas: &[Cinema],
    ) -> Result<Query> {
        if start > end {
            return Err(Error::DateRange { start, end });
        }
        let dates: Vec<NaiveDate> = start.iter_days().take_while(|date| *date <= end).collect();
        self.search_events(&dates, cinemas)
    }

    /// Lists every cinema with an event scheduled up to `until`, in the
    /// order the service reports them.
    pub fn fetch_cinemas(&mut self, until: NaiveDate) -> Result<Vec<Cinema>> {
        self.fetch_cinemas_where(until, |_| true)
    }

    /// As [`fetch_cinemas`](Self::fetch_cinemas), keeping only cinemas
    /// matching `predicate`.
    pub fn fetch_cinemas_where<P>(&mut self, until: NaiveDate, predicate: P) -> Result<Vec<Cinema>>
    where
        P: Fn(&Cinema) -> bool,
    {
        let until = until.format(DATE_FORMAT).to_string();
        let raw = self.raw_cinemas(&until)?;
        Ok(raw
            .iter()
            .map(cinema_from_raw)
            .filter(|cinema| predicate(cinema))
            .collect())
    }

    fn raw_events(&mut self, cinema_id: &str, date: &str) -> Result<EventListing> {
        let key = (cinema_id.to_string(), date.to_string());
        if let Some(listing) = self.events_cache.get(&key) {
            trace!(cinema = cinema_id, date, "event listing served from cache");
            return Ok(listing.clone());
        }
        let url = format!(
            "{}film-events/in-cinema/{}/at-date/{}?attr=&lang={}",
            self.base_url,
            cinema_id,
            date,
            self.lang.code()
        );
        let body = self.fetch(&url)?;
        let listing: EventListing = parse_envelope(&url, &body)?;
        self.events_cache.insert(key, listing.clone());
        Ok(listing)
    }

    fn raw_cinemas(&mut self, until: &str) -> Result<Vec<RawCinema>> {
        let key = until.to_string();
        if let Some(cinemas) = self.cinemas_cache.get(&key) {
            trace!(until, "cinema listing served from cache");
            return Ok(cinemas.clone());
        }
        let url = format!(
            "{}cinemas/with-event/until/{}?attr=&lang={}",
            self.base_url,
            until,
            self.lang.code()
        );
        let body = self.fetch(&url)?;
        let listing: CinemaListing = parse_envelope(&url, &body)?;
        self.cinemas_cache.insert(key, listing.cinemas.clone());
        Ok(listing.cinemas)
    }

    /// One remote round-trip: GET, observe, throttle.
    fn fetch(&mut self, url: &str) -> Result<String> {
        let started = Instant::now();
        let body = self.transport.get(url)?;
        let elapsed = started.elapsed();
        debug!(
            url,
            elapsed_ms = elapsed.as_millis() as u64,
            bytes = body.len(),
            "fetched remote payload"
        );
        if let Some(observer) = &self.observer {
            observer(&FetchObservation {
                url: url.to_string(),
                elapsed,
            });
        }
        if !self.throttle.is_zero() {
            thread::sleep(self.throttle);
        }
        Ok(body)
    }
}

fn parse_envelope<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_str(body).map_err(|source| Error::Parse {
        url: url.to_string(),
        source,
    })?;
    Ok(envelope.body)
}

fn movie_from_raw(raw: &RawFilm) -> Movie {
    Movie {
        id: raw.id.clone(),
        name: raw.name.clone(),
        attributes: raw.attribute_ids.clone(),
        length: raw.length,
    }
}

fn event_from_raw(raw: &RawEvent, movie: Arc<Movie>, cinema: Arc<Cinema>) -> Result<Event> {
    let date = NaiveDateTime::parse_from_str(&raw.event_date_time, EVENT_DATE_FORMAT).map_err(
        |source| Error::EventDate {
            event_id: raw.id.clone(),
            value: raw.event_date_time.clone(),
            source,
        },
    )?;
    Ok(Event {
        id: raw.id.clone(),
        booking_link: raw.booking_link.clone(),
        movie,
        cinema,
        date,
        sold_out: raw.sold_out,
        attributes: raw.attribute_ids.clone(),
    })
}

fn cinema_from_raw(raw: &RawCinema) -> Cinema {
    Cinema::new(raw.id.clone(), raw.display_name.clone())
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    body: T,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EventListing {
    pub(crate) films: Vec<RawFilm>,
    pub(crate) events: Vec<RawEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawFilm {
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(rename = "attributeIds")]
    pub(crate) attribute_ids: Vec<String>,
    pub(crate) length: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawEvent {
    pub(crate) id: String,
    #[serde(rename = "filmId")]
    pub(crate) film_id: String,
    #[serde(rename = "bookingLink")]
    pub(crate) booking_link: String,
    #[serde(rename = "eventDateTime")]
    pub(crate) event_date_time: String,
    #[serde(rename = "soldOut")]
    pub(crate) sold_out: bool,
    #[serde(rename = "attributeIds")]
    pub(crate) attribute_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CinemaListing {
    pub(crate) cinemas: Vec<RawCinema>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawCinema {
    pub(crate) id: String,
    #[serde(rename = "displayName")]
    pub(crate) display_name: String,
}
