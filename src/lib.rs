//! Client library for the Cinema City Hungary data API: fetch showtime
//! listings and slice them with a small filter/select query pipeline.
//!
//! ```no_run
//! use chrono::Local;
//! use cinecity::catalog::{ALBA, ALLE};
//! use cinecity::{CinemaCityClient, Language};
//!
//! fn main() -> cinecity::Result<()> {
//!     let mut client = CinemaCityClient::new(Language::English)?;
//!     let today = Local::now().date_naive();
//!     let query = client.search_events(&[today], &[ALLE.clone(), ALBA.clone()])?;
//!     let screenings: Vec<_> = query
//!         .filter(|e| e.movie.id == "3196o2r")
//!         .select(|e| (e.date, e.cinema.name.clone()))
//!         .collect();
//!     println!("{screenings:?}");
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod catalog;
pub mod client;
pub mod error;
pub mod models;
pub mod query;

pub use client::{CinemaCityClient, FetchObservation, HttpTransport, Language, Transport};
pub use error::{Error, Result};
pub use models::{Cinema, Event, Movie};
pub use query::Query;
