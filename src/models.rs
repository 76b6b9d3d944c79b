use std::sync::Arc;

use chrono::NaiveDateTime;

/// A film as listed by the data API. One instance is shared by every
/// screening of the same film within a fetched collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: String,
    pub name: String,
    /// Format/language tags as reported upstream, e.g. "2d", "dubbed".
    pub attributes: Vec<String>,
    /// Running time in minutes.
    pub length: u32,
}

/// A Cinema City site. Well-known Hungarian sites are predefined in
/// [`crate::catalog`]; the listing endpoint may also report sites missing
/// from the catalog, named by their upstream `displayName`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cinema {
    pub id: String,
    pub name: String,
}

impl Cinema {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A single screening of a movie in a cinema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub booking_link: String,
    pub movie: Arc<Movie>,
    pub cinema: Arc<Cinema>,
    /// Local wall-clock time of the screening; the API carries no timezone.
    pub date: NaiveDateTime,
    pub sold_out: bool,
    /// Per-showing tags. These can differ from the movie's own attributes,
    /// e.g. a subtitled showing of an otherwise dubbed film.
    pub attributes: Vec<String>,
}
