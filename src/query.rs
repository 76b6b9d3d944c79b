//! Lazy filter/select pipeline over fetched events.

use std::sync::Arc;

use crate::models::Event;

/// A chainable query over a fetched event collection.
///
/// `filter` only records its predicate; nothing is evaluated until an
/// iterator returned by [`Query::select`] or [`Query::events`] is consumed.
/// Predicates therefore run at evaluation time, not construction time — a
/// panicking predicate surfaces mid-iteration.
///
/// The underlying collection is re-iterable: `select` borrows the query, so
/// it can be called any number of times, and each call walks the full
/// collection again. Queries are also cheap to clone (the event collection
/// is shared, not copied).
#[derive(Clone)]
pub struct Query {
    events: Arc<Vec<Event>>,
    filters: Vec<Arc<dyn Fn(&Event) -> bool>>,
}

impl std::fmt::Debug for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("events", &self.events)
            .field("filters_len", &self.filters.len())
            .finish()
    }
}

impl Query {
    pub(crate) fn new(events: Vec<Event>) -> Self {
        Self {
            events: Arc::new(events),
            filters: Vec::new(),
        }
    }

    /// Narrows the query to events satisfying `predicate`, preserving
    /// relative order. Stacked filters must all pass.
    pub fn filter<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&Event) -> bool + 'static,
    {
        self.filters.push(Arc::new(predicate));
        self
    }

    /// Projects each surviving event through `projection`. Consuming the
    /// returned iterator is what triggers evaluation of the whole chain.
    pub fn select<T, F>(&self, projection: F) -> impl Iterator<Item = T>
    where
        F: Fn(&Event) -> T,
    {
        let events = Arc::clone(&self.events);
        let filters = self.filters.clone();
        (0..events.len()).filter_map(move |index| {
            let event = &events[index];
            filters
                .iter()
                .all(|predicate| predicate(event))
                .then(|| projection(event))
        })
    }

    /// Identity projection, for callers that want the events themselves.
    pub fn events(&self) -> impl Iterator<Item = Event> {
        self.select(Clone::clone)
    }
}
