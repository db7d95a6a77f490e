/// The state a store exposes to readers.
///
/// `items` always holds the last successfully fetched rows (plus merged
/// mutation results). A failed refresh keeps them and records `error`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set after the first successful fetch.
    pub loaded: bool,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            loaded: false,
        }
    }
}

/// Whether a snapshot can feed an aggregation.
#[derive(Debug, PartialEq)]
pub enum Availability<'a, T> {
    /// Nothing fetched yet, or a fetch is in flight.
    Pending,
    /// The last fetch failed.
    Unavailable(&'a str),
    Ready(&'a [T]),
}

impl<T> Snapshot<T> {
    /// A snapshot with a fetch in flight is never `Ready`, even when it holds
    /// rows from an earlier load.
    pub fn availability(&self) -> Availability<'_, T> {
        match (&self.error, self.loading, self.loaded) {
            (Some(error), _, _) => Availability::Unavailable(error),
            (None, true, _) | (None, false, false) => Availability::Pending,
            (None, false, true) => Availability::Ready(&self.items),
        }
    }
}
