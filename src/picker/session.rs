//! Scalar state for one open picker session.

use std::time::{Duration, Instant};

/// Rate limit for search-driven fetches: at most one fetch trigger per
/// window, carrying the most recent input (trailing edge).
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Scroll distance from the list bottom, in pixels, under which the next
/// page is requested.
pub const SCROLL_FETCH_THRESHOLD_PX: f32 = 200.0;

/// Session-scoped fetch and search state.
///
/// `generation` tags every fetch issued for this session; results arriving
/// with another generation are stale and must be ignored.
#[derive(Debug)]
pub struct PickerSession {
    /// Index of the entry being edited; valid only while the picker is open.
    pub editing_index: usize,
    /// Search term the current cache contents belong to.
    pub search_term: String,
    /// Live input text; becomes `search_term` when the debounce fires.
    pub search_input: String,
    /// Next page to request, starting at 1.
    pub next_page: u32,
    pub has_more: bool,
    pub fetching: bool,
    pub generation: u64,
    debounce_deadline: Option<Instant>,
}

impl PickerSession {
    pub fn new(editing_index: usize, generation: u64) -> Self {
        Self {
            editing_index,
            search_term: String::new(),
            search_input: String::new(),
            next_page: 1,
            has_more: true,
            fetching: false,
            generation,
            debounce_deadline: None,
        }
    }

    /// Record a keystroke. The first keystroke of an idle window arms the
    /// deadline; later ones only update the text, so continuous typing still
    /// fires once per window.
    pub fn note_search_input(&mut self, text: impl Into<String>, now: Instant) {
        self.search_input = text.into();
        if self.debounce_deadline.is_none() {
            self.debounce_deadline = Some(now + SEARCH_DEBOUNCE);
        }
    }

    /// Return the term to search for if the debounce window has elapsed.
    /// Yields nothing when the input already matches the active term.
    pub fn due_search(&mut self, now: Instant) -> Option<String> {
        let deadline = self.debounce_deadline?;
        if now < deadline {
            return None;
        }
        self.debounce_deadline = None;
        if self.search_input == self.search_term {
            return None;
        }
        Some(self.search_input.clone())
    }

    /// Adopt a new search term under a fresh generation: first page, nothing
    /// exhausted, no fetch accounted to the old term.
    pub fn begin_search(&mut self, term: impl Into<String>, generation: u64) {
        self.search_term = term.into();
        self.search_input = self.search_term.clone();
        self.next_page = 1;
        self.has_more = true;
        self.fetching = false;
        self.generation = generation;
    }
}
