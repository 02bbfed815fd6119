//! Picker session orchestration: open, search, paginate, toggle, commit.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::catalog::{ProductId, VariantId};
use crate::picker::{PickerSession, ResultCache, SCROLL_FETCH_THRESHOLD_PX, SelectionSet};

use super::{AppController, JobMessage, OpenPicker, SearchPageResult};

impl AppController {
    /// Open the picker for the entry at `index`, seeding the selection from
    /// the entry's current variants. Whatever a previous session left behind
    /// is discarded before anything else happens.
    pub fn open_picker_for(&mut self, index: usize) {
        let generation = self.next_generation();
        let entry = &self.deal_list.entries()[index];
        let mut selection = SelectionSet::new();
        selection.seed_from_entry(entry);
        info!(index, generation, seeded = selection.count(), "opening picker");
        self.picker = Some(OpenPicker {
            session: PickerSession::new(index, generation),
            cache: ResultCache::new(),
            selection,
        });
        self.request_fetch();
    }

    /// Record search box input; the actual fetch fires on a later [`tick`]
    /// once the debounce window elapses.
    ///
    /// [`tick`]: AppController::tick
    pub fn set_search_input(&mut self, text: &str, now: Instant) {
        if let Some(picker) = &mut self.picker {
            picker.session.note_search_input(text, now);
        }
    }

    /// Drive time-based work. The surface calls this every loop turn with
    /// the current instant.
    pub fn tick(&mut self, now: Instant) {
        let due = self
            .picker
            .as_mut()
            .and_then(|picker| picker.session.due_search(now));
        if let Some(term) = due {
            self.reset_and_fetch(term);
        }
    }

    /// Scroll report from the rendering surface; near the bottom the next
    /// page is requested.
    pub fn handle_scroll(&mut self, distance_from_bottom: f32) {
        if distance_from_bottom <= SCROLL_FETCH_THRESHOLD_PX {
            self.request_fetch();
        }
    }

    /// Toggle the product-level checkbox: checks or clears every variant of
    /// the product.
    pub fn toggle_product(&mut self, product_id: &ProductId, checked: bool) {
        let Some(picker) = &mut self.picker else {
            return;
        };
        let Some(product) = picker.cache.product(product_id).cloned() else {
            return;
        };
        picker.selection.select_product(&product, checked);
        picker.cache.sync_selection(&picker.selection);
    }

    /// Toggle a single variant checkbox.
    pub fn toggle_variant(&mut self, product_id: &ProductId, variant_id: &VariantId, checked: bool) {
        let Some(picker) = &mut self.picker else {
            return;
        };
        let Some(product) = picker.cache.product(product_id).cloned() else {
            return;
        };
        let Some(row) = product
            .variants
            .iter()
            .find(|row| row.variant.id == *variant_id)
        else {
            return;
        };
        picker.selection.select_variant(&product, &row.variant, checked);
        picker.cache.sync_selection(&picker.selection);
    }

    /// Discard the session without touching the deal list.
    pub fn cancel_picker(&mut self) {
        if self.picker.take().is_some() {
            info!("picker cancelled");
        }
    }

    /// Materialize the selection into per-product entries and atomically
    /// replace the edited entry. An empty selection just removes it.
    pub fn confirm_picker(&mut self) {
        let Some(picker) = self.picker.take() else {
            return;
        };
        let entries = picker.selection.materialize_entries();
        info!(
            index = picker.session.editing_index,
            entries = entries.len(),
            "committing picker selection"
        );
        self.deal_list
            .commit_replace(picker.session.editing_index, entries);
    }

    /// Apply all completed fetch results. Call once per event-loop turn.
    pub fn process_job_messages(&mut self) {
        while let Ok(message) = self.jobs.try_recv_message() {
            match message {
                JobMessage::SearchPageLoaded(result) => self.apply_search_page(result),
            }
        }
    }

    /// Adopt `term` as the active search: clear the cache, restart paging
    /// under a fresh generation, and fetch the first page.
    fn reset_and_fetch(&mut self, term: String) {
        let generation = self.next_generation();
        let Some(picker) = &mut self.picker else {
            return;
        };
        debug!(term = term.as_str(), generation, "search reset");
        picker.cache.clear();
        picker.session.begin_search(term, generation);
        self.request_fetch();
    }

    /// Request the next page unless a fetch is already pending or the term
    /// is exhausted.
    fn request_fetch(&mut self) {
        let Some(picker) = &mut self.picker else {
            return;
        };
        let session = &mut picker.session;
        if session.fetching || !session.has_more {
            return;
        }
        session.fetching = true;
        self.jobs
            .spawn_search(session.generation, session.search_term.clone(), session.next_page);
    }

    fn apply_search_page(&mut self, result: SearchPageResult) {
        let Some(picker) = &mut self.picker else {
            debug!(generation = result.generation, "dropping fetch result; picker closed");
            return;
        };
        if result.generation != picker.session.generation {
            debug!(
                got = result.generation,
                active = picker.session.generation,
                "dropping stale fetch result"
            );
            return;
        }
        picker.session.fetching = false;
        match result.outcome {
            Ok(products) => {
                // An empty page signals exhaustion.
                picker.session.has_more = !products.is_empty();
                if !products.is_empty() {
                    picker.session.next_page += 1;
                    picker.cache.append_page(products, &picker.selection);
                }
            }
            Err(err) => {
                // has_more stays as-is so a later scroll or search retries.
                warn!(
                    page = result.page,
                    term = result.term.as_str(),
                    error = %err,
                    "catalog page fetch failed"
                );
            }
        }
    }
}
