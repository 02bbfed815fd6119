//! Maintains app state and bridges the deal list and picker to a rendering
//! surface.
//!
//! Single-threaded, event-driven: the surface forwards user input events and
//! calls [`AppController::process_job_messages`] once per loop turn to apply
//! completed fetches. All shared state is owned here and mutated only through
//! these operations.

mod drag;
mod entries;
mod jobs;
mod picker;
mod view;

#[cfg(test)]
mod test_support;


use std::sync::Arc;

use crate::catalog::remote::CatalogClient;
use crate::deal_list::DealList;
use crate::picker::{PickerSession, ResultCache, SelectionSet};

use drag::DragTrack;
use jobs::JobRuntime;
pub(crate) use jobs::{JobMessage, SearchPageResult};

pub use view::{DealRowView, DealVariantRowView, PickerProductView, PickerVariantView, PickerView};

/// Everything belonging to one open picker dialog, dropped wholesale when it
/// closes so no state leaks into the next session.
pub(crate) struct OpenPicker {
    pub(crate) session: PickerSession,
    pub(crate) cache: ResultCache,
    pub(crate) selection: SelectionSet,
}

/// Owns the deal list and the at-most-one open picker session.
pub struct AppController {
    deal_list: DealList,
    picker: Option<OpenPicker>,
    drag: Option<DragTrack>,
    fetch_generation: u64,
    jobs: JobRuntime,
}

impl AppController {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self {
            deal_list: DealList::new(),
            picker: None,
            drag: None,
            fetch_generation: 0,
            jobs: JobRuntime::new(client),
        }
    }

    /// Read access to the main list; order here is render order.
    pub fn deal_list(&self) -> &DealList {
        &self.deal_list
    }

    pub fn picker_open(&self) -> bool {
        self.picker.is_some()
    }

    /// Next fetch generation. Bumped on every picker open and search reset;
    /// results tagged with an older value are stale.
    fn next_generation(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.fetch_generation
    }
}
