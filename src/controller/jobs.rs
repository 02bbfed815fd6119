//! Background fetch jobs and their completion messages.
//!
//! One worker thread per fetch; results come back over an mpsc channel and
//! are applied on the caller's event loop. In-flight requests are never
//! cancelled, only ignored on arrival when their generation has lapsed.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;

use tracing::debug;

use crate::catalog::Product;
use crate::catalog::remote::{CatalogClient, CatalogError, PAGE_SIZE};

pub(crate) enum JobMessage {
    SearchPageLoaded(SearchPageResult),
}

/// Completion of one catalog page fetch, tagged with the generation active
/// when the fetch was issued.
pub(crate) struct SearchPageResult {
    pub(crate) generation: u64,
    pub(crate) term: String,
    pub(crate) page: u32,
    pub(crate) outcome: Result<Vec<Product>, CatalogError>,
}

pub(crate) struct JobRuntime {
    client: Arc<dyn CatalogClient>,
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
}

impl JobRuntime {
    pub(crate) fn new(client: Arc<dyn CatalogClient>) -> Self {
        let (message_tx, message_rx) = channel();
        Self {
            client,
            message_tx,
            message_rx,
        }
    }

    pub(crate) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    #[cfg(test)]
    pub(crate) fn message_sender(&self) -> Sender<JobMessage> {
        self.message_tx.clone()
    }

    /// Issue one page fetch on a worker thread.
    pub(crate) fn spawn_search(&self, generation: u64, term: String, page: u32) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            debug!(generation, page, term = term.as_str(), "fetching catalog page");
            let outcome = client.search(&term, page, PAGE_SIZE);
            let _ = tx.send(JobMessage::SearchPageLoaded(SearchPageResult {
                generation,
                term,
                page,
                outcome,
            }));
        });
    }
}
