use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use rust_decimal::Decimal;

use crate::catalog::remote::{CatalogClient, CatalogError};
use crate::catalog::{Product, ProductId, Variant, VariantId};
use crate::deal_list::DealEntry;

use super::AppController;

pub(super) fn variant(id: &str, title: &str) -> Variant {
    Variant {
        id: VariantId::new(id),
        title: title.to_string(),
        price: Decimal::new(1999, 2),
    }
}

pub(super) fn product(id: &str, title: &str, variant_ids: &[&str]) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        vendor: Some("Test Vendor".to_string()),
        image_url: None,
        variants: variant_ids
            .iter()
            .map(|vid| variant(vid, &format!("Variant {vid}")))
            .collect(),
    }
}

/// Catalog client answering from a scripted (term, page) table. Unscripted
/// pages come back empty, i.e. exhausted.
pub(super) struct ScriptedClient {
    responses: Mutex<HashMap<(String, u32), Result<Vec<Product>, CatalogError>>>,
    calls: AtomicUsize,
    log: Mutex<Vec<(String, u32)>>,
}

impl ScriptedClient {
    pub(super) fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
            log: Mutex::new(Vec::new()),
        })
    }

    pub(super) fn respond(&self, term: &str, page: u32, products: Vec<Product>) {
        self.responses
            .lock()
            .unwrap()
            .insert((term.to_string(), page), Ok(products));
    }

    pub(super) fn fail(&self, term: &str, page: u32, error: CatalogError) {
        self.responses
            .lock()
            .unwrap()
            .insert((term.to_string(), page), Err(error));
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(super) fn call_log(&self) -> Vec<(String, u32)> {
        self.log.lock().unwrap().clone()
    }
}

impl CatalogClient for ScriptedClient {
    fn search(&self, term: &str, page: u32, _limit: u32) -> Result<Vec<Product>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.log.lock().unwrap().push((term.to_string(), page));
        self.responses
            .lock()
            .unwrap()
            .remove(&(term.to_string(), page))
            .unwrap_or(Ok(Vec::new()))
    }
}

/// Wrapper that holds every search on a gate until released, to pin the
/// controller in its "fetch in flight" state.
pub(super) struct GatedClient {
    inner: Arc<ScriptedClient>,
    open: Mutex<bool>,
    released: Condvar,
    started: AtomicUsize,
}

impl GatedClient {
    pub(super) fn new(inner: Arc<ScriptedClient>) -> Arc<Self> {
        Arc::new(Self {
            inner,
            open: Mutex::new(false),
            released: Condvar::new(),
            started: AtomicUsize::new(0),
        })
    }

    /// Number of searches that have entered the gate (issued, maybe blocked).
    pub(super) fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub(super) fn release(&self) {
        *self.open.lock().unwrap() = true;
        self.released.notify_all();
    }

    pub(super) fn wait_for_started(&self, count: usize) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while self.started() < count {
            assert!(Instant::now() < deadline, "search never issued");
            thread::sleep(Duration::from_millis(2));
        }
    }
}

impl CatalogClient for GatedClient {
    fn search(&self, term: &str, page: u32, limit: u32) -> Result<Vec<Product>, CatalogError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        let mut open = self.open.lock().unwrap();
        while !*open {
            open = self.released.wait(open).unwrap();
        }
        drop(open);
        self.inner.search(term, page, limit)
    }
}

/// Drain job messages until `done` holds, failing the test on timeout.
pub(super) fn pump_until(
    controller: &mut AppController,
    mut done: impl FnMut(&AppController) -> bool,
) {
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        controller.process_job_messages();
        if done(controller) {
            return;
        }
        assert!(Instant::now() < deadline, "condition not reached in time");
        thread::sleep(Duration::from_millis(2));
    }
}

/// Controller whose list holds a single placeholder row.
pub(super) fn controller_with_placeholder(client: Arc<dyn CatalogClient>) -> AppController {
    let mut controller = AppController::new(client);
    controller.add_placeholder();
    controller
}

/// Controller whose list holds the given committed entries.
pub(super) fn controller_with_entries(
    client: Arc<dyn CatalogClient>,
    entries: Vec<DealEntry>,
) -> AppController {
    let mut controller = AppController::new(client);
    controller.add_placeholder();
    controller.deal_list.commit_replace(0, entries);
    controller
}
