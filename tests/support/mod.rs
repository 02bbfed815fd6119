use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use rust_decimal::Decimal;

use dealrack::AppController;
use dealrack::catalog::remote::{CatalogClient, CatalogError};
use dealrack::catalog::{Product, ProductId, Variant, VariantId};

pub fn variant(id: &str, title: &str) -> Variant {
    Variant {
        id: VariantId::new(id),
        title: title.to_string(),
        price: Decimal::new(2500, 2),
    }
}

pub fn product(id: &str, title: &str, variant_ids: &[&str]) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        vendor: Some("Integration Vendor".to_string()),
        image_url: Some(format!("https://cdn.test/{id}.png")),
        variants: variant_ids
            .iter()
            .map(|vid| variant(vid, &format!("Variant {vid}")))
            .collect(),
    }
}

/// Catalog client answering from a scripted (term, page) table. Unscripted
/// pages come back empty, signalling exhaustion.
pub struct ScriptedClient {
    responses: Mutex<HashMap<(String, u32), Vec<Product>>>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn respond(&self, term: &str, page: u32, products: Vec<Product>) {
        self.responses
            .lock()
            .unwrap()
            .insert((term.to_string(), page), products);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CatalogClient for ScriptedClient {
    fn search(&self, term: &str, page: u32, _limit: u32) -> Result<Vec<Product>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(&(term.to_string(), page))
            .cloned()
            .unwrap_or_default())
    }
}

/// Drain job messages until `done` holds, failing the test on timeout.
pub fn pump_until(controller: &mut AppController, mut done: impl FnMut(&AppController) -> bool) {
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
