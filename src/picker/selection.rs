//! Hierarchical product/variant selection state for an open picker.
//!
//! The set is independent of pagination: picks survive search-term resets
//! because each one remembers its owning product, so a commit can group them
//! even after the cache that produced them is gone.

use crate::catalog::{ProductId, Variant, VariantId};
use crate::deal_list::DealEntry;

use super::cache::CachedProduct;

/// One checked variant, remembered with its owning product.
#[derive(Clone, Debug, PartialEq)]
pub struct Pick {
    pub product_id: ProductId,
    pub product_title: String,
    pub variant: Variant,
}

/// Tri-state of a product-level checkbox.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProductCheckState {
    Unchecked,
    /// At least one but not all of the product's variants are picked.
    Partial,
    Checked,
}

/// Insertion-ordered set of checked variants, deduplicated by variant id.
#[derive(Clone, Debug, Default)]
pub struct SelectionSet {
    picks: Vec<Pick>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total variants currently selected.
    pub fn count(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn contains(&self, variant_id: &VariantId) -> bool {
        self.picks.iter().any(|pick| pick.variant.id == *variant_id)
    }

    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    /// Check or uncheck every variant of `product`.
    pub fn select_product(&mut self, product: &CachedProduct, checked: bool) {
        if checked {
            for row in &product.variants {
                self.insert(product, &row.variant);
            }
        } else {
            self.picks
                .retain(|pick| pick.product_id != product.id);
        }
    }

    /// Check or uncheck exactly one variant.
    pub fn select_variant(&mut self, product: &CachedProduct, variant: &Variant, checked: bool) {
        if checked {
            self.insert(product, variant);
        } else {
            self.picks.retain(|pick| pick.variant.id != variant.id);
        }
    }

    /// Pre-check the variants an entry already carries, so reopening a
    /// populated entry starts from its current state.
    pub fn seed_from_entry(&mut self, entry: &DealEntry) {
        if entry.placeholder {
            return;
        }
        for row in &entry.variants {
            if !self.contains(&row.variant.id) {
                self.picks.push(Pick {
                    product_id: entry.id.clone(),
                    product_title: entry.title.clone(),
                    variant: row.variant.clone(),
                });
            }
        }
    }

    /// Tri-state for the product-level checkbox. A product with no variants
    /// reads as unchecked.
    pub fn check_state(&self, product: &CachedProduct) -> ProductCheckState {
        if product.variants.is_empty() {
            return ProductCheckState::Unchecked;
        }
        let picked = product
            .variants
            .iter()
            .filter(|row| self.contains(&row.variant.id))
            .count();
        if picked == 0 {
            ProductCheckState::Unchecked
        } else if picked == product.variants.len() {
            ProductCheckState::Checked
        } else {
            ProductCheckState::Partial
        }
    }

    /// Materialize picks into one entry per product, grouped by product id.
    /// Product order follows the first pick of each product; variant order
    /// follows pick order within the product.
    pub fn materialize_entries(&self) -> Vec<DealEntry> {
        let mut entries: Vec<DealEntry> = Vec::new();
        for pick in &self.picks {
            match entries.iter_mut().find(|entry| entry.id == pick.product_id) {
                Some(entry) => {
                    entry.variants.push(crate::deal_list::EntryVariant {
                        variant: pick.variant.clone(),
                        discount: Default::default(),
                    });
                }
                None => entries.push(DealEntry::for_product(
                    pick.product_id.clone(),
                    pick.product_title.clone(),
                    vec![pick.variant.clone()],
                )),
            }
        }
        entries
    }

    fn insert(&mut self, product: &CachedProduct, variant: &Variant) {
        if self.contains(&variant.id) {
            return;
        }
        self.picks.push(Pick {
            product_id: product.id.clone(),
            product_title: product.title.clone(),
            variant: variant.clone(),
        });
    }
}
