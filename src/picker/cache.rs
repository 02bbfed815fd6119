//! Accumulated search results for the current search term.
//!
//! Pages are appended in fetch order and kept until the term changes or the
//! session closes. Checkbox flags on cached rows are only ever written by
//! [`ResultCache::sync_selection`], keeping them in lockstep with the
//! selection set.

use crate::catalog::{Product, ProductId, Variant};

use super::selection::SelectionSet;

/// A catalog variant row plus its picker checkbox flag.
#[derive(Clone, Debug, PartialEq)]
pub struct CachedVariant {
    pub variant: Variant,
    pub selected: bool,
}

/// One product accumulated in the result cache.
#[derive(Clone, Debug, PartialEq)]
pub struct CachedProduct {
    pub id: ProductId,
    pub title: String,
    pub vendor: Option<String>,
    pub image_url: Option<String>,
    pub variants: Vec<CachedVariant>,
}

impl CachedProduct {
    /// Wrap a fetched product, initializing checkbox flags from the selection
    /// set rather than from any remote state.
    pub fn from_product(product: Product, selection: &SelectionSet) -> Self {
        Self {
            id: product.id,
            title: product.title,
            vendor: product.vendor,
            image_url: product.image_url,
            variants: product
                .variants
                .into_iter()
                .map(|variant| CachedVariant {
                    selected: selection.contains(&variant.id),
                    variant,
                })
                .collect(),
        }
    }
}

/// Pages of search results accumulated for one search term.
#[derive(Debug, Default)]
pub struct ResultCache {
    products: Vec<CachedProduct>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[CachedProduct] {
        &self.products
    }

    pub fn product(&self, id: &ProductId) -> Option<&CachedProduct> {
        self.products.iter().find(|product| product.id == *id)
    }

    /// Drop everything; used on search-term change and session close.
    pub fn clear(&mut self) {
        self.products.clear();
    }

    /// Append one fetched page, preserving remote order within the page.
    pub fn append_page(&mut self, page: Vec<Product>, selection: &SelectionSet) {
        self.products.extend(
            page.into_iter()
                .map(|product| CachedProduct::from_product(product, selection)),
        );
    }

    /// Recompute every checkbox flag from the selection set. The single
    /// authoritative write path for cached `selected` flags.
    pub fn sync_selection(&mut self, selection: &SelectionSet) {
        for product in &mut self.products {
            for row in &mut product.variants {
                row.selected = selection.contains(&row.variant.id);
            }
        }
    }

    /// Display-only filter: case-insensitive substring match on product
    /// title. Cache order is untouched.
    pub fn filtered(&self, filter: &str) -> Vec<&CachedProduct> {
        if filter.is_empty() {
            return self.products.iter().collect();
        }
        let needle = filter.to_lowercase();
        self.products
            .iter()
            .filter(|product| product.title.to_lowercase().contains(&needle))
            .collect()
    }
}
