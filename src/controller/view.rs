//! Read-only snapshots handed to a rendering surface.
//!
//! The controller owns all mutable state; surfaces get plain data and feed
//! events back through the operations on [`AppController`].

use rust_decimal::Decimal;

use crate::catalog::{ProductId, VariantId};
use crate::deal_list::Discount;
use crate::picker::ProductCheckState;

use super::AppController;

/// One variant row under a committed entry.
#[derive(Clone, Debug)]
pub struct DealVariantRowView {
    pub id: VariantId,
    pub title: String,
    pub price: Decimal,
    pub discount: Discount,
}

/// One row of the main list.
#[derive(Clone, Debug)]
pub struct DealRowView {
    pub index: usize,
    pub title: String,
    /// Placeholder rows show no discount input, no variant rows, and no
    /// per-variant affordances.
    pub placeholder: bool,
    pub discount: Discount,
    /// The remove affordance is hidden (not disabled) on the last row.
    pub show_remove: bool,
    pub variants: Vec<DealVariantRowView>,
}

/// One variant checkbox row inside the picker dialog.
#[derive(Clone, Debug)]
pub struct PickerVariantView {
    pub id: VariantId,
    pub title: String,
    pub price: Decimal,
    pub selected: bool,
}

/// One product block inside the picker dialog.
#[derive(Clone, Debug)]
pub struct PickerProductView {
    pub id: ProductId,
    pub title: String,
    pub vendor: Option<String>,
    pub image_url: Option<String>,
    pub check: ProductCheckState,
    pub variants: Vec<PickerVariantView>,
}

/// Snapshot of the open picker dialog.
#[derive(Clone, Debug)]
pub struct PickerView {
    pub search_input: String,
    pub products: Vec<PickerProductView>,
    /// Running "N selected" total shown in the footer.
    pub selected_count: usize,
    pub fetching: bool,
    pub has_more: bool,
}

impl AppController {
    /// Snapshot of the main list in render order.
    pub fn deal_rows(&self) -> Vec<DealRowView> {
        let show_remove = self.deal_list.len() > 1;
        self.deal_list
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| DealRowView {
                index,
                title: entry.title.clone(),
                placeholder: entry.placeholder,
                discount: entry.discount.clone(),
                show_remove,
                variants: entry
                    .variants
                    .iter()
                    .map(|row| DealVariantRowView {
                        id: row.variant.id.clone(),
                        title: row.variant.title.clone(),
                        price: row.variant.price,
                        discount: row.discount.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Snapshot of the picker dialog, or `None` when it is closed. The live
    /// search input doubles as a display-only filter over cached products
    /// while the debounced remote search is still pending.
    pub fn picker_view(&self) -> Option<PickerView> {
        let picker = self.picker.as_ref()?;
        let products = picker
            .cache
            .filtered(&picker.session.search_input)
            .into_iter()
            .map(|product| PickerProductView {
                id: product.id.clone(),
                title: product.title.clone(),
                vendor: product.vendor.clone(),
                image_url: product.image_url.clone(),
                check: picker.selection.check_state(product),
                variants: product
                    .variants
                    .iter()
                    .map(|row| PickerVariantView {
                        id: row.variant.id.clone(),
                        title: row.variant.title.clone(),
                        price: row.variant.price,
                        selected: row.selected,
                    })
                    .collect(),
            })
            .collect();
        Some(PickerView {
            search_input: picker.session.search_input.clone(),
            products,
            selected_count: picker.selection.count(),
            fetching: picker.session.fetching,
            has_more: picker.session.has_more,
        })
    }
}
