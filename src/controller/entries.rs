//! Main-list operations forwarded from the rendering surface.

use tracing::info;

use crate::deal_list::Discount;

use super::AppController;

impl AppController {
    /// Append an empty "Select Product" slot.
    pub fn add_placeholder(&mut self) {
        self.deal_list.add_placeholder();
    }

    /// Delete the entry at `index`. The surface hides the affordance when a
    /// single entry remains, but the operation stays correct at any length.
    pub fn remove_entry(&mut self, index: usize) {
        let removed = self.deal_list.remove(index);
        info!(index, id = removed.id.as_str(), "removed entry");
    }

    /// Remove one variant row from an entry; the entry itself stays.
    pub fn remove_entry_variant(&mut self, entry_index: usize, variant_index: usize) {
        self.deal_list.remove_variant(entry_index, variant_index);
    }

    /// Capture an entry-level discount line.
    pub fn set_entry_discount(&mut self, index: usize, discount: Discount) {
        self.deal_list.set_entry_discount(index, discount);
    }

    /// Capture a variant-level discount line.
    pub fn set_variant_discount(
        &mut self,
        entry_index: usize,
        variant_index: usize,
        discount: Discount,
    ) {
        self.deal_list
            .set_variant_discount(entry_index, variant_index, discount);
    }
}
