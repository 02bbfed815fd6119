//! The ordered list of deal entries shown in the main view.
//!
//! This list is the sole source of truth for main-view row order. Every
//! mutation goes through the operations here; the drag controller and the
//! picker commit both funnel into them.

use rust_decimal::Decimal;

use crate::catalog::{ProductId, Variant};

/// Sentinel id carried by placeholder entries; never issued by the catalog.
pub const PLACEHOLDER_ID: &str = "001";
/// Title shown on a placeholder row.
pub const PLACEHOLDER_TITLE: &str = "Select Product";

/// How a captured discount value is meant to be applied.
///
/// The value is captured verbatim; no validation or computation happens here.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DiscountKind {
    #[default]
    PercentOff,
    Flat,
}

/// A discount line attached to an entry or one of its variants.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Discount {
    pub value: Option<Decimal>,
    pub kind: DiscountKind,
}

/// One variant carried by a committed entry, with its own discount line.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryVariant {
    pub variant: Variant,
    pub discount: Discount,
}

/// One row of the main list: either a placeholder slot or a product snapshot.
///
/// Non-placeholder entries own independent copies of the variants selected at
/// commit time; they are not live references into any picker cache.
#[derive(Clone, Debug, PartialEq)]
pub struct DealEntry {
    pub id: ProductId,
    pub title: String,
    pub placeholder: bool,
    pub discount: Discount,
    pub variants: Vec<EntryVariant>,
}

impl DealEntry {
    /// An empty "Select Product" slot.
    pub fn placeholder() -> Self {
        Self {
            id: ProductId::new(PLACEHOLDER_ID),
            title: PLACEHOLDER_TITLE.to_string(),
            placeholder: true,
            discount: Discount::default(),
            variants: Vec::new(),
        }
    }

    /// A committed entry snapshotting the given variants of one product.
    pub fn for_product(id: ProductId, title: impl Into<String>, variants: Vec<Variant>) -> Self {
        Self {
            id,
            title: title.into(),
            placeholder: false,
            discount: Discount::default(),
            variants: variants
                .into_iter()
                .map(|variant| EntryVariant {
                    variant,
                    discount: Discount::default(),
                })
                .collect(),
        }
    }
}

/// Ordered sequence of deal entries.
#[derive(Debug, Default)]
pub struct DealList {
    entries: Vec<DealEntry>,
}

impl DealList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[DealEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&DealEntry> {
        self.entries.get(index)
    }

    /// Append a placeholder row.
    pub fn add_placeholder(&mut self) {
        self.entries.push(DealEntry::placeholder());
    }

    /// Relocate the entry at `from` to position `to` (single splice, not a
    /// swap). `to` is the target position after removal.
    ///
    /// Panics when either index is out of range; callers pass indices taken
    /// from the current row set.
    pub fn move_entry(&mut self, from: usize, to: usize) {
        assert!(to < self.entries.len(), "move target {to} out of range");
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
    }

    /// Delete the entry at `index`. Valid on a single-entry list, which then
    /// becomes empty.
    pub fn remove(&mut self, index: usize) -> DealEntry {
        self.entries.remove(index)
    }

    /// Remove one variant row from an entry. The entry itself stays even if
    /// it ends up variant-less.
    pub fn remove_variant(&mut self, entry_index: usize, variant_index: usize) {
        self.entries[entry_index].variants.remove(variant_index);
    }

    /// Record a discount line on an entry.
    pub fn set_entry_discount(&mut self, index: usize, discount: Discount) {
        self.entries[index].discount = discount;
    }

    /// Record a discount line on one variant of an entry.
    pub fn set_variant_discount(
        &mut self,
        entry_index: usize,
        variant_index: usize,
        discount: Discount,
    ) {
        self.entries[entry_index].variants[variant_index].discount = discount;
    }

    /// Atomically substitute the entry at `index` with `replacements`.
    ///
    /// An empty replacement set simply removes the entry. There is never a
    /// partially-applied intermediate state.
    pub fn commit_replace(&mut self, index: usize, replacements: Vec<DealEntry>) {
        self.entries.splice(index..=index, replacements);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VariantId;

    fn variant(id: &str, title: &str) -> Variant {
        Variant {
            id: VariantId::new(id),
            title: title.to_string(),
            price: Decimal::new(1000, 2),
        }
    }

    fn entry(id: &str) -> DealEntry {
        DealEntry::for_product(ProductId::new(id), format!("Product {id}"), vec![])
    }

    fn ids(list: &DealList) -> Vec<&str> {
        list.entries().iter().map(|e| e.id.as_str()).collect()
    }

    fn list_of(ids: &[&str]) -> DealList {
        let mut list = DealList::new();
        list.add_placeholder();
        list.commit_replace(0, ids.iter().map(|id| entry(id)).collect());
        list
    }

    #[test]
    fn placeholder_has_sentinel_id_and_no_variants() {
        let mut list = DealList::new();
        list.add_placeholder();
        let row = list.get(0).unwrap();
        assert!(row.placeholder);
        assert_eq!(row.id.as_str(), PLACEHOLDER_ID);
        assert_eq!(row.title, PLACEHOLDER_TITLE);
        assert!(row.variants.is_empty());
    }

    #[test]
    fn move_is_a_single_splice_relocation() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        list.move_entry(0, 2);
        assert_eq!(ids(&list), ["b", "c", "a", "d"]);
        list.move_entry(3, 0);
        assert_eq!(ids(&list), ["d", "b", "c", "a"]);
    }

    #[test]
    fn moves_preserve_length_and_id_multiset() {
        let mut list = list_of(&["a", "b", "c", "d", "e"]);
        for (from, to) in [(0, 4), (2, 2), (4, 0), (1, 3), (3, 1)] {
            list.move_entry(from, to);
            assert_eq!(list.len(), 5);
            let mut seen = ids(&list);
            seen.sort();
            assert_eq!(seen, ["a", "b", "c", "d", "e"]);
        }
    }

    #[test]
    #[should_panic]
    fn move_out_of_range_is_a_programmer_error() {
        let mut list = DealList::new();
        list.add_placeholder();
        list.move_entry(0, 1);
    }

    #[test]
    fn remove_on_single_entry_list_empties_it() {
        let mut list = DealList::new();
        list.add_placeholder();
        list.remove(0);
        assert!(list.is_empty());
    }

    #[test]
    fn remove_variant_keeps_the_entry() {
        let mut list = DealList::new();
        list.add_placeholder();
        list.commit_replace(
            0,
            vec![DealEntry::for_product(
                ProductId::new("p1"),
                "Shirt",
                vec![variant("v1", "Small")],
            )],
        );
        list.remove_variant(0, 0);
        assert_eq!(list.len(), 1);
        assert!(list.get(0).unwrap().variants.is_empty());
    }

    #[test]
    fn commit_replace_substitutes_multiple_entries_for_one_slot() {
        let mut list = list_of(&["a", "b"]);
        list.add_placeholder();
        list.move_entry(2, 1);

        list.commit_replace(1, vec![entry("x"), entry("y")]);
        assert_eq!(ids(&list), ["a", "x", "y", "b"]);
    }

    #[test]
    fn commit_replace_with_nothing_removes_the_entry() {
        let mut list = DealList::new();
        list.add_placeholder();
        list.commit_replace(0, Vec::new());
        assert!(list.is_empty());
    }

    #[test]
    fn discount_lines_are_captured_verbatim() {
        let mut list = DealList::new();
        list.add_placeholder();
        list.commit_replace(
            0,
            vec![DealEntry::for_product(
                ProductId::new("p1"),
                "Shirt",
                vec![variant("v1", "Small")],
            )],
        );
        let discount = Discount {
            value: Some(Decimal::new(15, 0)),
            kind: DiscountKind::Flat,
        };
        list.set_entry_discount(0, discount.clone());
        list.set_variant_discount(0, 0, discount.clone());
        assert_eq!(list.get(0).unwrap().discount, discount);
        assert_eq!(list.get(0).unwrap().variants[0].discount, discount);
    }
}
