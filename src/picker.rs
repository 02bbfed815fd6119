//! Transient state for an open product picker session.
//!
//! Everything here is created when a picker opens and discarded when it
//! closes; nothing persists across sessions.

pub mod cache;
pub mod selection;
pub mod session;

pub use cache::{CachedProduct, CachedVariant, ResultCache};
pub use selection::{Pick, ProductCheckState, SelectionSet};
pub use session::{PickerSession, SCROLL_FETCH_THRESHOLD_PX, SEARCH_DEBOUNCE};
