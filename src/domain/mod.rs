pub mod columns;
pub mod decimal;
pub mod filter;
pub mod offer;
pub mod store;

pub use columns::{ColumnVisibility, COLUMNS};
pub use filter::{filter_offers, StructuredFilters};
pub use offer::{Offer, OfferField, OfferForm};
pub use store::OfferStore;
