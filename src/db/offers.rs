// src/db/offers.rs
use crate::db::local::{keys, LocalStorage};
use crate::domain::offer::Offer;
use crate::errors::StorageError;

/// Whole-list persistence for the offer store.
pub trait OfferRepository {
    /// Stored offers, or an empty list when nothing can be read.
    fn load(&self) -> Vec<Offer>;
    fn save(&self, offers: &[Offer]) -> Result<(), StorageError>;
}

impl OfferRepository for LocalStorage {
    fn load(&self) -> Vec<Offer> {
        self.get(keys::OFFERS, Vec::new())
    }

    fn save(&self, offers: &[Offer]) -> Result<(), StorageError> {
        self.try_set(keys::OFFERS, offers)
    }
}
